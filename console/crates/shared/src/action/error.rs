//! Action Error - Unified error type for the action layer
//!
//! Defines [`ActionError`] and the [`ActionResult<T>`] type alias.

use std::borrow::Cow;

use thiserror::Error;

/// Action-layer error
///
/// The UI-facing simplification of an upstream failure: only a message
/// survives. Status codes are a transport concern and are dropped when a
/// failure crosses the action boundary.
///
/// ## Examples
/// ```rust
/// use shared::action::error::ActionError;
///
/// let err = ActionError::new("Translator not found");
/// assert_eq!(err.message(), "Translator not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ActionError {
    message: Cow<'static, str>,
}

/// Action result type alias
///
/// `Result<T, ActionError>`: the uniform outcome of every server action.
pub type ActionResult<T> = Result<T, ActionError>;

impl ActionError {
    /// Create a new action error
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the user-facing message
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for ActionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&'static str> for ActionError {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = ActionError::new("Series not found");
        assert_eq!(err.message(), "Series not found");
        assert_eq!(err.to_string(), "Series not found");
    }

    #[test]
    fn test_from_string() {
        let err: ActionError = String::from("backend said no").into();
        assert_eq!(err.message(), "backend said no");
    }

    #[test]
    fn test_action_result_alias() {
        fn find(id: u32) -> ActionResult<&'static str> {
            if id == 0 {
                return Err(ActionError::new("not found"));
            }
            Ok("found")
        }

        assert!(find(1).is_ok());
        assert!(find(0).is_err());
    }
}
