//! Action Reply - serialized envelope handed to the console UI
//!
//! Every action response body is one of two shapes:
//! `{"success": true, "data": <T>}` or `{"success": false, "error": <msg>}`.

use serde::Serialize;
use serde::ser::SerializeStruct;

use super::error::{ActionError, ActionResult};

/// UI-facing reply envelope
///
/// Constructed from an [`ActionResult`]; serialization produces the uniform
/// two-armed shape the console UI branches on.
#[derive(Debug, Clone)]
pub enum ActionReply<T> {
    Success(T),
    Failure(String),
}

impl<T> ActionReply<T> {
    /// True for the success arm
    pub fn is_success(&self) -> bool {
        matches!(self, ActionReply::Success(_))
    }
}

impl<T> From<ActionResult<T>> for ActionReply<T> {
    fn from(result: ActionResult<T>) -> Self {
        match result {
            Ok(data) => ActionReply::Success(data),
            Err(err) => ActionReply::Failure(err.message().to_string()),
        }
    }
}

impl<T> From<ActionError> for ActionReply<T> {
    fn from(err: ActionError) -> Self {
        ActionReply::Failure(err.message().to_string())
    }
}

impl<T: Serialize> Serialize for ActionReply<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ActionReply::Success(data) => {
                let mut s = serializer.serialize_struct("ActionReply", 2)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("data", data)?;
                s.end()
            }
            ActionReply::Failure(error) => {
                let mut s = serializer.serialize_struct("ActionReply", 2)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("error", error)?;
                s.end()
            }
        }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ActionReply<T> {
    fn into_response(self) -> axum::response::Response {
        // Failures are data, not HTTP errors: the UI branches on the flag.
        axum::Json(self).into_response()
    }
}
