//! Console Actions
//!
//! Thin orchestration over the upstream seam. Every action resolves to an
//! [`ActionResult`], carrying only the failure message; transport detail
//! stays in the upstream layer where it is already logged.

pub mod announcement;
pub mod auth;
pub mod category;
pub mod dashboard;
pub mod novel;
pub mod translator;

use shared::action::error::{ActionError, ActionResult};
use upstream::envelope::ApiResult;

/// Collapse an upstream result into the action contract
pub(crate) fn reshape<T>(result: ApiResult<T>) -> ActionResult<T> {
    result.map_err(|err| ActionError::new(err.message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use upstream::envelope::ApiError;

    #[test]
    fn test_reshape_keeps_success() {
        let result: ApiResult<u32> = Ok(7);
        assert_eq!(reshape(result).unwrap(), 7);
    }

    #[test]
    fn test_reshape_drops_status_code() {
        let result: ApiResult<u32> = Err(ApiError::with_status("Session expired", 401));
        let err = reshape(result).unwrap_err();
        assert_eq!(err.message(), "Session expired");
    }

    #[test]
    fn test_reshape_is_message_only() {
        let result: ApiResult<u32> = Err(ApiError::no_response("Unable to complete request call."));
        let err: ActionError = reshape(result).unwrap_err();
        assert_eq!(err.message(), "Unable to complete request call.");
    }
}
