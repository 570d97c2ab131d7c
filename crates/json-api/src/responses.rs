//! Action response envelope.
//!
//! Basket endpoints answer with `{ success, data?, message?, error? }` on
//! success and on domain failure alike; the HTTP status tells them apart.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ActionResponse<T> {
    /// Whether the action succeeded
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Human-readable failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResponse<T> {
    pub(crate) fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub(crate) fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub(crate) fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, to_value};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn success_omits_error() -> TestResult {
        let body = to_value(ActionResponse::ok(3).with_message("done"))?;

        assert_eq!(body, json!({ "success": true, "data": 3, "message": "done" }));

        Ok(())
    }

    #[test]
    fn failure_omits_data() -> TestResult {
        let body = to_value(ActionResponse::<u32>::failure("Basket not found"))?;

        assert_eq!(body, json!({ "success": false, "error": "Basket not found" }));

        Ok(())
    }
}
