//! Response-building failures.

use std::fmt::Display;

use salvo::prelude::StatusError;

/// Collapse a failure while assembling a response (headers, encoding) into a
/// logged 500. Domain errors go through each resource's `into_status_error`.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &'static str) -> Result<T, StatusError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_500(self, context: &'static str) -> Result<T, StatusError> {
        self.map_err(|error| {
            tracing::error!(%error, context, "failed to build response");

            StatusError::internal_server_error()
        })
    }
}
