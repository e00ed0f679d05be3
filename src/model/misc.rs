//! Miscellaneous wire objects shared across API surfaces.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A structured error object as the API reports it, e.g. inside a
/// `connection.error` frame.
///
/// This is wire data, not a library error: decoding a frame that carries one
/// of these succeeds. Note the capitalized `StatusCode` wire key, which the
/// API uses as-is; the mapping is preserved rather than regularized.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ApiError {
    /// The platform's internal error code.
    pub code: i64,
    /// Server-side processing duration, as reported.
    pub duration: String,
    pub message: String,
    /// URL of the documentation page describing the error.
    pub more_info: String,
    #[serde(rename = "StatusCode")]
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception_fields: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrecoverable: Option<bool>,
}
