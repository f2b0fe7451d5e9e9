//! The `{success, data, error}` response envelope shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Backend response envelope.
///
/// Every operation must tolerate `success: false` and a missing `data`
/// field: the error message is surfaced (or a caller-supplied fallback when
/// the backend sent none), never a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, surfacing the backend error or `fallback`.
    pub fn into_result(self, fallback: &str) -> Result<T, String> {
        let error = || self.error.clone().unwrap_or_else(|| fallback.to_string());
        if !self.success {
            return Err(error());
        }
        match self.data {
            Some(data) => Ok(data),
            // success without a payload is a malformed response
            None => Err(error()),
        }
    }
}
