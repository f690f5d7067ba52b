//! Response decoding for the TCGdex protocol.
//!
//! TCGdex answers every successful request with `200 OK` and the target
//! document as the body, with no envelope. Every other status carries the
//! same structured [`ApiError`] body, so decoding only has to tell the two
//! apart.

use std::fmt;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{BodyKind, Error, Result};

/// A failure reported by the API itself.
///
/// Renders as `{type}:{title}:{status}:{endpoint}:{method}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error category, usually a URL such as `https://tcgdex.dev/errors/not-found`.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable summary.
    pub title: String,
    /// HTTP status code reported in the body.
    pub status: u16,
    /// The endpoint path that was requested.
    pub endpoint: String,
    /// The HTTP method that was used.
    pub method: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.error_type, self.title, self.status, self.endpoint, self.method
        )
    }
}

/// Decode a completed response body into `T`, or into an [`Error::Api`].
pub(crate) fn decode<T>(operation: &'static str, status: StatusCode, body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    if status != StatusCode::OK {
        let error: ApiError = serde_json::from_slice(body).map_err(|source| Error::Decode {
            operation,
            body: BodyKind::ErrorResponse,
            source,
        })?;
        tracing::warn!(operation, status = error.status, title = %error.title, "TCGdex returned an error");
        return Err(Error::Api { operation, error });
    }

    serde_json::from_slice(body).map_err(|source| Error::Decode {
        operation,
        body: BodyKind::Success,
        source,
    })
}
