//! Error types for the tcgdex crate.
//!
//! Every error produced by an API operation carries the name of the
//! operation that failed (for example `"fetch single card"`), so failures
//! from different call sites can be told apart.
//!
//! # Error Handling
//!
//! The errors you are most likely to see are:
//!
//! - [`Error::Api`]: TCGdex answered with a structured error (unknown card, bad filter)
//! - [`Error::Http`]: the request never completed (DNS, connection, timeout)
//! - [`Error::Decode`]: the response body did not have the expected shape
//!
//! # Example
//!
//! ```no_run
//! use tcgdex::{Error, TcgdexClient};
//!
//! # async fn example() -> tcgdex::Result<()> {
//! let client = TcgdexClient::new()?;
//!
//! match client.cards().get("swsh3-136").await {
//!     Ok(card) => println!("{} ({})", card.name, card.category),
//!     Err(Error::Api { error, .. }) if error.status == 404 => {
//!         eprintln!("no such card: {}", error.endpoint);
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use thiserror::Error;

use crate::response::ApiError;

/// Which response body failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// The body of a `200 OK` response.
    Success,
    /// The body of a non-success response, expected to be an [`ApiError`].
    ErrorResponse,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyKind::Success => f.write_str("response body"),
            BodyKind::ErrorResponse => f.write_str("error response"),
        }
    }
}

/// The error type for TCGdex operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request URL could not be built from the base URL and the inputs.
    ///
    /// Not retryable; the base URL or identifier has to change.
    #[error("{operation}: invalid URL: {source}")]
    InvalidUrl {
        operation: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// An identifier was empty, `.` or `..`, which cannot name a single resource.
    #[error("{operation}: invalid identifier {identifier:?}")]
    InvalidIdentifier {
        operation: &'static str,
        identifier: String,
    },

    /// HTTP/network error from reqwest.
    ///
    /// Covers connection failures, timeouts and errors while reading the
    /// response body. The client never retries; callers may.
    #[error("{operation}: {source}")]
    Http {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// TCGdex returned a non-success status with a structured error body.
    ///
    /// Displays as `type:title:status:endpoint:method`.
    #[error("{error}")]
    Api {
        operation: &'static str,
        error: ApiError,
    },

    /// A response body was not valid JSON of the expected shape.
    #[error("{operation}: decode {body}: {source}")]
    Decode {
        operation: &'static str,
        body: BodyKind,
        #[source]
        source: serde_json::Error,
    },

    /// Query options could not be serialized into a query string.
    #[error("{operation}: encode query: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration.
    ///
    /// The builder could not produce an HTTP transport.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// The name of the operation that failed, if the error came from one.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::InvalidUrl { operation, .. }
            | Error::InvalidIdentifier { operation, .. }
            | Error::Http { operation, .. }
            | Error::Api { operation, .. }
            | Error::Decode { operation, .. }
            | Error::Encode { operation, .. } => Some(operation),
            Error::Config(_) => None,
        }
    }

    /// The structured error reported by the API, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The HTTP status associated with this error, if known.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { error, .. } => Some(error.status),
            Error::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// A specialized Result type for TCGdex operations.
pub type Result<T> = std::result::Result<T, Error>;
