//! Error types for Pinterest API calls.
//!
//! Every failure mode of a call is a distinct, inspectable variant of [`Error`].
//! Server-side rejections (non-2xx responses) carry a decoded [`ApiError`] so
//! callers can branch on the machine-readable code, not just a message string.

use http::StatusCode;
use serde::Deserialize;

/// The main error type for Pinterest API calls.
///
/// A failed call yields exactly one of these variants; no partially decoded
/// result is ever surfaced alongside an error.
///
/// # Examples
///
/// ```no_run
/// use pinterest_api::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new("token")?;
///
/// match client.boards().get("615668985984").await {
///     Ok(board) => println!("Board: {:?}", board.name),
///     Err(Error::Api(api)) => {
///         eprintln!("API rejected the call ({}): {}", api.status, api.message);
///         if api.code.as_deref() == Some("NOT_FOUND") {
///             eprintln!("board does not exist");
///         }
///     }
///     Err(Error::Decode { raw_body, serde_error, .. }) => {
///         eprintln!("unexpected response shape: {}", serde_error);
///         eprintln!("raw body: {}", raw_body);
///     }
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be represented on the wire.
    ///
    /// Raised when a query-options struct cannot be URL-encoded or a body
    /// struct cannot be serialized to JSON. No request is sent.
    #[error("Failed to encode request: {0}")]
    Encoding(String),

    /// A transport-level failure: connection refused, DNS failure, TLS error,
    /// timeout. No usable HTTP response was obtained.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server returned a non-2xx status. See [`ApiError`].
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 2xx response body did not match the expected shape.
    ///
    /// This indicates a contract violation between client and server, not a
    /// rejected request. The raw body is preserved for debugging.
    #[error("Failed to decode response (status {status}): {serde_error}")]
    Decode {
        /// The raw response body that failed to decode
        raw_body: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code of the response
        status: StatusCode,
    },

    /// The caller aborted the call before it completed.
    ///
    /// Returned by [`Client::call_with_cancel`](crate::Client::call_with_cancel)
    /// when the cancel future resolves first; the in-flight request is dropped
    /// and its connection released.
    #[error("Request cancelled")]
    Cancelled,

    /// Invalid client configuration (bad header value, missing token, etc.).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An invalid URL was provided.
    ///
    /// Usually raised at construction time by
    /// [`ClientBuilder::base_url`](crate::ClientBuilder::base_url); also
    /// raised at dispatch time if a per-call path does not form a valid URL
    /// once joined to the base.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code if this error carries one.
    ///
    /// `Some(status)` for [`Error::Api`] and [`Error::Decode`], `None`
    /// otherwise.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(api) => Some(api.status),
            Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the machine-readable API error code, if the server sent one.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Api(api) => api.code.as_deref(),
            _ => None,
        }
    }
}

/// A structured error decoded from a non-2xx API response.
///
/// The HTTP status is always preserved; `code` and `message` come from the
/// server's error envelope when the body is parseable.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("API error {status}: {message}")]
pub struct ApiError {
    /// The HTTP status code of the failed response.
    pub status: StatusCode,
    /// The machine-readable error code, if the body carried one.
    pub code: Option<String>,
    /// The human-readable error message.
    pub message: String,
}

/// The error envelope the API uses: `{"code": ..., "message": ...}`.
///
/// `code` arrives as a string on newer endpoints and a number on older ones;
/// both normalize to a string.
#[derive(Deserialize)]
struct ErrorEnvelope {
    code: Option<serde_json::Value>,
    message: Option<String>,
}

impl ApiError {
    /// Decodes a failed response body into a structured error.
    ///
    /// Never fails: an unparseable body yields an error carrying the HTTP
    /// status and the raw body as its message (or the status' canonical
    /// reason when the body is empty).
    pub(crate) fn decode(status: StatusCode, body: &str) -> Self {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            if envelope.code.is_some() || envelope.message.is_some() {
                let code = envelope.code.map(|v| match v {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                });
                let message = envelope
                    .message
                    .unwrap_or_else(|| fallback_message(status, body));
                return ApiError {
                    status,
                    code,
                    message,
                };
            }
        }

        ApiError {
            status,
            code: None,
            message: fallback_message(status, body),
        }
    }
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

/// A specialized `Result` type for Pinterest API calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_envelope() {
        let err = ApiError::decode(
            StatusCode::NOT_FOUND,
            r#"{"code": "NOT_FOUND", "message": "no such board"}"#,
        );
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code.as_deref(), Some("NOT_FOUND"));
        assert_eq!(err.message, "no such board");
    }

    #[test]
    fn normalizes_numeric_codes() {
        let err = ApiError::decode(
            StatusCode::UNAUTHORIZED,
            r#"{"code": 2, "message": "Authentication failed."}"#,
        );
        assert_eq!(err.code.as_deref(), Some("2"));
        assert_eq!(err.message, "Authentication failed.");
    }

    #[test]
    fn unparseable_body_still_yields_status() {
        let err = ApiError::decode(StatusCode::BAD_GATEWAY, "<html>nope</html>");
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.code, None);
        assert_eq!(err.message, "<html>nope</html>");
    }

    #[test]
    fn empty_body_falls_back_to_canonical_reason() {
        let err = ApiError::decode(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(err.code, None);
        assert_eq!(err.message, "Service Unavailable");
    }

    #[test]
    fn envelope_without_message_keeps_code() {
        let err = ApiError::decode(StatusCode::FORBIDDEN, r#"{"code": "FORBIDDEN"}"#);
        assert_eq!(err.code.as_deref(), Some("FORBIDDEN"));
        assert_eq!(err.message, r#"{"code": "FORBIDDEN"}"#);
    }

    #[test]
    fn error_status_accessor() {
        let api = ApiError::decode(StatusCode::NOT_FOUND, "{}");
        let err = Error::Api(api);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.api_code(), None);

        assert_eq!(Error::Cancelled.status(), None);
    }
}
