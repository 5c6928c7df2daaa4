//! Per-request descriptor types.

use crate::codec;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;

/// Describes a single API request: method, relative path, encoded query, and
/// any request-specific headers.
///
/// Built internally by the [`Client`](crate::Client) verb methods; constructed
/// directly only when a call needs extra headers or a hand-rolled query.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// The HTTP method (GET, POST, etc.).
    pub method: Method,

    /// The request path, relative to the base URL.
    pub path: String,

    /// The URL-encoded query string, if any.
    pub query: Option<String>,

    /// Additional headers for this request.
    pub headers: HeaderMap,
}

impl RequestMetadata {
    /// Creates a new `RequestMetadata` with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            headers: HeaderMap::new(),
        }
    }

    /// Encodes `params` as the request's query string.
    ///
    /// Absent optional fields are omitted entirely, so the server sees
    /// "field not specified" rather than an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`](crate::Error::Encoding) if the struct
    /// cannot be URL-encoded.
    pub fn with_query<T: Serialize>(mut self, params: &T) -> Result<Self, crate::Error> {
        self.query = codec::encode_query(params)?;
        Ok(self)
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, crate::Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }
}
