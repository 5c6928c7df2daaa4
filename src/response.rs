//! Response wrapper that preserves both parsed data and raw response details.
//!
//! The [`Response`] type wraps the deserialized payload along with the HTTP
//! status, headers, raw body, and latency, so callers using [`crate::Client`]
//! directly keep access to the full transaction for debugging.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A wrapper around a successful HTTP response.
///
/// Resource handles unwrap this to the plain payload; use the `Client` verb
/// methods directly when the raw body or headers matter.
///
/// # Examples
///
/// ```no_run
/// use pinterest_api::Client;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Board {
///     id: Option<String>,
///     name: Option<String>,
/// }
///
/// # async fn example() -> Result<(), pinterest_api::Error> {
/// let client = Client::new("token")?;
///
/// let response = client.get::<Board>("/boards/615668985984").await?;
///
/// println!("Board: {:?}", response.data.name);
/// println!("Request took {:?}", response.latency);
/// if response.latency > std::time::Duration::from_secs(1) {
///     println!("slow response body: {}", response.raw_body);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The deserialized response payload.
    pub data: T,

    /// The raw response body as a string, exactly as the server sent it.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from dispatching the request to receiving the response.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Consumes the response, returning just the payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Maps the payload to a different type, preserving the metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pinterest_api::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     42,
    ///     "42".to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// let string_response = response.map(|n| n.to_string());
    /// assert_eq!(string_response.data, "42");
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Returns a header value by name, if present and valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pinterest_api::Response;
    /// # use http::{HeaderMap, StatusCode, HeaderValue};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = Response::new(
    ///     (),
    ///     String::new(),
    ///     StatusCode::OK,
    ///     headers,
    ///     Duration::from_millis(100),
    /// );
    ///
    /// assert_eq!(
    ///     response.header("content-type").unwrap(),
    ///     "application/json"
    /// );
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
