//! The request dispatcher: builds, executes, and decodes API calls.
//!
//! The [`Client`] type is the entry point. Every resource handle routes its
//! calls through [`Client::call`], which owns the full pipeline: prefix the
//! relative path with the base endpoint, attach the encoded query and bearer
//! credential, execute exactly one HTTP round-trip, then decode either the
//! typed payload or the structured API error.

use crate::{
    codec,
    error::ApiError,
    metadata::RequestMetadata,
    resources::{
        BoardResource, MediaResource, PinResource, SearchResource, TermsResource,
        UserAccountResource,
    },
    Error, Response, Result,
};
use http::{header, HeaderMap, HeaderName, HeaderValue, Method};
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// The production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.pinterest.com/v5";

/// An asynchronous client for the Pinterest REST API v5.
///
/// The client is cheap to clone and designed to be shared: it holds the base
/// endpoint, the bearer credential, and a pooled `reqwest` transport behind an
/// `Arc`, and carries no mutable per-call state, so concurrent calls from
/// multiple tasks are safe.
///
/// # Examples
///
/// ```no_run
/// use pinterest_api::Client;
///
/// # async fn example() -> Result<(), pinterest_api::Error> {
/// let client = Client::new("my-access-token")?;
///
/// let account = client.user_account().get(None).await?;
/// println!("logged in as {:?}", account.username);
///
/// let board = client.boards().get("615668985984").await?;
/// println!("board: {:?}", board.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl Client {
    /// Creates a client for the production endpoint with the given bearer
    /// token. Use [`Client::builder`] for anything more elaborate.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::builder().bearer_token(access_token).build()
    }

    /// Creates a new [`ClientBuilder`] for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Executes one API call end-to-end.
    ///
    /// This is the single dispatch path every verb wrapper and resource
    /// handle funnels through. It performs exactly one HTTP round-trip: no
    /// retries, no caching, no mutation of client state.
    ///
    /// # Type Parameters
    ///
    /// * `Req` - The JSON body type (use `()` with `body: None` for GET/DELETE)
    /// * `Res` - The payload type to decode a 2xx response into
    pub async fn call<Req, Res>(
        &self,
        metadata: RequestMetadata,
        body: Option<&Req>,
    ) -> Result<Response<Res>>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let start_time = Instant::now();

        let response = self.execute_request(&metadata, body).await;
        let result = match response {
            Ok(response) => {
                let latency = start_time.elapsed();
                self.parse_response(response, latency).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::warn!(
                error = %e,
                method = %metadata.method,
                path = %metadata.path,
                "Request failed"
            );
        }

        result
    }

    /// Like [`call`](Self::call), but aborts when `cancel` resolves first.
    ///
    /// On cancellation the in-flight request future is dropped, which makes
    /// the transport abort the request and release its connection, and
    /// [`Error::Cancelled`] is returned. No partial result is observable.
    pub async fn call_with_cancel<Req, Res, C>(
        &self,
        metadata: RequestMetadata,
        body: Option<&Req>,
        cancel: C,
    ) -> Result<Response<Res>>
    where
        Req: Serialize,
        Res: DeserializeOwned,
        C: Future<Output = ()>,
    {
        let method = metadata.method.clone();
        let path = metadata.path.clone();

        tokio::select! {
            biased;
            _ = cancel => {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    "Request cancelled by caller"
                );
                Err(Error::Cancelled)
            }
            result = self.call(metadata, body) => result,
        }
    }

    /// Builds the absolute request URL from the base endpoint and a relative
    /// path, preserving any path prefix in the base (e.g. `/v5`).
    fn build_url(&self, metadata: &RequestMetadata) -> Result<Url> {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        let path = &metadata.path;
        let mut url = if path.starts_with('/') {
            Url::parse(&format!("{}{}", base, path))?
        } else {
            Url::parse(&format!("{}/{}", base, path))?
        };
        url.set_query(metadata.query.as_deref());
        Ok(url)
    }

    /// Builds and sends the HTTP request.
    async fn execute_request<Req>(
        &self,
        metadata: &RequestMetadata,
        body: Option<&Req>,
    ) -> Result<reqwest::Response>
    where
        Req: Serialize,
    {
        let url = self.build_url(metadata)?;

        tracing::debug!(
            method = %metadata.method,
            url = %url,
            "Executing HTTP request"
        );

        let mut request = self.inner.http_client.request(metadata.method.clone(), url);

        for (name, value) in &self.inner.default_headers {
            request = request.header(name, value);
        }

        for (name, value) in &metadata.headers {
            request = request.header(name, value);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            let json = codec::encode_body(body)?;
            request = request.json(&json);
        }

        let response = request.send().await?;

        Ok(response)
    }

    /// Decodes the response into a typed [`Response`], or routes a non-2xx
    /// body through the error decoder.
    async fn parse_response<Res>(
        &self,
        response: reqwest::Response,
        latency: Duration,
    ) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let status = response.status();
        let headers = response.headers().clone();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        if !status.is_success() {
            let raw_body = response.text().await.unwrap_or_default();

            if status.is_client_error() {
                tracing::error!(
                    status = status.as_u16(),
                    response = %raw_body,
                    "Client error (4xx)"
                );
            } else if status.is_server_error() {
                tracing::warn!(
                    status = status.as_u16(),
                    response = %raw_body,
                    "Server error (5xx)"
                );
            }

            return Err(Error::Api(ApiError::decode(status, &raw_body)));
        }

        let raw_body = response.text().await?;

        // 204-style responses have no body; decode them as JSON null so `()`
        // and Option destinations succeed.
        let to_decode = if raw_body.trim().is_empty() {
            "null"
        } else {
            raw_body.as_str()
        };

        match serde_json::from_str::<Res>(to_decode) {
            Ok(data) => Ok(Response::new(data, raw_body, status, headers, latency)),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    raw_response = %raw_body,
                    "Failed to decode response"
                );

                Err(Error::Decode {
                    raw_body,
                    serde_error: e.to_string(),
                    status,
                })
            }
        }
    }

    /// Makes a GET request to the specified path.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pinterest_api::Client;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Board {
    ///     name: Option<String>,
    /// }
    ///
    /// # async fn example() -> Result<(), pinterest_api::Error> {
    /// let client = Client::new("token")?;
    ///
    /// let board: pinterest_api::Response<Board> = client.get("/boards/123").await?;
    /// println!("Board: {:?}", board.data.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<Res>(&self, path: impl Into<String>) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::GET, path);
        self.call::<(), Res>(metadata, None).await
    }

    /// Makes a GET request with a typed query-options struct.
    ///
    /// Absent optional fields are omitted from the query string entirely.
    pub async fn get_with_query<Q, Res>(
        &self,
        path: impl Into<String>,
        query: &Q,
    ) -> Result<Response<Res>>
    where
        Q: Serialize,
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::GET, path).with_query(query)?;
        self.call::<(), Res>(metadata, None).await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post<Req, Res>(&self, path: impl Into<String>, body: &Req) -> Result<Response<Res>>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::POST, path);
        self.call(metadata, Some(body)).await
    }

    /// Makes a PATCH request with a JSON body.
    ///
    /// Only fields present in `body` are sent; absent optional fields are
    /// omitted, so the server treats them as "not specified" rather than
    /// "explicitly cleared".
    pub async fn patch<Req, Res>(
        &self,
        path: impl Into<String>,
        body: &Req,
    ) -> Result<Response<Res>>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::PATCH, path);
        self.call(metadata, Some(body)).await
    }

    /// Makes a DELETE request to the specified path.
    ///
    /// Success responses carry no payload.
    pub async fn delete(&self, path: impl Into<String>) -> Result<Response<()>> {
        let metadata = RequestMetadata::new(Method::DELETE, path);
        self.call::<(), ()>(metadata, None).await
    }

    /// Returns a handle to the Boards API.
    pub fn boards(&self) -> BoardResource {
        BoardResource::new(self.clone())
    }

    /// Returns a handle to the Pins API.
    pub fn pins(&self) -> PinResource {
        PinResource::new(self.clone())
    }

    /// Returns a handle to the Media API.
    pub fn media(&self) -> MediaResource {
        MediaResource::new(self.clone())
    }

    /// Returns a handle to the Search API.
    pub fn search(&self) -> SearchResource {
        SearchResource::new(self.clone())
    }

    /// Returns a handle to the Terms API.
    pub fn terms(&self) -> TermsResource {
        TermsResource::new(self.clone())
    }

    /// Returns a handle to the User Account API.
    pub fn user_account(&self) -> UserAccountResource {
        UserAccountResource::new(self.clone())
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use pinterest_api::ClientBuilder;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), pinterest_api::Error> {
/// let client = ClientBuilder::new()
///     .bearer_token("my-access-token")
///     .timeout(Duration::from_secs(30))
///     .default_header("User-Agent", "my-app/1.0")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    bearer_token: Option<String>,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` targeting [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self {
            base_url: None,
            bearer_token: None,
            default_headers: HeaderMap::new(),
            timeout: None,
        }
    }

    /// Overrides the base URL. Mainly useful for sandboxes and test servers.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Sets the bearer credential attached to every request.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Adds a default header included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the per-request timeout. Timeouts surface as
    /// [`Error::Transport`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if no bearer token was provided or the transport
    /// cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let token = self
            .bearer_token
            .ok_or_else(|| Error::Configuration("Bearer token is required".to_string()))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut default_headers = self.default_headers;
        let mut auth = HeaderValue::try_from(format!("Bearer {}", token))
            .map_err(|e| Error::Configuration(format!("Invalid bearer token: {}", e)))?;
        auth.set_sensitive(true);
        default_headers.insert(header::AUTHORIZATION, auth);

        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                default_headers,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
