//! HTTP client for the Freshservice v2 API.
//!
//! This module provides the [`Client`] struct and the request pipeline every
//! resource accessor goes through:
//!
//! 1. the accessor builds an [`ApiRequest`] (method, URL, optional JSON body)
//! 2. the pipeline decorates it with the fixed headers and Basic auth
//! 3. the request is dispatched exactly once
//! 4. the response is classified by status and decoded
//! 5. the next-page token is read from the `Link` header
//!
//! # Retries
//!
//! There are none. Every error is returned to the caller, and the same
//! client can be reused after a failed call.
//!
//! # Security
//!
//! The API key is sent as the Basic auth username (with `x` as password)
//! and is never logged.

use reqwest::header::{
    HeaderValue, ACCEPT, CACHE_CONTROL, CONTENT_TYPE, STRICT_TRANSPORT_SECURITY,
};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::error::FreshserviceError;
use crate::filter::QueryFilter;
use crate::models::ErrorResponse;
use crate::pagination::next_page_token;
use crate::services::{
    Agents, Announcements, Applications, Assets, BusinessHoursService, ServiceCatalog, Tasks,
    Tickets,
};

/// Path prefix of every v2 endpoint.
const API_PATH: &str = "/api/v2";

/// The Accept header value for the Freshservice API.
const ACCEPT_JSON: &str = "application/json";

/// Cache-Control directive sent with every request.
const NO_CACHE: &str = "no-store, no-cache, must-revalidate, max-age=0, post-check=0, pre-check=0";

/// Strict-Transport-Security directive sent with every request.
const HSTS: &str = "max-age=31536000 ; includeSubDomains";

/// Freshservice expects the API key as username and this literal as password.
const BASIC_AUTH_PASSWORD: &str = "x";

/// Longest slice of an undecodable error body kept in the error message.
const MAX_BODY_EXCERPT: usize = 512;

/// HTTP client for the Freshservice API.
///
/// Cloning is cheap and clones share the underlying connection pool, so one
/// client can serve any number of concurrent callers.
///
/// # Example
///
/// ```ignore
/// let config = Config::new("acme.freshservice.com", api_key);
/// let client = Client::new(&config)?;
///
/// let page = client.agents().list(None).await?;
/// ```
#[derive(Clone)]
pub struct Client {
    /// The underlying HTTP client (cloning is cheap).
    http: reqwest::Client,

    /// Account domain without scheme.
    domain: String,

    /// `https`, or `http` when the config asks for an insecure transport.
    scheme: &'static str,

    /// API key for authentication.
    /// SECURITY: Never log this value!
    api_key: String,

    /// Optional account username. Validated at construction and reported by
    /// [`Client::username`]; it is not sent, since Freshservice authenticates
    /// by API key alone.
    username: Option<String>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("domain", &self.domain)
            .field("scheme", &self.scheme)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client with a default transport.
    ///
    /// The transport uses the configured timeout (five minutes unless
    /// overridden). No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::MissingConfig` if the domain, username or
    /// API key is empty, and `FreshserviceError::HttpClient` if the
    /// transport fails to initialize.
    pub fn new(config: &Config) -> Result<Self, FreshserviceError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FreshserviceError::HttpClient)?;

        Ok(Self::from_parts(config, http))
    }

    /// Creates a new client on top of a caller-supplied transport.
    ///
    /// The transport's own timeout applies; `config.timeout` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::MissingConfig` if a required attribute is empty.
    pub fn with_http_client(
        config: &Config,
        http: reqwest::Client,
    ) -> Result<Self, FreshserviceError> {
        config.validate()?;
        Ok(Self::from_parts(config, http))
    }

    fn from_parts(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            domain: config.domain.clone(),
            scheme: config.scheme(),
            api_key: config.api_key.clone(),
            username: config.username.clone(),
        }
    }

    /// The account domain requests are sent to.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The account username, if one was configured.
    ///
    /// Informational only. Requests authenticate with the API key.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Builds the URL for an API path, attaching the filter's query string.
    ///
    /// `path` is relative to `/api/v2` (e.g. `tickets/42`). A missing filter,
    /// or one that renders to an empty string, leaves the URL without a query.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::InvalidUrl` if the domain does not form a
    /// valid URL.
    pub fn endpoint(
        &self,
        path: &str,
        filter: Option<&dyn QueryFilter>,
    ) -> Result<Url, FreshserviceError> {
        let mut url = Url::parse(&format!(
            "{}://{}{}/{}",
            self.scheme,
            self.domain,
            API_PATH,
            path.trim_start_matches('/')
        ))?;

        let query = filter
            .map(|f| f.query_string())
            .filter(|query| !query.is_empty());
        url.set_query(query.as_deref());

        Ok(url)
    }

    /// Sends a request and decodes its JSON body into `T`.
    ///
    /// Bodies are decoded only for `200 OK` and `201 Created`; any other
    /// success status yields `FreshserviceError::EmptyBody`.
    ///
    /// # Errors
    ///
    /// - `Transport` if the request could not be delivered
    /// - `NotFound` for a 404 (the body is not read)
    /// - `Api` for other non-2xx statuses with a structured error body,
    ///   `ErrorBody` when that body cannot be decoded
    /// - `Decode` if a 200/201 body does not match `T`
    pub async fn execute<T>(&self, request: ApiRequest) -> Result<ApiResponse<T>, FreshserviceError>
    where
        T: DeserializeOwned,
    {
        let method = request.method.clone();
        let url = request.url.to_string();

        let response = self.dispatch(request).await?;
        let status = response.status();
        let next_page = next_page_token(response.headers());

        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(FreshserviceError::EmptyBody { status });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::debug!(error = %e, method = %method, "Failed to read response body");
            FreshserviceError::Transport {
                method: method.clone(),
                url: url.clone(),
            }
        })?;

        tracing::trace!(body = %String::from_utf8_lossy(&body), "Freshservice API response");

        let data = serde_json::from_slice(&body)
            .map_err(|source| FreshserviceError::Decode { status, source })?;

        Ok(ApiResponse { data, next_page })
    }

    /// Sends a request whose response body is not needed (e.g. deletes).
    ///
    /// Returns the next-page token of the response, usually empty.
    ///
    /// # Errors
    ///
    /// Same classification as [`execute`](Self::execute), minus decoding.
    pub async fn execute_empty(&self, request: ApiRequest) -> Result<String, FreshserviceError> {
        let response = self.dispatch(request).await?;
        Ok(next_page_token(response.headers()))
    }

    /// Decorates, sends and classifies a request.
    ///
    /// Returns the response only when its status is 2xx.
    async fn dispatch(&self, request: ApiRequest) -> Result<Response, FreshserviceError> {
        let ApiRequest { method, url, body } = request;

        tracing::debug!(
            method = %method,
            path = %url.path(),
            "Making Freshservice API request"
        );

        let mut req = self
            .http
            .request(method.clone(), url.clone())
            .header(ACCEPT, HeaderValue::from_static(ACCEPT_JSON))
            .header(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE))
            .header(STRICT_TRANSPORT_SECURITY, HeaderValue::from_static(HSTS))
            .basic_auth(&self.api_key, Some(BASIC_AUTH_PASSWORD));

        if let Some(body) = body {
            req = req
                .header(CONTENT_TYPE, HeaderValue::from_static(ACCEPT_JSON))
                .body(body);
        }

        match Classified::from_result(req.send().await) {
            Classified::Success(response) => Ok(response),
            Classified::NotFound => Err(FreshserviceError::NotFound {
                method,
                url: url.to_string(),
            }),
            Classified::Failure(response) => Err(Self::api_error(method, url, response).await),
            Classified::TransportFailure(e) => {
                tracing::debug!(error = %e, method = %method, "Freshservice request failed");
                Err(FreshserviceError::Transport {
                    method,
                    url: url.to_string(),
                })
            }
        }
    }

    /// Converts a non-2xx response into an API error.
    async fn api_error(method: Method, url: Url, response: Response) -> FreshserviceError {
        let status = response.status();

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                return FreshserviceError::ErrorBody {
                    status,
                    reason: format!("unable to read response body: {}", e),
                }
            }
        };

        tracing::trace!(body = %String::from_utf8_lossy(&body), "Freshservice error response");

        match serde_json::from_slice::<ErrorResponse>(&body) {
            Ok(payload) => {
                tracing::warn!(
                    status = %status,
                    method = %method,
                    path = %url.path(),
                    description = %payload.description,
                    "Freshservice API returned an error"
                );
                FreshserviceError::Api {
                    status,
                    method,
                    url: url.to_string(),
                    payload,
                }
            }
            Err(e) => FreshserviceError::ErrorBody {
                status,
                reason: format!("{}; body: {}", e, body_excerpt(&body)),
            },
        }
    }

    // ========================================================================
    // Helpers used by the resource accessors
    // ========================================================================

    /// Makes a GET request and returns the decoded body with its next-page token.
    pub(crate) async fn get<T>(
        &self,
        path: &str,
        filter: Option<&dyn QueryFilter>,
    ) -> Result<ApiResponse<T>, FreshserviceError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, filter)?;
        self.execute(ApiRequest::new(Method::GET, url)).await
    }

    /// Makes a POST request with a JSON body.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, FreshserviceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, None)?;
        let request = ApiRequest::new(Method::POST, url).json(body)?;
        Ok(self.execute(request).await?.data)
    }

    /// Makes a PUT request with a JSON body.
    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, FreshserviceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, None)?;
        let request = ApiRequest::new(Method::PUT, url).json(body)?;
        Ok(self.execute(request).await?.data)
    }

    /// Makes a bodiless request whose response is decoded (e.g. agent deactivation).
    pub(crate) async fn send<T>(&self, method: Method, path: &str) -> Result<T, FreshserviceError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, None)?;
        Ok(self.execute(ApiRequest::new(method, url)).await?.data)
    }

    /// Makes a DELETE request and discards the response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), FreshserviceError> {
        let url = self.endpoint(path, None)?;
        self.execute_empty(ApiRequest::new(Method::DELETE, url))
            .await
            .map(|_| ())
    }

    // ========================================================================
    // Resource accessors
    // ========================================================================

    /// Ticket endpoints.
    pub fn tickets(&self) -> Tickets<'_> {
        Tickets::new(self)
    }

    /// Task endpoints (tasks belong to tickets).
    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(self)
    }

    /// Agent endpoints.
    pub fn agents(&self) -> Agents<'_> {
        Agents::new(self)
    }

    /// Announcement endpoints.
    pub fn announcements(&self) -> Announcements<'_> {
        Announcements::new(self)
    }

    /// Software application endpoints.
    pub fn applications(&self) -> Applications<'_> {
        Applications::new(self)
    }

    /// Asset endpoints.
    pub fn assets(&self) -> Assets<'_> {
        Assets::new(self)
    }

    /// Business hours endpoints.
    pub fn business_hours(&self) -> BusinessHoursService<'_> {
        BusinessHoursService::new(self)
    }

    /// Service catalog endpoints.
    pub fn service_catalog(&self) -> ServiceCatalog<'_> {
        ServiceCatalog::new(self)
    }
}

/// An outbound request: method, target URL and optional JSON body.
///
/// Built fresh for every call and consumed by [`Client::execute`] or
/// [`Client::execute_empty`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Creates a request without a body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
        }
    }

    /// Attaches a JSON-encoded body.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::Serialization` if `body` cannot be encoded.
    pub fn json<B>(mut self, body: &B) -> Result<Self, FreshserviceError>
    where
        B: Serialize + ?Sized,
    {
        let encoded = serde_json::to_vec(body).map_err(FreshserviceError::Serialization)?;
        self.body = Some(encoded);
        Ok(self)
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Encoded body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// A decoded successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// The decoded body.
    pub data: T,

    /// Next-page token from the `Link` header; empty on the last page.
    pub next_page: String,
}

/// Renders a response body for an error message, cut at [`MAX_BODY_EXCERPT`] characters.
fn body_excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "(empty)".to_string();
    }

    match text.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// How a dispatched request ended.
enum Classified {
    /// 2xx.
    Success(Response),
    /// 404; the response is dropped unread.
    NotFound,
    /// Any other status.
    Failure(Response),
    /// No response was received.
    TransportFailure(reqwest::Error),
}

impl Classified {
    fn from_result(result: Result<Response, reqwest::Error>) -> Self {
        match result {
            Err(e) => Classified::TransportFailure(e),
            Ok(response) => match response.status() {
                StatusCode::NOT_FOUND => Classified::NotFound,
                status if status.is_success() => Classified::Success(response),
                _ => Classified::Failure(response),
            },
        }
    }
}
