//! Error types for the Freshservice client.
//!
//! This module defines `FreshserviceError`, the single error type returned
//! by client construction, the request pipeline and every resource accessor.
//!
//! # Classification
//!
//! Callers can branch on the variant rather than on message text:
//!
//! - construction problems (`MissingConfig`, `Config`, `HttpClient`)
//! - the request never produced a response (`Transport`)
//! - the server answered 404 (`NotFound`)
//! - the server answered with another non-2xx status (`Api`, `ErrorBody`)
//! - the server answered 2xx but the body was unusable (`Decode`, `EmptyBody`)
//!
//! The API key is never part of any error message.

use reqwest::{Method, StatusCode};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Attribute names reported by [`FreshserviceError::MissingConfig`].
pub mod attributes {
    /// The Freshservice domain (e.g. `acme.freshservice.com`).
    pub const DOMAIN: &str = "domain";
    /// The API key used for Basic authentication.
    pub const API_KEY: &str = "API Key";
    /// The optional account username.
    pub const USERNAME: &str = "username";
}

/// Unified error type for all Freshservice operations.
#[derive(Error, Debug)]
pub enum FreshserviceError {
    /// A required client attribute was empty.
    #[error("a valid Freshservice {attribute} is required to create a new API client")]
    MissingConfig {
        /// Which attribute was missing: `domain`, `API Key` or `username`.
        attribute: &'static str,
    },

    /// Configuration could not be loaded (e.g. a malformed environment variable).
    #[error("configuration error: {0}")]
    Config(String),

    /// The default HTTP transport failed to initialize.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The endpoint URL could not be built from the configured domain.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request could not be delivered (DNS, connection refused, timeout).
    ///
    /// Only the method and URL are reported so the message shape stays stable.
    #[error("error making {method} request to {url}")]
    Transport {
        /// HTTP method of the failed request.
        method: Method,
        /// Target URL of the failed request.
        url: String,
    },

    /// The server answered 404.
    #[error("{method} {url} returned 404 not found")]
    NotFound {
        /// HTTP method of the request.
        method: Method,
        /// Target URL of the request.
        url: String,
    },

    /// The server answered with a non-2xx status and a structured error body.
    #[error("API request error: {status}: {payload}")]
    Api {
        /// The HTTP status code returned.
        status: StatusCode,
        /// HTTP method of the request.
        method: Method,
        /// Target URL of the request.
        url: String,
        /// The decoded error payload.
        payload: ErrorResponse,
    },

    /// The server answered with a non-2xx status whose body could not be decoded.
    #[error("API request error: {status}. unable to decode error response: {reason}")]
    ErrorBody {
        /// The HTTP status code returned.
        status: StatusCode,
        /// Why the body could not be used.
        reason: String,
    },

    /// The request succeeded but the body did not match the expected shape.
    #[error("API request was successful ({status}) but the response body could not be decoded: {source}")]
    Decode {
        /// The HTTP status code returned.
        status: StatusCode,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request succeeded with a status that carries no body to decode.
    #[error("API request was successful ({status}) but returned no body to decode")]
    EmptyBody {
        /// The HTTP status code returned.
        status: StatusCode,
    },

    /// Client-side validation failed before any request was made.
    #[error("validation error: {0}")]
    Validation(String),
}

impl FreshserviceError {
    /// Creates a missing-attribute construction error.
    pub fn missing_config(attribute: &'static str) -> Self {
        FreshserviceError::MissingConfig { attribute }
    }

    /// Creates a configuration error for a malformed value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshserviceError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        FreshserviceError::Validation(message.into())
    }

    /// Returns true if the server reported the resource as absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, FreshserviceError::NotFound { .. })
    }

    /// Returns the HTTP status associated with this error, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FreshserviceError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            FreshserviceError::Api { status, .. }
            | FreshserviceError::ErrorBody { status, .. }
            | FreshserviceError::Decode { status, .. }
            | FreshserviceError::EmptyBody { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns the structured error payload, if the server sent one.
    #[must_use]
    pub fn payload(&self) -> Option<&ErrorResponse> {
        match self {
            FreshserviceError::Api { payload, .. } => Some(payload),
            _ => None,
        }
    }
}
