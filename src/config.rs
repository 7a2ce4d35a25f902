//! Configuration for the Freshservice client.
//!
//! A [`Config`] carries everything [`Client::new`](crate::client::Client::new)
//! needs: the account domain, the API key, an optional username, the
//! transport timeout and whether to speak plain HTTP (for local mock
//! servers). It can be built in code or loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{attributes, FreshserviceError};

/// Timeout applied to the default HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Configuration for connecting to Freshservice.
///
/// The API key is stored but never logged or included in error messages.
#[derive(Clone)]
pub struct Config {
    /// Account domain without scheme (e.g., `acme.freshservice.com`).
    pub domain: String,

    /// API key used as the Basic auth username.
    /// This value must never be logged or included in error messages.
    pub api_key: String,

    /// Optional account username. Validated when present.
    pub username: Option<String>,

    /// Request timeout for the default transport.
    pub timeout: Duration,

    /// Use `http://` instead of `https://`. Only meant for local test servers.
    pub insecure: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("domain", &self.domain)
            .field("api_key", &"[REDACTED]")
            .field("username", &self.username)
            .field("timeout", &self.timeout)
            .field("insecure", &self.insecure)
            .finish()
    }
}

impl Config {
    /// Creates a configuration for the given domain and API key.
    ///
    /// The domain may include an `https://` or `http://` prefix; it is
    /// stripped. Values are checked when the client is built.
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            domain: strip_url_scheme(&domain.into()),
            api_key: api_key.into(),
            username: None,
            timeout: DEFAULT_TIMEOUT,
            insecure: false,
        }
    }

    /// Sets the account username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Overrides the default transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends requests over plain HTTP. Intended for mock servers in tests.
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FRESHSERVICE_DOMAIN` (required): account domain
    /// - `FRESHSERVICE_API_KEY` (required): API key
    /// - `FRESHSERVICE_USERNAME` (optional): account username
    /// - `FRESHSERVICE_TIMEOUT_SECS` (optional): transport timeout in seconds
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::MissingConfig` if a required value is
    /// empty or absent, and `FreshserviceError::Config` if the timeout is
    /// not a positive integer.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, FreshserviceError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a configuration from any variable source, e.g. a parsed file
    /// or a fixed map in tests. Same rules as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FreshserviceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let domain = get("FRESHSERVICE_DOMAIN").unwrap_or_default();
        let api_key = get("FRESHSERVICE_API_KEY").unwrap_or_default();

        let mut config = Config::new(domain, api_key);

        if let Some(username) = get("FRESHSERVICE_USERNAME") {
            config = config.with_username(username);
        }

        if let Some(raw) = get("FRESHSERVICE_TIMEOUT_SECS") {
            config = config.with_timeout(Self::parse_timeout(&raw)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks that every required attribute is present.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::MissingConfig` naming the first empty
    /// attribute, in the order domain, username, API key.
    pub fn validate(&self) -> Result<(), FreshserviceError> {
        if self.domain.trim().is_empty() {
            return Err(FreshserviceError::missing_config(attributes::DOMAIN));
        }

        if let Some(username) = &self.username {
            if username.trim().is_empty() {
                return Err(FreshserviceError::missing_config(attributes::USERNAME));
            }
        }

        if self.api_key.trim().is_empty() {
            return Err(FreshserviceError::missing_config(attributes::API_KEY));
        }

        Ok(())
    }

    /// URL scheme requests are sent with.
    pub fn scheme(&self) -> &'static str {
        if self.insecure {
            "http"
        } else {
            "https"
        }
    }

    fn parse_timeout(raw: &str) -> Result<Duration, FreshserviceError> {
        match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(FreshserviceError::invalid_config(
                "FRESHSERVICE_TIMEOUT_SECS must be a positive number of seconds",
            )),
        }
    }
}

/// Removes a leading `https://` or `http://` and any trailing slash.
fn strip_url_scheme(domain: &str) -> String {
    let domain = domain.trim();
    let domain = domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain);
    domain.trim_end_matches('/').to_string()
}
