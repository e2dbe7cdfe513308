//! HTTP client for job board listing endpoints.

use jobstat_types::JobstatError;
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string. HeadHunter rejects requests without one.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("jobstat/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching listing pages.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure.
    #[error("{provider} request for {query:?} failed: {source}")]
    Http {
        /// Provider name.
        provider: &'static str,
        /// Search keyword being fetched.
        query: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Server returned a non-success status.
    #[error("{provider} returned HTTP {status} for {query:?}")]
    Status {
        /// Provider name.
        provider: &'static str,
        /// Search keyword being fetched.
        query: String,
        /// HTTP status code.
        status: u16,
    },

    /// Response body was not the expected JSON document.
    #[error("{provider} returned an unreadable response for {query:?}: {source}")]
    Decode {
        /// Provider name.
        provider: &'static str,
        /// Search keyword being fetched.
        query: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Returns the provider the failed request was addressed to, if any.
    #[must_use]
    pub const fn provider(&self) -> Option<&'static str> {
        match self {
            Self::Client(_) => None,
            Self::Http { provider, .. }
            | Self::Status { provider, .. }
            | Self::Decode { provider, .. } => Some(*provider),
        }
    }
}

impl From<FetchError> for JobstatError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err.to_string())
    }
}

/// HTTP client shared by all providers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Starts a `GET` request to `url`.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url)
    }

    /// Sends a request and decodes the JSON body.
    ///
    /// `provider` and `query` are only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, on any non-2xx status, or if
    /// the body does not decode into `T`. No retry is attempted.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        provider: &'static str,
        query: &str,
    ) -> Result<T, FetchError> {
        let request = request
            .build()
            .map_err(|e| http_error(provider, query, e))?;
        debug!("{provider}: GET {}", request.url());

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| http_error(provider, query, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                provider,
                query: query.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| http_error(provider, query, e))?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            provider,
            query: query.to_string(),
            source,
        })
    }
}

fn http_error(provider: &'static str, query: &str, source: reqwest::Error) -> FetchError {
    FetchError::Http {
        provider,
        query: query.to_string(),
        source,
    }
}
