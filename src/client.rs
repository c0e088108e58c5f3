//! Module containing the main Chapa API client.

use crate::{
    apis::{banks::BanksApi, payments::PaymentsApi, transfers::TransfersApi, ChapaClientInner},
    common::DEFAULT_BASE_URL,
    middlewares::{
        authentication::AuthenticationMiddleware, inject_headers::InjectHeadersMiddleware,
    },
    Error,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use secrecy::Secret;
use std::{sync::Arc, time::Duration};

/// Timeout applied to every request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for Chapa public APIs.
///
/// Cloning is cheap: every clone shares the same underlying HTTP client and configuration.
/// Requests are never retried.
#[derive(Debug, Clone)]
pub struct ChapaClient {
    /// Payments APIs client.
    pub payments: PaymentsApi,
    /// Transfers APIs client.
    pub transfers: TransfersApi,
    /// Banks APIs client.
    pub banks: BanksApi,
}

impl ChapaClient {
    /// Builds a new [`ChapaClient`](crate::client::ChapaClient) with the default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<ChapaClient, Error> {
        ChapaClientBuilder::new(api_key).build()
    }

    /// Returns a new builder to configure a new [`ChapaClient`](crate::client::ChapaClient).
    pub fn builder(api_key: impl Into<String>) -> ChapaClientBuilder {
        ChapaClientBuilder::new(api_key)
    }
}

/// Builder for a [`ChapaClient`](crate::client::ChapaClient).
#[derive(Debug)]
pub struct ChapaClientBuilder {
    client: Option<reqwest::Client>,
    timeout: Duration,
    base_url: Option<Url>,
    api_key: Secret<String>,
}

impl ChapaClientBuilder {
    /// Creates a new builder to configure a [`ChapaClient`](crate::client::ChapaClient).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: None,
            timeout: DEFAULT_TIMEOUT,
            base_url: None,
            api_key: Secret::new(api_key.into()),
        }
    }

    /// Consumes the builder and builds a new [`ChapaClient`](crate::client::ChapaClient).
    pub fn build(self) -> Result<ChapaClient, Error> {
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .pool_max_idle_per_host(0)
                .build()?,
        };
        let base_url = match self.base_url {
            Some(base_url) => base_url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        tracing::debug!(%base_url, timeout = ?self.timeout, "Building Chapa client");

        let inner = Arc::new(ChapaClientInner {
            client: build_client_with_middleware(client, self.api_key),
            base_url,
        });

        Ok(ChapaClient {
            payments: PaymentsApi::new(inner.clone()),
            transfers: TransfersApi::new(inner.clone()),
            banks: BanksApi::new(inner),
        })
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// The timeout configured with [`with_timeout`](Self::with_timeout) and the connection pooling
    /// settings only apply to the default client: a custom client is used as-is.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the timeout of each request, from connection to the end of the response body.
    ///
    /// Defaults to 60 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the base URL all endpoints are resolved against.
    ///
    /// Defaults to: `https://api.chapa.co`
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    api_key: Secret<String>,
) -> ClientWithMiddleware {
    reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(InjectHeadersMiddleware::new())
        .with(AuthenticationMiddleware { api_key })
        .build()
}
