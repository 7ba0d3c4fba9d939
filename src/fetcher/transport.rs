//! HTTP transport for the fetch engine
//!
//! This module owns every network exchange:
//! - Building the HTTP client with the configured timeout
//! - Building the browser-context header sets for HTML and GraphQL requests
//! - GET of the catalog page and POST of GraphQL documents
//! - Classifying failures into transport errors
//!
//! Every exchange races the caller's cancellation token, so an abort takes
//! effect even while a request is in flight.

use crate::config::{queries, Config};
use crate::{ConfigError, KeywordError, Result};
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT,
};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Raw HTTP access used by the fetchers
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    html_headers: HeaderMap,
    graphql_headers: HeaderMap,
}

impl HttpTransport {
    /// Creates a transport from the HTTP and endpoint settings of `config`
    pub fn new(config: &Config) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            client: build_http_client(Duration::from_secs(config.http.timeout_secs))?,
            html_headers: html_headers(config)?,
            graphql_headers: graphql_headers(config)?,
        })
    }

    /// GETs `url` and returns the body as text
    pub async fn get_text(&self, url: &str, cancel: &CancellationToken) -> Result<String> {
        let request = self.client.get(url).headers(self.html_headers.clone());
        let response = cancellable(cancel, async {
            request.send().await.map_err(|e| classify_error(url, e))
        })
        .await?;
        let response = ensure_success(url, response)?;

        cancellable(cancel, async {
            response.text().await.map_err(|e| classify_error(url, e))
        })
        .await
    }

    /// POSTs `body` as JSON to `url` and decodes the response envelope
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<Value> {
        let request = self
            .client
            .post(url)
            .headers(self.graphql_headers.clone())
            .json(body);
        let response = cancellable(cancel, async {
            request.send().await.map_err(|e| classify_error(url, e))
        })
        .await?;
        let response = ensure_success(url, response)?;

        let text = cancellable(cancel, async {
            response.text().await.map_err(|e| classify_error(url, e))
        })
        .await?;

        serde_json::from_str(&text)
            .map_err(|e| KeywordError::schema(format!("invalid json from {}: {}", url, e)))
    }
}

/// Builds an HTTP client with the given per-request timeout
pub fn build_http_client(timeout: Duration) -> std::result::Result<Client, ConfigError> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(|e| ConfigError::Validation(format!("Failed to build HTTP client: {}", e)))
}

fn html_headers(config: &Config) -> std::result::Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, header_value(queries::HTML_ACCEPT)?);
    headers.insert(
        ACCEPT_LANGUAGE,
        header_value(&config.http.accept_language_html)?,
    );
    headers.insert(
        HeaderName::from_static("upgrade-insecure-requests"),
        HeaderValue::from_static("1"),
    );
    headers.insert(USER_AGENT, header_value(&config.http.html_user_agent)?);
    Ok(headers)
}

fn graphql_headers(config: &Config) -> std::result::Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT_LANGUAGE,
        header_value(&config.http.accept_language_graphql)?,
    );
    headers.insert(ORIGIN, header_value(&config.endpoints.origin)?);
    headers.insert(REFERER, header_value(&config.endpoints.referer)?);
    headers.insert(USER_AGENT, header_value(&config.http.graphql_user_agent)?);
    Ok(headers)
}

fn header_value(value: &str) -> std::result::Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value)
        .map_err(|_| ConfigError::Validation(format!("Invalid header value: '{}'", value)))
}

/// Runs `future` unless the token fires first
async fn cancellable<T>(
    cancel: &CancellationToken,
    future: impl Future<Output = Result<T>>,
) -> Result<T> {
    if cancel.is_cancelled() {
        return Err(KeywordError::Cancelled);
    }

    tokio::select! {
        _ = cancel.cancelled() => Err(KeywordError::Cancelled),
        result = future => result,
    }
}

fn ensure_success(url: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = %url, status = %status, "Request failed");
        return Err(KeywordError::Transport {
            url: url.to_string(),
            message: format!("HTTP status {}", status),
        });
    }
    Ok(response)
}

fn classify_error(url: &str, error: reqwest::Error) -> KeywordError {
    let message = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        format!("Connection failed: {}", error)
    } else {
        error.to_string()
    };

    tracing::warn!(url = %url, error = %message, "Request error");

    KeywordError::Transport {
        url: url.to_string(),
        message,
    }
}
