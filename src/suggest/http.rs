//! HTTP suggestion endpoint client

use std::time::Duration;

use serde::Deserialize;

use super::FetchError;
use crate::config::SourceConfig;
use crate::texture::Texture;

/// Accepted response bodies: a bare list or a `{ "data": [...] }` envelope
#[derive(Deserialize)]
#[serde(untagged)]
enum SuggestionsBody {
    List(Vec<Texture>),
    Envelope { data: Vec<Texture> },
}

fn client_builder(timeout: Duration) -> reqwest::ClientBuilder {
    let builder = reqwest::Client::builder();
    if timeout.is_zero() {
        builder
    } else {
        builder.timeout(timeout)
    }
}

/// Client for a `GET <endpoint>?<param>=<query>` suggestion endpoint
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    query_param: String,
}

impl HttpClient {
    /// Create a client for `endpoint`
    ///
    /// A zero `timeout` means requests never time out.
    pub fn new(endpoint: &str, query_param: &str, timeout: Duration) -> Result<Self, FetchError> {
        Self::with_builder(endpoint, query_param, client_builder(timeout))
    }

    fn with_builder(
        endpoint: &str,
        query_param: &str,
        builder: reqwest::ClientBuilder,
    ) -> Result<Self, FetchError> {
        let endpoint = reqwest::Url::parse(endpoint)
            .map_err(|e| FetchError::NotConfigured(format!("invalid endpoint {:?}: {}", endpoint, e)))?;

        let client = builder
            .build()
            .map_err(|e| FetchError::NotConfigured(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            query_param: query_param.to_string(),
        })
    }

    /// Create a client from the `[source]` config section
    ///
    /// Returns `None` when no endpoint is set.
    pub fn from_config(config: &SourceConfig) -> Option<Result<Self, FetchError>> {
        let endpoint = config.endpoint.as_deref().filter(|e| !e.trim().is_empty())?;
        Some(Self::new(
            endpoint,
            &config.query_param,
            Duration::from_secs(config.timeout_secs),
        ))
    }

    /// URL requested for `query`
    pub fn request_url(&self, query: &str) -> reqwest::Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(&self.query_param, query);
        url
    }

    pub async fn fetch(&self, query: &str) -> Result<Vec<Texture>, FetchError> {
        let url = self.request_url(query);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .map(|body| body.trim().to_string())
                .filter(|body| !body.is_empty())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            return Err(FetchError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_suggestions(&body)
    }
}

/// Parse a suggestion response body
pub fn parse_suggestions(body: &str) -> Result<Vec<Texture>, FetchError> {
    match serde_json::from_str::<SuggestionsBody>(body) {
        Ok(SuggestionsBody::List(textures)) => Ok(textures),
        Ok(SuggestionsBody::Envelope { data }) => Ok(data),
        Err(e) => Err(FetchError::Parse(e.to_string())),
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
