//! Suggestion provider abstraction
//!
//! Defines the SuggestionProvider enum and the FetchError type.

use std::path::Path;
use std::time::Duration;

use thiserror::Error;

use super::catalog::Catalog;
use super::http::HttpClient;
use crate::config::SourceConfig;
use crate::error::TexsearchError;
use crate::texture::Texture;

/// Errors that can occur while fetching suggestions
///
/// The display string is what the widget renders after `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No usable source (bad endpoint, failed client setup)
    #[error("Suggestions not configured: {0}")]
    NotConfigured(String),

    /// Background fetch worker is no longer running
    #[error("Suggestion service stopped")]
    WorkerStopped,

    /// Transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Server error ({code}): {message}")]
    Status { code: u16, message: String },

    /// Body was not a texture list
    #[error("Malformed response: {0}")]
    Parse(String),
}

/// Suggestion source implementations
#[derive(Debug)]
pub enum SuggestionProvider {
    /// Remote endpoint queried over HTTP
    Http(HttpClient),
    /// Local texture list ranked by fuzzy match
    Catalog(Catalog),
}

impl SuggestionProvider {
    /// Choose the source for this run
    ///
    /// A catalog file wins over an endpoint; an endpoint given on the
    /// command line wins over the config file.
    pub fn select(
        catalog: Option<&Path>,
        endpoint: Option<&str>,
        config: &SourceConfig,
    ) -> Result<Self, TexsearchError> {
        if let Some(path) = catalog {
            let catalog = Catalog::from_file(path)?;
            log::debug!("Using catalog {} ({} textures)", path.display(), catalog.len());
            return Ok(SuggestionProvider::Catalog(catalog));
        }

        let client = match endpoint {
            Some(endpoint) => HttpClient::new(
                endpoint,
                &config.query_param,
                Duration::from_secs(config.timeout_secs),
            ),
            None => HttpClient::from_config(config).ok_or(TexsearchError::NoSource)?,
        };
        client
            .map(SuggestionProvider::Http)
            .map_err(|e| TexsearchError::Config(e.to_string()))
    }

    /// Fetch suggestions for `query`
    pub async fn fetch(&self, query: &str) -> Result<Vec<Texture>, FetchError> {
        match self {
            SuggestionProvider::Http(client) => client.fetch(query).await,
            SuggestionProvider::Catalog(catalog) => Ok(catalog.search(query)),
        }
    }

    /// Short label for the panel title
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionProvider::Http(_) => "remote",
            SuggestionProvider::Catalog(_) => "catalog",
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
