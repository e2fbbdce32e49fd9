// src/fetch/fetcher.rs
// =============================================================================
// Downloads or reads a document and parses it into a dom::Document.
//
// One Fetcher holds one reqwest Client, which pools connections, so when
// several pages are analysed at once they all share it.
// =============================================================================

use std::time::Duration;

use reqwest::Client;
use tracing::info;

use super::{FetchError, Source};
use crate::dom::{parse_document, Document};

/// Settings for the HTTP side of fetching.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// Redirects followed before giving up
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_redirects: 5,
            user_agent: format!("web-analyser/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    // Fetches and parses whatever the source points at
    pub async fn fetch(&self, source: &Source) -> Result<Document, FetchError> {
        let html = match source {
            Source::Url(url) => self.fetch_url(url.as_str()).await?,
            Source::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| FetchError::Io {
                path: path.clone(),
                source: e,
            })?,
        };

        info!(source = %source, bytes = html.len(), "document retrieved");
        Ok(parse_document(&html))
    }

    // Same as fetch, for callers that have a raw string
    pub async fn fetch_str(&self, source: &str) -> Result<Document, FetchError> {
        let source = Source::parse(source)?;
        self.fetch(&source).await
    }

    async fn fetch_url(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}
