//! Where content documents come from.
//!
//! Sources fetch one locale's document and parse it at the boundary. They
//! never retry and impose no timeout of their own.

use crate::content::ContentDocument;
use crate::i18n::Locale;
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("content request failed with status {0}")]
    Status(StatusCode),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetches the content document for a locale.
///
/// Futures need not be `Send`: the controller drives every cycle on one
/// thread.
#[async_trait(?Send)]
pub trait ContentSource {
    async fn fetch(&self, locale: Locale) -> Result<ContentDocument, ContentError>;
}

/// Fetches `{base_url}/{content_path}` over HTTP, bypassing caches.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, locale: Locale) -> String {
        format!("{}/{}", self.base_url, locale.content_path())
    }
}

#[async_trait(?Send)]
impl ContentSource for HttpContentSource {
    async fn fetch(&self, locale: Locale) -> Result<ContentDocument, ContentError> {
        let url = self.url_for(locale);
        debug!("Fetching {} content from {}", locale, url);

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ContentError::Status(response.status()));
        }

        let body = response.bytes().await?;
        Ok(ContentDocument::from_slice(&body)?)
    }
}

/// Reads `{dir}/{content_path}` from the local filesystem.
#[derive(Debug, Clone)]
pub struct DirContentSource {
    dir: PathBuf,
}

impl DirContentSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, locale: Locale) -> PathBuf {
        self.dir.join(locale.content_path())
    }
}

#[async_trait(?Send)]
impl ContentSource for DirContentSource {
    async fn fetch(&self, locale: Locale) -> Result<ContentDocument, ContentError> {
        let path = self.path_for(locale);
        debug!("Reading {} content from {}", locale, path.display());

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| ContentError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(ContentDocument::from_slice(&bytes)?)
    }
}
