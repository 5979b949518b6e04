use std::{
    fs,
    future::Future,
    path::PathBuf,
};

use reqwest::Client;
use serde_json::{
    Map,
    Value,
};

use super::{
    to_cards,
    Card,
};
use crate::core::{
    http::{
        ensure_success,
        http_client,
    },
    FlashdeckError,
};

/// Resource path the loader requests, relative to the deck root.
pub const CARDS_RESOURCE: &str = "/cards.json";

/// Retrieval capability injected into the loader, so tests can swap the
/// network for a canned body.
pub trait ResourceFetcher {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FlashdeckError>> + Send;
}

pub struct CardLoader<F: ResourceFetcher> {
    fetcher: F,
}

impl<F: ResourceFetcher> CardLoader<F> {
    pub fn new(fetcher: F) -> Self {
        CardLoader { fetcher }
    }

    /// Fetches the card document and normalizes it into one card per entry,
    /// in document order. Each call performs exactly one fetch; nothing is
    /// cached between calls.
    pub async fn load(&self) -> Result<Vec<Card>, FlashdeckError> {
        let body = self.fetcher.fetch(CARDS_RESOURCE).await?;
        let document: Map<String, Value> = serde_json::from_str(&body)?;
        to_cards(document)
    }
}

/// Fetches resources from a deck served over HTTP.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Result<Self, FlashdeckError> {
        Ok(HttpFetcher {
            client: http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FlashdeckError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;

        // Fail on status before touching the body, so a 404 error page
        // never reaches the JSON parser.
        ensure_success(&response)?;

        Ok(response.text().await?)
    }
}

/// Serves resources from a local directory, for decks shipped on disk.
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileFetcher { root: root.into() }
    }
}

impl ResourceFetcher for FileFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FlashdeckError> {
        let file_path = self.root.join(path.trim_start_matches('/'));
        Ok(fs::read_to_string(&file_path)?)
    }
}
