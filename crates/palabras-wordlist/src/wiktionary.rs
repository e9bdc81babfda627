use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::parse;
use crate::source::{RankedLemmaSource, WordListError, dedup_to_count};

/// Scrapes the Wiktionary Spanish frequency-list pages.
///
/// Each configured page is fetched in order and parsed against both known
/// layouts; the concatenated rows are de-duplicated while preserving rank
/// order before being cut down to the requested count.
pub struct WiktionarySource {
    client: reqwest::Client,
    pages: Vec<String>,
    user_agent: String,
    timeout: Duration,
}

impl WiktionarySource {
    pub fn new(pages: Vec<String>, user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            pages,
            user_agent: user_agent.into(),
            timeout,
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String, WordListError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WordListError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl RankedLemmaSource for WiktionarySource {
    async fn fetch_ranked_lemmas(&self, n: usize) -> Result<Vec<String>, WordListError> {
        let mut collected = Vec::new();

        for url in &self.pages {
            let html = self.fetch_page(url).await?;

            let mut rows = parse::parse_wikitable(&html);
            if rows.is_empty() {
                rows = parse::parse_plaintext_rows(&html);
            }
            if rows.is_empty() {
                return Err(WordListError::PageFormat { url: url.clone() });
            }

            debug!("parsed {} ranked rows from {}", rows.len(), url);
            collected.extend(rows);
        }

        dedup_to_count(collected, n)
    }
}
