use serde_json::Value;

use crate::data_models::{AiOverview, SearchMetadata};
use crate::error::{OverviewError, Result};
use crate::serpapi::SerpApiClient;

pub const PRIMARY_ENGINE: &str = "google";
pub const OVERVIEW_ENGINE: &str = "google_ai_overview";

/// Fixed locale parameters sent with every search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLocale {
    pub location: String,
    pub google_domain: String,
    pub gl: String,
    pub hl: String,
}

impl Default for SearchLocale {
    fn default() -> Self {
        SearchLocale {
            location: "Indonesia".to_string(),
            google_domain: "google.com".to_string(),
            gl: "id".to_string(),
            hl: "id".to_string(),
        }
    }
}

/// Outcome of reading the primary search's `ai_overview` field.
#[derive(Debug)]
enum InlineOverview {
    Ready(AiOverview),
    Deferred(SearchMetadata),
}

impl InlineOverview {
    /// An inline overview that decodes but has no blocks and no references is
    /// a placeholder; only its page token is used.
    fn classify(raw: &Value) -> Result<InlineOverview> {
        if let Ok(overview) = AiOverview::from_value(raw) {
            if !overview.is_empty() {
                return Ok(InlineOverview::Ready(overview));
            }
        }

        SearchMetadata::from_value(raw)
            .map(InlineOverview::Deferred)
            .map_err(|source| OverviewError::Decode {
                what: "search metadata",
                source,
            })
    }
}

#[derive(Debug, Clone)]
pub struct OverviewFetcher {
    client: SerpApiClient,
    locale: SearchLocale,
}

impl OverviewFetcher {
    pub fn new(client: SerpApiClient, locale: SearchLocale) -> Self {
        Self { client, locale }
    }

    pub async fn fetch(&self, query: &str) -> Result<AiOverview> {
        let raw = self.primary_search(query).await?;

        match InlineOverview::classify(&raw)? {
            InlineOverview::Ready(overview) => {
                log::debug!(
                    "inline ai overview for {query:?}: {} blocks, {} references",
                    overview.text_blocks.len(),
                    overview.references.len()
                );
                Ok(overview)
            }
            InlineOverview::Deferred(meta) => {
                log::debug!("page_token: {}", meta.page_token);
                log::debug!("serpapi_link: {}", meta.serpapi_link);
                self.overview_search(&meta.page_token).await
            }
        }
    }

    /// Step one: the regular google engine. Returns the raw `ai_overview` value.
    async fn primary_search(&self, query: &str) -> Result<Value> {
        let params = [
            ("engine", PRIMARY_ENGINE),
            ("q", query),
            ("location", self.locale.location.as_str()),
            ("google_domain", self.locale.google_domain.as_str()),
            ("gl", self.locale.gl.as_str()),
            ("hl", self.locale.hl.as_str()),
        ];
        log::debug!("primary search params: {params:?}");

        let mut results = self.client.search(&params).await?;
        match results.get_mut("ai_overview") {
            Some(raw) => Ok(raw.take()),
            None => {
                log::info!("no ai overview in search results for {query:?}");
                Err(OverviewError::NotFound)
            }
        }
    }

    /// Step two: the dedicated overview engine, keyed by the page token. Whatever
    /// it returns is final, empty or not.
    async fn overview_search(&self, page_token: &str) -> Result<AiOverview> {
        let params = [
            ("engine", OVERVIEW_ENGINE),
            ("page_token", page_token),
            ("hl", self.locale.hl.as_str()),
            ("gl", self.locale.gl.as_str()),
        ];

        let results = self.client.search(&params).await?;
        let raw = results.get("ai_overview").unwrap_or(&Value::Null);

        AiOverview::from_value(raw).map_err(|source| OverviewError::Decode {
            what: "ai overview",
            source,
        })
    }
}
