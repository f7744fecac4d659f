use crate::config::AladinConfig;
use crate::domain::{Isbn, StoreAvailability};
use crate::ports::stock_provider::{Result, StockProvider};
use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

use super::CrawlerBuildError;

/// CSS selector for the used-store anchors on the Aladin search page.
/// Anchor text is the store name, href links to the store's listing.
const STORE_LINK_SELECTOR: &str = "a.usedshop_off";

/// Crawler-backed stock provider for the Aladin chain
///
/// Fetches the ISBN search page and extracts one availability entry per
/// used-store anchor. Parsing happens in a synchronous helper because
/// `scraper::Html` is not `Send` and must not live across an await.
#[allow(dead_code)]
pub struct AladinCrawler {
    config: AladinConfig,
    client: reqwest::Client,
    store_link: Selector,
}

#[allow(dead_code)]
impl AladinCrawler {
    pub fn new(config: AladinConfig) -> std::result::Result<Self, CrawlerBuildError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let store_link = Selector::parse(STORE_LINK_SELECTOR)
            .map_err(|e| CrawlerBuildError::Selector(e.to_string()))?;

        Ok(Self {
            config,
            client,
            store_link,
        })
    }

    fn search_url(&self, isbn: &Isbn) -> String {
        self.config.url.replace("{isbn}", isbn.value())
    }

    /// Extract availability entries from the search result page
    fn parse_stores(&self, html: &str) -> Vec<StoreAvailability> {
        let document = Html::parse_document(html);

        document
            .select(&self.store_link)
            .filter_map(|element| {
                let name = element.text().collect::<String>().trim().to_string();
                if name.is_empty() {
                    return None;
                }

                let href = element.value().attr("href")?;
                Some(StoreAvailability::new(name, self.resolve_url(href)))
            })
            .collect()
    }

    /// Resolve a possibly-relative href against the configured base URL
    fn resolve_url(&self, href: &str) -> String {
        if let Ok(absolute) = Url::parse(href) {
            return absolute.to_string();
        }

        Url::parse(&self.config.base_url)
            .and_then(|base| base.join(href))
            .map(|url| url.to_string())
            .unwrap_or_else(|_| href.to_string())
    }
}

#[async_trait]
impl StockProvider for AladinCrawler {
    fn chain_name(&self) -> &str {
        "aladin"
    }

    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Vec<StoreAvailability>> {
        let url = self.search_url(isbn);

        tracing::debug!(%url, "fetching aladin search page");

        let html = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(self.parse_stores(&html))
    }
}
