use crate::config::BandiConfig;
use crate::domain::{Isbn, StoreAvailability};
use crate::ports::stock_provider::{Result, StockProvider};
use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

use super::CrawlerBuildError;

/// CSS selectors for the Bandi & Luni's store stock page.
/// The page lists one `li` per store with a name span, a stock-count
/// span, and a link to the store page.
const STORE_ROW_SELECTOR: &str = "ul.store_list li";
const STORE_NAME_SELECTOR: &str = "span.store_name";
const STOCK_COUNT_SELECTOR: &str = "span.stock_count";
const STORE_LINK_SELECTOR: &str = "a";

/// Crawler-backed stock provider for the Bandi & Luni's chain
///
/// Fetches the store stock page and keeps the rows whose stock-count
/// cell parses to a positive number. Rows without a parsable count are
/// treated as out of stock.
#[allow(dead_code)]
pub struct BandiCrawler {
    config: BandiConfig,
    client: reqwest::Client,
    store_row: Selector,
    store_name: Selector,
    stock_count: Selector,
    store_link: Selector,
}

#[allow(dead_code)]
impl BandiCrawler {
    pub fn new(config: BandiConfig) -> std::result::Result<Self, CrawlerBuildError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            client,
            store_row: parse_selector(STORE_ROW_SELECTOR)?,
            store_name: parse_selector(STORE_NAME_SELECTOR)?,
            stock_count: parse_selector(STOCK_COUNT_SELECTOR)?,
            store_link: parse_selector(STORE_LINK_SELECTOR)?,
        })
    }

    fn stock_url(&self, isbn: &Isbn) -> String {
        self.config.url.replace("{isbn}", isbn.value())
    }

    /// Extract in-stock stores from the stock page
    fn parse_stores(&self, html: &str) -> Vec<StoreAvailability> {
        let document = Html::parse_document(html);

        document
            .select(&self.store_row)
            .filter_map(|row| {
                let name = row
                    .select(&self.store_name)
                    .next()
                    .map(|e| e.text().collect::<String>().trim().to_string())?;
                if name.is_empty() {
                    return None;
                }

                let stock = row
                    .select(&self.stock_count)
                    .next()
                    .and_then(|e| e.text().collect::<String>().trim().parse::<u32>().ok())
                    .unwrap_or(0);
                if stock == 0 {
                    return None;
                }

                let href = row
                    .select(&self.store_link)
                    .next()
                    .and_then(|e| e.value().attr("href"))?;

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

fn parse_selector(selector: &str) -> std::result::Result<Selector, CrawlerBuildError> {
    Selector::parse(selector).map_err(|e| CrawlerBuildError::Selector(e.to_string()))
}

#[async_trait]
impl StockProvider for BandiCrawler {
    fn chain_name(&self) -> &str {
        "bandi"
    }

    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Vec<StoreAvailability>> {
        let url = self.stock_url(isbn);

        tracing::debug!(%url, "fetching bandi stock page");

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

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_crawler() -> BandiCrawler {
        BandiCrawler::new(BandiConfig {
            url: "http://localhost/stock?isbn={isbn}".to_string(),
            base_url: "http://localhost".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn test_parse_stores_keeps_positive_stock_only() {
        let crawler = test_crawler();
        let html = r#"
            <ul class="store_list">
                <li>
                    <span class="store_name">Bandi Jongno</span>
                    <span class="stock_count">3</span>
                    <a href="/front/store/1">store page</a>
                </li>
                <li>
                    <span class="store_name">Bandi Gangnam</span>
                    <span class="stock_count">0</span>
                    <a href="/front/store/2">store page</a>
                </li>
            </ul>
        "#;

        let stores = crawler.parse_stores(html);

        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].store_name(), "Bandi Jongno");
        assert_eq!(stores[0].store_url(), "http://localhost/front/store/1");
    }

    #[test]
    fn test_parse_stores_unparsable_count_is_out_of_stock() {
        let crawler = test_crawler();
        let html = r#"
            <ul class="store_list">
                <li>
                    <span class="store_name">Bandi Jongno</span>
                    <span class="stock_count">n/a</span>
                    <a href="/front/store/1">store page</a>
                </li>
            </ul>
        "#;

        assert!(crawler.parse_stores(html).is_empty());
    }

    #[test]
    fn test_parse_stores_empty_page() {
        let crawler = test_crawler();
        assert!(crawler.parse_stores("<html><body></body></html>").is_empty());
    }
}
