use crate::config::KyoboConfig;
use crate::domain::{Isbn, StoreAvailability};
use crate::ports::stock_provider::{Result, StockProvider};
use async_trait::async_trait;
use serde::Deserialize;

/// Stock record returned by the Kyobo per-store stock endpoint
#[derive(Debug, Deserialize)]
struct StockResponse {
    /// Copies in stock at the queried store
    stock: u32,
}

/// REST-backed stock provider for the Kyobo chain
///
/// Queries the stock endpoint once per configured store and keeps the
/// stores that report a positive stock count. A failed store request is
/// a chain-level fault and is propagated; containment happens in the
/// composite service.
#[allow(dead_code)]
pub struct KyoboRestProvider {
    config: KyoboConfig,
    client: reqwest::Client,
}

#[allow(dead_code)]
impl KyoboRestProvider {
    /// Create a provider with its own HTTP client
    ///
    /// The client carries the per-request timeout from the config.
    pub fn new(config: KyoboConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, client })
    }

    fn stock_url(&self, store_id: u32, isbn: &Isbn) -> String {
        self.config
            .url
            .replace("{store_id}", &store_id.to_string())
            .replace("{isbn}", isbn.value())
    }

    fn store_page_url(&self, store_id: u32) -> String {
        self.config
            .store_url
            .replace("{store_id}", &store_id.to_string())
    }
}

#[async_trait]
impl StockProvider for KyoboRestProvider {
    fn chain_name(&self) -> &str {
        "kyobo"
    }

    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Vec<StoreAvailability>> {
        let mut stores = Vec::new();

        for store in &self.config.stores {
            let url = self.stock_url(store.store_id, isbn);

            tracing::debug!(store = %store.store_name, %url, "querying kyobo stock");

            let response: StockResponse = self
                .client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            if response.stock > 0 {
                stores.push(StoreAvailability::new(
                    store.store_name.clone(),
                    self.store_page_url(store.store_id),
                ));
            }
        }

        Ok(stores)
    }
}
