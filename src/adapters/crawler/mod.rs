pub mod aladin;
pub mod bandi;

#[allow(unused_imports)]
pub use aladin::AladinCrawler;
#[allow(unused_imports)]
pub use bandi::BandiCrawler;

use thiserror::Error;

/// Crawler construction failure
///
/// Selectors are compiled once at construction time, so a bad selector
/// surfaces at wiring time instead of on the first lookup.
#[derive(Debug, Error)]
pub enum CrawlerBuildError {
    #[error("Invalid CSS selector: {0}")]
    Selector(String),

    #[error("Failed to build HTTP client")]
    HttpClient(#[from] reqwest::Error),
}
