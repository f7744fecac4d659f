use bookup::{
    adapters::crawler::{AladinCrawler, BandiCrawler},
    adapters::mock::book_catalog::BookCatalog as MockBookCatalog,
    adapters::rest::KyoboRestProvider,
    api::{handlers::AppState, router::create_router},
    application::composite::{DEFAULT_PROVIDER_TIMEOUT, ServiceDependencies},
    config::AppConfig,
    domain::{Book, Isbn},
    ports::StockProvider,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookup=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration is built once at startup and handed to each adapter
    let config = AppConfig::from_env();

    // Initialize provider adapters.
    // Registration order is the concatenation order of the aggregated
    // availability list: kyobo, then aladin, then bandi.
    let kyobo = KyoboRestProvider::new(config.kyobo).expect("Failed to build kyobo provider");
    let aladin = AladinCrawler::new(config.aladin).expect("Failed to build aladin crawler");
    let bandi = BandiCrawler::new(config.bandi).expect("Failed to build bandi crawler");

    let providers: Vec<Arc<dyn StockProvider>> =
        vec![Arc::new(kyobo), Arc::new(aladin), Arc::new(bandi)];

    // The catalog context is a separate service; integration is pending.
    // The in-memory catalog is seeded with one sample title for local runs.
    let book_catalog = Arc::new(MockBookCatalog::new());
    if let Ok(isbn) = Isbn::new("9788966262700") {
        book_catalog.add_book(Book::new(
            isbn,
            "The Art of Readable Code",
            "Simple and practical techniques for writing better code",
        ));
    }

    // Create service dependencies
    let service_deps = ServiceDependencies {
        book_catalog,
        providers,
        provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
