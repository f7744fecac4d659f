use bookup::adapters::crawler::{AladinCrawler, BandiCrawler};
use bookup::adapters::rest::KyoboRestProvider;
use bookup::config::{AladinConfig, BandiConfig, KyoboConfig, KyoboStore};
use bookup::domain::Isbn;
use bookup::ports::StockProvider;
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

const TEST_ISBN: &str = "4689347598347";

fn test_isbn() -> Isbn {
    Isbn::new(TEST_ISBN).unwrap()
}

// ============================================================================
// Kyobo（REST API）
// ============================================================================

fn kyobo_config(server: &MockServer, stores: Vec<KyoboStore>) -> KyoboConfig {
    KyoboConfig {
        url: format!("{}/stock?storeId={{store_id}}&isbn={{isbn}}", server.base_url()),
        store_url: format!("{}/stores/{{store_id}}", server.base_url()),
        stores,
        timeout: Duration::from_secs(1),
    }
}

#[tokio::test]
async fn test_kyobo_returns_stores_with_positive_stock() {
    // Arrange: 店舗1は在庫あり、店舗2は在庫なし
    let server = MockServer::start();

    let in_stock = server.mock(|when, then| {
        when.method(GET)
            .path("/stock")
            .query_param("storeId", "1")
            .query_param("isbn", TEST_ISBN);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"stock": 2}));
    });

    let out_of_stock = server.mock(|when, then| {
        when.method(GET)
            .path("/stock")
            .query_param("storeId", "2")
            .query_param("isbn", TEST_ISBN);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"stock": 0}));
    });

    let provider = KyoboRestProvider::new(kyobo_config(
        &server,
        vec![
            KyoboStore {
                store_name: "Gangnam".to_string(),
                store_id: 1,
            },
            KyoboStore {
                store_name: "Jamsil".to_string(),
                store_id: 2,
            },
        ],
    ))
    .unwrap();

    // Act
    let stores = provider.find_by_isbn(&test_isbn()).await.unwrap();

    // Assert: 在庫ありの店舗だけが残る
    in_stock.assert();
    out_of_stock.assert();
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].store_name(), "Gangnam");
    assert_eq!(stores[0].store_url(), format!("{}/stores/1", server.base_url()));
}

#[tokio::test]
async fn test_kyobo_no_stock_anywhere_is_empty_not_error() {
    // Arrange
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/stock");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"stock": 0}));
    });

    let provider = KyoboRestProvider::new(kyobo_config(
        &server,
        vec![KyoboStore {
            store_name: "Gangnam".to_string(),
            store_id: 1,
        }],
    ))
    .unwrap();

    // Act
    let stores = provider.find_by_isbn(&test_isbn()).await.unwrap();

    // Assert
    assert!(stores.is_empty());
}

#[tokio::test]
async fn test_kyobo_http_error_propagates() {
    // Arrange: 在庫照会APIが500を返す
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/stock");
        then.status(500);
    });

    let provider = KyoboRestProvider::new(kyobo_config(
        &server,
        vec![KyoboStore {
            store_name: "Gangnam".to_string(),
            store_id: 1,
        }],
    ))
    .unwrap();

    // Act
    let result = provider.find_by_isbn(&test_isbn()).await;

    // Assert: チェーン単位の障害はアダプタから伝播する
    // （封じ込めは集約サービスの責務）
    assert!(result.is_err());
}

// ============================================================================
// Aladin（HTMLクローラ）
// ============================================================================

fn aladin_config(server: &MockServer) -> AladinConfig {
    AladinConfig {
        url: format!("{}/search?ISBN={{isbn}}", server.base_url()),
        base_url: server.base_url(),
        timeout: Duration::from_secs(1),
    }
}

#[tokio::test]
async fn test_aladin_extracts_store_anchors() {
    // Arrange
    let server = MockServer::start();

    let page = server.mock(|when, then| {
        when.method(GET).path("/search").query_param("ISBN", TEST_ISBN);
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(
                r#"
                <html><body>
                    <a class="usedshop_off" href="/shop/usedshop/wgate.aspx?sid=11">Aladin Gangnam</a>
                    <a class="usedshop_off" href="/shop/usedshop/wgate.aspx?sid=12">Aladin Sinchon</a>
                </body></html>
                "#,
            );
    });

    let crawler = AladinCrawler::new(aladin_config(&server)).unwrap();

    // Act
    let stores = crawler.find_by_isbn(&test_isbn()).await.unwrap();

    // Assert: 相対hrefがベースURLで解決される
    page.assert();
    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].store_name(), "Aladin Gangnam");
    assert_eq!(
        stores[0].store_url(),
        format!("{}/shop/usedshop/wgate.aspx?sid=11", server.base_url())
    );
}

#[tokio::test]
async fn test_aladin_page_without_stores_is_empty() {
    // Arrange: 在庫店舗のないページ
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body("<html><body><p>No used stores carry this title.</p></body></html>");
    });

    let crawler = AladinCrawler::new(aladin_config(&server)).unwrap();

    // Act
    let stores = crawler.find_by_isbn(&test_isbn()).await.unwrap();

    // Assert: 空リストは正常な結果
    assert!(stores.is_empty());
}

// ============================================================================
// Bandi（HTMLクローラ）
// ============================================================================

#[tokio::test]
async fn test_bandi_keeps_rows_with_positive_stock() {
    // Arrange
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/stock").query_param("isbn", TEST_ISBN);
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(
                r#"
                <ul class="store_list">
                    <li>
                        <span class="store_name">Bandi Jongno</span>
                        <span class="stock_count">3</span>
                        <a href="/front/store/1">store</a>
                    </li>
                    <li>
                        <span class="store_name">Bandi Gangnam</span>
                        <span class="stock_count">0</span>
                        <a href="/front/store/2">store</a>
                    </li>
                </ul>
                "#,
            );
    });

    let crawler = BandiCrawler::new(BandiConfig {
        url: format!("{}/stock?isbn={{isbn}}", server.base_url()),
        base_url: server.base_url(),
        timeout: Duration::from_secs(1),
    })
    .unwrap();

    // Act
    let stores = crawler.find_by_isbn(&test_isbn()).await.unwrap();

    // Assert
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].store_name(), "Bandi Jongno");
    assert_eq!(
        stores[0].store_url(),
        format!("{}/front/store/1", server.base_url())
    );
}
