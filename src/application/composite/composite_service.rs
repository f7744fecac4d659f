use crate::domain::{BookStore, Isbn, StoreAvailability};
use crate::ports::*;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;

use super::errors::{CompositeError, Result};

/// プロバイダ1件あたりの問い合わせ打ち切り時間の既定値
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// サービスの依存関係
///
/// すべての依存を構築時に明示的に渡す（コンストラクタ注入）。
/// 振る舞いは持たず、純粋な関数に依存関係を渡す。
///
/// プロバイダの結果は登録順に連結されるため、`providers`の順序には
/// 再現性の意味がある（ランキングの意味はない）。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_catalog: Arc<dyn BookCatalog>,
    pub providers: Vec<Arc<dyn StockProvider>>,
    /// プロバイダ1件あたりの打ち切り時間
    ///
    /// 遅延・応答なしのプロバイダが応答全体を塞がないための上限。
    /// 各プロバイダ自身のHTTPタイムアウトとは独立した最終防壁。
    pub provider_timeout: Duration,
}

/// ISBNで書籍と全チェーンの在庫を集約する（純粋な関数）
///
/// 1. カタログで書籍を解決する。見つからない場合はここで打ち切り、
///    プロバイダへの問い合わせは一切行わない（存在しない書籍のための
///    外部呼び出しを避ける）。
/// 2. 全プロバイダへ同一ISBNで並行に問い合わせる。全プロバイダの完了を
///    待ってから結合する。先着勝ちではなく、全件が必要。
/// 3. 各プロバイダの結果を登録順に連結し、`BookStore`を構築して返す。
///
/// # エラー封じ込め
///
/// プロバイダの失敗・タイムアウトはそのプロバイダの在庫0件として扱い、
/// ログに記録する。1チェーンの障害が応答全体を壊すことはない。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `isbn` - 検索対象のISBN
///
/// # 戻り値
/// 書籍と連結済み在庫リストの集約
///
/// # エラー
/// - NotFoundBook: カタログが識別子を解決できない
/// - CatalogError: カタログへの問い合わせ自体の失敗
pub async fn get_book(deps: &ServiceDependencies, isbn: &Isbn) -> Result<BookStore> {
    // 1. 書籍の解決（見つからなければfail-fast）
    let book = deps
        .book_catalog
        .get_book(isbn)
        .await
        .map_err(|e| match e {
            BookCatalogError::NotFound(identifier) => CompositeError::NotFoundBook(identifier),
            BookCatalogError::Lookup(source) => CompositeError::CatalogError(source),
        })?;

    // 2. 全プロバイダへ並行に問い合わせ（fan-in barrier）
    let lookups = deps
        .providers
        .iter()
        .map(|provider| query_provider(provider.as_ref(), isbn, deps.provider_timeout));
    let results = join_all(lookups).await;

    // 3. 登録順に連結（join_allは入力順を保存する）
    let stores: Vec<StoreAvailability> = results.into_iter().flatten().collect();

    Ok(BookStore::new(book, stores))
}

/// 1プロバイダへの問い合わせ
///
/// 失敗とタイムアウトは空リストに畳み込み、チェーン名とともに
/// ログへ記録する。
async fn query_provider(
    provider: &dyn StockProvider,
    isbn: &Isbn,
    timeout: Duration,
) -> Vec<StoreAvailability> {
    match tokio::time::timeout(timeout, provider.find_by_isbn(isbn)).await {
        Ok(Ok(stores)) => {
            tracing::debug!(
                chain = provider.chain_name(),
                isbn = isbn.value(),
                count = stores.len(),
                "provider lookup completed"
            );
            stores
        }
        Ok(Err(e)) => {
            tracing::error!(
                chain = provider.chain_name(),
                isbn = isbn.value(),
                error = %e,
                "provider lookup failed"
            );
            Vec::new()
        }
        Err(_) => {
            tracing::error!(
                chain = provider.chain_name(),
                isbn = isbn.value(),
                timeout_ms = timeout.as_millis() as u64,
                "provider lookup timed out"
            );
            Vec::new()
        }
    }
}
