use crate::domain::{Book, Isbn};
use async_trait::async_trait;
use thiserror::Error;

/// 書籍検索のエラー
#[derive(Debug, Error)]
pub enum BookCatalogError {
    /// 指定された識別子の書籍が存在しない
    ///
    /// 失敗した識別子を保持する。集約側はこのエラーを
    /// そのまま呼び出し元へ伝播させる。
    #[error("Book not found: {0}")]
    NotFound(String),

    /// カタログへの問い合わせ自体に失敗した
    #[error("Catalog lookup failed")]
    Lookup(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, BookCatalogError>;

/// 書籍カタログポート
///
/// 在庫集約コンテキストとカタログコンテキストの境界を維持する。
/// 集約側はISBNによる単一の検索操作のみに依存し、
/// タイトル検索やページネーションは知らない。
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// ISBNで正規の書籍メタデータを取得する
    ///
    /// 書籍が存在しない場合は`BookCatalogError::NotFound`を返す。
    async fn get_book(&self, isbn: &Isbn) -> Result<Book>;
}
