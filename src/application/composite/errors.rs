use thiserror::Error;

/// 在庫集約アプリケーション層のエラー
///
/// 集約操作は完全に成功する（一部または全部のプロバイダが0件でもよい）か、
/// `NotFoundBook`で失敗するかのどちらかである。プロバイダ側の障害は
/// プロバイダ境界で封じ込められ、ここには現れない。
#[derive(Debug, Error)]
pub enum CompositeError {
    /// 指定されたISBNの書籍が存在しない
    ///
    /// カタログから変更なしで伝播される。部分的な結果は返さない。
    #[error("Book not found: {0}")]
    NotFoundBook(String),

    /// カタログへの問い合わせに失敗した
    #[error("Book catalog error")]
    CatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CompositeError>;
