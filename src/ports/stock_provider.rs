use crate::domain::{Isbn, StoreAvailability};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 在庫プロバイダポート
///
/// 1つの書店チェーンの在庫検索を表す。REST APIかHTMLクローラかという
/// 輸送手段の違いはこの境界で吸収され、集約サービスからは見えない。
/// チェーンの追加・削除はプロバイダ登録箇所だけの変更で済む。
#[allow(dead_code)]
#[async_trait]
pub trait StockProvider: Send + Sync {
    /// チェーン名
    ///
    /// ログ出力と結果連結順序の説明に使用される。
    fn chain_name(&self) -> &str;

    /// ISBNで在庫のある店舗の一覧を取得する
    ///
    /// 在庫がない場合は空のリストを返す。空のリストは正常な結果であり、
    /// エラーではない。戻り値以外の副作用を集約側へ見せてはならない。
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Vec<StoreAvailability>>;
}
