#![allow(dead_code)]

use serde::Serialize;

use super::value_objects::Isbn;

/// 書籍 - カタログコンテキストが解決する正規の書籍メタデータ
///
/// 構築後は不変。集約サービスからは読み取り専用で、
/// 書き換えられることはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    isbn: Isbn,
    title: String,
    description: String,
}

impl Book {
    pub fn new(isbn: Isbn, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            isbn,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// 店舗在庫 - 「この店舗で現在購入可能」を表す（店舗名, 店舗URL）の組
///
/// プロバイダ間で同一店舗が重複しても排除しない。
/// 各プロバイダが返した結果をそのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreAvailability {
    store_name: String,
    store_url: String,
}

impl StoreAvailability {
    pub fn new(store_name: impl Into<String>, store_url: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            store_url: store_url.into(),
        }
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn store_url(&self) -> &str {
        &self.store_url
    }
}

/// 書籍在庫集約 - 書籍と全チェーンの在庫リストを束ねたビュー
///
/// リクエストごとに集約サービスが生成する読み取り専用の集約で、
/// 永続化されない。レスポンス送信後に破棄される。
///
/// 不変条件：storesの長さは各プロバイダが返したリストの長さの合計に等しい
/// （全プロバイダが空を返した場合は0）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookStore {
    book: Book,
    stores: Vec<StoreAvailability>,
}

impl BookStore {
    pub fn new(book: Book, stores: Vec<StoreAvailability>) -> Self {
        Self { book, stores }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn stores(&self) -> &[StoreAvailability] {
        &self.stores
    }
}
