use serde::Serialize;

use crate::domain::{BookStore, StoreAvailability};

/// 店舗在庫レスポンス
#[derive(Debug, Serialize)]
pub struct StoreResponse {
    pub store_name: String,
    pub store_url: String,
}

impl From<&StoreAvailability> for StoreResponse {
    fn from(store: &StoreAvailability) -> Self {
        Self {
            store_name: store.store_name().to_string(),
            store_url: store.store_url().to_string(),
        }
    }
}

/// 書籍在庫レスポンス（GET /books/:isbn）
#[derive(Debug, Serialize)]
pub struct BookStoreResponse {
    pub isbn: String,
    pub title: String,
    pub description: String,
    pub stores: Vec<StoreResponse>,
}

impl From<BookStore> for BookStoreResponse {
    fn from(book_store: BookStore) -> Self {
        Self {
            isbn: book_store.book().isbn().value().to_string(),
            title: book_store.book().title().to_string(),
            description: book_store.book().description().to_string(),
            stores: book_store.stores().iter().map(StoreResponse::from).collect(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
