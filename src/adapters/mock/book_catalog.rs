use crate::domain::{Book, Isbn};
use crate::ports::book_catalog::{BookCatalog as BookCatalogTrait, BookCatalogError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// BookCatalogのモック実装
///
/// ISBNごとの書籍を保持し、状態を持ったテストとローカル起動を
/// サポートする。カタログコンテキストの実体は別サービスであり、
/// この境界ではスタンドインで十分。
#[allow(dead_code)]
pub struct BookCatalog {
    books: Mutex<HashMap<Isbn, Book>>,
}

#[allow(dead_code)]
impl BookCatalog {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }

    /// テスト・ローカル起動用に書籍を登録
    pub fn add_book(&self, book: Book) {
        self.books
            .lock()
            .unwrap()
            .insert(book.isbn().clone(), book);
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookCatalogTrait for BookCatalog {
    /// 登録された書籍の中からISBNで検索する
    async fn get_book(&self, isbn: &Isbn) -> Result<Book> {
        self.books
            .lock()
            .unwrap()
            .get(isbn)
            .cloned()
            .ok_or_else(|| BookCatalogError::NotFound(isbn.value().to_string()))
    }
}
