pub mod book_catalog;

#[allow(unused_imports)]
pub use book_catalog::BookCatalog;
