use crate::application::composite::CompositeError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへの
/// マッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    /// ISBNパスパラメータが不正
    InvalidIsbn(String),
    /// アプリケーション層のエラー
    Composite(CompositeError),
}

impl From<CompositeError> for ApiError {
    fn from(err: CompositeError) -> Self {
        ApiError::Composite(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400 Bad Request - 識別子として成立していない
            ApiError::InvalidIsbn(isbn) => (
                StatusCode::BAD_REQUEST,
                "INVALID_ISBN",
                format!("Invalid ISBN: {}", isbn),
            ),

            // 404 Not Found - カタログが識別子を解決できない
            ApiError::Composite(CompositeError::NotFoundBook(isbn)) => (
                StatusCode::NOT_FOUND,
                "BOOK_NOT_FOUND",
                format!("Book not found: {}", isbn),
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Composite(CompositeError::CatalogError(ref e)) => {
                tracing::error!("Book catalog error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CATALOG_ERROR",
                    "Failed to look up the book".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
