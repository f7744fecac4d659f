use crate::application::composite::{ServiceDependencies, get_book as execute_get_book};
use crate::domain::Isbn;
use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{error::ApiError, types::BookStoreResponse};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books/:isbn - ISBNで書籍と全チェーンの在庫を取得
///
/// カタログで書籍を解決し、全プロバイダの在庫を1つのリストに
/// 集約して返す。
///
/// - 書籍が存在しない場合は404
/// - ISBNとして成立しない識別子は400
/// - 在庫0件は正常（空のstoresを持つ200）
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<Json<BookStoreResponse>, ApiError> {
    let isbn = Isbn::new(&isbn).map_err(|_| ApiError::InvalidIsbn(isbn))?;

    let book_store = execute_get_book(&state.service_deps, &isbn).await?;

    Ok(Json(BookStoreResponse::from(book_store)))
}
