use crate::application::book::{
    BookApplicationError, BookFilter, ServiceDependencies, add_book as execute_add_book,
    delete_book as execute_delete_book, edit_book as execute_edit_book,
    get_book as execute_get_book, list_books as execute_list_books,
};
use crate::domain::{
    BookId,
    commands::{AddBook, EditBook},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::{Action, ApiError},
    types::{
        BookCreatedData, BookDetail, BookDetailData, BookListData, BookRequest, BookSummary,
        Envelope, ListBooksQuery, Status,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// JSONボディの抽出失敗をエンベロープ付きの400に変換する
fn payload(
    action: Action,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> Result<BookRequest, ApiError> {
    body.map(|Json(req)| req).map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::invalid_request(action, "Invalid request payload")
    })
}

// ============================================================================
// Command handlers (POST / PUT / DELETE)
// ============================================================================

/// POST /books - 書籍を追加
///
/// 強制されるビジネスルール:
/// - 書籍名が指定されていること
/// - readPageがpageCount以下であること
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<BookCreatedData>>), ApiError> {
    let req = payload(Action::Add, body)?;

    let cmd = AddBook {
        details: req.into_details(),
        added_at: chrono::Utc::now(),
    };

    let book_id = execute_add_book(&state.service_deps, cmd)
        .await
        .map_err(|e| ApiError::new(Action::Add, e))?;

    let response = Envelope::success_with_message(
        "Book added successfully",
        BookCreatedData {
            book_id: book_id.value().to_string(),
        },
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /books/:book_id - 書籍を更新
///
/// IDと登録日時以外の項目をすべて置き換える。
/// 入力の検証は書籍の存在確認より先に行われる。
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<()>>), ApiError> {
    let req = payload(Action::Edit, body)?;

    let cmd = EditBook {
        book_id: BookId::from_string(book_id),
        details: req.into_details(),
        edited_at: chrono::Utc::now(),
    };

    execute_edit_book(&state.service_deps, cmd)
        .await
        .map_err(|e| ApiError::new(Action::Edit, e))?;

    Ok((
        StatusCode::OK,
        Json(Envelope::message(Status::Success, "Book updated successfully")),
    ))
}

/// DELETE /books/:book_id - 書籍を削除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<(StatusCode, Json<Envelope<()>>), ApiError> {
    let book_id = BookId::from_string(book_id);

    execute_delete_book(&state.service_deps, &book_id)
        .await
        .map_err(|e| ApiError::new(Action::Delete, e))?;

    Ok((
        StatusCode::OK,
        Json(Envelope::message(Status::Success, "Book deleted successfully")),
    ))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books - オプションフィルタ付き書籍一覧取得
///
/// クエリパラメータ（優先順、最初に指定されたもののみ適用）:
/// - name: 書籍名の部分一致（大文字小文字を区別しない）
/// - reading: 読書中フラグ（1 または 0）
/// - finished: 読了フラグ（1 または 0）
///
/// 各要素は id, name, publisher のみを返す。
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListBooksQuery>, QueryRejection>,
) -> Result<Json<Envelope<BookListData>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        ApiError::invalid_request(Action::List, "Invalid query parameters")
    })?;

    let filter = BookFilter::select(
        query.name,
        query.reading.as_deref(),
        query.finished.as_deref(),
    )
    .map_err(|e| ApiError::new(Action::List, BookApplicationError::from(e)))?;

    let books = execute_list_books(&state.service_deps, &filter)
        .await
        .map_err(|e| ApiError::new(Action::List, e))?;

    Ok(Json(Envelope::success(BookListData {
        books: books.into_iter().map(BookSummary::from).collect(),
    })))
}

/// GET /books/:book_id - 書籍詳細をIDで取得
///
/// 見つかった場合は全項目を返し、見つからない場合は404を返す。
pub async fn get_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<Envelope<BookDetailData>>, ApiError> {
    let book_id = BookId::from_string(book_id);

    let book = execute_get_book(&state.service_deps, &book_id)
        .await
        .map_err(|e| ApiError::new(Action::Detail, e))?;

    Ok(Json(Envelope::success(BookDetailData {
        book: BookDetail::from(book),
    })))
}
