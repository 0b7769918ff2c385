use crate::application::book::BookApplicationError;
use crate::domain::BookError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::{Envelope, Status};

/// エラーが発生した操作
///
/// 同じアプリケーションエラーでも操作ごとにメッセージが異なる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    List,
    Detail,
    Edit,
    Delete,
}

impl Action {
    fn failure_prefix(self) -> &'static str {
        match self {
            Action::Add => "Failed to add book",
            Action::Edit => "Failed to update book",
            Action::Delete => "Failed to delete book",
            Action::List | Action::Detail => "Failed to retrieve book",
        }
    }
}

/// API層のエラー型
///
/// アプリケーション層のエラーと操作を組にして、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    Application {
        action: Action,
        error: BookApplicationError,
    },
    /// リクエストボディやクエリ文字列を解釈できない
    InvalidRequest { action: Action, detail: String },
}

impl ApiError {
    pub fn new(action: Action, error: BookApplicationError) -> Self {
        ApiError::Application { action, error }
    }

    pub fn invalid_request(action: Action, detail: impl Into<String>) -> Self {
        ApiError::InvalidRequest {
            action,
            detail: detail.into(),
        }
    }

    fn status_and_message(&self) -> (StatusCode, Status, String) {
        match self {
            ApiError::InvalidRequest { action, detail } => (
                StatusCode::BAD_REQUEST,
                Status::Fail,
                format!("{}. {}", action.failure_prefix(), detail),
            ),
            ApiError::Application { action, error } => match error {
                // 400 Bad Request - 入力の検証エラー
                BookApplicationError::Validation(BookError::MissingName) => (
                    StatusCode::BAD_REQUEST,
                    Status::Fail,
                    format!("{}. Please provide the book name", action.failure_prefix()),
                ),
                BookApplicationError::Validation(BookError::ReadPageExceedsPageCount {
                    ..
                }) => (
                    StatusCode::BAD_REQUEST,
                    Status::Fail,
                    format!(
                        "{}. readPage must not be greater than pageCount",
                        action.failure_prefix()
                    ),
                ),
                BookApplicationError::InvalidFilter(e) => {
                    (StatusCode::BAD_REQUEST, Status::Fail, e.to_string())
                }

                // 404 Not Found - リクエストされたリソースが存在しない
                BookApplicationError::BookNotFound => {
                    let message = match action {
                        Action::Edit | Action::Delete => {
                            format!("{}. Id not found", action.failure_prefix())
                        }
                        _ => "Book not found".to_string(),
                    };
                    (StatusCode::NOT_FOUND, Status::Fail, message)
                }
                BookApplicationError::NoBooksMatched => (
                    StatusCode::NOT_FOUND,
                    Status::Fail,
                    "Book not found".to_string(),
                ),

                // 500 Internal Server Error - システム障害
                // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
                BookApplicationError::InsertNotVerified => {
                    tracing::error!("Inserted book was not found in the repository");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Status::Error,
                        action.failure_prefix().to_string(),
                    )
                }
                BookApplicationError::RepositoryError(e) => {
                    tracing::error!(?action, "Book repository error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Status::Error,
                        action.failure_prefix().to_string(),
                    )
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope_status, message) = self.status_and_message();
        let body = Json(Envelope::message(envelope_status, message));
        (status, body).into_response()
    }
}
