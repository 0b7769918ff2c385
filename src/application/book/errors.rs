use crate::domain::BookError;
use thiserror::Error;

use super::filter::InvalidFlag;

/// 書籍管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookApplicationError {
    /// 入力がドメインの制約を満たさない
    #[error(transparent)]
    Validation(#[from] BookError),

    /// 絞り込み条件の値が不正
    #[error(transparent)]
    InvalidFilter(#[from] InvalidFlag),

    /// 指定IDの書籍が存在しない
    #[error("Book not found")]
    BookNotFound,

    /// 絞り込み条件に一致する書籍がない
    #[error("No books matched the filter")]
    NoBooksMatched,

    /// 追加直後の書籍がリポジトリから取得できない
    #[error("Inserted book could not be read back")]
    InsertNotVerified,

    /// BookRepositoryのエラー
    #[error("Book repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookApplicationError>;
