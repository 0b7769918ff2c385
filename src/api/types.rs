use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{book::Book, commands::BookDetails};

/// レスポンスのステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// 成功
    Success,
    /// クライアント側の誤り（4xx）
    Fail,
    /// サーバー側の誤り（5xx）
    Error,
}

/// すべてのレスポンスに共通のエンベロープ
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    pub fn message(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// 書籍の追加・更新リクエスト（POST /books, PUT /books/:book_id）
///
/// year, author, summary, publisher は任意のJSON値を受け付ける。
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub name: Option<String>,
    pub year: Option<Value>,
    pub author: Option<Value>,
    pub summary: Option<Value>,
    pub publisher: Option<Value>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    #[serde(default)]
    pub reading: bool,
}

impl BookRequest {
    pub fn into_details(self) -> BookDetails {
        BookDetails {
            name: self.name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
        }
    }
}

/// 書籍一覧取得のクエリパラメータ
///
/// 真偽値の解釈はアプリケーション層で行うため、ここでは文字列のまま受け取る。
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

/// 書籍追加レスポンスのデータ
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreatedData {
    pub book_id: String,
}

/// 書籍の要約ビュー（一覧用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<Value>,
}

impl From<Book> for BookSummary {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value().to_string(),
            name: book.name,
            publisher: book.publisher,
        }
    }
}

/// 書籍一覧レスポンスのデータ
#[derive(Debug, Serialize, Deserialize)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}

/// 書籍の詳細ビュー
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetail {
    pub id: String,
    pub name: String,
    pub year: Option<Value>,
    pub author: Option<Value>,
    pub summary: Option<Value>,
    pub publisher: Option<Value>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookDetail {
    fn from(book: Book) -> Self {
        let finished = book.finished();
        Self {
            id: book.id.value().to_string(),
            name: book.name,
            year: book.year,
            author: book.author,
            summary: book.summary,
            publisher: book.publisher,
            page_count: book.progress.page_count(),
            read_page: book.progress.read_page(),
            finished,
            reading: book.reading,
            inserted_at: book.inserted_at,
            updated_at: book.updated_at,
        }
    }
}

/// 書籍詳細レスポンスのデータ
#[derive(Debug, Serialize, Deserialize)]
pub struct BookDetailData {
    pub book: BookDetail,
}
