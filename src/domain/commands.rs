use chrono::{DateTime, Utc};
use serde_json::Value;

use super::BookId;

/// 書籍の入力項目
///
/// 追加・更新の両方で同じ項目一式を受け取る。
/// バリデーション前の値なので、書籍名は未指定でありうる。
/// year, author, summary, publisher は内容を解釈せず、受け取った値をそのまま保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDetails {
    pub name: Option<String>,
    pub year: Option<Value>,
    pub author: Option<Value>,
    pub summary: Option<Value>,
    pub publisher: Option<Value>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    pub reading: bool,
}

/// コマンド：書籍を追加する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBook {
    pub details: BookDetails,
    pub added_at: DateTime<Utc>,
}

/// コマンド：書籍を更新する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBook {
    pub book_id: BookId,
    pub details: BookDetails,
    pub edited_at: DateTime<Utc>,
}
