use crate::domain::book::Book;
use thiserror::Error;

/// 真偽値クエリパラメータの値が不正
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for `{parameter}`: {value:?} (expected 1 or 0)")]
pub struct InvalidFlag {
    pub parameter: &'static str,
    pub value: String,
}

/// 真偽値クエリパラメータを解釈する
///
/// `"1"`/`"true"`は真、`"0"`/`"false"`は偽。それ以外は`InvalidFlag`。
pub fn parse_flag(parameter: &'static str, value: &str) -> Result<bool, InvalidFlag> {
    match value.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(InvalidFlag {
            parameter,
            value: value.to_string(),
        }),
    }
}

/// 書籍一覧の絞り込み条件
///
/// 同時に指定できる条件は1つだけ。複数指定された場合は
/// name → reading → finished の優先順で最初の条件のみを採用する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    /// 絞り込みなし
    All,
    /// 書籍名の部分一致（大文字小文字を区別しない）
    NameContains(String),
    /// 読書中フラグ
    Reading(bool),
    /// 読了フラグ
    Finished(bool),
}

impl BookFilter {
    /// クエリパラメータから絞り込み条件を選択する
    ///
    /// 採用されなかった条件の値は検証しない。
    pub fn select(
        name: Option<String>,
        reading: Option<&str>,
        finished: Option<&str>,
    ) -> Result<Self, InvalidFlag> {
        if let Some(name) = name {
            return Ok(BookFilter::NameContains(name));
        }
        if let Some(reading) = reading {
            return parse_flag("reading", reading).map(BookFilter::Reading);
        }
        if let Some(finished) = finished {
            return parse_flag("finished", finished).map(BookFilter::Finished);
        }
        Ok(BookFilter::All)
    }

    pub fn is_filtered(&self) -> bool {
        !matches!(self, BookFilter::All)
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::NameContains(needle) => book.name_contains(needle),
            BookFilter::Reading(reading) => book.reading == *reading,
            BookFilter::Finished(finished) => book.finished() == *finished,
        }
    }
}
