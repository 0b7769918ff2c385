use std::fmt;
use uuid::Uuid;

use super::BookError;

/// 書籍ID - 書籍集約の識別子
///
/// サーバー側で生成され、作成後は変更されない。
/// パスパラメータとして任意の文字列を受け取るため、内部表現は文字列とする。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookId(String);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 読書進捗
///
/// 不変条件：総ページ数と既読ページ数の両方があるとき read_page <= page_count
/// 型システムでこの制約を強制し、総ページ数を超える既読ページを作成できないようにする。
/// どちらかが未指定の場合は比較できないため制約は課さない。
/// 読了フラグはこの値オブジェクトからのみ導出される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingProgress {
    page_count: Option<u32>,
    read_page: Option<u32>,
}

impl ReadingProgress {
    /// 総ページ数と既読ページ数から作成
    ///
    /// # エラー
    /// 既読ページ数が総ページ数を超える場合は`BookError::ReadPageExceedsPageCount`を返す
    pub fn new(page_count: Option<u32>, read_page: Option<u32>) -> Result<Self, BookError> {
        if let (Some(page_count), Some(read_page)) = (page_count, read_page) {
            if read_page > page_count {
                return Err(BookError::ReadPageExceedsPageCount {
                    read_page,
                    page_count,
                });
            }
        }
        Ok(Self {
            page_count,
            read_page,
        })
    }

    pub fn page_count(&self) -> Option<u32> {
        self.page_count
    }

    pub fn read_page(&self) -> Option<u32> {
        self.read_page
    }

    /// 読了済みか（既読ページ数が総ページ数と一致するか）
    ///
    /// 両方とも未指定なら一致、片方のみ未指定なら不一致とみなす。
    pub fn is_finished(&self) -> bool {
        self.read_page == self.page_count
    }
}
