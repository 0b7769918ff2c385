use thiserror::Error;

/// 書籍ドメインのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// 書籍名が指定されていない
    #[error("book name is required")]
    MissingName,

    /// 既読ページ数が総ページ数を超えている
    #[error("readPage ({read_page}) must not be greater than pageCount ({page_count})")]
    ReadPageExceedsPageCount { read_page: u32, page_count: u32 },
}
