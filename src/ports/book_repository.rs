use crate::domain::{BookId, book::Book};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍リポジトリポート
///
/// 書籍コレクションの保管を抽象化する。
/// 実装は挿入順序を保持しなければならない。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 書籍を末尾に追加する
    async fn insert(&self, book: Book) -> Result<()>;

    /// すべての書籍を挿入順で取得する
    async fn list(&self) -> Result<Vec<Book>>;

    /// IDで書籍を取得する（完全一致）
    async fn get_by_id(&self, book_id: &BookId) -> Result<Option<Book>>;

    /// 既存の書籍を置き換える
    ///
    /// 位置は変えない。該当IDが存在しない場合は`false`を返す。
    async fn replace(&self, book: Book) -> Result<bool>;

    /// 書籍を1件削除する
    ///
    /// 該当IDが存在しない場合は`false`を返す。
    async fn remove(&self, book_id: &BookId) -> Result<bool>;
}
