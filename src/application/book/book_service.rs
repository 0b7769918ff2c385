use crate::domain::{
    BookId,
    book::{self, Book, BookDraft},
    commands::*,
};
use crate::ports::BookRepository;
use std::sync::Arc;

use super::errors::{BookApplicationError, Result};
use super::filter::BookFilter;

/// サービスの依存関係
///
/// 書籍コレクションはグローバル状態ではなく、この構造体を通じて
/// 各ユースケース関数に明示的に渡される。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
}

/// IDで書籍を取得するヘルパー関数
async fn load_book(repository: &Arc<dyn BookRepository>, book_id: &BookId) -> Result<Book> {
    repository
        .get_by_id(book_id)
        .await
        .map_err(BookApplicationError::RepositoryError)?
        .ok_or(BookApplicationError::BookNotFound)
}

/// 書籍を追加する
///
/// 検証順序：
/// 1. 書籍名が指定されていること
/// 2. 既読ページ数が総ページ数以下であること
///
/// 追加後、新しいIDでリポジトリから読み戻せることを確認する。
///
/// # 戻り値
/// 成功時は採番された書籍ID
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<BookId> {
    // 1. 入力の検証
    let draft = BookDraft::try_from(cmd.details)?;

    // 2. ドメイン層の純粋関数を呼び出し
    let new_book = book::register_book(draft, cmd.added_at);
    let book_id = new_book.id.clone();

    // 3. リポジトリに追加
    deps.book_repository
        .insert(new_book)
        .await
        .map_err(BookApplicationError::RepositoryError)?;

    // 4. 追加結果の確認
    let stored = deps
        .book_repository
        .get_by_id(&book_id)
        .await
        .map_err(BookApplicationError::RepositoryError)?;

    if stored.is_none() {
        return Err(BookApplicationError::InsertNotVerified);
    }

    tracing::info!(book_id = %book_id, "book added");
    Ok(book_id)
}

/// 書籍一覧を取得する
///
/// 絞り込み条件が指定されて一致する書籍が0件の場合は`NoBooksMatched`。
/// 絞り込みなしの場合は空のコレクションでも成功とする。
pub async fn list_books(deps: &ServiceDependencies, filter: &BookFilter) -> Result<Vec<Book>> {
    let books = deps
        .book_repository
        .list()
        .await
        .map_err(BookApplicationError::RepositoryError)?;

    let matched: Vec<Book> = books
        .into_iter()
        .filter(|book| filter.matches(book))
        .collect();

    if filter.is_filtered() && matched.is_empty() {
        tracing::debug!(?filter, "no books matched");
        return Err(BookApplicationError::NoBooksMatched);
    }

    Ok(matched)
}

/// IDで書籍の詳細を取得する
pub async fn get_book(deps: &ServiceDependencies, book_id: &BookId) -> Result<Book> {
    load_book(&deps.book_repository, book_id).await
}

/// 書籍を更新する
///
/// 検証順序：
/// 1. 書籍名が指定されていること
/// 2. 既読ページ数が総ページ数以下であること
/// 3. 書籍が存在すること
///
/// IDと登録日時以外のすべての項目を置き換える。
pub async fn edit_book(deps: &ServiceDependencies, cmd: EditBook) -> Result<Book> {
    // 1. 入力の検証（存在確認より先に行う）
    let draft = BookDraft::try_from(cmd.details)?;

    // 2. 既存の書籍を取得
    let current = load_book(&deps.book_repository, &cmd.book_id).await?;

    // 3. ドメイン層の純粋関数を呼び出し
    let revised = book::revise_book(current, draft, cmd.edited_at);

    // 4. リポジトリを更新
    let replaced = deps
        .book_repository
        .replace(revised.clone())
        .await
        .map_err(BookApplicationError::RepositoryError)?;

    // 取得から置き換えまでの間に削除された場合
    if !replaced {
        return Err(BookApplicationError::BookNotFound);
    }

    tracing::info!(book_id = %revised.id, "book updated");
    Ok(revised)
}

/// 書籍を削除する
pub async fn delete_book(deps: &ServiceDependencies, book_id: &BookId) -> Result<()> {
    let removed = deps
        .book_repository
        .remove(book_id)
        .await
        .map_err(BookApplicationError::RepositoryError)?;

    if !removed {
        return Err(BookApplicationError::BookNotFound);
    }

    tracing::info!(book_id = %book_id, "book deleted");
    Ok(())
}
