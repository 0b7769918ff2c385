use crate::domain::{BookId, book::Book};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// ロックが汚染された（保持中のスレッドがパニックした）
#[derive(Debug, Error)]
#[error("book store lock poisoned")]
pub struct LockPoisoned;

/// BookRepositoryのインメモリ実装
///
/// プロセスの生存期間中のみ書籍を保持する。再起動後は空になる。
/// `Vec`で挿入順序を保持し、各操作はロックの内側で完結する。
#[derive(Debug, Default)]
pub struct BookRepository {
    books: RwLock<Vec<Book>>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の書籍で初期化する
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Book>>> {
        self.books.read().map_err(|_| LockPoisoned.into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books.write().map_err(|_| LockPoisoned.into())
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn insert(&self, book: Book) -> Result<()> {
        self.write()?.push(book);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Book>> {
        Ok(self.read()?.clone())
    }

    async fn get_by_id(&self, book_id: &BookId) -> Result<Option<Book>> {
        Ok(self.read()?.iter().find(|book| &book.id == book_id).cloned())
    }

    async fn replace(&self, book: Book) -> Result<bool> {
        let mut books = self.write()?;
        match books.iter_mut().find(|existing| existing.id == book.id) {
            Some(slot) => {
                *slot = book;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, book_id: &BookId) -> Result<bool> {
        let mut books = self.write()?;
        match books.iter().position(|book| &book.id == book_id) {
            Some(index) => {
                books.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
