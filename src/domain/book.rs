use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{BookError, BookId, ReadingProgress, commands::BookDetails};

// ============================================================================
// 集約
// ============================================================================

/// 書籍集約
///
/// ビジネスルール：
/// - IDと登録日時は作成後に変更されない
/// - 読了フラグは常に読書進捗から導出される（個別に設定できない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    // 識別子
    pub id: BookId,

    // 書誌情報（name以外は受け取った値をそのまま保持する）
    pub name: String,
    pub year: Option<Value>,
    pub author: Option<Value>,
    pub summary: Option<Value>,
    pub publisher: Option<Value>,

    // 読書状況
    pub progress: ReadingProgress,
    pub reading: bool,

    // 監査情報
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// 読了済みか
    pub fn finished(&self) -> bool {
        self.progress.is_finished()
    }

    /// 書籍名に部分文字列が含まれるか（大文字小文字を区別しない）
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// バリデーション済みの書籍入力
///
/// `BookDetails`からのみ作成でき、書籍名の存在と読書進捗の不変条件が保証される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub name: String,
    pub year: Option<Value>,
    pub author: Option<Value>,
    pub summary: Option<Value>,
    pub publisher: Option<Value>,
    pub progress: ReadingProgress,
    pub reading: bool,
}

impl TryFrom<BookDetails> for BookDraft {
    type Error = BookError;

    /// 検証順序：書籍名 → 既読ページ数
    fn try_from(details: BookDetails) -> Result<Self, Self::Error> {
        let name = details.name.ok_or(BookError::MissingName)?;
        let progress = ReadingProgress::new(details.page_count, details.read_page)?;

        Ok(Self {
            name,
            year: details.year,
            author: details.author,
            summary: details.summary,
            publisher: details.publisher,
            progress,
            reading: details.reading,
        })
    }
}

// ============================================================================
// ドメイン関数
// ============================================================================

/// 書籍を登録する（純粋関数）
///
/// 新しいIDを採番し、登録日時と更新日時を同じ時刻で記録する。
pub fn register_book(draft: BookDraft, registered_at: DateTime<Utc>) -> Book {
    Book {
        id: BookId::new(),
        name: draft.name,
        year: draft.year,
        author: draft.author,
        summary: draft.summary,
        publisher: draft.publisher,
        progress: draft.progress,
        reading: draft.reading,
        inserted_at: registered_at,
        updated_at: registered_at,
    }
}

/// 書籍を更新する（純粋関数）
///
/// IDと登録日時以外のすべての項目を置き換え、更新日時を進める。
pub fn revise_book(book: Book, draft: BookDraft, revised_at: DateTime<Utc>) -> Book {
    Book {
        id: book.id,
        name: draft.name,
        year: draft.year,
        author: draft.author,
        summary: draft.summary,
        publisher: draft.publisher,
        progress: draft.progress,
        reading: draft.reading,
        inserted_at: book.inserted_at,
        updated_at: revised_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn details(name: Option<&str>, page_count: u32, read_page: u32) -> BookDetails {
        BookDetails {
            name: name.map(str::to_string),
            year: Some(json!(2010)),
            author: Some(json!("John Doe")),
            summary: Some(json!("Lorem ipsum dolor sit amet")),
            publisher: Some(json!("Dicoding Indonesia")),
            page_count: Some(page_count),
            read_page: Some(read_page),
            reading: false,
        }
    }

    #[test]
    fn test_draft_requires_name() {
        let result = BookDraft::try_from(details(None, 100, 25));
        assert_eq!(result.unwrap_err(), BookError::MissingName);
    }

    #[test]
    fn test_draft_checks_name_before_progress() {
        let result = BookDraft::try_from(details(None, 100, 250));
        assert_eq!(result.unwrap_err(), BookError::MissingName);
    }

    #[test]
    fn test_draft_rejects_read_page_over_page_count() {
        let result = BookDraft::try_from(details(Some("Buku A"), 100, 250));
        assert!(matches!(
            result,
            Err(BookError::ReadPageExceedsPageCount { .. })
        ));
    }

    #[test]
    fn test_draft_accepts_empty_name() {
        let draft = BookDraft::try_from(details(Some(""), 10, 0)).unwrap();
        assert_eq!(draft.name, "");
    }

    #[test]
    fn test_register_book_stamps_both_timestamps() {
        let now = Utc::now();
        let draft = BookDraft::try_from(details(Some("Buku A"), 100, 25)).unwrap();

        let book = register_book(draft, now);

        assert_eq!(book.name, "Buku A");
        assert_eq!(book.inserted_at, now);
        assert_eq!(book.updated_at, now);
        assert!(!book.finished());
    }

    #[test]
    fn test_register_book_derives_finished() {
        let draft = BookDraft::try_from(details(Some("Buku A"), 100, 100)).unwrap();
        let book = register_book(draft, Utc::now());
        assert!(book.finished());
    }

    #[test]
    fn test_revise_book_keeps_id_and_inserted_at() {
        let inserted_at = Utc::now();
        let draft = BookDraft::try_from(details(Some("Buku A"), 100, 25)).unwrap();
        let original = register_book(draft, inserted_at);

        let revised_at = inserted_at + Duration::minutes(5);
        let draft = BookDraft::try_from(details(Some("Buku A Revisi"), 200, 200)).unwrap();
        let revised = revise_book(original.clone(), draft, revised_at);

        assert_eq!(revised.id, original.id);
        assert_eq!(revised.inserted_at, inserted_at);
        assert_eq!(revised.updated_at, revised_at);
        assert_eq!(revised.name, "Buku A Revisi");
        assert_eq!(revised.progress.page_count(), Some(200));
        assert!(revised.finished());
    }

    #[test]
    fn test_draft_keeps_opaque_fields_as_given() {
        let draft = BookDraft::try_from(BookDetails {
            name: Some("Buku A".to_string()),
            year: Some(json!("2010")),
            author: Some(json!(42)),
            summary: Some(json!(null)),
            publisher: None,
            ..Default::default()
        })
        .unwrap();

        let book = register_book(draft, Utc::now());
        assert_eq!(book.year, Some(json!("2010")));
        assert_eq!(book.author, Some(json!(42)));
        assert_eq!(book.summary, Some(json!(null)));
        assert_eq!(book.publisher, None);
    }

    #[test]
    fn test_draft_without_page_count_accepts_read_page() {
        let draft = BookDraft::try_from(BookDetails {
            name: Some("Buku A".to_string()),
            read_page: Some(5),
            ..Default::default()
        })
        .unwrap();

        let book = register_book(draft, Utc::now());
        assert_eq!(book.progress.read_page(), Some(5));
        assert!(!book.finished());
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let draft = BookDraft::try_from(details(Some("Sejarah"), 10, 0)).unwrap();
        let book = register_book(draft, Utc::now());

        assert!(book.name_contains("jar"));
        assert!(book.name_contains("SEJ"));
        assert!(!book.name_contains("dongeng"));
    }
}
