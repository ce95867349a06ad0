//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every bookshelf operation, whatever the UI.
//!
//! It comes in two shapes:
//!
//! - Methods returning [`CmdResult`], carrying user-facing messages. The CLI
//!   uses these.
//! - The [`RecordStore`] trait: the bare capability set (load, save, add,
//!   find, search, update, delete) with typed returns, for callers that do
//!   their own presentation.
//!
//! Neither does business logic (that lives in `commands/*.rs`) or any I/O of
//! its own.
//!
//! ## Generic Over DataStore
//!
//! `ShelfApi<S: DataStore>`:
//! - Production: `ShelfApi<CsvStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookChanges};
use crate::store::DataStore;

/// Operations the presentation layer may invoke on the book collection.
///
/// Every mutation validates first and writes only on success, so an `Err`
/// always means the stored collection is unchanged.
pub trait RecordStore {
    /// All books in store order. Never fails; malformed lines are skipped.
    fn load(&self) -> Vec<Book>;

    /// Replace the whole collection. Records are written as given; only
    /// fields that would break the line format are refused.
    fn save(&mut self, books: &[Book]) -> Result<()>;

    fn add(&mut self, book: Book) -> Result<Book>;

    /// Exact, case-sensitive id lookup.
    fn find_by_id(&self, id: &str) -> Result<Book>;

    /// First book whose id or title equals `term`, ignoring case.
    fn search(&self, term: &str) -> Result<Book>;

    fn update(&mut self, id: &str, changes: &BookChanges) -> Result<Book>;

    /// Returns the removed book.
    fn delete(&mut self, id: &str) -> Result<Book>;
}

/// The main API facade for bookshelf operations.
pub struct ShelfApi<S: DataStore> {
    store: S,
    paths: commands::ShelfPaths,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S, paths: commands::ShelfPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_book(&mut self, book: Book) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, book)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_book(&self, id: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, id)
    }

    pub fn search_books(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn update_book(&mut self, id: &str, changes: &BookChanges) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, changes)
    }

    pub fn delete_book(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn check(&mut self, fix: bool) -> Result<commands::CmdResult> {
        commands::check::run(&mut self.store, fix)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: DataStore> RecordStore for ShelfApi<S> {
    fn load(&self) -> Vec<Book> {
        self.store.load().books
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        for book in books {
            book.ensure_writable()?;
        }
        self.store.save(books)
    }

    fn add(&mut self, book: Book) -> Result<Book> {
        first_book(self.add_book(book)?.affected_books)
    }

    fn find_by_id(&self, id: &str) -> Result<Book> {
        first_book(self.find_book(id)?.listed_books)
    }

    fn search(&self, term: &str) -> Result<Book> {
        first_book(self.search_books(term)?.listed_books)
    }

    fn update(&mut self, id: &str, changes: &BookChanges) -> Result<Book> {
        first_book(self.update_book(id, changes)?.affected_books)
    }

    fn delete(&mut self, id: &str) -> Result<Book> {
        first_book(self.delete_book(id)?.affected_books)
    }
}

fn first_book(books: Vec<Book>) -> Result<Book> {
    books
        .into_iter()
        .next()
        .ok_or_else(|| ShelfError::Api("command returned no book".to_string()))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ShelfPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Availability;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api(store: InMemoryStore) -> ShelfApi<InMemoryStore> {
        ShelfApi::new(
            store,
            ShelfPaths {
                root: PathBuf::from("."),
            },
        )
    }

    fn dune() -> Book {
        Book::new("B1", "Dune", "Herbert", "SciFi", "Available").unwrap()
    }

    #[test]
    fn add_book_dispatches_and_reports() {
        let mut api = api(InMemoryStore::new());
        let result = api.add_book(dune()).unwrap();
        assert_eq!(result.affected_books, vec![dune()]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(api.store().save_count(), 1);
    }

    #[test]
    fn record_store_lifecycle() {
        let mut api = api(InMemoryStore::new());
        assert!(api.load().is_empty());

        api.add(dune()).unwrap();
        assert_eq!(api.load(), vec![dune()]);

        let changes = BookChanges::new("Dune", "Herbert", "SciFi", "Checked Out").unwrap();
        api.update("B1", &changes).unwrap();
        assert_eq!(
            api.find_by_id("B1").unwrap().status(),
            Some(Availability::CheckedOut)
        );

        let removed = api.delete("B1").unwrap();
        assert_eq!(removed.id, "B1");
        assert!(api.load().is_empty());
    }

    #[test]
    fn record_store_search_and_not_found() {
        let api = api(StoreFixture::new().with_book("B7", "Moby Dick", "Reserved").store);
        assert_eq!(api.search("moby dick").unwrap().id, "B7");
        assert!(matches!(api.search("moby"), Err(ShelfError::NotFound(_))));
        assert!(matches!(api.find_by_id("b7"), Err(ShelfError::NotFound(_))));
    }

    #[test]
    fn save_refuses_fields_that_break_lines() {
        let mut api = api(InMemoryStore::new());
        let mut broken = dune();
        broken.title = "Dune, Part One".into();
        assert!(matches!(
            api.save(&[broken]),
            Err(ShelfError::Validation(_))
        ));

        broken = dune();
        broken.author = "Frank\nHerbert".into();
        assert!(api.save(&[broken]).is_err());
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn save_writes_hand_edited_records_as_given() {
        let mut api = api(
            StoreFixture::new()
                .with_stored_fields(["B1", "Dune", "", "SciFi", "On Loan"])
                .with_stored_fields(["B1", "Emma", "Austen", "Classic", "available"])
                .store,
        );
        let before = api.load();
        api.save(&before).unwrap();
        assert_eq!(api.load(), before);
    }

    #[test]
    fn save_of_load_is_stable() {
        let mut api = api(StoreFixture::new().with_books(3).store);
        let before = api.load();
        api.save(&before).unwrap();
        assert_eq!(api.load(), before);
    }
}
