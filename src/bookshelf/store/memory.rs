use super::{DataStore, SkippedLine, Snapshot};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    skipped: Vec<SkippedLine>,
    fail_writes: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Snapshot {
        Snapshot {
            books: self.books.clone(),
            skipped: self.skipped.clone(),
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_writes {
            return Err(ShelfError::Persistence {
                location: self.location(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        self.books = books.to_vec();
        self.skipped.clear();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let book = Book::new(
                    &format!("B{}", i + 1),
                    &format!("Test Book {}", i + 1),
                    &format!("Author {}", i + 1),
                    "Fiction",
                    "Available",
                )
                .unwrap();
                self.store.books.push(book);
            }
            self
        }

        pub fn with_book(mut self, id: &str, title: &str, availability: &str) -> Self {
            let book = Book::new(id, title, "Some Author", "Fiction", availability).unwrap();
            self.store.books.push(book);
            self
        }

        /// A record as a hand-edited file might hold it, bypassing validation.
        pub fn with_stored_fields(mut self, fields: [&str; 5]) -> Self {
            let [id, title, author, genre, availability] = fields.map(str::to_string);
            self.store.books.push(Book {
                id,
                title,
                author,
                genre,
                availability,
            });
            self
        }

        pub fn with_skipped_line(mut self, line: u64, content: &str) -> Self {
            self.store.skipped.push(SkippedLine {
                line,
                content: content.to_string(),
                reason: "expected 5 fields".to_string(),
            });
            self
        }

        pub fn failing_writes(mut self) -> Self {
            self.store.fail_writes = true;
            self
        }
    }
}
