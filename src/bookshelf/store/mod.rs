//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam of bookshelf: it knows how to
//! read the whole collection and how to replace it, nothing else. Duplicate
//! detection, validation and lookups live in the command layer on top of it.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: the production store, one CSV file
//!   - Read failures degrade to an empty snapshot (logged)
//!   - Writes go to a temp file which is renamed over the original
//!
//! - [`memory::InMemoryStore`]: for tests
//!   - No persistence
//!   - Can be told to fail writes, to exercise error paths
//!
//! ## Storage Format
//!
//! ```text
//! books.csv
//! B1,Dune,Herbert,SciFi,Available
//! B2,Emma,Austen,Classic,Checked Out
//! ```
//!
//! See [`lines`] for the exact parsing rules.
//!
//! There is no locking: one running instance is assumed to own the file.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod lines;
pub mod memory;

/// A line of the backing file that did not yield a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: u64,
    pub content: String,
    pub reason: String,
}

/// Everything a load produced, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub books: Vec<Book>,
    pub skipped: Vec<SkippedLine>,
}

/// Abstract interface for the book collection's persistence.
pub trait DataStore {
    /// Load the full snapshot. Never fails: an absent or unreadable backing
    /// file is an empty snapshot.
    fn load(&self) -> Snapshot;

    /// Replace the stored collection with `books`, in order.
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Human readable location of the collection, for messages.
    fn location(&self) -> String;
}
