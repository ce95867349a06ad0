use crate::error::{Result, ShelfError};
use crate::model::Book;

/// Position of the book whose id matches exactly (case-sensitive).
pub fn position_by_id(books: &[Book], id: &str) -> Result<usize> {
    books
        .iter()
        .position(|b| b.id == id)
        .ok_or_else(|| ShelfError::NotFound(id.to_string()))
}

/// Ids that appear more than once, each reported once, in first-seen order.
pub fn duplicate_ids(books: &[Book]) -> Vec<&str> {
    let mut dups: Vec<&str> = Vec::new();
    for (i, book) in books.iter().enumerate() {
        let seen_before = books[..i].iter().any(|b| b.id == book.id);
        if seen_before && !dups.contains(&book.id.as_str()) {
            dups.push(&book.id);
        }
    }
    dups
}
