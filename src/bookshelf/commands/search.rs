use crate::commands::CmdResult;
use crate::error::{Result, ShelfError};
use crate::store::DataStore;

/// First book, in store order, whose id or title equals `term` ignoring case.
/// Whole-value matches only.
pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let term_lower = term.to_lowercase();

    let found = store
        .load()
        .books
        .into_iter()
        .find(|b| b.id.to_lowercase() == term_lower || b.title.to_lowercase() == term_lower)
        .ok_or_else(|| ShelfError::NotFound(term.to_string()))?;

    Ok(CmdResult::default().with_listed_books(vec![found]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn matches_title_ignoring_case() {
        let store = StoreFixture::new()
            .with_book("B1", "Dune", "Available")
            .with_book("B2", "Moby Dick", "Reserved")
            .store;

        let result = run(&store, "moby dick").unwrap();
        assert_eq!(result.listed_books[0].id, "B2");
    }

    #[test]
    fn matches_id_ignoring_case() {
        let store = StoreFixture::new().with_book("ISBN-42", "Dune", "Available").store;
        let result = run(&store, "isbn-42").unwrap();
        assert_eq!(result.listed_books[0].title, "Dune");
    }

    #[test]
    fn returns_first_match_in_store_order() {
        let store = StoreFixture::new()
            .with_book("B1", "Emma", "Available")
            .with_book("B2", "EMMA", "Reserved")
            .store;

        let result = run(&store, "emma").unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].id, "B1");
    }

    #[test]
    fn id_match_can_come_before_title_match() {
        let store = StoreFixture::new()
            .with_book("dune", "Something Else", "Available")
            .with_book("B2", "Dune", "Available")
            .store;

        let result = run(&store, "Dune").unwrap();
        assert_eq!(result.listed_books[0].id, "dune");
    }

    #[test]
    fn no_substring_matching() {
        let store = StoreFixture::new().with_book("B1", "Moby Dick", "Available").store;
        assert!(matches!(run(&store, "Moby"), Err(ShelfError::NotFound(_))));
        assert!(matches!(run(&store, "B"), Err(ShelfError::NotFound(_))));
    }

    #[test]
    fn term_is_compared_as_given() {
        let store = StoreFixture::new().with_book("B1", "Dune", "Available").store;
        assert!(matches!(run(&store, " dune "), Err(ShelfError::NotFound(_))));
    }
}
