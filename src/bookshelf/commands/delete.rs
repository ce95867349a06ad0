use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::position_by_id;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut books = store.load().books;
    let pos = position_by_id(&books, id)?;

    let removed = books.remove(pos);
    store.save(&books)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book deleted ({}): {}",
        removed.id, removed.title
    )));
    Ok(result.with_affected_books(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_only_the_matching_book() {
        let mut store = StoreFixture::new().with_books(3).store;
        let result = run(&mut store, "B2").unwrap();

        assert_eq!(result.affected_books[0].id, "B2");
        let ids: Vec<String> = store.load().books.into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["B1", "B3"]);
    }

    #[test]
    fn unknown_id_does_not_write() {
        let mut store = StoreFixture::new().with_books(1).store;
        let err = run(&mut store, "b1").unwrap_err();

        assert!(matches!(err, ShelfError::NotFound(_)));
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.load().books.len(), 1);
    }

    #[test]
    fn id_match_does_not_trim() {
        let mut store = StoreFixture::new()
            .with_book("B1", "Dune", "Available")
            .with_stored_fields([" B2", "Emma", "Austen", "Classic", "Reserved"])
            .store;

        assert!(matches!(run(&mut store, " B1"), Err(ShelfError::NotFound(_))));
        assert_eq!(store.save_count(), 0);

        let result = run(&mut store, " B2").unwrap();
        assert_eq!(result.affected_books[0].title, "Emma");
        let ids: Vec<String> = store.load().books.into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["B1"]);
    }

    #[test]
    fn keeps_unvalidated_records_of_other_books() {
        let mut store = StoreFixture::new()
            .with_stored_fields(["X1", "Dune", "Herbert", "", "On Loan"])
            .with_books(2)
            .store;

        run(&mut store, "B2").unwrap();
        let books = store.load().books;
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].availability, "On Loan");
        assert_eq!(books[0].genre, "");
    }

    #[test]
    fn failed_write_keeps_the_book() {
        let mut store = StoreFixture::new().with_books(1).failing_writes().store;
        let err = run(&mut store, "B1").unwrap_err();

        assert!(matches!(err, ShelfError::Persistence { .. }));
        assert_eq!(store.load().books.len(), 1);
    }
}
