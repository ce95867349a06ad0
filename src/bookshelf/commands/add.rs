use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, book: Book) -> Result<CmdResult> {
    book.validate()?;

    let mut books = store.load().books;
    if books.iter().any(|b| b.id == book.id) {
        return Err(ShelfError::DuplicateId(book.id));
    }

    books.push(book.clone());
    store.save(&books)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn dune() -> Book {
        Book::new("B1", "Dune", "Herbert", "SciFi", "Available").unwrap()
    }

    #[test]
    fn appends_to_the_store() {
        let mut store = StoreFixture::new().with_books(2).store;
        let result = run(&mut store, dune()).unwrap();

        assert_eq!(result.affected_books, vec![dune()]);
        let books = store.load().books;
        assert_eq!(books.len(), 3);
        assert_eq!(books[2], dune());
    }

    #[test]
    fn rejects_duplicate_id_without_writing() {
        let mut store = StoreFixture::new().with_book("B1", "Emma", "Reserved").store;
        let err = run(&mut store, dune()).unwrap_err();

        assert!(matches!(err, ShelfError::DuplicateId(id) if id == "B1"));
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.load().books[0].title, "Emma");
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut store = StoreFixture::new().with_book("b1", "Emma", "Reserved").store;
        run(&mut store, dune()).unwrap();
        assert_eq!(store.load().books.len(), 2);
    }

    #[test]
    fn rejects_invalid_book_without_writing() {
        let mut store = InMemoryStore::new();
        let mut book = dune();
        book.genre = String::new();

        let err = run(&mut store, book).unwrap_err();
        assert!(matches!(err, ShelfError::Validation(_)));
        assert_eq!(store.save_count(), 0);
        assert!(store.load().books.is_empty());
    }

    #[test]
    fn keeps_existing_records_it_would_not_accept() {
        let mut store = StoreFixture::new()
            .with_stored_fields(["B0", "Walden", "Thoreau", "Essay", "On Loan"])
            .with_stored_fields(["B2", "Emma", "", "Classic", "checked-out"])
            .store;

        run(&mut store, dune()).unwrap();
        let books = store.load().books;
        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["B0", "B2", "B1"]);
        assert_eq!(books[0].availability, "On Loan");
        assert_eq!(books[1].availability, "checked-out");
    }

    #[test]
    fn rejects_unknown_availability() {
        let mut store = InMemoryStore::new();
        let mut book = dune();
        book.availability = "On Loan".into();
        assert!(matches!(run(&mut store, book), Err(ShelfError::Validation(_))));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn surfaces_write_failures() {
        let mut store = StoreFixture::new().failing_writes().store;
        let err = run(&mut store, dune()).unwrap_err();
        assert!(matches!(err, ShelfError::Persistence { .. }));
        assert!(store.load().books.is_empty());
    }

    #[test]
    fn ids_stay_unique_across_many_adds() {
        let mut store = InMemoryStore::new();
        for id in ["A", "B", "A", "C", "B", "a"] {
            let book = Book::new(id, "T", "Au", "G", "Available").unwrap();
            let _ = run(&mut store, book);
        }
        let ids: Vec<String> = store.load().books.into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["A", "B", "C", "a"]);
    }
}
