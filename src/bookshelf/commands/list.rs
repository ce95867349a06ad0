use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let books = store.load().books;
    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("No books in the library yet."));
    }
    Ok(result.with_listed_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_store_order() {
        let store = StoreFixture::new()
            .with_book("Z9", "Last Added First", "Available")
            .with_book("A1", "Second", "Reserved")
            .store;

        let result = run(&store).unwrap();
        let ids: Vec<&str> = result.listed_books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["Z9", "A1"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_says_so() {
        let result = run(&InMemoryStore::new()).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No books in the library yet.");
    }
}
