use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookChanges;
use crate::store::DataStore;

use super::helpers::position_by_id;

pub fn run<S: DataStore>(store: &mut S, id: &str, changes: &BookChanges) -> Result<CmdResult> {
    changes.validate()?;

    let mut books = store.load().books;
    let pos = position_by_id(&books, id)?;

    books[pos].apply(changes);
    store.save(&books)?;

    let book = books.swap_remove(pos);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book updated ({}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
