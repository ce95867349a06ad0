use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::position_by_id;

/// Looks a book up by its exact id.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let mut books = store.load().books;
    let pos = position_by_id(&books, id)?;
    Ok(CmdResult::default().with_listed_books(vec![books.swap_remove(pos)]))
}
