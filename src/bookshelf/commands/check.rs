use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::duplicate_ids;

/// Reports lines of the backing file that were skipped on load, and records
/// that were loaded but would not pass validation today. With `fix`,
/// rewrites the file without the skipped lines. Records are never dropped.
pub fn run<S: DataStore>(store: &mut S, fix: bool) -> Result<CmdResult> {
    let snapshot = store.load();
    let location = store.location();
    let mut result = CmdResult::default();

    let flagged: Vec<_> = snapshot
        .books
        .iter()
        .filter_map(|b| b.validate().err().map(|e| (b, e)))
        .collect();
    let duplicates = duplicate_ids(&snapshot.books);

    if snapshot.skipped.is_empty() && flagged.is_empty() && duplicates.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "No problems found in {} ({} books).",
            location,
            snapshot.books.len()
        )));
        return Ok(result);
    }

    if !flagged.is_empty() || !duplicates.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "{} record(s) in {} need attention (kept as stored):",
            flagged.len() + duplicates.len(),
            location
        )));
        for (book, err) in &flagged {
            result.add_message(CmdMessage::info(format!("  - {}: {}", book.id, err)));
        }
        for id in &duplicates {
            result.add_message(CmdMessage::info(format!(
                "  - id '{}' is used by more than one record",
                id
            )));
        }
    }
    let listed: Vec<_> = flagged.iter().map(|(b, _)| (*b).clone()).collect();

    if !snapshot.skipped.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "{} line(s) in {} are not records and are ignored:",
            snapshot.skipped.len(),
            location
        )));
        for skipped in &snapshot.skipped {
            result.add_message(CmdMessage::info(format!(
                "  - line {}: {} ({})",
                skipped.line, skipped.content, skipped.reason
            )));
        }

        if fix {
            store.save(&snapshot.books)?;
            result.add_message(CmdMessage::success(format!(
                "Removed {} line(s), kept {} books.",
                snapshot.skipped.len(),
                snapshot.books.len()
            )));
        } else {
            result.add_message(CmdMessage::info("Run with --fix to remove them."));
        }
    }

    Ok(result
        .with_listed_books(listed)
        .with_skipped_lines(snapshot.skipped))
}
