//! Line format of the backing file.
//!
//! One record per line, `id,title,author,genre,availability`, with a bare
//! comma as delimiter and no quoting. Every line with exactly five fields is
//! a record, kept byte for byte, whatever its contents. Other lines are
//! skipped and reported in the [`Snapshot`], never as an error.

use super::{SkippedLine, Snapshot};
use crate::model::Book;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::io::{self, Read};
use tracing::debug;

pub const FIELD_COUNT: usize = 5;

/// Parses every line of `reader`.
///
/// Returns an I/O error only when the underlying reader fails; malformed
/// lines end up in [`Snapshot::skipped`].
pub fn parse<R: Read>(reader: R) -> io::Result<Snapshot> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut snapshot = Snapshot::default();
    let mut record = csv::ByteRecord::new();
    loop {
        let line = rdr.position().line();
        match rdr.read_byte_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map_or(line, |p| p.line());
                match parse_record(&record) {
                    Ok(book) => snapshot.books.push(book),
                    Err(reason) => {
                        debug!(line, %reason, "skipping malformed line");
                        snapshot.skipped.push(SkippedLine {
                            line,
                            content: raw_line(&record),
                            reason,
                        });
                    }
                }
            }
            Err(e) => {
                if e.is_io_error() {
                    return Err(e.into());
                }
                debug!(line, error = %e, "skipping unreadable line");
                snapshot.skipped.push(SkippedLine {
                    line,
                    content: String::new(),
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(snapshot)
}

fn parse_record(record: &csv::ByteRecord) -> Result<Book, String> {
    if record.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        ));
    }
    let record = StringRecord::from_byte_record(record.clone())
        .map_err(|_| "line is not valid UTF-8".to_string())?;

    // Fields are kept exactly as written.
    Ok(Book {
        id: record[0].to_string(),
        title: record[1].to_string(),
        author: record[2].to_string(),
        genre: record[3].to_string(),
        availability: record[4].to_string(),
    })
}

fn raw_line(record: &csv::ByteRecord) -> String {
    let fields: Vec<String> = record
        .iter()
        .map(|f| String::from_utf8_lossy(f).into_owned())
        .collect();
    fields.join(",")
}

/// Serializes `books` in order, one line each, `\n` terminated.
pub fn write(books: &[Book]) -> io::Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for book in books {
        wtr.write_record(book.fields())?;
    }
    wtr.into_inner().map_err(|e| e.into_error())
}
