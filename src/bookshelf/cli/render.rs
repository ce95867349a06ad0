//! # Rendering Module
//!
//! Turns books and command messages into terminal text. Layout (column
//! widths, truncation) is computed here with Unicode-aware widths; colours
//! come from the named styles in `styles.rs` and are dropped automatically
//! when stdout is not a terminal.

use super::styles::{names, SHELF_THEME};
use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::error::Result;
use bookshelf::model::{Availability, Book};
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 5] = ["ID", "Title", "Author", "Genre", "Availability"];

/// Renders the book table, or a placeholder when there is nothing to show.
pub fn render_book_list(books: &[Book]) -> String {
    render_book_list_internal(books, None)
}

fn render_book_list_internal(books: &[Book], use_color: Option<bool>) -> String {
    if books.is_empty() {
        return format!(
            "{}\n",
            SHELF_THEME.apply(names::MUTED, "No books found.", use_color)
        );
    }

    let widths = column_widths(books);
    let mut out = String::new();

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| SHELF_THEME.apply(names::HEADER, h, use_color) + &pad(h, *w))
        .collect();
    out.push_str(header.join(COLUMN_GAP).trim_end());
    out.push('\n');

    for book in books {
        let cells = book.fields();
        let mut line = Vec::with_capacity(cells.len());
        for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
            let text = truncate_to_width(cell, *width);
            let style = match i {
                0 => names::ID,
                1 => names::TITLE,
                4 => availability_style(book.status()),
                _ => "",
            };
            let styled = if style.is_empty() {
                text.clone()
            } else {
                SHELF_THEME.apply(style, &text, use_color)
            };
            line.push(styled + &pad(&text, *width));
        }
        out.push_str(line.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }

    out
}

/// Renders one book as a labelled block.
pub fn render_book_detail(book: &Book) -> String {
    render_book_detail_internal(book, None)
}

fn render_book_detail_internal(book: &Book, use_color: Option<bool>) -> String {
    let label_width = HEADERS.iter().map(|h| h.width()).max().unwrap_or(0) + 1;
    let mut out = String::new();
    for (i, (label, value)) in HEADERS.iter().zip(book.fields()).enumerate() {
        let label = format!("{}:", label);
        let value = match i {
            0 => SHELF_THEME.apply(names::ID, value, use_color),
            1 => SHELF_THEME.apply(names::TITLE, value, use_color),
            4 => SHELF_THEME.apply(availability_style(book.status()), value, use_color),
            _ => value.to_string(),
        };
        out.push_str(&format!(
            "{}{} {}\n",
            SHELF_THEME.apply(names::MUTED, &label, use_color),
            pad(&label, label_width),
            value
        ));
    }
    out
}

/// Books as a pretty-printed JSON array.
pub fn render_book_list_json(books: &[Book]) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(books)?))
}

/// Renders command messages with the style of their level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            format!("{}\n", SHELF_THEME.apply(style, &msg.content, use_color))
        })
        .collect()
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Prints a failed operation's message to stderr.
pub fn print_error(message: &str) {
    let styled = console::style(message).red().for_stderr();
    eprintln!("{}", styled);
}

/// Labels the store does not know are shown as warnings.
fn availability_style(status: Option<Availability>) -> &'static str {
    match status {
        Some(Availability::Available) => names::AVAILABLE,
        Some(Availability::CheckedOut) => names::CHECKED_OUT,
        Some(Availability::Reserved) => names::RESERVED,
        Some(Availability::UnderMaintenance) => names::MAINTENANCE,
        None => names::WARNING,
    }
}

/// Each column is as wide as its widest cell, then the title column gives
/// way until the row fits in `LINE_WIDTH`.
fn column_widths(books: &[Book]) -> [usize; 5] {
    let mut widths = HEADERS.map(|h| h.width());
    for book in books {
        for (w, cell) in widths.iter_mut().zip(book.fields()) {
            *w = (*w).max(cell.width());
        }
    }

    let total: usize = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    if total > LINE_WIDTH {
        let overflow = total - LINE_WIDTH;
        widths[1] = widths[1].saturating_sub(overflow).max(HEADERS[1].width());
    }
    widths
}

fn pad(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
