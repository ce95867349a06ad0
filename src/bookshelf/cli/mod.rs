//! # CLI Behavior
//!
//! This is **one possible UI client** for bookshelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the library documentation.
//!
//! ### Naked Execution (`bookshelf`)
//!
//! Running `bookshelf` with no arguments defaults to `bookshelf list`.
//!
//! ### Partial Updates
//!
//! `bookshelf update B1 --availability "Checked Out"` only changes the given
//! fields. The handler reads the current record and fills in the rest before
//! asking the API for a full update.
//!
//! ### Search Terms
//!
//! `bookshelf search moby dick` joins its words with single spaces, so titles
//! do not need quoting. The match is exact apart from case.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call API and format output
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap, help text
//! - `styles`: Terminal styling

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
pub use render::print_error;
