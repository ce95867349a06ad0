//! # Bookshelf Architecture
//!
//! Bookshelf keeps a small library catalogue in a flat CSV file. It is a
//! **library that happens to have a CLI client**: the record store knows
//! nothing about terminals, and any other front end could drive it the
//! same way.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders books and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - ShelfApi facade and the RecordStore capability set       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, duplicate-id enforcement, lookups            │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load the whole snapshot, replace it     │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! Every operation loads the whole collection, works on it in memory, and a
//! mutation rewrites the whole file. That is fine for a personal catalogue
//! and keeps the file trivially editable by hand. Only one process is
//! expected to use a given file at a time.
//!
//! ## Errors
//!
//! Domain outcomes (validation failure, duplicate id, not found) and write
//! failures are all [`error::ShelfError`] variants. A failed operation never
//! leaves a partial write behind. Reading is the exception: an unreadable file
//! is logged and treated as empty, and malformed lines are skipped (the
//! `check` command lists them).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and [`api::RecordStore`]
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction, CSV line format, implementations
//! - [`model`]: `Book`, `Availability`, `BookChanges`
//! - [`config`]: `.bookshelf.json` handling
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
