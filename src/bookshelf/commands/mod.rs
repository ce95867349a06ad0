use crate::config::ShelfConfig;
use crate::model::Book;
use crate::store::SkippedLine;
use std::path::PathBuf;

pub mod add;
pub mod check;
pub mod config;
pub mod delete;
pub mod find;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;

/// Where the shelf lives: the working directory holding the config file.
#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books created, changed or removed by the command.
    pub affected_books: Vec<Book>,
    /// Books the command wants shown.
    pub listed_books: Vec<Book>,
    pub skipped_lines: Vec<SkippedLine>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_skipped_lines(mut self, lines: Vec<SkippedLine>) -> Self {
        self.skipped_lines = lines;
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}
