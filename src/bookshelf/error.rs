use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Invalid book: {0}")]
    Validation(String),

    #[error("A book with ID '{0}' already exists")]
    DuplicateId(String),

    #[error("No book found matching '{0}'")]
    NotFound(String),

    /// The backing file could not be written; the mutation did not apply.
    #[error("Could not save books to {location}: {source}")]
    Persistence {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ShelfError {
    /// True for outcomes the user caused (bad input, unknown id), as opposed
    /// to failures of the machine.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ShelfError::Validation(_) | ShelfError::DuplicateId(_) | ShelfError::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
