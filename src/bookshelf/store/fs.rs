use super::{lines, DataStore, Snapshot};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "books.csv";

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    fn write_atomic(&self, bytes: &[u8]) -> io::Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let tmp_file = dir.join(format!(".books-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, bytes) {
            let _ = fs::remove_file(&tmp_file);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(e);
        }
        Ok(())
    }
}

impl DataStore for CsvStore {
    fn load(&self) -> Snapshot {
        let file = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Snapshot::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read books, treating store as empty");
                return Snapshot::default();
            }
        };

        match lines::parse(io::BufReader::new(file)) {
            Ok(snapshot) => {
                debug!(
                    path = %self.path.display(),
                    books = snapshot.books.len(),
                    skipped = snapshot.skipped.len(),
                    "loaded books"
                );
                snapshot
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read books, treating store as empty");
                Snapshot::default()
            }
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let written = lines::write(books).and_then(|bytes| self.write_atomic(&bytes));
        if let Err(source) = written {
            return Err(ShelfError::Persistence {
                location: self.location(),
                source,
            });
        }
        debug!(path = %self.path.display(), books = books.len(), "saved books");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
