use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lending state of a book. The store does not restrict transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    CheckedOut,
    Reserved,
    UnderMaintenance,
}

impl Availability {
    pub const ALL: [Availability; 4] = [
        Availability::Available,
        Availability::CheckedOut,
        Availability::Reserved,
        Availability::UnderMaintenance,
    ];

    /// The label written to the backing file.
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::CheckedOut => "Checked Out",
            Availability::Reserved => "Reserved",
            Availability::UnderMaintenance => "Under Maintenance",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Availability {
    type Err = ShelfError;

    /// Accepts the canonical labels in any case, plus kebab forms such as
    /// `checked-out`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('-', " ").to_lowercase();
        Availability::ALL
            .into_iter()
            .find(|a| a.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                let options: Vec<&str> = Availability::ALL.iter().map(|a| a.label()).collect();
                ShelfError::Validation(format!(
                    "availability must be one of {}, got '{}'",
                    options.join(", "),
                    s.trim()
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// The label exactly as stored. Books created or updated through the
    /// store always carry a canonical [`Availability`] label; hand-edited
    /// files may hold anything.
    pub availability: String,
}

impl Book {
    /// Builds a book from raw user input. Fields are trimmed and validated.
    pub fn new(id: &str, title: &str, author: &str, genre: &str, availability: &str) -> Result<Self> {
        let status: Availability = availability.parse()?;
        let book = Self {
            id: id.trim().to_string(),
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            genre: genre.trim().to_string(),
            availability: status.label().to_string(),
        };
        book.validate()?;
        Ok(book)
    }

    /// Full check applied to new input: every field present and writable,
    /// availability one of the known labels.
    pub fn validate(&self) -> Result<()> {
        check_field("id", &self.id)?;
        check_field("title", &self.title)?;
        check_field("author", &self.author)?;
        check_field("genre", &self.genre)?;
        check_field("availability", &self.availability)?;
        self.availability.parse::<Availability>().map(|_| ())
    }

    /// The weaker check for rewriting records as loaded: each field must
    /// stay on its own line and in its own column.
    pub fn ensure_writable(&self) -> Result<()> {
        for (name, value) in FIELD_NAMES.iter().zip(self.fields()) {
            check_delimiters(name, value)?;
        }
        Ok(())
    }

    /// The parsed availability, `None` for a label the store does not know.
    pub fn status(&self) -> Option<Availability> {
        self.availability.parse().ok()
    }

    /// Overwrites every mutable field. The id never changes.
    pub fn apply(&mut self, changes: &BookChanges) {
        self.title = changes.title.clone();
        self.author = changes.author.clone();
        self.genre = changes.genre.clone();
        self.availability = changes.availability.label().to_string();
    }

    /// The five fields in backing-file order.
    pub fn fields(&self) -> [&str; 5] {
        [
            self.id.as_str(),
            self.title.as_str(),
            self.author.as_str(),
            self.genre.as_str(),
            self.availability.as_str(),
        ]
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Genre: {}, Availability: {}",
            self.id, self.title, self.author, self.genre, self.availability
        )
    }
}

/// New values for the mutable fields of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookChanges {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub availability: Availability,
}

impl BookChanges {
    pub fn new(title: &str, author: &str, genre: &str, availability: &str) -> Result<Self> {
        let changes = Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            genre: genre.trim().to_string(),
            availability: availability.parse()?,
        };
        changes.validate()?;
        Ok(changes)
    }

    pub fn validate(&self) -> Result<()> {
        check_field("title", &self.title)?;
        check_field("author", &self.author)?;
        check_field("genre", &self.genre)
    }
}

const FIELD_NAMES: [&str; 5] = ["id", "title", "author", "genre", "availability"];

fn check_field(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShelfError::Validation(format!("{} is required", name)));
    }
    check_delimiters(name, value)
}

/// The backing file has no quoting, so a delimiter inside a field would
/// split the record on the next load.
fn check_delimiters(name: &str, value: &str) -> Result<()> {
    if value.contains([',', '\n', '\r']) {
        return Err(ShelfError::Validation(format!(
            "{} cannot contain commas or line breaks",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!(
            "checked out".parse::<Availability>().unwrap(),
            Availability::CheckedOut
        );
        assert_eq!(
            "UNDER-MAINTENANCE".parse::<Availability>().unwrap(),
            Availability::UnderMaintenance
        );
        assert_eq!(
            " Available ".parse::<Availability>().unwrap(),
            Availability::Available
        );
    }

    #[test]
    fn rejects_unknown_availability() {
        let err = "Lost".parse::<Availability>().unwrap_err();
        assert!(matches!(err, ShelfError::Validation(_)));
        assert!(err.to_string().contains("Lost"));
    }

    #[test]
    fn new_trims_input() {
        let book = Book::new(" B1 ", " Dune ", "Herbert", "SciFi", "Available").unwrap();
        assert_eq!(book.id, "B1");
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn new_rejects_blank_fields() {
        for (id, title, author, genre) in [
            ("", "Dune", "Herbert", "SciFi"),
            ("B1", "  ", "Herbert", "SciFi"),
            ("B1", "Dune", "", "SciFi"),
            ("B1", "Dune", "Herbert", ""),
        ] {
            let err = Book::new(id, title, author, genre, "Available").unwrap_err();
            assert!(matches!(err, ShelfError::Validation(_)));
        }
    }

    #[test]
    fn new_rejects_delimiters_in_fields() {
        let err = Book::new("B1", "Dune, Part One", "Herbert", "SciFi", "Available").unwrap_err();
        assert!(err.to_string().contains("title"));
        assert!(Book::new("B1", "Dune", "Her\nbert", "SciFi", "Available").is_err());
    }

    #[test]
    fn apply_keeps_id() {
        let mut book = Book::new("B1", "Dune", "Herbert", "SciFi", "Available").unwrap();
        let changes = BookChanges::new("Dune Messiah", "Frank Herbert", "Sci-Fi", "Reserved").unwrap();
        book.apply(&changes);
        assert_eq!(book.id, "B1");
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.availability, "Reserved");
        assert_eq!(book.status(), Some(Availability::Reserved));
    }

    #[test]
    fn fields_follow_file_order() {
        let book = Book::new("B1", "Dune", "Herbert", "SciFi", "checked-out").unwrap();
        assert_eq!(
            book.fields(),
            ["B1", "Dune", "Herbert", "SciFi", "Checked Out"]
        );
    }

    #[test]
    fn stored_labels_keep_their_spelling() {
        let book = Book {
            id: "B1".into(),
            title: "Dune".into(),
            author: "Herbert".into(),
            genre: "SciFi".into(),
            availability: "checked-out".into(),
        };
        assert_eq!(book.fields()[4], "checked-out");
        assert_eq!(book.status(), Some(Availability::CheckedOut));
        assert!(book.validate().is_ok());
    }

    #[test]
    fn unknown_labels_are_writable_but_not_valid() {
        let mut book = Book::new("B1", "Dune", "Herbert", "SciFi", "Available").unwrap();
        book.availability = "On Loan".into();
        assert_eq!(book.status(), None);
        assert!(book.ensure_writable().is_ok());
        assert!(matches!(book.validate(), Err(ShelfError::Validation(_))));

        book.genre = String::new();
        assert!(book.ensure_writable().is_ok());

        book.title = "Dune, Part One".into();
        assert!(book.ensure_writable().is_err());
    }
}
