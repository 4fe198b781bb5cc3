//! In-memory catalog of titles plus fixed library facts.
//!
//! Read-only after construction. Lookups never fail; absence is an
//! `Option::None`, handled by the caller.

use serde::{Deserialize, Serialize};

/// Posted opening hours. Read by both the router (as vocabulary context)
/// and the synthesizer.
pub const OPENING_HOURS: &str =
    "Monday to Friday: 9 AM to 8 PM, Saturday: 10 AM to 6 PM, Sunday: Closed";

/// A catalogued title with its holdings count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Display title, unique within the catalog (the lookup key)
    pub title: String,
    pub author: String,
    /// Copies currently on the shelf
    pub copies: u32,
}

impl BookRecord {
    pub fn new(title: &str, author: &str, copies: u32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            copies,
        }
    }
}

/// The catalog: insertion-ordered, never mutated after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    books: Vec<BookRecord>,
}

impl Catalog {
    /// Build a catalog from records. Later duplicates of a title are
    /// dropped so titles stay unique.
    pub fn new(records: Vec<BookRecord>) -> Self {
        let mut books: Vec<BookRecord> = Vec::with_capacity(records.len());
        for record in records {
            if !books.iter().any(|b| b.title == record.title) {
                books.push(record);
            }
        }
        Self { books }
    }

    /// The built-in holdings table.
    pub fn builtin() -> Self {
        Self::new(vec![
            BookRecord::new("The Great Gatsby", "F. Scott Fitzgerald", 3),
            BookRecord::new("To Kill a Mockingbird", "Harper Lee", 2),
            BookRecord::new("1984", "George Orwell", 5),
            BookRecord::new("Pride and Prejudice", "Jane Austen", 4),
            BookRecord::new("The Catcher in the Rye", "J.D. Salinger", 1),
            BookRecord::new("One Hundred Years of Solitude", "Gabriel García Márquez", 2),
            BookRecord::new("The Hobbit", "J.R.R. Tolkien", 3),
            BookRecord::new("Fahrenheit 451", "Ray Bradbury", 4),
        ])
    }

    /// Titles in catalog order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.books.iter().map(|b| b.title.as_str())
    }

    /// Records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &BookRecord> {
        self.books.iter()
    }

    /// Exact-title lookup (case-sensitive, the store key).
    pub fn find(&self, title: &str) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.title == title)
    }

    /// Whole-title search, case-insensitive with surrounding whitespace
    /// ignored. This is the front-desk search, not the store key.
    pub fn search(&self, title: &str) -> Option<&BookRecord> {
        let wanted = title.trim().to_lowercase();
        self.books.iter().find(|b| b.title.to_lowercase() == wanted)
    }

    pub fn opening_hours(&self) -> &'static str {
        OPENING_HOURS
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Comma-joined titles, used when serializing the catalog into a prompt.
    pub fn summary_line(&self) -> String {
        self.titles().collect::<Vec<_>>().join(", ")
    }
}
