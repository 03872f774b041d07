//! Symbol tables read from the TABLES section.
//!
//! Only layers and text styles are kept. Rendering reads layer colors from
//! here; nothing mutates a table once the document is assembled.

use indexmap::IndexMap;

pub mod layer;
pub mod textstyle;

pub use layer::{Layer, LayerFlags};
pub use textstyle::{TextGenerationFlags, TextStyle};

/// Base trait for all table entries
pub trait TableEntry {
    /// Get the entry's name
    fn name(&self) -> &str;

    /// Set the entry's name
    fn set_name(&mut self, name: String);
}

/// Named entries in file order.
///
/// Names are matched exactly as written, so `Walls` and `WALLS` are two
/// different layers. A later entry with the same name replaces the earlier
/// one.
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<String, T>,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            entries: IndexMap::new(),
        }
    }

    /// Add an entry, returning the one it replaced
    pub fn insert(&mut self, entry: T) -> Option<T> {
        self.entries.insert(entry.name().to_string(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Get all entry names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableEntry> FromIterator<T> for Table<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Table::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}
