use std::collections::HashMap;
use std::path::Path;

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Search dictionary by exact match
    fn lookup_exact(&self, query: &str) -> Option<&str>;

    /// Longest entry whose key lies inside `query` or contains `query`.
    ///
    /// Length is counted in chars. Equal lengths resolve to the
    /// lexicographically smaller key so the result never depends on
    /// hash iteration order.
    fn longest_overlap(&self, query: &str) -> Option<Entry<'_>>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Borrowed view of a single source → target pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub entry_count: usize,
}

/// Flat phrase → translation table.
///
/// Inserts are first-writer-wins: once a key is present its translation
/// never changes for the lifetime of the table.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    name: String,
    entries: HashMap<String, String>,
}

impl PhraseTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Build a table from a flat JSON object (`{"source": "target", ...}`)
    pub fn from_json(name: impl Into<String>, json_str: &str) -> Result<Self, LoadError> {
        let raw: HashMap<String, String> =
            serde_json::from_str(json_str).map_err(|e| LoadError::ParseError(e.to_string()))?;

        let mut table = Self::new(name);
        let mut keys: Vec<&String> = raw.keys().collect();
        keys.sort_unstable();

        for key in keys {
            let value = &raw[key];
            if !table.insert_if_absent(key, value) {
                tracing::warn!("Skipping empty entry {:?} in table {}", key, table.name);
            }
        }

        Ok(table)
    }

    /// Load a table from a JSON file on disk
    pub fn from_file(name: impl Into<String>, path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(name, &json)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert unless the key already exists or either side is empty.
    /// Returns whether the entry was added.
    pub fn insert_if_absent(&mut self, key: &str, value: &str) -> bool {
        if key.is_empty() || value.is_empty() || self.entries.contains_key(key) {
            return false;
        }
        self.entries.insert(key.to_string(), value.to_string());
        true
    }

    /// Merge another table into this one.
    /// Keys already present here keep their translation.
    pub fn merge(&mut self, other: PhraseTable) -> usize {
        let mut added = 0;
        for (key, value) in other.entries {
            if self.insert_if_absent(&key, &value) {
                added += 1;
            }
        }
        added
    }

    /// Rewrite every key through `f`, e.g. for Unicode normalization.
    /// Keys that collide after rewriting keep the first one in sorted order.
    pub fn map_keys(self, f: impl Fn(&str) -> String) -> Self {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort_unstable();

        let mut mapped = Self::new(self.name.clone());
        for key in keys {
            mapped.insert_if_absent(&f(key), &self.entries[key]);
        }
        mapped
    }

    pub fn iter(&self) -> impl Iterator<Item = Entry<'_>> {
        self.entries.iter().map(|(source, target)| Entry {
            source: source.as_str(),
            target: target.as_str(),
        })
    }

    /// Owned snapshot of every entry
    pub fn to_map(&self) -> HashMap<String, String> {
        self.entries.clone()
    }
}

impl Dictionary for PhraseTable {
    fn lookup_exact(&self, query: &str) -> Option<&str> {
        self.get(query)
    }

    fn longest_overlap(&self, query: &str) -> Option<Entry<'_>> {
        if query.is_empty() {
            return None;
        }

        let mut best: Option<(usize, Entry<'_>)> = None;
        for entry in self.iter() {
            if !(query.contains(entry.source) || entry.source.contains(query)) {
                continue;
            }

            let len = entry.source.chars().count();
            let better = match &best {
                None => true,
                Some((best_len, best_entry)) => {
                    len > *best_len || (len == *best_len && entry.source < best_entry.source)
                }
            };
            if better {
                best = Some((len, entry));
            }
        }

        best.map(|(_, entry)| entry)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            entry_count: self.entries.len(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
