use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Strips a trailing version suffix (`NP_000537.3` -> `NP_000537`).
pub fn strip_version(id: &str) -> &str {
    id.split('.').next().unwrap_or(id)
}

/// In-memory mapping from protein identifier to residue sequence.
///
/// Identifiers are stored without their version suffix. Sequences keep the characters
/// exactly as read, so positions are 1-based offsets into the stored text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceStore {
    sequences: HashMap<String, String>,
    skipped_headers: usize,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut store = Self::new();
        for (id, sequence) in entries {
            store.extend_sequence(id.into(), sequence.as_ref());
        }
        store
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.sequences.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sequences.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(String::as_str)
    }

    /// Number of headers that lacked an identifier field and were ignored.
    pub fn skipped_headers(&self) -> usize {
        self.skipped_headers
    }

    pub(crate) fn open_entry(&mut self, id: String) {
        self.sequences.entry(id).or_default();
    }

    pub(crate) fn extend_sequence(&mut self, id: String, residues: &str) {
        match self.sequences.entry(id) {
            Entry::Occupied(mut entry) => entry.get_mut().push_str(residues),
            Entry::Vacant(entry) => {
                entry.insert(residues.to_string());
            }
        }
    }

    pub(crate) fn append_to(&mut self, id: &str, residues: &str) {
        if let Some(sequence) = self.sequences.get_mut(id) {
            sequence.push_str(residues);
        }
    }

    pub(crate) fn note_skipped_header(&mut self) {
        self.skipped_headers += 1;
    }
}
