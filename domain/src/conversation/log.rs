//! Append-only message log

use super::entry::Entry;

/// Ordered, append-only sequence of chat entries.
///
/// Insertion order is the display order. There is no way to remove,
/// replace, or reorder an entry once it has been appended.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<Entry>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry at the end of the log.
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a MessageLog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
