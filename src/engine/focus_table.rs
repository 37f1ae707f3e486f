use dashmap::DashMap;
use url::Url;

use crate::text::Range;

/// The per-document focus map: at most one focused range per document,
/// keyed by canonical URI.
pub struct FocusTable {
    entries: DashMap<Url, Range>,
}

impl Default for FocusTable {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl FocusTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus `uri` on `range`, replacing any previous entry.
    pub fn insert(&self, uri: Url, range: Range) {
        self.entries.insert(uri, range);
    }

    pub fn get(&self, uri: &Url) -> Option<Range> {
        self.entries.get(uri).map(|entry| *entry.value())
    }

    pub fn contains(&self, uri: &Url) -> bool {
        self.entries.contains_key(uri)
    }

    pub fn remove(&self, uri: &Url) -> Option<Range> {
        self.entries.remove(uri).map(|(_, range)| range)
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
