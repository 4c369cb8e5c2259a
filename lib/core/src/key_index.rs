use crate::record::TitleRecord;
use ahash::AHashMap;

/// The set of title keys established by the basics pass.
///
/// Dependent files are joined against it: rows whose key is not a member
/// are dropped. Keys keep the order in which they were first inserted, and
/// each key has a dense slot that aggregators use for per-key state.
#[derive(Debug, Clone, Default)]
pub struct KeySetIndex {
    keys: Vec<String>,
    slots: AHashMap<String, usize>,
}

impl KeySetIndex {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[TitleRecord]) -> Self {
        records.iter().map(|r| r.key.clone()).collect()
    }

    /// Add a key; returns `false` if it was already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.slots.contains_key(&key) {
            return false;
        }
        self.slots.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        true
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Dense position of `key`, in `0..self.len()`
    #[inline]
    pub fn slot(&self, key: &str) -> Option<usize> {
        self.slots.get(key).copied()
    }

    #[inline]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeySetIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = KeySetIndex::new();
        for key in iter {
            index.insert(key);
        }
        index
    }
}
