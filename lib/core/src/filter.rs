// Allow-list filtering for categorical columns
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Decides whether a categorical value passes.
pub trait Filter {
    fn permits(&self, value: &str) -> bool;
}

/// Closed set of permitted values, matched exactly (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AllowList {
    values: AHashSet<String>,
}

impl AllowList {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Title types kept by default: feature films and TV films.
    pub fn default_title_types() -> Self {
        Self::new(["movie", "tvMovie"])
    }

    /// Participant categories kept by default.
    pub fn default_categories() -> Self {
        Self::new(["actress", "actor", "director", "writer"])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in sorted order
    pub fn sorted(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.values.iter().map(String::as_str).collect();
        values.sort_unstable();
        values
    }
}

impl Filter for AllowList {
    #[inline]
    fn permits(&self, value: &str) -> bool {
        self.values.contains(value)
    }
}

impl From<Vec<String>> for AllowList {
    fn from(values: Vec<String>) -> Self {
        Self::new(values)
    }
}

impl From<AllowList> for Vec<String> {
    fn from(list: AllowList) -> Self {
        let mut values: Vec<String> = list.values.into_iter().collect();
        values.sort_unstable();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_membership() {
        let list = AllowList::default_title_types();
        assert!(list.permits("movie"));
        assert!(list.permits("tvMovie"));
        assert!(!list.permits("Movie"));
        assert!(!list.permits("short"));
    }

    #[test]
    fn test_empty_list_permits_nothing() {
        assert!(!AllowList::default().permits("movie"));
    }

    #[test]
    fn test_serde_as_sorted_array() {
        let list = AllowList::default_categories();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["actor","actress","director","writer"]"#);
        let parsed: AllowList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, list);
    }
}
