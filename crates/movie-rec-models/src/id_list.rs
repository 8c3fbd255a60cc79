/// Separator used by the persisted `;`-delimited id list
pub const ID_SEPARATOR: char = ';';

/// Ordered set of movie ids
///
/// Insertion order is preserved and an id appears at most once. Lists are
/// small (one user's picks), so membership is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieIdList {
    ids: Vec<String>,
}

impl MovieIdList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the persisted form: ids separated by `;`, empty string for an empty list
    ///
    /// Segments are trimmed; empty segments and repeated ids are dropped.
    pub fn parse(field: &str) -> Self {
        let mut list = Self::new();
        for id in field.split(ID_SEPARATOR).map(str::trim) {
            if !id.is_empty() {
                list.add(id);
            }
        }
        list
    }

    /// Render the persisted form
    pub fn to_field(&self) -> String {
        self.ids.join(&ID_SEPARATOR.to_string())
    }

    /// Append an id; returns false (and changes nothing) if it is already present
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Remove an id; returns false if it was not present
    pub fn remove(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|existing| existing == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicates() {
        let mut list = MovieIdList::new();
        assert!(list.add("M001"));
        assert!(list.add("M002"));
        assert!(!list.add("M001"));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["M001", "M002"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = MovieIdList::parse("M001;M002;M003");
        assert!(list.remove("M002"));
        assert!(!list.remove("M002"));
        assert_eq!(list.to_field(), "M001;M003");
    }

    #[test]
    fn test_parse_field() {
        let list = MovieIdList::parse(" M003 ; ;M001;M003;");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["M003", "M001"]);
    }

    #[test]
    fn test_empty_field_is_empty_list() {
        let list = MovieIdList::parse("");
        assert!(list.is_empty());
        assert_eq!(list.to_field(), "");
    }
}
