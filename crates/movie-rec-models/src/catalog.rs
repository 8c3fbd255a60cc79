use std::collections::HashMap;
use crate::movie::Movie;

/// In-memory movie catalog keyed by movie id
///
/// Movies are kept in load order alongside an id index, so lookups are O(1)
/// and enumeration is deterministic. Enumeration order is what ranking uses
/// to keep fully-tied movies in a stable order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        let mut catalog = Self::new();
        for movie in movies {
            catalog.insert(movie);
        }
        catalog
    }

    /// Insert a movie, replacing any existing entry with the same id
    ///
    /// A replaced movie keeps its original position in enumeration order.
    /// Returns the previous movie for that id, if any.
    pub fn insert(&mut self, movie: Movie) -> Option<Movie> {
        match self.by_id.get(&movie.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.movies[pos], movie)),
            None => {
                self.by_id.insert(movie.id.clone(), self.movies.len());
                self.movies.push(movie);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.by_id.get(id).map(|&pos| &self.movies[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Iterate movies in load order
    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str) -> Movie {
        Movie::new(id, title, "Drama", 2000, 7.0)
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = Catalog::from_movies(vec![movie("M001", "One")]);
        assert!(catalog.contains("M001"));
        assert!(!catalog.contains("m001"));
        assert_eq!(catalog.get("M001").unwrap().title, "One");
    }

    #[test]
    fn test_iteration_follows_load_order() {
        let catalog = Catalog::from_movies(vec![
            movie("M003", "Three"),
            movie("M001", "One"),
            movie("M002", "Two"),
        ]);
        let ids: Vec<&str> = catalog.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["M003", "M001", "M002"]);
    }

    #[test]
    fn test_replacing_keeps_position() {
        let mut catalog = Catalog::from_movies(vec![movie("M001", "One"), movie("M002", "Two")]);
        let previous = catalog.insert(movie("M001", "One (Director's Cut)"));

        assert_eq!(previous.unwrap().title, "One");
        assert_eq!(catalog.len(), 2);
        let titles: Vec<&str> = catalog.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["One (Director's Cut)", "Two"]);
    }
}
