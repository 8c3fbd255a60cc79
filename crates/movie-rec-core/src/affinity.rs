use movie_rec_models::{Catalog, UserProfile};
use std::collections::HashMap;

/// Per-genre counts built from one user's history and watchlist
///
/// Every id that resolves in the catalog adds one to its movie's genre.
/// History is counted first, then the watchlist; ids that don't resolve are
/// skipped. No normalization or decay is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreAffinity {
    counts: HashMap<String, u32>,
}

impl GenreAffinity {
    pub fn from_profile(catalog: &Catalog, user: &UserProfile) -> Self {
        let mut affinity = Self::default();
        for movie_id in user.history().iter().chain(user.watchlist().iter()) {
            if let Some(movie) = catalog.get(movie_id) {
                affinity.record(&movie.genre);
            }
        }
        affinity
    }

    pub fn record(&mut self, genre: &str) {
        *self.counts.entry(genre.to_string()).or_insert(0) += 1;
    }

    /// Affinity of a genre; zero if the user never touched it
    pub fn score(&self, genre: &str) -> u32 {
        self.counts.get(genre).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Highest-scoring genres, ties broken by genre name
    pub fn top_genres(&self, n: usize) -> Vec<(&str, u32)> {
        let mut genres: Vec<(&str, u32)> = self
            .counts
            .iter()
            .map(|(genre, count)| (genre.as_str(), *count))
            .collect();
        genres.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        genres.truncate(n);
        genres
    }
}
