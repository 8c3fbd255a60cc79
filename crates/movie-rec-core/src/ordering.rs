// Ordering rules used by the ranking strategies
//
// All of these feed `slice::sort_by`, which is stable: movies that compare
// equal keep their candidate-pool order.

use crate::affinity::GenreAffinity;
use movie_rec_models::Movie;
use std::cmp::Ordering;

/// Highest rating first
///
/// Ratings are finite once loaded; `-0.0` and `0.0` compare equal.
pub fn by_rating_desc(a: &Movie, b: &Movie) -> Ordering {
    b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
}

/// Newest release first
pub fn by_year_desc(a: &Movie, b: &Movie) -> Ordering {
    b.year.cmp(&a.year)
}

/// Strongest genre affinity first, then highest rating
pub fn by_affinity_then_rating<'s>(
    affinity: &'s GenreAffinity,
) -> impl Fn(&Movie, &Movie) -> Ordering + 's {
    move |a, b| {
        affinity
            .score(&b.genre)
            .cmp(&affinity.score(&a.genre))
            .then_with(|| by_rating_desc(a, b))
    }
}

/// Stable-sort movies with `compare` and keep the first `top_n`
pub fn rank_top<'a>(
    mut movies: Vec<&'a Movie>,
    top_n: usize,
    compare: impl Fn(&Movie, &Movie) -> Ordering,
) -> Vec<&'a Movie> {
    movies.sort_by(|a, b| compare(*a, *b));
    movies.truncate(top_n);
    movies
}
