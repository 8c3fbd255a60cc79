// Ranking strategies: the closed set of ordering policies the engine dispatches to

mod genre;
mod hybrid;
mod rating;
mod year;

pub use genre::GenreStrategy;
pub use hybrid::HybridStrategy;
pub use rating::RatingStrategy;
pub use year::YearStrategy;

use crate::affinity::GenreAffinity;
use crate::candidates::candidate_pool;
use movie_rec_models::{Catalog, Movie, UserProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a ranking strategy
///
/// External callers select strategies by key (`"genre"`, `"rating"`,
/// `"year"`, `"hybrid"`); keys match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Genre,
    Rating,
    Year,
    Hybrid,
}

impl StrategyKind {
    /// Every strategy, in menu order
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Genre,
        StrategyKind::Rating,
        StrategyKind::Year,
        StrategyKind::Hybrid,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "genre" => Some(StrategyKind::Genre),
            "rating" => Some(StrategyKind::Rating),
            "year" => Some(StrategyKind::Year),
            "hybrid" => Some(StrategyKind::Hybrid),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            StrategyKind::Genre => "genre",
            StrategyKind::Rating => "rating",
            StrategyKind::Year => "year",
            StrategyKind::Hybrid => "hybrid",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            StrategyKind::Genre => "Genre-Based Recommendation",
            StrategyKind::Rating => "Rating-Based Recommendation",
            StrategyKind::Year => "Year-Based Recommendation",
            StrategyKind::Hybrid => "Hybrid Recommendation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StrategyKind::Genre => {
                "Recommends movies based on your favorite genres from watch history and watchlist"
            }
            StrategyKind::Rating => "Recommends highest rated movies you haven't watched yet",
            StrategyKind::Year => "Recommends the most recent movies you haven't watched yet",
            StrategyKind::Hybrid => {
                "Recommends movies based on your favorite genres and highest ratings"
            }
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Inputs for one ranking pass
///
/// `'a` is the catalog borrow; ranked movies live as long as the catalog.
pub struct RankingContext<'a, 'u> {
    pub catalog: &'a Catalog,
    pub user: &'u UserProfile,
}

impl<'a, 'u> RankingContext<'a, 'u> {
    pub fn new(catalog: &'a Catalog, user: &'u UserProfile) -> Self {
        Self { catalog, user }
    }

    pub fn candidate_pool(&self) -> Vec<&'a Movie> {
        candidate_pool(self.catalog, self.user)
    }

    pub fn affinity(&self) -> GenreAffinity {
        GenreAffinity::from_profile(self.catalog, self.user)
    }
}

/// An ordering policy over the candidate pool
pub trait RankingStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Return at most `top_n` movies, best first
    fn rank<'a>(&self, ctx: &RankingContext<'a, '_>, top_n: usize) -> Vec<&'a Movie>;
}

/// Strategy implementation for a kind
pub fn strategy_for(kind: StrategyKind) -> Box<dyn RankingStrategy> {
    match kind {
        StrategyKind::Genre => Box::new(GenreStrategy),
        StrategyKind::Rating => Box::new(RatingStrategy),
        StrategyKind::Year => Box::new(YearStrategy),
        StrategyKind::Hybrid => Box::new(HybridStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_key(kind.key()), Some(kind));
            assert_eq!(strategy_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_keys_are_exact() {
        assert_eq!(StrategyKind::from_key("Genre"), None);
        assert_eq!(StrategyKind::from_key(" rating"), None);
        assert_eq!(StrategyKind::from_key("bogus"), None);
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&StrategyKind::Hybrid).unwrap();
        assert_eq!(json, "\"hybrid\"");
    }
}
