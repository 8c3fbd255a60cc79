pub mod affinity;
pub mod candidates;
pub mod engine;
pub mod ordering;
pub mod strategy;

pub use affinity::GenreAffinity;
pub use candidates::candidate_pool;
pub use engine::{resolve_count, RecommendationEngine, DEFAULT_RECOMMENDATION_COUNT};
pub use strategy::{strategy_for, RankingContext, RankingStrategy, StrategyKind};
