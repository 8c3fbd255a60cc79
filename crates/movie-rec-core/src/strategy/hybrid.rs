use super::genre::rank_by_affinity;
use super::{RankingContext, RankingStrategy, StrategyKind};
use movie_rec_models::Movie;

/// Genre affinity first, rating second
///
/// Orders exactly like `GenreStrategy`; kept as its own named strategy.
pub struct HybridStrategy;

impl RankingStrategy for HybridStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Hybrid
    }

    fn rank<'a>(&self, ctx: &RankingContext<'a, '_>, top_n: usize) -> Vec<&'a Movie> {
        rank_by_affinity(self.kind(), ctx, top_n)
    }
}
