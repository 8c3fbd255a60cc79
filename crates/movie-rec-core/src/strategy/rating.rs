use super::{RankingContext, RankingStrategy, StrategyKind};
use crate::ordering::{by_rating_desc, rank_top};
use movie_rec_models::{Catalog, Movie};
use tracing::debug;

/// Highest-rated unseen movies
pub struct RatingStrategy;

impl RankingStrategy for RatingStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Rating
    }

    fn rank<'a>(&self, ctx: &RankingContext<'a, '_>, top_n: usize) -> Vec<&'a Movie> {
        rank_top(ctx.candidate_pool(), top_n, by_rating_desc)
    }
}

/// Highest-rated movies across the whole catalog, without exclusion
///
/// Used by the affinity strategies when there is nothing to build an
/// affinity table from.
pub(crate) fn top_rated(catalog: &Catalog, top_n: usize) -> Vec<&Movie> {
    debug!("top_rated: ranking full catalog of {} movies", catalog.len());
    rank_top(catalog.iter().collect(), top_n, by_rating_desc)
}
