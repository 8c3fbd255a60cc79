use super::{RankingContext, RankingStrategy, StrategyKind};
use crate::ordering::{by_year_desc, rank_top};
use movie_rec_models::Movie;

/// Most recent unseen movies
pub struct YearStrategy;

impl RankingStrategy for YearStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Year
    }

    fn rank<'a>(&self, ctx: &RankingContext<'a, '_>, top_n: usize) -> Vec<&'a Movie> {
        rank_top(ctx.candidate_pool(), top_n, by_year_desc)
    }
}
