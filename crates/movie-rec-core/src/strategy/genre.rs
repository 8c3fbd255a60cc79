use super::rating::top_rated;
use super::{RankingContext, RankingStrategy, StrategyKind};
use crate::ordering::{by_affinity_then_rating, rank_top};
use movie_rec_models::Movie;
use tracing::debug;

/// Unseen movies in the genres the user watches and lists most
pub struct GenreStrategy;

impl RankingStrategy for GenreStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Genre
    }

    fn rank<'a>(&self, ctx: &RankingContext<'a, '_>, top_n: usize) -> Vec<&'a Movie> {
        rank_by_affinity(self.kind(), ctx, top_n)
    }
}

/// Affinity ranking shared by the genre and hybrid strategies
///
/// Falls back to the top-rated catalog when the user is fresh or none of
/// their ids resolve. Movies in genres with no affinity stay in the result,
/// ranked after every positive-affinity movie.
pub(super) fn rank_by_affinity<'a>(
    kind: StrategyKind,
    ctx: &RankingContext<'a, '_>,
    top_n: usize,
) -> Vec<&'a Movie> {
    if ctx.user.is_fresh() {
        debug!(strategy = %kind, user = %ctx.user.username, "No history or watchlist, falling back to top rated");
        return top_rated(ctx.catalog, top_n);
    }

    let affinity = ctx.affinity();
    if affinity.is_empty() {
        debug!(strategy = %kind, user = %ctx.user.username, "No resolvable genres, falling back to top rated");
        return top_rated(ctx.catalog, top_n);
    }

    debug!(
        strategy = %kind,
        genres = affinity.len(),
        top = ?affinity.top_genres(3),
        "Ranking by genre affinity"
    );
    rank_top(ctx.candidate_pool(), top_n, by_affinity_then_rating(&affinity))
}
