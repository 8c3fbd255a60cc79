use crate::strategy::{strategy_for, RankingContext, StrategyKind};
use movie_rec_models::{Catalog, Movie, UserProfile};
use tracing::debug;

/// Recommendation count used when the caller asks for a non-positive number
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 5;

/// Resolve a caller-supplied count: missing or non-positive means `default`
pub fn resolve_count(requested: Option<i64>, default: usize) -> usize {
    match requested {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => default,
    }
}

/// Ranks catalog movies for a user under the selected strategy
///
/// The engine borrows the catalog for the whole session and only reads the
/// user profile passed into each call. Invalid strategy keys are ignored:
/// the last valid selection stays in effect.
pub struct RecommendationEngine<'a> {
    catalog: &'a Catalog,
    strategy: StrategyKind,
}

impl<'a> RecommendationEngine<'a> {
    /// Create an engine using the hybrid strategy
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            strategy: StrategyKind::Hybrid,
        }
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Select a strategy by key
    ///
    /// Unknown keys leave the current strategy unchanged and return false.
    pub fn set_strategy(&mut self, key: &str) -> bool {
        match StrategyKind::from_key(key) {
            Some(kind) => {
                self.set_strategy_kind(kind);
                true
            }
            None => {
                debug!(key = %key, current = %self.strategy, "Ignoring unknown strategy key");
                false
            }
        }
    }

    pub fn set_strategy_kind(&mut self, kind: StrategyKind) {
        if kind != self.strategy {
            debug!(from = %self.strategy, to = %kind, "Switching recommendation strategy");
        }
        self.strategy = kind;
    }

    pub fn current_strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn current_strategy_name(&self) -> &'static str {
        self.strategy.display_name()
    }

    pub fn strategy_description(&self, key: &str) -> &'static str {
        StrategyKind::from_key(key)
            .map(StrategyKind::description)
            .unwrap_or("Unknown strategy")
    }

    pub fn strategy_display_name(&self, key: &str) -> &'static str {
        StrategyKind::from_key(key)
            .map(StrategyKind::display_name)
            .unwrap_or("Unknown")
    }

    pub fn available_strategies(&self) -> Vec<&'static str> {
        StrategyKind::ALL.iter().map(|kind| kind.key()).collect()
    }

    /// Up to `top_n` movies for `user` under the current strategy, best first
    ///
    /// Returns fewer than `top_n` when the candidate pool is smaller, and an
    /// empty list for `top_n == 0`.
    pub fn recommend(&self, user: &UserProfile, top_n: usize) -> Vec<&'a Movie> {
        self.recommend_with(self.strategy, user, top_n)
    }

    /// Like `recommend`, but with a one-off strategy
    pub fn recommend_with(&self, kind: StrategyKind, user: &UserProfile, top_n: usize) -> Vec<&'a Movie> {
        let ctx = RankingContext::new(self.catalog, user);
        let recommendations = strategy_for(kind).rank(&ctx, top_n);

        debug!(
            strategy = %kind,
            user = %user.username,
            requested = top_n,
            returned = recommendations.len(),
            "Computed recommendations"
        );

        recommendations
    }
}

#[cfg(test)]
mod tests;
