use std::collections::HashSet;
use crate::watch_history::History;
use crate::watchlist::Watchlist;

/// Result of marking a movie as watched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// Added to history; `removed_from_watchlist` is set when it was also pulled off the watchlist
    Recorded { removed_from_watchlist: bool },
    /// Already in history, nothing changed
    AlreadyWatched,
}

/// A user with their watchlist and viewing history
///
/// A movie id is never in both the watchlist and the history at once. The
/// mutating methods here are the only write path and keep that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    password: String,
    watchlist: Watchlist,
    history: History,
}

impl UserProfile {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_lists(username, password, Watchlist::new(), History::new())
    }

    /// Build a profile from stored lists
    ///
    /// Call `normalize` afterwards if the lists come from an untrusted store.
    pub fn with_lists(
        username: impl Into<String>,
        password: impl Into<String>,
        watchlist: Watchlist,
        history: History,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            watchlist,
            history,
        }
    }

    /// Verbatim credential comparison
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Add a movie to the watchlist
    ///
    /// Returns false if it is already on the watchlist or already watched.
    pub fn add_to_watchlist(&mut self, movie_id: &str) -> bool {
        if self.history.contains(movie_id) {
            return false;
        }
        self.watchlist.add(movie_id)
    }

    pub fn remove_from_watchlist(&mut self, movie_id: &str) -> bool {
        self.watchlist.remove(movie_id)
    }

    /// Record a movie as watched, moving it off the watchlist in the same update
    pub fn mark_watched(&mut self, movie_id: &str) -> WatchOutcome {
        if !self.history.add(movie_id) {
            return WatchOutcome::AlreadyWatched;
        }
        let removed_from_watchlist = self.watchlist.remove(movie_id);
        WatchOutcome::Recorded { removed_from_watchlist }
    }

    /// Ids that must never be recommended: history ∪ watchlist
    pub fn excluded_ids(&self) -> HashSet<&str> {
        self.history.iter().chain(self.watchlist.iter()).collect()
    }

    /// True when the user has neither watched nor listed anything
    pub fn is_fresh(&self) -> bool {
        self.history.is_empty() && self.watchlist.is_empty()
    }

    /// Drop watchlist entries that are already in history
    ///
    /// Returns the number of entries removed.
    pub fn normalize(&mut self) -> usize {
        let stale: Vec<String> = self
            .watchlist
            .iter()
            .filter(|id| self.history.contains(id))
            .map(str::to_string)
            .collect();
        for id in &stale {
            self.watchlist.remove(id);
        }
        stale.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_watched_moves_off_watchlist() {
        let mut user = UserProfile::new("alice", "alice123");
        assert!(user.add_to_watchlist("M001"));

        let outcome = user.mark_watched("M001");

        assert_eq!(outcome, WatchOutcome::Recorded { removed_from_watchlist: true });
        assert!(user.history().contains("M001"));
        assert!(!user.watchlist().contains("M001"));
    }

    #[test]
    fn test_mark_watched_twice_is_noop() {
        let mut user = UserProfile::new("bob", "bob123");
        assert_eq!(
            user.mark_watched("M002"),
            WatchOutcome::Recorded { removed_from_watchlist: false }
        );
        assert_eq!(user.mark_watched("M002"), WatchOutcome::AlreadyWatched);
        assert_eq!(user.history().len(), 1);
    }

    #[test]
    fn test_cannot_watchlist_a_watched_movie() {
        let mut user = UserProfile::new("eric", "eric123");
        user.mark_watched("M003");
        assert!(!user.add_to_watchlist("M003"));
        assert!(user.watchlist().is_empty());
    }

    #[test]
    fn test_excluded_ids_is_union() {
        let mut user = UserProfile::new("diana", "diana123");
        user.add_to_watchlist("M001");
        user.mark_watched("M002");
        let excluded = user.excluded_ids();
        assert_eq!(excluded.len(), 2);
        assert!(excluded.contains("M001") && excluded.contains("M002"));
    }

    #[test]
    fn test_normalize_repairs_overlap() {
        let mut user = UserProfile::with_lists(
            "charlie",
            "charlie123",
            Watchlist::parse("M001;M002"),
            History::parse("M002"),
        );
        assert_eq!(user.normalize(), 1);
        assert_eq!(user.watchlist().to_field(), "M001");
        assert_eq!(user.history().to_field(), "M002");
    }

    #[test]
    fn test_password_compared_verbatim() {
        let user = UserProfile::new("bob", "bob123");
        assert!(user.check_password("bob123"));
        assert!(!user.check_password("BOB123"));
        assert!(!user.check_password(" bob123"));
    }
}
