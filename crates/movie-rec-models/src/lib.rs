pub mod catalog;
pub mod id_list;
pub mod movie;
pub mod user;
pub mod watch_history;
pub mod watchlist;

pub use catalog::Catalog;
pub use id_list::MovieIdList;
pub use movie::Movie;
pub use user::{UserProfile, WatchOutcome};
pub use watch_history::History;
pub use watchlist::Watchlist;
