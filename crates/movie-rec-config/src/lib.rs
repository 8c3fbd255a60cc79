pub mod config;
pub mod paths;

pub use config::{Config, DataConfig, RecommendationConfig, SeedUser, default_seed_users};
pub use paths::{PathManager, home_override};
