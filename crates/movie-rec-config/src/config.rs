use movie_rec_core::{StrategyKind, DEFAULT_RECOMMENDATION_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
    /// Accounts written to a fresh user store when none exists yet
    #[serde(default = "default_seed_users")]
    pub seed_users: Vec<SeedUser>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_movies_file")]
    pub movies_file: PathBuf,
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecommendationConfig {
    #[serde(default = "default_strategy")]
    pub default_strategy: String,
    #[serde(default = "default_count")]
    pub default_count: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

fn default_movies_file() -> PathBuf {
    PathBuf::from("data/movies.csv")
}

fn default_users_file() -> PathBuf {
    PathBuf::from("data/users.csv")
}

fn default_strategy() -> String {
    StrategyKind::Hybrid.key().to_string()
}

fn default_count() -> usize {
    DEFAULT_RECOMMENDATION_COUNT
}

pub fn default_seed_users() -> Vec<SeedUser> {
    [
        ("bob", "bob123"),
        ("eric", "eric123"),
        ("alice", "alice123"),
        ("diana", "diana123"),
        ("charlie", "charlie123"),
    ]
    .into_iter()
    .map(|(username, password)| SeedUser {
        username: username.to_string(),
        password: password.to_string(),
    })
    .collect()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            movies_file: default_movies_file(),
            users_file: default_users_file(),
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_strategy: default_strategy(),
            default_count: default_count(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            recommendations: RecommendationConfig::default(),
            seed_users: default_seed_users(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if present, otherwise use defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_strategy_kind().is_none() {
            return Err(anyhow::anyhow!(
                "Invalid default_strategy: {}. Use one of: genre, rating, year, hybrid",
                self.recommendations.default_strategy
            ));
        }

        if self.recommendations.default_count == 0 {
            return Err(anyhow::anyhow!("default_count must be greater than zero"));
        }

        let mut seen = HashSet::new();
        for user in &self.seed_users {
            if user.username.trim().is_empty() {
                return Err(anyhow::anyhow!("seed_users contains an empty username"));
            }
            if !seen.insert(user.username.as_str()) {
                return Err(anyhow::anyhow!("Duplicate username in seed_users: {}", user.username));
            }
        }

        Ok(())
    }

    pub fn default_strategy_kind(&self) -> Option<StrategyKind> {
        StrategyKind::from_key(&self.recommendations.default_strategy)
    }
}
