use super::prompts;
use crate::output::Output;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use movie_rec_config::{Config, PathManager};
use movie_rec_core::RecommendationEngine;
use movie_rec_models::{Catalog, UserProfile};
use movie_rec_store::{load_catalog, UserStore};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Paths given on the command line that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct DataOverrides {
    pub config: Option<PathBuf>,
    pub movies: Option<PathBuf>,
    pub users: Option<PathBuf>,
}

/// Everything a command needs: config, catalog, and the user store
pub struct AppContext {
    pub config: Config,
    pub catalog: Catalog,
    pub store: UserStore,
    pub users: BTreeMap<String, UserProfile>,
}

impl AppContext {
    pub fn load(overrides: &DataOverrides, output: &Output) -> Result<Self> {
        let path_manager = PathManager::default();
        let config = load_config(overrides, &path_manager)?;

        let movies_file = overrides
            .movies
            .clone()
            .unwrap_or_else(|| path_manager.resolve_data_path(&config.data.movies_file));
        let users_file = overrides
            .users
            .clone()
            .unwrap_or_else(|| path_manager.resolve_data_path(&config.data.users_file));

        let load = load_catalog(&movies_file)
            .wrap_err_with(|| format!("Failed to load movie catalog from {}", movies_file.display()))?;
        if load.skipped > 0 {
            output.warn(format!(
                "Skipped {} malformed row(s) in {}",
                load.skipped,
                movies_file.display()
            ));
        }

        let store = UserStore::new(users_file).with_seed_users(config.seed_users.clone());
        let users = store
            .load()
            .wrap_err_with(|| format!("Failed to load users from {}", store.path().display()))?;

        Ok(Self {
            config,
            catalog: load.catalog,
            store,
            users,
        })
    }

    /// Engine preset to the configured default strategy
    pub fn engine(&self) -> RecommendationEngine<'_> {
        new_engine(&self.catalog, &self.config)
    }

    /// Check credentials, prompting for the password when not given
    pub fn authenticate(&self, username: &str, password: Option<String>) -> Result<String> {
        let password = match password {
            Some(password) => password,
            None => prompts::prompt_password(&format!("Password for {}", username))?,
        };

        match self.users.get(username) {
            Some(user) if user.check_password(&password) => {
                tracing::debug!(user = %username, "Authenticated");
                Ok(username.to_string())
            }
            _ => Err(eyre!("Invalid username or password.")),
        }
    }

    pub fn user(&self, username: &str) -> Result<&UserProfile> {
        self.users
            .get(username)
            .ok_or_else(|| eyre!("Unknown user: {}", username))
    }

    pub fn save_users(&self) -> Result<()> {
        self.store
            .save(&self.users)
            .wrap_err_with(|| format!("Failed to save users to {}", self.store.path().display()))
    }
}

pub fn new_engine<'a>(catalog: &'a Catalog, config: &Config) -> RecommendationEngine<'a> {
    let mut engine = RecommendationEngine::new(catalog);
    engine.set_strategy(&config.recommendations.default_strategy);
    engine
}

pub fn load_config(overrides: &DataOverrides, path_manager: &PathManager) -> Result<Config> {
    let config_file = overrides
        .config
        .clone()
        .unwrap_or_else(|| path_manager.config_file());

    let config = Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    config
        .validate()
        .map_err(|e| eyre!("Invalid configuration in {}: {}", config_file.display(), e))?;

    Ok(config)
}

/// Normalize a typed movie id: trimmed, and upper-cased unless the catalog knows it as typed
pub fn canonical_movie_id(catalog: &Catalog, input: &str) -> String {
    let trimmed = input.trim();
    if catalog.contains(trimmed) {
        trimmed.to_string()
    } else {
        trimmed.to_uppercase()
    }
}
