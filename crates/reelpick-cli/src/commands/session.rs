use super::context::{new_engine, AppContext, DataOverrides};
use super::lists::{self, lookup_user};
use super::movies::{show_catalog, show_strategies};
use super::prompts::{parse_count, prompt_password, prompt_select, prompt_string};
use super::recommend::render_recommendations;
use crate::output::Output;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use movie_rec_core::{resolve_count, RecommendationEngine, StrategyKind};
use movie_rec_models::{Catalog, UserProfile};
use movie_rec_store::UserStore;
use std::collections::BTreeMap;
use tracing::info;

const MAIN_MENU: [&str; 2] = ["Login", "Exit"];

const USER_MENU: [&str; 9] = [
    "Browse all movies",
    "Add movie to watchlist",
    "Remove movie from watchlist",
    "View watchlist",
    "Mark movie as watched",
    "View watch history",
    "Get recommendations",
    "View recommendation strategies",
    "Logout",
];

pub fn run_session(overrides: &DataOverrides, output: &Output) -> Result<()> {
    let AppContext {
        config,
        catalog,
        store,
        mut users,
    } = AppContext::load(overrides, output)?;

    let engine = new_engine(&catalog, &config);
    let mut session = Session {
        catalog: &catalog,
        default_strategy: engine.current_strategy(),
        default_count: config.recommendations.default_count,
        engine,
        store: &store,
        users: &mut users,
        output,
        current_user: None,
    };
    session.run()
}

/// Interactive menu loop over one loaded catalog and user store
struct Session<'a> {
    catalog: &'a Catalog,
    engine: RecommendationEngine<'a>,
    default_strategy: StrategyKind,
    default_count: usize,
    store: &'a UserStore,
    users: &'a mut BTreeMap<String, UserProfile>,
    output: &'a Output,
    current_user: Option<String>,
}

impl Session<'_> {
    fn run(&mut self) -> Result<()> {
        self.output.heading("ReelPick - Movie Recommendation & Tracker");
        info!(users = self.users.len(), movies = self.catalog.len(), "Session started");

        loop {
            match self.current_user.clone() {
                None => {
                    if !self.main_menu()? {
                        break;
                    }
                }
                Some(username) => self.user_menu(&username)?,
            }
        }

        self.output.info("Thank you for using ReelPick!");
        info!("Session ended");
        Ok(())
    }

    /// Returns false when the user chose to exit
    fn main_menu(&mut self) -> Result<bool> {
        self.output.heading("Main Menu");
        match prompt_select("Choose an option", &MAIN_MENU, 0)? {
            0 => {
                self.login()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn login(&mut self) -> Result<()> {
        let username = prompt_string("Username", None)?.trim().to_string();
        let password = prompt_password("Password")?;

        match self.users.get(&username) {
            Some(user) if user.check_password(&password) => {
                info!(user = %username, "Logged in");
                self.output
                    .success(format!("Login successful! Welcome, {}!", username));
                self.current_user = Some(username);
            }
            _ => {
                tracing::debug!(user = %username, "Rejected login");
                self.output.error("Invalid username or password. Please try again.");
            }
        }
        Ok(())
    }

    fn user_menu(&mut self, username: &str) -> Result<()> {
        self.output
            .heading(format!("User Menu (logged in as {})", username));

        match prompt_select("Choose an option", &USER_MENU, 0)? {
            0 => show_catalog(self.catalog, self.output),
            1 => {
                let input = prompt_string("Movie ID to add", None)?;
                let user = lookup_user(self.users, username)?;
                if lists::add_to_watchlist(self.catalog, user, &input, self.output) {
                    self.save()?;
                }
            }
            2 => {
                let input = prompt_string("Movie ID to remove", None)?;
                let user = lookup_user(self.users, username)?;
                if lists::remove_from_watchlist(self.catalog, user, &input, self.output) {
                    self.save()?;
                }
            }
            3 => {
                let user = lookup_user(self.users, username)?;
                lists::show_watchlist(self.catalog, user, self.output);
            }
            4 => {
                let input = prompt_string("Movie ID you watched", None)?;
                let user = lookup_user(self.users, username)?;
                if lists::mark_watched(self.catalog, user, &input, self.output) {
                    self.save()?;
                }
            }
            5 => {
                let user = lookup_user(self.users, username)?;
                lists::show_history(self.catalog, user, self.output);
            }
            6 => self.recommendations(username)?,
            7 => show_strategies(&self.engine, self.output),
            _ => self.logout(username)?,
        }
        Ok(())
    }

    fn recommendations(&mut self, username: &str) -> Result<()> {
        let labels: Vec<String> = StrategyKind::ALL
            .iter()
            .map(|kind| format!("{} ({})", kind.display_name(), kind.description()))
            .collect();
        let preselected = StrategyKind::ALL
            .iter()
            .position(|kind| *kind == self.default_strategy)
            .unwrap_or(0);

        let choice = prompt_select("Choose a recommendation strategy", &labels, preselected)?;
        if let Some(kind) = StrategyKind::ALL.get(choice) {
            self.engine.set_strategy_kind(*kind);
        }

        let raw = prompt_string(
            &format!("How many recommendations? (default {})", self.default_count),
            None,
        )?;
        let requested = match parse_count(&raw) {
            Ok(Some(n)) if n <= 0 => {
                self.output.warn(format!(
                    "Count must be positive. Using default value of {}.",
                    self.default_count
                ));
                None
            }
            Ok(n) => n,
            Err(bad) => {
                self.output.warn(format!(
                    "Invalid input '{}'. Using default value of {}.",
                    bad, self.default_count
                ));
                None
            }
        };
        let top_n = resolve_count(requested, self.default_count);

        let user = lookup_user(self.users, username)?;
        let recommendations = self.engine.recommend(user, top_n);
        render_recommendations(&self.engine, user, &recommendations, self.output);
        Ok(())
    }

    fn logout(&mut self, username: &str) -> Result<()> {
        self.save()?;
        info!(user = %username, "Logged out");
        self.output.info(format!("Goodbye, {}!", username));
        self.current_user = None;
        Ok(())
    }

    fn save(&self) -> Result<()> {
        self.store
            .save(self.users)
            .wrap_err_with(|| format!("Failed to save users to {}", self.store.path().display()))
    }
}
