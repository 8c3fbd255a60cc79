use super::context::{canonical_movie_id, AppContext, DataOverrides};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_rec_models::{Catalog, Movie, UserProfile, WatchOutcome};
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    WatchlistAdd,
    WatchlistRemove,
    WatchlistShow,
    HistoryShow,
    Watch,
}

/// One-shot list command: authenticate, apply, and save if anything changed
pub fn run_list_command(
    overrides: &DataOverrides,
    command: ListCommand,
    user: String,
    password: Option<String>,
    movie_id: Option<String>,
    output: &Output,
) -> Result<()> {
    let mut ctx = AppContext::load(overrides, output)?;
    let username = ctx.authenticate(&user, password)?;

    let require_id = || {
        movie_id
            .clone()
            .ok_or_else(|| eyre!("A movie ID is required for this command"))
    };

    let profile = lookup_user(&mut ctx.users, &username)?;
    let changed = match command {
        ListCommand::WatchlistAdd => add_to_watchlist(&ctx.catalog, profile, &require_id()?, output),
        ListCommand::WatchlistRemove => remove_from_watchlist(&ctx.catalog, profile, &require_id()?, output),
        ListCommand::Watch => mark_watched(&ctx.catalog, profile, &require_id()?, output),
        ListCommand::WatchlistShow => {
            show_watchlist(&ctx.catalog, profile, output);
            false
        }
        ListCommand::HistoryShow => {
            show_history(&ctx.catalog, profile, output);
            false
        }
    };

    if changed {
        ctx.save_users()?;
    }
    Ok(())
}

pub fn lookup_user<'u>(
    users: &'u mut BTreeMap<String, UserProfile>,
    username: &str,
) -> Result<&'u mut UserProfile> {
    users
        .get_mut(username)
        .ok_or_else(|| eyre!("Unknown user: {}", username))
}

/// Returns true when the watchlist changed
pub fn add_to_watchlist(catalog: &Catalog, user: &mut UserProfile, input: &str, output: &Output) -> bool {
    let id = canonical_movie_id(catalog, input);
    if !catalog.contains(&id) {
        output.error("Movie ID not found.");
        return false;
    }
    if user.history().contains(&id) {
        output.warn("You have already watched this movie.");
        return false;
    }

    if user.add_to_watchlist(&id) {
        info!(user = %user.username, movie = %id, "Added to watchlist");
        output.success("Movie added to watchlist successfully.");
        true
    } else {
        output.warn("Movie is already in your watchlist.");
        false
    }
}

pub fn remove_from_watchlist(catalog: &Catalog, user: &mut UserProfile, input: &str, output: &Output) -> bool {
    let id = canonical_movie_id(catalog, input);
    if user.remove_from_watchlist(&id) {
        info!(user = %user.username, movie = %id, "Removed from watchlist");
        output.success("Movie removed from watchlist successfully.");
        true
    } else {
        output.warn("Movie not found in your watchlist.");
        false
    }
}

pub fn mark_watched(catalog: &Catalog, user: &mut UserProfile, input: &str, output: &Output) -> bool {
    let id = canonical_movie_id(catalog, input);
    if !catalog.contains(&id) {
        output.error("Movie ID not found.");
        return false;
    }

    match user.mark_watched(&id) {
        WatchOutcome::Recorded {
            removed_from_watchlist,
        } => {
            info!(user = %user.username, movie = %id, removed_from_watchlist, "Marked as watched");
            output.success("Movie marked as watched successfully.");
            if removed_from_watchlist {
                output.info("It has been removed from your watchlist.");
            }
            true
        }
        WatchOutcome::AlreadyWatched => {
            output.warn("Movie is already in your watch history.");
            false
        }
    }
}

pub fn show_watchlist(catalog: &Catalog, user: &UserProfile, output: &Output) {
    let movies = resolve_ids(catalog, user.watchlist().iter());
    output.heading("Your Watchlist");
    output.movies(&movies, false, "Your watchlist is empty.");
}

pub fn show_history(catalog: &Catalog, user: &UserProfile, output: &Output) {
    let movies = resolve_ids(catalog, user.history().iter());
    output.heading("Your Watch History");
    output.movies(&movies, false, "You haven't watched any movies yet.");
}

/// Ids the catalog no longer knows are left out of the listing
fn resolve_ids<'a, 'i>(catalog: &'a Catalog, ids: impl Iterator<Item = &'i str>) -> Vec<&'a Movie> {
    ids.filter_map(|id| {
        let movie = catalog.get(id);
        if movie.is_none() {
            debug!(movie = %id, "Listed id not in catalog");
        }
        movie
    })
    .collect()
}
