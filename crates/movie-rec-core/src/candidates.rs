// Candidate selection shared by every ranking strategy

use movie_rec_models::{Catalog, Movie, UserProfile};
use tracing::debug;

/// Catalog movies the user has neither watched nor listed, in catalog order
///
/// The excluded set is rebuilt on every call since the user's lists change
/// between requests.
pub fn candidate_pool<'a>(catalog: &'a Catalog, user: &UserProfile) -> Vec<&'a Movie> {
    let excluded = user.excluded_ids();
    let pool: Vec<&Movie> = catalog
        .iter()
        .filter(|movie| !excluded.contains(movie.id.as_str()))
        .collect();

    debug!(
        "candidate_pool: catalog_size={}, excluded={}, candidates={}",
        catalog.len(),
        excluded.len(),
        pool.len()
    );

    pool
}
