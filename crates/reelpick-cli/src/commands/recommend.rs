use super::context::{AppContext, DataOverrides};
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use movie_rec_core::{resolve_count, GenreAffinity, RecommendationEngine, StrategyKind};
use movie_rec_models::{Movie, UserProfile};
use serde_json::json;

pub fn run_recommend(
    overrides: &DataOverrides,
    user: String,
    password: Option<String>,
    strategy: Option<String>,
    count: Option<i64>,
    output: &Output,
) -> Result<()> {
    let ctx = AppContext::load(overrides, output)?;
    let username = ctx.authenticate(&user, password)?;

    let mut engine = ctx.engine();
    if let Some(key) = strategy {
        if !engine.set_strategy(&key) {
            output.warn(format!(
                "Unknown strategy '{}', using {}",
                key,
                engine.current_strategy()
            ));
        }
    }

    let top_n = resolve_count(count, ctx.config.recommendations.default_count);
    let user = ctx.user(&username)?;
    let recommendations = engine.recommend(user, top_n);

    render_recommendations(&engine, user, &recommendations, output);
    Ok(())
}

const TOP_GENRES_SHOWN: usize = 3;

pub fn render_recommendations(
    engine: &RecommendationEngine<'_>,
    user: &UserProfile,
    recommendations: &[&Movie],
    output: &Output,
) {
    // Only the affinity-driven strategies have favorite genres worth showing
    let affinity = match engine.current_strategy() {
        StrategyKind::Genre | StrategyKind::Hybrid => GenreAffinity::from_profile(engine.catalog(), user),
        StrategyKind::Rating | StrategyKind::Year => GenreAffinity::default(),
    };
    let top_genres = affinity.top_genres(TOP_GENRES_SHOWN);

    match output.format() {
        OutputFormat::Human => {
            output.heading(engine.current_strategy_name());
            if !top_genres.is_empty() {
                let listed: Vec<String> = top_genres
                    .iter()
                    .map(|(genre, count)| format!("{} ({})", genre, count))
                    .collect();
                output.info(format!("Based on your favorite genres: {}", listed.join(", ")));
            }
            output.movies(recommendations, true, "No recommendations available.");
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let genres: Vec<serde_json::Value> = top_genres
                .iter()
                .map(|(genre, count)| json!({ "genre": genre, "count": count }))
                .collect();
            output.json(&json!({
                "strategy": engine.current_strategy().key(),
                "name": engine.current_strategy_name(),
                "top_genres": genres,
                "recommendations": recommendations,
            }));
        }
    }
}
