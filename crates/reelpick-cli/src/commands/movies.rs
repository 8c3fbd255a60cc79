use super::context::{load_config, new_engine, AppContext, DataOverrides};
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use movie_rec_config::PathManager;
use movie_rec_core::{RecommendationEngine, StrategyKind};
use movie_rec_models::{Catalog, Movie};
use serde_json::json;

pub fn run_movies(overrides: &DataOverrides, output: &Output) -> Result<()> {
    let ctx = AppContext::load(overrides, output)?;
    show_catalog(&ctx.catalog, output);
    Ok(())
}

pub fn run_strategies(overrides: &DataOverrides, output: &Output) -> Result<()> {
    // Metadata only: no catalog needed
    let config = load_config(overrides, &PathManager::default())?;
    let catalog = Catalog::new();
    let engine = new_engine(&catalog, &config);
    show_strategies(&engine, output);
    Ok(())
}

pub fn show_catalog(catalog: &Catalog, output: &Output) {
    let movies: Vec<&Movie> = catalog.iter().collect();
    output.heading("All Movies");
    output.movies(&movies, false, "The catalog is empty.");
    if output.format() == OutputFormat::Human {
        output.info(format!("Total movies: {}", movies.len()));
    }
}

pub fn show_strategies(engine: &RecommendationEngine<'_>, output: &Output) {
    let current = engine.current_strategy();

    match output.format() {
        OutputFormat::Human => {
            output.heading("Available Recommendation Strategies");
            for (i, key) in engine.available_strategies().into_iter().enumerate() {
                output.info(format!("{}. {}", i + 1, engine.strategy_display_name(key)));
                output.info(format!("   {}", engine.strategy_description(key)));
            }
            output.info(format!("\nCurrent strategy: {}", engine.current_strategy_name()));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let strategies: Vec<serde_json::Value> = StrategyKind::ALL
                .iter()
                .map(|kind| {
                    json!({
                        "key": kind.key(),
                        "name": kind.display_name(),
                        "description": kind.description(),
                        "current": *kind == current,
                    })
                })
                .collect();
            output.json(&json!({ "strategies": strategies }));
        }
    }
}
