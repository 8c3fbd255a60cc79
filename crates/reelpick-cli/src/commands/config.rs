use super::context::{load_config, DataOverrides};
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use movie_rec_config::{Config, PathManager};
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_config(cmd: crate::ConfigCommands, overrides: &DataOverrides, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(overrides, output),
        crate::ConfigCommands::Init { force } => init_config(overrides, force, output),
    }
}

fn show_config(overrides: &DataOverrides, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = overrides
        .config
        .clone()
        .unwrap_or_else(|| path_manager.config_file());
    let config = load_config(overrides, &path_manager)?;

    let movies_file = overrides
        .movies
        .clone()
        .unwrap_or_else(|| path_manager.resolve_data_path(&config.data.movies_file));
    let users_file = overrides
        .users
        .clone()
        .unwrap_or_else(|| path_manager.resolve_data_path(&config.data.users_file));

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            if !config_file.exists() {
                println!(
                    "{}",
                    format!("No config file at {}, using defaults", config_file.display()).bright_black()
                );
            }

            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            table.set_header(vec![
                Cell::new("Setting").fg(Color::Cyan).add_attribute(Attribute::Bold),
                Cell::new("Value").fg(Color::Cyan).add_attribute(Attribute::Bold),
            ]);
            table.add_row(vec![Cell::new("Config file"), Cell::new(config_file.display())]);
            table.add_row(vec![Cell::new("Movies file"), Cell::new(movies_file.display())]);
            table.add_row(vec![Cell::new("Users file"), Cell::new(users_file.display())]);
            table.add_row(vec![
                Cell::new("Default strategy"),
                Cell::new(
                    config
                        .default_strategy_kind()
                        .map(|kind| kind.display_name())
                        .unwrap_or("Unknown"),
                ),
            ]);
            table.add_row(vec![
                Cell::new("Default count"),
                Cell::new(config.recommendations.default_count),
            ]);
            table.add_row(vec![
                Cell::new("Seed users"),
                Cell::new(
                    config
                        .seed_users
                        .iter()
                        .map(|u| u.username.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
            ]);
            table.add_row(vec![Cell::new("Log directory"), Cell::new(path_manager.log_dir().display())]);
            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file,
                "movies_file": movies_file,
                "users_file": users_file,
                "recommendations": config.recommendations,
                "seed_users": config.seed_users.iter().map(|u| &u.username).collect::<Vec<_>>(),
                "log_dir": path_manager.log_dir(),
            }));
        }
    }

    Ok(())
}

fn init_config(overrides: &DataOverrides, force: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = overrides
        .config
        .clone()
        .unwrap_or_else(|| path_manager.config_file());

    if config_file.exists() && !force {
        output.warn(format!(
            "Config file already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create directories: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    tracing::info!(path = %config_file.display(), "Wrote default configuration");
    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
