use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::context::DataOverrides;
use commands::lists::ListCommand;
use commands::{config, lists, movies, recommend, session};
use movie_rec_config::PathManager;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelpick")]
#[command(about = "ReelPick - Track what you watched, pick what to watch next")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Config file (defaults to config.toml in the ReelPick config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Movie catalog CSV, overriding the configured one
    #[arg(long, global = true, value_name = "PATH")]
    movies: Option<PathBuf>,

    /// User store CSV, overriding the configured one
    #[arg(long, global = true, value_name = "PATH")]
    users: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default when no command is given)
    Session,
    /// List every movie in the catalog
    Movies,
    /// List the available recommendation strategies
    Strategies,
    /// Recommend movies for a user
    #[command(long_about = "Rank unwatched movies for a user. Movies already in the user's watch history or watchlist are never recommended. A missing or non-positive --count falls back to the configured default.")]
    Recommend {
        /// Username
        #[arg(long, short)]
        user: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Strategy key: genre, rating, year or hybrid
        #[arg(long, short)]
        strategy: Option<String>,

        /// Number of recommendations
        #[arg(long, short = 'n', allow_hyphen_values = true)]
        count: Option<i64>,
    },
    /// Manage a user's watchlist
    Watchlist {
        #[command(subcommand)]
        cmd: WatchlistCommands,
    },
    /// Show a user's watch history
    History {
        #[command(subcommand)]
        cmd: HistoryCommands,
    },
    /// Mark a movie as watched
    Watch {
        #[command(flatten)]
        auth: UserArgs,

        /// Movie ID
        movie_id: String,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(clap::Args)]
struct UserArgs {
    /// Username
    #[arg(long, short)]
    user: String,

    /// Password (prompted when omitted)
    #[arg(long)]
    password: Option<String>,
}

#[derive(Subcommand)]
enum WatchlistCommands {
    /// Add a movie to the watchlist
    Add {
        #[command(flatten)]
        auth: UserArgs,
        /// Movie ID
        movie_id: String,
    },
    /// Remove a movie from the watchlist
    Remove {
        #[command(flatten)]
        auth: UserArgs,
        /// Movie ID
        movie_id: String,
    },
    /// Show the watchlist
    Show {
        #[command(flatten)]
        auth: UserArgs,
    },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// Show the watch history
    Show {
        #[command(flatten)]
        auth: UserArgs,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the effective configuration and data paths
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Session);

    // The interactive session owns the terminal, so its logs go to a file
    let log_file = match command {
        Commands::Session => Some(PathManager::default().session_log_file()),
        _ => None,
    };
    logging::init_logging(cli.verbose, cli.quiet, log_file.as_deref())
        .map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let overrides = DataOverrides {
        config: cli.config,
        movies: cli.movies,
        users: cli.users,
    };

    match command {
        Commands::Session => session::run_session(&overrides, &output),
        Commands::Movies => movies::run_movies(&overrides, &output),
        Commands::Strategies => movies::run_strategies(&overrides, &output),
        Commands::Recommend {
            user,
            password,
            strategy,
            count,
        } => recommend::run_recommend(&overrides, user, password, strategy, count, &output),
        Commands::Watchlist { cmd } => {
            let (command, auth, movie_id) = match cmd {
                WatchlistCommands::Add { auth, movie_id } => (ListCommand::WatchlistAdd, auth, Some(movie_id)),
                WatchlistCommands::Remove { auth, movie_id } => {
                    (ListCommand::WatchlistRemove, auth, Some(movie_id))
                }
                WatchlistCommands::Show { auth } => (ListCommand::WatchlistShow, auth, None),
            };
            lists::run_list_command(&overrides, command, auth.user, auth.password, movie_id, &output)
        }
        Commands::History {
            cmd: HistoryCommands::Show { auth },
        } => lists::run_list_command(
            &overrides,
            ListCommand::HistoryShow,
            auth.user,
            auth.password,
            None,
            &output,
        ),
        Commands::Watch { auth, movie_id } => lists::run_list_command(
            &overrides,
            ListCommand::Watch,
            auth.user,
            auth.password,
            Some(movie_id),
            &output,
        ),
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &overrides, &output)
        }
    }
}
