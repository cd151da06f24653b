use clap::{Parser, Subcommand};
use statespace::{
    config::ConfigError,
    domains::{GridConfig, GridDomain, RiverCrossing},
    search::{search_engines::SearchEngineName, Report, Verbosity},
};
use std::{path::PathBuf, process::ExitCode};
use strum::IntoEnumIterator;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(version)]
/// Compare forward, heuristic, backward and bidirectional search on a small
/// task. Runs the 2x2 fetch grid when no task is given.
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(
        value_enum,
        help = "The search engine to run, can be repeated [default: all]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_names: Vec<SearchEngineName>,
    #[arg(
        value_enum,
        help = "The verbosity level of the logs written to stderr",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Silent
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk to the item, pick it up and bring it back to the base.
    Grid {
        #[arg(
            help = "TOML file with the grid size and the base and item cells",
            long = "config",
            id = "CONFIG"
        )]
        config: Option<PathBuf>,
    },
    /// Get the farmer, wolf, goat and cabbage across the river.
    River,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: LevelFilter = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ConfigError> {
    let engines = if cli.search_engine_names.is_empty() {
        SearchEngineName::iter().collect()
    } else {
        cli.search_engine_names
    };

    match cli.command.unwrap_or(Commands::Grid { config: None }) {
        Commands::Grid { config } => {
            let config = match config {
                Some(path) => GridConfig::from_path(&path)?,
                None => GridConfig::default(),
            };
            let domain = GridDomain::new(config);
            let title = format!(
                "Fetch grid {}x{}, base {:?}, item {:?}",
                config.width(),
                config.height(),
                config.base(),
                config.item()
            );
            let report = Report::run(
                title,
                &domain,
                &domain.start_state(),
                &domain.goal_state(),
                &engines,
            );
            print!("{}", report);
        }
        Commands::River => {
            let domain = RiverCrossing::new();
            let report = Report::run(
                "River crossing (farmer, wolf, goat, cabbage)",
                &domain,
                &domain.start_state(),
                &domain.goal_state(),
                &engines,
            );
            print!("{}", report);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_reported_once_as_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let cli = Cli::parse_from([
            "statespace",
            "-e",
            "bfs",
            "grid",
            "--config",
            path.to_str().unwrap(),
        ]);
        let error = run(cli).unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
        assert!(error.to_string().contains("missing.toml"));
    }

    #[test]
    fn engines_default_to_all_and_can_be_repeated() {
        let cli = Cli::parse_from(["statespace", "river"]);
        assert!(cli.search_engine_names.is_empty());
        assert_eq!(cli.verbosity, Verbosity::Silent);
        assert!(run(cli).is_ok());

        let cli = Cli::parse_from(["statespace", "-e", "astar", "-e", "bidirectional"]);
        assert_eq!(
            cli.search_engine_names,
            vec![SearchEngineName::Astar, SearchEngineName::Bidirectional]
        );
        assert!(cli.command.is_none());
    }
}
