//! # pandas CLI Entry Point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pandas_cli::setup_db::{run_setup_db, SetupDbArgs};
use pandas_cli::tables::{run_tables, TablesArgs};

/// PANDAS Global Logistics operator CLI.
#[derive(Parser, Debug)]
#[command(name = "pandas", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the service's tables if they do not exist.
    SetupDb(SetupDbArgs),

    /// List tables in the public schema.
    Tables(TablesArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::SetupDb(args) => run_setup_db(args).await,
        Commands::Tables(args) => run_tables(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_setup_db() {
        let cli = Cli::try_parse_from(["pandas", "setup-db"]).unwrap();
        assert!(matches!(cli.command, Commands::SetupDb(_)));
    }

    #[test]
    fn parses_tables_with_url_override() {
        let cli = Cli::try_parse_from([
            "pandas",
            "tables",
            "--database-url",
            "postgres://localhost/pandas_db",
        ])
        .unwrap();
        match cli.command {
            Commands::Tables(args) => assert_eq!(
                args.connect.database_url.as_deref(),
                Some("postgres://localhost/pandas_db")
            ),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["pandas", "-vv", "tables"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["pandas", "migrate"]).is_err());
    }
}
