//! Pool construction shared by every subcommand.

use anyhow::{bail, Context};
use clap::Args;
use pandas_api::db;
use pandas_api::state::AppConfig;
use sqlx::PgPool;

/// Connection options common to all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectArgs {
    /// Postgres connection string. Overrides `DATABASE_URL`.
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Resolve configuration from the environment, apply overrides, and open
/// the pool. Unlike the server, the CLI has no in-memory mode.
pub fn open_pool(args: &ConnectArgs) -> anyhow::Result<PgPool> {
    let mut config = AppConfig::from_env().context("reading configuration")?;
    if let Some(url) = &args.database_url {
        config.database_url = Some(url.clone());
    }

    match db::init_pool(&config).context("parsing DATABASE_URL")? {
        Some(pool) => Ok(pool),
        None => bail!("DATABASE_URL is not set; pass --database-url or export it"),
    }
}
