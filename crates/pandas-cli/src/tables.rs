//! # tables Subcommand
//!
//! Prints one `public` table name per line, sorted.

use clap::Args;
use pandas_api::db::catalog;

use crate::connect::{open_pool, ConnectArgs};

/// Arguments for the tables subcommand.
#[derive(Args, Debug)]
pub struct TablesArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

/// Run `tables`.
pub async fn run_tables(args: &TablesArgs) -> anyhow::Result<()> {
    let pool = open_pool(&args.connect)?;
    let result = catalog::public_tables(&pool).await;
    pool.close().await;

    let tables = result?;
    tracing::info!(count = tables.len(), "public tables");
    for table in tables {
        println!("{table}");
    }
    Ok(())
}
