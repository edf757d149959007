//! # setup-db Subcommand
//!
//! Creates `cargo` and `waitlist_signups` if they are missing.

use clap::Args;
use pandas_api::db::schema;

use crate::connect::{open_pool, ConnectArgs};

/// Arguments for the setup-db subcommand.
#[derive(Args, Debug)]
pub struct SetupDbArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

/// Run `setup-db`.
pub async fn run_setup_db(args: &SetupDbArgs) -> anyhow::Result<()> {
    let pool = open_pool(&args.connect)?;
    let result = schema::ensure_tables(&pool).await;
    pool.close().await;

    let tables = result?;
    println!("Tables ready: {} ✅", tables.join(", "));
    Ok(())
}
