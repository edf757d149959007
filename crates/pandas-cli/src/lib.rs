//! # pandas-cli: Operator Command-Line Interface
//!
//! ## Subcommands
//!
//! - `setup-db`: create the tables this service owns, idempotently.
//! - `tables`: list the tables in the `public` schema.
//!
//! Both read `DATABASE_URL` and `NODE_ENV` the same way the API server does,
//! so TLS requirements match the deployment. Handlers delegate to
//! `pandas_api::db`; no SQL lives here.

pub mod connect;
pub mod setup_db;
pub mod tables;
