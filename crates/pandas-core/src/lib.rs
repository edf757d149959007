#![deny(missing_docs)]

//! # pandas-core: Domain Types for PANDAS Global Logistics
//!
//! This crate defines the types every other crate in the workspace shares.
//! It performs no I/O: persistence lives in `pandas-api::db`, rendering in
//! `pandas-api::views`.
//!
//! ## Design Principles
//!
//! 1. **Raw input and validated values are distinct types.** Handlers
//!    deserialize into [`WaitlistForm`] / [`CargoSubmission`] (all fields
//!    optional) and convert into [`WaitlistSignup`] / [`NewCargo`] through
//!    a fallible `validate()`. Code holding the validated type never
//!    re-checks.
//!
//! 2. **Email format is checked once.** [`Email::parse`] is the only way to
//!    obtain an [`Email`].
//!
//! 3. **[`ValidationError`]** carries the exact client-facing message for
//!    each rejection.

pub mod cargo;
pub mod email;
pub mod error;
pub mod tracking;
pub mod waitlist;

pub use cargo::{filter_cargo, CargoId, CargoRecord, CargoSubmission, NewCargo};
pub use email::Email;
pub use error::ValidationError;
pub use tracking::{DemoManifest, TrackingStatus};
pub use waitlist::{WaitlistForm, WaitlistSignup, DEFAULT_USER_TYPE};
