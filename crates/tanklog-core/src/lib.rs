//! # Tanklog Core
//!
//! Core library for Tanklog - a personal fuel-log tracker for one vehicle.
//!
//! This crate provides the domain logic independent of the CLI interface:
//! record validation, derived statistics, and flat-file persistence.
//!
//! ## Architecture
//!
//! - **record**: The refuel record data model
//! - **validate**: Record creation and validation against the history
//! - **stats**: Derived statistics (totals, distance, average consumption)
//! - **store**: JSON flat-file load/save
//!
//! The history is an insertion-ordered list owned by the caller. The core
//! never re-sorts it; ordering invariants are enforced when a record is
//! created, not re-checked afterwards.

pub mod error;
pub mod record;
pub mod stats;
pub mod store;
pub mod validate;

pub use error::{RejectReason, StoreError};
pub use record::FuelRecord;
pub use validate::create_record;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
