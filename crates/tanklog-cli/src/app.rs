//! Application context and the in-memory session.
//!
//! The session owns the ordered history for the lifetime of an invocation
//! (one subcommand, or the whole interactive menu). The core operates on
//! borrowed read access; the only mutation is appending a validated
//! record, which marks the session dirty until the next save.

use std::path::{Path, PathBuf};

use tanklog_core::error::{RejectReason, StoreError};
use tanklog_core::record::FuelRecord;
use tanklog_core::{store, validate};

use crate::cli::Cli;
use crate::config::{default_data_path, read_config, resolve_config_path};
use crate::ui::UiContext;

/// Bundles CLI args with path resolution and UI environment detection.
pub struct AppContext<'a> {
    cli: &'a Cli,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Build the UI context from the environment and global flags.
    pub fn ui_context(&self) -> UiContext {
        UiContext::from_env(self.cli.no_color, self.cli.ascii)
    }

    /// Resolve the data file path: `--file` flag (or `TANKLOG_FILE` env)
    /// first, then the config file, then the XDG default.
    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(ref path) = self.cli.file {
            return Ok(PathBuf::from(path));
        }

        let config_path = resolve_config_path()?;
        if config_path.exists() {
            let config = read_config(&config_path)?;
            return Ok(PathBuf::from(config.data.path));
        }

        default_data_path()
    }

    /// Load the history into a new session.
    pub fn open_session(&self) -> anyhow::Result<Session> {
        Ok(Session::open(self.data_path()?))
    }
}

/// The in-memory refuel history plus its on-disk location.
pub struct Session {
    path: PathBuf,
    history: Vec<FuelRecord>,
    skipped: usize,
    dirty: bool,
}

impl Session {
    /// Load the history from `path`. Never fails: a missing or unreadable
    /// file is an empty history, and undecodable records are counted in
    /// [`Session::skipped`].
    pub fn open(path: PathBuf) -> Self {
        let outcome = store::load(&path);
        Self {
            path,
            history: outcome.history,
            skipped: outcome.skipped,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn history(&self) -> &[FuelRecord] {
        &self.history
    }

    /// Records dropped as undecodable when the file was loaded.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Whether the history has changed since the last save.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Validate a candidate refuel against the history and append it.
    ///
    /// Returns a copy of the accepted record for receipt display.
    pub fn register(
        &mut self,
        date: &str,
        liters: f64,
        price_per_liter: f64,
        odometer: i64,
    ) -> Result<FuelRecord, RejectReason> {
        let record =
            validate::create_record(date, liters, price_per_liter, odometer, &self.history)?;
        self.history.push(record.clone());
        self.dirty = true;
        Ok(record)
    }

    /// Persist the history. On failure the in-memory state is untouched
    /// and stays dirty, so the user can retry.
    pub fn save(&mut self) -> Result<(), StoreError> {
        store::save(&self.path, &self.history)?;
        self.dirty = false;
        Ok(())
    }
}
