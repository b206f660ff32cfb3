//! JSON flat-file load/save for the refuel history.
//!
//! The data file is a single JSON array of record objects, UTF-8, pretty
//! printed so it stays hand-editable. Loading is tolerant: anything that
//! cannot be read as a history comes back as an empty one, and individual
//! elements that fail to decode are skipped and counted rather than
//! aborting the load. Saving is atomic: the new contents are written to a
//! temp file and renamed over the destination, so a failed save leaves the
//! previous file intact.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::StoreError;
use crate::record::FuelRecord;

/// Result of loading a data file.
///
/// `skipped` counts array elements that were not valid records
/// (missing or mistyped fields in a hand-edited or corrupted file). The
/// caller decides how to surface that; loading itself never fails.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Records that decoded cleanly, in file order
    pub history: Vec<FuelRecord>,

    /// Number of array elements dropped as undecodable
    pub skipped: usize,
}

/// Load the history from `path`.
///
/// A missing file, unreadable file, invalid JSON, or a document that is
/// not a JSON array all yield an empty history. Element-level corruption
/// is reported through [`LoadOutcome::skipped`].
pub fn load(path: &Path) -> LoadOutcome {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return LoadOutcome::default(),
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&contents) {
        Ok(serde_json::Value::Array(values)) => values,
        _ => return LoadOutcome::default(),
    };

    let mut outcome = LoadOutcome::default();
    for value in values {
        match serde_json::from_value::<FuelRecord>(value) {
            Ok(record) => outcome.history.push(record),
            Err(_) => outcome.skipped += 1,
        }
    }
    outcome
}

/// Save the history to `path`, creating parent directories as needed.
///
/// On failure the previous on-disk contents are untouched; the caller can
/// report the error and retry with the in-memory history intact.
pub fn save(path: &Path, history: &[FuelRecord]) -> Result<(), StoreError> {
    let contents = serde_json::to_string_pretty(history)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Write next to the destination so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, contents)?;
    replace_file(&temp_path, path)?;
    Ok(())
}

/// Atomically rename the temp file over the destination, with a fallback
/// for platforms where rename fails if the target exists.
///
/// If the rename ultimately fails, the temp file is cleaned up.
fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // Best-effort replace on platforms where rename fails if target exists.
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
