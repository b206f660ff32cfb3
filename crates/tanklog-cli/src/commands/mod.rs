//! Command handlers for the Tanklog CLI.
//!
//! Each handler loads the session, acts, and renders through the ui
//! module. The `render_*` functions are shared with the interactive menu,
//! which drives the same views against its long-lived session.

mod add;
mod history;
mod misc;
mod stats;

pub use add::handle_add;
pub use history::{handle_history, render_history};
pub use misc::handle_completions;
pub use stats::{
    handle_consumption, handle_summary, handle_total, render_consumption, render_summary,
    render_total,
};

use crate::app::Session;
use crate::ui::{badge, Badge, UiContext};

/// Surface records dropped as undecodable during load.
///
/// Goes to stderr so plain-mode stdout stays parseable.
pub fn warn_skipped(ui: &UiContext, session: &Session, quiet: bool) {
    if quiet || session.skipped() == 0 {
        return;
    }
    let message = format!(
        "Skipped {} corrupted record(s) in {}",
        session.skipped(),
        session.path().display()
    );
    if ui.mode.is_pretty() {
        eprintln!("{}", badge(ui, Badge::Warn, &message));
    } else {
        eprintln!("warning={}", message);
    }
}
