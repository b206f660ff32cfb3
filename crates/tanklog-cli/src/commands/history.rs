//! History command handler and the shared history view.

use tanklog_core::record::FuelRecord;

use crate::app::AppContext;
use crate::commands::warn_skipped;
use crate::ui::{self, badge, header, print, simple_table, Badge, Column, UiContext};

pub fn handle_history(ctx: &AppContext) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context();
    let session = ctx.open_session()?;
    warn_skipped(&ui_ctx, &session, ctx.quiet());

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "history", None));
    }
    render_history(&ui_ctx, session.history());
    Ok(())
}

/// Render the refuel table, or an empty notice.
pub fn render_history(ui_ctx: &UiContext, history: &[FuelRecord]) {
    if history.is_empty() {
        if ui_ctx.mode.is_pretty() {
            print(ui_ctx, &badge(ui_ctx, Badge::Info, "No refuels recorded yet"));
        } else {
            println!("status=empty");
        }
        return;
    }

    let columns = [
        Column::new("Date"),
        Column::new("Liters"),
        Column::new("Price/L"),
        Column::new("Odometer"),
    ];
    let rows: Vec<Vec<String>> = history
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                ui::format::amount(r.liters),
                ui::format::amount(r.price_per_liter),
                r.odometer.to_string(),
            ]
        })
        .collect();

    print(ui_ctx, &simple_table(ui_ctx, &columns, &rows));
}
