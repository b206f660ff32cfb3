//! Statistics command handlers and the shared stat views.

use tanklog_core::record::FuelRecord;
use tanklog_core::stats;

use crate::app::AppContext;
use crate::commands::warn_skipped;
use crate::ui::{self, badge, header, kv, print, Badge, UiContext};

pub fn handle_total(ctx: &AppContext) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context();
    let session = ctx.open_session()?;
    warn_skipped(&ui_ctx, &session, ctx.quiet());

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "total", None));
    }
    render_total(&ui_ctx, session.history());
    Ok(())
}

pub fn handle_consumption(ctx: &AppContext) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context();
    let session = ctx.open_session()?;
    warn_skipped(&ui_ctx, &session, ctx.quiet());

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "consumption", None));
    }
    render_consumption(&ui_ctx, session.history());
    Ok(())
}

pub fn handle_summary(ctx: &AppContext) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context();
    let session = ctx.open_session()?;
    warn_skipped(&ui_ctx, &session, ctx.quiet());

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "summary", None));
    }
    render_summary(&ui_ctx, session.history());
    Ok(())
}

fn print_empty(ui_ctx: &UiContext) {
    if ui_ctx.mode.is_pretty() {
        print(ui_ctx, &badge(ui_ctx, Badge::Info, "No refuels recorded yet"));
    } else {
        println!("status=empty");
    }
}

/// Render the total spend over the recorded span.
pub fn render_total(ui_ctx: &UiContext, history: &[FuelRecord]) {
    let Some((first, last)) = stats::first_and_last(history) else {
        print_empty(ui_ctx);
        return;
    };

    print(ui_ctx, &kv(ui_ctx, "First date", &first.date));
    print(ui_ctx, &kv(ui_ctx, "Last date", &last.date));
    print(
        ui_ctx,
        &kv(
            ui_ctx,
            "Total cost",
            &ui::format::amount(stats::total_cost(history)),
        ),
    );
}

/// Render the average consumption, or why it cannot be computed.
pub fn render_consumption(ui_ctx: &UiContext, history: &[FuelRecord]) {
    let Some(consumption) = stats::average_consumption(history) else {
        if ui_ctx.mode.is_pretty() {
            print(
                ui_ctx,
                &badge(
                    ui_ctx,
                    Badge::Info,
                    "Average consumption needs at least two refuels with increasing odometer",
                ),
            );
        } else {
            println!("status=unavailable");
        }
        return;
    };

    // first_and_last is Some whenever a consumption exists
    if let Some((first, last)) = stats::first_and_last(history) {
        print(ui_ctx, &kv(ui_ctx, "First date", &first.date));
        print(ui_ctx, &kv(ui_ctx, "Last date", &last.date));
    }
    print(
        ui_ctx,
        &kv(
            ui_ctx,
            "Average consumption",
            &ui::format::consumption(consumption),
        ),
    );
}

/// Render the full summary block.
pub fn render_summary(ui_ctx: &UiContext, history: &[FuelRecord]) {
    let Some(summary) = stats::summary(history) else {
        print_empty(ui_ctx);
        return;
    };

    print(ui_ctx, &kv(ui_ctx, "First date", &summary.first_date));
    print(ui_ctx, &kv(ui_ctx, "Last date", &summary.last_date));
    print(
        ui_ctx,
        &kv(ui_ctx, "Total cost", &ui::format::amount(summary.total_cost)),
    );
    print(
        ui_ctx,
        &kv(
            ui_ctx,
            "Total distance",
            &ui::format::distance(summary.total_distance),
        ),
    );
    print(
        ui_ctx,
        &kv(
            ui_ctx,
            "Total liters",
            &ui::format::liters(summary.total_liters),
        ),
    );
    let consumption = match summary.average_consumption {
        Some(value) => ui::format::consumption(value),
        None => "n/a".to_string(),
    };
    print(ui_ctx, &kv(ui_ctx, "Average consumption", &consumption));
}
