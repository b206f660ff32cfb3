//! Add command handler: validate, append, save.

use chrono::Local;

use tanklog_core::record::DATE_FORMAT;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::commands::warn_skipped;
use crate::ui::{self, badge, blank_line, hint, kv, print, Badge, OutputMode};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context();
    let mut session = ctx.open_session()?;
    warn_skipped(&ui_ctx, &session, ctx.quiet());

    let date = match args.date {
        Some(ref date) => date.trim().to_string(),
        None => Local::now().format(DATE_FORMAT).to_string(),
    };

    let record = session
        .register(&date, args.liters, args.price, args.odometer)
        .map_err(|reason| anyhow::anyhow!("{}", reason))?;

    session
        .save()
        .map_err(|err| anyhow::anyhow!("Could not save {}: {}", session.path().display(), err))?;

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(
                    &ui_ctx,
                    &badge(&ui_ctx, Badge::Ok, "Refuel recorded"),
                );
                print(&ui_ctx, &kv(&ui_ctx, "Date", &record.date));
                print(
                    &ui_ctx,
                    &kv(&ui_ctx, "Liters", &ui::format::liters(record.liters)),
                );
                print(
                    &ui_ctx,
                    &kv(&ui_ctx, "Price", &ui::format::amount(record.price_per_liter)),
                );
                print(
                    &ui_ctx,
                    &kv(&ui_ctx, "Odometer", &record.odometer.to_string()),
                );
                print(
                    &ui_ctx,
                    &kv(&ui_ctx, "Cost", &ui::format::amount(record.cost())),
                );
                blank_line(&ui_ctx);
                print(
                    &ui_ctx,
                    &hint(&ui_ctx, "tanklog history  \u{00B7}  tanklog summary"),
                );
            }
            OutputMode::Plain => {
                println!("status=ok");
                println!("date={}", record.date);
                println!("liters={}", ui::format::amount(record.liters));
                println!("price_per_liter={}", ui::format::amount(record.price_per_liter));
                println!("odometer={}", record.odometer);
                println!("cost={}", ui::format::amount(record.cost()));
            }
        }
    }

    Ok(())
}
