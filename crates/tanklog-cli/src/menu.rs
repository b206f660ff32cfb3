//! Interactive menu loop.
//!
//! Running `tanklog` without a subcommand drops into a numbered menu that
//! owns the history for the whole session. The menu title and the save
//! entry carry a `*` marker while there are unsaved changes; quitting with
//! unsaved changes offers a save first. Cancelled or invalid interactions
//! reprompt, the loop only ends through the quit entry.

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use tanklog_core::record::DATE_FORMAT;

use crate::app::{AppContext, Session};
use crate::commands::{
    render_consumption, render_history, render_summary, render_total, warn_skipped,
};
use crate::ui::{badge, blank_line, divider, header, kv, print, print_error, Badge, UiContext};

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context();
    if !ui_ctx.is_interactive() {
        return Err(anyhow::anyhow!(
            "The menu needs a terminal. Use the subcommands instead: tanklog add, history, total, consumption, summary."
        ));
    }

    let mut session = ctx.open_session()?;
    warn_skipped(&ui_ctx, &session, ctx.quiet());

    print(&ui_ctx, &header(&ui_ctx, "fuel log", None));
    print(
        &ui_ctx,
        &kv(&ui_ctx, "File", &session.path().display().to_string()),
    );
    print(&ui_ctx, &divider(&ui_ctx));
    blank_line(&ui_ctx);

    let theme = ColorfulTheme::default();
    loop {
        let marker = if session.dirty() { " *" } else { "" };
        let save_label = format!("Save{}", marker);
        let items = [
            "Register refuel",
            "Show history",
            "Show total cost",
            "Show average consumption",
            "Show summary",
            save_label.as_str(),
            "Quit",
        ];

        let choice = Select::with_theme(&theme)
            .with_prompt(format!("Tanklog{}", marker))
            .items(&items)
            .default(0)
            .interact_opt()?;

        // Esc on the menu reprompts rather than quitting, so a stray key
        // can't drop unsaved changes
        let Some(choice) = choice else {
            continue;
        };

        blank_line(&ui_ctx);
        match choice {
            0 => register(&ui_ctx, &theme, &mut session)?,
            1 => render_history(&ui_ctx, session.history()),
            2 => render_total(&ui_ctx, session.history()),
            3 => render_consumption(&ui_ctx, session.history()),
            4 => render_summary(&ui_ctx, session.history()),
            5 => save(&ui_ctx, &mut session),
            _ => {
                if quit(&ui_ctx, &theme, &mut session)? {
                    break;
                }
            }
        }
        blank_line(&ui_ctx);
    }

    Ok(())
}

/// Prompt for one refuel and register it.
///
/// Non-numeric input aborts the registration with nothing changed, as
/// does a validation rejection; both report and fall back to the menu.
fn register(ui_ctx: &UiContext, theme: &ColorfulTheme, session: &mut Session) -> anyhow::Result<()> {
    let today = Local::now().format(DATE_FORMAT).to_string();

    let date: String = Input::with_theme(theme)
        .with_prompt("Date")
        .default(today)
        .interact_text()?;

    let liters_text: String = Input::with_theme(theme)
        .with_prompt("Liters")
        .interact_text()?;
    let Ok(liters) = liters_text.trim().parse::<f64>() else {
        print_error(ui_ctx, "Liters must be a number", None);
        return Ok(());
    };

    let price_text: String = Input::with_theme(theme)
        .with_prompt("Price per liter")
        .interact_text()?;
    let Ok(price) = price_text.trim().parse::<f64>() else {
        print_error(ui_ctx, "Price per liter must be a number", None);
        return Ok(());
    };

    let odometer_text: String = Input::with_theme(theme)
        .with_prompt("Odometer")
        .interact_text()?;
    let Ok(odometer) = odometer_text.trim().parse::<i64>() else {
        print_error(ui_ctx, "Odometer must be a whole number", None);
        return Ok(());
    };

    match session.register(date.trim(), liters, price, odometer) {
        Ok(record) => {
            print(ui_ctx, &badge(ui_ctx, Badge::Ok, "Refuel recorded"));
            print(ui_ctx, &kv(ui_ctx, "Date", &record.date));
            print(
                ui_ctx,
                &kv(ui_ctx, "Cost", &crate::ui::format::amount(record.cost())),
            );
        }
        Err(reason) => print_error(ui_ctx, &reason.to_string(), None),
    }

    Ok(())
}

fn save(ui_ctx: &UiContext, session: &mut Session) {
    match session.save() {
        Ok(()) => {
            let message = format!(
                "Saved {} record(s) to {}",
                session.history().len(),
                session.path().display()
            );
            print(ui_ctx, &badge(ui_ctx, Badge::Ok, &message));
        }
        Err(err) => print_error(
            ui_ctx,
            &err.to_string(),
            Some("the file was not changed; you can retry"),
        ),
    }
}

/// Returns true when the session may end.
///
/// With unsaved changes the user is offered a save first; a failed save
/// keeps the menu alive so nothing is silently lost.
fn quit(
    ui_ctx: &UiContext,
    theme: &ColorfulTheme,
    session: &mut Session,
) -> anyhow::Result<bool> {
    if !session.dirty() {
        return Ok(true);
    }

    let save_first = Confirm::with_theme(theme)
        .with_prompt("Save changes before quitting?")
        .default(true)
        .interact()?;
    if !save_first {
        return Ok(true);
    }

    match session.save() {
        Ok(()) => {
            print(ui_ctx, &badge(ui_ctx, Badge::Ok, "Saved"));
            Ok(true)
        }
        Err(err) => {
            print_error(
                ui_ctx,
                &err.to_string(),
                Some("still in the menu; your records are not lost"),
            );
            Ok(false)
        }
    }
}
