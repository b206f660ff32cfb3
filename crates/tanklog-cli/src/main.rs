//! Tanklog CLI - A personal fuel-log tracker for one vehicle
//!
//! This is the command-line interface for Tanklog. Without a subcommand
//! it runs the interactive menu; the subcommands cover the same actions
//! for scripts and one-shot use.

use clap::Parser;

mod app;
mod cli;
mod commands;
mod config;
mod menu;
mod ui;

use app::AppContext;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    match cli.command {
        Some(Commands::Add(ref args)) => commands::handle_add(&ctx, args),
        Some(Commands::History) => commands::handle_history(&ctx),
        Some(Commands::Total) => commands::handle_total(&ctx),
        Some(Commands::Consumption) => commands::handle_consumption(&ctx),
        Some(Commands::Summary) => commands::handle_summary(&ctx),
        Some(Commands::Completions(ref args)) => commands::handle_completions(args.shell),
        None => menu::run(&ctx),
    }
}
