use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use tanklog_core::VERSION;

/// Tanklog - A personal fuel-log tracker for one vehicle
#[derive(Parser)]
#[command(name = "tanklog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the fuel-log data file
    #[arg(short, long, global = true, env = "TANKLOG_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// ASCII-only output (no unicode symbols)
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Refuel date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Liters dispensed
    #[arg(long)]
    pub liters: f64,

    /// Price per liter
    #[arg(long)]
    pub price: f64,

    /// Odometer reading
    #[arg(long)]
    pub odometer: i64,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a refuel and save it
    Add(AddArgs),

    /// Show the refuel history
    History,

    /// Show the total fuel spend
    Total,

    /// Show the average consumption
    Consumption,

    /// Show the full summary
    Summary,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
