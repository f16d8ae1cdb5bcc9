//! cantina CLI - Pickup ready-time estimates for canteen orders.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "cantina")]
#[command(about = "Pickup ready-time estimates for canteen orders", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate when an order will be ready
    Predict {
        /// Line item as <id>:<quantity>:<minutes per unit> (repeatable)
        #[arg(short, long = "item", value_name = "ITEM")]
        items: Vec<String>,

        /// Orders already waiting at the vendor. Defaults to 0.
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        queue: Option<i64>,

        /// Order time (ISO-8601). Defaults to now.
        #[arg(short, long)]
        at: Option<String>,

        /// Vendor id used to select a profile
        #[arg(long)]
        vendor: Option<String>,

        /// JSON request body to read, or "-" for stdin
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Vendor profile table (JSON). Defaults to the user config, then built-ins.
        #[arg(short, long)]
        profiles: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Report the actual preparation time of a finished order
    Feedback {
        /// Order identifier
        #[arg(long)]
        order_id: String,

        /// Minutes that were predicted
        #[arg(long)]
        predicted: f64,

        /// Minutes the order actually took
        #[arg(long)]
        actual: f64,

        /// Vendor that prepared the order
        #[arg(long)]
        vendor: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// List vendor profiles
    Profiles {
        /// Vendor profile table (JSON). Defaults to the user config, then built-ins.
        #[arg(short, long)]
        profiles: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)?;

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Predict {
            items,
            queue,
            at,
            vendor,
            request,
            profiles,
            format,
        } => commands::predict::predict(
            &items,
            queue,
            at.as_deref(),
            vendor.as_deref(),
            request.as_deref(),
            profiles.as_deref(),
            format,
        ),
        Commands::Feedback {
            order_id,
            predicted,
            actual,
            vendor,
            format,
        } => commands::feedback::feedback(order_id, predicted, actual, vendor, format),
        Commands::Profiles { profiles, format } => {
            commands::profiles::list_profiles(profiles.as_deref(), format)
        }
    }
}
