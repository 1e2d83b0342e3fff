//! Command-line calculator for car auction fees.
//!
//! You can run this script using the following command:
//! ```shell
//! cargo run --release -- --budget 1000
//! ```
//! or
//! ```shell
//! cargo run --release -- --amount 823.53 --pretty
//! ```

use anyhow::Result;
use carauction_lib::{compute_fees, parse_amount, parse_budget, quote_budget};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

#[path = "../lib/logger.rs"]
mod logger;

/// The arguments for the command.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Total budget to spend, fees included. Prints the largest affordable bid.
    #[clap(long, allow_hyphen_values = true)]
    budget: Option<String>,

    /// Bid amount. Prints every fee the bid incurs.
    #[clap(long, allow_hyphen_values = true)]
    amount: Option<String>,

    /// Pretty-print the JSON output.
    #[clap(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // Setup the logger.
    logger::setup_logger();

    // Parse the command line arguments.
    let args = Args::parse();

    if args.budget.is_some() == args.amount.is_some() {
        eprintln!("Error: You must specify either --budget or --amount");
        std::process::exit(1);
    }

    let json: String = if args.budget.is_some() {
        let budget = parse_budget(args.budget.as_deref())?;
        debug!(%budget, "resolving amount from budget");
        render(&quote_budget(budget), args.pretty)?
    } else {
        let amount = parse_amount(args.amount.as_deref())?;
        debug!(%amount, "computing fees");
        render(&compute_fees(amount), args.pretty)?
    };
    println!("{}", json);

    Ok(())
}

/// Renders `value` as JSON.
fn render<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
