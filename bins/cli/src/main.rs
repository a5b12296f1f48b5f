//! Tilebook command-line front end.
//!
//! Reads JSON records, runs the engine, prints results.
//!
//! Usage:
//!   tilebook order <file>                    - Recompute an order or invoice
//!   tilebook balances <ledger>               - Party balances
//!   tilebook check <ledger> <entry>          - Validate a new ledger entry
//!   tilebook eligible <ledger> --kind KIND   - Parties an entry kind may use
//!   tilebook words <amount>                  - Amount in words
//!   tilebook models <query>                  - Catalog suggestions
//!   tilebook report <ledger> [...]           - Summaries and monthly reports

mod commands;
mod context;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use rust_decimal::Decimal;
use tilebook_core::ledger::{Book, EntryKind};
use tilebook_shared::{AppConfig, AppError};

use crate::commands::ReportInputs;
use crate::context::CliContext;

#[derive(Parser)]
#[command(name = "tilebook", about = "Tile order and ledger computations", version)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recompute lines, totals and amount in words of an order or invoice.
    Order {
        /// Order record JSON file.
        file: PathBuf,
        #[arg(long, help = "Fail if the cached totals disagree with the lines")]
        strict: bool,
    },
    /// Party balances from a ledger file.
    Balances {
        /// Ledger entries JSON file.
        ledger: PathBuf,
        #[arg(long, help = "Only count entries dated on or before this day")]
        as_of: Option<NaiveDate>,
    },
    /// Validate a proposed entry against a ledger.
    Check {
        /// Ledger entries JSON file.
        ledger: PathBuf,
        /// Proposed entry JSON file.
        entry: PathBuf,
    },
    /// Parties an entry kind may be recorded for.
    Eligible {
        /// Ledger entries JSON file.
        ledger: PathBuf,
        #[arg(long, help = "Entry kind, e.g. ADVANCE_ADJ or DUE_PAYMENT")]
        kind: EntryKind,
    },
    /// Spell an amount in words.
    Words {
        /// Amount.
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// Catalog models matching a query.
    Models {
        /// Part of a model name.
        query: String,
    },
    /// Summaries, monthly groupings and active balances.
    Report {
        /// Ledger entries JSON file.
        ledger: PathBuf,
        #[arg(long, help = "Tile orders JSON file")]
        orders: Option<PathBuf>,
        #[arg(long, help = "Invoices JSON file")]
        invoices: Option<PathBuf>,
        #[arg(long, help = "Shipments JSON file")]
        shipments: Option<PathBuf>,
        #[arg(long, requires = "book", help = "List one month's transactions (YYYY-MM)")]
        month: Option<String>,
        #[arg(long, help = "Book for --month: advance or due")]
        book: Option<Book>,
    },
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            tracing::error!(exit_code = code, "{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load()
        .map_err(AppError::from)
        .context("failed to load configuration")?;
    logging::init(&config.logging);
    let context = CliContext::from_config(&config)?;

    let json = cli.json;
    match cli.command {
        Commands::Order { file, strict } => commands::order(&context, &file, strict, json),
        Commands::Balances { ledger, as_of } => commands::balances(&ledger, as_of, json),
        Commands::Check { ledger, entry } => commands::check(&ledger, &entry, json),
        Commands::Eligible { ledger, kind } => commands::eligible(&ledger, kind, json),
        Commands::Words { amount } => {
            commands::words(amount);
            Ok(())
        }
        Commands::Models { query } => commands::models(&context, &query, json),
        Commands::Report {
            ledger,
            orders,
            invoices,
            shipments,
            month,
            book,
        } => {
            let inputs = ReportInputs {
                ledger: &ledger,
                orders: orders.as_deref(),
                invoices: invoices.as_deref(),
                shipments: shipments.as_deref(),
                month: month.as_deref().zip(book),
            };
            commands::report(&inputs, json)
        }
    }
}
