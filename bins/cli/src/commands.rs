//! Command handlers.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::Path;
use tilebook_core::ids::ClockIdGenerator;
use tilebook_core::ledger::{
    Balances, Book, Eligibility, EntryKind, FinanceEntry, LedgerEngine, NewEntry, PartyBalance,
};
use tilebook_core::order::{GroupName, LineFigures, OrderCalculator, OrderRecord};
use tilebook_core::pricing::CatalogModel;
use tilebook_core::reports::{Dashboard, ReportService};
use tilebook_core::shipment::ShipmentEntry;
use tilebook_core::words::amount_in_words;
use tilebook_shared::AppError;
use tilebook_shared::types::Currency;

use crate::context::{CliContext, read_json};

/// Computed figures of one order line.
#[derive(Debug, Serialize)]
struct LineReport {
    group: GroupName,
    model: String,
    #[serde(flatten)]
    figures: LineFigures,
}

/// Output of the `order` command.
#[derive(Debug, Serialize)]
struct OrderReport {
    /// Whether the input's cached totals matched its lines.
    cached_totals_coherent: bool,
    record: OrderRecord,
    lines: Vec<LineReport>,
    amount_in_words: String,
}

/// Recomputes an order or invoice record.
pub fn order(context: &CliContext, path: &Path, strict: bool, json: bool) -> Result<()> {
    let mut record: OrderRecord = read_json(path)?;
    context.prefill(&mut record);
    record.validate_for_save()?;

    let calc = OrderCalculator::new(context.packing_for(record.kind));
    if strict {
        record.ensure_coherent(&calc)?;
    }
    let cached_totals_coherent = record.is_coherent(&calc);
    record.refresh_totals(&calc);

    let kind = record.kind;
    let lines = record
        .groups
        .iter()
        .flat_map(|group| {
            group.lines.iter().map(move |line| LineReport {
                group: group.name,
                model: line.model.clone(),
                figures: calc.line_figures(kind, line),
            })
        })
        .collect();
    let report = OrderReport {
        cached_totals_coherent,
        amount_in_words: amount_in_words(record.totals.net),
        record,
        lines,
    };

    if json {
        return print_json(&report);
    }

    let totals = &report.record.totals;
    println!("{} {} ({})", report.record.kind, report.record.id, report.record.date);
    for line in &report.lines {
        println!(
            "  [{}] {:<14} {:>8} sft  {:>4} box {:>3} loose  {:>14}",
            line.group.label(),
            line.model,
            line.figures.conversion.sft,
            line.figures.conversion.box_count,
            line.figures.conversion.loose_pieces,
            money(line.figures.amounts.net_amount),
        );
    }
    println!("  SFT {}  boxes {}  pieces {}", totals.sft, totals.boxes, totals.pieces);
    println!("  Subtotal {}", money(totals.subtotal));
    println!("  Net      {}", money(totals.net));
    println!("  Rest     {}", money(totals.rest));
    println!("  {}", report.amount_in_words);
    Ok(())
}

/// Prints party balances.
pub fn balances(path: &Path, as_of: Option<NaiveDate>, json: bool) -> Result<()> {
    let entries: Vec<FinanceEntry> = read_json(path)?;
    let balances = match as_of {
        Some(date) => LedgerEngine::balances_as_of_date(&entries, date),
        None => LedgerEngine::balances_as_of(&entries),
    };

    if json {
        return print_json(&balances);
    }
    print_balances(&balances);
    Ok(())
}

fn print_balances(balances: &Balances) {
    for balance in balances.values() {
        render_balance(balance);
    }
}

fn render_balance(balance: &PartyBalance) {
    println!(
        "- {} • advance {} • due {} • last {}",
        balance.party,
        money(balance.advance_balance()),
        money(balance.due_balance()),
        balance
            .last_date
            .map_or_else(|| "-".to_string(), |d| d.to_string()),
    );
}

#[derive(Debug, Serialize)]
struct Rejection {
    accepted: bool,
    error_code: &'static str,
    message: String,
    max: Option<Decimal>,
}

/// Validates a proposed entry against the ledger.
pub fn check(ledger: &Path, entry: &Path, json: bool) -> Result<()> {
    let entries: Vec<FinanceEntry> = read_json(ledger)?;
    let proposed: NewEntry = read_json(entry)?;
    let balances = LedgerEngine::balances_as_of(&entries);

    match LedgerEngine::record(proposed, &balances, &ClockIdGenerator) {
        Ok(recorded) => {
            if json {
                print_json(&recorded)
            } else {
                println!(
                    "accepted {} {} {} for {}",
                    recorded.id,
                    recorded.kind,
                    money(recorded.amount),
                    recorded.party_name
                );
                Ok(())
            }
        }
        Err(err) => {
            if json {
                print_json(&Rejection {
                    accepted: false,
                    error_code: err.error_code(),
                    message: err.to_string(),
                    max: err.max_allowed(),
                })?;
            }
            Err(AppError::from(err)).context("entry rejected")
        }
    }
}

/// Lists parties an entry kind may be recorded for.
pub fn eligible(ledger: &Path, kind: EntryKind, json: bool) -> Result<()> {
    let entries: Vec<FinanceEntry> = read_json(ledger)?;
    let eligibility = LedgerEngine::eligible_parties(kind, &LedgerEngine::balances_as_of(&entries));

    if json {
        return print_json(&eligibility);
    }
    match eligibility {
        Eligibility::Any => println!("{kind}: any party"),
        Eligibility::Parties(parties) => {
            for party in parties {
                println!("{party}");
            }
        }
    }
    Ok(())
}

/// Spells an amount.
pub fn words(amount: Decimal) {
    println!("{}", amount_in_words(amount));
}

/// Lists catalog models matching a query.
pub fn models(context: &CliContext, query: &str, json: bool) -> Result<()> {
    let found: Vec<&CatalogModel> = context.catalog().suggest(query);
    if json {
        return print_json(&found);
    }
    for model in found {
        println!("{} ({})", model.model, model.size);
    }
    Ok(())
}

/// Inputs of the `report` command.
#[derive(Debug)]
pub struct ReportInputs<'a> {
    /// Ledger entries file.
    pub ledger: &'a Path,
    /// Tile orders file.
    pub orders: Option<&'a Path>,
    /// Invoices file.
    pub invoices: Option<&'a Path>,
    /// Shipments file.
    pub shipments: Option<&'a Path>,
    /// Restrict to one month's transactions of a book.
    pub month: Option<(&'a str, Book)>,
}

/// Prints the dashboard or one month's transactions.
pub fn report(inputs: &ReportInputs<'_>, json: bool) -> Result<()> {
    let entries: Vec<FinanceEntry> = read_json(inputs.ledger)?;

    if let Some((month, book)) = inputs.month {
        let selected = ReportService::monthly_transactions(&entries, month, book)
            .map_err(AppError::from)?;
        if json {
            return print_json(&selected);
        }
        for entry in selected {
            println!(
                "{} {} {:<24} {:>14}",
                entry.date,
                entry.id,
                entry.party_name,
                money(entry.amount)
            );
        }
        return Ok(());
    }

    let mut records: Vec<OrderRecord> = read_optional(inputs.orders)?;
    records.extend(read_optional::<OrderRecord>(inputs.invoices)?);
    let shipments: Vec<ShipmentEntry> = read_optional(inputs.shipments)?;
    let dashboard = ReportService::dashboard(&records, &shipments, &entries);

    if json {
        return print_json(&dashboard);
    }
    render_dashboard(&dashboard);
    Ok(())
}

fn read_optional<T: serde::de::DeserializeOwned>(path: Option<&Path>) -> Result<Vec<T>> {
    path.map_or_else(|| Ok(Vec::new()), read_json)
}

fn render_dashboard(dashboard: &Dashboard) {
    println!(
        "Orders: {} • {} sft • {}",
        dashboard.orders.count,
        dashboard.orders.sft,
        money(dashboard.orders.amount)
    );
    println!(
        "Invoices: {} • net {} • pending {}",
        dashboard.invoices.count,
        money(dashboard.invoices.net),
        money(dashboard.invoices.pending)
    );
    println!(
        "Pipeline: {} shipments • {} unloaded",
        dashboard.pipeline.total, dashboard.pipeline.unloaded
    );
    let finance = &dashboard.finance;
    println!(
        "Advance: in {} out {} • Due: in {} out {}",
        money(finance.advance_in),
        money(finance.advance_out),
        money(finance.due_in),
        money(finance.due_out)
    );
    for month in &dashboard.order_months {
        println!(
            "  {} • {} orders • {} sft",
            month.label, month.summary.count, month.summary.sft
        );
    }
    for report in [&dashboard.active_advances, &dashboard.active_dues] {
        println!("Active {} ({}):", report.book, money(report.total));
        for party in &report.parties {
            println!("  {} {}", party.party, money(party.balance));
        }
    }
}

fn money(value: Decimal) -> String {
    Currency::default().format(value)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
