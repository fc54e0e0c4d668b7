//! PaperTrade CLI — scripted access to the simulator, no terminal UI.
//!
//! Commands:
//! - `assets` — print the demo catalog (optionally as JSON)
//! - `simulate` — run the price feed for N ticks and print the drift
//! - `trade` — execute one order against a fresh demo session
//! - `report` — replay the seed portfolio and print the activity report

use anyhow::{bail, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use papertrade_core::config::SimConfig;
use papertrade_core::domain::{OrderSide, OrderTicket, User};
use papertrade_core::reports::ReportSummary;
use papertrade_core::session::Session;
use papertrade_core::valuation::valuate;

#[derive(Parser)]
#[command(
    name = "papertrade",
    about = "PaperTrade CLI — simulated trading without the TUI"
)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when missing.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demo asset catalog.
    Assets {
        /// Emit JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Advance the price feed and print where each asset lands.
    Simulate {
        /// Number of feed ticks to run.
        #[arg(long, default_value_t = 100)]
        ticks: u32,

        /// Only show this symbol (e.g. AAPL).
        #[arg(long)]
        asset: Option<String>,
    },
    /// Execute one order against a fresh demo session and print the result.
    Trade {
        /// Asset symbol (e.g. AAPL, BTC, GOLD).
        #[arg(long)]
        asset: String,

        /// buy or sell.
        #[arg(long)]
        side: String,

        /// Quantity to trade (fractional allowed).
        #[arg(long)]
        quantity: f64,

        /// Optional note recorded on the ledger entry.
        #[arg(long)]
        note: Option<String>,

        /// Start from an empty account instead of the seed portfolio.
        #[arg(long, default_value_t = false)]
        empty: bool,
    },
    /// Print the activity report for the seed portfolio.
    Report,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    match cli.command {
        Commands::Assets { json } => run_assets(&config, json),
        Commands::Simulate { ticks, asset } => run_simulate(&config, ticks, asset.as_deref()),
        Commands::Trade {
            asset,
            side,
            quantity,
            note,
            empty,
        } => run_trade(&config, &asset, &side, quantity, note, empty),
        Commands::Report => run_report(&config),
    }
}

fn demo_session(config: &SimConfig, empty: bool) -> Session {
    let user = User::new("demo", "demo@example.com");
    if empty {
        Session::start_empty(user, config)
    } else {
        Session::start(user, config)
    }
}

fn run_assets(config: &SimConfig, json: bool) -> Result<()> {
    let session = demo_session(config, true);
    let assets = session.feed.assets();

    if json {
        println!("{}", serde_json::to_string_pretty(assets)?);
        return Ok(());
    }

    println!(
        "{:<6} {:<24} {:<10} {:>12}",
        "Sym", "Name", "Class", "Price"
    );
    for asset in assets {
        println!(
            "{:<6} {:<24} {:<10} {:>12.2}",
            asset.symbol,
            asset.name,
            asset.asset_class.label(),
            asset.current_price
        );
    }
    Ok(())
}

fn run_simulate(config: &SimConfig, ticks: u32, symbol: Option<&str>) -> Result<()> {
    let mut session = demo_session(config, false);

    if let Some(sym) = symbol {
        if session.feed.asset_by_symbol(sym).is_none() {
            bail!("unknown symbol '{sym}'. Run `papertrade assets` for the catalog");
        }
    }

    let start: Vec<(String, f64)> = session
        .feed
        .assets()
        .iter()
        .map(|a| (a.symbol.clone(), a.current_price))
        .collect();

    for _ in 0..ticks {
        session.feed.tick();
    }

    println!(
        "{:<6} {:>12} {:>12} {:>10}",
        "Sym", "Start", "End", "Drift%"
    );
    for (sym, before) in start {
        if symbol.is_some_and(|s| s != sym) {
            continue;
        }
        let after = session
            .feed
            .asset_by_symbol(&sym)
            .map_or(before, |a| a.current_price);
        let drift = if before == 0.0 {
            0.0
        } else {
            (after - before) / before * 100.0
        };
        println!("{sym:<6} {before:>12.2} {after:>12.2} {drift:>+9.2}%");
    }
    println!("\n{ticks} ticks at class volatility; seed = {:?}", config.seed);
    print_portfolio(&session);
    Ok(())
}

fn run_trade(
    config: &SimConfig,
    symbol: &str,
    side: &str,
    quantity: f64,
    note: Option<String>,
    empty: bool,
) -> Result<()> {
    let side = match side.to_ascii_lowercase().as_str() {
        "buy" => OrderSide::Buy,
        "sell" => OrderSide::Sell,
        other => bail!("side must be 'buy' or 'sell', got '{other}'"),
    };

    let mut session = demo_session(config, empty);
    let Some(asset) = session.feed.asset_by_symbol(symbol) else {
        bail!("unknown symbol '{symbol}'. Run `papertrade assets` for the catalog");
    };
    let asset_id = asset.id;

    let mut ticket = OrderTicket::new(asset_id, side, quantity);
    if let Some(note) = note {
        ticket = ticket.with_note(note);
    }

    match session.ledger.place_order(&ticket, &session.feed, Utc::now()) {
        Ok(entry) => {
            println!(
                "Executed: {} {} {} @ ${:.2} = ${:.2}",
                entry.side, entry.quantity, entry.symbol, entry.execution_price, entry.total_value
            );
        }
        Err(e) => {
            eprintln!("Order rejected: {e}");
            std::process::exit(1);
        }
    }

    print_portfolio(&session);
    Ok(())
}

fn run_report(config: &SimConfig) -> Result<()> {
    let session = demo_session(config, false);
    let report = ReportSummary::from_ledger(&session.ledger, &session.feed, Utc::now());

    println!(
        "Trades: {} ({} buys, {} sells)",
        report.total_trades, report.total_buys, report.total_sells
    );
    println!(
        "Unrealized P&L: ${:+.2} ({:+.2}%)",
        report.unrealized_pnl, report.unrealized_pnl_percent
    );
    if let Some(most) = &report.most_traded {
        println!("Most traded: {} ({}) — {} trades", most.symbol, most.name, most.trades);
    }
    println!("\nAllocation:");
    for slice in &report.class_distribution {
        println!("  {:<16} {:>6.1}%", slice.asset_class.label(), slice.percent);
    }

    print_portfolio(&session);
    Ok(())
}

fn print_portfolio(session: &Session) {
    let snapshot = valuate(&session.ledger, &session.feed);

    println!("\nPortfolio:");
    if snapshot.positions.is_empty() {
        println!("  (no open positions)");
    } else {
        println!(
            "  {:<6} {:>12} {:>12} {:>12} {:>14}",
            "Sym", "Qty", "Avg", "Price", "P&L"
        );
        for row in &snapshot.positions {
            println!(
                "  {:<6} {:>12.4} {:>12.2} {:>12.2} {:>+13.2}",
                row.symbol, row.quantity, row.average_buy_price, row.current_price, row.unrealized_pnl
            );
        }
    }
    println!(
        "  Cash ${:.2} | Holdings ${:.2} | Equity ${:.2}",
        snapshot.cash_balance, snapshot.total_portfolio_value, snapshot.equity
    );
}
