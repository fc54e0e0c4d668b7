//! PaperTrade Core — the engine behind the paper-trading simulator.
//!
//! This crate contains everything except presentation:
//! - Domain types (assets, positions, order tickets, ledger entries, news)
//! - The position ledger: validate-then-commit order execution
//! - A seeded random-walk price feed behind the `PriceSource` trait
//! - On-demand valuation and activity reports
//! - The demo auth stub and session assembly
//! - Fixtures and TOML configuration

pub mod config;
pub mod domain;
pub mod feed;
pub mod fixtures;
pub mod ledger;
pub mod reports;
pub mod session;
pub mod valuation;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: session state can cross a thread boundary.
    ///
    /// The TUI runs everything on one thread today, but nothing in the
    /// core should prevent moving the session behind a channel later.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Asset>();
        require_sync::<domain::Asset>();
        require_send::<domain::Position>();
        require_sync::<domain::Position>();
        require_send::<domain::OrderTicket>();
        require_sync::<domain::OrderTicket>();
        require_send::<domain::LedgerEntry>();
        require_sync::<domain::LedgerEntry>();
        require_send::<domain::NewsArticle>();
        require_sync::<domain::NewsArticle>();

        require_send::<ledger::PositionLedger>();
        require_sync::<ledger::PositionLedger>();
        require_send::<ledger::OrderError>();
        require_sync::<ledger::OrderError>();

        require_send::<feed::SimulatedFeed>();
        require_sync::<feed::SimulatedFeed>();

        require_send::<valuation::ValuationSnapshot>();
        require_sync::<valuation::ValuationSnapshot>();
        require_send::<reports::ReportSummary>();
        require_sync::<reports::ReportSummary>();

        require_send::<session::Session>();
        require_sync::<session::Session>();
        require_send::<config::SimConfig>();
        require_sync::<config::SimConfig>();
    }
}
