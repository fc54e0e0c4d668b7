//! Trading activity reports.
//!
//! Every figure is derived on demand from the ledger's entry log and the
//! current price snapshot — the report owns no state of its own. There is
//! no realized-P&L accumulator: sells leave the cost basis untouched, so
//! the profit figures here are the unrealized P&L of what is still held.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{AssetClass, AssetId, OrderSide};
use crate::feed::PriceSource;
use crate::ledger::PositionLedger;
use crate::valuation::valuate;

/// The asset with the most ledger entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostTraded {
    pub symbol: String,
    pub name: String,
    pub trades: usize,
}

/// Share of current portfolio market value held in one asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSlice {
    pub asset_class: AssetClass,
    pub percent: f64,
}

/// Portfolio value after each executed trade, holdings marked at the
/// last-known execution price per asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub at: DateTime<Utc>,
    pub portfolio_value: f64,
}

/// Summary of the session's trading activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_trades: usize,
    pub total_buys: usize,
    pub total_sells: usize,
    pub unrealized_pnl: f64,
    pub unrealized_pnl_percent: f64,
    pub most_traded: Option<MostTraded>,
    /// Classes currently held, largest share first.
    pub class_distribution: Vec<ClassSlice>,
    pub performance_history: Vec<PerformancePoint>,
}

impl ReportSummary {
    pub fn from_ledger(
        ledger: &PositionLedger,
        feed: &dyn PriceSource,
        now: DateTime<Utc>,
    ) -> Self {
        let entries = ledger.entries();
        let total_buys = entries.iter().filter(|e| e.side == OrderSide::Buy).count();
        let total_sells = entries.len() - total_buys;

        // Most traded: entry count per asset, ties broken by symbol so the
        // result is stable.
        let mut counts: HashMap<AssetId, usize> = HashMap::new();
        for entry in entries {
            *counts.entry(entry.asset_id).or_default() += 1;
        }
        let most_traded = counts
            .iter()
            .filter_map(|(&asset_id, &trades)| {
                let asset = feed.asset(asset_id)?;
                Some((asset.symbol.clone(), asset.name.clone(), trades))
            })
            .max_by(|a, b| a.2.cmp(&b.2).then_with(|| b.0.cmp(&a.0)))
            .map(|(symbol, name, trades)| MostTraded {
                symbol,
                name,
                trades,
            });

        let snapshot = valuate(ledger, feed);

        let mut by_class: HashMap<AssetClass, f64> = HashMap::new();
        for row in &snapshot.positions {
            *by_class.entry(row.asset_class).or_default() += row.market_value;
        }
        let mut class_distribution: Vec<ClassSlice> = by_class
            .into_iter()
            .map(|(asset_class, value)| ClassSlice {
                asset_class,
                percent: if snapshot.total_portfolio_value == 0.0 {
                    0.0
                } else {
                    value / snapshot.total_portfolio_value * 100.0
                },
            })
            .collect();
        class_distribution.sort_by(|a, b| {
            b.percent
                .partial_cmp(&a.percent)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.asset_class.label().cmp(b.asset_class.label()))
        });

        let performance_history = replay_performance(ledger, now, snapshot.total_portfolio_value);

        Self {
            total_trades: entries.len(),
            total_buys,
            total_sells,
            unrealized_pnl: snapshot.total_unrealized_pnl,
            unrealized_pnl_percent: snapshot.total_unrealized_pnl_percent,
            most_traded,
            class_distribution,
            performance_history,
        }
    }
}

/// Walk the entry log, tracking quantity and last execution price per
/// asset, and record the marked portfolio value after each trade. A final
/// point carries the live mark-to-market value.
fn replay_performance(
    ledger: &PositionLedger,
    now: DateTime<Utc>,
    current_value: f64,
) -> Vec<PerformancePoint> {
    let mut quantities: HashMap<AssetId, f64> = HashMap::new();
    let mut last_price: HashMap<AssetId, f64> = HashMap::new();
    let mut history = Vec::with_capacity(ledger.entries().len() + 1);

    for entry in ledger.entries() {
        let quantity = quantities.entry(entry.asset_id).or_default();
        match entry.side {
            OrderSide::Buy => *quantity += entry.quantity,
            OrderSide::Sell => *quantity -= entry.quantity,
        }
        last_price.insert(entry.asset_id, entry.execution_price);

        let value: f64 = quantities
            .iter()
            .map(|(id, &qty)| qty * last_price.get(id).copied().unwrap_or(0.0))
            .sum();
        history.push(PerformancePoint {
            at: entry.executed_at,
            portfolio_value: value,
        });
    }

    if !ledger.entries().is_empty() {
        history.push(PerformancePoint {
            at: now,
            portfolio_value: current_value,
        });
    }
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::feed::SimulatedFeed;

    fn demo() -> (PositionLedger, SimulatedFeed) {
        let mut feed = SimulatedFeed::new(fixtures::asset_catalog(), Some(0));
        let ledger = fixtures::seeded_ledger(&mut feed, 10_000.0);
        (ledger, feed)
    }

    #[test]
    fn counts_and_most_traded() {
        let (ledger, feed) = demo();
        let report = ReportSummary::from_ledger(&ledger, &feed, Utc::now());
        assert_eq!(report.total_trades, 4);
        assert_eq!(report.total_buys, 4);
        assert_eq!(report.total_sells, 0);

        let most = report.most_traded.unwrap();
        assert_eq!(most.symbol, "AAPL");
        assert_eq!(most.trades, 2);
    }

    #[test]
    fn distribution_sums_to_hundred() {
        let (ledger, feed) = demo();
        let report = ReportSummary::from_ledger(&ledger, &feed, Utc::now());
        assert_eq!(report.class_distribution.len(), 3);
        let total: f64 = report.class_distribution.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        // BTC dominates the seed portfolio by value.
        assert_eq!(
            report.class_distribution[0].asset_class,
            AssetClass::DigitalCurrency
        );
    }

    #[test]
    fn performance_history_replays_fills() {
        let (ledger, feed) = demo();
        let report = ReportSummary::from_ledger(&ledger, &feed, Utc::now());
        // Four fills plus the live mark.
        assert_eq!(report.performance_history.len(), 5);
        // First point: 5 AAPL at 168.75.
        assert!((report.performance_history[0].portfolio_value - 843.75).abs() < 1e-9);
        // Second point adds 0.5 BTC at 44,000.
        assert!((report.performance_history[1].portfolio_value - 22_843.75).abs() < 1e-9);
        // Values are non-decreasing in time for this all-buy seed.
        for pair in report.performance_history.windows(2) {
            assert!(pair[0].at <= pair[1].at);
        }
    }

    #[test]
    fn empty_ledger_yields_empty_report() {
        let feed = SimulatedFeed::new(fixtures::asset_catalog(), Some(0));
        let ledger = PositionLedger::new(10_000.0);
        let report = ReportSummary::from_ledger(&ledger, &feed, Utc::now());
        assert_eq!(report.total_trades, 0);
        assert!(report.most_traded.is_none());
        assert!(report.class_distribution.is_empty());
        assert!(report.performance_history.is_empty());
        assert_eq!(report.unrealized_pnl, 0.0);
    }
}
