//! On-demand portfolio valuation.
//!
//! A pure read over the ledger and the price feed: nothing here is stored,
//! so the numbers can never go stale between price ticks. Valuation is
//! total — an empty portfolio yields zero totals and an asset missing from
//! the feed is marked at cost rather than failing the whole snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::{AssetClass, AssetId};
use crate::feed::PriceSource;
use crate::ledger::PositionLedger;

/// Valuation of a single open position at the current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionValuation {
    pub asset_id: AssetId,
    pub symbol: String,
    pub name: String,
    pub asset_class: AssetClass,
    pub quantity: f64,
    pub average_buy_price: f64,
    pub current_price: f64,
    pub market_value: f64,
    pub unrealized_pnl: f64,
    pub unrealized_pnl_percent: f64,
}

/// Portfolio-wide valuation at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationSnapshot {
    /// Per-position rows, sorted by symbol for stable display.
    pub positions: Vec<PositionValuation>,
    pub total_portfolio_value: f64,
    pub total_cost_basis: f64,
    pub total_unrealized_pnl: f64,
    /// Total P&L over total cost basis; zero for an empty portfolio.
    pub total_unrealized_pnl_percent: f64,
    pub cash_balance: f64,
    /// Cash plus portfolio market value.
    pub equity: f64,
}

/// Value every open position at the feed's current prices.
pub fn valuate(ledger: &PositionLedger, feed: &dyn PriceSource) -> ValuationSnapshot {
    let mut positions: Vec<PositionValuation> = ledger
        .positions()
        .iter()
        .map(|(&asset_id, position)| {
            let (symbol, name, asset_class, current_price) = match feed.asset(asset_id) {
                Some(asset) => (
                    asset.symbol.clone(),
                    asset.name.clone(),
                    asset.asset_class,
                    asset.current_price,
                ),
                // Not in the catalog any more: mark at cost so the
                // snapshot stays total.
                None => (
                    asset_id.to_string(),
                    asset_id.to_string(),
                    AssetClass::Equity,
                    position.average_buy_price,
                ),
            };
            PositionValuation {
                asset_id,
                symbol,
                name,
                asset_class,
                quantity: position.quantity,
                average_buy_price: position.average_buy_price,
                current_price,
                market_value: position.market_value(current_price),
                unrealized_pnl: position.unrealized_pnl(current_price),
                unrealized_pnl_percent: position.unrealized_pnl_percent(current_price),
            }
        })
        .collect();
    positions.sort_by(|a, b| a.symbol.cmp(&b.symbol));

    let total_portfolio_value: f64 = positions.iter().map(|p| p.market_value).sum();
    let total_unrealized_pnl: f64 = positions.iter().map(|p| p.unrealized_pnl).sum();
    let total_cost_basis: f64 = positions
        .iter()
        .map(|p| p.quantity * p.average_buy_price)
        .sum();
    let total_unrealized_pnl_percent = if total_cost_basis == 0.0 {
        0.0
    } else {
        total_unrealized_pnl / total_cost_basis * 100.0
    };

    ValuationSnapshot {
        positions,
        total_portfolio_value,
        total_cost_basis,
        total_unrealized_pnl,
        total_unrealized_pnl_percent,
        cash_balance: ledger.cash_balance(),
        equity: ledger.cash_balance() + total_portfolio_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Asset, AssetId, OrderSide, OrderTicket};
    use crate::feed::SimulatedFeed;
    use chrono::Utc;

    fn catalog() -> Vec<Asset> {
        vec![
            Asset::new(AssetId(1), "AAPL", "Apple Inc.", AssetClass::Equity, 175.34),
            Asset::new(AssetId(5), "BTC", "Bitcoin", AssetClass::DigitalCurrency, 45_678.9),
        ]
    }

    #[test]
    fn empty_portfolio_yields_zero_totals() {
        let feed = SimulatedFeed::new(catalog(), Some(0));
        let ledger = PositionLedger::new(10_000.0);
        let snap = valuate(&ledger, &feed);
        assert!(snap.positions.is_empty());
        assert_eq!(snap.total_portfolio_value, 0.0);
        assert_eq!(snap.total_unrealized_pnl, 0.0);
        assert_eq!(snap.total_unrealized_pnl_percent, 0.0);
        assert_eq!(snap.equity, 10_000.0);
    }

    #[test]
    fn snapshot_matches_hand_computation() {
        let mut feed = SimulatedFeed::new(catalog(), Some(0));
        let mut ledger = PositionLedger::new(10_000.0);

        feed.set_price(AssetId(1), 170.25);
        ledger
            .place_order(
                &OrderTicket::new(AssetId(1), OrderSide::Buy, 10.0),
                &feed,
                Utc::now(),
            )
            .unwrap();
        feed.set_price(AssetId(1), 175.34);

        let snap = valuate(&ledger, &feed);
        assert_eq!(snap.positions.len(), 1);
        let row = &snap.positions[0];
        assert_eq!(row.symbol, "AAPL");
        assert!((row.market_value - 1753.4).abs() < 1e-9);
        assert!((row.unrealized_pnl - 50.9).abs() < 1e-9);
        assert!((snap.total_portfolio_value - 1753.4).abs() < 1e-9);
        assert!((snap.equity - (10_000.0 - 1702.5 + 1753.4)).abs() < 1e-9);
    }

    #[test]
    fn rows_sorted_by_symbol() {
        let mut feed = SimulatedFeed::new(catalog(), Some(0));
        let mut ledger = PositionLedger::new(100_000.0);
        for id in [AssetId(5), AssetId(1)] {
            ledger
                .place_order(&OrderTicket::new(id, OrderSide::Buy, 0.5), &feed, Utc::now())
                .unwrap();
        }
        feed.tick();
        let snap = valuate(&ledger, &feed);
        let symbols: Vec<&str> = snap.positions.iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "BTC"]);
    }
}
