//! Property tests for ledger invariants.
//!
//! Uses proptest to verify:
//! 1. Cash conservation — equity identity holds across arbitrary trades
//! 2. Weighted average — merge order of same-asset buys does not matter
//! 3. No negative state — cash and holdings can never go below zero
//! 4. Rejection purity — failed orders leave the ledger untouched

use chrono::Utc;
use proptest::prelude::*;

use papertrade_core::domain::{Asset, AssetClass, AssetId, OrderSide, OrderTicket};
use papertrade_core::feed::SimulatedFeed;
use papertrade_core::ledger::PositionLedger;
use papertrade_core::valuation::valuate;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_quantity() -> impl Strategy<Value = f64> {
    (0.01..100.0_f64).prop_map(|q| (q * 100.0).round() / 100.0)
}

fn arb_price() -> impl Strategy<Value = f64> {
    (1.0..500.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn feed_with_price(price: f64) -> SimulatedFeed {
    let catalog = vec![Asset::new(
        AssetId(1),
        "TEST",
        "Test Asset",
        AssetClass::Equity,
        price,
    )];
    SimulatedFeed::new(catalog, Some(0))
}

fn buy(qty: f64) -> OrderTicket {
    OrderTicket::new(AssetId(1), OrderSide::Buy, qty)
}

fn sell(qty: f64) -> OrderTicket {
    OrderTicket::new(AssetId(1), OrderSide::Sell, qty)
}

// ── 1. Cash Conservation ─────────────────────────────────────────────

proptest! {
    /// A buy immediately followed by a sell of the same quantity at the
    /// same price restores cash exactly (within float tolerance) and
    /// leaves no residual position.
    #[test]
    fn round_trip_restores_cash(qty in arb_quantity(), price in arb_price()) {
        let feed = feed_with_price(price);
        let mut ledger = PositionLedger::new(1_000_000.0);
        let before = ledger.cash_balance();

        ledger.place_order(&buy(qty), &feed, Utc::now()).unwrap();
        ledger.place_order(&sell(qty), &feed, Utc::now()).unwrap();

        prop_assert!((ledger.cash_balance() - before).abs() < 1e-6);
        prop_assert!(ledger.position(AssetId(1)).is_none());
    }

    /// After any accepted buy, cash + position cost basis equals the
    /// starting balance.
    #[test]
    fn buy_conserves_value(qty in arb_quantity(), price in arb_price()) {
        let feed = feed_with_price(price);
        let initial = 1_000_000.0;
        let mut ledger = PositionLedger::new(initial);

        ledger.place_order(&buy(qty), &feed, Utc::now()).unwrap();

        let basis = ledger.position(AssetId(1)).unwrap().cost_basis();
        prop_assert!((ledger.cash_balance() + basis - initial).abs() < 1e-6);

        // Marked at the unchanged price, equity also matches.
        let snap = valuate(&ledger, &feed);
        prop_assert!((snap.equity - initial).abs() < 1e-6);
    }
}

// ── 2. Weighted Average ──────────────────────────────────────────────

proptest! {
    /// The running weighted average equals the true quantity-weighted
    /// mean of all fills, however the buys are sequenced.
    #[test]
    fn average_matches_weighted_mean(
        fills in prop::collection::vec((arb_quantity(), arb_price()), 1..12),
    ) {
        let mut feed = feed_with_price(1.0);
        let mut ledger = PositionLedger::new(f64::MAX / 1e3);

        for &(qty, price) in &fills {
            feed.set_price(AssetId(1), price);
            ledger.place_order(&buy(qty), &feed, Utc::now()).unwrap();
        }

        let total_qty: f64 = fills.iter().map(|&(q, _)| q).sum();
        let total_cost: f64 = fills.iter().map(|&(q, p)| q * p).sum();
        let expected = total_cost / total_qty;

        let pos = ledger.position(AssetId(1)).unwrap();
        prop_assert!((pos.quantity - total_qty).abs() < 1e-6);
        prop_assert!(
            (pos.average_buy_price - expected).abs() < 1e-6,
            "running avg {} != weighted mean {}",
            pos.average_buy_price,
            expected
        );
    }

    /// Merging the same set of fills in a different order lands on the
    /// same average (modulo float rounding).
    #[test]
    fn merge_order_is_irrelevant(
        fills in prop::collection::vec((arb_quantity(), arb_price()), 2..10),
    ) {
        let run = |fills: &[(f64, f64)]| {
            let mut feed = feed_with_price(1.0);
            let mut ledger = PositionLedger::new(f64::MAX / 1e3);
            for &(qty, price) in fills {
                feed.set_price(AssetId(1), price);
                ledger.place_order(&buy(qty), &feed, Utc::now()).unwrap();
            }
            ledger.position(AssetId(1)).unwrap().average_buy_price
        };

        let forward = run(&fills);
        let mut reversed = fills.clone();
        reversed.reverse();
        let backward = run(&reversed);

        prop_assert!((forward - backward).abs() < 1e-6);
    }
}

// ── 3. No Negative State ─────────────────────────────────────────────

proptest! {
    /// An order that costs more than the balance is rejected and cash
    /// never goes negative.
    #[test]
    fn cash_never_negative(
        balance in 10.0..10_000.0_f64,
        qty in arb_quantity(),
        price in arb_price(),
    ) {
        let feed = feed_with_price(price);
        let mut ledger = PositionLedger::new(balance);

        let _ = ledger.place_order(&buy(qty), &feed, Utc::now());
        prop_assert!(ledger.cash_balance() >= 0.0);
        prop_assert!(ledger.cash_balance().is_finite());
    }

    /// Selling more than held is rejected; holdings never go negative.
    #[test]
    fn holdings_never_negative(
        held in arb_quantity(),
        extra in 0.01..50.0_f64,
        price in arb_price(),
    ) {
        let feed = feed_with_price(price);
        let mut ledger = PositionLedger::new(f64::MAX / 1e3);
        ledger.place_order(&buy(held), &feed, Utc::now()).unwrap();

        let result = ledger.place_order(&sell(held + extra), &feed, Utc::now());
        prop_assert!(result.is_err());
        prop_assert_eq!(ledger.position(AssetId(1)).unwrap().quantity, held);
    }
}

// ── 4. Rejection Purity ──────────────────────────────────────────────

proptest! {
    /// A rejected order changes nothing: repeating it yields the same
    /// error and the same state.
    #[test]
    fn rejection_has_no_side_effects(
        balance in 1.0..100.0_f64,
        qty in 100.0..1_000.0_f64,
        price in 10.0..100.0_f64,
    ) {
        let feed = feed_with_price(price);
        let mut ledger = PositionLedger::new(balance);

        let first = ledger.place_order(&buy(qty), &feed, Utc::now()).unwrap_err();
        let cash_after_first = ledger.cash_balance();
        let entries_after_first = ledger.entries().len();

        let second = ledger.place_order(&buy(qty), &feed, Utc::now()).unwrap_err();

        prop_assert_eq!(first, second);
        prop_assert_eq!(cash_after_first, ledger.cash_balance());
        prop_assert_eq!(entries_after_first, ledger.entries().len());
        prop_assert!(ledger.positions().is_empty());
    }
}
