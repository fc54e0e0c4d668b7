//! Simulated market data.
//!
//! `PriceSource` is the read-only seam the ledger sees: the latest price
//! per asset, nothing else. `SimulatedFeed` implements it over the fixture
//! catalog with a seeded random walk, ticked by whoever owns the session's
//! refresh cadence (the TUI timer or the CLI loop). The ledger never
//! drives a tick.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{Asset, AssetId};

/// Read access to the latest price snapshot.
pub trait PriceSource {
    /// Latest price for an asset, or `None` when the asset is not in the
    /// catalog.
    fn current_price(&self, asset_id: AssetId) -> Option<f64>;

    /// Full asset record (symbol, class, session change) for display and
    /// ledger entry stamping.
    fn asset(&self, asset_id: AssetId) -> Option<&Asset>;
}

/// One point of a synthetic chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// In-memory price feed driven by a bounded per-class random walk.
#[derive(Debug, Clone)]
pub struct SimulatedFeed {
    assets: Vec<Asset>,
    by_id: HashMap<AssetId, usize>,
    rng: StdRng,
}

impl SimulatedFeed {
    /// Build a feed over a catalog. A fixed `seed` makes every tick and
    /// every synthetic history reproducible.
    pub fn new(catalog: Vec<Asset>, seed: Option<u64>) -> Self {
        let by_id = catalog
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id, i))
            .collect();
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            assets: catalog,
            by_id,
            rng,
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn asset_by_symbol(&self, symbol: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }

    /// Advance every asset one step of its random walk.
    ///
    /// Each new price is jittered by up to half the class volatility in
    /// either direction, rounded to cents, and clamped at zero. Session
    /// change figures accumulate so the display shows drift since login.
    /// Returns the updated `(id, price)` pairs.
    pub fn tick(&mut self) -> Vec<(AssetId, f64)> {
        let mut updates = Vec::with_capacity(self.assets.len());
        for asset in &mut self.assets {
            let volatility = asset.asset_class.tick_volatility();
            let jitter: f64 = self.rng.gen_range(-0.5..0.5);
            let change = asset.current_price * jitter * volatility;
            let previous = asset.current_price;
            let new_price = round_cents((previous + change).max(0.0));

            asset.price_change = round_cents(asset.price_change + (new_price - previous));
            let reference = new_price - asset.price_change;
            asset.price_change_percent = if reference == 0.0 {
                0.0
            } else {
                round_cents(asset.price_change / reference * 100.0)
            };
            asset.current_price = new_price;
            updates.push((asset.id, new_price));
        }
        updates
    }

    /// Synthesize a daily price series ending at the current price.
    ///
    /// A random walk from 90% of the current price with a mild upward
    /// trend; the final point is pinned to the live price so the chart
    /// never disagrees with the ticker.
    pub fn price_history(&mut self, asset_id: AssetId, days: u32) -> Option<Vec<PricePoint>> {
        let idx = *self.by_id.get(&asset_id)?;
        let (base, volatility, current) = {
            let asset = &self.assets[idx];
            (
                asset.current_price * 0.9,
                asset.asset_class.history_volatility(),
                asset.current_price,
            )
        };

        let now = Utc::now();
        let mut series = Vec::with_capacity(days as usize + 1);
        for i in (0..=days).rev() {
            let timestamp = now - Duration::days(i64::from(i));
            let price = if i == 0 {
                current
            } else {
                let jitter: f64 = self.rng.gen_range(-0.5..0.5);
                let random_factor = 1.0 + jitter * volatility;
                let trend_factor = 1.0 + f64::from(days - i) / f64::from(days) * 0.1;
                round_cents(base * random_factor * trend_factor)
            };
            series.push(PricePoint { timestamp, price });
        }
        Some(series)
    }

    /// Pin an asset to an exact price. Fixture/test hook — used to replay
    /// historical fills and to make scenarios deterministic.
    pub fn set_price(&mut self, asset_id: AssetId, price: f64) {
        if let Some(&idx) = self.by_id.get(&asset_id) {
            self.assets[idx].current_price = price;
        }
    }
}

impl PriceSource for SimulatedFeed {
    fn current_price(&self, asset_id: AssetId) -> Option<f64> {
        self.by_id
            .get(&asset_id)
            .map(|&idx| self.assets[idx].current_price)
    }

    fn asset(&self, asset_id: AssetId) -> Option<&Asset> {
        self.by_id.get(&asset_id).map(|&idx| &self.assets[idx])
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetClass;

    fn test_catalog() -> Vec<Asset> {
        vec![
            Asset::new(AssetId(1), "AAPL", "Apple Inc.", AssetClass::Equity, 175.34),
            Asset::new(AssetId(5), "BTC", "Bitcoin", AssetClass::DigitalCurrency, 45_678.9),
        ]
    }

    #[test]
    fn seeded_feeds_are_reproducible() {
        let mut a = SimulatedFeed::new(test_catalog(), Some(42));
        let mut b = SimulatedFeed::new(test_catalog(), Some(42));
        for _ in 0..10 {
            assert_eq!(a.tick(), b.tick());
        }
    }

    #[test]
    fn tick_keeps_prices_non_negative_and_finite() {
        let mut feed = SimulatedFeed::new(test_catalog(), Some(7));
        for _ in 0..1000 {
            for (_, price) in feed.tick() {
                assert!(price.is_finite());
                assert!(price >= 0.0);
            }
        }
    }

    #[test]
    fn tick_moves_within_class_volatility() {
        let mut feed = SimulatedFeed::new(test_catalog(), Some(3));
        let before: Vec<f64> = feed.assets().iter().map(|a| a.current_price).collect();
        let updates = feed.tick();
        for ((_, after), (asset, before)) in
            updates.iter().zip(test_catalog().iter().zip(before))
        {
            // Max move is half the class volatility, plus a cent of rounding.
            let bound = before * asset.asset_class.tick_volatility() * 0.5 + 0.01;
            assert!((after - before).abs() <= bound);
        }
    }

    #[test]
    fn unknown_asset_has_no_price() {
        let feed = SimulatedFeed::new(test_catalog(), Some(1));
        assert!(feed.current_price(AssetId(99)).is_none());
        assert!(feed.asset(AssetId(99)).is_none());
    }

    #[test]
    fn history_ends_at_current_price() {
        let mut feed = SimulatedFeed::new(test_catalog(), Some(11));
        let series = feed.price_history(AssetId(1), 30).unwrap();
        assert_eq!(series.len(), 31);
        assert_eq!(series.last().unwrap().price, 175.34);
        assert!(series.iter().all(|p| p.price.is_finite() && p.price >= 0.0));
    }

    #[test]
    fn history_for_unknown_asset_is_none() {
        let mut feed = SimulatedFeed::new(test_catalog(), Some(11));
        assert!(feed.price_history(AssetId(99), 30).is_none());
    }

    #[test]
    fn set_price_overrides() {
        let mut feed = SimulatedFeed::new(test_catalog(), Some(1));
        feed.set_price(AssetId(1), 168.75);
        assert_eq!(feed.current_price(AssetId(1)), Some(168.75));
    }
}
