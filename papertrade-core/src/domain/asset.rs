use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AssetId;

/// Broad asset category. Drives simulated volatility and report grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Equity,
    DigitalCurrency,
    Commodity,
}

impl AssetClass {
    pub fn label(self) -> &'static str {
        match self {
            AssetClass::Equity => "Equity",
            AssetClass::DigitalCurrency => "Digital Currency",
            AssetClass::Commodity => "Commodity",
        }
    }

    /// Per-tick volatility of the simulated walk.
    pub fn tick_volatility(self) -> f64 {
        match self {
            AssetClass::DigitalCurrency => 0.02,
            AssetClass::Equity => 0.01,
            AssetClass::Commodity => 0.005,
        }
    }

    /// Volatility used when synthesizing a daily chart history.
    pub fn history_volatility(self) -> f64 {
        match self {
            AssetClass::DigitalCurrency => 0.05,
            AssetClass::Equity => 0.02,
            AssetClass::Commodity => 0.01,
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tradable asset in the simulated catalog.
///
/// `current_price` is owned by the price feed; the ledger only reads it.
/// `price_change` and `price_change_percent` are cosmetic session-relative
/// figures maintained by the feed for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub symbol: String,
    pub name: String,
    pub asset_class: AssetClass,
    pub current_price: f64,
    pub price_change: f64,
    pub price_change_percent: f64,
}

impl Asset {
    pub fn new(
        id: AssetId,
        symbol: impl Into<String>,
        name: impl Into<String>,
        asset_class: AssetClass,
        current_price: f64,
    ) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            name: name.into(),
            asset_class,
            current_price,
            price_change: 0.0,
            price_change_percent: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_volatility_ordering() {
        // Digital currencies swing harder than equities, equities harder
        // than commodities, for both tick and history walks.
        assert!(AssetClass::DigitalCurrency.tick_volatility() > AssetClass::Equity.tick_volatility());
        assert!(AssetClass::Equity.tick_volatility() > AssetClass::Commodity.tick_volatility());
        assert!(
            AssetClass::DigitalCurrency.history_volatility()
                > AssetClass::Commodity.history_volatility()
        );
    }

    #[test]
    fn new_asset_starts_with_zero_change() {
        let asset = Asset::new(AssetId(1), "AAPL", "Apple Inc.", AssetClass::Equity, 175.34);
        assert_eq!(asset.price_change, 0.0);
        assert_eq!(asset.price_change_percent, 0.0);
        assert_eq!(asset.current_price, 175.34);
    }
}
