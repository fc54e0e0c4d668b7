use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AssetId;

/// Buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn label(self) -> &'static str {
        match self {
            OrderSide::Buy => "Buy",
            OrderSide::Sell => "Sell",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user's request to trade. Ephemeral: the only durable trace of an
/// accepted ticket is the `LedgerEntry` the ledger appends.
///
/// There is no price field — orders always execute at the feed's current
/// price, captured once by the ledger at execution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTicket {
    pub asset_id: AssetId,
    pub side: OrderSide,
    pub quantity: f64,
    pub note: Option<String>,
}

impl OrderTicket {
    pub fn new(asset_id: AssetId, side: OrderSide, quantity: f64) -> Self {
        Self {
            asset_id,
            side,
            quantity,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_builder() {
        let ticket = OrderTicket::new(AssetId(1), OrderSide::Buy, 10.0).with_note("first buy");
        assert_eq!(ticket.side, OrderSide::Buy);
        assert_eq!(ticket.note.as_deref(), Some("first buy"));
    }

    #[test]
    fn side_labels() {
        assert_eq!(OrderSide::Buy.to_string(), "Buy");
        assert_eq!(OrderSide::Sell.to_string(), "Sell");
    }
}
