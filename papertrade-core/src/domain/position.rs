use serde::{Deserialize, Serialize};

/// An open holding of one asset: quantity plus weighted-average cost basis.
///
/// Market value and P&L are functions of `(quantity, average_buy_price,
/// current_price)` and are always computed on demand — storing them invites
/// staleness when the price ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Strictly positive while the position exists; the ledger removes the
    /// entry on full liquidation.
    pub quantity: f64,
    /// Quantity-weighted mean purchase price across all buy fills.
    /// Unchanged by sells.
    pub average_buy_price: f64,
}

impl Position {
    pub fn new(quantity: f64, average_buy_price: f64) -> Self {
        Self {
            quantity,
            average_buy_price,
        }
    }

    /// Total amount paid for the current holding.
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.average_buy_price
    }

    pub fn market_value(&self, current_price: f64) -> f64 {
        self.quantity * current_price
    }

    pub fn unrealized_pnl(&self, current_price: f64) -> f64 {
        self.quantity * (current_price - self.average_buy_price)
    }

    /// Unrealized P&L as a percentage of cost basis. Zero when the cost
    /// basis is zero (degenerate, but must not divide by zero).
    pub fn unrealized_pnl_percent(&self, current_price: f64) -> f64 {
        let basis = self.cost_basis();
        if basis == 0.0 {
            0.0
        } else {
            self.unrealized_pnl(current_price) / basis * 100.0
        }
    }
}
