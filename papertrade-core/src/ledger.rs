//! The position ledger — the one stateful aggregate of the simulator.
//!
//! Cash, open positions, and the append-only trade log live together here
//! and can only change through [`PositionLedger::place_order`]. Every order
//! is either fully applied or fully rejected: all validation runs against a
//! price captured once from the feed, before the first mutation, so a price
//! tick can never split the funds check from the debit and a failed order
//! leaves the aggregate untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::{AssetId, EntryId, LedgerEntry, OrderSide, OrderTicket, Position};
use crate::feed::PriceSource;

/// Remaining quantity at or below this is a full liquidation: the position
/// is removed rather than left as float dust.
pub const QTY_EPSILON: f64 = 1e-9;

/// Rejection reasons for [`PositionLedger::place_order`].
///
/// All are user-correctable input errors: none are retried, none poison the
/// session, and a rejected order has no side effects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("quantity must be a positive number")]
    InvalidQuantity,

    #[error("unknown asset: {0}")]
    UnknownAsset(AssetId),

    #[error("insufficient funds: order costs {required:.2}, balance is {available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("no open position for asset {0}")]
    NoPosition(AssetId),

    #[error("insufficient holdings: requested {requested}, holding {held}")]
    InsufficientHoldings { requested: f64, held: f64 },
}

/// Cash balance, position map, and trade log for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionLedger {
    cash_balance: f64,
    initial_balance: f64,
    positions: HashMap<AssetId, Position>,
    entries: Vec<LedgerEntry>,
    next_entry_id: u64,
}

impl PositionLedger {
    pub fn new(initial_balance: f64) -> Self {
        Self {
            cash_balance: initial_balance,
            initial_balance,
            positions: HashMap::new(),
            entries: Vec::new(),
            next_entry_id: 1,
        }
    }

    pub fn cash_balance(&self) -> f64 {
        self.cash_balance
    }

    pub fn initial_balance(&self) -> f64 {
        self.initial_balance
    }

    /// Open positions, keyed by asset. Quantities are strictly positive —
    /// fully liquidated assets are absent, never present with zero.
    pub fn positions(&self) -> &HashMap<AssetId, Position> {
        &self.positions
    }

    pub fn position(&self, asset_id: AssetId) -> Option<&Position> {
        self.positions.get(&asset_id)
    }

    /// The append-only trade log, oldest first.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Validate and execute an order at the feed's current price.
    ///
    /// Preconditions are checked in a fixed order, first failure wins:
    /// 1. requested quantity is positive and finite,
    /// 2. the asset exists in the feed's catalog,
    /// 3. a buy fits within the cash balance,
    /// 4. a sell has a position with enough quantity.
    ///
    /// On success the cash balance and position are updated and exactly one
    /// [`LedgerEntry`] is appended; a copy of it is returned.
    pub fn place_order(
        &mut self,
        ticket: &OrderTicket,
        feed: &dyn PriceSource,
        executed_at: DateTime<Utc>,
    ) -> Result<LedgerEntry, OrderError> {
        let quantity = ticket.quantity;
        if !(quantity.is_finite() && quantity > 0.0) {
            return Err(OrderError::InvalidQuantity);
        }

        // Capture the execution price once. Validation and mutation below
        // both use this value; the feed is never re-read.
        let asset = feed
            .asset(ticket.asset_id)
            .ok_or(OrderError::UnknownAsset(ticket.asset_id))?;
        let price = asset.current_price;
        let total_value = quantity * price;

        match ticket.side {
            OrderSide::Buy => {
                if total_value > self.cash_balance {
                    return Err(OrderError::InsufficientFunds {
                        required: total_value,
                        available: self.cash_balance,
                    });
                }
            }
            OrderSide::Sell => {
                let held = self
                    .positions
                    .get(&ticket.asset_id)
                    .map(|p| p.quantity)
                    .ok_or(OrderError::NoPosition(ticket.asset_id))?;
                if quantity > held {
                    return Err(OrderError::InsufficientHoldings {
                        requested: quantity,
                        held,
                    });
                }
            }
        }

        // All checks passed — commit. No fallible operation below this line.
        match ticket.side {
            OrderSide::Buy => {
                self.cash_balance -= total_value;
                match self.positions.get_mut(&ticket.asset_id) {
                    Some(position) => {
                        // Weighted cost-basis merge. Always folds the new
                        // fill into the held position; never re-derived from
                        // the full history, so repeated buys do not drift.
                        let new_quantity = position.quantity + quantity;
                        position.average_buy_price = (position.quantity
                            * position.average_buy_price
                            + total_value)
                            / new_quantity;
                        position.quantity = new_quantity;
                    }
                    None => {
                        self.positions
                            .insert(ticket.asset_id, Position::new(quantity, price));
                    }
                }
            }
            OrderSide::Sell => {
                self.cash_balance += total_value;
                let position = self
                    .positions
                    .get_mut(&ticket.asset_id)
                    .expect("validated above: sell requires a position");
                position.quantity -= quantity;
                // average_buy_price is deliberately unchanged: realized
                // gains are not accumulated, only the remaining position's
                // unrealized P&L is ever reported.
                if position.quantity <= QTY_EPSILON {
                    self.positions.remove(&ticket.asset_id);
                }
            }
        }

        let entry = LedgerEntry {
            id: EntryId(self.next_entry_id),
            asset_id: ticket.asset_id,
            symbol: asset.symbol.clone(),
            side: ticket.side,
            quantity,
            execution_price: price,
            total_value,
            executed_at,
            note: ticket.note.clone(),
        };
        self.next_entry_id += 1;
        self.entries.push(entry.clone());
        Ok(entry)
    }
}
