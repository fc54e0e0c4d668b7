use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{AssetId, EntryId};
use super::order::OrderSide;

/// Immutable record of one executed trade.
///
/// Created exactly once per accepted order, appended to the ledger's log,
/// and never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: EntryId,
    pub asset_id: AssetId,
    pub symbol: String,
    pub side: OrderSide,
    pub quantity: f64,
    /// The feed price captured at execution time.
    pub execution_price: f64,
    /// `quantity * execution_price`, fixed at execution.
    pub total_value: f64,
    pub executed_at: DateTime<Utc>,
    pub note: Option<String>,
}
