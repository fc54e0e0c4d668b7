//! Domain types for the paper-trading simulator.

pub mod asset;
pub mod entry;
pub mod ids;
pub mod news;
pub mod order;
pub mod position;
pub mod user;

pub use asset::{Asset, AssetClass};
pub use entry::LedgerEntry;
pub use ids::{AssetId, EntryId};
pub use news::{NewsArticle, NewsCategory};
pub use order::{OrderSide, OrderTicket};
pub use position::Position;
pub use user::{User, STARTING_BALANCE};
