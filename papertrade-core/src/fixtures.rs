//! Canned demo data: the asset catalog, seed portfolio, and news feed.
//!
//! Everything a fresh session shows before the user trades comes from
//! here. The seed portfolio is not hardcoded position rows — it is
//! replayed through `place_order` at the historical fill prices, so the
//! fixtures obey the same invariants as live trading.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    Asset, AssetClass, AssetId, NewsArticle, NewsCategory, OrderSide, OrderTicket,
};
use crate::feed::{PriceSource, SimulatedFeed};
use crate::ledger::PositionLedger;

/// The ten-asset demo catalog: four equities, three digital currencies,
/// three commodities.
pub fn asset_catalog() -> Vec<Asset> {
    vec![
        Asset::new(AssetId(1), "AAPL", "Apple Inc.", AssetClass::Equity, 175.34),
        Asset::new(AssetId(2), "MSFT", "Microsoft Corporation", AssetClass::Equity, 325.67),
        Asset::new(AssetId(3), "GOOGL", "Alphabet Inc.", AssetClass::Equity, 2750.12),
        Asset::new(AssetId(4), "AMZN", "Amazon.com Inc.", AssetClass::Equity, 3450.89),
        Asset::new(AssetId(5), "BTC", "Bitcoin", AssetClass::DigitalCurrency, 45_678.9),
        Asset::new(AssetId(6), "ETH", "Ethereum", AssetClass::DigitalCurrency, 3456.78),
        Asset::new(AssetId(7), "XRP", "Ripple", AssetClass::DigitalCurrency, 1.23),
        Asset::new(AssetId(8), "GOLD", "Gold", AssetClass::Commodity, 1845.67),
        Asset::new(AssetId(9), "SLVR", "Silver", AssetClass::Commodity, 24.56),
        Asset::new(AssetId(10), "OIL", "Crude Oil", AssetClass::Commodity, 78.9),
    ]
}

struct SeedFill {
    asset_id: AssetId,
    quantity: f64,
    price: f64,
    executed_at: DateTime<Utc>,
    note: &'static str,
}

fn seed_fills() -> Vec<SeedFill> {
    vec![
        SeedFill {
            asset_id: AssetId(1),
            quantity: 5.0,
            price: 168.75,
            executed_at: at(2023, 3, 15, 10, 30),
            note: "Initial investment in Apple",
        },
        SeedFill {
            asset_id: AssetId(5),
            quantity: 0.5,
            price: 44_000.0,
            executed_at: at(2023, 3, 18, 9, 15),
            note: "Diversifying with crypto",
        },
        SeedFill {
            asset_id: AssetId(1),
            quantity: 5.0,
            price: 171.75,
            executed_at: at(2023, 3, 20, 14, 45),
            note: "Buying the dip",
        },
        SeedFill {
            asset_id: AssetId(8),
            quantity: 2.0,
            price: 1830.5,
            executed_at: at(2023, 3, 22, 11, 20),
            note: "Hedge against inflation",
        },
    ]
}

/// Build the demo account: the seed fills replayed at their historical
/// prices, with `available_balance` cash left over afterwards.
///
/// The account's initial balance is grossed up by the seed cost so the
/// replay cannot be rejected for insufficient funds.
pub fn seeded_ledger(feed: &mut SimulatedFeed, available_balance: f64) -> PositionLedger {
    let fills = seed_fills();
    let seed_cost: f64 = fills.iter().map(|f| f.quantity * f.price).sum();
    let mut ledger = PositionLedger::new(available_balance + seed_cost);

    for fill in fills {
        let live_price = feed.current_price(fill.asset_id);
        feed.set_price(fill.asset_id, fill.price);
        let ticket =
            OrderTicket::new(fill.asset_id, OrderSide::Buy, fill.quantity).with_note(fill.note);
        ledger
            .place_order(&ticket, feed, fill.executed_at)
            .expect("seed fills fit within the grossed-up balance");
        if let Some(price) = live_price {
            feed.set_price(fill.asset_id, price);
        }
    }
    ledger
}

/// The canned news feed.
pub fn seed_news() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: 1,
            title: "Apple Announces New iPhone Model".into(),
            summary: "Apple Inc. has unveiled its latest iPhone model with revolutionary features."
                .into(),
            body: "Apple Inc. has unveiled its latest iPhone model with revolutionary features \
                   including enhanced AI capabilities, improved camera system, and longer battery \
                   life. The new model is expected to hit the market next month."
                .into(),
            source: "Tech News".into(),
            url: "https://example.com/news/1".into(),
            published_at: at(2023, 3, 25, 8, 0),
            category: NewsCategory::Company,
            related_symbols: vec!["AAPL".into()],
        },
        NewsArticle {
            id: 2,
            title: "Bitcoin Surges Past $45,000".into(),
            summary: "Bitcoin has surged past $45,000 amid growing institutional adoption.".into(),
            body: "Bitcoin has surged past $45,000 amid growing institutional adoption and \
                   increasing interest from major financial institutions. Analysts predict \
                   further growth in the coming months as more companies add Bitcoin to their \
                   balance sheets."
                .into(),
            source: "Crypto Daily".into(),
            url: "https://example.com/news/2".into(),
            published_at: at(2023, 3, 24, 14, 30),
            category: NewsCategory::Market,
            related_symbols: vec!["BTC".into()],
        },
        NewsArticle {
            id: 3,
            title: "Federal Reserve Announces Interest Rate Decision".into(),
            summary: "The Federal Reserve has announced its latest interest rate decision.".into(),
            body: "The Federal Reserve has announced its latest interest rate decision, keeping \
                   rates unchanged but signaling potential increases later this year. The \
                   decision comes amid concerns about inflation and economic recovery."
                .into(),
            source: "Financial Times".into(),
            url: "https://example.com/news/3".into(),
            published_at: at(2023, 3, 23, 16, 45),
            category: NewsCategory::Economic,
            related_symbols: vec![],
        },
        NewsArticle {
            id: 4,
            title: "Gold Prices Stabilize Amid Market Uncertainty".into(),
            summary: "Gold prices have stabilized amid ongoing market uncertainty.".into(),
            body: "Gold prices have stabilized amid ongoing market uncertainty and geopolitical \
                   tensions. The precious metal continues to be a safe haven for investors \
                   looking to hedge against inflation and market volatility."
                .into(),
            source: "Commodity Insights".into(),
            url: "https://example.com/news/4".into(),
            published_at: at(2023, 3, 22, 10, 15),
            category: NewsCategory::Market,
            related_symbols: vec!["GOLD".into()],
        },
        NewsArticle {
            id: 5,
            title: "Tech Sector Leads Market Rally".into(),
            summary: "The technology sector is leading a broad market rally.".into(),
            body: "The technology sector is leading a broad market rally as investors bet on \
                   continued growth in digital services and products. Major tech companies have \
                   reported strong earnings, boosting investor confidence."
                .into(),
            source: "Market Watch".into(),
            url: "https://example.com/news/5".into(),
            published_at: at(2023, 3, 21, 9, 30),
            category: NewsCategory::Industry,
            related_symbols: vec!["AAPL".into(), "MSFT".into(), "GOOGL".into(), "AMZN".into()],
        },
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("fixture timestamps are valid")
}
