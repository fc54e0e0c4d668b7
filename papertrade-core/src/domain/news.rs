use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editorial grouping for the news feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsCategory {
    Company,
    Market,
    Economic,
    Global,
    Industry,
}

impl NewsCategory {
    pub fn label(self) -> &'static str {
        match self {
            NewsCategory::Company => "Company",
            NewsCategory::Market => "Market",
            NewsCategory::Economic => "Economic",
            NewsCategory::Global => "Global",
            NewsCategory::Industry => "Industry",
        }
    }
}

/// A canned news article for the feed view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub category: NewsCategory,
    /// Symbols this article touches; empty when none apply.
    pub related_symbols: Vec<String>,
}
