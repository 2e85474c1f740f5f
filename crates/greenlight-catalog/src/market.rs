use std::collections::BTreeMap;

use greenlight_core::Genre;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketTrend {
    Growing,
    Stable,
    Declining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketOutlook {
    Bullish,
    Neutral,
    Bearish,
}

/// Aggregate market signals for one genre, sourced from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketProfile {
    pub genre: Genre,
    /// Relative buyer demand, 0-1.
    pub demand: f32,
    pub trend: MarketTrend,
    pub growth_rate_pct: f32,
    pub outlook: MarketOutlook,
    /// Streaming platform demand index, 0-1.
    pub streaming_demand: f32,
}

/// A calendar window in which pitching a genre is seasonally favored.
/// `end_month` may wrap past December (e.g. Romance Nov-Jan).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalWindow {
    pub genre: Genre,
    pub start_month: u32,
    pub end_month: u32,
    pub note: String,
}

impl SeasonalWindow {
    pub fn contains_month(&self, month: u32) -> bool {
        if self.start_month <= self.end_month {
            (self.start_month..=self.end_month).contains(&month)
        } else {
            month >= self.start_month || month <= self.end_month
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub profiles: BTreeMap<Genre, MarketProfile>,
    pub adjacency: BTreeMap<Genre, Vec<Genre>>,
    pub windows: Vec<SeasonalWindow>,
}

/// Fallback demand applied when a genre is missing from the catalog.
pub const FALLBACK_DEMAND: f32 = 0.5;

impl MarketData {
    pub fn profile(&self, genre: Genre) -> Option<&MarketProfile> {
        self.profiles.get(&genre)
    }

    /// Demand for a genre, with the documented fallback when the catalog
    /// has no profile for it.
    pub fn demand(&self, genre: Genre) -> f32 {
        self.profiles.get(&genre).map_or(FALLBACK_DEMAND, |p| p.demand)
    }

    pub fn adjacent(&self, genre: Genre) -> &[Genre] {
        self.adjacency.get(&genre).map_or(&[], Vec::as_slice)
    }

    pub fn window_for(&self, genre: Genre) -> Option<&SeasonalWindow> {
        self.windows.iter().find(|w| w.genre == genre)
    }
}
