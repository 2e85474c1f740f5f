use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::genre::Genre;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateCategory {
    Studio,
    Streamer,
    Network,
    Producer,
}

impl CandidateCategory {
    pub fn is_producer(self) -> bool {
        matches!(self, CandidateCategory::Producer)
    }
}

/// A buyer (studio/streamer/network) or producer from the industry catalog.
/// Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub category: CandidateCategory,
    pub primary_genres: Vec<Genre>,
    pub secondary_genres: Vec<Genre>,
    pub preferred_formats: Vec<String>,
    pub budget_range: String,
    pub accepts_unsolicited: bool,
    #[serde(default)]
    pub recent_acquisitions: Vec<String>,
    /// Annual content spend in millions of USD.
    #[serde(default)]
    pub content_spend_musd: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Acquisition,
    Development,
    Release,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub candidate_name: String,
    pub activity_type: ActivityType,
    pub genre: Genre,
    pub timestamp: DateTime<Utc>,
}
