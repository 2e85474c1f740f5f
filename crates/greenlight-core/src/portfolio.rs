use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::genre::Genre;

/// Submission-pipeline lifecycle. Owned by the pipeline component; the
/// engine only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptStage {
    Draft,
    Developing,
    Ready,
    Submitted,
    Received,
    UnderReview,
    Requested,
    Meeting,
    Negotiating,
    Passed,
    Optioned,
    Sold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreProgression {
    pub timestamp: DateTime<Utc>,
    pub score: u8,
    pub version: u32,
    pub improvement_delta: i16,
}

/// A concept inside a user's portfolio with its append-only score history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConcept {
    pub id: String,
    pub title: String,
    pub genre: Genre,
    pub stage: ConceptStage,
    pub current_score: u8,
    pub history: Vec<ScoreProgression>,
}

impl PortfolioConcept {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        genre: Genre,
        stage: ConceptStage,
        score: u8,
        scored_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genre,
            stage,
            current_score: score,
            history: vec![ScoreProgression {
                timestamp: scored_at,
                score,
                version: 1,
                improvement_delta: 0,
            }],
        }
    }

    /// Returns a new value with the re-analysis appended. The prior history
    /// is retained unchanged; nothing is edited in place.
    pub fn with_progression(&self, score: u8, at: DateTime<Utc>) -> Self {
        let version = self.history.last().map_or(1, |p| p.version + 1);
        let delta = i16::from(score) - i16::from(self.current_score);
        let mut history = self.history.clone();
        history.push(ScoreProgression {
            timestamp: at,
            score,
            version,
            improvement_delta: delta,
        });
        Self {
            current_score: score,
            history,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenreBalance {
    OverIndexed,
    Balanced,
    UnderIndexed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversificationEntry {
    pub genre: Genre,
    pub count: usize,
    pub percentage: f32,
    pub status: GenreBalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketPosition {
    Premium,
    Competitive,
    Developing,
    EarlyStage,
    Empty,
}

impl MarketPosition {
    pub fn label(self) -> &'static str {
        match self {
            MarketPosition::Premium => "Premium",
            MarketPosition::Competitive => "Competitive",
            MarketPosition::Developing => "Developing",
            MarketPosition::EarlyStage => "Early Stage",
            MarketPosition::Empty => "No concepts yet",
        }
    }
}

/// Ordering matches sort priority: High first, Low last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicRecommendation {
    pub priority: Priority,
    pub message: String,
    pub concept_id: Option<String>,
    pub genre: Option<Genre>,
}

impl StrategicRecommendation {
    pub fn new(priority: Priority, message: impl Into<String>) -> Self {
        Self {
            priority,
            message: message.into(),
            concept_id: None,
            genre: None,
        }
    }

    pub fn for_concept(mut self, id: impl Into<String>) -> Self {
        self.concept_id = Some(id.into());
        self
    }

    pub fn for_genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_concepts: usize,
    pub average_score: f32,
    pub strongest_genre: Option<Genre>,
    pub weakest_genre: Option<Genre>,
    pub portfolio_health: f32,
    pub market_position: MarketPosition,
    pub recommendations: Vec<StrategicRecommendation>,
}
