use serde::{Deserialize, Serialize};

use crate::candidate::CandidateCategory;

/// The five independent sub-scores feeding the composite score, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScores {
    pub genre: u8,
    pub format: u8,
    pub budget: u8,
    pub timing: u8,
    pub activity: u8,
}

impl FactorScores {
    pub fn all_in_bounds(&self) -> bool {
        [self.genre, self.format, self.budget, self.timing, self.activity]
            .iter()
            .all(|s| *s <= 100)
    }
}

/// One ranked match. Created fresh per scoring call; the annotation lists
/// are descriptive only and never feed back into the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate_name: String,
    pub category: CandidateCategory,
    pub overall_score: u8,
    pub factors: FactorScores,
    pub match_factors: Vec<String>,
    pub warnings: Vec<String>,
    pub opportunities: Vec<String>,
}
