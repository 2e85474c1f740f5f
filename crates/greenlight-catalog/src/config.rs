use greenlight_core::{CandidateCategory, EngineError};
use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f32 = 1e-6;

/// Per-category blend weights over the five factor slots. Each set must
/// sum to exactly 1.0; `ScoringConfig::validate` enforces this once at
/// engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub genre: f32,
    pub format: f32,
    pub budget: f32,
    pub timing: f32,
    pub activity: f32,
}

impl FactorWeights {
    pub const BUYER: FactorWeights = FactorWeights {
        genre: 0.30,
        format: 0.15,
        budget: 0.20,
        timing: 0.20,
        activity: 0.15,
    };

    /// Producer slots carry producer-facing meanings: genre expertise,
    /// track record, budget alignment, accessibility, momentum.
    pub const PRODUCER: FactorWeights = FactorWeights {
        genre: 0.35,
        format: 0.25,
        budget: 0.15,
        timing: 0.10,
        activity: 0.15,
    };

    pub fn sum(&self) -> f32 {
        self.genre + self.format + self.budget + self.timing + self.activity
    }
}

/// One row of the budget-fit step table: a budget-range label substring,
/// the minimum concept quality it requires, and the fit score it grants.
/// Rows are scanned in order; the first satisfied row wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRow {
    pub label: String,
    pub min_quality: u8,
    pub score: u8,
}

impl BudgetRow {
    fn new(label: &str, min_quality: u8, score: u8) -> Self {
        Self {
            label: label.to_string(),
            min_quality,
            score,
        }
    }
}

pub fn default_budget_table() -> Vec<BudgetRow> {
    vec![
        BudgetRow::new("$75M+", 85, 95),
        BudgetRow::new("$75M+", 75, 85),
        BudgetRow::new("$40M", 78, 90),
        BudgetRow::new("$40M", 65, 80),
        BudgetRow::new("$20M", 70, 85),
        BudgetRow::new("$20M", 55, 78),
        BudgetRow::new("$10M", 60, 80),
        BudgetRow::new("$5M", 0, 75),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub buyer_weights: FactorWeights,
    pub producer_weights: FactorWeights,
    pub budget_table: Vec<BudgetRow>,
    pub budget_floor: u8,
    pub min_match_score: u8,
    pub max_results: usize,
    pub growth_rate_threshold_pct: f32,
    pub streaming_demand_threshold: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            buyer_weights: FactorWeights::BUYER,
            producer_weights: FactorWeights::PRODUCER,
            budget_table: default_budget_table(),
            budget_floor: 70,
            min_match_score: 50,
            max_results: 8,
            growth_rate_threshold_pct: 10.0,
            streaming_demand_threshold: 0.75,
        }
    }
}

impl ScoringConfig {
    pub fn weights_for(&self, category: CandidateCategory) -> FactorWeights {
        if category.is_producer() {
            self.producer_weights
        } else {
            self.buyer_weights
        }
    }

    /// A weight table that does not sum to 1.0 or a score outside 0-100 is
    /// a corrupted configuration, rejected here rather than at call time.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (name, weights) in [("buyer", self.buyer_weights), ("producer", self.producer_weights)] {
            let sum = weights.sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(EngineError::Config(format!(
                    "{name} weights sum to {sum}, expected 1.0"
                )));
            }
        }
        if self.min_match_score > 100 || self.budget_floor > 100 {
            return Err(EngineError::Config("score bounds exceed 100".to_string()));
        }
        if let Some(row) = self.budget_table.iter().find(|r| r.score > 100 || r.min_quality > 100) {
            return Err(EngineError::Config(format!(
                "budget row '{}' is out of bounds",
                row.label
            )));
        }
        if self.max_results == 0 {
            return Err(EngineError::Config("max_results must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weight_sets_sum_to_one() {
        assert!((FactorWeights::BUYER.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert!((FactorWeights::PRODUCER.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_skewed_weights() {
        let mut config = ScoringConfig::default();
        config.buyer_weights.genre = 0.50;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_bounds_budget_row() {
        let mut config = ScoringConfig::default();
        config.budget_table.push(BudgetRow::new("$1B", 0, 120));
        assert!(config.validate().is_err());
    }

    #[test]
    fn budget_table_is_ordered_top_tier_first() {
        let table = default_budget_table();
        assert_eq!(table.first().map(|r| r.score), Some(95));
        assert!(table.iter().all(|r| r.score >= 70));
    }
}
