use greenlight_catalog::{FactorWeights, MarketData, ScoringConfig};
use greenlight_core::{ActivityRecord, Candidate, Concept, FactorScores, MatchResult};
use tracing::debug;

use crate::annotations::annotate;
use crate::factors::FactorScorer;

/// Blends factor scores into ranked match results: weighted total,
/// minimum-score filter, deterministic ordering, top-N truncation.
pub struct CompositeScorer<'a> {
    config: &'a ScoringConfig,
    scorer: FactorScorer<'a>,
}

impl<'a> CompositeScorer<'a> {
    pub fn new(config: &'a ScoringConfig, market: &'a MarketData) -> Self {
        Self {
            config,
            scorer: FactorScorer::new(config, market),
        }
    }

    /// Scores every candidate in the pool against the concept and returns
    /// the ranked list. An empty pool yields an empty list.
    pub fn rank(
        &self,
        concept: &Concept,
        candidates: &[Candidate],
        activity: &[ActivityRecord],
    ) -> Vec<MatchResult> {
        let scored_total = candidates.len();
        let mut results: Vec<MatchResult> = candidates
            .iter()
            .map(|candidate| self.score_candidate(concept, candidate, activity))
            .filter(|result| result.overall_score >= self.config.min_match_score)
            .collect();

        // Descending by overall score; equal scores break ascending by name
        // so reruns over the same pool are byte-identical.
        results.sort_by(|a, b| {
            b.overall_score
                .cmp(&a.overall_score)
                .then_with(|| a.candidate_name.cmp(&b.candidate_name))
        });
        results.truncate(self.config.max_results);

        debug!(
            concept = %concept.id,
            pool = scored_total,
            kept = results.len(),
            "ranked candidate pool"
        );
        results
    }

    pub fn score_candidate(
        &self,
        concept: &Concept,
        candidate: &Candidate,
        activity: &[ActivityRecord],
    ) -> MatchResult {
        let factors = self.scorer.score(concept, candidate, activity);
        let weights = self.config.weights_for(candidate.category);
        let overall_score = weighted_total(&factors, weights);
        let notes = annotate(concept, candidate, &factors);

        MatchResult {
            candidate_name: candidate.name.clone(),
            category: candidate.category,
            overall_score,
            factors,
            match_factors: notes.match_factors,
            warnings: notes.warnings,
            opportunities: notes.opportunities,
        }
    }
}

fn weighted_total(factors: &FactorScores, weights: FactorWeights) -> u8 {
    let total = weights.genre * f32::from(factors.genre)
        + weights.format * f32::from(factors.format)
        + weights.budget * f32::from(factors.budget)
        + weights.timing * f32::from(factors.timing)
        + weights.activity * f32::from(factors.activity);
    total.round().clamp(0.0, 100.0) as u8
}
