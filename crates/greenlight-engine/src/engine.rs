use chrono::{DateTime, Utc};
use greenlight_catalog::{IndustryCatalog, ScoringConfig};
use greenlight_core::{
    ActivityRecord, Candidate, Concept, EngineError, MatchResult, PortfolioConcept,
    PortfolioSummary,
};
use greenlight_match::CompositeScorer;
use greenlight_portfolio::{
    aggregate_health, DiversificationAnalyzer, DiversificationReport, RecommendationGenerator,
};
use tracing::debug;

/// The engine facade. Owns the catalog and a validated scoring
/// configuration; every operation is a pure function of its inputs, so
/// rerunning any of them over the same data gives the same answer.
pub struct MarketIntelligence {
    catalog: IndustryCatalog,
    config: ScoringConfig,
}

impl MarketIntelligence {
    /// Validates the configuration once up front. A bad weight table or a
    /// zero result cap never reaches the scoring path.
    pub fn new(catalog: IndustryCatalog, config: ScoringConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Engine over the embedded catalog with default scoring.
    pub fn with_builtin_catalog() -> Result<Self, EngineError> {
        let catalog = IndustryCatalog::builtin()
            .map_err(|e| EngineError::Config(format!("builtin catalog: {e}")))?;
        Self::new(catalog, ScoringConfig::default())
    }

    pub fn catalog(&self) -> &IndustryCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Ranks the buyer pool against a concept.
    pub fn match_buyers(&self, concept: &Concept, activity: &[ActivityRecord]) -> Vec<MatchResult> {
        self.rank_pool(concept, self.catalog.buyers(), activity)
    }

    /// Ranks the producer pool against a concept.
    pub fn match_producers(
        &self,
        concept: &Concept,
        activity: &[ActivityRecord],
    ) -> Vec<MatchResult> {
        self.rank_pool(concept, self.catalog.producers(), activity)
    }

    fn rank_pool(
        &self,
        concept: &Concept,
        pool: &[Candidate],
        activity: &[ActivityRecord],
    ) -> Vec<MatchResult> {
        CompositeScorer::new(&self.config, self.catalog.market()).rank(concept, pool, activity)
    }

    /// Genre distribution and entropy for a portfolio.
    pub fn diversification(&self, portfolio: &[PortfolioConcept]) -> DiversificationReport {
        DiversificationAnalyzer::new(self.catalog.market()).analyze(portfolio)
    }

    /// Full portfolio read-out: health, market position, genre extremes,
    /// and prioritized strategy recommendations. `now` drives the seasonal
    /// rules; callers pass a fixed instant when they need reproducibility.
    pub fn portfolio_summary(
        &self,
        portfolio: &[PortfolioConcept],
        now: DateTime<Utc>,
    ) -> PortfolioSummary {
        let report = self.diversification(portfolio);
        let mut summary = aggregate_health(portfolio, &report);
        summary.recommendations = RecommendationGenerator::new(self.catalog.market())
            .generate(portfolio, &summary, &report.entries, now);
        debug!(
            concepts = summary.total_concepts,
            health = summary.portfolio_health,
            recommendations = summary.recommendations.len(),
            "summarized portfolio"
        );
        summary
    }
}
