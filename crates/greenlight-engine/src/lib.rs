pub mod engine;

#[cfg(feature = "demo")]
pub mod demo;

pub use engine::MarketIntelligence;
pub use greenlight_catalog::{
    BudgetRow, CatalogError, FactorWeights, IndustryCatalog, MarketData, MarketOutlook,
    MarketProfile, MarketTrend, ScoringConfig, SeasonalWindow,
};
pub use greenlight_core::*;
pub use greenlight_match::{CompositeScorer, FactorScorer};
pub use greenlight_portfolio::{
    aggregate_health, DiversificationAnalyzer, DiversificationReport, RecommendationGenerator,
    MAX_RECOMMENDATIONS, ONBOARDING_MESSAGE,
};
pub use greenlight_store::{JsonPortfolioStore, PortfolioStore, StoreError};
