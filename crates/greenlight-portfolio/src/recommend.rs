use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Utc};
use greenlight_catalog::{MarketData, MarketOutlook, MarketTrend};
use greenlight_core::{
    ConceptStage, DiversificationEntry, Genre, PortfolioConcept, PortfolioSummary, Priority,
    StrategicRecommendation,
};
use tracing::debug;

pub const MAX_RECOMMENDATIONS: usize = 5;
pub const ONBOARDING_MESSAGE: &str = "Add your first concept to get started!";

/// Demand above which an unrepresented genre is worth diversifying into.
pub const DIVERSIFY_DEMAND_THRESHOLD: f32 = 0.75;
/// Below this score a concept needs work before it can be pitched.
pub const IMPROVE_SCORE_THRESHOLD: u8 = 70;
/// At or above this score a ready concept should go out now.
pub const SUBMIT_SCORE_THRESHOLD: u8 = 80;
/// Below this blended health the portfolio as a whole needs attention.
pub const WEAK_HEALTH_THRESHOLD: f32 = 60.0;
/// More than this many concepts stuck in development is a backlog.
pub const BACKLOG_LIMIT: usize = 5;
/// At or above this score a concept counts as premium material.
pub const PREMIUM_SCORE_THRESHOLD: u8 = 90;

/// Applies the ordered strategy rules over portfolio state. Rules are
/// independent; several may fire. The result is stable-sorted by priority
/// and capped at `MAX_RECOMMENDATIONS`.
pub struct RecommendationGenerator<'a> {
    market: &'a MarketData,
}

impl<'a> RecommendationGenerator<'a> {
    pub fn new(market: &'a MarketData) -> Self {
        Self { market }
    }

    pub fn generate(
        &self,
        portfolio: &[PortfolioConcept],
        summary: &PortfolioSummary,
        entries: &[DiversificationEntry],
        now: DateTime<Utc>,
    ) -> Vec<StrategicRecommendation> {
        if portfolio.is_empty() {
            return vec![StrategicRecommendation::new(Priority::High, ONBOARDING_MESSAGE)];
        }

        let mut recommendations = Vec::new();

        if let Some(rec) = self.diversification_gap(entries) {
            recommendations.push(rec);
        }
        if let Some(rec) = improve_weakest(portfolio) {
            recommendations.push(rec);
        }
        if let Some(rec) = self.submission_ready(portfolio) {
            recommendations.push(rec);
        }
        if let Some(rec) = self.seasonal_window(portfolio, now) {
            recommendations.push(rec);
        }
        if summary.portfolio_health < WEAK_HEALTH_THRESHOLD {
            recommendations.push(StrategicRecommendation::new(
                Priority::Medium,
                "Strengthen your portfolio: develop existing concepts or add stronger ones",
            ));
        }
        let developing = portfolio
            .iter()
            .filter(|c| c.stage == ConceptStage::Developing)
            .count();
        if developing > BACKLOG_LIMIT {
            recommendations.push(StrategicRecommendation::new(
                Priority::Low,
                format!("{developing} concepts are stuck in development; finish or archive a few"),
            ));
        }
        let premium = portfolio
            .iter()
            .filter(|c| c.current_score >= PREMIUM_SCORE_THRESHOLD)
            .count();
        if premium > 0 {
            recommendations.push(StrategicRecommendation::new(
                Priority::High,
                format!("{premium} premium concept(s) scoring 90+ are ready for top-tier buyers"),
            ));
        }

        recommendations.sort_by_key(|r| r.priority);
        recommendations.truncate(MAX_RECOMMENDATIONS);
        debug!(count = recommendations.len(), "generated strategy recommendations");
        recommendations
    }

    /// Rule 1: first canonical genre with high external demand and zero
    /// portfolio representation.
    fn diversification_gap(
        &self,
        entries: &[DiversificationEntry],
    ) -> Option<StrategicRecommendation> {
        let represented: BTreeSet<Genre> =
            entries.iter().filter(|e| e.count > 0).map(|e| e.genre).collect();
        Genre::ALL
            .iter()
            .find(|genre| {
                !represented.contains(genre)
                    && self.market.demand(**genre) > DIVERSIFY_DEMAND_THRESHOLD
            })
            .map(|&genre| {
                StrategicRecommendation::new(
                    Priority::High,
                    format!("Diversify into {genre}: market demand is high and you have no {genre} concepts"),
                )
                .for_genre(genre)
            })
    }

    /// Rule 3: the strongest ready concept at or above the submit bar,
    /// annotated with genre market-window text.
    fn submission_ready(&self, portfolio: &[PortfolioConcept]) -> Option<StrategicRecommendation> {
        portfolio
            .iter()
            .filter(|c| c.stage == ConceptStage::Ready && c.current_score >= SUBMIT_SCORE_THRESHOLD)
            .max_by(|a, b| {
                a.current_score
                    .cmp(&b.current_score)
                    .then_with(|| b.id.cmp(&a.id))
            })
            .map(|concept| {
                StrategicRecommendation::new(
                    Priority::High,
                    format!(
                        "Submit '{}' now: {}",
                        concept.title,
                        self.market_window_text(concept.genre)
                    ),
                )
                .for_concept(concept.id.clone())
                .for_genre(concept.genre)
            })
    }

    /// Rule 4: a seasonal pitch window is open and a ready concept in that
    /// genre can ride it.
    fn seasonal_window(
        &self,
        portfolio: &[PortfolioConcept],
        now: DateTime<Utc>,
    ) -> Option<StrategicRecommendation> {
        let month = now.month();
        self.market
            .windows
            .iter()
            .filter(|window| window.contains_month(month))
            .find_map(|window| {
                portfolio
                    .iter()
                    .find(|c| c.genre == window.genre && c.stage == ConceptStage::Ready)
                    .map(|concept| {
                        StrategicRecommendation::new(
                            Priority::Medium,
                            format!("{}: pitch '{}' this season", window.note, concept.title),
                        )
                        .for_concept(concept.id.clone())
                        .for_genre(window.genre)
                    })
            })
    }

    fn market_window_text(&self, genre: Genre) -> String {
        match self.market.profile(genre) {
            Some(p) if p.trend == MarketTrend::Growing => format!(
                "{genre} demand is growing {:.0}% year over year",
                p.growth_rate_pct
            ),
            Some(p) if p.outlook == MarketOutlook::Bullish => {
                format!("buyer outlook for {genre} is bullish")
            }
            _ => format!("buyers are actively acquiring {genre}"),
        }
    }
}

/// Rule 2: the lowest-scoring concept under the improvement bar.
fn improve_weakest(portfolio: &[PortfolioConcept]) -> Option<StrategicRecommendation> {
    portfolio
        .iter()
        .filter(|c| c.current_score < IMPROVE_SCORE_THRESHOLD)
        .min_by(|a, b| {
            a.current_score
                .cmp(&b.current_score)
                .then_with(|| a.id.cmp(&b.id))
        })
        .map(|concept| {
            StrategicRecommendation::new(
                Priority::High,
                format!(
                    "Improve '{}' (scoring {}) before pitching it",
                    concept.title, concept.current_score
                ),
            )
            .for_concept(concept.id.clone())
            .for_genre(concept.genre)
        })
}
