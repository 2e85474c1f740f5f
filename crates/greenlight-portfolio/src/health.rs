use std::collections::BTreeMap;

use greenlight_core::{Genre, MarketPosition, PortfolioConcept, PortfolioSummary};

use crate::diversification::DiversificationReport;

const QUALITY_WEIGHT: f32 = 0.4;
const DIVERSITY_WEIGHT: f32 = 0.3;
const SIZE_WEIGHT: f32 = 0.3;
/// Portfolio size at which the size component saturates.
const FULL_SIZE: f32 = 10.0;

/// Blends average quality, diversification entropy, and portfolio size
/// into a 0-100 health score and a summary. Recommendations are attached
/// by the caller.
pub fn aggregate_health(
    portfolio: &[PortfolioConcept],
    report: &DiversificationReport,
) -> PortfolioSummary {
    if portfolio.is_empty() {
        return PortfolioSummary {
            total_concepts: 0,
            average_score: 0.0,
            strongest_genre: None,
            weakest_genre: None,
            portfolio_health: 0.0,
            market_position: MarketPosition::Empty,
            recommendations: Vec::new(),
        };
    }

    let total = portfolio.len();
    let average_score =
        portfolio.iter().map(|c| f32::from(c.current_score)).sum::<f32>() / total as f32;
    let size_component = (total as f32 / FULL_SIZE).min(1.0);
    let portfolio_health = (QUALITY_WEIGHT * average_score
        + DIVERSITY_WEIGHT * report.entropy_score * 100.0
        + SIZE_WEIGHT * size_component * 100.0)
        .clamp(0.0, 100.0);

    let (strongest_genre, weakest_genre) = genre_extremes(portfolio);

    PortfolioSummary {
        total_concepts: total,
        average_score,
        strongest_genre,
        weakest_genre,
        portfolio_health,
        market_position: market_position(average_score),
        recommendations: Vec::new(),
    }
}

pub fn market_position(average_score: f32) -> MarketPosition {
    if average_score >= 85.0 {
        MarketPosition::Premium
    } else if average_score >= 75.0 {
        MarketPosition::Competitive
    } else if average_score >= 65.0 {
        MarketPosition::Developing
    } else {
        MarketPosition::EarlyStage
    }
}

/// Argmax/argmin of per-genre average score; ties resolve to the genre
/// appearing earlier in the canonical enumeration.
fn genre_extremes(portfolio: &[PortfolioConcept]) -> (Option<Genre>, Option<Genre>) {
    let mut totals: BTreeMap<Genre, (u32, u32)> = BTreeMap::new();
    for concept in portfolio {
        let slot = totals.entry(concept.genre).or_insert((0, 0));
        slot.0 += u32::from(concept.current_score);
        slot.1 += 1;
    }

    let mut strongest: Option<(Genre, f32)> = None;
    let mut weakest: Option<(Genre, f32)> = None;
    for (&genre, &(sum, count)) in &totals {
        let average = sum as f32 / count as f32;
        match strongest {
            Some((_, best)) if average <= best => {}
            _ => strongest = Some((genre, average)),
        }
        match weakest {
            Some((_, worst)) if average >= worst => {}
            _ => weakest = Some((genre, average)),
        }
    }
    (strongest.map(|(g, _)| g), weakest.map(|(g, _)| g))
}
