use greenlight_catalog::{MarketData, MarketOutlook, MarketTrend, ScoringConfig};
use greenlight_core::{ActivityRecord, Candidate, Concept, FactorScores};

pub const GENRE_PRIMARY: u8 = 95;
pub const GENRE_PRIMARY_PRODUCER_LEAD: u8 = 98;
pub const GENRE_SECONDARY: u8 = 70;
pub const GENRE_SECONDARY_PRODUCER: u8 = 90;
pub const GENRE_ADJACENT_PRIMARY: u8 = 60;
pub const GENRE_ADJACENT_SECONDARY: u8 = 45;
pub const GENRE_FLOOR: u8 = 30;

pub const FORMAT_DIRECT: u8 = 95;
pub const FORMAT_FAMILY: u8 = 90;
/// An unmatched format is a mild penalty, never a disqualifier.
pub const FORMAT_FLOOR: u8 = 60;

pub const TIMING_BASE: u8 = 60;

/// Computes the five independent sub-scores for one (concept, candidate)
/// pair. Pure; the market tables and thresholds are injected.
pub struct FactorScorer<'a> {
    config: &'a ScoringConfig,
    market: &'a MarketData,
}

impl<'a> FactorScorer<'a> {
    pub fn new(config: &'a ScoringConfig, market: &'a MarketData) -> Self {
        Self { config, market }
    }

    pub fn score(
        &self,
        concept: &Concept,
        candidate: &Candidate,
        activity: &[ActivityRecord],
    ) -> FactorScores {
        FactorScores {
            genre: self.genre_score(concept, candidate),
            format: Self::format_score(concept, candidate),
            budget: self.budget_score(concept, candidate),
            timing: self.timing_score(concept),
            activity: Self::activity_score(candidate, activity),
        }
    }

    /// Tiered by adjacency: exact primary hit, secondary hit, then
    /// adjacency-table intersection, then the floor. Producers rate their
    /// first-listed specialty and secondary coverage higher.
    pub fn genre_score(&self, concept: &Concept, candidate: &Candidate) -> u8 {
        let genre = concept.genre;
        let producer = candidate.category.is_producer();

        if candidate.primary_genres.contains(&genre) {
            if producer && candidate.primary_genres.first() == Some(&genre) {
                return GENRE_PRIMARY_PRODUCER_LEAD;
            }
            return GENRE_PRIMARY;
        }
        if candidate.secondary_genres.contains(&genre) {
            return if producer {
                GENRE_SECONDARY_PRODUCER
            } else {
                GENRE_SECONDARY
            };
        }

        let adjacent = self.market.adjacent(genre);
        if adjacent.iter().any(|g| candidate.primary_genres.contains(g)) {
            return GENRE_ADJACENT_PRIMARY;
        }
        if adjacent.iter().any(|g| candidate.secondary_genres.contains(g)) {
            return GENRE_ADJACENT_SECONDARY;
        }
        GENRE_FLOOR
    }

    pub fn format_score(concept: &Concept, candidate: &Candidate) -> u8 {
        let wanted = concept.format.trim().to_lowercase();
        if wanted.is_empty() {
            return FORMAT_FLOOR;
        }
        let direct = candidate.preferred_formats.iter().any(|preferred| {
            let preferred = preferred.to_lowercase();
            preferred == wanted || preferred.contains(&wanted) || wanted.contains(&preferred)
        });
        if direct {
            return FORMAT_DIRECT;
        }

        let family = format_family(&wanted);
        let family_hit = candidate
            .preferred_formats
            .iter()
            .any(|preferred| format_family(&preferred.to_lowercase()) == family);
        if family_hit {
            return FORMAT_FAMILY;
        }
        FORMAT_FLOOR
    }

    /// Monotonic step function over the ordered budget table: first row
    /// whose label substring matches the candidate's budget range and whose
    /// quality minimum the concept meets.
    pub fn budget_score(&self, concept: &Concept, candidate: &Candidate) -> u8 {
        for row in &self.config.budget_table {
            if candidate.budget_range.contains(&row.label)
                && concept.quality_score >= row.min_quality
            {
                return row.score;
            }
        }
        self.config.budget_floor
    }

    /// Base 60 plus market-signal bonuses, capped at 100. A genre missing
    /// from the market table scores the flat base (documented fallback).
    pub fn timing_score(&self, concept: &Concept) -> u8 {
        let Some(profile) = self.market.profile(concept.genre) else {
            return TIMING_BASE;
        };
        let mut score = u32::from(TIMING_BASE);
        if profile.trend == MarketTrend::Growing {
            score += 15;
        }
        if profile.growth_rate_pct > self.config.growth_rate_threshold_pct {
            score += 10;
        }
        if profile.outlook == MarketOutlook::Bullish {
            score += 10;
        }
        if profile.streaming_demand > self.config.streaming_demand_threshold {
            score += 5;
        }
        score.min(100) as u8
    }

    /// Counts feed records that fuzzily name this candidate. Absence of
    /// records is the 0-match tier, not a failure.
    pub fn activity_score(candidate: &Candidate, activity: &[ActivityRecord]) -> u8 {
        let name = candidate.name.to_lowercase();
        let first_token = name.split_whitespace().next().unwrap_or("");
        let matches = activity
            .iter()
            .filter(|record| {
                let recorded = record.candidate_name.trim().to_lowercase();
                if recorded.is_empty() {
                    return false;
                }
                recorded == name
                    || recorded.contains(&name)
                    || name.contains(&recorded)
                    || (!first_token.is_empty() && recorded.starts_with(first_token))
            })
            .count();
        match matches {
            0 => 60,
            1 => 75,
            2 => 85,
            _ => 95,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormatFamily {
    Film,
    Series,
}

fn format_family(format: &str) -> FormatFamily {
    if format.contains("series") {
        FormatFamily::Series
    } else {
        FormatFamily::Film
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use greenlight_catalog::IndustryCatalog;
    use greenlight_core::{ActivityType, CandidateCategory, Genre};

    fn candidate(category: CandidateCategory, primary: &[Genre], secondary: &[Genre]) -> Candidate {
        Candidate {
            name: "Nightglass Entertainment".to_string(),
            category,
            primary_genres: primary.to_vec(),
            secondary_genres: secondary.to_vec(),
            preferred_formats: vec!["Feature Film".to_string()],
            budget_range: "$20M+".to_string(),
            accepts_unsolicited: true,
            recent_acquisitions: Vec::new(),
            content_spend_musd: 100.0,
        }
    }

    fn concept(genre: Genre, quality: u8) -> Concept {
        Concept::new("c-1", "Night Shift", genre, "Feature Film", quality).expect("concept")
    }

    fn scorer_fixture() -> (ScoringConfig, MarketData) {
        let catalog = IndustryCatalog::builtin().expect("catalog");
        (ScoringConfig::default(), catalog.market().clone())
    }

    #[test]
    fn genre_tiers_follow_adjacency() {
        let (config, market) = scorer_fixture();
        let scorer = FactorScorer::new(&config, &market);
        let horror = concept(Genre::Horror, 80);

        let primary = candidate(CandidateCategory::Studio, &[Genre::Horror], &[]);
        assert_eq!(scorer.genre_score(&horror, &primary), GENRE_PRIMARY);

        let secondary = candidate(CandidateCategory::Studio, &[Genre::Drama], &[Genre::Horror]);
        assert_eq!(scorer.genre_score(&horror, &secondary), GENRE_SECONDARY);

        // Horror is adjacent to Thriller and Fantasy in the builtin table.
        let adjacent = candidate(CandidateCategory::Studio, &[Genre::Thriller], &[]);
        assert_eq!(scorer.genre_score(&horror, &adjacent), GENRE_ADJACENT_PRIMARY);

        let adjacent_secondary = candidate(CandidateCategory::Studio, &[Genre::Comedy], &[Genre::Fantasy]);
        assert_eq!(scorer.genre_score(&horror, &adjacent_secondary), GENRE_ADJACENT_SECONDARY);

        let unrelated = candidate(CandidateCategory::Studio, &[Genre::Comedy], &[Genre::Romance]);
        assert_eq!(scorer.genre_score(&horror, &unrelated), GENRE_FLOOR);
    }

    #[test]
    fn producer_lead_specialty_outranks_plain_primary() {
        let (config, market) = scorer_fixture();
        let scorer = FactorScorer::new(&config, &market);
        let horror = concept(Genre::Horror, 80);

        let lead = candidate(CandidateCategory::Producer, &[Genre::Horror, Genre::Thriller], &[]);
        assert_eq!(scorer.genre_score(&horror, &lead), GENRE_PRIMARY_PRODUCER_LEAD);

        let second_listed = candidate(CandidateCategory::Producer, &[Genre::Thriller, Genre::Horror], &[]);
        assert_eq!(scorer.genre_score(&horror, &second_listed), GENRE_PRIMARY);

        let secondary = candidate(CandidateCategory::Producer, &[Genre::Drama], &[Genre::Horror]);
        assert_eq!(scorer.genre_score(&horror, &secondary), GENRE_SECONDARY_PRODUCER);
    }

    #[test]
    fn format_prefers_direct_then_family() {
        let direct = candidate(CandidateCategory::Studio, &[Genre::Horror], &[]);
        let film_concept = concept(Genre::Horror, 80);
        assert_eq!(FactorScorer::format_score(&film_concept, &direct), FORMAT_DIRECT);

        let mut series_only = direct.clone();
        series_only.preferred_formats = vec!["TV Series".to_string()];
        assert_eq!(FactorScorer::format_score(&film_concept, &series_only), FORMAT_FLOOR);

        let mut series_concept = film_concept.clone();
        series_concept.format = "Limited Series".to_string();
        assert_eq!(
            FactorScorer::format_score(&series_concept, &series_only),
            FORMAT_FAMILY
        );
    }

    #[test]
    fn budget_steps_with_quality() {
        let (config, market) = scorer_fixture();
        let scorer = FactorScorer::new(&config, &market);
        let mut tentpole = candidate(CandidateCategory::Studio, &[Genre::Action], &[]);
        tentpole.budget_range = "$75M+".to_string();

        assert_eq!(scorer.budget_score(&concept(Genre::Action, 90), &tentpole), 95);
        assert_eq!(scorer.budget_score(&concept(Genre::Action, 78), &tentpole), 85);
        assert_eq!(scorer.budget_score(&concept(Genre::Action, 40), &tentpole), config.budget_floor);

        let mut indie = tentpole.clone();
        indie.budget_range = "$5M+".to_string();
        assert_eq!(scorer.budget_score(&concept(Genre::Action, 40), &indie), 75);
    }

    #[test]
    fn unlabeled_budget_range_scores_floor() {
        let (config, market) = scorer_fixture();
        let scorer = FactorScorer::new(&config, &market);
        let mut unlabeled = candidate(CandidateCategory::Studio, &[Genre::Action], &[]);
        unlabeled.budget_range = "negotiable".to_string();
        assert_eq!(
            scorer.budget_score(&concept(Genre::Action, 90), &unlabeled),
            config.budget_floor
        );
    }

    #[test]
    fn timing_stacks_bonuses_and_caps() {
        let (config, market) = scorer_fixture();
        let scorer = FactorScorer::new(&config, &market);

        // Horror: growing, 14% > 10%, bullish, streaming 0.82 > 0.75.
        assert_eq!(scorer.timing_score(&concept(Genre::Horror, 80)), 100);
        // Drama: stable, 3%, neutral, streaming 0.66.
        assert_eq!(scorer.timing_score(&concept(Genre::Drama, 80)), TIMING_BASE);
        // Action: growing +15, 11% > 10% +10, neutral, streaming 0.70.
        assert_eq!(scorer.timing_score(&concept(Genre::Action, 80)), 85);
    }

    #[test]
    fn missing_market_profile_scores_base() {
        let config = ScoringConfig::default();
        let market = MarketData::default();
        let scorer = FactorScorer::new(&config, &market);
        assert_eq!(scorer.timing_score(&concept(Genre::Horror, 80)), TIMING_BASE);
    }

    #[test]
    fn activity_tiers_count_fuzzy_matches() {
        let target = candidate(CandidateCategory::Studio, &[Genre::Horror], &[]);
        let at = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).single().expect("date");
        let record = |name: &str| ActivityRecord {
            candidate_name: name.to_string(),
            activity_type: ActivityType::Acquisition,
            genre: Genre::Horror,
            timestamp: at,
        };

        assert_eq!(FactorScorer::activity_score(&target, &[]), 60);
        assert_eq!(
            FactorScorer::activity_score(&target, &[record("nightglass entertainment")]),
            75
        );
        assert_eq!(
            FactorScorer::activity_score(&target, &[record("Nightglass"), record("NIGHTGLASS ENT.")]),
            85
        );
        assert_eq!(
            FactorScorer::activity_score(
                &target,
                &[record("Nightglass"), record("Nightglass"), record("Nightglass Entertainment Inc")]
            ),
            95
        );
        // Unrelated names never count.
        assert_eq!(FactorScorer::activity_score(&target, &[record("Orbit+")]), 60);
    }

    #[test]
    fn all_factors_stay_in_bounds() {
        let (config, market) = scorer_fixture();
        let scorer = FactorScorer::new(&config, &market);
        for genre in Genre::ALL {
            for quality in [0_u8, 50, 85, 100] {
                let scores = scorer.score(
                    &concept(genre, quality),
                    &candidate(CandidateCategory::Producer, &[Genre::Horror], &[Genre::Drama]),
                    &[],
                );
                assert!(scores.all_in_bounds(), "{genre} q={quality} out of bounds");
            }
        }
    }
}
