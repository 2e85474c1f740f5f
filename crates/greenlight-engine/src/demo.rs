//! Deterministic sample data for the report binary and for demos. No
//! randomness anywhere; two runs print the same bytes.

use chrono::{DateTime, TimeZone, Utc};
use greenlight_core::{
    ActivityRecord, ActivityType, Concept, ConceptStage, EngineError, Genre, PortfolioConcept,
};

/// Mid-September, inside the Halloween acquisition window.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 9, 15, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The concept the report scores against the catalog pools.
pub fn sample_concept() -> Result<Concept, EngineError> {
    Ok(
        Concept::new("demo-1", "The Last Broadcast", Genre::Horror, "Feature Film", 85)?
            .with_secondary_genre(Genre::Thriller),
    )
}

/// A small portfolio across several stages and genres, with one concept
/// carrying a re-analysis in its history.
pub fn sample_portfolio() -> Vec<PortfolioConcept> {
    let week = |n: u32| fixed_now() - chrono::Duration::weeks(i64::from(n));
    vec![
        PortfolioConcept::new(
            "demo-1",
            "The Last Broadcast",
            Genre::Horror,
            ConceptStage::Ready,
            78,
            week(6),
        )
        .with_progression(85, week(2)),
        PortfolioConcept::new(
            "demo-2",
            "Afterglow",
            Genre::Drama,
            ConceptStage::Developing,
            64,
            week(5),
        ),
        PortfolioConcept::new(
            "demo-3",
            "Signal Lost",
            Genre::SciFi,
            ConceptStage::Draft,
            72,
            week(4),
        ),
        PortfolioConcept::new(
            "demo-4",
            "The Long Con",
            Genre::Thriller,
            ConceptStage::Submitted,
            81,
            week(3),
        ),
    ]
}

/// Recent industry moves referencing buyers and producers from the
/// embedded catalog by their exact names.
pub fn sample_activity() -> Vec<ActivityRecord> {
    let week = |n: u32| fixed_now() - chrono::Duration::weeks(i64::from(n));
    vec![
        ActivityRecord {
            candidate_name: "Nightglass Entertainment".to_string(),
            activity_type: ActivityType::Acquisition,
            genre: Genre::Horror,
            timestamp: week(1),
        },
        ActivityRecord {
            candidate_name: "Nightglass Entertainment".to_string(),
            activity_type: ActivityType::Development,
            genre: Genre::Horror,
            timestamp: week(3),
        },
        ActivityRecord {
            candidate_name: "Streamhaus".to_string(),
            activity_type: ActivityType::Acquisition,
            genre: Genre::Thriller,
            timestamp: week(2),
        },
        ActivityRecord {
            candidate_name: "Gallows Hill Pictures".to_string(),
            activity_type: ActivityType::Release,
            genre: Genre::Horror,
            timestamp: week(4),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_is_stable_across_calls() {
        assert_eq!(sample_portfolio(), sample_portfolio());
        assert_eq!(sample_activity(), sample_activity());
        assert_eq!(fixed_now(), fixed_now());
    }

    #[test]
    fn sample_concept_is_valid() {
        let concept = sample_concept().expect("sample concept");
        assert_eq!(concept.secondary_genre, Some(Genre::Thriller));
    }
}
