use std::fs;
use std::path::PathBuf;

use greenlight_catalog::{IndustryCatalog, ScoringConfig};
use greenlight_core::{Candidate, Concept};
use greenlight_match::CompositeScorer;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    concept: Concept,
    candidates: Vec<Candidate>,
    expected_order: Vec<String>,
    min_top_score: Option<u8>,
}

#[test]
fn ranking_cases_pass() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fixture = root
        .join("..")
        .join("..")
        .join("data")
        .join("scenarios")
        .join("ranking_cases.json");

    let content = fs::read_to_string(&fixture)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", fixture.display()));
    let cases: Vec<Case> = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", fixture.display()));

    let catalog = IndustryCatalog::builtin().expect("builtin catalog");
    let config = ScoringConfig::default();
    let composite = CompositeScorer::new(&config, catalog.market());

    for case in cases {
        let ranked = composite.rank(&case.concept, &case.candidates, &[]);

        let names: Vec<&str> = ranked.iter().map(|r| r.candidate_name.as_str()).collect();
        assert_eq!(names, case.expected_order, "case '{}' order mismatch", case.name);

        for result in &ranked {
            assert!(
                result.overall_score >= config.min_match_score,
                "case '{}' leaked a result under the cutoff",
                case.name
            );
            assert!(result.factors.all_in_bounds(), "case '{}' factor out of bounds", case.name);
        }
        for pair in ranked.windows(2) {
            assert!(
                pair[0].overall_score > pair[1].overall_score
                    || (pair[0].overall_score == pair[1].overall_score
                        && pair[0].candidate_name < pair[1].candidate_name),
                "case '{}' is not deterministically ordered",
                case.name
            );
        }
        if let Some(min_top) = case.min_top_score {
            let top = ranked.first().map_or(0, |r| r.overall_score);
            assert!(top >= min_top, "case '{}' top score {top} below {min_top}", case.name);
        }
    }
}
