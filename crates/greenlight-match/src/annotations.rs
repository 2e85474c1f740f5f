use greenlight_core::{Candidate, Concept, FactorScores};

/// Factor level at or above which a positive match factor is emitted.
pub const POSITIVE_FACTOR_THRESHOLD: u8 = 80;
/// Factor level at or above which an opportunity is emitted.
pub const OPPORTUNITY_THRESHOLD: u8 = 85;
/// Genre factor at or below which the candidate is outside core focus.
pub const GENRE_WARNING_THRESHOLD: u8 = 45;
/// Annual content spend (M$) treated as a large-budget opportunity.
pub const LARGE_SPEND_MUSD: f32 = 500.0;

pub struct Annotations {
    pub match_factors: Vec<String>,
    pub warnings: Vec<String>,
    pub opportunities: Vec<String>,
}

/// Derives the qualitative annotation lists from the factor scores.
/// Descriptive only; never feeds back into the composite score.
pub fn annotate(concept: &Concept, candidate: &Candidate, factors: &FactorScores) -> Annotations {
    let producer = candidate.category.is_producer();
    let mut match_factors = Vec::new();
    let mut warnings = Vec::new();
    let mut opportunities = Vec::new();

    let positives: [(u8, &str, &str); 5] = [
        (factors.genre, "Strong genre match", "Deep genre expertise"),
        (factors.format, "Format fits current slate", "Track record in this format"),
        (factors.budget, "Budget tier aligns with concept quality", "Budget alignment"),
        (factors.timing, "Favorable market timing", "Accessible market window"),
        (factors.activity, "Recently active in the market", "Strong momentum"),
    ];
    for (score, buyer_label, producer_label) in positives {
        if score >= POSITIVE_FACTOR_THRESHOLD {
            let label = if producer { producer_label } else { buyer_label };
            match_factors.push(label.to_string());
        }
    }

    if !candidate.accepts_unsolicited {
        let warning = if producer {
            "Does not accept unsolicited submissions"
        } else {
            "Submissions require an agent or referral"
        };
        warnings.push(warning.to_string());
    }
    if factors.genre <= GENRE_WARNING_THRESHOLD {
        warnings.push("Outside core genre focus".to_string());
    }

    if factors.timing >= OPPORTUNITY_THRESHOLD {
        opportunities.push(format!("Market window open for {}", concept.genre));
    }
    if factors.activity >= OPPORTUNITY_THRESHOLD {
        opportunities.push("Actively acquiring right now".to_string());
    }
    if candidate.content_spend_musd >= LARGE_SPEND_MUSD {
        opportunities.push("Large annual content budget".to_string());
    }

    Annotations {
        match_factors,
        warnings,
        opportunities,
    }
}
