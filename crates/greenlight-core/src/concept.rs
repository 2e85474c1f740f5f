use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::genre::Genre;

/// A pitched film/TV idea. The quality score is produced upstream by the
/// logline analyzer and is final for this value; re-analysis produces a new
/// `Concept`, never an in-place edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub id: String,
    pub title: String,
    pub genre: Genre,
    #[serde(default)]
    pub secondary_genre: Option<Genre>,
    pub format: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub target_audience: String,
    pub quality_score: u8,
}

impl Concept {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        genre: Genre,
        format: impl Into<String>,
        quality_score: u8,
    ) -> Result<Self, EngineError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EngineError::InvalidInput("concept title is empty".to_string()));
        }
        if quality_score > 100 {
            return Err(EngineError::InvalidInput(format!(
                "quality score {quality_score} exceeds 100"
            )));
        }
        Ok(Self {
            id: id.into(),
            title,
            genre,
            secondary_genre: None,
            format: format.into(),
            tone: String::new(),
            target_audience: String::new(),
            quality_score,
        })
    }

    pub fn with_secondary_genre(mut self, genre: Genre) -> Self {
        self.secondary_genre = Some(genre);
        self
    }
}
