use std::fs;
use std::path::{Path, PathBuf};

use greenlight_core::PortfolioConcept;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Whole-collection persistence for a user's portfolio. `save` overwrites
/// the entire collection; there are no partial updates.
pub trait PortfolioStore {
    fn load(&self) -> Result<Vec<PortfolioConcept>, StoreError>;
    fn save(&self, portfolio: &[PortfolioConcept]) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Persisted {
    concepts: Vec<PortfolioConcept>,
}

/// JSON file store. A missing or malformed file loads as an empty
/// portfolio rather than an error; the engine never sees corrupt data.
pub struct JsonPortfolioStore {
    path: PathBuf,
}

impl JsonPortfolioStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }
}

impl PortfolioStore for JsonPortfolioStore {
    fn load(&self) -> Result<Vec<PortfolioConcept>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path)?;
        match serde_json::from_slice::<Persisted>(&bytes) {
            Ok(persisted) => Ok(persisted.concepts),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed portfolio file, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, portfolio: &[PortfolioConcept]) -> Result<(), StoreError> {
        let persisted = Persisted {
            concepts: portfolio.to_vec(),
        };
        let bytes = serde_json::to_vec_pretty(&persisted)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use greenlight_core::{ConceptStage, Genre};

    fn sample() -> Vec<PortfolioConcept> {
        let at = Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).single().expect("date");
        vec![
            PortfolioConcept::new("c-1", "Night Shift", Genre::Horror, ConceptStage::Ready, 84, at),
            PortfolioConcept::new("c-2", "Afterglow", Genre::Drama, ConceptStage::Draft, 71, at),
        ]
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonPortfolioStore::open(dir.path().join("portfolio.json")).expect("open");

        let portfolio = sample();
        store.save(&portfolio).expect("save");
        let loaded = store.load().expect("load");
        assert_eq!(loaded, portfolio);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonPortfolioStore::open(dir.path().join("missing.json")).expect("open");
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn malformed_file_loads_empty_not_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("portfolio.json");
        fs::write(&path, b"{not json").expect("write garbage");

        let store = JsonPortfolioStore::open(&path).expect("open");
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn save_overwrites_the_whole_collection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonPortfolioStore::open(dir.path().join("portfolio.json")).expect("open");

        store.save(&sample()).expect("save");
        let smaller = sample().into_iter().take(1).collect::<Vec<_>>();
        store.save(&smaller).expect("save again");

        assert_eq!(store.load().expect("load"), smaller);
    }
}
