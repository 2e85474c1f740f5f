use greenlight_core::{Candidate, CandidateCategory};

use crate::error::CatalogError;
use crate::market::MarketData;

const BUYERS_JSON: &str = include_str!("../data/buyers.json");
const PRODUCERS_JSON: &str = include_str!("../data/producers.json");
const MARKET_JSON: &str = include_str!("../data/market.json");

/// The static industry catalog: buyer and producer candidates plus the
/// genre market tables. Injected into the engine; tests substitute
/// minimal fixtures via `from_parts`.
#[derive(Debug, Clone, Default)]
pub struct IndustryCatalog {
    buyers: Vec<Candidate>,
    producers: Vec<Candidate>,
    market: MarketData,
}

impl IndustryCatalog {
    /// Loads the catalog embedded in the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        let buyers: Vec<Candidate> = serde_json::from_str(BUYERS_JSON)?;
        let producers: Vec<Candidate> = serde_json::from_str(PRODUCERS_JSON)?;
        let market: MarketData = serde_json::from_str(MARKET_JSON)?;
        Self::from_parts(buyers, producers, market)
    }

    pub fn from_parts(
        buyers: Vec<Candidate>,
        producers: Vec<Candidate>,
        market: MarketData,
    ) -> Result<Self, CatalogError> {
        if let Some(c) = buyers.iter().find(|c| c.category.is_producer()) {
            return Err(CatalogError::Inconsistent(format!(
                "'{}' is a producer listed in the buyer pool",
                c.name
            )));
        }
        if let Some(c) = producers.iter().find(|c| !c.category.is_producer()) {
            return Err(CatalogError::Inconsistent(format!(
                "'{}' is a buyer listed in the producer pool",
                c.name
            )));
        }
        if let Some((genre, profile)) = market.profiles.iter().find(|(g, p)| **g != p.genre) {
            return Err(CatalogError::Inconsistent(format!(
                "market profile for {genre} is keyed as {}",
                profile.genre
            )));
        }
        Ok(Self {
            buyers,
            producers,
            market,
        })
    }

    /// An empty catalog is valid and yields empty match results.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn buyers(&self) -> &[Candidate] {
        &self.buyers
    }

    pub fn producers(&self) -> &[Candidate] {
        &self.producers
    }

    pub fn pool(&self, category: CandidateCategory) -> &[Candidate] {
        if category.is_producer() {
            &self.producers
        } else {
            &self.buyers
        }
    }

    pub fn market(&self) -> &MarketData {
        &self.market
    }
}
