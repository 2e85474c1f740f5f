pub mod candidate;
pub mod concept;
pub mod error;
pub mod genre;
pub mod matching;
pub mod portfolio;

pub use candidate::*;
pub use concept::*;
pub use error::EngineError;
pub use genre::*;
pub use matching::*;
pub use portfolio::*;
