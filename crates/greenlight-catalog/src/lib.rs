pub mod catalog;
pub mod config;
pub mod error;
pub mod market;

pub use catalog::*;
pub use config::*;
pub use error::CatalogError;
pub use market::*;
