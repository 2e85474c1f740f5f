pub mod diversification;
pub mod health;
pub mod recommend;

pub use diversification::*;
pub use health::*;
pub use recommend::*;
