pub mod annotations;
pub mod composite;
pub mod factors;

pub use annotations::*;
pub use composite::*;
pub use factors::*;
