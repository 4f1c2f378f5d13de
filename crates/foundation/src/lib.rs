pub mod geo;
pub mod range;
pub mod time;

// Foundation crate: small, well-tested primitives only.
pub use geo::*;
pub use range::*;
pub use time::*;
