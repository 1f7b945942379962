pub mod aggregate;
pub mod algorithm;
pub mod classify;
pub mod measure;

pub use aggregate::aggregate;
pub use algorithm::{analyze_trace, derive_segments};
pub use classify::classify;
pub use measure::{measure, Measurement};
