pub mod geometry;
pub mod phase;
pub mod result;

pub use geometry::{Point, Segment};
pub use phase::{Phase, Side};
pub use result::{Episode, SegmentRecord, TraceResult};
