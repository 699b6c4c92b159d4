pub mod creation;
pub mod query;

pub use creation::{segment_arc, SegmentArc, SegmentParams};
pub use query::RadialDeviation;
