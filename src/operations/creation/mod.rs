mod segment_arc;

pub use segment_arc::{segment_arc, SegmentArc, SegmentParams};
