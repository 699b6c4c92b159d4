pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{ArcbezError, Result};
pub use geometry::{Arc, CubicBezier, Curve, QuadraticBezier};
pub use math::bezier_2d::{evaluate_cubic, evaluate_quadratic};
pub use math::{Point2, Vector2};
pub use operations::segment_arc;
