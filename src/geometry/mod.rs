pub mod curve;

pub use curve::{Arc, CubicBezier, Curve, CurveDomain, QuadraticBezier};
