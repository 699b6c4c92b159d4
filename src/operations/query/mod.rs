mod radial_deviation;

pub use radial_deviation::RadialDeviation;
