//! Prints sampled points of a cubic arc approximation, one `x y` pair per line.
//!
//! Usage:
//! ```text
//! cargo run --example arc_samples                      # 270° unit arc, 50 samples per segment
//! cargo run --example arc_samples -- 0 3.14159 20      # start, end (radians), samples
//! cargo run --example arc_samples -- --control 0 4.71  # control polygons instead of samples
//! ```
//!
//! Pipe the output into any plotting tool; drawing is not this crate's job.

use std::f64::consts::PI;
use std::io::{self, BufWriter, Write};

use arcbez::operations::RadialDeviation;
use arcbez::tessellation::{SamplePath, SampleParams};
use arcbez::{Arc, Point2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, DEBUG for arcbez.
    // Override with RUST_LOG env var (e.g. RUST_LOG=arcbez=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("arcbez=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let control = args.first().is_some_and(|a| a == "--control");
    if control {
        args.remove(0);
    }

    let start: f64 = args.first().map_or(Ok(0.0), |a| a.parse())?;
    let end: f64 = args.get(1).map_or(Ok(1.5 * PI), |a| a.parse())?;
    let params = match args.get(2) {
        Some(n) => SampleParams::new(n.parse()?)?,
        None => SampleParams::default(),
    };

    let arc = Arc::new(Point2::origin(), 1.0, start, end)?;
    let segments = arc.to_cubic_beziers()?;

    let deviation = RadialDeviation::new(&arc, &segments, params).execute()?;
    tracing::info!(segments = segments.len(), deviation, "approximated arc");

    let mut out = BufWriter::new(io::stdout().lock());
    if control {
        for segment in &segments {
            for p in segment.control_points() {
                writeln!(out, "{} {}", p.x, p.y)?;
            }
            writeln!(out)?;
        }
    } else {
        for p in SamplePath::new(&segments, params).points() {
            writeln!(out, "{} {}", p.x, p.y)?;
        }
    }
    out.flush()?;
    Ok(())
}
