//! Main entry point for calculating everything.

use crate::curve::{self, CurvePoint, GroupSize};
use crate::errors::Result;
use crate::information;
use crate::output::Output;
use crate::probability;
use log::info;

/// Probability level highlighted on the chart.
pub const THRESHOLD: f64 = 0.5;

/// The commonly cited tipping point of the birthday paradox.
pub const TIPPING_POINT: GroupSize = 23;

/// What to calculate?
pub struct DriverArgs {
    /// Smallest group size on the curve.
    pub lo: GroupSize,

    /// Largest group size on the curve.
    pub hi: GroupSize,
}

impl Default for DriverArgs {
    fn default() -> Self {
        DriverArgs {
            lo: curve::DEFAULT_RANGE.0,
            hi: curve::DEFAULT_RANGE.1,
        }
    }
}

/// Calculate everything.
///
/// This is the main entry point for the library.
pub fn calc(args: &DriverArgs) -> Result<Output> {
    let points = curve::generate(args.lo, args.hi)?;
    information::statistics(&points);
    let first_above_threshold = first_crossing(&points);
    match first_above_threshold {
        Some(n) => info!(target: "birthday", "P(n) reaches {THRESHOLD} at n = {n}"),
        None => info!(target: "birthday", "P(n) stays below {THRESHOLD}"),
    }
    Ok(Output {
        days: probability::DAYS,
        range: (args.lo, args.hi),
        threshold: THRESHOLD,
        tipping_point: TIPPING_POINT,
        first_above_threshold,
        points,
    })
}

fn first_crossing(points: &[CurvePoint]) -> Option<GroupSize> {
    points
        .iter()
        .find(|p| p.probability >= THRESHOLD)
        .map(|p| p.n)
}
