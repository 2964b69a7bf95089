use crate::errors::{self, Result};
use crate::probability;
use is_sorted::IsSorted;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub type GroupSize = u64;

/// Group-size range evaluated by the program.
pub const DEFAULT_RANGE: (GroupSize, GroupSize) = (1, 100);

/// One point on the curve: a group size and its shared-birthday probability.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct CurvePoint {
    pub n: GroupSize,
    pub probability: f64,
}

/// Evaluate the probability model over the inclusive range `lo..=hi`,
/// one point per group size, in increasing order.
pub fn generate(lo: GroupSize, hi: GroupSize) -> Result<Vec<CurvePoint>> {
    if lo == 0 {
        return Err(errors::domain_error_ref("group sizes start at 1"));
    }
    if lo > hi {
        return Err(errors::domain_error(format!("empty range: {lo} > {hi}")));
    }
    let points = (lo..=hi)
        .map(|n| CurvePoint {
            n,
            probability: probability::probability(n),
        })
        .collect_vec();
    debug_assert!(IsSorted::is_sorted(
        &mut points.iter().map(|p| p.probability)
    ));
    Ok(points)
}

/// The curve for the fixed program range.
pub fn generate_default() -> Vec<CurvePoint> {
    generate(DEFAULT_RANGE.0, DEFAULT_RANGE.1).expect("default range is valid")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generate_default_covers_range() {
        let points = generate_default();
        assert_eq!(points.len(), 100);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.n, 1 + i as GroupSize);
        }
    }

    #[test]
    fn generate_single_point() {
        let points = generate(23, 23).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].n, 23);
        assert!((points[0].probability - 0.5073).abs() < 1e-4);
    }

    #[test]
    fn generate_is_deterministic() {
        assert_eq!(generate(1, 100).unwrap(), generate(1, 100).unwrap());
    }

    #[test]
    fn generate_rejects_zero() {
        assert!(generate(0, 10).is_err());
    }

    #[test]
    fn generate_rejects_inverted_range() {
        assert!(generate(10, 9).is_err());
    }
}
