//! Data structures for representing the output.

use crate::curve::{CurvePoint, GroupSize};
use serde::{Deserialize, Serialize};

pub type Range = (GroupSize, GroupSize);

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct Output {
    pub days: u64,
    pub range: Range,
    pub threshold: f64,
    pub tipping_point: GroupSize,
    pub first_above_threshold: Option<GroupSize>,
    pub points: Vec<CurvePoint>,
}

#[derive(Serialize)]
pub struct OError {
    pub error: String,
}

pub fn pretty_range(r: &Range) -> String {
    format!("{}-{}", r.0, r.1)
}

pub fn pretty_probability(p: f64) -> String {
    format!("{p:.4}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pretty_range_basic() {
        assert_eq!(pretty_range(&(1, 100)), "1-100");
        assert_eq!(pretty_range(&(23, 23)), "23-23");
    }

    #[test]
    fn pretty_probability_basic() {
        assert_eq!(pretty_probability(0.0), "0.0000");
        assert_eq!(pretty_probability(0.50729723), "0.5073");
        assert_eq!(pretty_probability(1.0), "1.0000");
    }
}
