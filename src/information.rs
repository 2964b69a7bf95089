use crate::curve::CurvePoint;
use crate::output;
use log::info;

pub fn statistics(points: &[CurvePoint]) {
    info!("curve points: {}", points.len());
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        info!("group sizes: {}-{}", first.n, last.n);
        info!(
            "probabilities: {}-{}",
            output::pretty_probability(first.probability),
            output::pretty_probability(last.probability)
        );
    }
}
