// Comparator - Period-over-period delta between two summaries
use crate::application::summarizer::saturate;
use crate::domain::trend::{Comparison, Polarity};

/// Previous summaries at or below this magnitude yield no percentage delta
pub const DELTA_EPSILON: f64 = 1e-9;

/// Compare two summaries. Missing or non-finite inputs propagate as `None`; a zero
/// delta counts as improved for either polarity. An overflowing delta saturates.
pub fn compare(current: Option<f64>, previous: Option<f64>, polarity: Polarity) -> Comparison {
    let (Some(current), Some(previous)) = (current, previous) else {
        return Comparison::default();
    };
    if !current.is_finite() || !previous.is_finite() {
        return Comparison::default();
    }

    let delta = saturate(current - previous);
    let delta_percent = (previous.abs() > DELTA_EPSILON).then(|| delta / previous * 100.0);
    let improved = match polarity {
        Polarity::HigherIsBetter => delta >= 0.0,
        Polarity::LowerIsBetter => delta <= 0.0,
    };

    Comparison {
        delta_absolute: Some(delta),
        delta_percent: delta_percent.filter(|p| p.is_finite()),
        improved: Some(improved),
    }
}
