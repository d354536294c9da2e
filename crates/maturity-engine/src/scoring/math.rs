//! Arithmetic shared by every aggregation stage. Empty inputs and zero weight
//! sums degrade to 0.0; nothing here can yield NaN or infinity.

/// Extra digits used to absorb binary representation error before the final
/// rounding step (2.005 is stored as 2.00499999...).
const REPRESENTATION_GUARD: f64 = 1e6;

pub(crate) fn mean<I>(scores: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), score| (sum + score, count + 1));

    if count == 0 {
        0.0
    } else {
        finite_or_zero(sum / count as f64)
    }
}

pub(crate) fn weighted_mean<I>(scored: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (weighted_sum, total_weight) = scored
        .into_iter()
        .fold((0.0, 0.0), |(weighted_sum, total_weight), (score, weight)| {
            (weighted_sum + score * weight, total_weight + weight)
        });

    if total_weight > 0.0 {
        finite_or_zero(weighted_sum / total_weight)
    } else {
        0.0
    }
}

/// Round half away from zero to `precision` decimal digits.
pub fn round_half_away(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    let guarded = (scaled * REPRESENTATION_GUARD).round() / REPRESENTATION_GUARD;
    finite_or_zero(guarded.round() / factor)
}

/// Percentage (0-100) rounded to one decimal, 0 when there is nothing to count.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round_half_away(part as f64 / whole as f64 * 100.0, 1)
    }
}

pub(crate) fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

pub(crate) fn clamp_between(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
