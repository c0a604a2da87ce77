pub(crate) fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

/// `num / den`, or `None` when the denominator is zero or either side is not finite.
pub(crate) fn checked_div(num: f32, den: f32) -> Option<f32> {
    if den == 0.0 || !den.is_finite() || !num.is_finite() {
        return None;
    }
    let q = num / den;
    q.is_finite().then_some(q)
}

/// Upper bound on sampled sensor rows; taller sensors reuse the last row's displacement.
pub const MAX_SENSOR_ROWS: usize = 1 << 16;

/// Number of whole rows covered by a sensor of the given height, capped at
/// [`MAX_SENSOR_ROWS`].
pub(crate) fn row_count(height: f32) -> usize {
    if !height.is_finite() || height <= 0.0 {
        return 0;
    }
    if height >= MAX_SENSOR_ROWS as f32 {
        return MAX_SENSOR_ROWS;
    }
    height.floor() as usize
}
