/// Linearly map `value` from the range `[src_min, src_max]` onto `[dst_min, dst_max]`.
///
/// No clamping; values outside the source range land outside the destination range.
pub fn map_range(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    dst_min + (value - src_min) / (src_max - src_min) * (dst_max - dst_min)
}

/// Linear interpolation, `t == 0` gives `a`, `t == 1` gives `b`.
/// Weighted form, so `b - a` never has to fit in an f64.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}
