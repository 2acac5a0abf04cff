//! Splitting one iteration budget across the segments of a composite shape so
//! that long segments get proportionally more steps.

/// Total lengths at or below this are treated as "no usable length".
pub const DEGENERATE_LENGTH: f64 = 1e-9;

/// Give each segment `round(count * length / total)` iterations.
///
/// When the total length is zero, vanishingly small, or not finite, there is
/// no meaningful weighting and the budget is split evenly instead, with any
/// remainder going to the leading segments. The result always has one entry
/// per input length.
///
/// ```rust
/// use aoer_scribble::scribble::allocation::allocate;
///
/// assert_eq!(allocate(&[10.0, 30.0], 100), vec![25, 75]);
/// assert_eq!(allocate(&[0.0, 0.0, 0.0], 10), vec![4, 3, 3]);
/// ```
pub fn allocate(lengths: &[f64], count: usize) -> Vec<usize> {
    if lengths.is_empty() {
        return vec![];
    }
    let total: f64 = lengths.iter().sum();
    if !total.is_finite() || total <= DEGENERATE_LENGTH {
        log::debug!(
            "Degenerate total length {} over {} segments, splitting {} evenly",
            total,
            lengths.len(),
            count
        );
        return even_split(lengths.len(), count);
    }
    let countf = count as f64;
    lengths
        .iter()
        .map(|length| (countf * length / total).round().max(0.0) as usize)
        .collect()
}

/// `count` spread over `parts` slots as evenly as integers allow.
pub fn even_split(parts: usize, count: usize) -> Vec<usize> {
    if parts == 0 {
        return vec![];
    }
    let base = count / parts;
    let extra = count % parts;
    (0..parts)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}
