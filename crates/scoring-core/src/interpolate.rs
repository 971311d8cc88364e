//! Piecewise-linear helpers shared by the indicator calculators.
//!
//! Every calculator maps a raw metric onto a 0-100 score through a handful of
//! zones joined by straight lines. These functions express a single zone or a
//! whole chain of breakpoints so the calculators stay declarative.

/// Linear interpolation of `x` from `[x0, x1]` onto `[y0, y1]`.
///
/// A degenerate interval returns `y0`.
pub fn lerp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if (x1 - x0).abs() < f64::EPSILON {
        return y0;
    }
    y0 + (x - x0) / (x1 - x0) * (y1 - y0)
}

/// Evaluate a piecewise-linear curve defined by `(x, y)` breakpoints sorted by `x`.
///
/// Values left of the first breakpoint take the first `y`, values right of
/// the last take the last `y`.
pub fn piecewise(x: f64, points: &[(f64, f64)]) -> f64 {
    let Some(&(first_x, first_y)) = points.first() else {
        return 0.0;
    };
    if x <= first_x {
        return first_y;
    }
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            return lerp(x, x0, x1, y0, y1);
        }
    }
    points.last().map(|&(_, y)| y).unwrap_or(first_y)
}

/// Map `x` from `[lo, hi]` onto 0-100, clamped.
pub fn scale_to_percent(x: f64, lo: f64, hi: f64) -> f64 {
    lerp(x, lo, hi, 0.0, 100.0).clamp(0.0, 100.0)
}

/// Arithmetic mean of a slice. Empty input yields 0.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}
