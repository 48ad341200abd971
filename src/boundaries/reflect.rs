//! Bring the computed bounds back into the legal range.
//!
//! The reflection is a linear shift across the exceeded edge applied exactly once:
//! a value that overflows by more than the whole range stays out of range.

/// Shift the value below `-bound` to the opposite edge
pub(super) fn reflect_below(value: f64, bound: f64) -> f64 {
    if value < -bound {
        bound - (-bound - value)
    } else {
        value
    }
}

/// Shift the value above `bound` to the opposite edge
pub(super) fn reflect_above(value: f64, bound: f64) -> f64 {
    if value > bound {
        -bound + (value - bound)
    } else {
        value
    }
}
