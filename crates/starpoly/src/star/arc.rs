//! Maximal turning arc: circular maximum-subarray over turning angles.
//!
//! The circle is cut right after the smallest rotation and scanned once,
//! Kadane-style. A run is dropped as soon as adding the next rotation would
//! make its sum non-positive, so every recorded run keeps positive prefix sums.

use std::f64::consts::PI;

use super::MaximalArc;
use crate::geom2::Ring;

/// Scan start: the index after the first rotation strictly below all earlier
/// ones (bound starts at π). Returns 0 when nothing is below π.
pub fn turning_cut(rotations: &Ring<f64>) -> usize {
    if rotations.is_empty() {
        return 0;
    }
    let mut lowest = PI;
    let mut cut = 0;
    for (i, &r) in rotations.iter().enumerate() {
        if r < lowest {
            lowest = r;
            cut = rotations.next(i);
        }
    }
    cut
}

/// Find the cyclic run with the largest positive turning sum.
///
/// Returns the `(0, 0)` default with zero turning when no rotation sum ever
/// becomes positive; check `MaximalArc::is_degenerate`.
pub fn maximal_turning_arc(rotations: &Ring<f64>) -> MaximalArc {
    let mut best = MaximalArc::default();
    if rotations.is_empty() {
        return best;
    }
    let cut = turning_cut(rotations);
    let mut sum = 0.0;
    let mut start = cut;
    let mut end = 0;
    for idx in rotations.walk_forward(cut) {
        let next = sum + rotations[idx];
        if next <= 0.0 {
            sum = 0.0;
            start = rotations.next(idx);
        } else {
            sum = next;
            end = rotations.next(idx);
        }
        if sum > best.turning {
            best = MaximalArc {
                start,
                end,
                turning: sum,
            };
        }
    }
    tracing::debug!(
        cut,
        start = best.start,
        end = best.end,
        turning = best.turning,
        "maximal turning arc"
    );
    best
}
