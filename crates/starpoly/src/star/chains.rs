//! Monotone chains anchored at the two ends of the maximal arc.
//!
//! Both walks accumulate turning and keep only edges that push the running
//! extremum further. Entries appear in discovery order; nothing is re-sorted.

use std::f64::consts::PI;

use super::MaximalArc;
use crate::geom2::Ring;

/// Subset 1: walk forward from `arc.start`, keeping the edge after every new
/// running maximum of accumulated turning, and close with `arc.end`.
///
/// Starts as `[arc.start]`; the running maximum starts at −π.
pub fn forward_chain(rotations: &Ring<f64>, arc: &MaximalArc) -> Vec<usize> {
    let mut chain = vec![arc.start];
    if rotations.is_empty() {
        return chain;
    }
    let mut acc = 0.0;
    let mut max = -PI;
    for idx in rotations.walk_forward(arc.start) {
        if idx == arc.end {
            chain.push(idx);
            break;
        }
        acc += rotations[idx];
        if acc > max {
            max = acc;
            chain.push(rotations.next(idx));
        }
    }
    chain
}

/// Subset 2: walk backward from `arc.end`, keeping every edge that sets a new
/// running minimum of negated accumulated turning, and close with `arc.start`.
///
/// Starts empty; the running minimum starts at +π.
pub fn backward_chain(rotations: &Ring<f64>, arc: &MaximalArc) -> Vec<usize> {
    let mut chain = Vec::new();
    if rotations.is_empty() {
        return chain;
    }
    let mut acc = 0.0;
    let mut min = PI;
    for idx in rotations.walk_backward(arc.end) {
        if idx == arc.start {
            chain.push(idx);
            break;
        }
        acc -= rotations[idx];
        if acc < min {
            min = acc;
            chain.push(idx);
        }
    }
    chain
}
