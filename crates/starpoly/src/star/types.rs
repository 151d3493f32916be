//! Result record and error type of the turning analysis.

use std::f64::consts::TAU;

use thiserror::Error;

use crate::geom2::{GeomCfg, Ring};

/// Conditions under which the analysis cannot run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("degenerate geometry: need at least 2 vertices, got {vertices}")]
    DegenerateGeometry { vertices: usize },
    #[error("degenerate edge {edge}: vertices {edge} and {next} coincide")]
    DegenerateEdge { edge: usize, next: usize },
}

/// Cyclic run of turning angles with the largest positive sum.
///
/// `start` and `end` are rotation indices; the run covers `start, start+1, …`
/// up to but excluding `end`. `start == end` with positive turning is the
/// full cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaximalArc {
    pub start: usize,
    pub end: usize,
    /// Sum of the rotations in the run; 0 when no positive run exists.
    pub turning: f64,
}

impl Default for MaximalArc {
    fn default() -> Self {
        Self {
            start: 0,
            end: 0,
            turning: 0.0,
        }
    }
}

impl MaximalArc {
    /// No run with positive turning was found; the arc is the `(0, 0)` default.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.turning <= 0.0
    }

    /// Number of rotations covered, for a ring of length `n`.
    pub fn span(&self, n: usize) -> usize {
        if self.is_degenerate() || n == 0 {
            0
        } else if self.start == self.end {
            n
        } else {
            (self.end + n - self.start) % n
        }
    }
}

/// Everything derived from one polygon. Built once, read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct StarAnalysis {
    edge_angles: Ring<f64>,
    rotations: Ring<f64>,
    arc: MaximalArc,
    forward_chain: Vec<usize>,
    backward_chain: Vec<usize>,
}

impl StarAnalysis {
    pub(crate) fn new(
        edge_angles: Ring<f64>,
        rotations: Ring<f64>,
        arc: MaximalArc,
        forward_chain: Vec<usize>,
        backward_chain: Vec<usize>,
    ) -> Self {
        Self {
            edge_angles,
            rotations,
            arc,
            forward_chain,
            backward_chain,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    pub fn edge_angles(&self) -> &Ring<f64> {
        &self.edge_angles
    }

    pub fn rotations(&self) -> &Ring<f64> {
        &self.rotations
    }

    pub fn arc(&self) -> &MaximalArc {
        &self.arc
    }

    /// Subset 1: edges walked forward from `arc.start`, running maximum.
    pub fn forward_chain(&self) -> &[usize] {
        &self.forward_chain
    }

    /// Subset 2: edges walked backward from `arc.end`, running minimum.
    pub fn backward_chain(&self) -> &[usize] {
        &self.backward_chain
    }

    /// Sum of all turning angles (±2π for a simple polygon).
    pub fn total_turning(&self) -> f64 {
        self.rotations.iter().sum()
    }

    /// Total turning in full turns, if it is within `eps_winding` of a multiple of 2π.
    pub fn winding_number(&self, cfg: GeomCfg) -> Option<i32> {
        let turns = self.total_turning() / TAU;
        let rounded = turns.round();
        if ((turns - rounded) * TAU).abs() <= cfg.eps_winding {
            Some(rounded as i32)
        } else {
            None
        }
    }
}
