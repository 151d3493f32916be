//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for edge length and winding checks.
//! - `Polygon`: immutable cyclic vertex sequence.

use nalgebra::Vector2;

use super::Ring;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Edges not longer than this are treated as zero-length.
    pub eps_edge: f64,
    /// Allowed distance of the total turning from a multiple of 2π.
    pub eps_winding: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_edge: 1e-12,
            eps_winding: 1e-9,
        }
    }
}

/// Cyclic vertex sequence with an implicit closing edge `n-1 → 0`.
///
/// Invariants:
/// - Vertices never change after construction.
/// - Any length is representable (including 0 and 1); the analysis rejects
///   fewer than 2 vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Ring<Vector2<f64>>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vector2<f64>>) -> Self {
        Self {
            vertices: Ring::new(vertices),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &Ring<Vector2<f64>> {
        &self.vertices
    }

    /// Endpoints of edge `i` (vertex `i` → vertex `i+1 mod n`).
    #[inline]
    pub fn edge(&self, i: usize) -> (Vector2<f64>, Vector2<f64>) {
        (self.vertices[i], self.vertices[self.vertices.next(i)])
    }
}

impl From<Vec<Vector2<f64>>> for Polygon {
    fn from(vertices: Vec<Vector2<f64>>) -> Self {
        Self::new(vertices)
    }
}
