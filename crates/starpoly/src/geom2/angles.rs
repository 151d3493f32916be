use std::f64::consts::{PI, TAU};

use super::{GeomCfg, Polygon, Ring};
use crate::star::AnalysisError;

/// Signed turn from direction `a1` to direction `a2`, folded into (−π, π].
///
/// Both inputs are expected in (−π, π], so one 2π correction suffices.
#[inline]
pub fn turning_angle(a1: f64, a2: f64) -> f64 {
    let mut rotation = a2 - a1;
    if rotation > PI {
        rotation -= TAU;
    }
    if rotation < -PI {
        rotation += TAU;
    }
    rotation
}

/// Direction angle of every edge `i → i+1 mod n`.
///
/// The angle is taken of `p[i] - p[i+1]`, i.e. the edge vector pointing back
/// from the next vertex. Turning signs downstream depend on this convention.
pub fn edge_angles(poly: &Polygon, cfg: GeomCfg) -> Result<Ring<f64>, AnalysisError> {
    let vertices = poly.vertices();
    if vertices.len() < 2 {
        return Err(AnalysisError::DegenerateGeometry {
            vertices: vertices.len(),
        });
    }
    let mut out = Vec::with_capacity(vertices.len());
    for (i, (p, q)) in vertices.pairs().enumerate() {
        let d = p - q;
        let len = d.norm();
        if !len.is_finite() || len <= cfg.eps_edge {
            return Err(AnalysisError::DegenerateEdge {
                edge: i,
                next: vertices.next(i),
            });
        }
        out.push(d.y.atan2(d.x));
    }
    Ok(Ring::new(out))
}

/// Turning angle at every vertex: `rotations[i]` turns edge `i` into edge `i+1`.
pub fn rotations(edge_angles: &Ring<f64>) -> Ring<f64> {
    edge_angles
        .pairs()
        .map(|(a1, a2)| turning_angle(*a1, *a2))
        .collect()
}
