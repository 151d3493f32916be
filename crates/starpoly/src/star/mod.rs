//! Turning analysis of a star polygon: maximal arc plus two monotone chains.
//!
//! Purpose
//! - Turn a vertex ring into the data a half-plane-intersection kernel step
//!   consumes: per-edge angles, per-vertex turning, the maximal positive
//!   turning arc, and two chains that are monotone in accumulated turning.
//!
//! Why this design
//! - `analyze` is a pure function of the polygon; the result record owns all
//!   derived sequences and exposes them read-only.
//! - Degenerate input (too few vertices, zero-length edges) is an error; a
//!   polygon without positive turning is a valid result with a flagged arc.
//!
//! Not implemented: the kernel itself (dual convex hulls of both chains and
//! their merge).

mod arc;
mod chains;
mod render;
mod types;

pub use arc::{maximal_turning_arc, turning_cut};
pub use chains::{backward_chain, forward_chain};
pub use render::{compose_scene, Color, Dash, DisplayToggles, Scene, Stroke};
pub use types::{AnalysisError, MaximalArc, StarAnalysis};

use crate::geom2::{edge_angles, rotations, GeomCfg, Polygon};

/// Run the full pipeline on `poly`.
pub fn analyze(poly: &Polygon, cfg: GeomCfg) -> Result<StarAnalysis, AnalysisError> {
    let angles = edge_angles(poly, cfg)?;
    let rot = rotations(&angles);
    let arc = maximal_turning_arc(&rot);
    let fwd = forward_chain(&rot, &arc);
    let bwd = backward_chain(&rot, &arc);
    tracing::debug!(
        n = rot.len(),
        forward = fwd.len(),
        backward = bwd.len(),
        degenerate = arc.is_degenerate(),
        "star analysis done"
    );
    Ok(StarAnalysis::new(angles, rot, arc, fwd, bwd))
}
