//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benches and experiments. Breaking changes are allowed and expected.

// 2D geometry
pub use crate::geom2::{edge_angles, rotations, turning_angle, GeomCfg, Polygon, Ring};
// Star polygon sampling
pub use crate::geom2::rand::{
    draw_star_polygon, draw_star_polygon_seeded, GeneratorError, ReplayToken as StarReplay,
    ScriptedSource, StarCfg, UnitSource,
};
// Turning analysis
pub use crate::star::{
    analyze, backward_chain, compose_scene, forward_chain, maximal_turning_arc, turning_cut,
    AnalysisError, Color, Dash, DisplayToggles, MaximalArc, Scene, StarAnalysis, Stroke,
};

use nalgebra::Vector2;

/// Pre: `poly` has at least 2 distinct consecutive vertices everywhere.
/// Post: returns the number of edges in each monotone chain `(forward, backward)`.
pub fn chain_lengths(poly: &Polygon, cfg: GeomCfg) -> Result<(usize, usize), AnalysisError> {
    let analysis = analyze(poly, cfg)?;
    Ok((
        analysis.forward_chain().len(),
        analysis.backward_chain().len(),
    ))
}

/// Signed area of a polygon (shoelace). Positive for counterclockwise order.
pub fn signed_area(points: &[Vector2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn area_unit_square_ccw_and_cw() {
        let ccw = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        assert!((signed_area(&ccw) - 1.0).abs() < 1e-12);
        let mut cw = ccw;
        cw.reverse();
        assert!((signed_area(&cw) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn chain_lengths_on_seeded_polygon() {
        let tok = StarReplay { seed: 42, index: 0 };
        let poly = draw_star_polygon_seeded(&StarCfg::default(), tok).unwrap();
        let (fwd, bwd) = chain_lengths(&poly, GeomCfg::default()).unwrap();
        assert!(fwd >= 2);
        assert!(bwd >= 1);
    }
}
