//! Star polygon sampling and turning analysis.
//!
//! Pipeline (leaves first):
//! - `geom2::rand`: random star polygon from angular slots and a radius range.
//! - `geom2::angles`: edge direction angles and signed turning angles.
//! - `star::arc`: maximal positive turning arc (circular max-subarray).
//! - `star::chains`: the two monotone chains anchored at the arc ends.
//!
//! The chains are the input for a half-plane-intersection kernel of the star
//! polygon. Building that kernel (dual hulls + merge) is not part of this crate.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod api;
pub mod geom2;
pub mod star;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Polygon, Ring};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_star_polygon, draw_star_polygon_seeded, GeneratorError, ReplayToken, ScriptedSource,
        StarCfg, UnitSource,
    };
    pub use crate::geom2::{edge_angles, rotations, turning_angle, GeomCfg, Polygon, Ring};
    pub use crate::star::{
        analyze, compose_scene, AnalysisError, Color, DisplayToggles, MaximalArc, Scene, StarAnalysis,
    };
    pub use nalgebra::Vector2 as Vec2;
}
