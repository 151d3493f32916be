//! 2D building blocks for star polygon analysis.
//!
//! Purpose
//! - Hold the vertex ring (`Polygon`) and the per-edge quantities derived
//!   from it: direction angles and signed turning angles.
//! - Provide the cyclic index arithmetic (`Ring`) once, so the analysis
//!   code never spells out `(i + n) % n` by hand.
//!
//! Code cross-refs: `star::analyze`, `rand::draw_star_polygon`

mod angles;
pub mod rand;
mod ring;
mod types;

pub use angles::{edge_angles, rotations, turning_angle};
pub use ring::Ring;
pub use types::{GeomCfg, Polygon};
