//! Draw list for an analyzed polygon.
//!
//! The scene is plain data: a drawing backend walks it in order (outline,
//! strokes, dots). Nothing here draws, and the analysis is only borrowed.

use nalgebra::Vector2;

use super::StarAnalysis;
use crate::geom2::Polygon;

pub const OUTLINE_WIDTH: f64 = 5.0;
pub const DOT_RADIUS: f64 = 7.0;
pub const DASH_PATTERN: [f64; 2] = [10.0, 10.0];

/// Which overlays to include.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayToggles {
    /// The two edges at the ends of the maximal arc.
    pub show_max_edge_angle: bool,
    pub show_forward_chain: bool,
    pub show_backward_chain: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Outline,
    Forward,
    Backward,
}

impl Color {
    pub fn as_hex(self) -> &'static str {
        match self {
            Color::Outline => "#FFF",
            Color::Forward => "#F00",
            Color::Backward => "#00F",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    pub pattern: [f64; 2],
    pub offset: f64,
}

/// One straight segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub color: Color,
    pub dash: Option<Dash>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Closed polyline through all vertices.
    pub outline: Vec<Vector2<f64>>,
    pub outline_width: f64,
    pub strokes: Vec<Stroke>,
    pub dots: Vec<Vector2<f64>>,
    pub dot_radius: f64,
}

/// Build the draw list for `poly` and its analysis.
///
/// Order: forward chain (dashed), backward chain (dashed, shifted by one dash),
/// then the arc end edges (solid). `analysis` must come from `poly`.
pub fn compose_scene(poly: &Polygon, analysis: &StarAnalysis, toggles: DisplayToggles) -> Scene {
    let mut scene = Scene {
        outline: poly.vertices().iter().copied().collect(),
        outline_width: OUTLINE_WIDTH,
        strokes: Vec::new(),
        dots: poly.vertices().iter().copied().collect(),
        dot_radius: DOT_RADIUS,
    };
    if poly.is_empty() {
        return scene;
    }
    let edge = |i: usize, color: Color, dash: Option<Dash>| {
        let (from, to) = poly.edge(i);
        Stroke {
            from,
            to,
            color,
            dash,
        }
    };
    if toggles.show_forward_chain {
        let dash = Dash {
            pattern: DASH_PATTERN,
            offset: 0.0,
        };
        scene.strokes.extend(
            analysis
                .forward_chain()
                .iter()
                .map(|&i| edge(i, Color::Forward, Some(dash))),
        );
    }
    if toggles.show_backward_chain {
        let dash = Dash {
            pattern: DASH_PATTERN,
            offset: DASH_PATTERN[0],
        };
        scene.strokes.extend(
            analysis
                .backward_chain()
                .iter()
                .map(|&i| edge(i, Color::Backward, Some(dash))),
        );
    }
    if toggles.show_max_edge_angle {
        let arc = analysis.arc();
        scene.strokes.push(edge(arc.start, Color::Forward, None));
        scene.strokes.push(edge(arc.end, Color::Backward, None));
    }
    scene
}
