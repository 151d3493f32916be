//! Random star polygons (angular slots + radial draws + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for star-shaped polygons around a
//!   given center. Each of `max_slots` equally spaced directions is kept with
//!   probability `inclusion_probability` and receives a uniform radius.
//!
//! Model
//! - Slot `i` has angle `2π·i/max_slots`. Kept slots appear in slot order, so
//!   vertices are angularly sorted around the center.
//! - Draw order is part of the contract: one inclusion draw per slot, then one
//!   radius draw right after each kept slot's inclusion draw. A slot is skipped
//!   when its draw is strictly greater than the probability.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::Polygon;

/// Canvas edge length the default configuration is laid out for.
pub const DEFAULT_RESOLUTION: f64 = 800.0;

/// Error type of the sampler.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("invalid generator params: {reason}")]
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

/// Uniform random source over [0, 1).
///
/// The sampler pulls values strictly in the documented order, so a scripted
/// source can pin down every vertex of a polygon.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl UnitSource for StdRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl<S: UnitSource + ?Sized> UnitSource for &mut S {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Replays a fixed list of values (cycling) and counts how many were drawn.
/// An empty script always yields 0.0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    drawn: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, drawn: 0 }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.drawn
    }
}

impl UnitSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let v = if self.values.is_empty() {
            0.0
        } else {
            self.values[self.drawn % self.values.len()]
        };
        self.drawn += 1;
        v
    }
}

/// Star sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarCfg {
    pub center_x: f64,
    pub center_y: f64,
    /// Number of equally spaced candidate directions.
    pub max_slots: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    /// A slot is kept when its draw is `<=` this value (1 keeps every slot, 0 keeps none
    /// unless a draw is exactly 0).
    pub inclusion_probability: f64,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_RESOLUTION / 2.0,
            center_y: DEFAULT_RESOLUTION / 2.0,
            max_slots: 20,
            min_radius: DEFAULT_RESOLUTION / 10.0,
            max_radius: DEFAULT_RESOLUTION / 2.25,
            inclusion_probability: 1.0,
        }
    }
}

impl StarCfg {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(self.center_x.is_finite() && self.center_y.is_finite()) {
            return Err(GeneratorError::invalid("center must be finite"));
        }
        if !(self.min_radius.is_finite() && self.max_radius.is_finite()) {
            return Err(GeneratorError::invalid("radius bounds must be finite"));
        }
        if self.min_radius < 0.0 {
            return Err(GeneratorError::invalid("min_radius must be >= 0"));
        }
        if self.min_radius > self.max_radius {
            return Err(GeneratorError::invalid("min_radius <= max_radius required"));
        }
        if self.inclusion_probability.is_nan() {
            return Err(GeneratorError::invalid("inclusion_probability must not be NaN"));
        }
        Ok(())
    }

    #[inline]
    fn center(&self) -> Vector2<f64> {
        Vector2::new(self.center_x, self.center_y)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next sample of the same stream.
    #[inline]
    pub fn succ(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a random star polygon from `src`.
///
/// Notes
/// - The result may have 0 or 1 vertices; the analysis reports those as
///   degenerate geometry instead of this function failing.
/// - Self-intersections are not checked.
pub fn draw_star_polygon<S: UnitSource + ?Sized>(
    cfg: &StarCfg,
    src: &mut S,
) -> Result<Polygon, GeneratorError> {
    cfg.validate()?;
    let center = cfg.center();
    let mut pts = Vec::with_capacity(cfg.max_slots);
    for i in 0..cfg.max_slots {
        if src.next_unit() > cfg.inclusion_probability {
            continue;
        }
        let angle = TAU * (i as f64 / cfg.max_slots as f64);
        let radius = src.next_unit() * (cfg.max_radius - cfg.min_radius) + cfg.min_radius;
        pts.push(center + Vector2::new(angle.cos(), angle.sin()) * radius);
    }
    tracing::debug!(
        slots = cfg.max_slots,
        vertices = pts.len(),
        "drew star polygon"
    );
    Ok(Polygon::new(pts))
}

/// Draw with the RNG derived from a replay token.
pub fn draw_star_polygon_seeded(cfg: &StarCfg, tok: ReplayToken) -> Result<Polygon, GeneratorError> {
    let mut rng = tok.to_std_rng();
    draw_star_polygon(cfg, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(slots: usize, p: f64) -> StarCfg {
        StarCfg {
            center_x: 0.0,
            center_y: 0.0,
            max_slots: slots,
            min_radius: 1.0,
            max_radius: 3.0,
            inclusion_probability: p,
        }
    }

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_star_polygon_seeded(&StarCfg::default(), tok).expect("poly");
        let p2 = draw_star_polygon_seeded(&StarCfg::default(), tok).expect("poly");
        assert_eq!(p1, p2);
        let p3 = draw_star_polygon_seeded(&StarCfg::default(), tok.succ()).expect("poly");
        assert_ne!(p1, p3);
    }

    #[test]
    fn draw_order_two_per_kept_slot_one_per_skipped() {
        // slot 0 kept (0.2 <= 0.5, radius draw 0.5), slot 1 skipped (0.9),
        // slot 2 kept (0.5 <= 0.5, radius draw 0.0), slot 3 skipped (0.75).
        let mut src = ScriptedSource::new(vec![0.2, 0.5, 0.9, 0.5, 0.0, 0.75]);
        let poly = draw_star_polygon(&cfg(4, 0.5), &mut src).unwrap();
        assert_eq!(src.draws(), 6);
        assert_eq!(poly.len(), 2);
        let v0 = poly.vertices()[0];
        let v1 = poly.vertices()[1];
        assert!((v0 - Vector2::new(2.0, 0.0)).norm() < 1e-12);
        assert!((v1 - Vector2::new(-1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn zero_probability_gives_empty_polygon() {
        let mut src = ScriptedSource::new(vec![0.3, 0.7]);
        let poly = draw_star_polygon(&cfg(10, 0.0), &mut src).unwrap();
        assert!(poly.is_empty());
        assert_eq!(src.draws(), 10);
    }

    #[test]
    fn radii_stay_in_range() {
        let tok = ReplayToken { seed: 3, index: 1 };
        let c = cfg(64, 0.7);
        let poly = draw_star_polygon_seeded(&c, tok).unwrap();
        for v in poly.vertices().iter() {
            let r = v.norm();
            assert!(r >= c.min_radius - 1e-12 && r < c.max_radius + 1e-12);
        }
    }

    #[test]
    fn invalid_params_rejected() {
        let mut c = cfg(5, 1.0);
        c.min_radius = 4.0;
        assert!(matches!(
            draw_star_polygon_seeded(&c, ReplayToken { seed: 0, index: 0 }),
            Err(GeneratorError::InvalidParams { .. })
        ));
        let mut c = cfg(5, 1.0);
        c.inclusion_probability = f64::NAN;
        assert!(c.validate().is_err());
        let mut c = cfg(5, 1.0);
        c.center_x = f64::INFINITY;
        assert!(c.validate().is_err());
    }
}
