//! Shape selection and target-set generation.
//!
//! [`Shape`] names one of the seven target clouds. [`generate_targets_with`]
//! draws `count` independent points from the shape's sampler and scales
//! them; [`TargetSet`] caches the result together with what produced it.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::shapes::primitives::*;

/// Scale applied to every shape unless the caller asks for another.
pub const DEFAULT_SCALE: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Shape {
    Sphere,
    Cube,
    Heart,
    Flower,
    Saturn,
    Buddha,
    Fireworks,
}

/// Region every unscaled sample of a shape falls inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    /// Ball centred at the origin.
    Ball(f32),
    /// Axis-aligned box `(min, max)`.
    Box(Vec3, Vec3),
}

impl Bounds {
    /// Whether `p` lies inside these bounds scaled by `scale`, with slack `tolerance`.
    pub fn contains(&self, p: Vec3, scale: f32, tolerance: f32) -> bool {
        match *self {
            Bounds::Ball(radius) => p.length() <= radius * scale + tolerance,
            Bounds::Box(min, max) => {
                let lo = min * scale - Vec3::splat(tolerance);
                let hi = max * scale + Vec3::splat(tolerance);
                p.cmpge(lo).all() && p.cmple(hi).all()
            }
        }
    }
}

impl Shape {
    /// All shapes, in the order the control surface lists them.
    pub const ALL: [Shape; 7] = [
        Shape::Sphere,
        Shape::Cube,
        Shape::Heart,
        Shape::Flower,
        Shape::Saturn,
        Shape::Buddha,
        Shape::Fireworks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Sphere => "Sphere",
            Shape::Cube => "Cube",
            Shape::Heart => "Heart",
            Shape::Flower => "Flower",
            Shape::Saturn => "Saturn",
            Shape::Buddha => "Buddha",
            Shape::Fireworks => "Fireworks",
        }
    }

    /// Draw one unscaled point of this shape.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        match self {
            Shape::Sphere => sample_sphere(rng),
            Shape::Cube => sample_cube(rng),
            Shape::Heart => sample_heart(rng),
            Shape::Flower => sample_flower(rng),
            Shape::Saturn => sample_saturn(rng),
            Shape::Buddha => sample_buddha(rng),
            Shape::Fireworks => sample_fireworks(rng),
        }
    }

    /// Bounding region of the unscaled shape.
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Sphere => Bounds::Ball(1.0),
            Shape::Cube => Bounds::Box(Vec3::splat(-0.75), Vec3::splat(0.75)),
            // hy spans [-17, ~12] before the /16 * 1.2 normalisation
            Shape::Heart => Bounds::Box(Vec3::new(-1.2, -1.275, -0.2), Vec3::new(1.2, 0.9, 0.2)),
            Shape::Flower => Bounds::Box(Vec3::new(-1.2, -1.2, -0.35), Vec3::new(1.2, 1.2, 0.35)),
            Shape::Saturn => Bounds::Ball(2.0 + 0.025),
            Shape::Buddha => Bounds::Box(Vec3::new(-0.8, -0.5, -0.25), Vec3::new(0.8, 0.9, 0.25)),
            Shape::Fireworks => Bounds::Ball(2.7),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownShape(s.to_string()))
    }
}

impl TryFrom<String> for Shape {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shape> for String {
    fn from(shape: Shape) -> Self {
        shape.name().to_string()
    }
}

/// Generate `count` target points for `shape`, multiplied by `scale`.
///
/// Every point is drawn independently from `rng`, so two calls produce
/// statistically similar but different clouds. `count == 0` yields an empty
/// vector.
pub fn generate_targets_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    shape: Shape,
    scale: f32,
) -> Vec<Vec3> {
    debug_assert!(scale > 0.0, "shape scale must be positive, got {scale}");
    (0..count).map(|_| shape.sample(rng) * scale).collect()
}

/// [`generate_targets_with`] using the thread-local entropy source.
pub fn generate_targets(count: usize, shape: Shape, scale: f32) -> Vec<Vec3> {
    generate_targets_with(&mut rand::thread_rng(), count, shape, scale)
}

/// Cached target cloud for the active shape.
#[derive(Clone, Debug)]
pub struct TargetSet {
    pub shape: Shape,
    pub scale: f32,
    pub points: Vec<Vec3>,
}

impl TargetSet {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, shape: Shape, scale: f32) -> Self {
        Self {
            shape,
            scale,
            points: generate_targets_with(rng, count, shape, scale),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
