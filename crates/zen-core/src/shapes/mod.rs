/// Procedural target shapes.
///
/// Seven point-cloud samplers (sphere, cube, heart, flower, saturn, buddha,
/// fireworks) and a dispatcher that turns a [`dispatcher::Shape`] and a
/// particle count into a scaled target set.
pub mod primitives;
pub mod dispatcher;

pub use dispatcher::{generate_targets, generate_targets_with, Bounds, Shape, TargetSet, DEFAULT_SCALE};
