//! Particle swarm core: procedural target shapes, a per-frame integrator
//! that pulls every particle toward its (scaled, jittered) target while
//! reacting to hand gestures, and the buffers a renderer reads.
//!
//! Rendering, UI widgets and hand tracking live outside this crate; they
//! hand in a [`config::SimConfig`] and [`gesture::GestureInput`] readings and
//! read [`buffers::FrameBuffers`] back.

pub mod buffers;
pub mod config;
pub mod error;
pub mod forces;
pub mod gesture;
pub mod integrator;
pub mod math;
pub mod particle;
pub mod shapes;
pub mod simulation;
pub mod timestep;

pub use buffers::FrameBuffers;
pub use config::SimConfig;
pub use error::{ConfigError, StepError};
pub use gesture::{GestureInput, GestureSlot};
pub use integrator::FrameTime;
pub use particle::ParticleSet;
pub use shapes::{Shape, TargetSet};
pub use simulation::{ConfigChange, Simulation};
