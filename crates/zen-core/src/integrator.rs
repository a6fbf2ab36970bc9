//! Per-frame particle integrator.
//!
//! One call to [`step`] advances every particle by one frame: the target is
//! scaled by the frame's global scale and jittered, the gesture field and a
//! spring toward the target add to the velocity, the velocity is damped and
//! the position moves by it (explicit Euler with an implicit unit timestep,
//! so the response is tied to the frame rate). The loop is O(n) and does not
//! allocate.

use glam::Vec3;

use crate::buffers::FrameBuffers;
use crate::config::SimConfig;
use crate::error::StepError;
use crate::forces::GestureField;
use crate::gesture::GestureInput;
use crate::particle::ParticleSet;

/// Per-frame multiplicative velocity decay.
pub const DAMPING: f32 = 0.92;
/// Amplitude of the idle breathing oscillation.
pub const BREATHING_AMPLITUDE: f32 = 0.1;

/// Clock values a step reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Drives the idle breathing.
    pub elapsed: f32,
    /// Drives the per-particle target jitter.
    pub noise_phase: f32,
}

impl FrameTime {
    /// Breathing and jitter both follow the elapsed time.
    pub fn at(elapsed: f32) -> Self {
        Self {
            elapsed,
            noise_phase: elapsed,
        }
    }
}

/// Uniform scale applied to every target this frame.
///
/// With hands present an open hand (pinch 0) expands to 1.5 and a closed one
/// (pinch 1) contracts to 0.2, then the two-hand separation multiplies by
/// `0.5 + separation`. Without hands the swarm breathes as `1 + 0.1 sin(t)`.
pub fn global_scale(gesture: &GestureInput, elapsed: f32) -> f32 {
    if gesture.hands_present {
        let mut scale = 1.5 - gesture.pinch_strength * 1.3;
        if gesture.hand_separation > 0.0 {
            scale *= 0.5 + gesture.hand_separation;
        }
        scale
    } else {
        1.0 + elapsed.sin() * BREATHING_AMPLITUDE
    }
}

/// Spring gain toward the target.
pub fn lerp_speed(interaction_strength: f32) -> f32 {
    0.03 + interaction_strength * 0.05
}

/// Per-particle target jitter. The particle index offsets the phase so
/// neighbours drift independently.
#[inline]
pub fn noise_offset(index: usize, phase: f32, amplitude: f32) -> Vec3 {
    let i = index as f32;
    Vec3::new(
        (phase * 2.0 + i).sin(),
        (phase * 1.5 + i).cos(),
        (phase * 0.5 + i).sin(),
    ) * amplitude
}

/// Everything shared by all particles within one frame, resolved once.
#[derive(Clone, Copy, Debug)]
struct FrameParams {
    scale: f32,
    lerp: f32,
    noise_amp: f32,
    noise_phase: f32,
    field: GestureField,
}

impl FrameParams {
    fn new(gesture: &GestureInput, config: &SimConfig, time: FrameTime) -> Self {
        Self {
            scale: global_scale(gesture, time.elapsed),
            lerp: lerp_speed(config.interaction_strength),
            noise_amp: config.noise_strength * 0.02,
            noise_phase: time.noise_phase,
            field: GestureField::from_input(gesture, config.interaction_strength),
        }
    }

    #[inline]
    fn advance(&self, index: usize, target: Vec3, pos: &mut Vec3, vel: &mut Vec3, out: &mut Vec3) {
        let mut goal = target * self.scale;
        if self.noise_amp != 0.0 {
            goal += noise_offset(index, self.noise_phase, self.noise_amp);
        }

        // The field samples the current position, not the target.
        *vel += self.field.impulse(*pos);
        *vel += (goal - *pos) * self.lerp;
        *vel *= DAMPING;
        *pos += *vel;
        *out = *pos;
    }
}

/// Advance all particles one frame and publish their positions into `out`.
///
/// Length mismatches between the particle arrays, `targets` and `out` are
/// rejected before any particle is touched.
pub fn step(
    particles: &mut ParticleSet,
    targets: &[Vec3],
    gesture: &GestureInput,
    config: &SimConfig,
    time: FrameTime,
    out: &mut FrameBuffers,
) -> Result<(), StepError> {
    let count = particles.len();
    if !particles.is_consistent() || targets.len() != count {
        return Err(StepError::LengthMismatch {
            particles: count,
            targets: targets.len(),
        });
    }
    if out.len() != count {
        return Err(StepError::BufferMismatch {
            particles: count,
            buffers: out.len(),
        });
    }

    let params = FrameParams::new(gesture, config, time);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        particles
            .position
            .par_iter_mut()
            .zip(particles.velocity.par_iter_mut())
            .zip(out.positions.par_iter_mut())
            .enumerate()
            .for_each(|(i, ((pos, vel), slot))| params.advance(i, targets[i], pos, vel, slot));
    }

    #[cfg(not(feature = "parallel"))]
    {
        let lanes = particles
            .position
            .iter_mut()
            .zip(particles.velocity.iter_mut())
            .zip(out.positions.iter_mut());
        for (i, ((pos, vel), slot)) in lanes.enumerate() {
            params.advance(i, targets[i], pos, vel, slot);
        }
    }

    Ok(())
}
