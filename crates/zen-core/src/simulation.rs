use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::buffers::FrameBuffers;
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::gesture::{GestureInput, GestureSlot};
use crate::integrator::{self, FrameTime};
use crate::particle::ParticleSet;
use crate::shapes::{Shape, TargetSet, DEFAULT_SCALE};
use crate::timestep::FixedTimestep;

/// What applying a new config did to the simulation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigChange {
    /// Nothing differed.
    Unchanged,
    /// Only per-frame parameters changed; stored for the next step.
    Parameters,
    /// The shape changed; targets were regenerated, particles keep their momentum.
    Retargeted,
    /// Count, color or size changed; particles and targets were rebuilt.
    Reinitialized,
}

/// Owns the particle state, the cached targets and the Presenter buffers,
/// and drives the integrator once per frame.
pub struct Simulation {
    config: SimConfig,
    particles: ParticleSet,
    targets: TargetSet,
    buffers: FrameBuffers,
    rng: Box<dyn RngCore + Send>,
    /// Clock for [`Simulation::advance`].
    elapsed: f32,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, Box::new(StdRng::from_entropy()))
    }

    /// Build with an injected random source, e.g. a seeded one for tests.
    pub fn with_rng(config: SimConfig, mut rng: Box<dyn RngCore + Send>) -> Result<Self, ConfigError> {
        config.validate()?;
        let base_color = config.base_rgb()?;
        let particles = ParticleSet::scatter(&mut *rng, config.particle_count, base_color, config.size);
        let targets = TargetSet::generate(&mut *rng, config.particle_count, config.shape, DEFAULT_SCALE);
        let buffers = FrameBuffers::from_particles(&particles);
        info!(
            "simulation created: {} particles, shape {}",
            config.particle_count, config.shape
        );
        Ok(Self {
            config,
            particles,
            targets,
            buffers,
            rng,
            elapsed: 0.0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    /// Read-only view for the Presenter. Valid until the next mutating call.
    pub fn buffers(&self) -> &FrameBuffers {
        &self.buffers
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Validate and adopt `config`, rebuilding whatever it invalidates.
    ///
    /// On error nothing is changed.
    pub fn apply_config(&mut self, config: SimConfig) -> Result<ConfigChange, ConfigError> {
        config.validate()?;
        if config == self.config {
            return Ok(ConfigChange::Unchanged);
        }

        let rebuild = config.particle_count != self.config.particle_count
            || config.base_color != self.config.base_color
            || config.size != self.config.size;
        let retarget = config.shape != self.config.shape;
        debug!("applying config {:?} -> {:?}", self.config, config);
        self.config = config;

        if rebuild {
            self.reinitialize()?;
            Ok(ConfigChange::Reinitialized)
        } else if retarget {
            self.regenerate_targets();
            Ok(ConfigChange::Retargeted)
        } else {
            Ok(ConfigChange::Parameters)
        }
    }

    /// [`Simulation::apply_config`] for a driver that also feeds `slot`.
    ///
    /// While gesture control is off the slot is reset to idle, so switching
    /// it back on starts from "no hands" rather than the last tracker reading.
    pub fn apply_config_with_slot(
        &mut self,
        config: SimConfig,
        slot: &GestureSlot,
    ) -> Result<ConfigChange, ConfigError> {
        let change = self.apply_config(config)?;
        if !self.config.enable_gesture_control {
            slot.clear();
        }
        Ok(change)
    }

    /// Switch to `shape`, keeping everything else.
    pub fn set_shape(&mut self, shape: Shape) -> Result<ConfigChange, ConfigError> {
        let config = SimConfig {
            shape,
            ..self.config.clone()
        };
        self.apply_config(config)
    }

    /// Rescatter every particle and regenerate the targets for the current config.
    pub fn reinitialize(&mut self) -> Result<(), ConfigError> {
        let base_color = self.config.base_rgb()?;
        self.particles = ParticleSet::scatter(
            &mut *self.rng,
            self.config.particle_count,
            base_color,
            self.config.size,
        );
        self.buffers.publish_attributes(&self.particles);
        self.regenerate_targets();
        info!("particles reinitialized: {}", self.particles.len());
        Ok(())
    }

    fn regenerate_targets(&mut self) {
        self.targets = TargetSet::generate(
            &mut *self.rng,
            self.config.particle_count,
            self.config.shape,
            DEFAULT_SCALE,
        );
        info!("targets regenerated for {}", self.config.shape);
    }

    /// Run one integrator step and publish positions.
    ///
    /// With gesture control disabled the reading is ignored and the swarm
    /// breathes. Returns `false` when the frame was skipped to resynchronise
    /// inconsistent state.
    pub fn frame(&mut self, gesture: &GestureInput, time: FrameTime) -> bool {
        let gesture = if self.config.enable_gesture_control {
            *gesture
        } else {
            GestureInput::idle()
        };

        let result = integrator::step(
            &mut self.particles,
            &self.targets.points,
            &gesture,
            &self.config,
            time,
            &mut self.buffers,
        );
        match result {
            Ok(()) => true,
            Err(err) => {
                warn!("skipping frame: {err}");
                self.resync();
                false
            }
        }
    }

    /// [`Simulation::frame`] with the newest reading from `slot`.
    ///
    /// Readings published while gesture control is off are dropped.
    pub fn frame_from_slot(&mut self, slot: &GestureSlot, time: FrameTime) -> bool {
        if !self.config.enable_gesture_control {
            slot.clear();
        }
        let gesture = slot.latest();
        self.frame(&gesture, time)
    }

    /// Fixed-timestep mode: run as many steps as `clock` grants for `dt`
    /// seconds of wall time. Returns the number of steps taken.
    pub fn advance(&mut self, gesture: &GestureInput, dt: f32, clock: &mut FixedTimestep) -> u32 {
        let steps = clock.advance(dt);
        for _ in 0..steps {
            self.elapsed += clock.step_seconds;
            self.frame(gesture, FrameTime::at(self.elapsed));
        }
        steps
    }

    fn resync(&mut self) {
        // The config was validated when adopted, so the color parses.
        if let Err(err) = self.reinitialize() {
            warn!("resync failed: {err}");
        }
    }
}
