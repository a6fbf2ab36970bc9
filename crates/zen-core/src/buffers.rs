use glam::Vec3;

use crate::particle::ParticleSet;

/// Presenter-facing attribute buffers, index-aligned per particle.
///
/// The integrator writes `positions` at the end of every step; colors and
/// sizes only change when the particle set is rebuilt. The Presenter reads
/// them after the frame's step has returned, never during one.
#[derive(Clone, Debug, Default)]
pub struct FrameBuffers {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) colors: Vec<Vec3>,
    pub(crate) sizes: Vec<f32>,
}

impl FrameBuffers {
    pub fn new(count: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; count],
            colors: vec![Vec3::ZERO; count],
            sizes: vec![0.0; count],
        }
    }

    /// Buffers mirroring every attribute of `particles`.
    pub fn from_particles(particles: &ParticleSet) -> Self {
        let mut buffers = Self::default();
        buffers.publish_attributes(particles);
        buffers
    }

    /// Copy all attributes, resizing to the particle count.
    pub fn publish_attributes(&mut self, particles: &ParticleSet) {
        self.positions.clear();
        self.positions.extend_from_slice(&particles.position);
        self.colors.clear();
        self.colors.extend_from_slice(&particles.color);
        self.sizes.clear();
        self.sizes.extend_from_slice(&particles.size);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// `3 * len` floats, xyz per particle.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// `3 * len` floats, rgb per particle.
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }
}
