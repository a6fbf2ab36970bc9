use glam::Vec3;
use rand::Rng;

use crate::math::offset_lightness;

/// Half-extent of the cube particles are scattered into on (re)initialisation.
pub const SCATTER_HALF_EXTENT: f32 = 5.0;

/// SoA particle storage. All four arrays always have the same length.
#[derive(Clone, Debug)]
pub struct ParticleSet {
    pub position: Vec<Vec3>,
    /// Persists across frames.
    pub velocity: Vec<Vec3>,
    /// rgb in `[0, 1]`, fixed until the next reinitialisation.
    pub color: Vec<Vec3>,
    pub size: Vec<f32>,
}

impl ParticleSet {
    /// Zeroed set: particles at the origin, at rest, black, size 1.
    pub fn new(count: usize) -> Self {
        Self {
            position: vec![Vec3::ZERO; count],
            velocity: vec![Vec3::ZERO; count],
            color: vec![Vec3::ZERO; count],
            size: vec![1.0; count],
        }
    }

    /// Fresh set scattered through the spawn cube.
    ///
    /// Sizes are `base_size * (0.5 + u)` and colors are `base_color` with an
    /// independent lightness offset in `[-0.1, 0.1)` per particle.
    pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize, base_color: Vec3, base_size: f32) -> Self {
        let mut set = Self::new(count);
        for i in 0..count {
            set.position[i] = Vec3::new(
                (rng.gen::<f32>() - 0.5) * SCATTER_HALF_EXTENT * 2.0,
                (rng.gen::<f32>() - 0.5) * SCATTER_HALF_EXTENT * 2.0,
                (rng.gen::<f32>() - 0.5) * SCATTER_HALF_EXTENT * 2.0,
            );
            let lightness = (rng.gen::<f32>() - 0.5) * 0.2;
            set.color[i] = offset_lightness(base_color, lightness).clamp(Vec3::ZERO, Vec3::ONE);
            set.size[i] = base_size * (0.5 + rng.gen::<f32>());
        }
        set
    }

    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Whether the four per-particle arrays agree on their length.
    pub fn is_consistent(&self) -> bool {
        let n = self.position.len();
        self.velocity.len() == n && self.color.len() == n && self.size.len() == n
    }
}
