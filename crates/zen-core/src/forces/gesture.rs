use glam::{Vec2, Vec3};

use crate::gesture::GestureInput;

/// World-space extent the focus point's `[-1, 1]` range maps onto (viewport aspect).
pub const FOCUS_PROJECTION: Vec2 = Vec2::new(5.0, 3.0);
/// Particles at or beyond this planar distance from the focus feel nothing.
pub const FIELD_RADIUS: f32 = 3.0;
/// Radial impulse for a closed fist (negative pulls inward).
pub const FIST_FORCE: f32 = -0.1;
/// Radial impulse for an open hand.
pub const OPEN_FORCE: f32 = 0.05;

/// Local force field around the projected hand position, resolved once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureField {
    pub active: bool,
    /// Focus point in world units (xy plane).
    pub center: Vec2,
    /// Signed radial impulse already scaled by interaction strength.
    pub strength: f32,
}

impl Default for GestureField {
    fn default() -> Self {
        Self {
            active: false,
            center: Vec2::ZERO,
            strength: 0.0,
        }
    }
}

impl GestureField {
    pub fn from_input(gesture: &GestureInput, interaction_strength: f32) -> Self {
        if !gesture.hands_present {
            return Self::default();
        }
        let force = if gesture.is_fist { FIST_FORCE } else { OPEN_FORCE };
        Self {
            active: true,
            center: gesture.focus_point * FOCUS_PROJECTION,
            strength: force * interaction_strength,
        }
    }

    /// Velocity change for a particle currently at `position`.
    ///
    /// Acts in the xy plane only. A particle sitting exactly on the focus
    /// point has no defined direction and is left alone.
    #[inline]
    pub fn impulse(&self, position: Vec3) -> Vec3 {
        if !self.active {
            return Vec3::ZERO;
        }
        let offset = position.truncate() - self.center;
        let dist = offset.length();
        if dist >= FIELD_RADIUS || dist <= f32::EPSILON {
            return Vec3::ZERO;
        }
        (offset / dist * self.strength).extend(0.0)
    }
}
