//! Gesture readings and the latest-value channel that carries them.
//!
//! A sensor publishes whole [`GestureInput`] snapshots into a [`GestureSlot`]
//! at its own cadence; the frame loop copies out whatever is newest. There is
//! no queue: a new reading overwrites the old one and stale reads are normal.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use parking_lot::RwLock;

/// Pinch strength above which a hand counts as a fist.
pub const FIST_THRESHOLD: f32 = 0.7;
/// Separation reported when fewer than two hands are visible.
pub const NEUTRAL_SEPARATION: f32 = 0.5;

/// One read-only gesture snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureInput {
    pub hands_present: bool,
    /// 0 = fully open, 1 = fully closed.
    pub pinch_strength: f32,
    pub hand_separation: f32,
    /// Interaction point, each axis in `[-1, 1]`.
    pub focus_point: Vec2,
    pub is_fist: bool,
}

impl Default for GestureInput {
    fn default() -> Self {
        Self::idle()
    }
}

impl GestureInput {
    /// No hands in view.
    pub const fn idle() -> Self {
        Self {
            hands_present: false,
            pinch_strength: 0.0,
            hand_separation: NEUTRAL_SEPARATION,
            focus_point: Vec2::ZERO,
            is_fist: false,
        }
    }

    /// Reading with hands present. Inputs are clamped to their ranges and
    /// `is_fist` is derived from the pinch strength.
    pub fn new(pinch_strength: f32, hand_separation: f32, focus_point: Vec2) -> Self {
        let pinch = if pinch_strength.is_nan() { 0.0 } else { pinch_strength.clamp(0.0, 1.0) };
        let separation = if hand_separation.is_finite() {
            hand_separation.max(0.0)
        } else {
            NEUTRAL_SEPARATION
        };
        Self {
            hands_present: true,
            pinch_strength: pinch,
            hand_separation: separation,
            focus_point: focus_point.clamp(Vec2::NEG_ONE, Vec2::ONE),
            is_fist: pinch > FIST_THRESHOLD,
        }
    }

    /// Reduce tracked hands (mirrored webcam, normalised image coordinates)
    /// to one reading.
    ///
    /// Pinch is the thumb-tip to index-tip distance mapped from roughly 0.02
    /// (closed) .. 0.17 (open), averaged over hands. The focus point is the
    /// mean wrist position flipped into `[-1, 1]` world orientation. The
    /// separation is the wrist-to-wrist distance when exactly two hands are
    /// visible.
    pub fn from_hands(hands: &[HandLandmarks]) -> Self {
        if hands.is_empty() {
            return Self::idle();
        }
        let n = hands.len() as f32;

        let pinch = hands.iter().map(HandLandmarks::closedness).sum::<f32>() / n;

        let wrist_sum = hands.iter().fold(Vec2::ZERO, |acc, h| acc + h.wrist().truncate());
        let mean = wrist_sum / n;
        let focus = Vec2::new((1.0 - mean.x) * 2.0 - 1.0, -(mean.y * 2.0 - 1.0));

        let separation = match hands {
            [a, b] => a.wrist().truncate().distance(b.wrist().truncate()),
            _ => NEUTRAL_SEPARATION,
        };

        Self::new(pinch, separation, focus)
    }
}

/// The 21 landmarks of one tracked hand, in normalised image coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks(pub [Vec3; HandLandmarks::COUNT]);

impl HandLandmarks {
    pub const COUNT: usize = 21;
    pub const WRIST: usize = 0;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_TIP: usize = 8;

    /// Build from a flat `[x, y, z, ...]` slice of exactly 63 floats.
    pub fn from_flat(flat: &[f32]) -> Option<Self> {
        let points: &[Vec3] = bytemuck::try_cast_slice(flat).ok()?;
        let points: [Vec3; Self::COUNT] = points.try_into().ok()?;
        Some(Self(points))
    }

    pub fn wrist(&self) -> Vec3 {
        self.0[Self::WRIST]
    }

    /// 0 for an open hand, 1 for touching thumb and index tips.
    pub fn closedness(&self) -> f32 {
        let dist = self.0[Self::THUMB_TIP].distance(self.0[Self::INDEX_TIP]);
        (1.0 - (dist - 0.02) / 0.15).clamp(0.0, 1.0)
    }
}

/// Single-slot, overwrite-on-write, read-latest channel.
///
/// Clones share the slot. Writers replace the whole snapshot under the lock,
/// so a reader never observes a half-written reading.
#[derive(Clone, Debug, Default)]
pub struct GestureSlot {
    inner: Arc<RwLock<GestureInput>>,
}

impl GestureSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, reading: GestureInput) {
        *self.inner.write() = reading;
    }

    /// Copy of the newest reading.
    pub fn latest(&self) -> GestureInput {
        *self.inner.read()
    }

    /// Publish "no hands", e.g. when the sensor is switched off.
    pub fn clear(&self) {
        self.publish(GestureInput::idle());
    }
}

/// A gesture sensor polled outside the frame loop.
pub trait GestureSource {
    /// Newest reading, or `None` when nothing new has been produced.
    fn poll(&mut self) -> Option<GestureInput>;

    /// `false` once the sensor failed or was disabled.
    fn is_available(&self) -> bool {
        true
    }
}

/// Move the newest reading of `source` into `slot`.
///
/// An unavailable source publishes idle so the simulation falls back to
/// breathing instead of reacting to a frozen reading.
pub fn pump<S: GestureSource + ?Sized>(source: &mut S, slot: &GestureSlot) {
    if !source.is_available() {
        slot.clear();
        return;
    }
    if let Some(reading) = source.poll() {
        slot.publish(reading);
    }
}
