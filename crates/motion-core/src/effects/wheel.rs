//! Ring of cards that turns with scroll.

use crate::constants::{WHEEL_CARD_COUNT, WHEEL_RADIUS_PX, WHEEL_TURN_DEG};
use crate::easing::Ease;
use crate::scroll::{RegionEnd, ScrollRegion};
use crate::timeline::clamp_progress;
use crate::transform::Transform;
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct WheelParams {
    pub card_count: usize,
    pub radius_px: f32,
    /// Total wheel rotation across the region, degrees.
    pub turn_deg: f32,
    pub ease: Ease,
}

impl Default for WheelParams {
    fn default() -> Self {
        Self {
            card_count: WHEEL_CARD_COUNT,
            radius_px: WHEEL_RADIUS_PX,
            turn_deg: WHEEL_TURN_DEG,
            ease: Ease::Linear,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Wheel {
    params: WheelParams,
}

impl Wheel {
    pub fn new(params: WheelParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &WheelParams {
        &self.params
    }

    /// From the container's top at the viewport top to its bottom at the
    /// viewport bottom.
    pub fn region(&self) -> ScrollRegion {
        ScrollRegion::pinned(RegionEnd::ElementBottom)
    }

    /// Resting angle of card `index` on the ring, degrees clockwise from 12
    /// o'clock. Unknown indices sit at 0.
    pub fn card_angle(&self, index: usize) -> f32 {
        if index >= self.params.card_count {
            return 0.0;
        }
        360.0 / self.params.card_count as f32 * index as f32
    }

    /// Rotation of the whole ring at `progress`.
    pub fn wheel_transform(&self, progress: f32) -> Transform {
        let k = self.params.ease.apply(clamp_progress(progress));
        Transform {
            rotation: self.params.turn_deg * k,
            ..Transform::IDENTITY
        }
    }

    /// Static placement of card `index` inside the ring: turn to its angle,
    /// then push out along the rotated up axis.
    pub fn card_css(&self, index: usize) -> String {
        format!(
            "rotate({}deg) translateY(-{}px)",
            self.card_angle(index),
            self.params.radius_px
        )
    }

    /// Centre of card `index` relative to the ring centre at `progress`, in
    /// screen px (y down).
    pub fn card_position(&self, index: usize, progress: f32) -> Vec2 {
        let deg = self.card_angle(index) + self.wheel_transform(progress).rotation;
        let (s, c) = deg.to_radians().sin_cos();
        // (0, -r) rotated clockwise on screen by `deg`
        Vec2::new(self.params.radius_px * s, -self.params.radius_px * c)
    }
}
