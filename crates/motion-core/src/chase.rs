use crate::constants::SCRUB_LAG_SEC;
use crate::easing::{Direction, Ease};
use crate::transform::Lerp;

/// Frame-rate aware smoothing toward a moving target.
///
/// Every step behaves like a fresh tween from the current value to the
/// target that has run for `dt` of its `duration`.
#[derive(Clone, Copy, Debug)]
pub struct Chase<T> {
    value: T,
    duration: f32,
    ease: Ease,
}

impl<T: Lerp> Chase<T> {
    pub fn new(initial: T, duration: f32, ease: Ease) -> Self {
        Self {
            value: initial,
            duration,
            ease,
        }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Jump straight to `value`.
    pub fn snap(&mut self, value: T) {
        self.value = value;
    }

    pub fn step(&mut self, target: T, dt_sec: f32) -> T {
        let k = if self.duration <= 0.0 {
            1.0
        } else {
            self.ease.apply(dt_sec.max(0.0) / self.duration)
        };
        self.value = self.value.lerp(target, k);
        self.value
    }
}

/// Scrub lag applied to scroll progress (`scrub: 1`).
pub fn scrub(initial: f32) -> Chase<f32> {
    Chase::new(initial, SCRUB_LAG_SEC, Ease::power(3, Direction::Out))
}
