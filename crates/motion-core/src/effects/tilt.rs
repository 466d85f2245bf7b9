//! Card that tilts toward the pointer, with an elastic settle on leave and a
//! one-shot pulse on touch devices.

use crate::capability::InputCapability;
use crate::chase::Chase;
use crate::constants::*;
use crate::easing::{Direction, Ease};
use crate::timeline::yoyo_phase;
use crate::transform::{Lerp, Transform};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct TiltParams {
    /// Bound on `rotation_x`/`rotation_y`, degrees.
    pub max_deg: f32,
    /// In-plane highlight rotation when the pointer sits at the centre.
    pub highlight_max_deg: f32,
    pub track_sec: f32,
    pub track_ease: Ease,
    pub return_sec: f32,
    pub return_ease: Ease,
    pub perspective_px: f32,
    /// Pulse peak as `(rotation_x, rotation_y, rotation)`.
    pub pulse_peak: Vec3,
    pub pulse_leg_sec: f32,
    pub pulse_ease: Ease,
}

impl Default for TiltParams {
    fn default() -> Self {
        Self {
            max_deg: TILT_MAX_DEG,
            highlight_max_deg: TILT_HIGHLIGHT_MAX_DEG,
            track_sec: TILT_TRACK_SEC,
            track_ease: Ease::power(2, Direction::Out),
            return_sec: TILT_RETURN_SEC,
            return_ease: Ease::elastic_out(TILT_RETURN_AMPLITUDE, TILT_RETURN_PERIOD),
            perspective_px: TILT_PERSPECTIVE_PX,
            pulse_peak: Vec3::new(TOUCH_PULSE_ROTATION_X, TOUCH_PULSE_ROTATION_Y, 0.0),
            pulse_leg_sec: TOUCH_PULSE_HALF_SEC,
            pulse_ease: Ease::power(2, Direction::InOut),
        }
    }
}

/// Viewport-space box of the tracked element, CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Pointer position relative to the rect centre, scaled so the rect edges
/// sit at ±1 and clamped to \[-1, 1\]. Empty axes read 0.
pub fn pointer_offset(pointer: Vec2, rect: &Rect) -> Vec2 {
    let half = Vec2::new(rect.width, rect.height) / 2.0;
    let d = pointer - rect.center();
    let axis = |d: f32, h: f32| {
        if h > 0.0 && d.is_finite() {
            (d / h).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    };
    Vec2::new(axis(d.x, half.x), axis(d.y, half.y))
}

/// Target rotations `(x, y, z)` for a normalized pointer offset.
///
/// Horizontal offset turns the card about Y, vertical offset about X with
/// the sign flipped so the near edge dips toward the cursor. The Z
/// highlight is largest when the card is flat in Y.
pub fn tilt_for_offset(offset: Vec2, params: &TiltParams) -> Vec3 {
    let o = offset.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    let rotation_y = o.x * params.max_deg;
    let rotation_x = -o.y * params.max_deg;
    let flatness = if params.max_deg > 0.0 {
        1.0 - rotation_y.abs() / params.max_deg
    } else {
        1.0
    };
    Vec3::new(rotation_x, rotation_y, flatness * params.highlight_max_deg)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TiltPhase {
    Idle,
    Tracking,
    Returning { elapsed: f32, from: Vec3 },
    Pulsing { elapsed: f32 },
}

#[derive(Clone, Debug)]
pub struct TiltController {
    capability: InputCapability,
    params: TiltParams,
    phase: TiltPhase,
    rotation: Chase<Vec3>,
    /// Last known pointer position; kept across leave so a re-entry
    /// without movement tracks toward it.
    pointer: Option<Vec2>,
}

impl TiltController {
    pub fn new(capability: InputCapability, params: TiltParams) -> Self {
        Self {
            capability,
            rotation: Chase::new(Vec3::ZERO, params.track_sec, params.track_ease),
            params,
            phase: TiltPhase::Idle,
            pointer: None,
        }
    }

    pub fn capability(&self) -> InputCapability {
        self.capability
    }

    pub fn params(&self) -> &TiltParams {
        &self.params
    }

    pub fn phase(&self) -> TiltPhase {
        self.phase
    }

    /// Current rotations `(x, y, z)` in degrees.
    pub fn rotations(&self) -> Vec3 {
        self.rotation.value()
    }

    pub fn transform(&self) -> Transform {
        Transform::IDENTITY.with_rotations(self.rotations())
    }

    /// Whether the element needs per-frame updates.
    pub fn is_animating(&self) -> bool {
        self.phase != TiltPhase::Idle
    }

    pub fn pointer_enter(&mut self) {
        if self.capability != InputCapability::Pointer {
            return;
        }
        if self.phase != TiltPhase::Tracking {
            log::debug!("[tilt] {:?} -> tracking", self.phase);
            self.phase = TiltPhase::Tracking;
        }
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn pointer_leave(&mut self) {
        if self.phase != TiltPhase::Tracking {
            return;
        }
        log::debug!("[tilt] tracking -> returning");
        self.phase = TiltPhase::Returning {
            elapsed: 0.0,
            from: self.rotation.value(),
        };
    }

    /// Fire-and-forget pulse; restarts if one is already running.
    pub fn touch_start(&mut self) {
        if self.capability != InputCapability::Touch {
            return;
        }
        self.phase = TiltPhase::Pulsing { elapsed: 0.0 };
    }

    /// Advance by `dt_sec` against the element's current box and return the
    /// rotations to apply.
    pub fn tick(&mut self, dt_sec: f32, rect: &Rect) -> Vec3 {
        let dt = dt_sec.max(0.0);
        match self.phase {
            TiltPhase::Idle => {}
            TiltPhase::Tracking => {
                if let Some(p) = self.pointer {
                    let target = tilt_for_offset(pointer_offset(p, rect), &self.params);
                    self.rotation.step(target, dt);
                }
            }
            TiltPhase::Returning { elapsed, from } => {
                let elapsed = elapsed + dt;
                if elapsed >= self.params.return_sec {
                    self.settle();
                } else {
                    let k = self.params.return_ease.apply(elapsed / self.params.return_sec);
                    self.rotation.snap(Lerp::lerp(from, Vec3::ZERO, k));
                    self.phase = TiltPhase::Returning { elapsed, from };
                }
            }
            TiltPhase::Pulsing { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= 2.0 * self.params.pulse_leg_sec {
                    self.settle();
                } else {
                    let leg = yoyo_phase(elapsed, self.params.pulse_leg_sec);
                    let k = self.params.pulse_ease.apply(leg);
                    self.rotation.snap(self.params.pulse_peak * k);
                    self.phase = TiltPhase::Pulsing { elapsed };
                }
            }
        }
        self.rotation.value()
    }

    fn settle(&mut self) {
        log::debug!("[tilt] {:?} -> idle", self.phase);
        self.rotation.snap(Vec3::ZERO);
        self.phase = TiltPhase::Idle;
    }
}
