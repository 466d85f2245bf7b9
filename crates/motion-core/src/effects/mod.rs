pub mod flip_stack;
pub mod reveal;
pub mod tilt;
pub mod wheel;

pub use flip_stack::{FlipStack, FlipStackParams};
pub use reveal::{RevealGrid, RevealParams, RowState};
pub use tilt::{Rect, TiltController, TiltParams, TiltPhase};
pub use wheel::{Wheel, WheelParams};

/// Effect a `data-fx` section asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    FlipStack,
    Tilt,
    Wheel,
    Reveal,
}

impl EffectKind {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "flip-stack" => Some(EffectKind::FlipStack),
            "tilt" => Some(EffectKind::Tilt),
            "wheel" => Some(EffectKind::Wheel),
            "reveal" => Some(EffectKind::Reveal),
            _ => None,
        }
    }
}
