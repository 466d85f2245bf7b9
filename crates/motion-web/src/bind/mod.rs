pub mod flip_stack;
pub mod reveal;
pub mod tilt;
pub mod wheel;

pub use flip_stack::FlipStackBinding;
pub use reveal::RevealBinding;
pub use tilt::TiltBinding;
pub use wheel::WheelBinding;

/// Per-frame inputs shared by every binding.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    pub dt_sec: f32,
    /// Seconds since mount.
    pub time_sec: f64,
    pub viewport_height: f32,
}
