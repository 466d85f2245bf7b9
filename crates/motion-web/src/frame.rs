use crate::bind::{FlipStackBinding, FrameClock, RevealBinding, TiltBinding, WheelBinding};
use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use instant::Instant;

/// Every effect bound on the page, updated once per animation frame.
pub struct FrameContext {
    pub flip_stacks: Vec<FlipStackBinding>,
    pub tilts: Vec<TiltBinding>,
    pub wheels: Vec<WheelBinding>,
    pub reveals: Vec<RevealBinding>,

    pub mounted_at: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            flip_stacks: Vec::new(),
            tilts: Vec::new(),
            wheels: Vec::new(),
            reveals: Vec::new(),
            mounted_at: now,
            last_instant: now,
        }
    }

    pub fn len(&self) -> usize {
        self.flip_stacks.len() + self.tilts.len() + self.wheels.len() + self.reveals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop bindings whose section has left the document; their listeners
    /// and inline styles go with them.
    pub fn release_detached(&mut self) {
        let before = self.len();
        self.flip_stacks.retain(FlipStackBinding::is_connected);
        self.tilts.retain(TiltBinding::is_connected);
        self.wheels.retain(WheelBinding::is_connected);
        self.reveals.retain(RevealBinding::is_connected);
        let released = before - self.len();
        if released > 0 {
            log::info!("[frame] released {} detached effect(s)", released);
        }
    }

    /// Advance every effect. Returns `false` once nothing is left to drive.
    pub fn frame(&mut self) -> bool {
        self.release_detached();
        if self.is_empty() {
            return false;
        }

        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let clock = FrameClock {
            dt_sec: dt.as_secs_f32().min(MAX_FRAME_DT_SEC),
            time_sec: (now - self.mounted_at).as_secs_f64(),
            viewport_height: dom::viewport_height(),
        };

        for b in &mut self.flip_stacks {
            b.update(&clock);
        }
        for b in &mut self.wheels {
            b.update(&clock);
        }
        for b in &mut self.tilts {
            b.update(&clock);
        }
        for b in &mut self.reveals {
            b.update(&clock);
        }
        true
    }
}
