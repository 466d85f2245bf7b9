//! Scroll regions: turning an element's viewport rect into a progress scalar.
//!
//! All regions start when the element's top meets the viewport top. Inputs
//! are CSS pixels as reported by `getBoundingClientRect`.

use crate::timeline::clamp_progress;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionEnd {
    /// Ends this many viewport heights after the start (`'+=200%'`).
    Viewports(f32),
    /// Ends when the element's bottom meets the viewport bottom.
    ElementBottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    pub end: RegionEnd,
    pub pin: bool,
}

impl ScrollRegion {
    pub const fn pinned(end: RegionEnd) -> Self {
        Self { end, pin: true }
    }

    /// Scroll distance in px between start and end.
    pub fn distance(&self, element_height: f32, viewport_height: f32) -> f32 {
        match self.end {
            RegionEnd::Viewports(n) => n * viewport_height,
            RegionEnd::ElementBottom => element_height - viewport_height,
        }
    }

    /// Clamped progress through the region. A degenerate region (no scroll
    /// distance) reads 0 until the start is passed and 1 afterwards.
    pub fn progress(&self, rect_top: f32, element_height: f32, viewport_height: f32) -> f32 {
        let scrolled = -rect_top;
        let distance = self.distance(element_height, viewport_height);
        if distance.is_nan() || distance <= 0.0 {
            return if scrolled > 0.0 { 1.0 } else { 0.0 };
        }
        clamp_progress(scrolled / distance)
    }

    /// Height, in viewport units, the pinned section must occupy so that
    /// its sticky content stays in view for the whole region. Regions that
    /// end at the element's own bottom are sized by their markup.
    pub fn pin_height_vh(&self) -> Option<f32> {
        match (self.pin, self.end) {
            (true, RegionEnd::Viewports(n)) => Some((1.0 + n) * 100.0),
            _ => None,
        }
    }
}

/// "Element top reaches `fraction` of the viewport height" (`'top 50%'`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportThreshold {
    pub fraction: f32,
}

impl ViewportThreshold {
    #[inline]
    pub fn reached(&self, rect_top: f32, viewport_height: f32) -> bool {
        rect_top <= self.fraction * viewport_height
    }
}
