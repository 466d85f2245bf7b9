//! Stacked cards that fan out, drop, return and flip as the page scrolls.
//!
//! Two tracks share the same scroll start: the escape track (fan out
//! horizontally, then drop and shrink) spans the first
//! `escape_viewports` of scroll, the return track (back to centre, then
//! a 3D flip) spans `return_viewports`. Both are merged onto one timeline
//! measured in viewport heights.

use crate::constants::*;
use crate::easing::{Direction, Ease};
use crate::scroll::{RegionEnd, ScrollRegion};
use crate::timeline::{yoyo_phase, Timeline, TimelineBuilder};
use crate::transform::{Props, Transform};

#[derive(Clone, Debug)]
pub struct FlipStackParams {
    pub card_count: usize,
    pub center_index: usize,
    pub spread_x_percent: f32,
    pub drop_y_percent: f32,
    pub drop_scale: f32,
    pub drop_rotation_x: f32,
    pub escape_stagger: f32,
    pub return_stagger: f32,
    pub turn_rotation_y: f32,
    pub turn_rotation_x: f32,
    pub ease: Ease,
    pub escape_viewports: f32,
    pub return_viewports: f32,
    pub float_y_percent: f32,
    pub float_half_period_sec: f32,
    pub float_half_period_step_sec: f32,
}

impl Default for FlipStackParams {
    fn default() -> Self {
        Self {
            card_count: FLIP_CARD_COUNT,
            center_index: FLIP_CENTER_INDEX,
            spread_x_percent: FLIP_SPREAD_X_PERCENT,
            drop_y_percent: FLIP_DROP_Y_PERCENT,
            drop_scale: FLIP_DROP_SCALE,
            drop_rotation_x: FLIP_DROP_ROTATION_X,
            escape_stagger: FLIP_ESCAPE_STAGGER,
            return_stagger: FLIP_RETURN_STAGGER,
            turn_rotation_y: FLIP_TURN_ROTATION_Y,
            turn_rotation_x: FLIP_TURN_ROTATION_X,
            ease: Ease::default(),
            escape_viewports: FLIP_ESCAPE_VIEWPORTS,
            return_viewports: FLIP_RETURN_VIEWPORTS,
            float_y_percent: FLOAT_Y_PERCENT,
            float_half_period_sec: FLOAT_BASE_HALF_PERIOD_SEC,
            float_half_period_step_sec: FLOAT_HALF_PERIOD_STEP_SEC,
        }
    }
}

/// Fan out by distance from the centre card, then drop, shrink and tip back.
pub fn escape_track(params: &FlipStackParams) -> TimelineBuilder {
    let mut tl = TimelineBuilder::new();
    for i in 0..params.card_count {
        let offset = i as f32 - params.center_index as f32;
        let lag = i as f32 * params.escape_stagger;
        tl.to(
            i,
            Props::new().x_percent(offset * params.spread_x_percent),
            0.5,
            lag,
            params.ease,
        );
        tl.to(
            i,
            Props::new()
                .y_percent(params.drop_y_percent)
                .scale(params.drop_scale)
                .rotation_x(params.drop_rotation_x),
            0.5,
            0.5 + lag,
            params.ease,
        );
    }
    tl
}

/// Gather back to the centre, then turn over.
pub fn return_track(params: &FlipStackParams) -> TimelineBuilder {
    let mut tl = TimelineBuilder::new();
    for i in 0..params.card_count {
        let lag = i as f32 * params.return_stagger;
        tl.to(
            i,
            Props::new()
                .x_percent(0.0)
                .y_percent(0.0)
                .scale(1.0)
                .rotation_x(0.0),
            0.33,
            1.0 + lag,
            params.ease,
        );
        tl.to(
            i,
            Props::new()
                .rotation_y(params.turn_rotation_y)
                .rotation_x(params.turn_rotation_x),
            0.67,
            1.33 + lag,
            params.ease,
        );
    }
    tl
}

/// The escape track on its own time axis.
pub fn escape_timeline(params: &FlipStackParams) -> Timeline {
    escape_track(params).build()
}

#[derive(Clone, Debug)]
pub struct FlipStack {
    params: FlipStackParams,
    timeline: Timeline,
    region: ScrollRegion,
}

impl Default for FlipStack {
    fn default() -> Self {
        Self::new(FlipStackParams::default())
    }
}

impl FlipStack {
    pub fn new(params: FlipStackParams) -> Self {
        let mut scene = TimelineBuilder::new();
        scene
            .track(&escape_track(&params), params.escape_viewports)
            .track(&return_track(&params), params.return_viewports);
        let viewports = params.escape_viewports.max(params.return_viewports);
        Self {
            timeline: scene.build(),
            region: ScrollRegion::pinned(RegionEnd::Viewports(viewports)),
            params,
        }
    }

    pub fn params(&self) -> &FlipStackParams {
        &self.params
    }

    pub fn region(&self) -> ScrollRegion {
        self.region
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Scroll-driven pose of card `index` at region progress.
    pub fn card_transform(&self, index: usize, progress: f32) -> Transform {
        self.timeline.sample_progress(index, progress)
    }

    /// Idle bob in `y_percent`, looping independently of scroll.
    pub fn float_offset(&self, index: usize, time_sec: f32) -> f32 {
        if index >= self.params.card_count {
            return 0.0;
        }
        let leg = self.params.float_half_period_sec
            + index as f32 * self.params.float_half_period_step_sec;
        let phase = yoyo_phase(time_sec, leg);
        self.params.float_y_percent * Ease::Sine(Direction::InOut).apply(phase)
    }

    /// Scroll pose plus the idle float.
    pub fn card_pose(&self, index: usize, progress: f32, time_sec: f32) -> Transform {
        let mut pose = self.card_transform(index, progress);
        pose.y_percent += self.float_offset(index, time_sec);
        pose
    }
}
