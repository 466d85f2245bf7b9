//! Grid rows that rise into place, one staggered entrance per row, the first
//! time the row's top reaches the trigger line.

use crate::constants::*;
use crate::easing::{Direction, Ease};
use crate::scroll::ViewportThreshold;
use crate::transform::{Lerp, Transform};
use std::ops::Range;

#[derive(Clone, Copy, Debug)]
pub struct RevealParams {
    pub cards_per_row: usize,
    pub start_y_px: f32,
    /// Start angle; the first card of a row uses the negative.
    pub start_rotation_deg: f32,
    pub threshold: ViewportThreshold,
    pub duration_sec: f32,
    pub stagger_sec: f32,
    pub ease: Ease,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            cards_per_row: REVEAL_CARDS_PER_ROW,
            start_y_px: REVEAL_START_Y_PX,
            start_rotation_deg: REVEAL_START_ROTATION_DEG,
            threshold: ViewportThreshold {
                fraction: REVEAL_VIEWPORT_FRACTION,
            },
            duration_sec: REVEAL_DURATION_SEC,
            stagger_sec: REVEAL_STAGGER_SEC,
            ease: Ease::power(4, Direction::Out),
        }
    }
}

/// Split `count` cards into consecutive rows of `per_row`; the last row may
/// be short.
pub fn rows_for(count: usize, per_row: usize) -> Vec<Range<usize>> {
    let per_row = per_row.max(1);
    (0..count)
        .step_by(per_row)
        .map(|start| start..(start + per_row).min(count))
        .collect()
}

/// Pose a card holds until its row fires.
pub fn start_pose(column: usize, params: &RevealParams) -> Transform {
    let rotation = if column == 0 {
        -params.start_rotation_deg
    } else {
        params.start_rotation_deg
    };
    Transform {
        y: params.start_y_px,
        rotation,
        ..Transform::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowState {
    Waiting,
    Fired { at_sec: f64 },
}

#[derive(Clone, Copy, Debug)]
struct Row {
    len: usize,
    state: RowState,
}

#[derive(Clone, Debug)]
pub struct RevealGrid {
    params: RevealParams,
    rows: Vec<Row>,
}

impl RevealGrid {
    pub fn new(row_lengths: impl IntoIterator<Item = usize>, params: RevealParams) -> Self {
        let rows = row_lengths
            .into_iter()
            .map(|len| Row {
                len,
                state: RowState::Waiting,
            })
            .collect();
        Self { params, rows }
    }

    pub fn from_card_count(count: usize, params: RevealParams) -> Self {
        let lengths = rows_for(count, params.cards_per_row)
            .into_iter()
            .map(|r| r.len());
        Self::new(lengths, params)
    }

    pub fn params(&self) -> &RevealParams {
        &self.params
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_state(&self, row: usize) -> Option<RowState> {
        self.rows.get(row).map(|r| r.state)
    }

    /// Feed the row's current viewport position. Returns `true` only on the
    /// call that fires the row; later crossings are ignored.
    pub fn observe(
        &mut self,
        row: usize,
        rect_top: f32,
        viewport_height: f32,
        now_sec: f64,
    ) -> bool {
        let threshold = self.params.threshold;
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        if r.state != RowState::Waiting || !threshold.reached(rect_top, viewport_height) {
            return false;
        }
        r.state = RowState::Fired { at_sec: now_sec };
        log::debug!("[reveal] row {} fired at {:.3}s", row, now_sec);
        true
    }

    /// Re-arm every row.
    pub fn reset(&mut self) {
        for r in &mut self.rows {
            r.state = RowState::Waiting;
        }
    }

    fn local(&self, at_sec: f64, column: usize, now_sec: f64) -> f32 {
        let elapsed = (now_sec - at_sec) as f32 - self.params.stagger_sec * column as f32;
        if self.params.duration_sec <= 0.0 {
            return if elapsed >= 0.0 { 1.0 } else { 0.0 };
        }
        (elapsed / self.params.duration_sec).clamp(0.0, 1.0)
    }

    /// Pose of the card at `(row, column)`. Cards outside the grid stay at
    /// the identity transform.
    pub fn card_transform(&self, row: usize, column: usize, now_sec: f64) -> Transform {
        let Some(r) = self.rows.get(row).filter(|r| column < r.len) else {
            return Transform::IDENTITY;
        };
        let start = start_pose(column, &self.params);
        match r.state {
            RowState::Waiting => start,
            RowState::Fired { at_sec } => {
                let k = self.params.ease.apply(self.local(at_sec, column, now_sec));
                start.lerp(Transform::IDENTITY, k)
            }
        }
    }

    /// Row has fired and every card has landed.
    pub fn is_settled(&self, row: usize, now_sec: f64) -> bool {
        match self.rows.get(row) {
            Some(Row {
                len,
                state: RowState::Fired { at_sec },
            }) => (0..*len).all(|c| self.local(*at_sec, c, now_sec) >= 1.0),
            _ => false,
        }
    }
}
