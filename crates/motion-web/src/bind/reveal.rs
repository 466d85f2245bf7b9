use super::FrameClock;
use crate::constants::{CARD_SELECTOR, ROW_SELECTOR};
use crate::dom;
use motion_core::{RevealGrid, RevealParams, RowState};
use web_sys as web;

struct RowHandles {
    row: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    settled: bool,
}

pub struct RevealBinding {
    section: web::HtmlElement,
    rows: Vec<RowHandles>,
    grid: RevealGrid,
}

impl RevealBinding {
    pub fn bind(section: &web::HtmlElement) -> Option<Self> {
        let rows: Vec<RowHandles> = dom::query_all(section, ROW_SELECTOR)
            .into_iter()
            .map(|row| RowHandles {
                cards: dom::query_all(&row, CARD_SELECTOR),
                row,
                settled: false,
            })
            .collect();
        if rows.is_empty() {
            log::warn!("[reveal] section has no rows; skipping");
            return None;
        }
        let grid = RevealGrid::new(rows.iter().map(|r| r.cards.len()), RevealParams::default());
        for (r, handles) in rows.iter().enumerate() {
            for (c, card) in handles.cards.iter().enumerate() {
                dom::set_style(card, "transform-origin", "center center");
                dom::set_pose(card, &grid.card_transform(r, c, 0.0), None);
            }
        }
        log::info!("[reveal] bound {} rows", rows.len());
        Some(Self {
            section: section.clone(),
            rows,
            grid,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.section.is_connected()
    }

    pub fn update(&mut self, clock: &FrameClock) {
        for (r, handles) in self.rows.iter_mut().enumerate() {
            if handles.settled {
                continue;
            }
            let top = dom::rect_of(&handles.row).top;
            if self
                .grid
                .observe(r, top, clock.viewport_height, clock.time_sec)
            {
                log::info!("[reveal] row {} entering", r);
            }
            if self.grid.row_state(r) == Some(RowState::Waiting) {
                continue;
            }
            for (c, card) in handles.cards.iter().enumerate() {
                let pose = self.grid.card_transform(r, c, clock.time_sec);
                dom::set_pose(card, &pose, None);
            }
            handles.settled = self.grid.is_settled(r, clock.time_sec);
        }
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        for card in self.rows.iter().flat_map(|r| &r.cards) {
            dom::clear_styles(card, &["transform", "transform-origin", "opacity"]);
        }
    }
}
