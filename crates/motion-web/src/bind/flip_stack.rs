use super::FrameClock;
use crate::constants::CARD_SELECTOR;
use crate::dom;
use motion_core::{scrub, Chase, FlipStack, FlipStackParams};
use web_sys as web;

pub struct FlipStackBinding {
    section: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    effect: FlipStack,
    progress: Chase<f32>,
}

impl FlipStackBinding {
    pub fn bind(section: &web::HtmlElement, viewport_height: f32) -> Option<Self> {
        let cards = dom::query_all(section, CARD_SELECTOR);
        if cards.is_empty() {
            log::warn!("[flip-stack] section has no cards; skipping");
            return None;
        }
        let params = FlipStackParams {
            card_count: cards.len(),
            center_index: cards.len() / 2,
            ..FlipStackParams::default()
        };
        let effect = FlipStack::new(params);
        let region = effect.region();
        if let Some(vh) = region.pin_height_vh() {
            dom::set_style(section, "height", &format!("{}vh", vh));
        }
        let rect = dom::rect_of(section);
        let start = region.progress(rect.top, rect.height, viewport_height);
        log::info!("[flip-stack] bound {} cards", cards.len());
        Some(Self {
            section: section.clone(),
            cards,
            effect,
            progress: scrub(start),
        })
    }

    pub fn is_connected(&self) -> bool {
        self.section.is_connected()
    }

    pub fn update(&mut self, clock: &FrameClock) {
        let rect = dom::rect_of(&self.section);
        let target = self
            .effect
            .region()
            .progress(rect.top, rect.height, clock.viewport_height);
        let p = self.progress.step(target, clock.dt_sec);
        let t = clock.time_sec as f32;
        for (i, card) in self.cards.iter().enumerate() {
            dom::set_pose(card, &self.effect.card_pose(i, p, t), None);
        }
    }
}

impl Drop for FlipStackBinding {
    fn drop(&mut self) {
        dom::clear_styles(&self.section, &["height"]);
        for card in &self.cards {
            dom::clear_styles(card, &["transform", "opacity"]);
        }
    }
}
