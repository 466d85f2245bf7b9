use super::FrameClock;
use crate::constants::{CARD_SELECTOR, WHEEL_SELECTOR};
use crate::dom;
use motion_core::{scrub, Chase, Wheel, WheelParams};
use web_sys as web;

pub struct WheelBinding {
    section: web::HtmlElement,
    ring: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    effect: Wheel,
    progress: Chase<f32>,
}

impl WheelBinding {
    pub fn bind(section: &web::HtmlElement, viewport_height: f32) -> Option<Self> {
        let Some(ring) = dom::query_one(section, WHEEL_SELECTOR) else {
            log::warn!("[wheel] section has no ring element; skipping");
            return None;
        };
        let cards = dom::query_all(&ring, CARD_SELECTOR);
        let effect = Wheel::new(WheelParams {
            card_count: cards.len(),
            ..WheelParams::default()
        });
        for (i, card) in cards.iter().enumerate() {
            dom::set_transform(card, &effect.card_css(i));
        }
        let rect = dom::rect_of(section);
        let start = effect
            .region()
            .progress(rect.top, rect.height, viewport_height);
        log::info!("[wheel] bound {} cards", cards.len());
        Some(Self {
            section: section.clone(),
            ring,
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
        dom::set_transform(&self.ring, &self.effect.wheel_transform(p).to_css(None));
    }
}

impl Drop for WheelBinding {
    fn drop(&mut self) {
        dom::clear_styles(&self.ring, &["transform"]);
        for card in &self.cards {
            dom::clear_styles(card, &["transform"]);
        }
    }
}
