use super::FrameClock;
use crate::constants::{TILT_AREA_SELECTOR, TILT_TARGET_SELECTOR};
use crate::dom::{self, EventListener};
use glam::{Vec2, Vec3};
use motion_core::{InputCapability, TiltController, TiltParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct TiltBinding {
    section: web::HtmlElement,
    card: web::HtmlElement,
    controller: Rc<RefCell<TiltController>>,
    last_written: Option<Vec3>,
    _listeners: Vec<EventListener>,
}

impl TiltBinding {
    pub fn bind(section: &web::HtmlElement, capability: InputCapability) -> Option<Self> {
        let Some(card) = dom::query_one(section, TILT_TARGET_SELECTOR) else {
            log::warn!("[tilt] section has no target card; skipping");
            return None;
        };
        let area = dom::query_one(section, TILT_AREA_SELECTOR).unwrap_or_else(|| section.clone());
        let controller = Rc::new(RefCell::new(TiltController::new(
            capability,
            TiltParams::default(),
        )));

        let listeners = match capability {
            InputCapability::Pointer => wire_pointer(&area, &controller),
            InputCapability::Touch => wire_touch(&area, &controller),
        };
        log::info!("[tilt] bound for {:?} input", capability);
        Some(Self {
            section: section.clone(),
            card,
            controller,
            last_written: None,
            _listeners: listeners,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.section.is_connected()
    }

    pub fn update(&mut self, clock: &FrameClock) {
        let mut ctl = self.controller.borrow_mut();
        if !ctl.is_animating() && self.last_written == Some(ctl.rotations()) {
            return;
        }
        let rect = dom::rect_of(&self.card);
        let rot = ctl.tick(clock.dt_sec, &rect);
        dom::set_pose(&self.card, &ctl.transform(), Some(ctl.params().perspective_px));
        self.last_written = Some(rot);
    }
}

impl Drop for TiltBinding {
    fn drop(&mut self) {
        dom::clear_styles(&self.card, &["transform", "opacity"]);
    }
}

fn wire_pointer(
    area: &web::HtmlElement,
    controller: &Rc<RefCell<TiltController>>,
) -> Vec<EventListener> {
    let ctl_move = controller.clone();
    let ctl_enter = controller.clone();
    let ctl_leave = controller.clone();
    [
        EventListener::new(area, "mousemove", move |ev: web::Event| {
            if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
                let pos = Vec2::new(me.client_x() as f32, me.client_y() as f32);
                ctl_move.borrow_mut().pointer_move(pos);
            }
        }),
        EventListener::new(area, "mouseenter", move |_| {
            ctl_enter.borrow_mut().pointer_enter();
        }),
        EventListener::new(area, "mouseleave", move |_| {
            ctl_leave.borrow_mut().pointer_leave();
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn wire_touch(
    area: &web::HtmlElement,
    controller: &Rc<RefCell<TiltController>>,
) -> Vec<EventListener> {
    let ctl = controller.clone();
    EventListener::new(area, "touchstart", move |_| {
        ctl.borrow_mut().touch_start();
    })
    .into_iter()
    .collect()
}
