use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop. The loop stops once `on_frame` returns
/// `false`; dropping the ticker cancels the pending frame and releases the
/// callback.
pub struct Ticker {
    slot: FrameSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl Ticker {
    pub fn start(mut on_frame: impl FnMut() -> bool + 'static) -> Self {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let slot_tick = slot.clone();
        let pending_tick = pending.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if on_frame() {
                pending_tick.set(request_frame(&slot_tick));
            } else {
                pending_tick.set(None);
                log::info!("[ticker] nothing left to animate; loop stopped");
            }
        }) as Box<dyn FnMut()>));
        pending.set(request_frame(&slot));

        Self { slot, pending }
    }
}

fn request_frame(slot: &FrameSlot) -> Option<i32> {
    let w = web::window()?;
    let cb = slot.borrow();
    let cb = cb.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let (Some(w), Some(id)) = (web::window(), self.pending.take()) {
            _ = w.cancel_animation_frame(id);
        }
        // the closure holds a clone of `slot`; taking it breaks the cycle
        self.slot.borrow_mut().take();
    }
}
