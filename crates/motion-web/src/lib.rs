#![cfg(target_arch = "wasm32")]
use crate::bind::{FlipStackBinding, RevealBinding, TiltBinding, WheelBinding};
use crate::frame::FrameContext;
use crate::ticker::Ticker;
use motion_core::EffectKind;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod bind;
mod constants;
mod dom;
mod frame;
mod ticker;

/// Effects bound to the current document plus the frame loop driving them.
struct Page {
    _ticker: Ticker,
    _frame: Rc<RefCell<FrameContext>>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");

    if let Err(e) = mount_page() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

/// Bind every `data-fx` section in the document. Any previously mounted
/// page is torn down first.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_page().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Release all listeners, restore the inline styles the effects wrote and
/// stop the frame loop.
#[wasm_bindgen]
pub fn unmount() {
    if PAGE.with(|p| p.borrow_mut().take()).is_some() {
        log::info!("motion-web unmounted");
    }
}

fn mount_page() -> anyhow::Result<()> {
    unmount();
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;

    let capability = dom::detect_capability();
    let viewport_height = dom::viewport_height();
    let mut ctx = FrameContext::new();

    for section in dom::query_all(&root, constants::FX_SECTION_SELECTOR) {
        let attr = section.get_attribute(constants::FX_ATTR).unwrap_or_default();
        let Some(kind) = EffectKind::from_attr(&attr) else {
            log::warn!("[mount] unknown effect `{}`", attr);
            continue;
        };
        match kind {
            EffectKind::FlipStack => ctx
                .flip_stacks
                .extend(FlipStackBinding::bind(&section, viewport_height)),
            EffectKind::Wheel => ctx
                .wheels
                .extend(WheelBinding::bind(&section, viewport_height)),
            EffectKind::Tilt => ctx.tilts.extend(TiltBinding::bind(&section, capability)),
            EffectKind::Reveal => ctx.reveals.extend(RevealBinding::bind(&section)),
        }
    }

    if ctx.is_empty() {
        log::warn!("[mount] no effects bound");
        return Ok(());
    }

    let frame = Rc::new(RefCell::new(ctx));
    let frame_tick = frame.clone();
    let ticker = Ticker::start(move || frame_tick.borrow_mut().frame());
    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            _ticker: ticker,
            _frame: frame,
        })
    });
    Ok(())
}
