use motion_core::{InputCapability, Rect, Transform, POINTER_MEDIA_QUERY};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport height in CSS px; 0 when unavailable.
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn detect_capability() -> InputCapability {
    let matches = web::window()
        .and_then(|w| w.match_media(POINTER_MEDIA_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false);
    InputCapability::from_media_match(matches)
}

/// All descendants of `root` matching `selector` that are HTML elements.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_one(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, css: &str) {
    set_style(el, "transform", css);
}

/// Write both the `transform` and `opacity` of `pose`.
pub fn set_pose(el: &web::HtmlElement, pose: &Transform, perspective: Option<f32>) {
    set_transform(el, &pose.to_css(perspective));
    set_style(el, "opacity", &pose.opacity_css());
}

/// Drop inline styles written by a binding.
pub fn clear_styles(el: &web::HtmlElement, properties: &[&str]) {
    let style = el.style();
    for p in properties {
        _ = style.remove_property(p);
    }
}

/// Event listener that stays registered for as long as the guard lives.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[dom] failed to listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
