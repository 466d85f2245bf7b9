// DOM contract and frame tuning for the web frontend.

// Section marker; the value names the effect (see `EffectKind::from_attr`).
pub const FX_ATTR: &str = "data-fx";
pub const FX_SECTION_SELECTOR: &str = "[data-fx]";

// Children looked up inside a section
pub const CARD_SELECTOR: &str = "[data-fx-card]";
pub const ROW_SELECTOR: &str = "[data-fx-row]";
pub const WHEEL_SELECTOR: &str = "[data-fx-wheel]";
pub const TILT_TARGET_SELECTOR: &str = "[data-fx-target]";
pub const TILT_AREA_SELECTOR: &str = "[data-fx-area]"; // pointer listeners; falls back to the section

// Cap on a single frame step so a backgrounded tab doesn't jump animations
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
