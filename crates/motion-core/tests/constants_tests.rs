// Host-side tests for tuning constants and their relationships.

use motion_core::constants::*;
use motion_core::EffectKind;

#[test]
#[allow(clippy::assertions_on_constants)]
fn flip_stack_constants_are_consistent() {
    // Centre card must exist
    assert!(FLIP_CENTER_INDEX < FLIP_CARD_COUNT);

    // Staggers must leave the last card room inside its half-step
    assert!(FLIP_ESCAPE_STAGGER * FLIP_CARD_COUNT as f32 <= 0.5);
    assert!(FLIP_RETURN_STAGGER * FLIP_CARD_COUNT as f32 <= 0.33);

    assert!(FLIP_DROP_SCALE > 0.0 && FLIP_DROP_SCALE <= 1.0);
    assert!(FLIP_ESCAPE_VIEWPORTS > 0.0);
    assert!(FLIP_RETURN_VIEWPORTS >= FLIP_ESCAPE_VIEWPORTS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tilt_constants_are_positive() {
    assert!(TILT_MAX_DEG > 0.0);
    assert!(TILT_HIGHLIGHT_MAX_DEG >= 0.0);
    assert!(TILT_TRACK_SEC > 0.0);
    assert!(TILT_RETURN_SEC > 0.0);
    assert!(TILT_RETURN_PERIOD > 0.0);

    // Pulse stays inside the pointer bound
    assert!(TOUCH_PULSE_ROTATION_X <= TILT_MAX_DEG);
    assert!(TOUCH_PULSE_ROTATION_Y <= TILT_MAX_DEG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wheel_and_reveal_constants_are_sane() {
    assert!(WHEEL_CARD_COUNT > 0);
    assert!(WHEEL_RADIUS_PX > 0.0);
    assert!(REVEAL_CARDS_PER_ROW > 0);
    assert!(REVEAL_VIEWPORT_FRACTION > 0.0 && REVEAL_VIEWPORT_FRACTION <= 1.0);
    assert!(REVEAL_STAGGER_SEC < REVEAL_DURATION_SEC);
    assert!(SCRUB_LAG_SEC > 0.0);
}

#[test]
fn effect_names_resolve() {
    assert_eq!(EffectKind::from_attr("flip-stack"), Some(EffectKind::FlipStack));
    assert_eq!(EffectKind::from_attr(" tilt "), Some(EffectKind::Tilt));
    assert_eq!(EffectKind::from_attr("wheel"), Some(EffectKind::Wheel));
    assert_eq!(EffectKind::from_attr("reveal"), Some(EffectKind::Reveal));
    assert_eq!(EffectKind::from_attr("parallax"), None);
}
