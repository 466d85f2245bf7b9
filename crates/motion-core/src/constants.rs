// Shared effect tuning constants used by the web frontend.

// Flip stack
pub const FLIP_CARD_COUNT: usize = 5;
pub const FLIP_CENTER_INDEX: usize = 2;
pub const FLIP_SPREAD_X_PERCENT: f32 = 75.0; // horizontal fan-out per index step from centre
pub const FLIP_DROP_Y_PERCENT: f32 = 150.0;
pub const FLIP_DROP_SCALE: f32 = 0.8;
pub const FLIP_DROP_ROTATION_X: f32 = 20.0;
pub const FLIP_ESCAPE_STAGGER: f32 = 0.012;
pub const FLIP_RETURN_STAGGER: f32 = 0.015;
pub const FLIP_TURN_ROTATION_Y: f32 = -190.0;
pub const FLIP_TURN_ROTATION_X: f32 = 15.0;
pub const FLIP_ESCAPE_VIEWPORTS: f32 = 2.0; // '+=200%'
pub const FLIP_RETURN_VIEWPORTS: f32 = 3.5; // '+=350%'

// Idle float on flip stack cards
pub const FLOAT_Y_PERCENT: f32 = 2.0;
pub const FLOAT_BASE_HALF_PERIOD_SEC: f32 = 2.0;
pub const FLOAT_HALF_PERIOD_STEP_SEC: f32 = 0.2;

// Tilt
pub const TILT_MAX_DEG: f32 = 25.0;
pub const TILT_HIGHLIGHT_MAX_DEG: f32 = 5.0;
pub const TILT_TRACK_SEC: f32 = 0.5;
pub const TILT_RETURN_SEC: f32 = 1.2;
pub const TILT_RETURN_AMPLITUDE: f32 = 1.0;
pub const TILT_RETURN_PERIOD: f32 = 0.75;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TOUCH_PULSE_ROTATION_Y: f32 = 15.0;
pub const TOUCH_PULSE_ROTATION_X: f32 = 10.0;
pub const TOUCH_PULSE_HALF_SEC: f32 = 0.3; // one leg of the yoyo

// Wheel
pub const WHEEL_CARD_COUNT: usize = 8;
pub const WHEEL_RADIUS_PX: f32 = 350.0;
pub const WHEEL_TURN_DEG: f32 = -65.0;

// Reveal grid
pub const REVEAL_CARDS_PER_ROW: usize = 2;
pub const REVEAL_START_Y_PX: f32 = 1000.0;
pub const REVEAL_START_ROTATION_DEG: f32 = 60.0; // left card takes the negative
pub const REVEAL_VIEWPORT_FRACTION: f32 = 0.5; // 'top 50%'
pub const REVEAL_DURATION_SEC: f32 = 1.0;
pub const REVEAL_STAGGER_SEC: f32 = 0.25;

// Scrub smoothing ('scrub: 1')
pub const SCRUB_LAG_SEC: f32 = 1.0;
