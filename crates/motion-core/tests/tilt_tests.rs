// Host-side tests for pointer tilt and the touch pulse.

use glam::{Vec2, Vec3};
use motion_core::effects::tilt::{pointer_offset, tilt_for_offset};
use motion_core::{InputCapability, Rect, TiltController, TiltParams, TiltPhase};
use rand::prelude::*;

const FRAME: f32 = 1.0 / 60.0;

fn card() -> Rect {
    Rect::new(100.0, 100.0, 200.0, 300.0)
}

#[test]
fn centred_pointer_lies_flat_with_full_highlight() {
    let r = card();
    let offset = pointer_offset(r.center(), &r);
    assert_eq!(offset, Vec2::ZERO);
    assert_eq!(tilt_for_offset(offset, &TiltParams::default()), Vec3::new(0.0, 0.0, 5.0));
}

#[test]
fn pointer_far_outside_is_clamped_to_the_bound() {
    let r = card();
    let offset = pointer_offset(Vec2::new(5000.0, -5000.0), &r);
    assert_eq!(offset, Vec2::new(1.0, -1.0));
    assert_eq!(tilt_for_offset(offset, &TiltParams::default()), Vec3::new(25.0, 25.0, 0.0));
}

#[test]
fn tilt_never_exceeds_max_degrees() {
    let params = TiltParams::default();
    let r = card();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let p = Vec2::new(rng.gen_range(-2000.0..2000.0), rng.gen_range(-2000.0..2000.0));
        let t = tilt_for_offset(pointer_offset(p, &r), &params);
        assert!(t.x.abs() <= params.max_deg);
        assert!(t.y.abs() <= params.max_deg);
        assert!(t.z >= 0.0 && t.z <= params.highlight_max_deg);
    }
}

#[test]
fn empty_rect_reads_as_centred() {
    let r = Rect::new(10.0, 10.0, 0.0, 0.0);
    assert_eq!(pointer_offset(Vec2::new(50.0, 80.0), &r), Vec2::ZERO);
}

#[test]
fn pointer_tracks_then_springs_back_with_overshoot() {
    let r = card();
    let mut tilt = TiltController::new(InputCapability::Pointer, TiltParams::default());
    assert_eq!(tilt.phase(), TiltPhase::Idle);

    tilt.pointer_enter();
    tilt.pointer_move(Vec2::new(300.0, 250.0));
    assert_eq!(tilt.phase(), TiltPhase::Tracking);
    for _ in 0..120 {
        tilt.tick(FRAME, &r);
    }
    assert!(tilt.rotations().y > 24.9);
    assert!(tilt.rotations().x.abs() < 1e-3);

    tilt.pointer_leave();
    assert!(matches!(tilt.phase(), TiltPhase::Returning { .. }));

    let mut lowest = f32::MAX;
    for _ in 0..80 {
        lowest = lowest.min(tilt.tick(FRAME, &r).y);
    }
    assert!(lowest < -0.5, "elastic return should overshoot, got {lowest}");
    assert_eq!(tilt.phase(), TiltPhase::Idle);
    assert_eq!(tilt.rotations(), Vec3::ZERO);
    assert!(!tilt.is_animating());
}

#[test]
fn leave_without_enter_is_ignored() {
    let mut tilt = TiltController::new(InputCapability::Pointer, TiltParams::default());
    tilt.pointer_leave();
    assert_eq!(tilt.phase(), TiltPhase::Idle);
}

#[test]
fn reentering_during_return_resumes_tracking() {
    let r = card();
    let mut tilt = TiltController::new(InputCapability::Pointer, TiltParams::default());
    tilt.pointer_enter();
    tilt.pointer_move(Vec2::new(100.0, 100.0));
    for _ in 0..30 {
        tilt.tick(FRAME, &r);
    }
    tilt.pointer_leave();
    tilt.tick(FRAME, &r);
    let mid_return = tilt.rotations();

    tilt.pointer_enter();
    assert_eq!(tilt.phase(), TiltPhase::Tracking);
    assert_eq!(tilt.rotations(), mid_return);
}

#[test]
fn reentry_without_movement_keeps_tracking_the_last_position() {
    let r = card();
    let mut tilt = TiltController::new(InputCapability::Pointer, TiltParams::default());
    tilt.pointer_enter();
    tilt.pointer_move(Vec2::new(300.0, 250.0));
    for _ in 0..60 {
        tilt.tick(FRAME, &r);
    }
    tilt.pointer_leave();
    for _ in 0..5 {
        tilt.tick(FRAME, &r);
    }

    tilt.pointer_enter();
    let before = tilt.rotations();
    tilt.tick(FRAME, &r);
    assert_ne!(tilt.rotations(), before, "tracking must move on the next frame");
    for _ in 0..120 {
        tilt.tick(FRAME, &r);
    }
    assert_eq!(tilt.phase(), TiltPhase::Tracking);
    assert!(tilt.rotations().y > 24.9, "got {}", tilt.rotations().y);
}

#[test]
fn touch_pulse_peaks_and_settles() {
    let r = card();
    let mut tilt = TiltController::new(InputCapability::Touch, TiltParams::default());

    tilt.pointer_enter();
    assert_eq!(tilt.phase(), TiltPhase::Idle);

    tilt.touch_start();
    assert!(tilt.is_animating());
    assert_eq!(tilt.tick(0.3, &r), Vec3::new(10.0, 15.0, 0.0));
    assert_eq!(tilt.tick(0.31, &r), Vec3::ZERO);
    assert_eq!(tilt.phase(), TiltPhase::Idle);
}

#[test]
fn pointer_devices_ignore_touch() {
    let mut tilt = TiltController::new(InputCapability::Pointer, TiltParams::default());
    tilt.touch_start();
    assert_eq!(tilt.phase(), TiltPhase::Idle);
}

#[test]
fn transform_carries_rotations_and_nothing_else() {
    let r = card();
    let mut tilt = TiltController::new(InputCapability::Touch, TiltParams::default());
    tilt.touch_start();
    tilt.tick(0.3, &r);
    let t = tilt.transform();
    assert_eq!((t.rotation_x, t.rotation_y, t.rotation), (10.0, 15.0, 0.0));
    assert_eq!((t.x, t.y, t.scale), (0.0, 0.0, 1.0));
}
