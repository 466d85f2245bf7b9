// Host-side tests for easing curves and their string names.

use motion_core::{Direction, Ease, MotionError};

fn all_eases() -> Vec<Ease> {
    let mut eases = vec![
        Ease::Linear,
        Ease::Sine(Direction::In),
        Ease::Sine(Direction::Out),
        Ease::Sine(Direction::InOut),
        Ease::elastic_out(1.0, 0.3),
        Ease::elastic_out(1.0, 0.75),
        Ease::elastic_out(1.5, 0.4),
    ];
    for power in 1..=4 {
        for direction in [Direction::In, Direction::Out, Direction::InOut] {
            eases.push(Ease::power(power, direction));
        }
    }
    eases
}

#[test]
fn every_curve_starts_at_zero_and_ends_at_one() {
    for ease in all_eases() {
        assert!(ease.apply(0.0).abs() < 1e-5, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-5, "{ease:?} at 1");
    }
}

#[test]
fn inputs_outside_unit_range_clamp() {
    for ease in all_eases() {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0), "{ease:?} below 0");
        assert_eq!(ease.apply(7.5), ease.apply(1.0), "{ease:?} above 1");
    }
    assert_eq!(Ease::Linear.apply(f32::NAN), 0.0);
}

#[test]
fn power_curves_are_monotonic() {
    for power in 1..=4 {
        for direction in [Direction::In, Direction::Out, Direction::InOut] {
            let ease = Ease::power(power, direction);
            let mut prev = ease.apply(0.0);
            for i in 1..=200 {
                let v = ease.apply(i as f32 / 200.0);
                assert!(v >= prev, "{ease:?} decreased at step {i}");
                prev = v;
            }
        }
    }
}

#[test]
fn power_out_matches_closed_form() {
    let ease = Ease::power(2, Direction::Out);
    assert!((ease.apply(0.5) - 0.875).abs() < 1e-6);
    let ease = Ease::power(4, Direction::Out);
    assert!((ease.apply(0.5) - (1.0 - 0.5f32.powi(5))).abs() < 1e-6);
}

#[test]
fn in_out_curves_pass_through_midpoint() {
    for ease in [
        Ease::power(1, Direction::InOut),
        Ease::power(3, Direction::InOut),
        Ease::Sine(Direction::InOut),
    ] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-6, "{ease:?}");
    }
}

#[test]
fn elastic_out_overshoots_then_settles() {
    let ease = Ease::elastic_out(1.0, 0.75);
    let peak = (0..=1000)
        .map(|i| ease.apply(i as f32 / 1000.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0, "expected overshoot, peak {peak}");
    assert!(peak < 1.2, "overshoot too large: {peak}");
    assert!((ease.apply(0.95) - 1.0).abs() < 0.01);
}

#[test]
fn default_ease_is_power1_out() {
    assert_eq!(Ease::default(), Ease::power(1, Direction::Out));
}

#[test]
fn parses_tween_library_names() {
    assert_eq!("none".parse::<Ease>(), Ok(Ease::Linear));
    assert_eq!("linear".parse::<Ease>(), Ok(Ease::Linear));
    assert_eq!("power2".parse::<Ease>(), Ok(Ease::power(2, Direction::Out)));
    assert_eq!("power4.out".parse::<Ease>(), Ok(Ease::power(4, Direction::Out)));
    assert_eq!("power2.inOut".parse::<Ease>(), Ok(Ease::power(2, Direction::InOut)));
    assert_eq!("power1.in".parse::<Ease>(), Ok(Ease::power(1, Direction::In)));
    assert_eq!("sine.inOut".parse::<Ease>(), Ok(Ease::Sine(Direction::InOut)));
    assert_eq!(
        "elastic.out(1, 0.75)".parse::<Ease>(),
        Ok(Ease::elastic_out(1.0, 0.75))
    );
    assert_eq!("elastic".parse::<Ease>(), Ok(Ease::elastic_out(1.0, 0.3)));
    assert_eq!(" elastic.out() ".parse::<Ease>(), Ok(Ease::elastic_out(1.0, 0.3)));
}

#[test]
fn rejects_unknown_or_malformed_names() {
    assert!(matches!(
        "bounce.out".parse::<Ease>(),
        Err(MotionError::UnknownEase(_))
    ));
    assert!(matches!(
        "power5.out".parse::<Ease>(),
        Err(MotionError::UnknownEase(_))
    ));
    assert!(matches!(
        "power2.sideways".parse::<Ease>(),
        Err(MotionError::UnknownEase(_))
    ));
    assert!(matches!(
        "elastic.in(1, 0.5)".parse::<Ease>(),
        Err(MotionError::UnknownEase(_))
    ));
    assert!(matches!(
        "elastic.out(1, x)".parse::<Ease>(),
        Err(MotionError::InvalidEaseParams(_))
    ));
    assert!(matches!(
        "elastic.out(1, 0.3".parse::<Ease>(),
        Err(MotionError::InvalidEaseParams(_))
    ));
    assert!(matches!(
        "elastic.out(1, 0.3, 2)".parse::<Ease>(),
        Err(MotionError::InvalidEaseParams(_))
    ));
}

#[test]
fn elastic_with_degenerate_parameters_stays_finite() {
    for ease in [
        Ease::elastic_out(0.0, 0.3),
        Ease::elastic_out(1.0, 0.0),
        Ease::elastic_out(-2.0, -1.0),
    ] {
        for i in 0..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v.is_finite(), "{ease:?} at {i}: {v}");
        }
        assert!(ease.apply(0.0).abs() < 1e-3);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}
