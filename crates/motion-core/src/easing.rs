//! Easing curves named the way tween libraries name them (`power2.out`,
//! `sine.inOut`, `elastic.out(1, 0.75)`).
//!
//! Every curve maps `0 -> 0` and `1 -> 1`; inputs are clamped to \[0, 1\].

use crate::error::MotionError;
use std::f32::consts::{FRAC_PI_2, TAU};
use std::str::FromStr;

const MIN_ELASTIC_PARAM: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    InOut,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// `power1` .. `power4`; the exponent is `power + 1`.
    Power { power: u8, direction: Direction },
    Sine(Direction),
    ElasticOut { amplitude: f32, period: f32 },
}

impl Default for Ease {
    /// Tweens without an explicit ease use `power1.out`.
    fn default() -> Self {
        Ease::Power {
            power: 1,
            direction: Direction::Out,
        }
    }
}

impl Ease {
    pub const fn power(power: u8, direction: Direction) -> Self {
        Ease::Power { power, direction }
    }

    pub const fn elastic_out(amplitude: f32, period: f32) -> Self {
        Ease::ElasticOut { amplitude, period }
    }

    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Ease::Linear => t,
            Ease::Power { power, direction } => {
                let exp = i32::from(power.clamp(1, 4)) + 1;
                let ease_in = |x: f32| x.powi(exp);
                shape(direction, t, ease_in)
            }
            Ease::Sine(direction) => shape(direction, t, |x| 1.0 - (x * FRAC_PI_2).cos()),
            Ease::ElasticOut { amplitude, period } => elastic_out(amplitude, period, t),
        }
    }
}

/// Builds `out`/`inOut` variants from an `in` curve.
#[inline]
fn shape(direction: Direction, t: f32, ease_in: impl Fn(f32) -> f32) -> f32 {
    match direction {
        Direction::In => ease_in(t),
        Direction::Out => 1.0 - ease_in(1.0 - t),
        Direction::InOut => {
            if t < 0.5 {
                ease_in(t * 2.0) / 2.0
            } else {
                1.0 - ease_in((1.0 - t) * 2.0) / 2.0
            }
        }
    }
}

fn elastic_out(amplitude: f32, period: f32, t: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    // non-positive parameters would divide by zero
    let amplitude = amplitude.max(MIN_ELASTIC_PARAM);
    let period = period.max(MIN_ELASTIC_PARAM);
    let a = amplitude.max(1.0);
    let p = period / amplitude.min(1.0);
    let shift = p / TAU * (1.0 / a).asin();
    a * 2f32.powf(-10.0 * t) * ((t - shift) * TAU / p).sin() + 1.0
}

impl FromStr for Ease {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let (head, args) = match name.find('(') {
            Some(open) => {
                let close = name
                    .rfind(')')
                    .filter(|c| *c > open)
                    .ok_or_else(|| MotionError::InvalidEaseParams(name.to_string()))?;
                (&name[..open], Some(&name[open + 1..close]))
            }
            None => (name, None),
        };
        let (family, variant) = match head.split_once('.') {
            Some((f, v)) => (f, Some(v)),
            None => (head, None),
        };
        let direction = match variant {
            None | Some("out") => Direction::Out,
            Some("in") => Direction::In,
            Some("inOut") => Direction::InOut,
            Some(_) => return Err(MotionError::UnknownEase(name.to_string())),
        };

        match family {
            "none" | "linear" if variant.is_none() && args.is_none() => Ok(Ease::Linear),
            "power1" | "power2" | "power3" | "power4" if args.is_none() => {
                let power = family.as_bytes()[5] - b'0';
                Ok(Ease::Power { power, direction })
            }
            "sine" if args.is_none() => Ok(Ease::Sine(direction)),
            "elastic" if direction == Direction::Out => {
                let (amplitude, period) = parse_elastic_args(name, args)?;
                Ok(Ease::ElasticOut { amplitude, period })
            }
            _ => Err(MotionError::UnknownEase(name.to_string())),
        }
    }
}

fn parse_elastic_args(name: &str, args: Option<&str>) -> Result<(f32, f32), MotionError> {
    let mut amplitude = 1.0;
    let mut period = 0.3;
    if let Some(args) = args.filter(|a| !a.trim().is_empty()) {
        let bad = || MotionError::InvalidEaseParams(name.to_string());
        let mut parts = args.split(',').map(|p| p.trim().parse::<f32>());
        if let Some(a) = parts.next() {
            amplitude = a.map_err(|_| bad())?;
        }
        if let Some(p) = parts.next() {
            period = p.map_err(|_| bad())?;
        }
        if parts.next().is_some() || amplitude <= 0.0 || period <= 0.0 {
            return Err(bad());
        }
    }
    Ok((amplitude, period))
}
