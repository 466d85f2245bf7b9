//! Element transform state and its CSS rendering.
//!
//! Field names follow the tween vocabulary the effect tables are written in:
//! `x_percent`/`y_percent` translate by a share of the element's own size,
//! `x`/`y` translate in pixels, `rotation` is the in-plane (Z) angle and
//! `rotation_x`/`rotation_y` tilt the element in 3D. Angles are degrees.

use glam::Vec3;
use std::fmt::Write as _;

/// Linear interpolation between two values of the same kind.
pub trait Lerp: Copy {
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        Vec3::lerp(self, other, t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x_percent: f32,
    pub y_percent: f32,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x_percent: 0.0,
        y_percent: 0.0,
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        rotation_x: 0.0,
        rotation_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// Rotation triple as `(x, y, z)` degrees.
    pub fn rotations(&self) -> Vec3 {
        Vec3::new(self.rotation_x, self.rotation_y, self.rotation)
    }

    pub fn with_rotations(mut self, r: Vec3) -> Self {
        self.rotation_x = r.x;
        self.rotation_y = r.y;
        self.rotation = r.z;
        self
    }

    /// Overwrite the fields `props` sets.
    pub fn apply(mut self, props: &Props) -> Self {
        macro_rules! set {
            ($($f:ident),*) => { $( if let Some(v) = props.$f { self.$f = v; } )* };
        }
        set!(x_percent, y_percent, x, y, rotation, rotation_x, rotation_y, scale, opacity);
        self
    }

    /// Interpolate only the fields `props` names, from `from` toward `props`.
    pub fn blend(mut self, from: &Transform, props: &Props, t: f32) -> Self {
        macro_rules! mix {
            ($($f:ident),*) => {
                $( if let Some(v) = props.$f { self.$f = Lerp::lerp(from.$f, v, t); } )*
            };
        }
        mix!(x_percent, y_percent, x, y, rotation, rotation_x, rotation_y, scale, opacity);
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Render as a CSS `transform` value in the order tween libraries
    /// compose it: percent translate, pixel translate, Z rotation, Y, X,
    /// scale. `perspective` prefixes a per-element perspective.
    pub fn to_css(&self, perspective: Option<f32>) -> String {
        let mut css = String::with_capacity(128);
        if let Some(p) = perspective {
            _ = write!(css, "perspective({}px) ", p);
        }
        _ = write!(
            css,
            "translate({}%, {}%) translate3d({}px, {}px, 0px) rotate({}deg) rotateY({}deg) rotateX({}deg) scale({})",
            self.x_percent,
            self.y_percent,
            self.x,
            self.y,
            self.rotation,
            self.rotation_y,
            self.rotation_x,
            self.scale
        );
        css
    }

    /// CSS `opacity` value, clamped to \[0, 1\]. Written next to the
    /// `transform` so opacity tweens reach the page.
    pub fn opacity_css(&self) -> String {
        let o = if self.opacity.is_nan() { 1.0 } else { self.opacity.clamp(0.0, 1.0) };
        o.to_string()
    }
}

impl Lerp for Transform {
    fn lerp(self, other: Self, t: f32) -> Self {
        Transform {
            x_percent: Lerp::lerp(self.x_percent, other.x_percent, t),
            y_percent: Lerp::lerp(self.y_percent, other.y_percent, t),
            x: Lerp::lerp(self.x, other.x, t),
            y: Lerp::lerp(self.y, other.y, t),
            rotation: Lerp::lerp(self.rotation, other.rotation, t),
            rotation_x: Lerp::lerp(self.rotation_x, other.rotation_x, t),
            rotation_y: Lerp::lerp(self.rotation_y, other.rotation_y, t),
            scale: Lerp::lerp(self.scale, other.scale, t),
            opacity: Lerp::lerp(self.opacity, other.opacity, t),
        }
    }
}

/// Partial transform: the properties a tween animates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Props {
    pub x_percent: Option<f32>,
    pub y_percent: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub rotation: Option<f32>,
    pub rotation_x: Option<f32>,
    pub rotation_y: Option<f32>,
    pub scale: Option<f32>,
    pub opacity: Option<f32>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field of `t`, as a tween target.
    pub fn all(t: &Transform) -> Self {
        Props {
            x_percent: Some(t.x_percent),
            y_percent: Some(t.y_percent),
            x: Some(t.x),
            y: Some(t.y),
            rotation: Some(t.rotation),
            rotation_x: Some(t.rotation_x),
            rotation_y: Some(t.rotation_y),
            scale: Some(t.scale),
            opacity: Some(t.opacity),
        }
    }

    pub fn x_percent(mut self, v: f32) -> Self {
        self.x_percent = Some(v);
        self
    }
    pub fn y_percent(mut self, v: f32) -> Self {
        self.y_percent = Some(v);
        self
    }
    pub fn x(mut self, v: f32) -> Self {
        self.x = Some(v);
        self
    }
    pub fn y(mut self, v: f32) -> Self {
        self.y = Some(v);
        self
    }
    pub fn rotation(mut self, v: f32) -> Self {
        self.rotation = Some(v);
        self
    }
    pub fn rotation_x(mut self, v: f32) -> Self {
        self.rotation_x = Some(v);
        self
    }
    pub fn rotation_y(mut self, v: f32) -> Self {
        self.rotation_y = Some(v);
        self
    }
    pub fn scale(mut self, v: f32) -> Self {
        self.scale = Some(v);
        self
    }
    pub fn opacity(mut self, v: f32) -> Self {
        self.opacity = Some(v);
        self
    }
}
