//! Validated per-call transform parameters.
//!
//! Each transform takes exactly one of these values; there is no shared
//! configuration between calls. Constructors reject values the transforms
//! cannot give a meaning to (non-finite numbers, negative contrast, zero
//! scale). Integer parameters are accepted over their whole range.

use crate::error::ParamError;

/// What brightness/contrast does with results outside `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Clamp to the nearest representable value.
    #[default]
    Saturate,
    /// Reduce the rounded result modulo 256.
    Wrap,
}

/// Linear remap `v ↦ contrast × v + brightness` applied to every channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessContrast {
    brightness: i32,
    contrast: f64,
    overflow: OverflowPolicy,
}

impl BrightnessContrast {
    /// Saturating remap. `contrast` must be finite and `>= 0`.
    pub fn new(brightness: i32, contrast: f64) -> Result<Self, ParamError> {
        if !contrast.is_finite() || contrast < 0.0 {
            return Err(ParamError::InvalidContrast(contrast));
        }
        Ok(Self {
            brightness,
            contrast,
            overflow: OverflowPolicy::Saturate,
        })
    }

    #[must_use]
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn brightness(&self) -> i32 {
        self.brightness
    }

    pub fn contrast(&self) -> f64 {
        self.contrast
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Output byte for input byte `v`.
    ///
    /// Rounds half away from zero, then applies the overflow policy.
    pub fn map(&self, v: u8) -> u8 {
        let x = self.contrast * f64::from(v) + f64::from(self.brightness);
        let r = round_half_away(x);
        match self.overflow {
            OverflowPolicy::Saturate => r.clamp(0, 255) as u8,
            OverflowPolicy::Wrap => r.rem_euclid(256) as u8,
        }
    }

    /// The whole mapping as a 256-entry table indexed by input byte.
    pub fn lut(&self) -> [u8; 256] {
        let mut lut = [0u8; 256];
        for (v, out) in lut.iter_mut().enumerate() {
            *out = self.map(v as u8);
        }
        lut
    }
}

impl Default for BrightnessContrast {
    /// Identity remap.
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 1.0,
            overflow: OverflowPolicy::Saturate,
        }
    }
}

// `f64::round` lives in std; this works without it. `x - trunc(x)` is exact.
#[inline]
fn round_half_away(x: f64) -> i64 {
    let t = x as i64;
    let frac = x - t as f64;
    if frac >= 0.5 {
        t.saturating_add(1)
    } else if frac <= -0.5 {
        t.saturating_sub(1)
    } else {
        t
    }
}

/// Pixel offset for [`translate`](crate::translate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Translation {
    pub dx: i32,
    pub dy: i32,
}

impl Translation {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            dx: self.dx.wrapping_neg(),
            dy: self.dy.wrapping_neg(),
        }
    }
}

/// Rotation angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    pub fn from_radians(radians: f64) -> Result<Self, ParamError> {
        if !radians.is_finite() {
            return Err(ParamError::NonFiniteAngle(radians));
        }
        Ok(Self(radians))
    }

    /// Whole degrees, the unit parameters are usually entered in.
    pub fn from_degrees(degrees: i32) -> Self {
        Self(f64::from(degrees) * core::f64::consts::PI / 180.0)
    }

    pub fn radians(self) -> f64 {
        self.0
    }
}

/// Magnification about a fixed point for [`scale`](crate::scale).
///
/// Factors above 1 enlarge the image, factors below 1 shrink it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    factor: f64,
    cx: i64,
    cy: i64,
}

impl Scale {
    /// Scale about the top-left corner.
    pub fn uniform(factor: f64) -> Result<Self, ParamError> {
        Self::about(factor, 0, 0)
    }

    /// Scale about pixel `(cx, cy)`, which stays where it is.
    pub fn about(factor: f64, cx: i64, cy: i64) -> Result<Self, ParamError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ParamError::InvalidScale(factor));
        }
        Ok(Self { factor, cx, cy })
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn center(&self) -> (i64, i64) {
        (self.cx, self.cy)
    }
}
