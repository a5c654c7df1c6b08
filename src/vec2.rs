// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple 2D vector.

use core::fmt;
use core::ops::{Add, Div, Mul, Sub};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A 2D vector.
///
/// The difference of two [`Point`]s, such as the tangent or normal of a
/// trail at one of its vertices.
///
/// [`Point`]: crate::Point
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

impl Vec2 {
    /// The vector (0, 0).
    pub const ZERO: Vec2 = Vec2::new(0., 0.);

    /// Create a new vector.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Cross product of two vectors.
    ///
    /// This is signed so that `(1, 0) × (0, 1) = 1`.
    #[inline]
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Magnitude of vector.
    #[inline]
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// A unit vector of the given angle.
    ///
    /// With `th` at zero, the result is the positive X unit vector, and
    /// at π/2, it is the positive Y unit vector. The angle is expressed
    /// in radians.
    #[inline]
    pub fn from_angle(th: f64) -> Vec2 {
        let (th_sin, th_cos) = th.sin_cos();
        Vec2 {
            x: th_cos,
            y: th_sin,
        }
    }

    /// Returns a vector of [magnitude] 1.0 with the same angle as `self`; i.e.
    /// a unit/direction vector.
    ///
    /// This produces `NaN` values when the magnitude is `0`. Use
    /// [`Vec2::try_normalize`] when the input may be degenerate.
    ///
    /// [magnitude]: Self::hypot
    #[inline]
    pub fn normalize(self) -> Vec2 {
        self / self.hypot()
    }

    /// Returns a unit vector with the same angle as `self`, or `None` if
    /// `self` has zero length or the result would not be finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use ribbon::Vec2;
    ///
    /// assert_eq!(Vec2::new(3.0, 4.0).try_normalize(), Some(Vec2::new(0.6, 0.8)));
    /// assert_eq!(Vec2::ZERO.try_normalize(), None);
    /// ```
    #[inline]
    pub fn try_normalize(self) -> Option<Vec2> {
        let len = self.hypot();
        if len == 0.0 {
            return None;
        }
        let unit = Vec2::new(self.x / len, self.y / len);
        unit.is_finite().then_some(unit)
    }

    /// Turn by 90 degrees.
    ///
    /// The rotation is clockwise in a Y-down coordinate system, so a trail
    /// travelling along `v` has `v.turn_90()` on its left.
    #[inline]
    pub fn turn_90(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Is this `Vec2` [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Is this `Vec2` [`NaN`]?
    ///
    /// [`NaN`]: f64::is_nan
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, other: f64) -> Vec2 {
        Vec2 {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    /// Note: division by a scalar is implemented by multiplying by the reciprocal.
    ///
    /// This is more efficient but has different roundoff behavior than division.
    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: f64) -> Vec2 {
        self * other.recip()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "v=(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl From<Vec2> for mint::Vector2<f64> {
    #[inline(always)]
    fn from(p: Vec2) -> mint::Vector2<f64> {
        mint::Vector2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f64>> for Vec2 {
    #[inline(always)]
    fn from(p: mint::Vector2<f64>) -> Vec2 {
        Vec2 { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let v = Vec2::new(1.2332421, 532.10721213123);
        let s = format!("{v:.2}");
        assert_eq!(s.as_str(), "v=(1.23, 532.11)");
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(3.0, -1.0);
        let b = Vec2::new(1.0, 2.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(2.0, -3.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, -2.0));
        assert_eq!(b / 2.0, Vec2::new(0.5, 1.0));
    }

    #[test]
    fn cross_sign() {
        let v = Vec2::new(1., 0.).cross(Vec2::new(0., 1.));
        assert_eq!(v, 1.);
    }

    #[test]
    fn turn_90() {
        let u = Vec2::new(0.1, 0.2);
        let turned = u.turn_90();
        // This should be exactly equal by IEEE rules, might fail
        // in fastmath conditions.
        assert_eq!(u.hypot(), turned.hypot());
        // Counter-clockwise in Y-up, so the cross product is positive.
        assert!(u.cross(turned) > 0.0);
        assert_eq!(turned.turn_90(), Vec2::new(-0.1, -0.2));
    }

    #[test]
    fn normalize_zero_is_nan() {
        assert!(Vec2::ZERO.normalize().is_nan());
        assert_eq!(Vec2::ZERO.try_normalize(), None);
    }

    #[test]
    fn try_normalize() {
        let unit = Vec2::new(-10.0, 0.0).try_normalize().unwrap();
        assert_eq!(unit, Vec2::new(-1.0, 0.0));

        let tiny = Vec2::new(1e-300, 1e-300).try_normalize().unwrap();
        assert!((tiny.hypot() - 1.0).abs() < 1e-12);

        assert_eq!(Vec2::new(f64::INFINITY, 0.0).try_normalize(), None);
        assert_eq!(Vec2::new(f64::NAN, 1.0).try_normalize(), None);
    }

    #[cfg(feature = "mint")]
    #[test]
    fn mint_conversion() {
        let v = Vec2::new(1.5, -2.0);
        let m: mint::Vector2<f64> = v.into();
        assert_eq!((m.x, m.y), (1.5, -2.0));
        assert_eq!(Vec2::from(m), v);
    }
}
