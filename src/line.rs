// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straight path segments.

use crate::Point;

/// A single line.
///
/// The segments of a [`Path`](crate::Path) are lines.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Signed area under the line, by Green's theorem.
    ///
    /// Summed over a closed path this gives the enclosed area.
    #[inline]
    pub fn signed_area(self) -> f64 {
        self.p0.to_vec2().cross(self.p1.to_vec2()) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use crate::Line;

    #[test]
    fn signed_area_sign() {
        // Y-down clockwise around the origin: positive.
        assert_eq!(Line::new((10.0, 0.0), (0.0, 10.0)).signed_area(), 50.0);
        assert_eq!(Line::new((0.0, 10.0), (10.0, 0.0)).signed_area(), -50.0);
        assert_eq!(Line::new((1.0, 1.0), (2.0, 2.0)).signed_area(), 0.0);
    }
}
