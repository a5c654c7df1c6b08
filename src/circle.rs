// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled discs: the ball and the sample markers.

use crate::Point;

/// A circle.
///
/// Used for the dragged ball and for the sample markers drawn in
/// [`RenderMode::Visualize`](crate::RenderMode::Visualize).
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Circle, Point};

    #[test]
    fn from_tuple() {
        let c = Circle::new((10.0, 10.0), 2.0);
        assert_eq!(c.center, Point::new(10.0, 10.0));
        assert_eq!(c.radius, 2.0);
    }
}
