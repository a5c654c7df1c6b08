// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction of the tapering polygon that outlines a trail.
//!
//! Every trail vertex except the oldest is pushed out to both sides along
//! the normal of its local tangent, by half the trail width at that vertex.
//! The width tapers linearly from zero at the oldest vertex to the full
//! width at the newest one. Walking out along one side and back along the
//! other gives a single closed ring that can be filled.
//!
//! The tangent at a vertex is approximated by the vector from its previous
//! neighbour to its next one. The newest vertex has no next neighbour and
//! uses itself in its place.

use alloc::vec::Vec;

use arrayvec::ArrayVec;

use crate::{Path, Point};

/// Builds [`TrailPolygon`]s for a trail of a given width.
///
/// # Examples
///
/// ```
/// use ribbon::{Point, TrailGeometryBuilder};
///
/// let builder = TrailGeometryBuilder::new(20.0);
/// let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 0.0)];
/// let polygon = builder.build_polygon(&points);
///
/// // Tip, two vertices on each side of the two younger points, and the
/// // closing repeat of the tip.
/// assert_eq!(polygon.len(), 6);
/// assert_eq!(polygon.vertices().first(), polygon.vertices().last());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailGeometryBuilder {
    width: f64,
}

/// The outline of a trail, as produced by [`TrailGeometryBuilder`].
///
/// The vertices form a closed ring: when there is more than one vertex, the
/// last is a repeat of the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrailPolygon {
    vertices: Vec<Point>,
}

impl TrailGeometryBuilder {
    /// Create a builder for trails that are `width` wide at the newest end.
    #[inline]
    pub const fn new(width: f64) -> TrailGeometryBuilder {
        TrailGeometryBuilder { width }
    }

    /// The full width of the trail.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Width of the trail at the vertex `index` of a trail with `total`
    /// vertices.
    ///
    /// This is zero at the oldest vertex and grows linearly with `index`.
    /// The taper is relative to the current vertex count, so it rescales
    /// as vertices are added and expire.
    #[inline]
    pub fn width_at(&self, index: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.width * index as f64 / total as f64
    }

    /// Build the outline of a trail through `points`, ordered oldest first.
    ///
    /// An empty slice gives an empty polygon and a single point gives a
    /// polygon with just that point. Where the tangent at a vertex has zero
    /// length, because its neighbours coincide, the vertex is emitted as is
    /// instead of being offset, so the result never contains `NaN`.
    pub fn build_polygon(&self, points: &[Point]) -> TrailPolygon {
        let total = points.len();
        // Left side, walked from the oldest point to the newest.
        let mut left = Vec::with_capacity(total);
        // Right side, in the same order; reversed when joined.
        let mut right = Vec::with_capacity(total);

        for (i, &p) in points.iter().enumerate() {
            if i == 0 {
                left.push(p);
                continue;
            }
            let prev = points[i - 1];
            let next = points.get(i + 1).copied().unwrap_or(p);
            let half_width = self.width_at(i, total) / 2.0;
            let mut offsets = side_offsets(prev, p, next, half_width).into_iter();
            left.extend(offsets.next());
            right.extend(offsets.next());
        }

        let mut vertices = left;
        vertices.extend(right.into_iter().rev());
        if vertices.len() > 1 {
            vertices.push(vertices[0]);
        }
        TrailPolygon { vertices }
    }
}

/// The vertices emitted for `p`, given its neighbours and half width: left
/// then right of the direction of travel, or `p` alone when the tangent is
/// degenerate.
fn side_offsets(prev: Point, p: Point, next: Point, half_width: f64) -> ArrayVec<Point, 2> {
    let mut out = ArrayVec::new();
    match (next - prev).turn_90().try_normalize() {
        Some(normal) => {
            let offset = normal * half_width;
            out.push(p + offset);
            out.push(p - offset);
        }
        None => out.push(p),
    }
    out
}

impl Default for TrailGeometryBuilder {
    fn default() -> Self {
        TrailGeometryBuilder::new(crate::TrailConfig::DEFAULT_WIDTH)
    }
}

impl TrailPolygon {
    /// The vertices of the ring. Empty for an empty trail.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices, including the closing repeat of the first.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether there is nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The ring as a closed path, for filling.
    pub fn to_path(&self) -> Path {
        let mut path = Path::from_polyline(&self.vertices);
        if !path.elements().is_empty() {
            path.close_path();
        }
        path
    }

    /// The ring as an open polyline, for stroking.
    pub fn to_polyline(&self) -> Path {
        Path::from_polyline(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{PathEl, Point, TrailGeometryBuilder, TrailPolygon, Vec2};

    const EPSILON: f64 = 1e-9;

    fn assert_near(a: Point, b: Point) {
        assert!(a.distance(b) < EPSILON, "{a:?} != {b:?}");
    }

    #[test]
    fn taper() {
        let b = TrailGeometryBuilder::new(20.0);
        assert_eq!(b.width_at(0, 4), 0.0);
        assert_eq!(b.width_at(1, 4), 5.0);
        assert_eq!(b.width_at(3, 4), 15.0);
        assert_eq!(b.width_at(0, 0), 0.0);
        for n in 1..50 {
            let widths: Vec<f64> = (0..n).map(|i| b.width_at(i, n)).collect();
            assert_eq!(widths[0], 0.0);
            assert!(widths.windows(2).all(|w| w[0] <= w[1]));
            assert!(widths.iter().all(|&w| w < 20.0));
        }
    }

    #[test]
    fn empty() {
        let polygon = TrailGeometryBuilder::new(20.0).build_polygon(&[]);
        assert!(polygon.is_empty());
        assert_eq!(polygon, TrailPolygon::default());
        assert!(polygon.to_path().elements().is_empty());
        assert!(polygon.to_polyline().elements().is_empty());
    }

    #[test]
    fn single_point() {
        let p = Point::new(3.0, 4.0);
        let polygon = TrailGeometryBuilder::new(20.0).build_polygon(&[p]);
        assert_eq!(polygon.vertices(), &[p]);
        assert!(polygon.to_path().is_empty());
    }

    #[test]
    fn stationary_pair_has_no_nan() {
        let p = Point::new(5.0, 5.0);
        let polygon = TrailGeometryBuilder::new(20.0).build_polygon(&[p, p]);
        assert!(polygon.vertices().iter().all(|v| v.is_finite()));
        assert_eq!(polygon.vertices(), &[p, p, p]);
    }

    #[test]
    fn coincident_neighbours_emit_bare_point() {
        // Out and back: the middle vertex has equal neighbours.
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let polygon = TrailGeometryBuilder::new(30.0).build_polygon(&[a, b, a]);
        assert!(polygon.vertices().iter().all(|v| v.is_finite()));
        // Tip, bare middle, two offsets for the newest, closing tip.
        assert_eq!(polygon.len(), 5);
        assert_eq!(polygon.vertices()[1], b);
    }

    #[test]
    fn two_points_geometry() {
        // Travelling along +x; width at index 1 of 2 is 10, so offsets of 5.
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let polygon = TrailGeometryBuilder::new(20.0).build_polygon(&points);
        let v = polygon.vertices();
        assert_eq!(v.len(), 4);
        assert_near(v[0], Point::new(0.0, 0.0));
        assert_near(v[1], Point::new(10.0, 5.0));
        assert_near(v[2], Point::new(10.0, -5.0));
        assert_near(v[3], Point::new(0.0, 0.0));
    }

    #[test]
    fn sides_are_joined_into_a_ring() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 0.0),
        ];
        let polygon = TrailGeometryBuilder::new(40.0).build_polygon(&points);
        let v = polygon.vertices();
        // tip, l1, l2, l3, r3, r2, r1, tip
        assert_eq!(v.len(), 8);
        assert_near(v[1], Point::new(10.0, 5.0));
        assert_near(v[2], Point::new(20.0, 10.0));
        assert_near(v[3], Point::new(30.0, 15.0));
        assert_near(v[4], Point::new(30.0, -15.0));
        assert_near(v[5], Point::new(20.0, -10.0));
        assert_near(v[6], Point::new(10.0, -5.0));
        assert_eq!(v[0], v[7]);

        // A tapered ribbon: half of a 30 x 30 triangle on each side.
        assert!((polygon.to_path().area().abs() - 450.0).abs() < EPSILON);
    }

    #[test]
    fn interior_tangent_uses_both_neighbours() {
        // Right-angle turn at the middle vertex; its tangent is the diagonal.
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let polygon = TrailGeometryBuilder::new(30.0).build_polygon(&points);
        let v = polygon.vertices();
        let normal = Vec2::new(10.0, 10.0).turn_90().normalize();
        assert_near(v[1], points[1] + normal * 5.0);
        assert_near(v[4], points[1] - normal * 5.0);
    }

    #[test]
    fn extreme_and_subnormal_tangents_have_no_nan() {
        let builder = TrailGeometryBuilder::new(20.0);
        // Neighbour differences overflow to infinity.
        let huge = [
            Point::new(-1e308, -1e308),
            Point::new(0.0, 0.0),
            Point::new(1e308, 1e308),
            Point::new(-1e308, 1e308),
        ];
        // Neighbour differences are subnormal.
        let tiny = [
            Point::new(0.0, 0.0),
            Point::new(5e-324, 0.0),
            Point::new(1e-323, 5e-324),
        ];
        for points in [&huge[..], &tiny[..]] {
            let polygon = builder.build_polygon(points);
            assert!(polygon.vertices().iter().all(|v| !v.x.is_nan() && !v.y.is_nan()));
            assert_eq!(polygon.vertices().first(), polygon.vertices().last());
        }
    }

    #[test]
    fn paths() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let polygon = TrailGeometryBuilder::new(20.0).build_polygon(&points);

        let closed = polygon.to_path();
        assert!(matches!(closed.elements().first(), Some(PathEl::MoveTo(_))));
        assert_eq!(closed.elements().last(), Some(&PathEl::ClosePath));
        assert_eq!(closed.elements().len(), polygon.len() + 1);

        let open = polygon.to_polyline();
        assert_eq!(open.elements().len(), polygon.len());
        assert!(!open.elements().contains(&PathEl::ClosePath));
    }

    #[test]
    fn idempotent() {
        let mut rng = StdRng::seed_from_u64(99);
        let points: Vec<Point> = (0..64)
            .map(|_| Point::new(rng.random_range(0.0..500.0), rng.random_range(0.0..500.0)))
            .collect();
        let builder = TrailGeometryBuilder::new(20.0);
        assert_eq!(builder.build_polygon(&points), builder.build_polygon(&points));
    }

    #[test]
    fn random_walks_never_produce_nan() {
        let mut rng = StdRng::seed_from_u64(5);
        let builder = TrailGeometryBuilder::default();
        for _ in 0..100 {
            let mut pos = Point::new(0.0, 0.0);
            let points: Vec<Point> = (0..rng.random_range(0..40))
                .map(|_| {
                    // Small integer steps so that repeats and reversals happen.
                    let dx = f64::from(rng.random_range(-1_i32..=1));
                    let dy = f64::from(rng.random_range(-1_i32..=1));
                    pos += Vec2::new(dx, dy);
                    pos
                })
                .collect();
            let polygon = builder.build_polygon(&points);
            assert!(polygon.vertices().iter().all(|v| v.is_finite()));
            assert!(polygon.len() <= 2 * points.len());
            if polygon.len() > 1 {
                assert_eq!(polygon.vertices().first(), polygon.vertices().last());
            }
        }
    }

    #[cfg(feature = "schemars")]
    #[test]
    fn builder_schema() {
        let schema = schemars::schema_for!(TrailGeometryBuilder);
        let object = schema.schema.object.as_ref().unwrap();
        assert!(object.properties.contains_key("width"));
    }
}
