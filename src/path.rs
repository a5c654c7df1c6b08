// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polyline paths, the form in which geometry is handed to a renderer.

use alloc::vec::Vec;

use crate::{Line, Point};

/// A path made of straight segments, possibly with multiple subpaths.
///
/// This is the only drawing currency of the crate: a renderer needs to
/// understand "move to", "line to" and "close", and then fill or stroke the
/// result.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<PathEl>);

/// The element of a path.
///
/// A valid path has `MoveTo` at the beginning of each subpath.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Close off the path.
    ClosePath,
}

impl Path {
    /// Create a new path.
    #[inline]
    pub fn new() -> Path {
        Path::default()
    }

    /// Create an open polyline through the given points.
    ///
    /// Returns an empty path when `points` is empty.
    pub fn from_polyline(points: &[Point]) -> Path {
        let mut path = Path(Vec::with_capacity(points.len()));
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
        }
        path
    }

    /// Push a generic path element onto the path.
    #[inline]
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    #[inline]
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a "line to" element onto the path.
    #[inline]
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a "close path" element onto the path.
    #[inline]
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// Get the path elements.
    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns `true` if the path contains no segments.
    pub fn is_empty(&self) -> bool {
        self.0
            .iter()
            .all(|el| matches!(*el, PathEl::MoveTo(..) | PathEl::ClosePath))
    }

    /// Iterate over the path segments.
    ///
    /// A `ClosePath` yields the closing segment back to the subpath start,
    /// unless the current point is already there.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        let first = match self.0.first() {
            Some(PathEl::MoveTo(p)) => *p,
            _ => Point::ZERO,
        };
        PathSegs {
            c: self.0.iter(),
            start: first,
            last: first,
        }
    }

    /// Signed area enclosed by the path.
    ///
    /// Only meaningful for closed paths. In a Y-down coordinate system a
    /// clockwise path has positive area.
    pub fn area(&self) -> f64 {
        self.segments().map(|seg| seg.signed_area()).sum()
    }
}

impl FromIterator<PathEl> for Path {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Self {
        Path(iter.into_iter().collect())
    }
}

struct PathSegs<'a> {
    c: core::slice::Iter<'a, PathEl>,
    start: Point,
    last: Point,
}

impl Iterator for PathSegs<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        for el in &mut self.c {
            let (ret, last) = match *el {
                PathEl::MoveTo(p) => {
                    self.start = p;
                    self.last = p;
                    continue;
                }
                PathEl::LineTo(p) => (Line::new(self.last, p), p),
                PathEl::ClosePath => {
                    if self.last != self.start {
                        (Line::new(self.last, self.start), self.start)
                    } else {
                        continue;
                    }
                }
            };

            self.last = last;
            return Some(ret);
        }
        None
    }
}
