// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface interface, and an SVG implementation of it.

use alloc::string::String;
use core::fmt::Write;

use crate::{Circle, Path};

/// How a trail is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    /// Fill the closed outline.
    #[default]
    Fill,
    /// Stroke the outline as an open polyline and mark every sampled
    /// position with a small dot, to inspect the sampling density.
    Visualize,
}

/// A 2D drawing surface.
///
/// Paths handed to a renderer only contain [`MoveTo`], [`LineTo`] and
/// [`ClosePath`] elements. Style (colour, line width) is up to the
/// renderer.
///
/// [`MoveTo`]: crate::PathEl::MoveTo
/// [`LineTo`]: crate::PathEl::LineTo
/// [`ClosePath`]: crate::PathEl::ClosePath
pub trait Renderer {
    /// Fill the interior of a path.
    fn fill(&mut self, path: &Path);

    /// Draw the outline of a path.
    fn stroke(&mut self, path: &Path);

    /// Fill a circle.
    fn fill_circle(&mut self, circle: Circle);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn fill(&mut self, path: &Path) {
        (**self).fill(path);
    }

    fn stroke(&mut self, path: &Path) {
        (**self).stroke(path);
    }

    fn fill_circle(&mut self, circle: Circle) {
        (**self).fill_circle(circle);
    }
}

/// A [`Renderer`] that accumulates SVG elements.
///
/// # Examples
///
/// ```
/// use ribbon::{Circle, Renderer, SvgRenderer};
///
/// let mut svg = SvgRenderer::new();
/// svg.fill_circle(Circle::new((5.0, 5.0), 2.0));
/// assert_eq!(svg.body(), "<circle cx=\"5\" cy=\"5\" r=\"2\" fill=\"#4CAF50\" />\n");
/// ```
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    color: String,
    body: String,
}

impl SvgRenderer {
    /// The colour used by [`SvgRenderer::new`].
    pub const DEFAULT_COLOR: &'static str = "#4CAF50";

    /// Create an empty renderer drawing in [`SvgRenderer::DEFAULT_COLOR`].
    pub fn new() -> SvgRenderer {
        SvgRenderer::with_color(Self::DEFAULT_COLOR)
    }

    /// Create an empty renderer drawing in the given SVG colour.
    pub fn with_color(color: &str) -> SvgRenderer {
        SvgRenderer {
            color: color.into(),
            body: String::new(),
        }
    }

    /// The elements drawn so far, one per line.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Forget everything drawn so far, as at the start of a frame.
    pub fn clear(&mut self) {
        self.body.clear();
    }

    /// Wrap the elements drawn so far in an `<svg>` element of the given size.
    pub fn finish(&self, width: f64, height: f64) -> String {
        let mut out = String::with_capacity(self.body.len() + 128);
        // Formatting into a `String` never fails.
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\n{}</svg>\n",
            self.body
        );
        out
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        SvgRenderer::new()
    }
}

impl Renderer for SvgRenderer {
    fn fill(&mut self, path: &Path) {
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" fill=\"{}\" />",
            path.to_svg(),
            self.color
        );
    }

    fn stroke(&mut self, path: &Path) {
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" stroke=\"{}\" fill=\"none\" />",
            path.to_svg(),
            self.color
        );
    }

    fn fill_circle(&mut self, circle: Circle) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" />",
            circle.center.x, circle.center.y, circle.radius, self.color
        );
    }
}
