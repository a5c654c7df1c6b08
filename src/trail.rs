// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trail component, to be attached to a moving object.

use crate::{
    Circle, Point, PositionSampler, RenderMode, Renderer, TrailConfig, TrailGeometryBuilder,
    TrailPolygon,
};

/// Radius of the dots marking sampled positions in [`RenderMode::Visualize`].
pub const MARKER_RADIUS: f64 = 2.0;

/// A tapering trail that follows a moving position.
///
/// Call [`update`](Self::update) once per frame with the position of the
/// object being followed, then [`draw`](Self::draw) it.
///
/// # Examples
///
/// ```
/// use ribbon::{Point, RenderMode, SvgRenderer, Trail, TrailConfig};
///
/// let mut trail = Trail::new(TrailConfig::default());
/// for frame in 0..10 {
///     let t = frame as f64 * 16.0;
///     trail.update(Point::new(frame as f64 * 15.0, 100.0), t);
/// }
///
/// let mut svg = SvgRenderer::new();
/// trail.draw(&mut svg, RenderMode::Fill);
/// assert!(svg.body().starts_with("<path"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Trail {
    sampler: PositionSampler,
    builder: TrailGeometryBuilder,
}

impl Trail {
    /// Create an empty trail.
    pub fn new(config: TrailConfig) -> Trail {
        Trail {
            sampler: PositionSampler::new(config),
            builder: TrailGeometryBuilder::new(config.width),
        }
    }

    /// Advance the trail to `timestamp` (milliseconds, non-decreasing) with
    /// the followed object at `pos`.
    ///
    /// See [`PositionSampler::update`].
    #[inline]
    pub fn update(&mut self, pos: Point, timestamp: f64) {
        self.sampler.update(pos, timestamp);
    }

    /// The outline of the trail in its current state.
    pub fn polygon(&self) -> TrailPolygon {
        self.builder.build_polygon(self.sampler.points())
    }

    /// Draw the trail.
    ///
    /// Nothing is drawn while the trail has no vertices.
    pub fn draw<R: Renderer>(&self, mut renderer: R, mode: RenderMode) {
        let polygon = self.polygon();
        if polygon.is_empty() {
            return;
        }
        match mode {
            RenderMode::Fill => renderer.fill(&polygon.to_path()),
            RenderMode::Visualize => {
                renderer.stroke(&polygon.to_polyline());
                for &p in self.sampler.points() {
                    renderer.fill_circle(Circle::new(p, MARKER_RADIUS));
                }
            }
        }
    }

    /// The vertex sampler.
    #[inline]
    pub fn sampler(&self) -> &PositionSampler {
        &self.sampler
    }

    /// The geometry builder.
    #[inline]
    pub fn builder(&self) -> &TrailGeometryBuilder {
        &self.builder
    }

    /// The trail's configuration.
    #[inline]
    pub fn config(&self) -> &TrailConfig {
        self.sampler.config()
    }

    /// Drop every vertex.
    pub fn clear(&mut self) {
        self.sampler.clear();
    }
}
