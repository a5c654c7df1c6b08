// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sampling of a moving position into a decaying list of trail vertices.

use alloc::vec::Vec;

use crate::{Point, TrailConfig};

/// Records trail vertices from a moving position and expires them once they
/// are older than the configured lifetime.
///
/// Vertices are kept oldest first. Each vertex is a position plus the
/// timestamp, in milliseconds, at which it was recorded.
///
/// Timestamps passed to [`update`](Self::update) must be non-decreasing
/// across calls, as produced by a monotonic animation clock. The expiry
/// window is only meaningful under that contract; it is not checked.
///
/// # Examples
///
/// ```
/// use ribbon::{Point, PositionSampler, TrailConfig};
///
/// let mut sampler = PositionSampler::new(TrailConfig::default());
/// sampler.update(Point::new(0.0, 0.0), 0.0);
/// sampler.update(Point::new(5.0, 0.0), 10.0);
/// sampler.update(Point::new(20.0, 0.0), 20.0);
/// assert_eq!(sampler.points(), &[Point::new(0.0, 0.0), Point::new(20.0, 0.0)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PositionSampler {
    config: TrailConfig,
    // Invariant: `points.len() == times.len()`.
    points: Vec<Point>,
    times: Vec<f64>,
}

impl PositionSampler {
    /// Create an empty sampler.
    pub fn new(config: TrailConfig) -> PositionSampler {
        PositionSampler {
            config,
            points: Vec::new(),
            times: Vec::new(),
        }
    }

    /// Feed the current position at `timestamp` (milliseconds).
    ///
    /// A vertex is appended when there is none yet, or when `pos` is
    /// strictly farther than the minimum vertex distance from the newest
    /// vertex. Then every vertex recorded before
    /// `timestamp - lifetime * 1000` is dropped.
    pub fn update(&mut self, pos: Point, timestamp: f64) {
        let far_enough = match self.newest() {
            None => true,
            Some(newest) => newest.distance(pos) > self.config.min_vertex_distance,
        };
        if far_enough {
            self.points.push(pos);
            self.times.push(timestamp);
            log::trace!("trail vertex {pos} recorded at {timestamp}ms");
        }

        let cutoff = timestamp - self.config.lifetime_millis();
        let expired = self.times.iter().take_while(|&&t| t < cutoff).count();
        if expired > 0 {
            self.points.drain(..expired);
            self.times.drain(..expired);
            log::trace!("{expired} trail vertices expired before {cutoff}ms");
        }
    }

    /// The recorded positions, oldest first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The recording timestamps, in lockstep with [`points`](Self::points).
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Iterate over `(position, timestamp)` pairs, oldest first.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (Point, f64)> + '_ {
        self.points.iter().copied().zip(self.times.iter().copied())
    }

    /// The most recently recorded position.
    #[inline]
    pub fn newest(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// The number of live vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no live vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drop every vertex.
    pub fn clear(&mut self) {
        self.points.clear();
        self.times.clear();
    }

    /// The configuration this sampler was created with.
    #[inline]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }
}
