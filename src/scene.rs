// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A draggable ball with a trail.
//!
//! [`Scene`] owns everything that changes from frame to frame. The host
//! delivers pointer events and frame ticks to it, and hands it a
//! [`Renderer`] to draw into; it never talks to a window system itself.

use crate::{Circle, Point, RenderMode, Renderer, Trail, TrailConfig};

/// The dragged object.
#[derive(Clone, Debug)]
pub struct Ball {
    /// Current position of the centre.
    pub position: Point,
    /// Radius of the ball.
    pub radius: f64,
    /// The trail following the ball.
    pub trail: Trail,
}

impl Ball {
    /// Radius of a ball created with [`Ball::new`].
    pub const DEFAULT_RADIUS: f64 = 10.0;

    /// A ball at `position` with an empty trail.
    pub fn new(position: impl Into<Point>, config: TrailConfig) -> Ball {
        Ball {
            position: position.into(),
            radius: Self::DEFAULT_RADIUS,
            trail: Trail::new(config),
        }
    }

    /// The disc covered by the ball.
    #[inline]
    pub fn shape(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    /// Draw the trail, then the ball on top of it.
    pub fn draw<R: Renderer>(&self, mut renderer: R, mode: RenderMode) {
        self.trail.draw(&mut renderer, mode);
        renderer.fill_circle(self.shape());
    }
}

/// Everything a frame of the demo needs: the ball, whether it is being
/// dragged, and how its trail is drawn.
///
/// # Examples
///
/// ```
/// use ribbon::{Point, Scene, SvgRenderer, TrailConfig};
///
/// let mut scene = Scene::centered(640.0, 480.0, TrailConfig::default());
/// scene.pointer_down(Point::new(10.0, 10.0));
/// for frame in 0..30 {
///     scene.pointer_move(Point::new(10.0 + frame as f64 * 12.0, 10.0));
///     scene.frame(frame as f64 * 16.0);
/// }
/// scene.pointer_up();
///
/// let mut svg = SvgRenderer::new();
/// scene.draw(&mut svg);
/// assert!(svg.body().contains("<path"));
/// ```
#[derive(Clone, Debug)]
pub struct Scene {
    ball: Ball,
    dragging: bool,
    mode: RenderMode,
}

impl Scene {
    /// A scene with the ball resting at `position`.
    pub fn new(position: impl Into<Point>, config: TrailConfig) -> Scene {
        Scene {
            ball: Ball::new(position, config),
            dragging: false,
            mode: RenderMode::Fill,
        }
    }

    /// A scene with the ball resting at the centre of a `width` by `height`
    /// surface.
    pub fn centered(width: f64, height: f64, config: TrailConfig) -> Scene {
        Scene::new((width / 2.0, height / 2.0), config)
    }

    /// The pointer was pressed at `pos`: the ball jumps there and starts
    /// following the pointer.
    pub fn pointer_down(&mut self, pos: Point) {
        log::debug!("drag started at {pos}");
        self.dragging = true;
        self.ball.position = pos;
    }

    /// The pointer moved to `pos`. The ball only follows while dragging.
    pub fn pointer_move(&mut self, pos: Point) {
        if self.dragging {
            self.ball.position = pos;
        }
    }

    /// The pointer was released.
    pub fn pointer_up(&mut self) {
        if self.dragging {
            log::debug!("drag ended at {}", self.ball.position);
        }
        self.dragging = false;
    }

    /// Advance to `timestamp`, in milliseconds from a monotonic clock.
    ///
    /// Call once per displayed frame, before [`draw`](Self::draw).
    pub fn frame(&mut self, timestamp: f64) {
        self.ball.trail.update(self.ball.position, timestamp);
    }

    /// Draw the current frame.
    pub fn draw<R: Renderer>(&self, renderer: R) {
        self.ball.draw(renderer, self.mode);
    }

    /// Whether the ball is following the pointer.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The ball.
    #[inline]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// How the trail is drawn.
    #[inline]
    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// Change how the trail is drawn.
    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }
}
