// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag a ball along a curve and print the resulting trail as HTML.
//!
//! The drag is simulated at 60 frames per second. The page shows the same
//! moment twice: once with the trail filled, once with the sampling
//! visualized.

#[cfg(feature = "std")]
fn main() -> Result<(), ribbon::ConfigError> {
    use ribbon::{Point, RenderMode, Scene, SvgRenderer, TrailConfig};

    const WIDTH: f64 = 800.0;
    const HEIGHT: f64 = 600.0;
    const FRAME_MILLIS: f64 = 1000.0 / 60.0;

    let config = TrailConfig::try_new(24.0, 0.8, TrailConfig::DEFAULT_MIN_VERTEX_DISTANCE)?;
    let mut scene = Scene::centered(WIDTH, HEIGHT, config);

    // Grab the ball at the left edge and swing it along a wave.
    let mid = scene.ball().position.y;
    scene.pointer_down(Point::new(100.0, mid));
    let frames = 90;
    for frame in 0..frames {
        let t = f64::from(frame) / f64::from(frames);
        let x = 100.0 + 600.0 * t;
        let y = mid + 150.0 * (t * core::f64::consts::TAU).sin();
        scene.pointer_move(Point::new(x, y));
        scene.frame(f64::from(frame) * FRAME_MILLIS);
    }
    scene.pointer_up();

    println!("<!DOCTYPE html>");
    println!("<html>");
    println!("<body>");
    for mode in [RenderMode::Fill, RenderMode::Visualize] {
        scene.set_render_mode(mode);
        let mut svg = SvgRenderer::new();
        scene.draw(&mut svg);
        println!("<h2>{mode:?}</h2>");
        print!("{}", svg.finish(WIDTH, HEIGHT));
    }
    println!("</body>");
    println!("</html>");
    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {
    println!("This example requires the standard library");
}
