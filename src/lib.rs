// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapering motion trails for 2D graphics.
//!
//! A trail follows a moving position, such as a dragged object, and is drawn
//! as a filled ribbon that is widest at the object and narrows to a point at
//! its oldest end. Old parts of the trail expire after a fixed lifetime, so a
//! trail left alone fades away.
//!
//! The work is split in two:
//!
//! - [`PositionSampler`] decides which positions become trail vertices, and
//!   when they expire.
//! - [`TrailGeometryBuilder`] turns the vertices into a closed outline, a
//!   [`TrailPolygon`].
//!
//! [`Trail`] puts the two together and draws through the [`Renderer`] trait.
//! [`Scene`] is a complete small application around it: a ball that can be
//! dragged, leaving a trail.
//!
//! # Examples
//!
//! ```
//! use ribbon::{Point, TrailConfig, PositionSampler, TrailGeometryBuilder};
//!
//! let config = TrailConfig::default();
//! let mut sampler = PositionSampler::new(config);
//! for frame in 0..20 {
//!     let t = frame as f64 * 16.0;
//!     sampler.update(Point::new(frame as f64 * 12.0, 50.0), t);
//! }
//!
//! let polygon = TrailGeometryBuilder::new(config.width).build_polygon(sampler.points());
//! assert_eq!(polygon.vertices().first(), polygon.vertices().last());
//! println!("{}", polygon.to_path().to_svg());
//! ```
//!
//! # Logging
//!
//! Vertex sampling and dragging emit events through the [`log`] facade at
//! `trace` and `debug` level. The crate never installs a logger.
//!
//! # Features
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of Ribbon and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on value types and
//!   [`TrailConfig`].
//! - `schemars`: Add best-effort support for using Ribbon types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! Note that Ribbon does require that an allocator is available (i.e. it uses [alloc]).
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::exhaustive_enums,
    clippy::use_self,
    clippy::missing_assert_message,
    clippy::cast_possible_truncation,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("ribbon requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod circle;
mod common;
mod config;
mod line;
mod path;
mod point;
mod render;
mod ribbon;
mod sampler;
mod scene;
mod svg;
mod trail;
mod vec2;

pub use crate::circle::Circle;
pub use crate::config::{ConfigError, TrailConfig};
pub use crate::line::Line;
pub use crate::path::{Path, PathEl};
pub use crate::point::Point;
pub use crate::render::{RenderMode, Renderer, SvgRenderer};
pub use crate::ribbon::{TrailGeometryBuilder, TrailPolygon};
pub use crate::sampler::PositionSampler;
pub use crate::scene::{Ball, Scene};
pub use crate::trail::{Trail, MARKER_RADIUS};
pub use crate::vec2::Vec2;
