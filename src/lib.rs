// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry of a seven-fold Celtic knot drawn from circular arcs.
//!
//! The knot is laid over 14 crossover points alternating between two radii.
//! Every strand segment is a circular arc, and the arc centers are solved so
//! that neighbouring arcs meet tangentially. The result can be written out as
//! an SVG document.
//!
//! # Examples
//!
//! ```
//! use knotwork::{Knot, KnotParams, RenderConfig, Renderer, Tier};
//!
//! let knot = Knot::new(&KnotParams::default()).unwrap();
//! assert_eq!(knot.tier(Tier::Middle).len(), 14);
//! for (_, arc) in knot.arcs() {
//!     assert!(arc.is_consistent(1e-9));
//! }
//!
//! let config = RenderConfig::default();
//! let svg = Renderer::new(&config).to_svg(&knot);
//! assert!(svg.starts_with("<?xml"));
//! ```
//!
//! Solving an arc center by hand:
//!
//! ```
//! use knotwork::{Line, Point};
//!
//! let a = Line::new((0.0, 1.0), (2.0, 1.0));
//! let b = Line::perpendicular_bisector(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
//! assert_eq!(a.crossing_point(b), Some(Point::new(1.0, 1.0)));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. The `alloc` crate is
//! used regardless. The `cli` feature (default) builds the `knotwork` binary,
//! and `serde` derives serialization for the parameter and style types.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("knotwork requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod arc;
mod circle;
pub mod common;
mod crossover;
mod knot;
mod line;
mod overlay;
mod point;
mod render;
mod rose;
mod style;
mod svg;
mod vec2;

pub use crate::arc::*;
pub use crate::circle::*;
pub use crate::crossover::*;
pub use crate::knot::*;
pub use crate::line::*;
pub use crate::overlay::*;
pub use crate::point::*;
pub use crate::render::*;
pub use crate::rose::*;
pub use crate::style::*;
pub use crate::svg::*;
pub use crate::vec2::*;
