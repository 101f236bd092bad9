// Copyright 2025 the Zoompane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoompane: a bounded pan/zoom viewport for 2D canvases.
//!
//! This crate provides a small, headless model of a zoomable canvas. Given
//! decoded scroll and drag input it maintains a uniform scale and a
//! translation such that:
//! - Zooming is anchored at the cursor: the canvas point under the cursor
//!   stays under it while the scale changes.
//! - The visible window never leaves the canvas, and the scale never drops
//!   below `1.0` (the whole canvas in view) or reaches the configured maximum.
//! - Repeated incremental steps stay consistent; zooming in and back out at
//!   the same point returns to where it started.
//!
//! It does **not** own any rendering backend or event loop. Callers are
//! expected to:
//! - Forward press, drag, release and scroll events to a [`Viewport`].
//! - Read the resulting [`ViewTransform`] (or receive it through
//!   [`ViewportHooks::apply_transform`]) and hand its affine to the renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use zoompane::{Viewport, ZoomConfig};
//!
//! let config = ZoomConfig::new(1.2, 10.0).unwrap();
//! let mut view = Viewport::new(Size::new(800.0, 600.0), config).unwrap();
//!
//! // Scroll in at the canvas center: scale grows, nothing shifts.
//! view.zoom_at(1.0, Point::new(400.0, 300.0));
//! assert!((view.scale() - 1.2).abs() < 1e-12);
//!
//! // Drag the content; the move is clamped to the canvas edges.
//! view.press(Point::new(100.0, 100.0));
//! view.drag_to(Point::new(130.0, 100.0));
//! view.release();
//!
//! let affine = view.transform().to_affine();
//! ```
//!
//! ## Clamping on its own
//!
//! The clamp is available as a pure function for callers that manage their
//! own state:
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use zoompane::clamp_translation;
//!
//! let size = Size::new(800.0, 600.0);
//! let t = clamp_translation(Vec2::new(500.0, 0.0), 2.0, size);
//! assert_eq!(t, Vec2::new(200.0, 0.0));
//! ```
//!
//! Logging goes through [`tracing`]: applied steps are `trace` events, ceiling
//! rejections and clamp corrections are `debug` events.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod bounds;
mod config;
mod hooks;
mod pointer;
mod transform;
mod viewport;

pub use bounds::{clamp_translation, is_within_bounds, visible_window};
pub use config::{ConfigError, ZoomConfig};
pub use hooks::{HookEvent, HookRecorder, ViewportHooks};
pub use pointer::PointerTrack;
pub use transform::ViewTransform;
pub use viewport::{Viewport, ViewportDebugInfo};
