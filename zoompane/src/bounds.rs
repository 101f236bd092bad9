// Copyright 2025 the Zoompane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds clamping for a scaled window over an origin‑centered canvas.
//!
//! All functions here work in canvas units with the canvas rectangle centered
//! on the origin, spanning `[-width/2, width/2] × [-height/2, height/2]`. A
//! translation `t` at scale `s` shows the window of size `size / s` centered at
//! `-t`; the clamp keeps that window inside the canvas rectangle.

use kurbo::{Point, Rect, Size, Vec2};

/// Relative slack accepted by [`is_within_bounds`] for rounding error.
const BOUNDS_TOLERANCE: f64 = 1e-9;

/// Returns the in‑bounds translation nearest to `candidate` at `scale`.
///
/// Each axis is clamped independently:
/// - If the visible window (`extent / scale`) would cross the positive edge,
///   the translation is pinned so the window touches that edge.
/// - Likewise for the negative edge.
/// - Otherwise the candidate passes through unchanged.
///
/// When the window is at least as large as the canvas along an axis, the
/// result on that axis is exactly `0.0`, so the canvas is centered.
#[must_use]
pub fn clamp_translation(candidate: Vec2, scale: f64, size: Size) -> Vec2 {
    Vec2::new(
        clamp_axis(candidate.x, size.width, scale),
        clamp_axis(candidate.y, size.height, scale),
    )
}

/// Returns `true` if `translation` keeps the visible window inside the canvas.
///
/// A small tolerance relative to the canvas extent absorbs rounding error, so
/// any output of [`clamp_translation`] is reported as in bounds.
#[must_use]
pub fn is_within_bounds(translation: Vec2, scale: f64, size: Size) -> bool {
    axis_within_bounds(translation.x, size.width, scale)
        && axis_within_bounds(translation.y, size.height, scale)
}

/// Returns the visible window in origin‑centered canvas coordinates.
#[must_use]
pub fn visible_window(translation: Vec2, scale: f64, size: Size) -> Rect {
    let visible = Size::new(size.width / scale, size.height / scale);
    Rect::from_center_size(Point::ZERO - translation, visible)
}

fn clamp_axis(candidate: f64, extent: f64, scale: f64) -> f64 {
    let visible = extent / scale;
    if visible >= extent {
        return 0.0;
    }
    let half_extent = extent / 2.0;
    let half_visible = visible / 2.0;
    let limit = half_extent - half_visible;
    if candidate + half_visible > half_extent {
        limit
    } else if candidate - half_visible < -half_extent {
        -limit
    } else {
        candidate
    }
}

fn axis_within_bounds(translation: f64, extent: f64, scale: f64) -> bool {
    let limit = (extent / 2.0 - extent / scale / 2.0).max(0.0);
    translation.abs() <= limit + extent * BOUNDS_TOLERANCE
}
