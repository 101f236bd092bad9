// Copyright 2025 the Zoompane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer hooks invoked around viewport operations.
//!
//! Hooks observe; they cannot veto or alter an operation. Every method has an
//! empty default body, so implementors only override what they care about.
//! `()` is the "no hooks" implementation used by [`crate::Viewport::new`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use zoompane::{HookEvent, HookRecorder, Viewport, ZoomConfig};
//!
//! let mut vp = Viewport::with_hooks(
//!     Size::new(800.0, 600.0),
//!     ZoomConfig::default(),
//!     HookRecorder::new(),
//! )
//! .unwrap();
//!
//! vp.pan(Point::new(0.0, 0.0), Point::new(0.0, 0.0));
//! assert_eq!(vp.hooks().events()[0], HookEvent::BeforeMove);
//! ```

use alloc::vec::Vec;

use crate::transform::ViewTransform;

/// Callbacks invoked synchronously by [`crate::Viewport`].
///
/// For a zoom the order is `before_zoom`, `apply_transform`, `after_zoom`;
/// for a pan it is `before_move`, `apply_transform`, `after_move`.
pub trait ViewportHooks {
    /// Called before a zoom step with the factor about to be applied.
    ///
    /// The factor has already been corrected for the `1.0` scale floor.
    fn before_zoom(&mut self, factor: f64) {
        let _ = factor;
    }

    /// Called after a zoom step has been applied.
    fn after_zoom(&mut self, factor: f64) {
        let _ = factor;
    }

    /// Called before a pan moves the translation.
    fn before_move(&mut self) {}

    /// Called after a pan has been applied.
    fn after_move(&mut self) {}

    /// Called with the new transform each time the viewport changes.
    ///
    /// The value fully replaces any previously applied transform.
    fn apply_transform(&mut self, transform: ViewTransform) {
        let _ = transform;
    }
}

impl ViewportHooks for () {}

impl<H: ViewportHooks + ?Sized> ViewportHooks for &mut H {
    fn before_zoom(&mut self, factor: f64) {
        (**self).before_zoom(factor);
    }

    fn after_zoom(&mut self, factor: f64) {
        (**self).after_zoom(factor);
    }

    fn before_move(&mut self) {
        (**self).before_move();
    }

    fn after_move(&mut self) {
        (**self).after_move();
    }

    fn apply_transform(&mut self, transform: ViewTransform) {
        (**self).apply_transform(transform);
    }
}

/// One recorded hook invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HookEvent {
    /// [`ViewportHooks::before_zoom`] with its factor.
    BeforeZoom(f64),
    /// [`ViewportHooks::after_zoom`] with its factor.
    AfterZoom(f64),
    /// [`ViewportHooks::before_move`].
    BeforeMove,
    /// [`ViewportHooks::after_move`].
    AfterMove,
    /// [`ViewportHooks::apply_transform`] with the applied transform.
    Apply(ViewTransform),
}

/// Records every hook invocation in order.
#[derive(Clone, Debug, Default)]
pub struct HookRecorder {
    events: Vec<HookEvent>,
}

impl HookRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[HookEvent] {
        &self.events
    }

    /// The most recently applied transform, if any.
    #[must_use]
    pub fn last_transform(&self) -> Option<ViewTransform> {
        self.events.iter().rev().find_map(|event| match event {
            HookEvent::Apply(transform) => Some(*transform),
            _ => None,
        })
    }

    /// Forgets all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ViewportHooks for HookRecorder {
    fn before_zoom(&mut self, factor: f64) {
        self.events.push(HookEvent::BeforeZoom(factor));
    }

    fn after_zoom(&mut self, factor: f64) {
        self.events.push(HookEvent::AfterZoom(factor));
    }

    fn before_move(&mut self) {
        self.events.push(HookEvent::BeforeMove);
    }

    fn after_move(&mut self) {
        self.events.push(HookEvent::AfterMove);
    }

    fn apply_transform(&mut self, transform: ViewTransform) {
        self.events.push(HookEvent::Apply(transform));
    }
}
