// Copyright 2025 the Zoompane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use tracing::{debug, trace};

use crate::bounds::{clamp_translation, visible_window};
use crate::config::{ConfigError, ZoomConfig, check_canvas_size};
use crate::hooks::ViewportHooks;
use crate::pointer::PointerTrack;
use crate::transform::ViewTransform;

/// Bounded pan/zoom state over a fixed‑size canvas.
///
/// `Viewport` owns a uniform scale and a translation (in canvas units) and
/// keeps them inside the canvas at all times:
/// - The scale stays in `[1.0, max_scale)`.
/// - The visible window (`size / scale`) never leaves the canvas rectangle.
///
/// Input arrives as already decoded pointer positions and scroll deltas, in
/// view coordinates with the origin at the canvas's top‑left corner. Hooks of
/// type `H` observe every change; use `()` when nothing needs to observe.
#[derive(Clone, Debug)]
pub struct Viewport<H = ()> {
    size: Size,
    scale: f64,
    translation: Vec2,
    config: ZoomConfig,
    pointer: PointerTrack,
    hooks: H,
}

impl Viewport {
    /// Creates a viewport over a canvas of `size` with no hooks attached.
    ///
    /// Fails if `size` is not finite and positive on both axes.
    pub fn new(size: Size, config: ZoomConfig) -> Result<Self, ConfigError> {
        Self::with_hooks(size, config, ())
    }
}

impl<H: ViewportHooks> Viewport<H> {
    /// Creates a viewport that reports to `hooks`.
    ///
    /// The initial scale is `1.0` and the initial translation is zero.
    pub fn with_hooks(size: Size, config: ZoomConfig, hooks: H) -> Result<Self, ConfigError> {
        Ok(Self {
            size: check_canvas_size(size)?,
            scale: 1.0,
            translation: Vec2::ZERO,
            config,
            pointer: PointerTrack::default(),
            hooks,
        })
    }

    /// Logical canvas size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current translation in canvas units.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Current zoom configuration.
    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    /// Multiplier applied per scroll tick.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.config.scale_factor()
    }

    /// Changes the per‑tick multiplier. Must be finite and greater than `1.0`.
    pub fn set_scale_factor(&mut self, scale_factor: f64) -> Result<(), ConfigError> {
        self.config = ZoomConfig::new(scale_factor, self.config.max_scale())?;
        Ok(())
    }

    /// Exclusive upper bound on the scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.config.max_scale()
    }

    /// Changes the maximum scale. Must be finite and greater than `1.0`.
    ///
    /// The current scale is left untouched; if it already exceeds the new
    /// maximum, zooming in is rejected while zooming out still works.
    pub fn set_max_scale(&mut self, max_scale: f64) -> Result<(), ConfigError> {
        self.config = ZoomConfig::new(self.config.scale_factor(), max_scale)?;
        Ok(())
    }

    /// The transform currently applied to the canvas.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.scale,
            translation: self.translation,
            size: self.size,
        }
    }

    /// Shared access to the attached hooks.
    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable access to the attached hooks.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Consumes the viewport, returning its hooks.
    pub fn into_hooks(self) -> H {
        self.hooks
    }

    /// Pans by the pointer movement from `previous` to `current`.
    ///
    /// The movement is divided by the current scale so content tracks the
    /// pointer one to one at any zoom level. `current` becomes the reference
    /// point for the next [`Viewport::drag_to`].
    pub fn pan(&mut self, previous: Point, current: Point) {
        let delta = (current - previous) / self.scale;

        self.hooks.before_move();

        let candidate = self.translation + delta;
        self.translation = self.clamped(candidate);
        self.apply();

        self.pointer.record(current);
        trace!(
            dx = delta.x,
            dy = delta.y,
            tx = self.translation.x,
            ty = self.translation.y,
            "pan"
        );

        self.hooks.after_move();
    }

    /// Zooms one scroll tick toward (`scroll_delta > 0`) or away from `anchor`.
    ///
    /// Only the sign of `scroll_delta` matters; zero counts as zooming out.
    /// The canvas point under `anchor` stays under it unless the result has
    /// to be clamped back into bounds.
    ///
    /// Returns the factor that was applied, or `None` if the step would reach
    /// [`Viewport::max_scale`]. A zoom out from scale `1.0` applies a factor of
    /// `1.0` and leaves the view unchanged.
    pub fn zoom_at(&mut self, scroll_delta: f64, anchor: Point) -> Option<f64> {
        let step = if scroll_delta > 0.0 {
            self.config.scale_factor()
        } else {
            1.0 / self.config.scale_factor()
        };

        // Only zooming in can hit the ceiling; zooming out must stay possible
        // after `max_scale` was lowered below the current scale.
        if step > 1.0 && self.scale * step >= self.config.max_scale() {
            debug!(
                scale = self.scale,
                max_scale = self.config.max_scale(),
                "zoom step rejected at maximum scale"
            );
            return None;
        }

        // Never overshoot the 1.0 floor in a single tick.
        let (factor, new_scale) = if self.scale * step < 1.0 {
            (1.0 / self.scale, 1.0)
        } else {
            (step, self.scale * step)
        };

        self.hooks.before_zoom(factor);

        let center = self.size.to_vec2() / 2.0;
        let center_offset = (center - anchor.to_vec2()) / self.scale;
        let candidate = self.translation + center_offset * (1.0 - 1.0 / factor);

        self.scale = new_scale;
        self.translation = self.clamped(candidate);
        self.apply();
        trace!(
            factor,
            scale = self.scale,
            tx = self.translation.x,
            ty = self.translation.y,
            "zoom"
        );

        self.hooks.after_zoom(factor);
        Some(factor)
    }

    /// Starts a drag at `pos`.
    pub fn press(&mut self, pos: Point) {
        self.pointer.press(pos);
    }

    /// Pans from the last reference point to `pos`.
    ///
    /// Does nothing until a reference point exists, either from
    /// [`Viewport::press`] or a previous [`Viewport::pan`].
    pub fn drag_to(&mut self, pos: Point) {
        if let Some(previous) = self.pointer.last() {
            self.pan(previous, pos);
        }
    }

    /// Ends the current drag.
    pub fn release(&mut self) {
        self.pointer.release();
    }

    /// Returns `true` while a press is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_pressed()
    }

    /// The reference point the next drag will be measured from.
    #[must_use]
    pub fn last_pointer(&self) -> Option<Point> {
        self.pointer.last()
    }

    /// Distance in view units from the press origin to `pos`.
    ///
    /// Hosts can use this to tell a click from a drag.
    #[must_use]
    pub fn drag_offset(&self, pos: Point) -> Option<Vec2> {
        self.pointer.total_offset(pos)
    }

    /// Forwards a decoded scroll event to [`Viewport::zoom_at`].
    pub fn scroll(&mut self, delta_y: f64, pos: Point) -> Option<f64> {
        self.zoom_at(delta_y, pos)
    }

    /// Converts a view‑space point into canvas coordinates.
    #[must_use]
    pub fn view_to_canvas_point(&self, pt: Point) -> Point {
        self.transform().view_to_canvas(pt)
    }

    /// Converts a canvas‑space point into view coordinates.
    #[must_use]
    pub fn canvas_to_view_point(&self, pt: Point) -> Point {
        self.transform().canvas_to_view(pt)
    }

    /// The part of the canvas currently visible, in canvas coordinates.
    #[must_use]
    pub fn visible_canvas_rect(&self) -> Rect {
        let transform = self.transform();
        Rect::from_points(
            transform.view_to_canvas(Point::ZERO),
            transform.view_to_canvas(self.size.to_vec2().to_point()),
        )
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            size: self.size,
            scale: self.scale,
            translation: self.translation,
            scale_factor: self.config.scale_factor(),
            max_scale: self.config.max_scale(),
            visible_window: visible_window(self.translation, self.scale, self.size),
            last_pointer: self.pointer.last(),
            dragging: self.pointer.is_pressed(),
        }
    }

    fn clamped(&self, candidate: Vec2) -> Vec2 {
        let clamped = clamp_translation(candidate, self.scale, self.size);
        if clamped != candidate {
            debug!(
                cx = candidate.x,
                cy = candidate.y,
                tx = clamped.x,
                ty = clamped.y,
                "translation clamped to canvas bounds"
            );
        }
        clamped
    }

    fn apply(&mut self) {
        let transform = self.transform();
        self.hooks.apply_transform(transform);
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Logical canvas size.
    pub size: Size,
    /// Current uniform scale.
    pub scale: f64,
    /// Current translation in canvas units.
    pub translation: Vec2,
    /// Per‑tick scale multiplier.
    pub scale_factor: f64,
    /// Exclusive upper bound on the scale.
    pub max_scale: f64,
    /// Visible window in origin‑centered canvas coordinates.
    pub visible_window: Rect,
    /// Reference point for the next drag, if any.
    pub last_pointer: Option<Point>,
    /// Whether a press is active.
    pub dragging: bool,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::Viewport;
    use crate::bounds::is_within_bounds;
    use crate::config::{ConfigError, ZoomConfig};
    use crate::hooks::{HookEvent, HookRecorder};

    const SIZE: Size = Size::new(800.0, 600.0);

    fn viewport() -> Viewport {
        Viewport::new(SIZE, ZoomConfig::new(1.2, 10.0).unwrap()).unwrap()
    }

    fn recording() -> Viewport<HookRecorder> {
        Viewport::with_hooks(SIZE, ZoomConfig::default(), HookRecorder::new()).unwrap()
    }

    #[test]
    fn starts_at_unit_scale_and_origin() {
        let vp = viewport();
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.translation(), Vec2::ZERO);
        assert_eq!(vp.last_pointer(), None);
        assert!(!vp.is_dragging());
    }

    #[test]
    fn rejects_degenerate_canvas() {
        let err = Viewport::new(Size::new(0.0, 600.0), ZoomConfig::default()).unwrap_err();
        assert_eq!(err, ConfigError::InvalidCanvasSize(Size::new(0.0, 600.0)));
    }

    #[test]
    fn zoom_at_center_does_not_translate() {
        let mut vp = viewport();
        assert_eq!(vp.zoom_at(1.0, Point::new(400.0, 300.0)), Some(1.2));
        assert!((vp.scale() - 1.2).abs() < 1e-12);
        assert!(vp.translation().hypot() < 1e-12);
    }

    #[test]
    fn zoom_in_then_out_returns_home() {
        let mut vp = viewport();
        let anchor = Point::new(100.0, 100.0);
        vp.zoom_at(1.0, anchor);
        assert!(vp.translation().x > 0.0 && vp.translation().y > 0.0);

        vp.zoom_at(-1.0, anchor);
        assert!((vp.scale() - 1.0).abs() < 1e-9);
        assert!(vp.translation().hypot() < 1e-9);
    }

    #[test]
    fn zoom_out_at_floor_keeps_unit_scale() {
        let mut vp = recording();
        assert_eq!(vp.zoom_at(-3.0, Point::new(10.0, 10.0)), Some(1.0));
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.translation(), Vec2::ZERO);
        assert_eq!(vp.hooks().events()[0], HookEvent::BeforeZoom(1.0));
    }

    #[test]
    fn zoom_out_snaps_to_floor_instead_of_overshooting() {
        let mut vp = viewport();
        vp.set_scale_factor(2.0).unwrap();
        vp.zoom_at(1.0, Point::new(400.0, 300.0));
        vp.set_scale_factor(3.0).unwrap();

        // 2.0 / 3.0 would land below the floor; the step is corrected to 0.5.
        assert_eq!(vp.zoom_at(-1.0, Point::new(400.0, 300.0)), Some(0.5));
        assert_eq!(vp.scale(), 1.0);
    }

    #[test]
    fn zero_scroll_delta_zooms_out() {
        let mut vp = viewport();
        vp.zoom_at(1.0, Point::new(400.0, 300.0));
        vp.zoom_at(0.0, Point::new(400.0, 300.0));
        assert!((vp.scale() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ceiling_rejects_without_side_effects() {
        let mut vp = recording();
        vp.set_max_scale(1.4).unwrap();
        assert_eq!(vp.zoom_at(1.0, Point::new(0.0, 0.0)), Some(1.2));
        vp.hooks_mut().clear();

        let before = vp.transform();
        assert_eq!(vp.zoom_at(1.0, Point::new(0.0, 0.0)), None);
        assert_eq!(vp.transform(), before);
        assert!(vp.hooks().events().is_empty());
    }

    #[test]
    fn lowered_maximum_still_allows_zoom_out() {
        let mut vp = viewport();
        for _ in 0..5 {
            vp.zoom_at(1.0, Point::new(400.0, 300.0));
        }
        vp.set_max_scale(1.5).unwrap();

        assert_eq!(vp.zoom_at(1.0, Point::new(400.0, 300.0)), None);
        assert!(vp.zoom_at(-1.0, Point::new(400.0, 300.0)).is_some());
        assert!(vp.scale() < 2.48);
    }

    #[test]
    fn zoom_hooks_fire_in_order() {
        let mut vp = recording();
        vp.zoom_at(1.0, Point::new(200.0, 150.0));

        let events = vp.hooks().events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], HookEvent::BeforeZoom(1.2));
        assert_eq!(events[1], HookEvent::Apply(vp.transform()));
        assert_eq!(events[2], HookEvent::AfterZoom(1.2));
    }

    #[test]
    fn pan_divides_by_scale() {
        let mut vp = viewport();
        vp.zoom_at(1.0, Point::new(400.0, 300.0));
        vp.zoom_at(1.0, Point::new(400.0, 300.0));
        let scale = vp.scale();

        vp.pan(Point::new(100.0, 100.0), Point::new(110.0, 95.0));
        let t = vp.translation();
        assert!((t.x - 10.0 / scale).abs() < 1e-9);
        assert!((t.y + 5.0 / scale).abs() < 1e-9);
        assert_eq!(vp.last_pointer(), Some(Point::new(110.0, 95.0)));
    }

    #[test]
    fn pan_at_unit_scale_is_pinned() {
        let mut vp = recording();
        vp.pan(Point::new(0.0, 0.0), Point::new(250.0, -40.0));
        assert_eq!(vp.translation(), Vec2::ZERO);

        let events = vp.hooks().events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], HookEvent::BeforeMove);
        assert_eq!(events[2], HookEvent::AfterMove);
    }

    #[test]
    fn pan_clamps_to_edge() {
        let mut vp = viewport();
        vp.set_scale_factor(2.0).unwrap();
        vp.zoom_at(1.0, Point::new(400.0, 300.0));

        vp.pan(Point::ZERO, Point::new(10_000.0, -10_000.0));
        assert_eq!(vp.translation(), Vec2::new(200.0, -150.0));
        assert!(is_within_bounds(vp.translation(), vp.scale(), vp.size()));
    }

    #[test]
    fn drag_session_pans_incrementally() {
        let mut vp = viewport();
        vp.set_scale_factor(2.0).unwrap();
        vp.zoom_at(1.0, Point::new(400.0, 300.0));

        vp.press(Point::new(100.0, 100.0));
        vp.drag_to(Point::new(120.0, 100.0));
        vp.drag_to(Point::new(140.0, 110.0));
        assert_eq!(vp.translation(), Vec2::new(20.0, 5.0));
        assert_eq!(
            vp.drag_offset(Point::new(140.0, 110.0)),
            Some(Vec2::new(40.0, 10.0))
        );

        vp.release();
        assert!(!vp.is_dragging());
        vp.drag_to(Point::new(500.0, 500.0));
        assert_eq!(vp.translation(), Vec2::new(20.0, 5.0));
    }

    #[test]
    fn setters_validate() {
        let mut vp = viewport();
        assert!(vp.set_scale_factor(0.9).is_err());
        assert!(vp.set_max_scale(1.0).is_err());
        assert_eq!(vp.scale_factor(), 1.2);
        assert_eq!(vp.max_scale(), 10.0);

        vp.set_max_scale(4.0).unwrap();
        assert_eq!(vp.config(), ZoomConfig::new(1.2, 4.0).unwrap());
    }

    #[test]
    fn visible_rect_matches_window() {
        let mut vp = viewport();
        vp.set_scale_factor(2.0).unwrap();
        vp.zoom_at(1.0, Point::new(400.0, 300.0));
        vp.pan(Point::ZERO, Point::new(100.0, 0.0));

        let visible = vp.visible_canvas_rect();
        assert!((visible.width() - 400.0).abs() < 1e-9);
        assert!((visible.height() - 300.0).abs() < 1e-9);
        assert!((visible.x0 - 150.0).abs() < 1e-9);

        let info = vp.debug_info();
        assert_eq!(info.scale, vp.scale());
        assert!((info.visible_window.x0 + 250.0).abs() < 1e-9);
        assert!(!info.dragging);
    }

    #[test]
    fn borrowed_hooks_observe() {
        let mut rec = HookRecorder::new();
        {
            let mut vp = Viewport::with_hooks(SIZE, ZoomConfig::default(), &mut rec).unwrap();
            vp.zoom_at(1.0, Point::new(400.0, 300.0));
        }
        assert_eq!(rec.events().len(), 3);
    }
}
