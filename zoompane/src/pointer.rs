// Copyright 2025 the Zoompane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer reference tracking for drag panning.
//!
//! A drag reports only absolute pointer positions. [`PointerTrack`] remembers
//! where the press started and the last position a pan was computed from, so
//! each drag event pans by the distance travelled since the previous one.

use kurbo::{Point, Vec2};

/// Press origin and last pan reference point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTrack {
    press_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl PointerTrack {
    /// Starts a press at `pos`, which also becomes the pan reference point.
    pub fn press(&mut self, pos: Point) {
        self.press_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Replaces the pan reference point.
    ///
    /// This does not start a press; it only changes what the next drag is
    /// measured against.
    pub fn record(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Ends the current press and forgets the reference point.
    pub fn release(&mut self) {
        self.press_pos = None;
        self.last_pos = None;
    }

    /// The last recorded reference point, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.last_pos
    }

    /// Returns `true` between [`PointerTrack::press`] and [`PointerTrack::release`].
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press_pos.is_some()
    }

    /// Distance from the press origin to `current`, in view units.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        self.press_pos.map(|start| current - start)
    }
}
