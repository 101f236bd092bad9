// Copyright 2025 the Zoompane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// Immutable snapshot of a viewport's scale and translation.
///
/// A new value is produced every time the viewport changes; renderers replace
/// their active transform with it rather than composing onto the previous one.
///
/// Canvas coordinates have their origin at the canvas's top‑left corner, as do
/// view coordinates. The mapping scales about the canvas center `C`:
///
/// ```text
/// view = C + scale * (canvas + translation - C)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale applied to both axes.
    pub scale: f64,
    /// Translation in canvas units, applied before scaling.
    pub translation: Vec2,
    /// Logical canvas size the transform is expressed against.
    pub size: Size,
}

impl ViewTransform {
    /// The unscaled, untranslated transform for a canvas of `size`.
    #[must_use]
    pub fn identity(size: Size) -> Self {
        Self {
            scale: 1.0,
            translation: Vec2::ZERO,
            size,
        }
    }

    /// Affine mapping canvas coordinates into view coordinates.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        let center = self.size.to_vec2() / 2.0;
        Affine::translate(center)
            * Affine::scale(self.scale)
            * Affine::translate(self.translation - center)
    }

    /// Converts a canvas‑space point into view coordinates.
    #[must_use]
    pub fn canvas_to_view(&self, pt: Point) -> Point {
        let center = self.size.to_vec2() / 2.0;
        let local = pt.to_vec2() + self.translation - center;
        (center + local * self.scale).to_point()
    }

    /// Converts a view‑space point into canvas coordinates.
    #[must_use]
    pub fn view_to_canvas(&self, pt: Point) -> Point {
        let center = self.size.to_vec2() / 2.0;
        let local = (pt.to_vec2() - center) / self.scale;
        (center + local - self.translation).to_point()
    }
}
