// Copyright 2025 the Zoompane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Zoom tuning for a [`crate::Viewport`].
///
/// Construct with [`ZoomConfig::new`] to validate the values up front, or use
/// [`ZoomConfig::default`] (`scale_factor = 1.2`, `max_scale = 10.0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    scale_factor: f64,
    max_scale: f64,
}

impl ZoomConfig {
    /// Scale multiplier applied per scroll tick by default.
    pub const DEFAULT_SCALE_FACTOR: f64 = 1.2;
    /// Default upper bound (exclusive) on the scale.
    pub const DEFAULT_MAX_SCALE: f64 = 10.0;

    /// Creates a validated zoom configuration.
    ///
    /// Both values must be finite and strictly greater than `1.0`.
    pub fn new(scale_factor: f64, max_scale: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            scale_factor: check_scale_factor(scale_factor)?,
            max_scale: check_max_scale(max_scale)?,
        })
    }

    /// Multiplier applied to the scale for one scroll tick.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Exclusive upper bound on the scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            scale_factor: Self::DEFAULT_SCALE_FACTOR,
            max_scale: Self::DEFAULT_MAX_SCALE,
        }
    }
}

/// Error returned when a viewport is configured with unusable values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The per‑tick scale factor must be finite and greater than `1.0`.
    ScaleFactorTooSmall(f64),
    /// The maximum scale must be finite and greater than `1.0`.
    MaxScaleTooSmall(f64),
    /// Canvas width and height must be finite and positive.
    InvalidCanvasSize(Size),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScaleFactorTooSmall(v) => {
                write!(f, "scale factor {v} must be a finite value greater than 1")
            }
            Self::MaxScaleTooSmall(v) => {
                write!(f, "maximum scale {v} must be a finite value greater than 1")
            }
            Self::InvalidCanvasSize(size) => write!(
                f,
                "canvas size {}x{} must be finite and positive",
                size.width, size.height
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

pub(crate) fn check_scale_factor(scale_factor: f64) -> Result<f64, ConfigError> {
    if scale_factor.is_finite() && scale_factor > 1.0 {
        Ok(scale_factor)
    } else {
        Err(ConfigError::ScaleFactorTooSmall(scale_factor))
    }
}

pub(crate) fn check_max_scale(max_scale: f64) -> Result<f64, ConfigError> {
    if max_scale.is_finite() && max_scale > 1.0 {
        Ok(max_scale)
    } else {
        Err(ConfigError::MaxScaleTooSmall(max_scale))
    }
}

pub(crate) fn check_canvas_size(size: Size) -> Result<Size, ConfigError> {
    if size.is_finite() && size.width > 0.0 && size.height > 0.0 {
        Ok(size)
    } else {
        Err(ConfigError::InvalidCanvasSize(size))
    }
}
