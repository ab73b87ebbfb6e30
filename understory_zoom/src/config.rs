// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom limits and options, validated when a controller is built.

use peniko::Color;
use thiserror::Error;

/// Default target scale for the double-tap toggle.
pub const DEFAULT_DOUBLE_TAP_ZOOM_SCALE: f64 = 3.0;

/// Per-controller zoom limits and gesture options.
///
/// Build one with the `with_*` methods and pass it to
/// [`ZoomController::new`](crate::ZoomController::new), which validates it.
///
/// ```
/// use understory_zoom::ZoomConfig;
///
/// let config = ZoomConfig::new()
///     .with_max_zoom_scale(Some(5.0))
///     .with_double_tap_zoom_scale(None);
/// assert!(config.validate().is_ok());
/// assert!(!config.is_double_tap_enabled());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ZoomConfig {
    min_zoom_scale: f64,
    max_zoom_scale: Option<f64>,
    double_tap_zoom_scale: Option<f64>,
    out_of_bounds_color: Color,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom_scale: 1.0,
            max_zoom_scale: None,
            double_tap_zoom_scale: Some(DEFAULT_DOUBLE_TAP_ZOOM_SCALE),
            out_of_bounds_color: Color::TRANSPARENT,
        }
    }
}

impl ZoomConfig {
    /// Creates the default configuration.
    ///
    /// - Minimum scale `1.0`.
    /// - No maximum scale.
    /// - Double tap zooms to `3.0`.
    /// - Transparent out-of-bounds color.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scale floor. Committing below it resets to identity.
    #[must_use]
    pub fn with_min_zoom_scale(mut self, scale: f64) -> Self {
        self.min_zoom_scale = scale;
        self
    }

    /// Sets the optional scale ceiling.
    #[must_use]
    pub fn with_max_zoom_scale(mut self, scale: Option<f64>) -> Self {
        self.max_zoom_scale = scale;
        self
    }

    /// Sets the double-tap target scale; `None` disables double tap.
    #[must_use]
    pub fn with_double_tap_zoom_scale(mut self, scale: Option<f64>) -> Self {
        self.double_tap_zoom_scale = scale;
        self
    }

    /// Sets the color hosts paint where zoomed or panned content leaves empty space.
    #[must_use]
    pub fn with_out_of_bounds_color(mut self, color: Color) -> Self {
        self.out_of_bounds_color = color;
        self
    }

    /// Scale floor.
    #[must_use]
    pub fn min_zoom_scale(&self) -> f64 {
        self.min_zoom_scale
    }

    /// Scale ceiling, if any.
    #[must_use]
    pub fn max_zoom_scale(&self) -> Option<f64> {
        self.max_zoom_scale
    }

    /// Double-tap target scale, if double tap is enabled.
    #[must_use]
    pub fn double_tap_zoom_scale(&self) -> Option<f64> {
        self.double_tap_zoom_scale
    }

    /// Returns `true` if a double-tap zoom scale is configured.
    #[must_use]
    pub fn is_double_tap_enabled(&self) -> bool {
        self.double_tap_zoom_scale.is_some()
    }

    /// Background color for out-of-bounds regions. Purely cosmetic.
    #[must_use]
    pub fn out_of_bounds_color(&self) -> Color {
        self.out_of_bounds_color
    }

    /// Checks the configured scales.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the minimum is negative or not finite, if
    /// the maximum or double-tap scale is not a positive finite number, or if
    /// the maximum is below the minimum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = self.min_zoom_scale;
        if !min.is_finite() || min < 0.0 {
            return Err(ConfigError::InvalidMinZoomScale(min));
        }
        if let Some(max) = self.max_zoom_scale {
            if !max.is_finite() || max <= 0.0 {
                return Err(ConfigError::InvalidMaxZoomScale(max));
            }
            if max < min {
                return Err(ConfigError::MaxBelowMin { min, max });
            }
        }
        if let Some(scale) = self.double_tap_zoom_scale {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(ConfigError::InvalidDoubleTapZoomScale(scale));
            }
        }
        Ok(())
    }
}

/// Rejected [`ZoomConfig`] values.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The minimum scale is negative or not finite.
    #[error("minimum zoom scale must be a finite value >= 0, got {0}")]
    InvalidMinZoomScale(f64),
    /// The maximum scale is not a positive finite number.
    #[error("maximum zoom scale must be a finite value > 0, got {0}")]
    InvalidMaxZoomScale(f64),
    /// The maximum scale is below the minimum scale.
    #[error("maximum zoom scale {max} is below minimum zoom scale {min}")]
    MaxBelowMin {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The double-tap scale is not a positive finite number.
    #[error("double-tap zoom scale must be a finite value > 0, got {0}")]
    InvalidDoubleTapZoomScale(f64),
}
