// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters from platform pinch readings to a magnification factor.
//!
//! Platforms report pinch progress in one of two shapes: a cumulative
//! multiplicative magnification since the gesture started (1.0 at rest), or
//! a linear reading that overshoots and is damped into a factor. A
//! [`ZoomController`](crate::ZoomController) is generic over the shape its
//! host delivers.

/// Damping applied by [`LinearDeltaMagnification`] unless configured otherwise.
pub const DEFAULT_LINEAR_DAMPING: f64 = 0.5;

/// Converts a raw pinch reading into a magnification factor relative to the
/// start of the gesture.
pub trait MagnifySource {
    /// Returns the magnification for `raw`. `1.0` means unchanged.
    fn magnification(&self, raw: f64) -> f64;
}

/// The platform already reports a cumulative magnification; used as is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CumulativeMagnification;

impl MagnifySource for CumulativeMagnification {
    fn magnification(&self, raw: f64) -> f64 {
        raw
    }
}

/// The platform reports a linear reading; the factor is `raw * damping`.
///
/// With the default damping of `0.5` a reading of `2.0` is unchanged and a
/// reading at or below zero is ignored by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearDeltaMagnification {
    /// Multiplier applied to the raw reading.
    pub damping: f64,
}

impl LinearDeltaMagnification {
    /// Creates an adapter with the given damping.
    #[must_use]
    pub const fn new(damping: f64) -> Self {
        Self { damping }
    }
}

impl Default for LinearDeltaMagnification {
    fn default() -> Self {
        Self::new(DEFAULT_LINEAR_DAMPING)
    }
}

impl MagnifySource for LinearDeltaMagnification {
    fn magnification(&self, raw: f64) -> f64 {
        raw * self.damping
    }
}

impl<S: MagnifySource + ?Sized> MagnifySource for &S {
    fn magnification(&self, raw: f64) -> f64 {
        (**self).magnification(raw)
    }
}
