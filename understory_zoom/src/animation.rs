// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation hints attached to transform updates, and a small tween helper.
//!
//! The controller never animates anything itself. Each update says how the
//! host should get to the new transform; hosts with their own animation
//! scheduler forward the [`AnimationHint`], others drive a
//! [`TransformTween`] from their frame clock.
//!
//! ```
//! use kurbo::Affine;
//! use understory_zoom::{AnimationHint, TransformTween};
//!
//! let hint = AnimationHint::DOUBLE_TAP;
//! let tween = TransformTween::new(Affine::IDENTITY, Affine::scale(3.0), hint);
//! let halfway = tween.sample(hint.duration_secs / 2.0);
//! assert_eq!(halfway.as_coeffs()[0], 2.0);
//! assert!(tween.is_finished(1.0));
//! ```

use kurbo::Affine;

/// Easing curve mapping linear progress to eased progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Fast start, gentle landing: `1 - (1 - t)^3`.
    EaseOutCubic,
    /// Very fast start that tracks the finger closely: `1 - (1 - t)^5`.
    EaseOutQuint,
}

impl Easing {
    /// Evaluates the curve at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseOutQuint => {
                let inv = 1.0 - t;
                let inv2 = inv * inv;
                1.0 - inv2 * inv2 * inv
            }
        }
    }
}

/// How the host should animate to a new transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationHint {
    /// Animation length in seconds. Zero means "jump".
    pub duration_secs: f64,
    /// Easing curve.
    pub easing: Easing,
}

impl AnimationHint {
    /// Live tracking while a pinch or drag is in progress.
    pub const INTERACTIVE: Self = Self::new(0.15, Easing::EaseOutQuint);
    /// The double-tap zoom toggle.
    pub const DOUBLE_TAP: Self = Self::new(0.15, Easing::Linear);
    /// Settling into the committed transform when a gesture ends.
    pub const SETTLE: Self = Self::new(0.1, Easing::EaseOutCubic);
    /// No animation.
    pub const IMMEDIATE: Self = Self::new(0.0, Easing::Linear);

    /// Creates a hint.
    #[must_use]
    pub const fn new(duration_secs: f64, easing: Easing) -> Self {
        Self {
            duration_secs,
            easing,
        }
    }
}

/// Interpolates between two transforms over an [`AnimationHint`].
///
/// Coefficients are interpolated independently. That is exact for the
/// scale-and-translate transforms produced by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformTween {
    from: Affine,
    to: Affine,
    hint: AnimationHint,
}

impl TransformTween {
    /// Creates a tween from `from` to `to`.
    #[must_use]
    pub fn new(from: Affine, to: Affine, hint: AnimationHint) -> Self {
        Self { from, to, hint }
    }

    /// Start transform.
    #[must_use]
    pub fn start(&self) -> Affine {
        self.from
    }

    /// End transform.
    #[must_use]
    pub fn end(&self) -> Affine {
        self.to
    }

    /// Hint this tween runs with.
    #[must_use]
    pub fn hint(&self) -> AnimationHint {
        self.hint
    }

    /// Eased progress in `[0, 1]` after `elapsed_secs`.
    #[must_use]
    pub fn progress(&self, elapsed_secs: f64) -> f64 {
        if self.hint.duration_secs <= 0.0 {
            return 1.0;
        }
        self.hint
            .easing
            .apply(elapsed_secs / self.hint.duration_secs)
    }

    /// Returns `true` once `elapsed_secs` covers the whole duration.
    #[must_use]
    pub fn is_finished(&self, elapsed_secs: f64) -> bool {
        elapsed_secs >= self.hint.duration_secs
    }

    /// Transform to display after `elapsed_secs`.
    #[must_use]
    pub fn sample(&self, elapsed_secs: f64) -> Affine {
        let p = self.progress(elapsed_secs);
        if p >= 1.0 {
            return self.to;
        }
        let from = self.from.as_coeffs();
        let to = self.to.as_coeffs();
        let mut out = [0.0; 6];
        for (o, (a, b)) in out.iter_mut().zip(from.iter().zip(to.iter())) {
            *o = a + (b - a) * p;
        }
        Affine::new(out)
    }
}
