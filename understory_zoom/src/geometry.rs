// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affine helpers for anchored scaling and scale/translation extraction.
//!
//! Transforms are plain [`kurbo::Affine`] values. Kurbo composes with `*`
//! where `a * b` applies `b` first; the helpers here spell out the order so
//! call sites read in gesture order instead.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::{Affine, Point, Size, Vec2};

/// A point expressed in fractions of the content size.
///
/// `(0, 0)` is the top-leading corner and `(1, 1)` the bottom-trailing one.
/// Platforms usually report pinch focal points this way.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct UnitPoint {
    /// Horizontal fraction of the content width.
    pub x: f64,
    /// Vertical fraction of the content height.
    pub y: f64,
}

impl UnitPoint {
    /// The top-leading corner.
    pub const TOP_LEADING: Self = Self::new(0.0, 0.0);
    /// The center of the content.
    pub const CENTER: Self = Self::new(0.5, 0.5);
    /// The bottom-trailing corner.
    pub const BOTTOM_TRAILING: Self = Self::new(1.0, 1.0);

    /// Creates a unit point from normalized coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Maps this unit point into content pixel coordinates.
    #[must_use]
    pub fn scaled_by(self, size: Size) -> Point {
        Point::new(self.x * size.width, self.y * size.height)
    }
}

/// Returns a uniform scale that keeps `anchor` fixed.
///
/// Equivalent to translating `anchor` to the origin, scaling, then translating
/// back.
#[must_use]
pub fn anchored_scale(scale: f64, anchor: Point) -> Affine {
    let anchor = anchor.to_vec2();
    Affine::translate(anchor) * Affine::scale(scale) * Affine::translate(-anchor)
}

/// Applies `first`, then `then`.
#[must_use]
pub fn concat(first: Affine, then: Affine) -> Affine {
    then * first
}

/// Prepends a translation in the input space of `transform`.
///
/// A translation of `delta` moves content by `delta` scaled through the
/// linear part of `transform`.
#[must_use]
pub fn translated_by(transform: Affine, delta: Vec2) -> Affine {
    transform * Affine::translate(delta)
}

/// Horizontal scale factor, `sqrt(a² + c²)`.
#[must_use]
pub fn scale_x(transform: Affine) -> f64 {
    let [a, _, c, _, _, _] = transform.as_coeffs();
    (a * a + c * c).sqrt()
}

/// Vertical scale factor, `sqrt(b² + d²)`.
#[must_use]
pub fn scale_y(transform: Affine) -> f64 {
    let [_, b, _, d, _, _] = transform.as_coeffs();
    (b * b + d * d).sqrt()
}

/// Both scale factors as a vector.
#[must_use]
pub fn scale(transform: Affine) -> Vec2 {
    Vec2::new(scale_x(transform), scale_y(transform))
}

/// Translation component `(tx, ty)`.
#[must_use]
pub fn translation(transform: Affine) -> Vec2 {
    let [_, _, _, _, tx, ty] = transform.as_coeffs();
    Vec2::new(tx, ty)
}

/// Replaces the translation component, keeping the linear part.
#[must_use]
pub fn with_translation(transform: Affine, translation: Vec2) -> Affine {
    let [a, b, c, d, _, _] = transform.as_coeffs();
    Affine::new([a, b, c, d, translation.x, translation.y])
}

/// Returns `true` if `transform` is exactly the identity.
#[must_use]
pub fn is_identity(transform: Affine) -> bool {
    transform == Affine::IDENTITY
}
