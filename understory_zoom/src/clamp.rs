// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Committing a transform into the configured scale range and content bounds.

use kurbo::{Affine, Point, Size, Vec2};

use crate::config::ZoomConfig;
use crate::geometry::{anchored_scale, concat, scale_x, scale_y, translation, with_translation};

/// Constrains `transform` to the zoom limits of `config` and the edges of
/// content of size `content_size`.
///
/// - If either axis scale is below the minimum, the result is the identity.
///   There is no soft clamp at the floor.
/// - If the larger axis scale exceeds the maximum, the transform is scaled
///   back around the content center until it equals the maximum.
/// - The translation is then pulled into `[-width * (scale_x - 1), 0]`
///   horizontally and `[-height * (scale_y - 1), 0]` vertically, so the
///   content always covers its original frame.
///
/// Until a non-empty content size is known only the minimum-scale reset
/// applies; the other two steps need the content geometry.
#[must_use]
pub fn clamp_transform(transform: Affine, content_size: Size, config: &ZoomConfig) -> Affine {
    let min = config.min_zoom_scale();
    if scale_x(transform) < min || scale_y(transform) < min {
        if transform != Affine::IDENTITY {
            log::debug!(
                "zoom below minimum {min}: scale ({}, {}), resetting to identity",
                scale_x(transform),
                scale_y(transform)
            );
        }
        return Affine::IDENTITY;
    }

    if !has_area(content_size) {
        return transform;
    }

    let capped = cap_to_max_scale(transform, content_size, config.max_zoom_scale());
    clamp_translation(capped, content_size)
}

fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}

fn cap_to_max_scale(transform: Affine, content_size: Size, max: Option<f64>) -> Affine {
    let Some(max) = max else {
        return transform;
    };
    let current = scale_x(transform).max(scale_y(transform));
    if current <= max {
        return transform;
    }
    let factor = max / current;
    let center = Point::new(content_size.width / 2.0, content_size.height / 2.0);
    log::debug!("zoom {current} above maximum {max}, scaling by {factor} about {center:?}");
    concat(transform, anchored_scale(factor, center))
}

fn clamp_translation(transform: Affine, content_size: Size) -> Affine {
    let max_x = content_size.width * (scale_x(transform) - 1.0);
    let max_y = content_size.height * (scale_y(transform) - 1.0);
    let t = translation(transform);

    // In-range transforms are returned bit-for-bit unchanged.
    if t.x > 0.0 || t.x < -max_x || t.y > 0.0 || t.y < -max_y {
        let clamped = Vec2::new(t.x.max(-max_x).min(0.0), t.y.max(-max_y).min(0.0));
        log::trace!("translation {t:?} out of bounds, clamped to {clamped:?}");
        return with_translation(transform, clamped);
    }
    transform
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Size, Vec2};

    use super::clamp_transform;
    use crate::config::ZoomConfig;
    use crate::geometry::{anchored_scale, scale, translation};

    const SIZE: Size = Size::new(300.0, 300.0);

    fn bounded() -> ZoomConfig {
        ZoomConfig::new().with_max_zoom_scale(Some(5.0))
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn below_minimum_resets_to_identity() {
        let t = anchored_scale(0.5, Point::new(150.0, 150.0));
        assert_eq!(clamp_transform(t, SIZE, &bounded()), Affine::IDENTITY);
    }

    #[test]
    fn one_axis_below_minimum_resets_whole_transform() {
        let t = Affine::scale_non_uniform(2.0, 0.9);
        assert_eq!(clamp_transform(t, SIZE, &bounded()), Affine::IDENTITY);
    }

    #[test]
    fn in_bounds_transform_is_unchanged() {
        let t = anchored_scale(3.0, Point::new(150.0, 150.0));
        assert_eq!(clamp_transform(t, SIZE, &bounded()), t);
    }

    #[test]
    fn above_maximum_is_capped_around_content_center() {
        let t = anchored_scale(9.0, Point::new(150.0, 150.0));
        let clamped = clamp_transform(t, SIZE, &bounded());
        assert_close(scale(clamped), Vec2::new(5.0, 5.0));
        // The center stays put, which for a center anchor means (-600, -600).
        assert_close(translation(clamped), Vec2::new(-600.0, -600.0));
    }

    #[test]
    fn cap_uses_content_center_not_gesture_anchor() {
        // Zoomed around the top-left corner: translation starts at zero.
        let t = anchored_scale(10.0, Point::ZERO);
        let clamped = clamp_transform(t, SIZE, &bounded());
        assert_close(scale(clamped), Vec2::new(5.0, 5.0));
        // Scaling by 1/2 about (150, 150) moves the origin to (75, 75); the
        // translation clamp then pulls it back to the top-left edge.
        assert_close(translation(clamped), Vec2::ZERO);
    }

    #[test]
    fn positive_translation_is_pulled_back_to_origin() {
        let t = Affine::translate((40.0, 25.0)) * Affine::scale(2.0);
        let clamped = clamp_transform(t, SIZE, &bounded());
        assert_eq!(translation(clamped), Vec2::ZERO);
        assert_eq!(scale(clamped), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn excess_negative_translation_is_pulled_to_far_edge() {
        // max_x = 300 * (2 - 1) = 300
        let t = Affine::translate((-1000.0, -100.0)) * Affine::scale(2.0);
        let clamped = clamp_transform(t, SIZE, &bounded());
        assert_eq!(translation(clamped), Vec2::new(-300.0, -100.0));
    }

    #[test]
    fn translation_bounds_follow_each_axis() {
        let size = Size::new(400.0, 100.0);
        let t = Affine::translate((-2000.0, -2000.0)) * Affine::scale(3.0);
        let clamped = clamp_transform(t, size, &ZoomConfig::new());
        assert_eq!(translation(clamped), Vec2::new(-800.0, -200.0));
    }

    #[test]
    fn unbounded_maximum_never_caps() {
        let t = anchored_scale(50.0, Point::new(150.0, 150.0));
        let clamped = clamp_transform(t, SIZE, &ZoomConfig::new());
        assert_eq!(scale(clamped), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn zero_content_size_only_applies_minimum_reset() {
        let far = Affine::translate((500.0, 500.0)) * Affine::scale(9.0);
        assert_eq!(clamp_transform(far, Size::ZERO, &bounded()), far);

        let small = Affine::scale(0.5);
        assert_eq!(
            clamp_transform(small, Size::ZERO, &bounded()),
            Affine::IDENTITY
        );
    }

    #[test]
    fn clamp_is_idempotent() {
        let cases = [
            Affine::IDENTITY,
            Affine::scale(0.3),
            anchored_scale(3.0, Point::new(10.0, 280.0)),
            anchored_scale(12.0, Point::new(150.0, 150.0)),
            Affine::translate((75.0, -9000.0)) * Affine::scale(4.0),
            Affine::translate((-20.0, 20.0)) * Affine::scale_non_uniform(6.0, 2.0),
        ];
        for t in cases {
            let once = clamp_transform(t, SIZE, &bounded());
            let twice = clamp_transform(once, SIZE, &bounded());
            let (a, b) = (once.as_coeffs(), twice.as_coeffs());
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x - y).abs() < 1e-9, "{t:?}: {once:?} vs {twice:?}");
            }
        }
    }
}
