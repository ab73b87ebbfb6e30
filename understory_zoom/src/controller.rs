// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture-driven zoom state machine.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::animation::AnimationHint;
use crate::clamp::clamp_transform;
use crate::config::{ConfigError, ZoomConfig};
use crate::geometry::{
    UnitPoint, anchored_scale, concat, is_identity, scale, scale_x, scale_y, translated_by,
    translation,
};
use crate::source::{CumulativeMagnification, MagnifySource};

/// A gesture event delivered by the host.
///
/// This is the input contract of [`ZoomController::handle`]; each variant maps
/// to one of the `on_*` handlers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomGesture {
    /// A pinch is in progress.
    MagnifyChanged {
        /// Raw platform reading, interpreted by the controller's [`MagnifySource`].
        magnification: f64,
        /// Pinch focal point in unit content coordinates.
        focal_point: UnitPoint,
    },
    /// The pinch ended.
    MagnifyEnded,
    /// A drag is in progress.
    DragChanged {
        /// Total screen-space translation since the drag started.
        translation: Vec2,
    },
    /// The drag ended.
    DragEnded,
    /// A double tap landed at `location` in content coordinates.
    DoubleTap {
        /// Tap location in content pixels.
        location: Point,
    },
    /// The platform cancelled the active gesture.
    Cancelled,
}

/// A new transform for the host to render, and how to animate to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformUpdate {
    /// The transform to apply to the content.
    pub transform: Affine,
    /// How to get there from the currently displayed transform.
    pub animation: AnimationHint,
}

/// Pinch-zoom, pan, and double-tap zoom state for one content view.
///
/// `ZoomController` keeps two transforms:
/// - the committed transform, the baseline every gesture starts from, and
/// - the live transform, which gesture updates rebuild from the baseline.
///
/// When a gesture ends the live transform is clamped with
/// [`clamp_transform`] and committed. Outside of gestures the two are equal.
///
/// Every handler that changes state returns a [`TransformUpdate`]; the host
/// re-renders with it. Hosts that poll can compare [`ZoomController::revision`]
/// instead.
///
/// ```
/// use kurbo::{Size, Vec2};
/// use understory_zoom::{UnitPoint, ZoomConfig, ZoomController, geometry};
///
/// let config = ZoomConfig::new().with_max_zoom_scale(Some(4.0));
/// let mut zoom = ZoomController::new(config).unwrap();
/// zoom.set_content_size(Size::new(300.0, 300.0));
///
/// // Pinch out around the center and let go.
/// zoom.on_magnify_changed(2.0, UnitPoint::CENTER);
/// let update = zoom.on_magnify_ended();
/// assert_eq!(geometry::scale(update.transform), Vec2::new(2.0, 2.0));
///
/// // Panning is now enabled.
/// assert!(zoom.is_drag_enabled());
/// ```
#[derive(Clone, Debug)]
pub struct ZoomController<S = CumulativeMagnification> {
    config: ZoomConfig,
    source: S,
    content_size: Size,
    transform: Affine,
    last_transform: Affine,
    revision: u64,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::from_parts(ZoomConfig::default(), CumulativeMagnification)
    }
}

impl ZoomController {
    /// Creates a controller for hosts that report cumulative magnification.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`ZoomConfig::validate`].
    pub fn new(config: ZoomConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, CumulativeMagnification)
    }
}

impl<S: MagnifySource> ZoomController<S> {
    /// Creates a controller that interprets pinch readings with `source`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`ZoomConfig::validate`].
    pub fn with_source(config: ZoomConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, source))
    }

    fn from_parts(config: ZoomConfig, source: S) -> Self {
        Self {
            config,
            source,
            content_size: Size::ZERO,
            transform: Affine::IDENTITY,
            last_transform: Affine::IDENTITY,
            revision: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns the magnify source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the live transform, the one to render.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns the committed transform gestures start from.
    #[must_use]
    pub fn last_transform(&self) -> Affine {
        self.last_transform
    }

    /// Returns the measured content size, zero until [`Self::set_content_size`].
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Sets the content size measured by the host's layout.
    ///
    /// When no gesture is in flight the committed transform is re-clamped
    /// against the new bounds; the resulting update is returned if that
    /// changed anything.
    pub fn set_content_size(&mut self, size: Size) -> Option<TransformUpdate> {
        if self.content_size == size {
            return None;
        }
        log::debug!("content size {:?} -> {size:?}", self.content_size);
        self.content_size = size;
        if self.is_gesture_active() {
            return None;
        }
        let before = self.transform;
        let update = self.commit();
        (update.transform != before).then_some(update)
    }

    /// Monotonic counter bumped whenever either transform changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current horizontal and vertical scale of the live transform.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        scale(self.transform)
    }

    /// Current translation of the live transform.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        translation(self.transform)
    }

    /// Returns `true` when the live transform is not the identity.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        !is_identity(self.transform)
    }

    /// Returns `true` while the live transform differs from the committed one.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.transform != self.last_transform
    }

    /// Whether drag gestures are handled.
    ///
    /// Drag is disabled at identity so that single-finger gestures fall
    /// through to the host (for example to scroll a containing list).
    #[must_use]
    pub fn is_drag_enabled(&self) -> bool {
        self.is_zoomed()
    }

    /// Whether double taps are handled.
    #[must_use]
    pub fn is_double_tap_enabled(&self) -> bool {
        self.config.is_double_tap_enabled()
    }

    /// Dispatches a [`ZoomGesture`] to the matching handler.
    ///
    /// Returns `None` when the gesture is disabled or ignored.
    pub fn handle(&mut self, gesture: ZoomGesture) -> Option<TransformUpdate> {
        match gesture {
            ZoomGesture::MagnifyChanged {
                magnification,
                focal_point,
            } => self.on_magnify_changed(magnification, focal_point),
            ZoomGesture::MagnifyEnded => Some(self.on_magnify_ended()),
            ZoomGesture::DragChanged { translation } => self.on_drag_changed(translation),
            ZoomGesture::DragEnded => self.on_drag_ended(),
            ZoomGesture::DoubleTap { location } => self.on_double_tap(location),
            ZoomGesture::Cancelled => Some(self.on_gesture_cancelled()),
        }
    }

    /// Updates the live transform for an in-progress pinch.
    ///
    /// `raw` goes through the [`MagnifySource`]; the scale is anchored at
    /// `focal_point` mapped into content pixels and applied on top of the
    /// committed transform. Readings that do not yield a positive finite
    /// magnification are ignored.
    pub fn on_magnify_changed(
        &mut self,
        raw: f64,
        focal_point: UnitPoint,
    ) -> Option<TransformUpdate> {
        let magnification = self.source.magnification(raw);
        if !magnification.is_finite() || magnification <= 0.0 {
            log::trace!("ignoring magnification {magnification} (raw {raw})");
            return None;
        }
        let anchor = focal_point.scaled_by(self.content_size);
        let live = concat(self.last_transform, anchored_scale(magnification, anchor));
        Some(self.set_live(live))
    }

    /// Commits the pinch.
    pub fn on_magnify_ended(&mut self) -> TransformUpdate {
        self.commit()
    }

    /// Updates the live transform for an in-progress drag.
    ///
    /// `translation` is the total screen-space movement since the drag
    /// started. It is divided by the current scale so the content follows
    /// the finger, then applied in content space on top of the committed
    /// transform. Ignored while [`Self::is_drag_enabled`] is `false`.
    pub fn on_drag_changed(&mut self, translation: Vec2) -> Option<TransformUpdate> {
        if !self.is_drag_enabled() {
            log::trace!("drag ignored at identity");
            return None;
        }
        let sx = scale_x(self.transform).max(f64::MIN_POSITIVE);
        let sy = scale_y(self.transform).max(f64::MIN_POSITIVE);
        let content_delta = Vec2::new(translation.x / sx, translation.y / sy);
        let live = translated_by(self.last_transform, content_delta);
        Some(self.set_live(live))
    }

    /// Commits the drag. Ignored while [`Self::is_drag_enabled`] is `false`.
    pub fn on_drag_ended(&mut self) -> Option<TransformUpdate> {
        if !self.is_drag_enabled() {
            return None;
        }
        Some(self.commit())
    }

    /// Toggles between identity and the double-tap zoom scale.
    ///
    /// From identity this zooms to the configured scale anchored at
    /// `location`; from any other transform it resets to identity. The
    /// target is committed directly and then clamped like any gesture end.
    /// Returns `None` if double tap is disabled.
    pub fn on_double_tap(&mut self, location: Point) -> Option<TransformUpdate> {
        let zoom = self.config.double_tap_zoom_scale()?;
        let target = if is_identity(self.transform) {
            anchored_scale(zoom, location)
        } else {
            Affine::IDENTITY
        };
        log::debug!("double tap at {location:?}: {:?} -> {target:?}", self.transform);
        if target != self.transform || target != self.last_transform {
            self.transform = target;
            self.last_transform = target;
            self.bump();
        }
        let committed = self.commit();
        Some(TransformUpdate {
            transform: committed.transform,
            animation: AnimationHint::DOUBLE_TAP,
        })
    }

    /// Handles a gesture the platform cancelled before it ended.
    ///
    /// Cancellation commits exactly like a normal end, so the live transform
    /// never stays unclamped.
    pub fn on_gesture_cancelled(&mut self) -> TransformUpdate {
        log::trace!("gesture cancelled, committing");
        self.commit()
    }

    /// Returns both transforms to identity without animation.
    ///
    /// Zoom state is not carried across content changes; hosts call this when
    /// they swap the content.
    pub fn reset(&mut self) -> TransformUpdate {
        if self.transform != Affine::IDENTITY || self.last_transform != Affine::IDENTITY {
            self.transform = Affine::IDENTITY;
            self.last_transform = Affine::IDENTITY;
            self.bump();
        }
        TransformUpdate {
            transform: Affine::IDENTITY,
            animation: AnimationHint::IMMEDIATE,
        }
    }

    /// Returns the content-space rectangle visible through the content frame.
    ///
    /// At identity this is the whole content; zooming in shrinks it. Empty
    /// until a content size is known.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let frame = self.content_size.to_rect();
        if frame.area() <= 0.0 {
            return Rect::ZERO;
        }
        let inverse = self.transform.inverse();
        // Axis-aligned transforms only; the corner bounding box is exact.
        let p0 = inverse * frame.origin();
        let p1 = inverse * Point::new(frame.max_x(), frame.max_y());
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomDebugInfo {
        ZoomDebugInfo {
            content_size: self.content_size,
            transform: self.transform,
            last_transform: self.last_transform,
            scale: self.scale(),
            translation: self.translation(),
            visible_content_rect: self.visible_content_rect(),
            min_zoom_scale: self.config.min_zoom_scale(),
            max_zoom_scale: self.config.max_zoom_scale(),
            double_tap_zoom_scale: self.config.double_tap_zoom_scale(),
            drag_enabled: self.is_drag_enabled(),
            revision: self.revision,
        }
    }

    fn set_live(&mut self, live: Affine) -> TransformUpdate {
        log::trace!("live transform {live:?}");
        if live != self.transform {
            self.transform = live;
            self.bump();
        }
        TransformUpdate {
            transform: live,
            animation: AnimationHint::INTERACTIVE,
        }
    }

    fn commit(&mut self) -> TransformUpdate {
        let clamped = clamp_transform(self.transform, self.content_size, &self.config);
        if clamped != self.transform || clamped != self.last_transform {
            log::debug!("commit {:?} -> {clamped:?}", self.transform);
            self.transform = clamped;
            self.last_transform = clamped;
            self.bump();
        }
        TransformUpdate {
            transform: clamped,
            animation: AnimationHint::SETTLE,
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Debug snapshot of a [`ZoomController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomDebugInfo {
    /// Measured content size.
    pub content_size: Size,
    /// Live transform.
    pub transform: Affine,
    /// Committed transform.
    pub last_transform: Affine,
    /// Scale of the live transform.
    pub scale: Vec2,
    /// Translation of the live transform.
    pub translation: Vec2,
    /// Content-space rectangle currently visible.
    pub visible_content_rect: Rect,
    /// Scale floor.
    pub min_zoom_scale: f64,
    /// Scale ceiling, if any.
    pub max_zoom_scale: Option<f64>,
    /// Double-tap scale, if enabled.
    pub double_tap_zoom_scale: Option<f64>,
    /// Whether drag gestures are currently handled.
    pub drag_enabled: bool,
    /// Current revision.
    pub revision: u64,
}
