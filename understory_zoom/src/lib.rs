// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom --heading-base-level=0

//! Understory Zoom: pinch-zoom, pan, and double-tap zoom for a content view.
//!
//! This crate provides a small, headless controller that turns gesture
//! events into a 2D affine transform for one piece of displayed content
//! (an image, a page, a canvas). It focuses on:
//! - Anchored zooming around the pinch focal point or tap location.
//! - Panning while zoomed, with screen-space drags converted to content space.
//! - Committing gestures through a clamp that enforces a minimum scale
//!   (hard reset to identity below it), an optional maximum scale, and
//!   translation bounds that keep the content covering its frame.
//!
//! It does **not** recognize gestures or render anything. Callers are
//! expected to:
//! - Measure the content and pass its size to
//!   [`ZoomController::set_content_size`].
//! - Wire their platform's pinch, drag, and double-tap recognizers into the
//!   `on_*` handlers (or [`ZoomController::handle`]).
//! - Render the content with the returned transform, applied as
//!   scale-then-translate from the top-left corner, animating as the
//!   attached [`AnimationHint`] suggests.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoom::{UnitPoint, ZoomConfig, ZoomController, geometry};
//!
//! let config = ZoomConfig::new().with_max_zoom_scale(Some(5.0));
//! let mut zoom = ZoomController::new(config).unwrap();
//! zoom.set_content_size(Size::new(300.0, 300.0));
//!
//! // Pinch to 9x around the center; the commit caps it at 5x.
//! zoom.on_magnify_changed(9.0, UnitPoint::CENTER);
//! let update = zoom.on_magnify_ended();
//! let scale = geometry::scale(update.transform);
//! assert!((scale.x - 5.0).abs() < 1e-9);
//!
//! // The center of the content did not move.
//! let center = update.transform * Point::new(150.0, 150.0);
//! assert!((center.x - 150.0).abs() < 1e-9);
//!
//! // Double tap while zoomed resets.
//! let update = zoom.on_double_tap(Point::new(10.0, 10.0)).unwrap();
//! assert_eq!(geometry::scale(update.transform), Vec2::new(1.0, 1.0));
//! ```
//!
//! ## Design notes
//!
//! - Each gesture update is rebuilt from the committed transform, so pinch
//!   readings are relative to the start of the gesture and drags carry their
//!   total translation.
//! - Drag is only handled while zoomed; at identity, single-finger gestures
//!   are left for the host (for example a scrolling list).
//! - Pinch and drag may interleave; both write the same live transform and
//!   the last update wins.
//! - A cancelled gesture commits exactly like an ended one.
//! - Platforms that report pinch progress as a linear delta instead of a
//!   cumulative factor plug in [`LinearDeltaMagnification`].
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod clamp;
mod config;
mod controller;
pub mod geometry;
mod source;

pub use animation::{AnimationHint, Easing, TransformTween};
pub use clamp::clamp_transform;
pub use config::{ConfigError, DEFAULT_DOUBLE_TAP_ZOOM_SCALE, ZoomConfig};
pub use controller::{TransformUpdate, ZoomController, ZoomDebugInfo, ZoomGesture};
pub use geometry::UnitPoint;
pub use source::{
    CumulativeMagnification, DEFAULT_LINEAR_DAMPING, LinearDeltaMagnification, MagnifySource,
};
