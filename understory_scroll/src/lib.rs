// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll --heading-base-level=0

//! Understory Scroll: headless drag-and-fling scroll physics.
//!
//! This crate models a free 2D scroll surface driven by a pan gesture. The
//! content follows the finger while dragging, stretches with rubber-band
//! resistance past the edges, glides after release, and springs back into the
//! valid range when a fling carries it out of bounds.
//!
//! The pieces, from leaf to root:
//!
//! - [`clamp_axis`], [`rubber_band_axis`], and [`ScrollGeometry`]: pure
//!   clamping and rubber-band math, plus [`ScrollAxes`] masking so motion never
//!   leaks onto an axis whose content already fits.
//! - [`resolve_snap`]: decides whether an offset is out of bounds and, if so,
//!   the nearest valid anchor to settle at.
//! - [`MotionController`]: the [`MotionPhase`] state machine
//!   (idle → dragging → coasting → snapping → idle) that owns the offset.
//! - [`ScrollSurface`]: the host-facing adapter holding content and viewport
//!   sizes.
//!
//! This crate deliberately does **not** recognize gestures, schedule frames, or
//! render anything. Host frameworks are responsible for:
//!
//! - Translating their pan recognizer into [`GestureEvent`]s.
//! - Implementing [`FrameDriver`] on their display-link or animation scheduler,
//!   and calling [`ScrollSurface::on_frame`] with the subscribed token on every
//!   refresh while it is active.
//! - Reading [`ScrollSurface::bounds_origin`] when they render and moving the
//!   visible window accordingly.
//!
//! Within one frame, hosts should deliver gesture events before the frame
//! tick. A drag that begins mid-fling releases the frame subscription
//! immediately, and later ticks carrying the old token are ignored.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_scroll::{GestureEvent, ManualFrameDriver, MotionPhase, ScrollSurface};
//!
//! let mut surface = ScrollSurface::new(Size::new(300.0, 300.0), ManualFrameDriver::new());
//! surface.set_content_size(Size::new(300.0, 1000.0));
//!
//! // Drag up by 250 and fling.
//! surface.handle_gesture(GestureEvent::Began);
//! surface.handle_gesture(GestureEvent::Changed { translation: Vec2::new(0.0, -250.0) });
//! assert_eq!(surface.bounds_origin(), Point::new(0.0, 250.0));
//! surface.handle_gesture(GestureEvent::Ended { velocity: Vec2::new(0.0, -1500.0) });
//! assert_eq!(surface.phase(), MotionPhase::Coasting);
//!
//! // The host's frame loop.
//! while let Some(token) = surface.controller().driver().active() {
//!     surface.on_frame(token, 1.0 / 60.0);
//! }
//!
//! // The fling overshot the end of the content and snapped back to it.
//! assert_eq!(surface.bounds_origin(), Point::new(0.0, 700.0));
//! ```
//!
//! All offsets are the top-left of the visible window in content coordinates.
//! Non-finite inputs are treated as zero and negative sizes as empty.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod frame;
mod geometry;
mod gesture;
mod simulation;
mod spring;
mod surface;

pub use config::ScrollConfig;
pub use controller::{FrameOutcome, MotionController, MotionPhase};
pub use frame::{FrameDriver, FrameToken, ManualFrameDriver};
pub use geometry::{ScrollAxes, ScrollGeometry, clamp_axis, rubber_band_axis};
pub use gesture::GestureEvent;
pub use simulation::{Behavior, MAX_FRAME_DELTA, SimulationItem, advance};
pub use spring::{SnapResolution, half_bounds, resolve_centered, resolve_snap};
pub use surface::ScrollSurface;
