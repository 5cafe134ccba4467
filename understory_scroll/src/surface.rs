// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing scroll surface.

use kurbo::{Point, Rect, Size, Vec2};
use tracing::debug;

use crate::{
    FrameDriver, FrameOutcome, FrameToken, GestureEvent, MotionController, MotionPhase,
    ScrollAxes, ScrollConfig, ScrollGeometry,
};

/// A scrollable content window.
///
/// The surface stores content and viewport sizes, keeps the scrollable axes in
/// sync with them, and forwards gestures and frames to its [`MotionController`].
/// Hosts pull the resulting [`ScrollSurface::bounds_origin`] whenever they
/// render; the surface never pushes.
#[derive(Debug)]
pub struct ScrollSurface<D: FrameDriver> {
    geometry: ScrollGeometry,
    config: ScrollConfig,
    controller: MotionController<D>,
}

impl<D: FrameDriver> ScrollSurface<D> {
    /// Creates a surface with empty content and the given viewport size.
    pub fn new(viewport: Size, driver: D) -> Self {
        Self {
            geometry: ScrollGeometry::new(Size::ZERO, viewport),
            config: ScrollConfig::default(),
            controller: MotionController::new(driver),
        }
    }

    /// Replaces the physics configuration.
    #[must_use]
    pub fn with_config(mut self, config: ScrollConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Returns the physics configuration.
    #[must_use]
    pub const fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Replaces the physics configuration; invalid fields fall back to defaults.
    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config.sanitized();
    }

    /// Returns the content size.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.geometry.content()
    }

    /// Sets the content size and recomputes the scrollable axes.
    ///
    /// The offset is left as is, even if it is now out of range; it is
    /// corrected by the next gesture or simulation.
    pub fn set_content_size(&mut self, size: Size) {
        self.geometry = ScrollGeometry::new(size, self.geometry.viewport());
        debug!(
            width = self.geometry.content().width,
            height = self.geometry.content().height,
            axes = self.geometry.axes().bits(),
            "content size changed"
        );
    }

    /// Returns the viewport size.
    #[must_use]
    pub const fn viewport_size(&self) -> Size {
        self.geometry.viewport()
    }

    /// Sets the viewport size (on layout) and recomputes the scrollable axes.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.geometry = ScrollGeometry::new(self.geometry.content(), size);
        debug!(
            width = self.geometry.viewport().width,
            height = self.geometry.viewport().height,
            axes = self.geometry.axes().bits(),
            "viewport size changed"
        );
    }

    /// Axes along which the content can scroll.
    #[must_use]
    pub const fn scrollable_axes(&self) -> ScrollAxes {
        self.geometry.axes()
    }

    /// Current geometry snapshot.
    #[must_use]
    pub const fn geometry(&self) -> &ScrollGeometry {
        &self.geometry
    }

    /// Top-left of the visible window in content coordinates.
    #[must_use]
    pub const fn bounds_origin(&self) -> Point {
        self.controller.offset()
    }

    /// The visible window in content coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        self.geometry.visible_rect(self.controller.offset())
    }

    /// Current motion phase.
    #[must_use]
    pub const fn phase(&self) -> MotionPhase {
        self.controller.phase()
    }

    /// Returns `true` while a fling or snap is running and frames are wanted.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Shared access to the motion controller.
    #[must_use]
    pub const fn controller(&self) -> &MotionController<D> {
        &self.controller
    }

    /// Feeds one pan gesture event.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Began => self.controller.begin_drag(),
            GestureEvent::Changed { translation } => {
                self.controller
                    .update_drag(translation, &self.geometry, &self.config);
            }
            GestureEvent::Ended { velocity } => {
                self.controller
                    .end_drag(velocity, &self.geometry, &self.config);
            }
            GestureEvent::Cancelled => {
                self.controller.cancel_drag(&self.geometry, &self.config);
            }
        }
    }

    /// Delivers one display frame of `dt` seconds for the subscription `token`.
    pub fn on_frame(&mut self, token: FrameToken, dt: f64) -> FrameOutcome {
        self.controller
            .tick(token, dt, &self.geometry, &self.config)
    }

    /// Stops any motion and leaves the window where it is.
    pub fn stop(&mut self) {
        self.controller.stop();
    }

    /// Stops any motion and moves the window to `origin`, clamped into range.
    pub fn scroll_to(&mut self, origin: Point) {
        self.controller.jump_to(origin, &self.geometry);
    }

    /// Moves the window by `delta`, clamped into range.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.scroll_to(self.controller.offset() + delta);
    }
}
