// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The motion state machine behind a scroll surface.
//!
//! Transitions:
//!
//! - Idle or any other phase to Dragging on [`MotionController::begin_drag`].
//! - Dragging to Coasting on a release faster than the rest speed.
//! - Dragging to Snapping on a slow release while stretched past an edge.
//! - Dragging to Idle on a slow release inside the valid range.
//! - Coasting to Snapping once the simulated offset leaves the valid range.
//! - Coasting to Idle once the velocity decays below the rest speed.
//! - Snapping to Idle once the offset is within the oscillation limit of the
//!   anchor; the offset is then set to the anchor exactly.
//!
//! Dragging writes a rubber-banded offset synchronously on every update.
//! Coasting and Snapping are simulations advanced by [`MotionController::tick`]
//! and hold a frame subscription for as long as they run. A new
//! [`MotionController::begin_drag`] from any phase cancels the simulation and
//! releases the subscription before returning.

use kurbo::{Point, Vec2};
use tracing::{debug, trace};

use crate::geometry::{sanitize_point, sanitize_vec};
use crate::simulation::{Behavior, SimulationItem, advance};
use crate::spring::{SnapResolution, resolve_snap};
use crate::{FrameDriver, FrameToken, ScrollConfig, ScrollGeometry};

/// Coarse phase of a [`MotionController`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPhase {
    /// Nothing is moving. Initial state, and the state between gestures.
    #[default]
    Idle,
    /// A pan gesture is in progress.
    Dragging,
    /// Decelerating freely after a fling.
    Coasting,
    /// Springing back toward the nearest valid offset.
    Snapping,
}

/// Result of delivering one frame to [`MotionController::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The token is not the live subscription; nothing was applied.
    Stale,
    /// The offset moved and the simulation is still running.
    Moved,
    /// The simulation finished on this frame; the subscription was released.
    Settled,
}

#[derive(Clone, Copy, Debug)]
enum Motion {
    Idle,
    Dragging {
        origin: Point,
    },
    Coasting {
        item: SimulationItem,
    },
    Snapping {
        item: SimulationItem,
        anchor: Point,
    },
}

impl Motion {
    const fn phase(&self) -> MotionPhase {
        match self {
            Self::Idle => MotionPhase::Idle,
            Self::Dragging { .. } => MotionPhase::Dragging,
            Self::Coasting { .. } => MotionPhase::Coasting,
            Self::Snapping { .. } => MotionPhase::Snapping,
        }
    }
}

/// Owns the scroll offset and turns gestures and frames into motion.
///
/// Geometry and configuration are passed in on every call rather than stored,
/// so the owner can change content or viewport size at any time without
/// notifying the controller.
#[derive(Debug)]
pub struct MotionController<D: FrameDriver> {
    driver: D,
    offset: Point,
    motion: Motion,
    frames: Option<FrameToken>,
}

impl<D: FrameDriver> MotionController<D> {
    /// Creates an idle controller at offset zero.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            offset: Point::ZERO,
            motion: Motion::Idle,
            frames: None,
        }
    }

    /// The current offset (top-left of the visible window in content space).
    #[must_use]
    pub const fn offset(&self) -> Point {
        self.offset
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> MotionPhase {
        self.motion.phase()
    }

    /// Returns `true` while a fling or snap simulation is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self.motion, Motion::Coasting { .. } | Motion::Snapping { .. })
    }

    /// Velocity of the running simulation, or zero.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        match self.motion {
            Motion::Coasting { item } | Motion::Snapping { item, .. } => item.velocity,
            Motion::Idle | Motion::Dragging { .. } => Vec2::ZERO,
        }
    }

    /// The anchor being snapped toward, while snapping.
    #[must_use]
    pub const fn snap_anchor(&self) -> Option<Point> {
        match self.motion {
            Motion::Snapping { anchor, .. } => Some(anchor),
            _ => None,
        }
    }

    /// The live frame subscription, if a simulation is running.
    #[must_use]
    pub const fn frame_token(&self) -> Option<FrameToken> {
        self.frames
    }

    /// Shared access to the frame driver.
    #[must_use]
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Starts a drag from the current offset, cancelling any simulation.
    pub fn begin_drag(&mut self) {
        self.release_frames();
        self.set_motion(Motion::Dragging {
            origin: self.offset,
        });
    }

    /// Applies the cumulative gesture `translation` since [`Self::begin_drag`].
    ///
    /// Ignored unless dragging.
    pub fn update_drag(
        &mut self,
        translation: Vec2,
        geometry: &ScrollGeometry,
        config: &ScrollConfig,
    ) {
        let Motion::Dragging { origin } = self.motion else {
            return;
        };
        let potential = origin - sanitize_vec(translation);
        let masked = geometry.axes().mask(potential.to_vec2()).to_point();
        self.offset = geometry.rubber_band(masked, config.rubber_resistance);
        trace!(x = self.offset.x, y = self.offset.y, "drag offset");
    }

    /// Ends the drag with the gesture's release `velocity`.
    ///
    /// A fast release starts coasting. A slow one either stops right away or,
    /// if the offset is stretched past an edge, starts snapping back.
    /// Ignored unless dragging.
    pub fn end_drag(&mut self, velocity: Vec2, geometry: &ScrollGeometry, config: &ScrollConfig) {
        if !matches!(self.motion, Motion::Dragging { .. }) {
            return;
        }
        // Content moves opposite to the finger.
        let velocity = geometry.axes().mask(-sanitize_vec(velocity));
        let item = SimulationItem {
            position: self.offset,
            velocity,
        };
        if item.speed() >= config.rest_speed {
            self.acquire_frames();
            self.set_motion(Motion::Coasting { item });
            return;
        }
        match resolve_snap(item.position, geometry) {
            SnapResolution::InBounds => self.set_motion(Motion::Idle),
            SnapResolution::Snap { anchor } => {
                self.acquire_frames();
                self.start_snap(item, anchor);
            }
        }
    }

    /// Ends the drag as if released with zero velocity.
    pub fn cancel_drag(&mut self, geometry: &ScrollGeometry, config: &ScrollConfig) {
        self.end_drag(Vec2::ZERO, geometry, config);
    }

    /// Stops all motion and leaves the offset where it is.
    pub fn stop(&mut self) {
        self.release_frames();
        self.set_motion(Motion::Idle);
    }

    /// Stops all motion and moves to `point`, clamped into the valid range.
    pub fn jump_to(&mut self, point: Point, geometry: &ScrollGeometry) {
        self.stop();
        let masked = geometry
            .axes()
            .mask(sanitize_point(point).to_vec2())
            .to_point();
        self.offset = geometry.clamp(masked);
    }

    /// Advances the running simulation by `dt` seconds.
    ///
    /// `token` must be the subscription handed out for the current simulation;
    /// frames for an earlier (cancelled or finished) one return
    /// [`FrameOutcome::Stale`] without touching any state.
    pub fn tick(
        &mut self,
        token: FrameToken,
        dt: f64,
        geometry: &ScrollGeometry,
        config: &ScrollConfig,
    ) -> FrameOutcome {
        if self.frames != Some(token) {
            return FrameOutcome::Stale;
        }
        match self.motion {
            Motion::Coasting { mut item } => {
                let inertia = Behavior::Inertia {
                    resistance: config.coast_resistance,
                };
                advance(&mut item, &inertia, dt, config.max_step);
                if !item.position.is_finite() {
                    debug!("coasting produced a non-finite offset");
                    self.offset = geometry.clamp(self.offset);
                    self.settle();
                    return FrameOutcome::Settled;
                }
                self.offset = item.position;
                match resolve_snap(item.position, geometry) {
                    SnapResolution::Snap { anchor } => {
                        self.start_snap(item, anchor);
                        FrameOutcome::Moved
                    }
                    SnapResolution::InBounds if item.speed() < config.rest_speed => {
                        self.settle();
                        FrameOutcome::Settled
                    }
                    SnapResolution::InBounds => {
                        self.motion = Motion::Coasting { item };
                        trace!(x = self.offset.x, y = self.offset.y, "coasting");
                        FrameOutcome::Moved
                    }
                }
            }
            Motion::Snapping { mut item, anchor } => {
                let spring = Behavior::Attachment {
                    anchor,
                    frequency: config.spring_frequency,
                    damping: config.spring_damping,
                };
                advance(&mut item, &spring, dt, config.max_step);
                let diverged = !item.position.is_finite();
                if diverged {
                    debug!("snapping produced a non-finite offset");
                }
                if diverged || item.distance_to(anchor) < config.oscillation_limit {
                    self.offset = anchor;
                    self.settle();
                    FrameOutcome::Settled
                } else {
                    self.offset = item.position;
                    self.motion = Motion::Snapping { item, anchor };
                    trace!(x = self.offset.x, y = self.offset.y, "snapping");
                    FrameOutcome::Moved
                }
            }
            // Subscriptions are released on every exit from a simulation.
            Motion::Idle | Motion::Dragging { .. } => {
                self.release_frames();
                FrameOutcome::Stale
            }
        }
    }

    fn start_snap(&mut self, mut item: SimulationItem, anchor: Point) {
        // Push away from the anchor so the spring decelerates the overshoot
        // instead of yanking it straight back.
        item.velocity += item.position - anchor;
        self.set_motion(Motion::Snapping { item, anchor });
        debug!(x = anchor.x, y = anchor.y, "snapping to anchor");
    }

    fn settle(&mut self) {
        self.release_frames();
        self.set_motion(Motion::Idle);
    }

    fn set_motion(&mut self, motion: Motion) {
        let from = self.motion.phase();
        let to = motion.phase();
        self.motion = motion;
        if from != to {
            debug!(?from, ?to, "scroll phase changed");
        }
    }

    fn acquire_frames(&mut self) {
        if self.frames.is_none() {
            let token = self.driver.subscribe();
            debug!(token = token.0, "frame subscription started");
            self.frames = Some(token);
        }
    }

    fn release_frames(&mut self) {
        if let Some(token) = self.frames.take() {
            self.driver.unsubscribe(token);
            debug!(token = token.0, "frame subscription released");
        }
    }
}

impl<D: FrameDriver> Drop for MotionController<D> {
    fn drop(&mut self) {
        self.release_frames();
    }
}
