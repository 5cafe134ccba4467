// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture events as delivered by the host's gesture recognizer.

use kurbo::Vec2;

/// One step of a single-pointer pan gesture.
///
/// Translations and velocities are in the host's view coordinates, where
/// dragging the finger right or down is positive. The scroll offset moves the
/// opposite way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The pointer went down and the recognizer started tracking a pan.
    Began,
    /// The pointer moved.
    Changed {
        /// Cumulative translation since [`GestureEvent::Began`].
        translation: Vec2,
    },
    /// The pointer was released.
    Ended {
        /// Release velocity in units per second.
        velocity: Vec2,
    },
    /// The recognizer abandoned the gesture, for example because the system
    /// took over the touch. Treated as a release with zero velocity.
    Cancelled,
}
