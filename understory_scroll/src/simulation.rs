// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A point-mass simulation used for flinging and snapping.
//!
//! The simulated [`SimulationItem`] has no size and no visual representation;
//! it only carries the offset being animated and its velocity. A [`Behavior`]
//! describes the forces acting on it and [`advance`] integrates them with
//! implicit Euler steps no longer than the configured maximum step.

use core::f64::consts::TAU;

use kurbo::{Point, Rect, Size, Vec2};

/// Frame deltas longer than this are truncated, so a host that stalls (or a
/// backgrounded app that resumes) does not integrate seconds of motion at once.
pub const MAX_FRAME_DELTA: f64 = 0.25;

/// Virtual point that is the subject of the physics simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationItem {
    /// Current position, in absolute offset coordinates.
    pub position: Point,
    /// Current velocity, in units per second.
    pub velocity: Vec2,
}

impl SimulationItem {
    /// The item is a point; it has no extent.
    pub const SIZE: Size = Size::ZERO;

    /// Creates an item at rest at `position`.
    #[must_use]
    pub const fn at(position: Point) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Zero-size bounds located at the item's position.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, Self::SIZE)
    }

    /// Magnitude of the velocity.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.hypot()
    }

    /// Euclidean distance from the item to `target`.
    #[must_use]
    pub fn distance_to(&self, target: Point) -> f64 {
        self.position.distance(target)
    }
}

/// Forces acting on a [`SimulationItem`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Behavior {
    /// Free motion slowed by velocity-proportional drag.
    Inertia {
        /// Drag coefficient, per second.
        resistance: f64,
    },
    /// Zero-length spring attaching the item to `anchor`.
    Attachment {
        /// Rest position of the spring.
        anchor: Point,
        /// Oscillation frequency in Hz.
        frequency: f64,
        /// Damping ratio; `1.0` is critically damped.
        damping: f64,
    },
}

impl Behavior {
    /// One step of `h` seconds.
    ///
    /// The velocity update is implicit in the drag and spring terms, so a step
    /// never amplifies motion however stiff the behavior or long the step.
    fn step(&self, item: &mut SimulationItem, h: f64) {
        match *self {
            Self::Inertia { resistance } => {
                item.velocity = item.velocity / (1.0 + resistance * h);
            }
            Self::Attachment {
                anchor,
                frequency,
                damping,
            } => {
                let omega = TAU * frequency;
                let stiffness = omega * omega;
                let friction = 2.0 * damping * omega;
                let displacement = item.position - anchor;
                item.velocity = (item.velocity - displacement * (stiffness * h))
                    / (1.0 + friction * h + stiffness * h * h);
            }
        }
        item.position += item.velocity * h;
    }
}

/// Advances `item` under `behavior` by `dt` seconds.
///
/// `dt` is capped at [`MAX_FRAME_DELTA`] and split into steps of at most
/// `max_step` seconds. Non-finite or non-positive `dt` leaves the item as is.
pub fn advance(item: &mut SimulationItem, behavior: &Behavior, dt: f64, max_step: f64) {
    if !(dt.is_finite() && dt > 0.0) {
        return;
    }
    let max_step = if max_step.is_finite() && max_step > 0.0 {
        max_step
    } else {
        dt
    };
    let mut remaining = dt.min(MAX_FRAME_DELTA);
    while remaining > 0.0 {
        let h = remaining.min(max_step);
        behavior.step(item, h);
        remaining -= h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;
    const STEP: f64 = 1.0 / 240.0;

    #[test]
    fn inertia_decelerates_along_velocity() {
        let mut item = SimulationItem {
            position: Point::new(100.0, 100.0),
            velocity: Vec2::new(600.0, -300.0),
        };
        let behavior = Behavior::Inertia { resistance: 1.5 };
        let mut last_speed = item.speed();
        for _ in 0..30 {
            advance(&mut item, &behavior, FRAME, STEP);
            assert!(item.speed() < last_speed, "inertia must only slow down");
            last_speed = item.speed();
        }
        assert!(item.position.x > 100.0, "moved forward on x");
        assert!(item.position.y < 100.0, "moved backward on y");
    }

    #[test]
    fn zero_resistance_keeps_velocity() {
        let mut item = SimulationItem {
            position: Point::ZERO,
            velocity: Vec2::new(120.0, 0.0),
        };
        advance(&mut item, &Behavior::Inertia { resistance: 0.0 }, 0.5, STEP);
        assert_eq!(item.velocity, Vec2::new(120.0, 0.0));
        assert!((item.position.x - 60.0).abs() < 1e-9);
    }

    #[test]
    fn critically_damped_spring_converges_from_100() {
        let anchor = Point::new(350.0, 0.0);
        let mut item = SimulationItem::at(Point::new(450.0, 0.0));
        // Seed the push impulse away from the anchor, as a snap does.
        item.velocity = item.position - anchor;
        let behavior = Behavior::Attachment {
            anchor,
            frequency: 2.0,
            damping: 1.0,
        };
        let mut ticks = 0;
        while item.distance_to(anchor) >= 2.0 {
            advance(&mut item, &behavior, FRAME, STEP);
            ticks += 1;
            assert!(ticks < 120, "spring failed to converge within two seconds");
        }
        assert!(ticks > 1, "convergence should not be instantaneous");
    }

    #[test]
    fn degenerate_dt_is_ignored() {
        let start = SimulationItem {
            position: Point::new(1.0, 2.0),
            velocity: Vec2::new(3.0, 4.0),
        };
        let behavior = Behavior::Inertia { resistance: 1.5 };
        for dt in [0.0, -FRAME, f64::NAN, f64::INFINITY] {
            let mut item = start;
            advance(&mut item, &behavior, dt, STEP);
            assert_eq!(item, start, "dt {dt} should not move the item");
        }
    }

    #[test]
    fn long_frames_are_capped() {
        let mut capped = SimulationItem {
            position: Point::ZERO,
            velocity: Vec2::new(100.0, 0.0),
        };
        let behavior = Behavior::Inertia { resistance: 0.0 };
        advance(&mut capped, &behavior, 10.0, STEP);
        assert!((capped.position.x - 100.0 * MAX_FRAME_DELTA).abs() < 1e-9);
    }

    #[test]
    fn item_is_zero_sized() {
        let item = SimulationItem::at(Point::new(5.0, 6.0));
        assert_eq!(item.bounds().size(), Size::ZERO);
        assert_eq!(item.bounds().origin(), Point::new(5.0, 6.0));
    }

    #[test]
    fn stiff_behaviors_stay_bounded() {
        let anchor = Point::new(0.0, 700.0);
        let stiff = Behavior::Attachment {
            anchor,
            frequency: 60.0,
            damping: 1.0,
        };
        let mut item = SimulationItem {
            position: Point::new(0.0, 760.0),
            velocity: Vec2::new(0.0, 60.0),
        };
        // A step of a whole frame is far beyond what an explicit step survives.
        advance(&mut item, &stiff, FRAME, FRAME);
        assert!(item.position.is_finite(), "spring diverged: {:?}", item);
        assert!(item.distance_to(anchor) < 60.0, "spring amplified motion");

        let mut coasting = SimulationItem {
            position: Point::ZERO,
            velocity: Vec2::new(0.0, 500.0),
        };
        let heavy = Behavior::Inertia { resistance: 1.0e6 };
        advance(&mut coasting, &heavy, FRAME, 1.0);
        assert!(coasting.velocity.y > 0.0 && coasting.velocity.y < 500.0);
        assert!(coasting.position.y > 0.0 && coasting.position.y < 500.0 * FRAME);
    }
}
