// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable physics constants.

/// Physics parameters for a scroll surface.
///
/// The defaults reproduce the classic feel: a 30% stretch past the edges while
/// dragging, a moderate glide after release, and a critically damped 2 Hz
/// spring that settles overshoot back into bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Fraction of the out-of-bounds drag distance that is applied to the offset.
    pub rubber_resistance: f64,
    /// Linear velocity damping (per second) applied while coasting.
    pub coast_resistance: f64,
    /// Oscillation frequency of the snap-back spring, in Hz.
    pub spring_frequency: f64,
    /// Damping ratio of the snap-back spring. `1.0` is critically damped.
    pub spring_damping: f64,
    /// Distance from the anchor at which a snap is considered finished.
    pub oscillation_limit: f64,
    /// Speed (units per second) below which coasting comes to rest.
    pub rest_speed: f64,
    /// Longest integration step in seconds; longer frames are sub-stepped.
    pub max_step: f64,
}

impl ScrollConfig {
    /// Default rubber-band resistance.
    pub const RUBBER_RESISTANCE: f64 = 0.3;
    /// Default coasting resistance.
    pub const COAST_RESISTANCE: f64 = 1.5;
    /// Default spring frequency.
    pub const SPRING_FREQUENCY: f64 = 2.0;
    /// Default spring damping ratio.
    pub const SPRING_DAMPING: f64 = 1.0;
    /// Default snap termination distance.
    pub const OSCILLATION_LIMIT: f64 = 2.0;
    /// Default rest speed.
    pub const REST_SPEED: f64 = 10.0;
    /// Default maximum integration step (240 Hz).
    pub const MAX_STEP: f64 = 1.0 / 240.0;

    /// Sets the rubber-band resistance.
    #[must_use]
    pub const fn with_rubber_resistance(mut self, resistance: f64) -> Self {
        self.rubber_resistance = resistance;
        self
    }

    /// Sets the coasting resistance.
    #[must_use]
    pub const fn with_coast_resistance(mut self, resistance: f64) -> Self {
        self.coast_resistance = resistance;
        self
    }

    /// Sets the spring frequency and damping ratio.
    #[must_use]
    pub const fn with_spring(mut self, frequency: f64, damping: f64) -> Self {
        self.spring_frequency = frequency;
        self.spring_damping = damping;
        self
    }

    /// Sets the snap termination distance.
    #[must_use]
    pub const fn with_oscillation_limit(mut self, limit: f64) -> Self {
        self.oscillation_limit = limit;
        self
    }

    /// Sets the rest speed for coasting.
    #[must_use]
    pub const fn with_rest_speed(mut self, speed: f64) -> Self {
        self.rest_speed = speed;
        self
    }

    /// Sets the longest integration step, in seconds.
    #[must_use]
    pub const fn with_max_step(mut self, max_step: f64) -> Self {
        self.max_step = max_step;
        self
    }

    /// Returns a copy where every field that is not finite, or is negative,
    /// is replaced by its default.
    ///
    /// The spring frequency, oscillation limit, and maximum step must also be
    /// strictly positive; a zero oscillation limit would never end a snap.
    #[must_use]
    pub fn sanitized(self) -> Self {
        fn non_negative(value: f64, default: f64) -> f64 {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                default
            }
        }
        fn positive(value: f64, default: f64) -> f64 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                default
            }
        }
        Self {
            rubber_resistance: non_negative(self.rubber_resistance, Self::RUBBER_RESISTANCE),
            coast_resistance: non_negative(self.coast_resistance, Self::COAST_RESISTANCE),
            spring_frequency: positive(self.spring_frequency, Self::SPRING_FREQUENCY),
            spring_damping: non_negative(self.spring_damping, Self::SPRING_DAMPING),
            oscillation_limit: positive(self.oscillation_limit, Self::OSCILLATION_LIMIT),
            rest_speed: non_negative(self.rest_speed, Self::REST_SPEED),
            max_step: positive(self.max_step, Self::MAX_STEP),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            rubber_resistance: Self::RUBBER_RESISTANCE,
            coast_resistance: Self::COAST_RESISTANCE,
            spring_frequency: Self::SPRING_FREQUENCY,
            spring_damping: Self::SPRING_DAMPING,
            oscillation_limit: Self::OSCILLATION_LIMIT,
            rest_speed: Self::REST_SPEED,
            max_step: Self::MAX_STEP,
        }
    }
}
