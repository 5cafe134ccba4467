// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subscription seam to the host's per-frame animation driver.
//!
//! While a fling or snap is running, the motion controller holds exactly one
//! [`FrameToken`] obtained from a [`FrameDriver`]. The host calls back into the
//! controller once per display refresh, passing that token. As soon as the
//! simulation stops (or a new drag preempts it) the token is returned to the
//! driver, and any tick still carrying it is ignored.

/// Opaque identifier of a frame callback registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(pub u64);

/// Host capability to start and stop per-frame callbacks.
pub trait FrameDriver {
    /// Starts delivering frames; returns the token that identifies them.
    fn subscribe(&mut self) -> FrameToken;

    /// Stops delivering frames for `token`.
    ///
    /// Must take effect immediately: the host should not deliver further ticks
    /// for `token` after this returns.
    fn unsubscribe(&mut self, token: FrameToken);
}

impl<D: FrameDriver + ?Sized> FrameDriver for &mut D {
    fn subscribe(&mut self) -> FrameToken {
        (**self).subscribe()
    }

    fn unsubscribe(&mut self, token: FrameToken) {
        (**self).unsubscribe(token);
    }
}

/// A frame driver that just records registrations.
///
/// Useful for hosts that poll [`ManualFrameDriver::active`] from their own
/// render loop, and for tests.
#[derive(Clone, Debug, Default)]
pub struct ManualFrameDriver {
    next: u64,
    active: Option<FrameToken>,
    subscriptions: u64,
    unsubscriptions: u64,
}

impl ManualFrameDriver {
    /// Creates a driver with no active registration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: 0,
            active: None,
            subscriptions: 0,
            unsubscriptions: 0,
        }
    }

    /// The currently registered token, if frames are wanted.
    #[must_use]
    pub const fn active(&self) -> Option<FrameToken> {
        self.active
    }

    /// Total number of [`FrameDriver::subscribe`] calls so far.
    #[must_use]
    pub const fn subscriptions(&self) -> u64 {
        self.subscriptions
    }

    /// Total number of [`FrameDriver::unsubscribe`] calls so far.
    #[must_use]
    pub const fn unsubscriptions(&self) -> u64 {
        self.unsubscriptions
    }
}

impl FrameDriver for ManualFrameDriver {
    fn subscribe(&mut self) -> FrameToken {
        self.next += 1;
        let token = FrameToken(self.next);
        self.active = Some(token);
        self.subscriptions += 1;
        token
    }

    fn unsubscribe(&mut self, token: FrameToken) {
        if self.active == Some(token) {
            self.active = None;
        }
        self.unsubscriptions += 1;
    }
}
