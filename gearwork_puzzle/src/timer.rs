// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Countdown timers that drive the three kinds of transition.
//!
//! Every transition kind (movement, scaling, rotation) has one shared
//! [`Countdown`]. Starting a transition on any piece restarts that kind's
//! countdown from its full duration; each frame the board advances the
//! countdown by the elapsed time and reads back a [`Step`]:
//!
//! ```rust
//! use gearwork_puzzle::timer::{Countdown, Step};
//!
//! let mut timer = Countdown::new(0.5);
//! assert_eq!(timer.advance(0.125), Step::Idle);
//!
//! timer.start();
//! assert_eq!(timer.advance(0.125), Step::Running(0.25));
//! assert_eq!(timer.advance(0.125), Step::Running(0.5));
//! assert_eq!(timer.advance(0.5), Step::Finished);
//! assert_eq!(timer.advance(0.125), Step::Idle);
//! ```

use crate::config::TimerDurations;

/// Result of advancing a [`Countdown`] by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// The countdown was not running; nothing to do.
    Idle,
    /// Still running; carries interpolation progress in `[0, 1)`.
    Running(f64),
    /// Reached zero on this frame; transitions snap to their end values.
    Finished,
}

/// A single countdown with a fixed full duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Countdown {
    remaining: f64,
    duration: f64,
}

impl Countdown {
    /// Creates an idle countdown that runs for `duration` seconds once started.
    #[must_use]
    pub const fn new(duration: f64) -> Self {
        Self {
            remaining: 0.0,
            duration,
        }
    }

    /// Full duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Seconds left before the countdown finishes; zero while idle.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Returns `true` between [`start`](Self::start) and the frame it finishes.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    /// Restarts the countdown from its full duration.
    ///
    /// A zero duration still counts as running until the next
    /// [`advance`](Self::advance), which then reports [`Step::Finished`].
    pub fn start(&mut self) {
        self.remaining = if self.duration > 0.0 {
            self.duration
        } else {
            f64::MIN_POSITIVE
        };
    }

    /// Consumes `dt` seconds.
    pub fn advance(&mut self, dt: f64) -> Step {
        if !self.is_running() {
            return Step::Idle;
        }
        self.remaining -= dt.max(0.0);
        if self.remaining <= 0.0 || self.duration <= 0.0 {
            self.remaining = 0.0;
            Step::Finished
        } else {
            Step::Running(self.progress())
        }
    }

    /// Interpolation progress: `inverse_lerp(duration, 0, remaining)`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        inverse_lerp(self.duration, 0.0, self.remaining)
    }
}

/// The three independent transition countdowns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerSet {
    /// Drives position transitions.
    pub movement: Countdown,
    /// Drives panel-size transitions.
    pub scaling: Countdown,
    /// Drives the revert-to-rest rotation.
    pub rotation: Countdown,
}

impl TimerSet {
    /// Creates idle countdowns with the configured durations.
    #[must_use]
    pub fn new(durations: &TimerDurations) -> Self {
        Self {
            movement: Countdown::new(durations.movement),
            scaling: Countdown::new(durations.scaling),
            rotation: Countdown::new(durations.rotation),
        }
    }
}

/// Where `value` sits between `a` and `b`, clamped to `[0, 1]`.
#[must_use]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

/// Linear interpolation between `a` and `b`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
