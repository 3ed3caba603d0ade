// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for a puzzle board.

use alloc::string::String;
use core::fmt;

use kurbo::Size;

/// Full durations, in seconds, of the three transition kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimerDurations {
    /// Position transitions toward a site.
    pub movement: f64,
    /// Panel-size transitions between slot size and world size.
    pub scaling: f64,
    /// Revert-to-rest rotation after the completed spin.
    pub rotation: f64,
}

impl Default for TimerDurations {
    fn default() -> Self {
        Self {
            movement: 0.4,
            scaling: 0.3,
            rotation: 0.2,
        }
    }
}

/// The two texts the board can display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BannerTexts {
    /// Shown while the puzzle is unsolved.
    pub default: String,
    /// Shown while every piece rests on a placement.
    pub completed: String,
}

impl Default for BannerTexts {
    fn default() -> Self {
        Self {
            default: String::from("Drag the gears onto the board."),
            completed: String::from("Well done! The gears are turning."),
        }
    }
}

/// Configuration of a puzzle board.
///
/// Angles are in degrees here and converted to radians by the board.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PuzzleConfig {
    /// Transition durations.
    pub durations: TimerDurations,
    /// Completed-spin speed in degrees per second.
    pub spin_speed: f64,
    /// Pause, in seconds, between a reset's revert finishing and pieces leaving.
    pub reset_delay: f64,
    /// World rotation of every piece at rest, in degrees.
    pub rest_angle: f64,
    /// Size of a piece's panel representation while parked in a slot.
    pub panel_size: Size,
    /// Size of a piece's panel representation that matches the world piece on screen.
    pub world_size: Size,
    /// Display texts.
    pub banner: BannerTexts,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            durations: TimerDurations::default(),
            spin_speed: 270.0,
            reset_delay: 0.25,
            rest_angle: 20.0,
            panel_size: Size::new(96.0, 96.0),
            world_size: Size::new(128.0, 128.0),
            banner: BannerTexts::default(),
        }
    }
}

impl PuzzleConfig {
    /// Checks that every duration, speed, and size is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("movement", self.durations.movement),
            ("scaling", self.durations.scaling),
            ("rotation", self.durations.rotation),
            ("reset_delay", self.reset_delay),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Duration { name, value });
            }
        }
        if !self.spin_speed.is_finite() {
            return Err(ConfigError::SpinSpeed(self.spin_speed));
        }
        if !self.rest_angle.is_finite() {
            return Err(ConfigError::RestAngle(self.rest_angle));
        }
        for (name, size) in [("panel_size", self.panel_size), ("world_size", self.world_size)] {
            if !size.is_finite() || size.width < 0.0 || size.height < 0.0 {
                return Err(ConfigError::Size { name, size });
            }
        }
        Ok(())
    }

    pub(crate) fn spin_speed_radians(&self) -> f64 {
        self.spin_speed.to_radians()
    }

    pub(crate) fn rest_angle_radians(&self) -> f64 {
        self.rest_angle.to_radians()
    }
}

/// A [`PuzzleConfig`] value that cannot drive a board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A duration is negative or not finite.
    Duration {
        /// Which duration.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The spin speed is not finite.
    SpinSpeed(f64),
    /// The rest angle is not finite.
    RestAngle(f64),
    /// A size is negative or not finite.
    Size {
        /// Which size.
        name: &'static str,
        /// The rejected value.
        size: Size,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duration { name, value } => {
                write!(f, "duration `{name}` must be finite and non-negative, got {value}")
            }
            Self::SpinSpeed(value) => write!(f, "spin speed must be finite, got {value}"),
            Self::RestAngle(value) => write!(f, "rest angle must be finite, got {value}"),
            Self::Size { name, size } => {
                write!(f, "size `{name}` must be finite and non-negative, got {size:?}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
