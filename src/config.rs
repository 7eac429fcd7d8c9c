//! Recognizer configuration.
//!
//! Hosts disagree on how touch frames bracket a pinch, so the session
//! boundaries are explicit policies rather than guesses.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// When a touch-begin frame opens a pinch session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStart {
    /// The begin frame itself reports exactly two touches on the surface.
    #[default]
    NativePair,
    /// Whenever two fingers are tracked after a begin frame.
    TrackedPair,
}

/// When a touch-end frame closes a pinch session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEnd {
    /// The tracked finger count is no longer two.
    #[default]
    LeavesPair,
    /// Any finger lifting closes the session.
    AnyLift,
}

/// When the host's default touch-begin handling is suppressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreventDefault {
    /// Only on begin frames that report two fingers.
    #[default]
    Pinch,
    /// On every begin frame.
    Always,
}

/// Which touch coordinates the web binding reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSpace {
    #[default]
    Page,
    Client,
    Screen,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinchConfig {
    pub session_start: SessionStart,
    pub session_end: SessionEnd,
    pub prevent_default: PreventDefault,
    pub coordinates: CoordinateSpace,
}

impl PinchConfig {
    /// Parses a JSON config; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(ConfigError::Serialize)
    }

    pub fn with_session_start(mut self, start: SessionStart) -> Self {
        self.session_start = start;
        self
    }

    pub fn with_session_end(mut self, end: SessionEnd) -> Self {
        self.session_end = end;
        self
    }

    pub fn with_prevent_default(mut self, prevent: PreventDefault) -> Self {
        self.prevent_default = prevent;
        self
    }

    pub fn with_coordinates(mut self, coordinates: CoordinateSpace) -> Self {
        self.coordinates = coordinates;
        self
    }
}
