//! Two-finger pinch recognition for touch input.
//!
//! [`PinchRecognizer`] turns touch-begin/move/end frames into [`PinchEvent`]s
//! carrying a cumulative scale and the finger midpoint. [`web::bind`] wires a
//! recognizer to a DOM element's touch events.

pub mod config;
pub mod error;
pub mod event;
pub mod gate;
pub mod geometry;
pub mod recognizer;
pub mod state;
pub mod web;

pub use config::{CoordinateSpace, PinchConfig, PreventDefault, SessionEnd, SessionStart};
pub use error::{BindError, ConfigError};
pub use event::{PinchEvent, TouchFrame, TouchId, TouchPoint};
pub use gate::{TouchGate, TouchPhase};
pub use geometry::{Point, distance, midpoint};
pub use recognizer::{GestureCallback, PinchRecognizer};
pub use state::{FingerMap, Session};
pub use web::{Pinch, bind, bind_with_config};
