//! Touch frames consumed by the recognizer and the gesture event it emits.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Host identifier of one finger's contact, stable while the finger is down.
pub type TouchId = i32;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: TouchId,
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub const fn new(id: TouchId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One touch-begin, touch-move or touch-end delivery from the host.
///
/// `touches` lists every finger still on the surface after the frame;
/// `changed` lists the fingers this frame is about (new, moved or lifted).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchFrame {
    pub touches: Vec<TouchPoint>,
    pub changed: Vec<TouchPoint>,
}

impl TouchFrame {
    pub fn new(touches: Vec<TouchPoint>, changed: Vec<TouchPoint>) -> Self {
        Self { touches, changed }
    }
}

/// Pinch event handed to the gesture callback.
///
/// Wraps the host's native event without mutating it: `scale`, `x` and `y`
/// are the recognizer's values and everything else derefs to the native event.
#[derive(Debug)]
pub struct PinchEvent<'a, E> {
    native: &'a E,
    /// Cumulative scale; 1.0 means unchanged since the first pinch began.
    pub scale: f64,
    /// Finger midpoint, in the same coordinate space as the input touches.
    pub x: f64,
    pub y: f64,
}

impl<'a, E> PinchEvent<'a, E> {
    pub fn new(native: &'a E, scale: f64, midpoint: Point) -> Self {
        Self {
            native,
            scale,
            x: midpoint.x,
            y: midpoint.y,
        }
    }

    pub fn native(&self) -> &'a E {
        self.native
    }

    pub fn midpoint(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl<E> Deref for PinchEvent<'_, E> {
    type Target = E;

    fn deref(&self) -> &E {
        self.native
    }
}

impl<E> Clone for PinchEvent<'_, E> {
    fn clone(&self) -> Self {
        Self {
            native: self.native,
            scale: self.scale,
            x: self.x,
            y: self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Native {
        timestamp: u64,
        scale: f64,
    }

    impl Native {
        fn kind(&self) -> &'static str {
            "touchmove"
        }
    }

    #[test]
    fn overrides_shadow_native_fields() {
        let native = Native {
            timestamp: 42,
            scale: 9.0,
        };
        let ev = PinchEvent::new(&native, 2.0, Point::new(10.0, 0.0));
        assert_eq!(ev.scale, 2.0);
        assert_eq!(ev.native().scale, 9.0);
        assert_eq!((ev.x, ev.y), (10.0, 0.0));
        assert_eq!(ev.timestamp, 42);
        assert_eq!(ev.kind(), "touchmove");
    }
}
