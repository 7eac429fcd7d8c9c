//! Two-finger pinch recognition over raw touch frames.
//!
//! The recognizer keeps a map of fingers that are down and a [`Session`]
//! that is either idle or pinching. A pinch session measures finger
//! separation against the separation it opened with and composes the ratio
//! onto the cumulative scale carried over from earlier sessions.

use log::{debug, trace};

use crate::config::{PinchConfig, PreventDefault, SessionEnd, SessionStart};
use crate::event::{PinchEvent, TouchFrame};
use crate::geometry::{distance, midpoint};
use crate::state::{FingerMap, Session};

/// Callback receiving every derived pinch event.
pub type GestureCallback<E> = Box<dyn FnMut(&PinchEvent<'_, E>)>;

pub struct PinchRecognizer<E = ()> {
    config: PinchConfig,
    fingers: FingerMap,
    session: Session,
    scale: f64,
    on_gesture: GestureCallback<E>,
}

impl<E: 'static> Default for PinchRecognizer<E> {
    fn default() -> Self {
        Self::with_config(PinchConfig::default(), |_: &PinchEvent<'_, E>| {})
    }
}

impl<E> std::fmt::Debug for PinchRecognizer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinchRecognizer")
            .field("config", &self.config)
            .field("fingers", &self.fingers)
            .field("session", &self.session)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl<E> PinchRecognizer<E> {
    pub fn new(on_gesture: impl FnMut(&PinchEvent<'_, E>) + 'static) -> Self {
        Self::with_config(PinchConfig::default(), on_gesture)
    }

    pub fn with_config(
        config: PinchConfig,
        on_gesture: impl FnMut(&PinchEvent<'_, E>) + 'static,
    ) -> Self {
        Self {
            config,
            fingers: FingerMap::default(),
            session: Session::Idle,
            scale: 1.0,
            on_gesture: Box::new(on_gesture),
        }
    }

    pub fn config(&self) -> &PinchConfig {
        &self.config
    }

    /// Cumulative scale committed by the sessions closed so far.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_pinching(&self) -> bool {
        self.session.is_pinching()
    }

    pub fn finger_count(&self) -> usize {
        self.fingers.len()
    }

    pub fn fingers(&self) -> &FingerMap {
        &self.fingers
    }

    /// Handles a touch-begin frame.
    ///
    /// Returns `true` when the host should suppress its default handling.
    pub fn touch_start(&mut self, frame: &TouchFrame) -> bool {
        if frame.touches.is_empty() {
            return self.config.prevent_default == PreventDefault::Always;
        }

        for touch in &frame.changed {
            self.fingers.insert(touch);
        }
        let stale = self.fingers.retain_down(&frame.touches);
        if stale > 0 {
            trace!("dropped {stale} stale finger(s) on touch start");
        }

        let native_pair = frame.touches.len() == 2;
        let opens = match self.config.session_start {
            SessionStart::NativePair => native_pair && self.fingers.len() == 2,
            SessionStart::TrackedPair => self.fingers.len() == 2,
        };

        // Any begin frame moves the baseline; a running session is committed first.
        self.close_session();
        if opens {
            self.open_session();
        }

        native_pair || self.config.prevent_default == PreventDefault::Always
    }

    /// Handles a touch-move frame, emitting a pinch event when it qualifies.
    ///
    /// Returns the scale handed to the callback, or `None` if the frame was ignored.
    pub fn touch_move(&mut self, frame: &TouchFrame, native: &E) -> Option<f64> {
        let Session::Pinching {
            baseline_distance,
            ref mut last_scale,
            ..
        } = self.session
        else {
            trace!("touch move ignored: no pinch session");
            return None;
        };
        if self.fingers.len() != 2 {
            trace!("touch move ignored: {} finger(s) tracked", self.fingers.len());
            return None;
        }

        for touch in &frame.changed {
            self.fingers.update(touch);
        }
        let (a, b) = self.fingers.pair()?;

        // A zero baseline yields a non-finite scale; consumers must cope with it.
        let scale = distance(a, b) / baseline_distance * self.scale;
        let event = PinchEvent::new(native, scale, midpoint(a, b));
        (self.on_gesture)(&event);

        *last_scale = scale;
        Some(scale)
    }

    /// Handles a touch-end frame.
    pub fn touch_end(&mut self, frame: &TouchFrame) {
        for touch in &frame.changed {
            self.fingers.remove(touch.id);
        }
        let stale = self.fingers.retain_down(&frame.touches);
        if stale > 0 {
            trace!("dropped {stale} stale finger(s) on touch end");
        }

        let closes = match self.config.session_end {
            SessionEnd::LeavesPair => self.fingers.len() != 2,
            SessionEnd::AnyLift => !frame.changed.is_empty() || self.fingers.len() != 2,
        };
        if closes {
            self.close_session();
        }
    }

    /// Handles a touch-cancel frame; the host withdrew the listed fingers.
    pub fn touch_cancel(&mut self, frame: &TouchFrame) {
        self.touch_end(frame);
    }

    fn open_session(&mut self) {
        let Some((a, b)) = self.fingers.pair() else {
            return;
        };
        let baseline_distance = distance(a, b);
        let baseline_midpoint = midpoint(a, b);
        debug!(
            "pinch opened: baseline distance {baseline_distance}, midpoint ({}, {})",
            baseline_midpoint.x, baseline_midpoint.y
        );
        self.session = Session::Pinching {
            baseline_distance,
            baseline_midpoint,
            last_scale: self.scale,
        };
    }

    fn close_session(&mut self) {
        if let Session::Pinching { last_scale, .. } = self.session {
            debug!("pinch closed: scale {} -> {last_scale}", self.scale);
            self.scale = last_scale;
            self.session = Session::Idle;
        }
    }
}
