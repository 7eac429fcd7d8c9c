//! Host-side switch between touch listeners and a shared recognizer.
//!
//! Listeners hold a clone of the [`TouchGate`] and route every frame
//! through [`TouchGate::dispatch`]. Once the gate is closed no frame reaches
//! the recognizer again, so the gesture callback stays silent.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::PinchConfig;
use crate::event::{PinchEvent, TouchFrame};
use crate::recognizer::PinchRecognizer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl TouchPhase {
    pub const ALL: [TouchPhase; 4] = [
        TouchPhase::Start,
        TouchPhase::Move,
        TouchPhase::End,
        TouchPhase::Cancel,
    ];

    /// DOM event type for this phase.
    pub fn event_name(self) -> &'static str {
        match self {
            TouchPhase::Start => "touchstart",
            TouchPhase::Move => "touchmove",
            TouchPhase::End => "touchend",
            TouchPhase::Cancel => "touchcancel",
        }
    }
}

pub struct TouchGate<E> {
    recognizer: Rc<RefCell<PinchRecognizer<E>>>,
    active: Rc<Cell<bool>>,
    // Mirrors readable while the recognizer is borrowed by a running callback.
    scale: Rc<Cell<f64>>,
    pinching: Rc<Cell<bool>>,
    config: PinchConfig,
}

impl<E> Clone for TouchGate<E> {
    fn clone(&self) -> Self {
        Self {
            recognizer: self.recognizer.clone(),
            active: self.active.clone(),
            scale: self.scale.clone(),
            pinching: self.pinching.clone(),
            config: self.config,
        }
    }
}

impl<E> TouchGate<E> {
    pub fn new(
        config: PinchConfig,
        on_gesture: impl FnMut(&PinchEvent<'_, E>) + 'static,
    ) -> Self {
        Self {
            recognizer: Rc::new(RefCell::new(PinchRecognizer::with_config(
                config, on_gesture,
            ))),
            active: Rc::new(Cell::new(true)),
            scale: Rc::new(Cell::new(1.0)),
            pinching: Rc::new(Cell::new(false)),
            config,
        }
    }

    /// Feeds one frame to the recognizer.
    ///
    /// Returns `true` when the host should suppress default handling. Frames
    /// arriving after [`close`](Self::close), or re-entering from inside the
    /// gesture callback, are dropped.
    pub fn dispatch(&self, phase: TouchPhase, frame: &TouchFrame, native: &E) -> bool {
        if !self.active.get() {
            return false;
        }
        let Ok(mut r) = self.recognizer.try_borrow_mut() else {
            log::trace!("{} dropped: recognizer busy", phase.event_name());
            return false;
        };
        let prevent = match phase {
            TouchPhase::Start => r.touch_start(frame),
            TouchPhase::Move => {
                r.touch_move(frame, native);
                false
            }
            TouchPhase::End => {
                r.touch_end(frame);
                false
            }
            TouchPhase::Cancel => {
                r.touch_cancel(frame);
                false
            }
        };
        self.scale.set(r.scale());
        self.pinching.set(r.is_pinching());
        prevent
    }

    /// Stops all further dispatch. Returns `false` if the gate was already closed.
    pub fn close(&self) -> bool {
        self.active.replace(false)
    }

    pub fn is_open(&self) -> bool {
        self.active.get()
    }

    /// Cumulative scale as of the last dispatched frame.
    pub fn scale(&self) -> f64 {
        self.scale.get()
    }

    pub fn is_pinching(&self) -> bool {
        self.pinching.get()
    }

    pub fn config(&self) -> PinchConfig {
        self.config
    }
}
