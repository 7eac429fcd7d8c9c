//! Browser binding: feeds DOM touch events from an element into a recognizer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{EventTarget, TouchEvent, TouchList};

use crate::config::{CoordinateSpace, PinchConfig};
use crate::error::BindError;
use crate::event::{PinchEvent, TouchFrame, TouchPoint};
use crate::gate::{TouchGate, TouchPhase};

type TouchListener = Closure<dyn FnMut(TouchEvent)>;

/// A recognizer bound to a DOM element. Dropping it unbinds.
pub struct Pinch {
    target: EventTarget,
    listeners: Vec<(&'static str, TouchListener)>,
    gate: TouchGate<TouchEvent>,
}

/// Binds a pinch recognizer with the default config to `target`.
pub fn bind(
    target: &EventTarget,
    on_gesture: impl FnMut(&PinchEvent<'_, TouchEvent>) + 'static,
) -> Result<Pinch, BindError> {
    bind_with_config(target, PinchConfig::default(), on_gesture)
}

pub fn bind_with_config(
    target: &EventTarget,
    config: PinchConfig,
    on_gesture: impl FnMut(&PinchEvent<'_, TouchEvent>) + 'static,
) -> Result<Pinch, BindError> {
    let mut pinch = Pinch {
        target: target.clone(),
        listeners: Vec::with_capacity(TouchPhase::ALL.len()),
        gate: TouchGate::new(config, on_gesture),
    };

    for phase in TouchPhase::ALL {
        let name = phase.event_name();
        let cb = listener(phase, config.coordinates, &pinch.gate);
        if let Err(err) = target.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
        {
            // Drop rolls back the listeners attached so far.
            drop(pinch);
            return Err(BindError::Listener {
                event: name,
                reason: format!("{err:?}"),
            });
        }
        pinch.listeners.push((name, cb));
    }
    log::debug!("pinch recognizer bound");
    Ok(pinch)
}

fn listener(
    phase: TouchPhase,
    space: CoordinateSpace,
    gate: &TouchGate<TouchEvent>,
) -> TouchListener {
    let gate = gate.clone();
    Closure::wrap(Box::new(move |e: TouchEvent| {
        if !gate.is_open() {
            return;
        }
        let frame = read_frame(&e, space);
        if gate.dispatch(phase, &frame, &e) {
            e.prevent_default();
        }
    }) as Box<dyn FnMut(_)>)
}

fn read_frame(e: &TouchEvent, space: CoordinateSpace) -> TouchFrame {
    TouchFrame::new(
        touch_points(&e.touches(), space),
        touch_points(&e.changed_touches(), space),
    )
}

fn touch_points(list: &TouchList, space: CoordinateSpace) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| {
            let (x, y) = match space {
                CoordinateSpace::Page => (t.page_x(), t.page_y()),
                CoordinateSpace::Client => (t.client_x(), t.client_y()),
                CoordinateSpace::Screen => (t.screen_x(), t.screen_y()),
            };
            TouchPoint::new(t.identifier(), x as f64, y as f64)
        })
        .collect()
}

impl Pinch {
    /// Detaches every listener. No gesture callback fires once this returns.
    pub fn unbind(&self) {
        if !self.gate.close() {
            return;
        }
        for (name, cb) in &self.listeners {
            let _ = self
                .target
                .remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }
        log::debug!("pinch recognizer unbound");
    }

    pub fn is_bound(&self) -> bool {
        self.gate.is_open()
    }

    /// Committed cumulative scale. Safe to call from the gesture callback.
    pub fn scale(&self) -> f64 {
        self.gate.scale()
    }

    pub fn is_pinching(&self) -> bool {
        self.gate.is_pinching()
    }

    pub fn config(&self) -> PinchConfig {
        self.gate.config()
    }
}

impl Drop for Pinch {
    fn drop(&mut self) {
        self.unbind();
    }
}

impl PinchEvent<'_, TouchEvent> {
    /// Builds a JS object that inherits from the native event and carries
    /// `scale`, `x` and `y` as own properties.
    pub fn to_js(&self) -> Result<js_sys::Object, JsValue> {
        let shadow = js_sys::Object::create(self.native().unchecked_ref());
        js_sys::Reflect::set(&shadow, &"scale".into(), &self.scale.into())?;
        js_sys::Reflect::set(&shadow, &"x".into(), &self.x.into())?;
        js_sys::Reflect::set(&shadow, &"y".into(), &self.y.into())?;
        Ok(shadow)
    }
}
