use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, HtmlElement, TouchEvent};
use yew::prelude::*;

use touch_pinch::{PinchConfig, PinchEvent};

use crate::model::ReadoutAction;

#[derive(Properties, PartialEq, Clone)]
pub struct PinchStageProps {
    pub config: PinchConfig,
    /// Bumped to drop the current recognizer and bind a fresh one.
    pub generation: u32,
    pub scale: f64,
    pub on_gesture: Callback<ReadoutAction>,
}

/// Re-dispatches the gesture as a `pinch` DOM event so page scripts can
/// listen for it; `detail` inherits from the native touch event.
fn forward_pinch(stage: &HtmlElement, e: &PinchEvent<'_, TouchEvent>) -> Result<(), JsValue> {
    let init = CustomEventInit::new();
    init.set_detail(&e.to_js()?.into());
    let event = CustomEvent::new_with_event_init_dict("pinch", &init)?;
    stage.dispatch_event(&event)?;
    Ok(())
}

#[function_component(PinchStage)]
pub fn pinch_stage(props: &PinchStageProps) -> Html {
    let stage_ref = use_node_ref();

    {
        let stage_ref = stage_ref.clone();
        let on_gesture = props.on_gesture.clone();
        use_effect_with((props.config, props.generation), move |(config, _)| {
            let pinch = stage_ref.cast::<HtmlElement>().and_then(|el| {
                let stage = el.clone();
                let bound = touch_pinch::bind_with_config(
                    &el,
                    *config,
                    move |e: &PinchEvent<'_, TouchEvent>| {
                        on_gesture.emit(ReadoutAction::Gesture {
                            scale: e.scale,
                            x: e.x,
                            y: e.y,
                        });
                        if let Err(err) = forward_pinch(&stage, e) {
                            log::warn!("pinch event not forwarded: {err:?}");
                        }
                    },
                );
                match bound {
                    Ok(pinch) => Some(pinch),
                    Err(err) => {
                        log::error!("{err}");
                        None
                    }
                }
            });
            move || {
                if let Some(pinch) = pinch {
                    pinch.unbind();
                }
            }
        });
    }

    let scale = if props.scale.is_finite() && props.scale > 0.0 {
        props.scale
    } else {
        1.0
    };
    html! {
        <div ref={stage_ref} style="position:absolute; inset:0; touch-action:none; overflow:hidden; display:flex; align-items:center; justify-content:center; background:#0d1117;">
            <div style={format!("width:200px; height:200px; border-radius:12px; background:linear-gradient(135deg,#58a6ff,#d2a8ff); transform:scale({}); transform-origin:center;", scale)}></div>
        </div>
    }
}
