use super::{
    pinch_stage::PinchStage, readout_panel::ReadoutPanel, settings_modal::SettingsModal,
};
use crate::model::{Readout, ReadoutAction};
use crate::util::{load_config, save_config};
use touch_pinch::PinchConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(load_config);
    let readout = use_reducer(Readout::default);
    let generation = use_state(|| 0u32);
    let open_settings = use_state(|| false);

    // Persist config changes
    {
        let cfg = *config;
        use_effect_with(cfg, move |cfg| {
            if let Err(err) = save_config(cfg) {
                log::warn!("{err}");
            }
            || ()
        });
    }

    let on_gesture = {
        let dispatcher = readout.dispatcher();
        Callback::from(move |action: ReadoutAction| dispatcher.dispatch(action))
    };
    let on_clear = {
        let readout = readout.clone();
        let generation = generation.clone();
        Callback::from(move |_| {
            readout.dispatch(ReadoutAction::Clear);
            generation.set(generation.wrapping_add(1));
        })
    };
    let on_change = {
        let config = config.clone();
        let readout = readout.clone();
        Callback::from(move |cfg: PinchConfig| {
            readout.dispatch(ReadoutAction::Clear);
            config.set(cfg);
        })
    };
    let toggle_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(!*open_settings))
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh;">
            <PinchStage
                config={*config}
                generation={*generation}
                scale={readout.scale}
                on_gesture={on_gesture}
            />
            <ReadoutPanel
                readout={(*readout).clone()}
                on_clear={on_clear}
                on_settings={toggle_settings.clone()}
            />
            <SettingsModal
                show={*open_settings}
                on_close={toggle_settings}
                config={*config}
                on_change={on_change}
            />
        </div>
    }
}
