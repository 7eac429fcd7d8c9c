use touch_pinch::{CoordinateSpace, PinchConfig, PreventDefault, SessionEnd, SessionStart};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub config: PinchConfig,
    pub on_change: Callback<PinchConfig>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let cfg = props.config;
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_start_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            cb.emit(cfg.with_session_start(match cfg.session_start {
                SessionStart::NativePair => SessionStart::TrackedPair,
                SessionStart::TrackedPair => SessionStart::NativePair,
            }))
        })
    };
    let toggle_end_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            cb.emit(cfg.with_session_end(match cfg.session_end {
                SessionEnd::LeavesPair => SessionEnd::AnyLift,
                SessionEnd::AnyLift => SessionEnd::LeavesPair,
            }))
        })
    };
    let toggle_prevent_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            cb.emit(cfg.with_prevent_default(match cfg.prevent_default {
                PreventDefault::Pinch => PreventDefault::Always,
                PreventDefault::Always => PreventDefault::Pinch,
            }))
        })
    };
    let cycle_coords_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            cb.emit(cfg.with_coordinates(match cfg.coordinates {
                CoordinateSpace::Page => CoordinateSpace::Client,
                CoordinateSpace::Client => CoordinateSpace::Screen,
                CoordinateSpace::Screen => CoordinateSpace::Page,
            }))
        })
    };
    let reset_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| cb.emit(PinchConfig::default()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Pinch Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={cfg.session_start == SessionStart::TrackedPair} onclick={toggle_start_cb} />
                    <span>{"Open on any two tracked fingers"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={cfg.session_end == SessionEnd::AnyLift} onclick={toggle_end_cb} />
                    <span>{"Close on any finger lift"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={cfg.prevent_default == PreventDefault::Always} onclick={toggle_prevent_cb} />
                    <span>{"Block default on every touch start"}</span>
                </label>
                <div style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Coordinates"}</span>
                    <button onclick={cycle_coords_cb}>{ format!("{:?}", cfg.coordinates) }</button>
                </div>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="flex:1;">{"Restore Defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Changing a setting rebinds the stage and resets the cumulative scale."}</div>
        </div>
    </div>}
}
