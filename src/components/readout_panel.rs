use yew::prelude::*;

use crate::model::Readout;
use crate::util::format_scale;

#[derive(Properties, PartialEq, Clone)]
pub struct ReadoutPanelProps {
    pub readout: Readout,
    pub on_clear: Callback<()>,
    pub on_settings: Callback<()>,
}

#[function_component]
pub fn ReadoutPanel(props: &ReadoutPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let r = &props.readout;
    let history = r
        .history
        .iter()
        .map(|s| format_scale(*s))
        .collect::<Vec<_>>()
        .join(" ");
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px; z-index:10;">
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Scale"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ format_scale(r.scale) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Midpoint"}</span>
                <span style={value_style}>{ format!("{:.0}, {:.0}", r.x, r.y) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Moves"}</span>
                <span style={value_style}>{ r.moves }</span>
            </div>
            <div style="font-size:11px; opacity:0.7; font-variant-numeric:tabular-nums;">{ history }</div>
            <div style="display:flex; gap:6px;">
                <button onclick={clear_cb}>{"Reset"}</button>
                <button onclick={settings_cb}>{"Settings"}</button>
            </div>
        </div>
    }
}
