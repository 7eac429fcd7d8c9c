// Demo helpers: config persistence and number formatting
use touch_pinch::{ConfigError, PinchConfig};

const CONFIG_KEY: &str = "pinch_config";

pub fn format_scale(scale: f64) -> String {
    if scale.is_finite() {
        format!("{:.2}x", scale)
    } else {
        "--".to_string()
    }
}

pub fn load_config() -> PinchConfig {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(CONFIG_KEY) {
                match PinchConfig::from_json(&raw) {
                    Ok(cfg) => return cfg,
                    Err(err) => log::warn!("ignoring stored config: {err}"),
                }
            }
        }
    }
    PinchConfig::default()
}

pub fn save_config(config: &PinchConfig) -> Result<(), ConfigError> {
    let raw = config.to_json()?;
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            let _ = store.set_item(CONFIG_KEY, &raw);
        }
    }
    Ok(())
}
