pub mod app;
pub mod pinch_stage;
pub mod readout_panel;
pub mod settings_modal;
