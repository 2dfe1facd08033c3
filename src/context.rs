//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reload generation; bumping it re-fetches the list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Reload generation - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: AppConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a re-fetch of the whole list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v = v.wrapping_add(1));
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Whether a fetch started at `generation` is still the newest one
    pub fn is_current(&self, generation: u32) -> bool {
        is_latest(generation, self.reload_trigger.get_untracked())
    }
}

/// Get the app context, panicking if the App root did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

fn is_latest(started: u32, current: u32) -> bool {
    started == current
}
