//! Browser Dialogs
//!
//! Blocking `alert` / `confirm` wrappers and the shared failure path.

use crate::api::ApiError;

pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert() failed: {}", message);
            }
        }
        None => log::warn!("No window for alert: {}", message),
    }
}

/// Ask the user to confirm; anything but an explicit OK counts as cancel
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Log a failed mutation and tell the user about it
pub fn report_failure(action: &str, error: &ApiError) {
    log::error!("Error {} todo: {}", progressive(action), error);
    alert(&failure_message(action, error));
}

pub fn failure_message(action: &str, error: &ApiError) -> String {
    format!("Failed to {} TODO: {}", action, error.user_message())
}

fn progressive(action: &str) -> String {
    match action.strip_suffix('e') {
        Some(stem) => format!("{}ing", stem),
        None => format!("{}ing", action),
    }
}
