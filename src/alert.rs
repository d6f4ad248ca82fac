//! Blocking user-facing alerts

/// Show `message` in a blocking dialog and log it
pub fn alert(message: &str) {
    web_sys::console::error_1(&message.into());
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
