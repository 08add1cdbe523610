//! Blocking browser alerts.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Show a blocking `window.alert`. No-op during SSR.
pub fn show_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert not shown ({message}): {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
