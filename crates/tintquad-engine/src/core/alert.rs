/// Shows a blocking, user-facing error alert.
///
/// Native builds use a system message dialog; the browser uses `window.alert`.
#[cfg(not(target_arch = "wasm32"))]
pub fn alert(title: &str, message: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

#[cfg(target_arch = "wasm32")]
pub fn alert(title: &str, message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window to alert on: {title}");
        return;
    };
    if window.alert_with_message(&format!("{title}\n\n{message}")).is_err() {
        log::warn!("alert was blocked: {title}");
    }
}
