use wasm_bindgen::prelude::*;

pub const CONTACT_SUBMITTED: &str = "contact-submitted";
pub const INCIDENT_OPENED: &str = "incident-opened";
pub const GET_STARTED: &str = "get-started";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Track a custom event in Umami analytics.
/// Does nothing if the script isn't loaded (e.g. blocked by an adblocker).
pub fn track_event(event: &str) {
    let loaded = js_sys::eval("typeof umami !== 'undefined'")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if loaded {
        umami_track(event);
    }
}
