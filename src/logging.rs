//! Console logging.
//!
//! In the browser messages go to the devtools console. Host builds (unit
//! tests) have no console binding, so they fall back to stderr.

const PREFIX: &str = "Tripmate";

/// Log an informational message.
pub fn log_info(msg: &str) {
    let line = format!("{}: {}", PREFIX, msg);
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", line);
}

/// Log a warning for a non-fatal problem the user might want to know about.
pub fn log_warning(msg: &str) {
    let line = format!("{}: {}", PREFIX, msg);
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", line);
}
