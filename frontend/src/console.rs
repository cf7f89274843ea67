//! Browser console logging.
//!
//! Wraps `gloo_console` so page logic stays callable from native unit tests,
//! where JS imports are unavailable and logging is dropped.

#[cfg(target_arch = "wasm32")]
pub fn debug(message: &str) {
    gloo_console::debug!(message);
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    gloo_console::warn!(message);
}

#[cfg(target_arch = "wasm32")]
pub fn error(message: &str) {
    gloo_console::error!(message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn debug(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_message: &str) {}
