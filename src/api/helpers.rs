//! Shared helpers for WASM API operations
//!
//! Console logging, JS (de)serialization and error conversion used by every
//! API function.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::errors::SongError;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// Off-wasm there is no console; route through the log facade instead
#[cfg(not(target_arch = "wasm32"))]
fn log(s: &str) {
    log::debug!("{}", s);
}

#[cfg(not(target_arch = "wasm32"))]
fn info(s: &str) {
    log::info!("{}", s);
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(s: &str) {
    log::warn!("{}", s);
}

#[cfg(not(target_arch = "wasm32"))]
fn error(s: &str) {
    log::error!("{}", s);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript
///
/// `undefined` and `null` deserialize to `T::default()`.
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        to_js_error(SongError::InvalidOptions(format!("{}: {}", error_context, e)))
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        to_js_error(SongError::Serialization(format!("{}: {}", error_context, e)))
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an error and convert it to a JsValue
pub fn to_js_error(err: SongError) -> JsValue {
    let msg = err.to_string();
    log_error(&msg);
    JsValue::from_str(&msg)
}
