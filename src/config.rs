//! App Configuration
//!
//! Compile-time gesture thresholds and storage keys.

/// localStorage key holding the JSON-encoded list collection
pub const LISTS_STORAGE_KEY: &str = "shopping-lists";

/// localStorage key holding the "show onboarding instructions" flag
pub const INSTRUCTIONS_STORAGE_KEY: &str = "show-instructions";

/// Timing thresholds used to tell gestures apart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Max milliseconds between two taps that still count as a double tap
    pub double_tap_ms: f64,
    /// Milliseconds a press must be held to count as a long press
    pub long_press_ms: u32,
}

impl GestureConfig {
    pub const DEFAULT: Self = Self {
        double_tap_ms: 300.0,
        long_press_ms: 500,
    };
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Log level for the browser console logger
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
