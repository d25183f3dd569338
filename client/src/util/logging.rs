//! Browser console logging.
//!
//! The `log` macros used across the crate are no-ops until a logger is
//! installed. In the hydrate build this routes them to `console.*` and
//! reports panics through `console.error`.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Default level for the browser console.
pub const DEFAULT_LEVEL: log::Level = log::Level::Info;

/// Install the console logger and panic hook. Safe to call more than once;
/// later calls leave the first logger in place.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(DEFAULT_LEVEL);
    }
}
