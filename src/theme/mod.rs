//! Theme, key bindings and settings for the recipe browser.
//!
//! Palettes are plain values: the active one travels with `AppState` as a
//! [`ThemeConfig`] and renderers receive it explicitly.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings file loading.
mod settings;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{parse_settings, read_settings, settings, settings_from_path};
pub use types::{
    DEFAULT_BASE_URL, DEFAULT_INITIAL_LIMIT, DEFAULT_LIMIT_STEP, KeyChord, KeyMap, Settings, Theme,
    ThemeConfig, ThemeMode,
};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize filesystem-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Callers should lock the mutex to guard environment-variable or disk state changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
