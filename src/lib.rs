//! Library entry for the recipe browser exposing the runtime, view model and
//! rendering for the binary and the integration tests.

/// Terminal lifecycle and the async runtime.
pub mod app;
/// Command-line arguments.
pub mod args;
/// Keyboard and mouse dispatch.
pub mod events;
/// Browsing operations over `AppState`.
pub mod logic;
/// Remote recipe API access.
pub mod sources;
/// View model and value types.
pub mod state;
/// Palettes, key bindings and settings.
pub mod theme;
/// Frame rendering.
pub mod ui;
/// Formatting and encoding helpers.
pub mod util;

#[cfg(test)]
mod test_utils;
