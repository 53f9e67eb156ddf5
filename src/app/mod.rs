//! Recipe browser application: terminal lifecycle and the async runtime that
//! ties fetch workers, input events and rendering together.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
pub use runtime::{handle_recipes_result, handle_tags_result};
