//! Command-line argument definition and processing.

use clap::Parser;

use crate::theme::{Settings, ThemeMode};

/// recipe-browser - Browse, filter and read recipes from a REST API in your terminal
#[derive(Parser, Debug)]
#[command(name = "recipe-browser")]
#[command(version)]
#[command(about = "Browse, filter and read recipes from a REST API in your terminal", long_about = None)]
pub struct Args {
    /// Base URL of the recipes API (default: https://dummyjson.com)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Start with the light palette
    #[arg(long)]
    pub light: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of recipe cards shown before "see more"
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Number of cards revealed by each "see more"
    #[arg(long, value_name = "N")]
    pub page_step: Option<usize>,
}

impl Args {
    /// What: Overlay command-line values on settings loaded from disk.
    ///
    /// Inputs:
    /// - `settings`: Settings from `settings.conf`, modified in place.
    ///
    /// Details:
    /// - Only flags that were given override the file; zero page sizes are ignored.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(url) = self.base_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            settings.base_url = url.trim_end_matches('/').to_string();
        }
        if self.light {
            settings.start_mode = ThemeMode::Light;
        }
        if let Some(n) = self.page_size.filter(|n| *n > 0) {
            settings.initial_limit = n;
        }
        if let Some(n) = self.page_step.filter(|n| *n > 0) {
            settings.limit_step = n;
        }
    }

    /// Log filter directive implied by `--verbose` and `--log-level`.
    #[must_use]
    pub fn log_directive(&self) -> &str {
        if self.verbose { "debug" } else { &self.log_level }
    }
}
