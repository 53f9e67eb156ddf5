use std::fs;
use std::path::Path;

use super::parsing::{parse_bool, parse_key_chord, strip_inline_comment};
use super::paths::{config_dir, resolve_settings_config_path};
use super::types::{KeyChord, Settings, ThemeMode};

/// Skeleton written to `settings.conf` on first run.
pub(crate) const SKELETON_SETTINGS_CONTENT: &str = "\
# recipe-browser settings
# Format: key = value, one per line. Lines starting with '#' are comments.

# Recipes API base URL (no trailing slash)
base_url = https://dummyjson.com

# Cards shown initially and after every tag change
initial_limit = 8
# Cards revealed by each \"see more\"
limit_step = 4

# Startup palette: dark | light
start_mode = dark

# Whole-request timeout for API calls, in seconds
request_timeout_secs = 20

# Capture mouse clicks on cards and tags
mouse = true

# Key bindings: uncomment to replace the built-in chords for an action.
# keybind_quit = q
# keybind_see_more = m
# keybind_toggle_theme = d
# keybind_clear_filter = c
# keybind_reload = r
# keybind_help = ?
# keybind_switch_pane = Tab
";

/// What: Apply one parsed chord to a key map slot when parsing succeeded.
///
/// Inputs:
/// - `slot`: Key map list to overwrite.
/// - `val`: Raw chord text.
///
/// Details:
/// - A single chord replaces the whole default list for that action.
fn set_chord(slot: &mut Vec<KeyChord>, val: &str) {
    if let Some(ch) = parse_key_chord(val) {
        *slot = vec![ch];
    } else {
        tracing::warn!(value = %val, "ignoring unparseable key binding");
    }
}

/// What: Parse settings text into [`Settings`], starting from defaults.
///
/// Inputs:
/// - `content`: Full text of a `settings.conf` file.
///
/// Output:
/// - Settings with every recognized, valid key applied.
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces normalize to `_`.
/// - Invalid values (zero limits, unknown modes) leave the default in place.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "base_url" | "api_url" => {
                let v = val.trim_end_matches('/');
                if !v.is_empty() {
                    out.base_url = v.to_string();
                }
            }
            "initial_limit" | "page_size" => {
                if let Ok(v) = val.parse::<usize>()
                    && v > 0
                {
                    out.initial_limit = v;
                }
            }
            "limit_step" | "page_step" | "see_more_step" => {
                if let Ok(v) = val.parse::<usize>()
                    && v > 0
                {
                    out.limit_step = v;
                }
            }
            "start_mode" | "theme" | "theme_mode" => {
                if let Some(m) = ThemeMode::from_config_key(val) {
                    out.start_mode = m;
                }
            }
            "request_timeout_secs" | "timeout_secs" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    out.request_timeout_secs = v;
                }
            }
            "mouse" | "mouse_enabled" => out.mouse_enabled = parse_bool(val),
            "keybind_quit" | "keybind_exit" => set_chord(&mut out.keymap.quit, val),
            "keybind_see_more" | "keybind_more" => set_chord(&mut out.keymap.see_more, val),
            "keybind_toggle_theme" | "keybind_theme" => {
                set_chord(&mut out.keymap.toggle_theme, val);
            }
            "keybind_clear_filter" => set_chord(&mut out.keymap.clear_filter, val),
            "keybind_reload" => set_chord(&mut out.keymap.reload, val),
            "keybind_help" => set_chord(&mut out.keymap.help, val),
            "keybind_switch_pane" | "keybind_pane_next" => {
                set_chord(&mut out.keymap.switch_pane, val);
            }
            _ => {
                tracing::debug!(key = %key, "unknown settings key");
            }
        }
    }
    out
}

/// Read and parse `path`, surfacing I/O failures to the caller.
///
/// # Errors
/// - Returns the I/O error when the file cannot be read.
pub fn read_settings(path: &Path) -> std::io::Result<Settings> {
    fs::read_to_string(path).map(|content| parse_settings(&content))
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file location.
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
///
/// Details:
/// - Logs "loaded settings" only after the file was read.
#[must_use]
pub fn settings_from_path(path: &Path) -> Settings {
    match read_settings(path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "loaded settings");
            settings
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// What: Load user settings, writing a skeleton file on first run.
///
/// Output:
/// - Settings from `settings.conf`, or defaults when missing or unreadable.
///
/// Details:
/// - When no settings file exists, writes [`SKELETON_SETTINGS_CONTENT`] into
///   the config directory so users have something to edit.
#[must_use]
pub fn settings() -> Settings {
    if let Some(path) = resolve_settings_config_path() {
        return settings_from_path(&path);
    }
    let target = config_dir().join("settings.conf");
    match fs::write(&target, SKELETON_SETTINGS_CONTENT) {
        Ok(()) => tracing::info!(path = %target.display(), "wrote default settings skeleton"),
        Err(e) => {
            tracing::warn!(path = %target.display(), error = %e, "could not write settings skeleton");
        }
    }
    Settings::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    /// What: The skeleton file parses back to the built-in defaults
    ///
    /// Inputs:
    /// - `SKELETON_SETTINGS_CONTENT`
    ///
    /// Output:
    /// - Equal to `Settings::default()`, so first run and no-file behave alike
    fn skeleton_matches_defaults() {
        let parsed = parse_settings(SKELETON_SETTINGS_CONTENT);
        let defaults = Settings::default();
        assert_eq!(parsed.base_url, defaults.base_url);
        assert_eq!(parsed.initial_limit, defaults.initial_limit);
        assert_eq!(parsed.limit_step, defaults.limit_step);
        assert_eq!(parsed.start_mode, defaults.start_mode);
        assert_eq!(parsed.request_timeout_secs, defaults.request_timeout_secs);
        assert_eq!(parsed.mouse_enabled, defaults.mouse_enabled);
        assert_eq!(parsed.keymap, defaults.keymap);
    }

    #[test]
    /// What: Overrides, aliases, and invalid values
    ///
    /// Inputs:
    /// - A settings text with custom values, a zero limit, and an alias key
    ///
    /// Output:
    /// - Valid values applied; zero limit ignored; trailing slash trimmed
    fn parse_overrides_and_rejects_invalid() {
        let text = "\
Base-URL = http://localhost:8080/   # local mock
initial_limit = 0
page_step = 6
theme = light
keybind_see_more = Ctrl+N
mouse = off
garbage line without equals
";
        let s = parse_settings(text);
        assert_eq!(s.base_url, "http://localhost:8080");
        assert_eq!(s.initial_limit, 8);
        assert_eq!(s.limit_step, 6);
        assert_eq!(s.start_mode, ThemeMode::Light);
        assert!(!s.mouse_enabled);
        assert_eq!(
            s.keymap.see_more,
            vec![KeyChord {
                code: KeyCode::Char('n'),
                mods: KeyModifiers::CONTROL,
            }]
        );
    }

    #[test]
    fn settings_from_path_reads_file_or_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "initial_limit = 12\n").expect("write settings");
        assert_eq!(settings_from_path(&path).initial_limit, 12);
        let missing = dir.path().join("missing.conf");
        assert_eq!(settings_from_path(&missing), Settings::default());
    }

    #[test]
    /// What: Reading reports success only for a file that was actually read
    ///
    /// Inputs:
    /// - A written settings file, and a path that does not exist
    ///
    /// Output:
    /// - `Ok` with the parsed step for the file; `Err(NotFound)` for the missing path
    fn read_settings_separates_success_from_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        fs::write(&path, "limit_step = 6\n").expect("write");
        assert_eq!(read_settings(&path).expect("readable").limit_step, 6);
        let err = read_settings(&dir.path().join("absent.conf")).expect_err("missing file");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
