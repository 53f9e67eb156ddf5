use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds (level 1).
    pub surface1: Color,
    /// Subtle surface color for component backgrounds (level 2).
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Tertiary text for captions and low-emphasis content.
    pub subtext1: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

impl Theme {
    /// Dark palette (Catppuccin Mocha).
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }

    /// Light palette (Catppuccin Latte).
    #[must_use]
    pub const fn light() -> Self {
        Self {
            base: Color::Rgb(0xef, 0xf1, 0xf5),
            mantle: Color::Rgb(0xe6, 0xe9, 0xef),
            crust: Color::Rgb(0xdc, 0xe0, 0xe8),
            surface1: Color::Rgb(0xbc, 0xc0, 0xcc),
            surface2: Color::Rgb(0xac, 0xb0, 0xbe),
            overlay1: Color::Rgb(0x8c, 0x8f, 0xa1),
            overlay2: Color::Rgb(0x7c, 0x7f, 0x93),
            text: Color::Rgb(0x4c, 0x4f, 0x69),
            subtext0: Color::Rgb(0x6c, 0x6f, 0x85),
            subtext1: Color::Rgb(0x5c, 0x5f, 0x77),
            sapphire: Color::Rgb(0x20, 0x9f, 0xb5),
            mauve: Color::Rgb(0x88, 0x39, 0xef),
            green: Color::Rgb(0x40, 0xa0, 0x2b),
            yellow: Color::Rgb(0xdf, 0x8e, 0x1d),
            red: Color::Rgb(0xd2, 0x0f, 0x39),
            lavender: Color::Rgb(0x72, 0x87, 0xfd),
        }
    }
}

/// Light or dark presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Dark palette.
    #[default]
    Dark,
    /// Light palette.
    Light,
}

impl ThemeMode {
    /// Return the string key used in settings files for this mode.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a mode from its settings key (case-insensitive).
    ///
    /// Inputs: `s` config string.
    ///
    /// Output: `Some(ThemeMode)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" | "night" => Some(Self::Dark),
            "light" | "day" => Some(Self::Light),
            _ => None,
        }
    }
}

/// What: Presentation configuration passed down the render tree.
///
/// Inputs:
/// - `mode`: Current light/dark selection.
///
/// Output:
/// - Immutable value; toggling yields a new configuration.
///
/// Details:
/// - Held by `AppState` and handed to every renderer as `&Theme` via
///   [`ThemeConfig::palette`], so no renderer reads a process-wide store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Active mode.
    pub mode: ThemeMode,
}

impl ThemeConfig {
    /// Configuration for the given mode.
    #[must_use]
    pub const fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Return a new configuration with the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self.mode {
            ThemeMode::Dark => Self::new(ThemeMode::Light),
            ThemeMode::Light => Self::new(ThemeMode::Dark),
        }
    }

    /// Whether the dark palette is active.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self.mode, ThemeMode::Dark)
    }

    /// Color palette for the active mode.
    #[must_use]
    pub const fn palette(self) -> Theme {
        match self.mode {
            ThemeMode::Dark => Theme::dark(),
            ThemeMode::Light => Theme::light(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord for a plain character key without modifiers.
    #[must_use]
    pub const fn plain(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            mods: KeyModifiers::empty(),
        }
    }

    /// What: Check whether a pressed key satisfies this chord.
    ///
    /// Inputs:
    /// - `code`, `mods`: The key event's code and modifiers.
    ///
    /// Output:
    /// - `true` when code and modifiers match.
    ///
    /// Details:
    /// - Shift is ignored for character keys and `BackTab`, since terminals
    ///   report `?`, `M` or Shift+Tab with or without the Shift flag.
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        let without_shift = |m: KeyModifiers| m.difference(KeyModifiers::SHIFT);
        match (self.code, code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                a.eq_ignore_ascii_case(&b) && without_shift(self.mods) == without_shift(mods)
            }
            (KeyCode::BackTab, KeyCode::BackTab) => {
                without_shift(self.mods) == without_shift(mods)
            }
            _ => self.code == code && self.mods == mods,
        }
    }

    /// Return a short display label such as "Ctrl+C", "Tab", "M".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        parts.push(key);
        parts.join("+")
    }
}

/// Application key bindings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Exit the application.
    pub quit: Vec<KeyChord>,
    /// Reveal the next page of recipe cards.
    pub see_more: Vec<KeyChord>,
    /// Flip between dark and light palettes.
    pub toggle_theme: Vec<KeyChord>,
    /// Drop the active tag filter.
    pub clear_filter: Vec<KeyChord>,
    /// Re-issue the current recipe request.
    pub reload: Vec<KeyChord>,
    /// Open the help overlay.
    pub help: Vec<KeyChord>,
    /// Move focus between the tag bar and the grid.
    pub switch_pane: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: vec![
                KeyChord::plain('q'),
                KeyChord {
                    code: KeyCode::Char('c'),
                    mods: KeyModifiers::CONTROL,
                },
            ],
            see_more: vec![KeyChord::plain('m')],
            toggle_theme: vec![KeyChord::plain('d')],
            clear_filter: vec![KeyChord::plain('c')],
            reload: vec![KeyChord::plain('r')],
            help: vec![KeyChord::plain('?')],
            switch_pane: vec![
                KeyChord {
                    code: KeyCode::Tab,
                    mods: KeyModifiers::empty(),
                },
                KeyChord {
                    code: KeyCode::BackTab,
                    mods: KeyModifiers::empty(),
                },
            ],
        }
    }
}

impl KeyMap {
    /// Whether any chord in `list` matches the pressed key.
    #[must_use]
    pub fn any(list: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
        list.iter().any(|c| c.matches(code, mods))
    }

    /// Label of the first chord in `list`, or an empty string when unbound.
    #[must_use]
    pub fn first_label(list: &[KeyChord]) -> String {
        list.first().map(KeyChord::label).unwrap_or_default()
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Base URL of the recipes API, without trailing slash.
    pub base_url: String,
    /// Number of cards shown before "see more" and after every filter change.
    pub initial_limit: usize,
    /// Number of cards revealed by each "see more".
    pub limit_step: usize,
    /// Palette used at startup.
    pub start_mode: ThemeMode,
    /// Whole-request timeout for API calls, in seconds.
    pub request_timeout_secs: u64,
    /// Whether to capture mouse input for clicking cards and tags.
    pub mouse_enabled: bool,
    /// Configurable key bindings.
    pub keymap: KeyMap,
}

/// Default recipes API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
/// Default page size.
pub const DEFAULT_INITIAL_LIMIT: usize = 8;
/// Default "see more" increment.
pub const DEFAULT_LIMIT_STEP: usize = 4;

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            initial_limit: DEFAULT_INITIAL_LIMIT,
            limit_step: DEFAULT_LIMIT_STEP,
            start_mode: ThemeMode::Dark,
            request_timeout_secs: 20,
            mouse_enabled: true,
            keymap: KeyMap::default(),
        }
    }
}
