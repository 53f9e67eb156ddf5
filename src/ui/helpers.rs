//! Small layout and styling helpers shared by the panes.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
};

use crate::theme::Theme;

/// What: Compute a rectangle centered in `area`.
///
/// Inputs:
/// - `pct_x`, `pct_y`: Size as a percentage of `area`.
/// - `area`: Enclosing rectangle.
///
/// Output:
/// - Centered rectangle no larger than `area`.
pub fn centered_rect(pct_x: u16, pct_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(pct_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(pct_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Rectangle of width `w` (clamped) centered horizontally on row `y` of `area`.
pub fn centered_line(area: Rect, y: u16, w: u16) -> Rect {
    let w = w.min(area.width);
    Rect::new(area.x + (area.width - w) / 2, y, w, 1)
}

/// Saturating `usize` to `u16` conversion for layout arithmetic.
pub fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Accent style for key labels in hints and buttons.
pub fn key_style(th: &Theme) -> Style {
    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD)
}

/// What: Build `[key] label` spans for the hint bar.
///
/// Inputs:
/// - `key`: Key label such as `m` or `Ctrl+C`.
/// - `label`: Action description.
/// - `th`: Active palette.
///
/// Output:
/// - Spans ending with two spaces of padding.
pub fn hint(key: String, label: &str, th: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("[{key}]"), key_style(th)),
        Span::styled(format!(" {label}  "), Style::default().fg(th.subtext1)),
    ]
}

/// Style for a card or list border, highlighted when focused.
pub fn border_style(focused: bool, th: &Theme) -> Style {
    if focused {
        Style::default().fg(th.sapphire)
    } else {
        Style::default().fg(th.overlay1)
    }
}

/// Color for a difficulty label: known levels get a semantic color.
pub fn difficulty_style(label: &str, th: &Theme) -> Style {
    let fg = match label.to_ascii_lowercase().as_str() {
        "easy" => th.green,
        "medium" => th.yellow,
        "hard" => th.red,
        _ => th.text,
    };
    Style::default().fg(fg)
}
