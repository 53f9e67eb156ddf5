use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

use crate::state::AppState;
use crate::theme::{KeyChord, KeyMap, Theme};

use super::helpers::{centered_rect, key_style};

fn labels(list: &[KeyChord]) -> String {
    list.iter().map(KeyChord::label).collect::<Vec<_>>().join(" / ")
}

/// What: List every key binding as `(keys, description)` rows.
///
/// Inputs:
/// - `km`: Active key map.
///
/// Output:
/// - Configurable bindings first, then the fixed navigation keys.
pub fn help_rows(km: &KeyMap) -> Vec<(String, &'static str)> {
    vec![
        (labels(&km.quit), "Quit"),
        (labels(&km.help), "Show this help"),
        (labels(&km.switch_pane), "Switch between tags and grid"),
        (labels(&km.see_more), "See more recipes"),
        (labels(&km.clear_filter), "Clear tag filter"),
        (labels(&km.toggle_theme), "Toggle dark/light"),
        (labels(&km.reload), "Reload"),
        ("←↑→↓ / hjkl".to_string(), "Move between cards or tags"),
        ("Enter".to_string(), "Open recipe / apply tag"),
        ("Esc".to_string(), "Close overlay / clear filter"),
        ("Home / End".to_string(), "First / last item"),
    ]
}

/// Render the key binding reference overlay.
pub fn render_help(f: &mut Frame, app: &AppState, th: &Theme, area: Rect) {
    let rect = centered_rect(60, 70, area);
    f.render_widget(Clear, rect);
    let rows = help_rows(&app.keymap);
    let key_w = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("  {keys:<key_w$}  "), key_style(th)),
                Span::styled(what, Style::default().fg(th.text)),
            ])
        })
        .collect();
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.lavender))
        .title(Span::styled(
            " Help ",
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(th.mantle));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}
