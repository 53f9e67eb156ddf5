use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::state::AppState;
use crate::theme::{KeyMap, Theme};

/// What: Render the title bar with the active filter and the palette indicator.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state (filter, theme mode, key map).
/// - `th`: Active palette.
/// - `area`: Header area.
pub fn render_header(f: &mut Frame, app: &AppState, th: &Theme, area: Rect) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .style(Style::default().bg(th.mantle));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(22)]).areas(inner);

    let filter = app.selected_tag.as_deref().map_or_else(
        || Span::styled("All recipes", Style::default().fg(th.subtext0)),
        |t| {
            Span::styled(
                format!("Tag: {t}"),
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            )
        },
    );
    let title = Line::from(vec![
        Span::styled(
            "Recipes",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  |  ", Style::default().fg(th.overlay2)),
        filter,
    ]);
    f.render_widget(Paragraph::new(title), left);

    let (icon, name) = if app.theme.is_dark() {
        ("☾", "Dark")
    } else {
        ("☀", "Light")
    };
    let mode = Line::from(vec![
        Span::styled(format!("{icon} {name} "), Style::default().fg(th.yellow)),
        Span::styled(
            format!("[{}]", KeyMap::first_label(&app.keymap.toggle_theme)),
            Style::default().fg(th.subtext1),
        ),
    ])
    .alignment(Alignment::Right);
    f.render_widget(Paragraph::new(mode), right);
}
