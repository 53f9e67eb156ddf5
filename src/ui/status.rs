//! Full-area loading and error screens.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::{KeyMap, Theme};

/// Message shown whenever the latest recipe request failed.
pub const ERROR_MESSAGE: &str = "Error loading recipes";

/// Vertically center `lines` inside `area`.
fn centered_paragraph<'a>(lines: Vec<Line<'a>>, area: Rect) -> (Paragraph<'a>, Rect) {
    let h = u16::try_from(lines.len()).unwrap_or(u16::MAX).min(area.height);
    let top = area.y + (area.height - h) / 2;
    (
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        Rect::new(area.x, top, area.width, h),
    )
}

/// Render the loading indicator shown before the first recipes arrive.
pub fn render_loading(f: &mut Frame, th: &Theme, area: Rect) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1));
    let inner = block.inner(area);
    f.render_widget(block, area);
    let (p, rect) = centered_paragraph(
        vec![Line::from(Span::styled(
            "Loading recipes…",
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ))],
        inner,
    );
    f.render_widget(p, rect);
}

/// What: Render the generic error screen.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state (key map for the recovery hint).
/// - `th`: Active palette.
/// - `area`: Area normally occupied by the grid.
///
/// Details:
/// - The failure detail never reaches the screen; it is in the log file.
pub fn render_error(f: &mut Frame, app: &AppState, th: &Theme, area: Rect) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.red));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            ERROR_MESSAGE,
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(th.subtext0)),
            Span::styled(
                KeyMap::first_label(&app.keymap.reload),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " to try again, or pick another tag.",
                Style::default().fg(th.subtext0),
            ),
        ]),
    ];
    if app.loading {
        lines.push(Line::from(Span::styled(
            "Retrying…",
            Style::default().fg(th.yellow),
        )));
    }
    let (p, rect) = centered_paragraph(lines, inner);
    f.render_widget(p, rect);
}
