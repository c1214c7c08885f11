use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameStatus;

/// Draws the full-field end panel shown once the game is over.
///
/// The panel replaces the play field entirely; only quitting remains
/// meaningful from here.
pub fn render_end_screen(frame: &mut Frame<'_>, area: Rect, status: GameStatus, theme: &Theme) {
    let headline = match status {
        GameStatus::Victory => "You filled the whole field",
        _ => "Your snake died",
    };
    let footer = "press q to quit";

    frame.render_widget(Clear, area);

    let panel_width = headline.width().max(footer.width()) as u16;
    let panel = centered_box(area, panel_width, 3);

    let [headline_row, _, footer_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(panel);

    frame.render_widget(
        Paragraph::new(Line::from(headline))
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(theme.end_text)
                    .add_modifier(Modifier::BOLD),
            ),
        headline_row,
    );
    frame.render_widget(
        Paragraph::new(Line::from(footer))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.hud_text)),
        footer_row,
    );
}

fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
