use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-line HUD and returns the play area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let line = Line::from(vec![
        Span::styled(
            "Snake",
            Style::new()
                .fg(theme.hud_title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  length {}", state.snake.len()),
            Style::new().fg(theme.hud_text),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}
