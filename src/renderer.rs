use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GridSize, Theme, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_SOLID};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::end_screen::render_end_screen;
use crate::ui::hud::render_hud;

/// Renders the full game frame from immutable state.
///
/// While the game is running the play field shows exactly one marker per
/// cell: food, snake segment, or the empty dot. Once the game is over the
/// field is replaced by the full-field end panel.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);

    let block = Block::bordered().border_style(Style::new().fg(theme.border));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    if state.status == GameStatus::Playing {
        render_field(frame, inner, state, theme);
    } else {
        render_end_screen(frame, inner, state.status, theme);
    }
}

fn render_field(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let bounds = state.bounds();
    let buffer = frame.buffer_mut();

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let Some((tx, ty)) = cell_to_terminal(inner, bounds, Position { x, y }) else {
                continue;
            };
            buffer.set_string(tx, ty, GLYPH_EMPTY, Style::new().fg(theme.field_dot));
        }
    }

    if let Some((tx, ty)) = cell_to_terminal(inner, bounds, state.food.position) {
        buffer.set_string(tx, ty, GLYPH_FOOD, Style::new().fg(theme.food));
    }

    let head = state.snake.head();
    for segment in state.snake.segments() {
        let Some((tx, ty)) = cell_to_terminal(inner, bounds, *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(tx, ty, GLYPH_SOLID, style);
    }
}

/// Maps a logical cell onto a terminal coordinate inside `inner`.
///
/// Cells are spread two columns apart so the square logical field does not
/// collapse into a tall strip of narrow terminal characters. Returns `None`
/// when the cell falls outside the visible area.
fn cell_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(2)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
