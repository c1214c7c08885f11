use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Playing field dimensions. The field is a fixed 16x16 torus.
pub const GRID_SIZE: GridSize = GridSize {
    width: 16,
    height: 16,
};

/// Tick interval in milliseconds. One tick is one game-state update.
pub const TICK_INTERVAL_MS: u64 = 200;

/// Input poll window per frame in milliseconds. Affects key latency only,
/// not game speed.
pub const FRAME_POLL_MS: u64 = 16;

/// Solid block used for snake segments.
pub const GLYPH_SOLID: &str = "█";

/// Food marker.
pub const GLYPH_FOOD: &str = "●";

/// Empty-cell marker dotting the play field.
pub const GLYPH_EMPTY: &str = "·";

/// A color theme applied to all visual elements.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    /// Head segment color.
    pub snake_head: Color,
    /// Body segment color.
    pub snake_body: Color,
    /// Food marker color.
    pub food: Color,
    /// Empty-cell dot color.
    pub field_dot: Color,
    pub border: Color,
    pub hud_title: Color,
    pub hud_text: Color,
    pub end_text: Color,
}
