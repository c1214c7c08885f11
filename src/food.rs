use rand::Rng;
use thiserror::Error;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random samples attempted before falling back to a free-cell scan.
const MAX_RANDOM_SAMPLES: u32 = 128;

/// Returned when food placement is requested on a board with no free cell.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("no free cell left on the {width}x{height} board")]
pub struct BoardFullError {
    pub width: u16,
    pub height: u16,
}

/// Food item currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food pinned to `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Places food on a uniformly random cell not occupied by the snake.
    ///
    /// Sampling is bounded: after `MAX_RANDOM_SAMPLES` collisions with the
    /// snake the remaining free cells are enumerated and one is drawn from
    /// them directly, so placement terminates even on a nearly full board.
    /// The result never overlaps a snake segment.
    pub fn place<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
    ) -> Result<Self, BoardFullError> {
        for _ in 0..MAX_RANDOM_SAMPLES {
            let position = Position {
                x: i32::from(rng.gen_range(0..bounds.width)),
                y: i32::from(rng.gen_range(0..bounds.height)),
            };

            if !snake.occupies(position) {
                return Ok(Self::at(position));
            }
        }

        let mut free = Vec::new();
        for y in 0..i32::from(bounds.height) {
            for x in 0..i32::from(bounds.width) {
                let position = Position { x, y };
                if !snake.occupies(position) {
                    free.push(position);
                }
            }
        }

        if free.is_empty() {
            return Err(BoardFullError {
                width: bounds.width,
                height: bounds.height,
            });
        }

        Ok(Self::at(free[rng.gen_range(0..free.len())]))
    }
}
