use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GridSize;
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
///
/// `GameOver` and `Victory` are terminal: no transition leaves them.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
    Victory,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub tick_count: u64,
    pub status: GameStatus,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh state with entropy-seeded food placement.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = initial_snake(bounds);
        let food = Food::place(&mut rng, bounds, &snake)
            .expect("a fresh board must have free cells for food");

        Self {
            snake,
            food,
            tick_count: 0,
            status: GameStatus::Playing,
            bounds,
            rng,
        }
    }

    /// Returns the grid bounds.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// Once the status leaves `Playing` this is a no-op; the final state is
    /// preserved unchanged for the end screen.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.tick_count += 1;

        let next_head = self.snake.next_head(self.bounds);
        let ate = next_head == self.food.position;
        self.snake.advance(next_head, ate);

        // Collision rule: the new head against the new segment list,
        // immediately after the move.
        if self.snake.head_overlaps_body() {
            self.status = GameStatus::GameOver;
            return;
        }

        if ate {
            match Food::place(&mut self.rng, self.bounds, &self.snake) {
                Ok(food) => self.food = food,
                Err(_) => self.status = GameStatus::Victory,
            }
        }
    }

    /// Applies one external input event.
    ///
    /// The last direction applied before a tick fires is the one used;
    /// reversals are not filtered out.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.set_direction(direction);
                }
            }
            GameInput::Quit => {}
        }
    }
}

/// Builds the fixed starting snake: a three-segment column at field center,
/// head on top, heading left.
fn initial_snake(bounds: GridSize) -> Snake {
    let x = i32::from(bounds.width) / 2;
    let y = i32::from(bounds.height) / 2;

    Snake::from_segments(
        vec![
            Position { x, y: y - 2 },
            Position { x, y: y - 1 },
            Position { x, y },
        ],
        Direction::Left,
    )
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::food::Food;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{GameState, GameStatus};

    const BOUNDS: GridSize = GridSize {
        width: 16,
        height: 16,
    };

    fn position(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    #[test]
    fn initial_layout_matches_the_classic_start() {
        let state = GameState::new_with_seed(BOUNDS, 1);

        let body: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(
            body,
            vec![position(8, 6), position(8, 7), position(8, 8)]
        );
        assert_eq!(state.snake.direction(), Direction::Left);
        assert!(!state.snake.occupies(state.food.position));
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn snake_length_grows_by_one_exactly_on_the_food_tick() {
        let mut state = GameState::new_with_seed(BOUNDS, 2);
        state.food = Food::at(position(7, 6));

        state.tick();
        assert_eq!(state.snake.len(), 4);

        // Pin the respawned food far away; the follow-up tick must not grow.
        state.food = Food::at(position(0, 0));
        state.tick();
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn food_respawns_off_the_grown_snake() {
        let mut state = GameState::new_with_seed(BOUNDS, 3);
        state.food = Food::at(position(7, 6));

        state.tick();

        assert!(!state.snake.occupies(state.food.position));
        assert!(state.food.position.is_within_bounds(BOUNDS));
    }

    #[test]
    fn dead_state_ignores_ticks_and_direction_input() {
        let mut state = GameState::new_with_seed(BOUNDS, 4);
        state.snake = Snake::from_segments(
            vec![
                position(2, 2),
                position(3, 2),
                position(3, 3),
                position(2, 3),
                position(1, 3),
            ],
            Direction::Down,
        );
        state.food = Food::at(position(0, 0));

        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);

        let frozen: Vec<Position> = state.snake.segments().copied().collect();
        let frozen_ticks = state.tick_count;

        state.apply_input(GameInput::Direction(Direction::Up));
        state.tick();

        let after: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(after, frozen);
        assert_eq!(state.tick_count, frozen_ticks);
        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn segments_stay_in_bounds_across_many_wrapping_ticks() {
        let mut state = GameState::new_with_seed(BOUNDS, 5);
        state.food = Food::at(position(0, 0));

        for _ in 0..64 {
            state.tick();
            for segment in state.snake.segments() {
                assert!(segment.is_within_bounds(BOUNDS));
            }
        }
    }

    #[test]
    fn filling_the_board_ends_in_victory() {
        let tiny = GridSize {
            width: 2,
            height: 2,
        };
        let mut state = GameState::new_with_seed(tiny, 6);

        // Three segments folded into the 2x2 board, one cell free.
        state.snake = Snake::from_segments(
            vec![position(0, 0), position(0, 1), position(1, 1)],
            Direction::Right,
        );
        state.food = Food::at(position(1, 0));

        state.tick();

        assert_eq!(state.status, GameStatus::Victory);
        assert_eq!(state.snake.len(), 4);
    }
}
