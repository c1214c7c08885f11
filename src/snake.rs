use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    ///
    /// Stepping off one edge of the field re-enters from the opposite edge.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Snake body segments plus the current heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Sets the heading used on the next movement tick.
    ///
    /// The last direction set before a tick fires is the one used. Reversals
    /// are not filtered: steering straight back into the neck is a legal,
    /// fatal move.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns the head position for the next movement tick, wrapped.
    #[must_use]
    pub fn next_head(&self, bounds: GridSize) -> Position {
        let head = self.head();
        let (dx, dy) = self.direction.delta();

        Position {
            x: head.x + dx,
            y: head.y + dy,
        }
        .wrapped(bounds)
    }

    /// Pushes `head` onto the body; keeps the tail when `grow` is set.
    pub fn advance(&mut self, head: Position, grow: bool) {
        self.body.push_front(head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 16,
        height: 16,
    };

    #[test]
    fn wrapping_keeps_coordinates_inside_bounds() {
        let left_edge = Position { x: -1, y: 3 }.wrapped(BOUNDS);
        let bottom_edge = Position { x: 4, y: 16 }.wrapped(BOUNDS);

        assert_eq!(left_edge, Position { x: 15, y: 3 });
        assert_eq!(bottom_edge, Position { x: 4, y: 0 });
    }

    #[test]
    fn next_head_wraps_on_every_edge() {
        let cases = [
            (Position { x: 15, y: 5 }, Direction::Right, Position { x: 0, y: 5 }),
            (Position { x: 0, y: 5 }, Direction::Left, Position { x: 15, y: 5 }),
            (Position { x: 5, y: 0 }, Direction::Up, Position { x: 5, y: 15 }),
            (Position { x: 5, y: 15 }, Direction::Down, Position { x: 5, y: 0 }),
        ];

        for (start, direction, expected) in cases {
            let snake = Snake::from_segments(vec![start], direction);
            assert_eq!(snake.next_head(BOUNDS), expected);
        }
    }

    #[test]
    fn advance_without_growth_drops_the_tail() {
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 5, y: 5 },
                Position { x: 6, y: 5 },
                Position { x: 7, y: 5 },
            ],
            Direction::Left,
        );

        let next = snake.next_head(BOUNDS);
        snake.advance(next, false);

        let body: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(
            body,
            vec![
                Position { x: 4, y: 5 },
                Position { x: 5, y: 5 },
                Position { x: 6, y: 5 },
            ]
        );
    }

    #[test]
    fn advance_with_growth_keeps_the_tail() {
        let mut snake = Snake::from_segments(
            vec![Position { x: 5, y: 5 }, Position { x: 6, y: 5 }],
            Direction::Left,
        );

        let next = snake.next_head(BOUNDS);
        snake.advance(next, true);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position { x: 4, y: 5 });
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let snake = Snake::from_segments(
            vec![Position { x: 2, y: 2 }, Position { x: 3, y: 2 }],
            Direction::Left,
        );
        assert!(!snake.head_overlaps_body());

        let folded = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 2, y: 2 },
            ],
            Direction::Left,
        );
        assert!(folded.head_overlaps_body());
    }
}
