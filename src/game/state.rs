use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A tile on the game grid. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one tile in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    pub fn manhattan_distance(&self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The fenced grid the snake lives in.
///
/// The outermost ring of tiles is the fence; only the interior
/// `[1, width - 2] x [1, height - 2]` is playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cage {
    width: i32,
    height: i32,
}

impl Cage {
    /// Dimensions are validated by `WorldConfig::validate`
    pub(crate) fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if a position is strictly inside the fence
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.x >= 1 && pos.x <= self.width - 2 && pos.y >= 1 && pos.y <= self.height - 2
    }

    /// Number of playable tiles
    pub fn interior_area(&self) -> usize {
        let w = (self.width - 2).max(0) as usize;
        let h = (self.height - 2).max(0) as usize;
        w * h
    }

    /// Playable tiles in row-major order
    pub fn interior_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (1..self.height - 1).flat_map(move |y| (1..self.width - 1).map(move |x| Position::new(x, y)))
    }

    /// Fence tiles, each listed once: top and bottom rows, then the
    /// left and right columns between them
    pub fn border_cells(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width, self.height);
        let bottom = if height > 1 { height - 1 } else { 0 };
        let right = if width > 1 { width - 1 } else { 0 };

        let rows = (0..width).flat_map(move |x| {
            let top = Position::new(x, 0);
            let low = (bottom != 0).then(|| Position::new(x, bottom));
            std::iter::once(top).chain(low)
        });
        let columns = (1..bottom).flat_map(move |y| {
            let left = Position::new(0, y);
            let far = (right != 0).then(|| Position::new(right, y));
            std::iter::once(left).chain(far)
        });

        rows.chain(columns)
    }
}

/// Snake geometry: the head plus its tail, neck first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    pub head: Position,
    /// Tail segments; index 0 touches the head, the last entry is the tip
    pub tail: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// A snake with no tail, heading East
    pub fn new(head: Position) -> Self {
        Self {
            head,
            tail: Vec::new(),
            direction: Direction::East,
        }
    }

    /// Check if position collides with the tail (excluding head)
    pub fn collides_with_tail(&self, pos: Position) -> bool {
        self.tail.contains(&pos)
    }

    /// Check if position is covered by the head or any tail segment
    pub fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.collides_with_tail(pos)
    }

    /// Move the head to `next_head`, growing by one segment if requested.
    ///
    /// The old head becomes the new neck. Without growth the tip is
    /// dropped, so every segment ends up where the one ahead of it was.
    pub fn advance_to(&mut self, next_head: Position, grow: bool) {
        let old_head = std::mem::replace(&mut self.head, next_head);
        if grow {
            self.tail.insert(0, old_head);
        } else if !self.tail.is_empty() {
            self.tail.pop();
            self.tail.insert(0, old_head);
        }
    }

    /// Head plus tail
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always false; a snake has at least a head
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_in_direction(Direction::East), Position::new(6, 5));
        assert_eq!(pos.moved_in_direction(Direction::West), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::South), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::North), Position::new(5, 4));
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(1, 1);
        assert_eq!(a.manhattan_distance(Position::new(4, 5)), 7);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_interior_checking() {
        let cage = Cage::new(32, 32);

        assert!(cage.is_interior(Position::new(1, 1)));
        assert!(cage.is_interior(Position::new(30, 30)));
        assert!(cage.is_interior(Position::new(15, 15)));
        assert!(!cage.is_interior(Position::new(0, 15)));
        assert!(!cage.is_interior(Position::new(31, 15)));
        assert!(!cage.is_interior(Position::new(15, 0)));
        assert!(!cage.is_interior(Position::new(15, 31)));
        assert!(!cage.is_interior(Position::new(-1, 5)));
    }

    #[test]
    fn test_cell_enumeration() {
        let cage = Cage::new(5, 4);
        assert_eq!(cage.interior_area(), 6);
        assert_eq!(cage.interior_cells().count(), 6);
        // 5 * 4 tiles total, 6 of them playable
        assert_eq!(cage.border_cells().count(), 14);
        assert!(cage.interior_cells().all(|p| cage.is_interior(p)));
        assert!(cage.border_cells().all(|p| !cage.is_interior(p)));
    }

    #[test]
    fn test_border_cells_cover_fence_once() {
        let cage = Cage::new(7, 5);
        let border: Vec<Position> = cage.border_cells().collect();
        let unique: std::collections::HashSet<Position> = border.iter().copied().collect();

        assert_eq!(border.len(), 7 * 5 - cage.interior_area());
        assert_eq!(unique.len(), border.len());

        let expected = (0..5)
            .flat_map(|y| (0..7).map(move |x| Position::new(x, y)))
            .filter(|p| !cage.is_interior(*p))
            .count();
        assert_eq!(border.len(), expected);
    }

    #[test]
    fn test_border_cells_scale_with_perimeter() {
        // A full scan of this grid would be far too slow to finish
        let cage = Cage::new(i32::MAX, 3);
        assert_eq!(cage.border_cells().skip(1_000).take(3).count(), 3);

        let cage = Cage::new(1_000, 1_000);
        assert_eq!(cage.border_cells().count(), 4 * 1_000 - 4);
    }

    #[test]
    fn test_snake_slides_along_path() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.tail = vec![Position::new(4, 5), Position::new(3, 5)];

        snake.advance_to(Position::new(5, 6), false);

        assert_eq!(snake.head, Position::new(5, 6));
        assert_eq!(snake.tail, vec![Position::new(5, 5), Position::new(4, 5)]);
    }

    #[test]
    fn test_snake_grows_at_old_head() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.advance_to(Position::new(6, 5), true);
        assert_eq!(snake.tail, vec![Position::new(5, 5)]);

        snake.advance_to(Position::new(7, 5), true);
        assert_eq!(snake.tail, vec![Position::new(6, 5), Position::new(5, 5)]);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_headless_tail_move() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.advance_to(Position::new(6, 5), false);
        assert_eq!(snake.head, Position::new(6, 5));
        assert!(snake.tail.is_empty());
    }

    #[test]
    fn test_collision_detection() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.tail = vec![Position::new(4, 5)];
        assert!(!snake.collides_with_tail(Position::new(5, 5))); // head
        assert!(snake.collides_with_tail(Position::new(4, 5))); // tail
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }
}
