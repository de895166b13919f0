use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{
    action::Direction,
    config::WorldConfig,
    error::{ConfigError, PlacementError},
    state::{Cage, Position, Snake},
};

/// Points awarded per apple; the score is always this times the tail length
pub const APPLE_POINTS: u32 = 10;

/// Random probes made before falling back to enumerating free tiles
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Snake hit the fence
    Wall,
    /// Snake hit its own tail
    SelfCollision,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// The snake slid one tile
    Moved,
    /// The snake ate the apple and grew
    Ate,
    /// The snake fills the whole interior; nothing is left to eat
    Won,
    /// The move was fatal; nothing changed
    Dead(Collision),
}

impl TickOutcome {
    /// True once the world must not be advanced any more
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickOutcome::Won | TickOutcome::Dead(_))
    }
}

/// Lifecycle of a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldStatus {
    Alive,
    Dead(Collision),
    Won,
}

/// Serializable copy of everything a collaborator may read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub width: i32,
    pub height: i32,
    pub head: Position,
    pub tail: Vec<Position>,
    pub apple: Option<Position>,
    pub direction: Direction,
    pub score: u32,
    pub ticks: u64,
    pub status: WorldStatus,
}

/// The simulation core: owns the cage, the snake and the apple
#[derive(Debug, Clone)]
pub struct World {
    cage: Cage,
    snake: Snake,
    apple: Option<Position>,
    status: WorldStatus,
    ticks: u64,
    seed: u64,
    rng: StdRng,
}

impl World {
    /// Build a world with a random apple seed
    pub fn new(config: &WorldConfig) -> Result<Self, ConfigError> {
        let seed: u64 = rand::thread_rng().gen();
        Self::with_seed(config, seed)
    }

    /// Build a world whose apple placement is reproducible from `seed`
    pub fn with_seed(config: &WorldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            cage: Cage::new(config.width, config.height),
            snake: Snake::new(config.start),
            apple: None,
            status: WorldStatus::Alive,
            ticks: 0,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Change heading; a request to reverse onto the neck is ignored
    pub fn set_direction(&mut self, requested: Direction) {
        if self.snake.direction.is_opposite(requested) {
            debug!(
                "ignoring reversal from {} to {}",
                self.snake.direction, requested
            );
            return;
        }

        self.snake.direction = requested;
    }

    /// Execute one tick of the game
    pub fn advance(&mut self) -> TickOutcome {
        match self.status {
            WorldStatus::Dead(collision) => return TickOutcome::Dead(collision),
            WorldStatus::Won => return TickOutcome::Won,
            WorldStatus::Alive => {}
        }

        let next_head = self.snake.head.moved_in_direction(self.snake.direction);

        // Collision is judged against the tail before it moves
        if let Some(collision) = self.check_collision(next_head) {
            info!(
                "snake died ({:?}) at ({}, {}) with score {}",
                collision,
                next_head.x,
                next_head.y,
                self.score()
            );
            self.status = WorldStatus::Dead(collision);
            return TickOutcome::Dead(collision);
        }

        let ate_apple = self.apple == Some(next_head);
        self.snake.advance_to(next_head, ate_apple);
        self.ticks += 1;

        if ate_apple || self.apple.is_none() {
            self.apple = self.spawn_apple();

            if self.apple.is_none() {
                info!("snake fills the cage, score {}", self.score());
                self.status = WorldStatus::Won;
                return TickOutcome::Won;
            }
        }

        if ate_apple {
            info!("apple eaten, score {}", self.score());
            TickOutcome::Ate
        } else {
            debug!(
                "tick {}: head at ({}, {})",
                self.ticks, next_head.x, next_head.y
            );
            TickOutcome::Moved
        }
    }

    /// Put the apple on a specific free interior tile
    pub fn place_apple(&mut self, pos: Position) -> Result<(), PlacementError> {
        if !self.cage.is_interior(pos) {
            return Err(PlacementError::OutsideInterior(pos));
        }
        if self.snake.occupies(pos) {
            return Err(PlacementError::OnSnake(pos));
        }

        self.apple = Some(pos);
        Ok(())
    }

    pub fn head(&self) -> Position {
        self.snake.head
    }

    /// Tail segments, neck first
    pub fn tail(&self) -> &[Position] {
        &self.snake.tail
    }

    pub fn apple(&self) -> Option<Position> {
        self.apple
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Derived from the tail length, never stored
    pub fn score(&self) -> u32 {
        self.snake.tail.len() as u32 * APPLE_POINTS
    }

    pub fn status(&self) -> WorldStatus {
        self.status
    }

    pub fn is_alive(&self) -> bool {
        self.status == WorldStatus::Alive
    }

    /// Successful ticks so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn cage(&self) -> &Cage {
        &self.cage
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Head plus tail
    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Always false; kept alongside `len`
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            width: self.cage.width(),
            height: self.cage.height(),
            head: self.snake.head,
            tail: self.snake.tail.clone(),
            apple: self.apple,
            direction: self.snake.direction,
            score: self.score(),
            ticks: self.ticks,
            status: self.status,
        }
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, pos: Position) -> Option<Collision> {
        if !self.cage.is_interior(pos) {
            return Some(Collision::Wall);
        }

        if self.snake.collides_with_tail(pos) {
            return Some(Collision::SelfCollision);
        }

        None
    }

    /// Pick a uniformly random interior tile the snake does not cover.
    /// Returns `None` only when the snake fills the interior.
    fn spawn_apple(&mut self) -> Option<Position> {
        if self.snake.len() >= self.cage.interior_area() {
            return None;
        }

        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let x = self.rng.gen_range(1..=self.cage.width() - 2);
            let y = self.rng.gen_range(1..=self.cage.height() - 2);
            let pos = Position::new(x, y);

            if !self.snake.occupies(pos) {
                return Some(pos);
            }
        }

        // Crowded cage: choose among the tiles that are actually free
        let snake = &self.snake;
        let free: Vec<Position> = self
            .cage
            .interior_cells()
            .filter(|pos| !snake.occupies(*pos))
            .collect();
        free.choose(&mut self.rng).copied()
    }
}
