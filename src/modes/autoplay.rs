use anyhow::{ensure, Result};
use log::{debug, info};

use super::session::Session;
use super::summary::SessionSummary;
use crate::game::{Direction, Position, World};
use crate::input::KeyAction;
use crate::render::RenderTarget;

/// Greedy player: heads for the apple while avoiding fatal tiles
pub struct Autopilot;

impl Autopilot {
    /// Pick a heading for the next tick, or `None` to keep the current one
    pub fn choose(world: &World) -> Option<Direction> {
        let head = world.head();
        let current = world.direction();

        let safe: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|dir| !current.is_opposite(*dir))
            .filter(|dir| Self::is_safe(world, head.moved_in_direction(*dir)))
            .collect();

        let Some(apple) = world.apple() else {
            // Nothing to chase yet: go straight if possible
            if safe.contains(&current) {
                return Some(current);
            }
            return safe.first().copied();
        };

        // Ties keep the current heading to avoid needless turns
        safe.into_iter().min_by_key(|dir| {
            let distance = head.moved_in_direction(*dir).manhattan_distance(apple);
            (distance, *dir != current)
        })
    }

    fn is_safe(world: &World, pos: Position) -> bool {
        world.cage().is_interior(pos) && !world.snake().collides_with_tail(pos)
    }
}

/// Plays several games with the autopilot
pub struct AutoplayMode<T: RenderTarget> {
    session: Session<T>,
    games: u32,
    max_ticks: u64,
}

impl<T: RenderTarget> AutoplayMode<T> {
    pub fn new(session: Session<T>, games: u32, max_ticks: u64) -> Self {
        Self {
            session,
            games,
            max_ticks,
        }
    }

    /// Play until `games` games have finished. `on_frame` sees the session
    /// after every step. Asking for zero games is an error.
    pub fn run(mut self, mut on_frame: impl FnMut(&Session<T>)) -> Result<SessionSummary> {
        ensure!(self.games > 0, "autoplay needs at least one game");
        info!(
            "autoplay: {} games, at most {} ticks each",
            self.games, self.max_ticks
        );

        while !self.session.is_finished() {
            match self.session.world() {
                Some(world) if world.ticks() >= self.max_ticks => {
                    debug!("tick cap reached");
                    self.session.end_game();
                }
                Some(world) => {
                    if let Some(direction) = Autopilot::choose(world) {
                        self.session.handle_action(KeyAction::Turn(direction));
                    }
                    self.session.step()?;
                }
                None => {
                    let action = if self.session.metrics().games_played < self.games {
                        KeyAction::Restart
                    } else {
                        KeyAction::Quit
                    };
                    self.session.handle_action(action);
                    self.session.step()?;
                }
            }

            on_frame(&self.session);
        }

        Ok(SessionSummary::from_session("autoplay", &self.session))
    }
}
