use log::debug;

use super::{GameOverReason, Screen, Transition};
use crate::game::{Direction, World};
use crate::input::KeyAction;
use crate::render::{Painter, RenderTarget};

/// Plays a world: one tick per refresh
pub struct GameScreen {
    world: World,
    painter: Painter,
    pending_direction: Option<Direction>,
    requested: Option<Transition>,
}

impl GameScreen {
    pub fn new(world: World, painter: Painter) -> Self {
        Self {
            world,
            painter,
            pending_direction: None,
            requested: None,
        }
    }
}

impl Screen for GameScreen {
    fn mount(&mut self, target: &mut dyn RenderTarget) {
        debug!("game screen mounted, seed {}", self.world.seed());
        self.painter.draw(&self.world, target);
    }

    fn unmount(&mut self) {
        self.pending_direction = None;
        self.requested = None;
    }

    fn handle_key(&mut self, action: KeyAction) {
        match action {
            // Only the latest turn before a tick counts
            KeyAction::Turn(direction) => self.pending_direction = Some(direction),
            KeyAction::Restart => self.requested = Some(Transition::Restart),
            KeyAction::Quit => self.requested = Some(Transition::Exit),
            KeyAction::None => {}
        }
    }

    fn refresh(&mut self, target: &mut dyn RenderTarget) -> Transition {
        if let Some(transition) = self.requested.take() {
            return transition;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.world.set_direction(direction);
        }

        let outcome = self.world.advance();
        self.painter.draw(&self.world, target);

        match GameOverReason::from_outcome(outcome) {
            Some(reason) => Transition::GameOver {
                score: self.world.score(),
                reason,
            },
            None => Transition::Stay,
        }
    }

    fn world(&self) -> Option<&World> {
        Some(&self.world)
    }

    fn name(&self) -> &'static str {
        "game"
    }
}
