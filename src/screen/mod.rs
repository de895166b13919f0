//! Screens shown by a session
//!
//! A screen owns whatever it presents and draws into a render target that
//! the session hands in on every call. Screens never own the target.

pub mod game;
pub mod game_over;

pub use game::GameScreen;
pub use game_over::GameOverScreen;

use crate::game::{Collision, TickOutcome, World};
use crate::input::KeyAction;
use crate::render::RenderTarget;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The snake filled the cage
    Won,
    /// The snake ran into the fence or itself
    Collision(Collision),
    /// The driver ended the game while the snake was alive
    Stopped,
}

impl GameOverReason {
    /// Reason for a terminal tick; `None` while the game goes on
    pub fn from_outcome(outcome: TickOutcome) -> Option<Self> {
        match outcome {
            TickOutcome::Won => Some(GameOverReason::Won),
            TickOutcome::Dead(collision) => Some(GameOverReason::Collision(collision)),
            TickOutcome::Moved | TickOutcome::Ate => None,
        }
    }
}

/// What the session should do after a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep the current screen
    Stay,
    /// The game ended; show the final score
    GameOver { score: u32, reason: GameOverReason },
    /// Start over with a fresh world
    Restart,
    /// Leave the session
    Exit,
}

pub trait Screen {
    /// Called once when the screen becomes current
    fn mount(&mut self, target: &mut dyn RenderTarget);

    /// Called once before the screen is replaced
    fn unmount(&mut self);

    /// Deliver one key press; takes effect on the next refresh
    fn handle_key(&mut self, action: KeyAction);

    /// Run one frame
    fn refresh(&mut self, target: &mut dyn RenderTarget) -> Transition;

    /// The world being played, if this screen has one
    fn world(&self) -> Option<&World> {
        None
    }

    fn name(&self) -> &'static str;
}
