use super::{GameOverReason, Screen, Transition};
use crate::game::Collision;
use crate::input::KeyAction;
use crate::render::{Painter, RenderTarget};

/// Final score plus a restart / quit prompt
pub struct GameOverScreen {
    score: u32,
    high_score: u32,
    reason: GameOverReason,
    painter: Painter,
    choice: Option<Transition>,
}

impl GameOverScreen {
    pub fn new(score: u32, high_score: u32, reason: GameOverReason, painter: Painter) -> Self {
        Self {
            score,
            high_score,
            reason,
            painter,
            choice: None,
        }
    }

    fn lines(&self) -> Vec<String> {
        let headline = match self.reason {
            GameOverReason::Won => "YOU WIN",
            GameOverReason::Collision(Collision::Wall) => "GAME OVER - hit the fence",
            GameOverReason::Collision(Collision::SelfCollision) => "GAME OVER - bit your tail",
            GameOverReason::Stopped => "GAME OVER - stopped",
        };

        vec![
            headline.to_string(),
            format!("Final Score: {}", self.score),
            format!("High Score: {}", self.high_score),
            "Press R to restart or Q to quit".to_string(),
        ]
    }
}

impl Screen for GameOverScreen {
    fn mount(&mut self, target: &mut dyn RenderTarget) {
        self.painter.draw_message(&self.lines(), target);
    }

    fn unmount(&mut self) {
        self.choice = None;
    }

    fn handle_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Restart => self.choice = Some(Transition::Restart),
            KeyAction::Quit => self.choice = Some(Transition::Exit),
            KeyAction::Turn(_) | KeyAction::None => {}
        }
    }

    fn refresh(&mut self, target: &mut dyn RenderTarget) -> Transition {
        self.painter.draw_message(&self.lines(), target);
        self.choice.take().unwrap_or(Transition::Stay)
    }

    fn name(&self) -> &'static str {
        "game over"
    }
}
