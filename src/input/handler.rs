use crate::game::Direction;

/// Escape key as delivered by most terminals
const ESC: char = '\u{1b}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Restart,
    Quit,
    None,
}

/// Maps raw key characters to game intents
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, key: char) -> KeyAction {
        match key {
            // Movement - WASD
            'w' | 'W' => KeyAction::Turn(Direction::North),
            's' | 'S' => KeyAction::Turn(Direction::South),
            'a' | 'A' => KeyAction::Turn(Direction::West),
            'd' | 'D' => KeyAction::Turn(Direction::East),

            // Movement - IJKL
            'i' | 'I' => KeyAction::Turn(Direction::North),
            'k' | 'K' => KeyAction::Turn(Direction::South),
            'j' | 'J' => KeyAction::Turn(Direction::West),
            'l' | 'L' => KeyAction::Turn(Direction::East),

            // Controls
            'q' | 'Q' | ESC => KeyAction::Quit,
            'r' | 'R' => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
