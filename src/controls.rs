//! Keyboard bindings
//!
//! Maps raw key names (as reported by a browser `KeyboardEvent.key` or a
//! terminal) onto simulation commands.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{Axis, Command, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Increase power
    W,
    /// Decrease power
    S,
    /// Shoot
    Space,
    /// Reset ball
    R,
    /// Toggle camera orbit (handled by the presentation layer)
    O,
}

impl Key {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arrowleft" | "left" => Some(Key::ArrowLeft),
            "arrowright" | "right" => Some(Key::ArrowRight),
            "arrowup" | "up" => Some(Key::ArrowUp),
            "arrowdown" | "down" => Some(Key::ArrowDown),
            "w" => Some(Key::W),
            "s" => Some(Key::S),
            " " | "space" => Some(Key::Space),
            "r" => Some(Key::R),
            "o" => Some(Key::O),
            _ => None,
        }
    }

    /// Simulation command for this key, if it drives the simulation at all
    pub fn command(self, settings: &Settings) -> Option<Command> {
        match self {
            Key::ArrowLeft => Some(Command::Move(Axis::Lateral, Direction::Negative)),
            Key::ArrowRight => Some(Command::Move(Axis::Lateral, Direction::Positive)),
            Key::ArrowUp => Some(Command::Move(Axis::Long, Direction::Negative)),
            Key::ArrowDown => Some(Command::Move(Axis::Long, Direction::Positive)),
            Key::W => Some(Command::AdjustPower(settings.power_step)),
            Key::S => Some(Command::AdjustPower(-settings.power_step)),
            Key::Space => Some(Command::Launch),
            Key::R => Some(Command::Reset),
            Key::O => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_browser_key_names() {
        assert_eq!(Key::from_str("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_str("W"), Some(Key::W));
        assert_eq!(Key::from_str(" "), Some(Key::Space));
        assert_eq!(Key::from_str("q"), None);
    }

    #[test]
    fn test_bindings() {
        let settings = Settings::default();
        assert_eq!(
            Key::ArrowUp.command(&settings),
            Some(Command::Move(Axis::Long, Direction::Negative))
        );
        assert_eq!(Key::S.command(&settings), Some(Command::AdjustPower(-0.05)));
        assert_eq!(Key::Space.command(&settings), Some(Command::Launch));
        assert_eq!(Key::O.command(&settings), None);
    }
}
