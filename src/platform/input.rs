//! Keyboard state
//!
//! Held keys (turning, thrust, fire) are sampled once per tick. Command keys
//! fire once on key-down and are never held.

use std::collections::HashSet;

use crate::sim::{Command, TickInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
    Confirm,
    Pause,
    Reset,
}

impl Key {
    /// Map a DOM-style key name
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "a" | "A" => Some(Key::RotateLeft),
            "ArrowRight" | "d" | "D" => Some(Key::RotateRight),
            "ArrowUp" | "w" | "W" => Some(Key::Thrust),
            " " | "Space" => Some(Key::Fire),
            "Enter" => Some(Key::Confirm),
            "p" | "P" | "Escape" => Some(Key::Pause),
            "r" | "R" => Some(Key::Reset),
            _ => None,
        }
    }

    fn command(self) -> Option<Command> {
        match self {
            Key::Confirm => Some(Command::Confirm),
            Key::Pause => Some(Command::TogglePause),
            Key::Reset => Some(Command::Reset),
            _ => None,
        }
    }
}

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    /// Record a key press. Returns a command for command keys.
    pub fn key_down(&mut self, code: &str) -> Option<Command> {
        let key = Key::from_code(code)?;
        match key.command() {
            Some(command) => Some(command),
            None => {
                self.held.insert(key);
                None
            }
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.held.remove(&key);
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Release everything (focus lost)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            rotate_left: self.is_held(Key::RotateLeft),
            rotate_right: self.is_held(Key::RotateRight),
            thrust: self.is_held(Key::Thrust),
            fire: self.is_held(Key::Fire),
        }
    }
}
