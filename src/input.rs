//! Input normalization
//!
//! Keyboard and pointer events collapse into two commands. The adapter only
//! knows whether the loop is running; it has no idea about game modes.

use serde::{Deserialize, Serialize};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    Space,
    Other,
}

impl Key {
    /// Map a DOM-style key code (`KeyboardEvent.code`)
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowUp" => Key::ArrowUp,
            "Space" => Key::Space,
            _ => Key::Other,
        }
    }

    pub fn is_fly(&self) -> bool {
        matches!(self, Key::ArrowUp | Key::Space)
    }
}

/// Raw input from the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    /// Mouse button or touch on the play area
    PointerDown,
    /// Start / restart button on an overlay
    StartPressed,
}

/// Normalized game command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Impulse upward
    Fly,
    /// Start or restart a run
    Start,
}

/// Turns raw input into commands while the loop is running
#[derive(Debug, Clone)]
pub struct InputAdapter {
    running: bool,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self { running: true }
    }
}

impl InputAdapter {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn translate(&self, event: InputEvent) -> Option<Command> {
        if !self.running {
            return None;
        }
        match event {
            InputEvent::KeyDown(key) if key.is_fly() => Some(Command::Fly),
            InputEvent::KeyDown(_) => None,
            InputEvent::PointerDown => Some(Command::Fly),
            InputEvent::StartPressed => Some(Command::Start),
        }
    }
}
