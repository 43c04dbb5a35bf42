//! Input capture state
//!
//! Keyboard and touch handlers write into their own source; the simulation
//! reads one merged [`Intent`] per tick. Intents are levels, not edges: a
//! held key stays asserted every tick until released.

use crate::sim::Intent;

/// Where an input came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    Touch,
}

/// A single intent bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Jump,
}

/// Key codes (DOM `KeyboardEvent.code` names) and what they do
const KEY_BINDINGS: &[(&str, Action)] = &[
    ("ArrowLeft", Action::Left),
    ("KeyA", Action::Left),
    ("ArrowRight", Action::Right),
    ("KeyD", Action::Right),
    ("ArrowUp", Action::Jump),
    ("KeyW", Action::Jump),
    ("Space", Action::Jump),
];

impl Action {
    pub fn from_key(code: &str) -> Option<Self> {
        KEY_BINDINGS
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, action)| *action)
    }
}

fn set_action(intent: &mut Intent, action: Action, pressed: bool) {
    match action {
        Action::Left => intent.left = pressed,
        Action::Right => intent.right = pressed,
        Action::Jump => intent.jump = pressed,
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Bound key codes currently held
    held_keys: Vec<String>,
    touch: Intent,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key press/release. Returns false for unbound keys.
    pub fn key_event(&mut self, code: &str, pressed: bool) -> bool {
        if Action::from_key(code).is_none() {
            return false;
        }
        let held = self.held_keys.iter().any(|k| k == code);
        if pressed && !held {
            self.held_keys.push(code.to_string());
        } else if !pressed {
            self.held_keys.retain(|k| k != code);
        }
        true
    }

    /// On-screen button pressed/released
    pub fn set_touch(&mut self, action: Action, pressed: bool) {
        set_action(&mut self.touch, action, pressed);
    }

    /// Intent from one source alone
    pub fn source_intent(&self, source: InputSource) -> Intent {
        match source {
            InputSource::Keyboard => {
                let mut intent = Intent::default();
                for action in self.held_keys.iter().filter_map(|k| Action::from_key(k)) {
                    set_action(&mut intent, action, true);
                }
                intent
            }
            InputSource::Touch => self.touch,
        }
    }

    /// All sources OR-ed together
    pub fn intent(&self) -> Intent {
        self.source_intent(InputSource::Keyboard)
            .merge(self.source_intent(InputSource::Touch))
    }

    /// Drop everything held (window lost focus)
    pub fn release_all(&mut self) {
        self.held_keys.clear();
        self.touch = Intent::default();
    }
}
