//! Transient on-screen notifications
//!
//! Messages display top-to-bottom in the order they were posted and expire
//! independently.

use serde::{Deserialize, Serialize};

use super::timers::Countdown;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub remaining: Countdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageFeed {
    messages: Vec<Message>,
    /// Lifetime given to every new message (seconds)
    duration: f32,
}

impl MessageFeed {
    pub fn new(duration: f32) -> Self {
        Self {
            messages: Vec::new(),
            duration,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Append a message with a full lifetime
    pub fn post(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::debug!("message: {}", text);
        self.messages.push(Message {
            text,
            remaining: Countdown::new(self.duration),
        });
    }

    /// Age every message by `dt` and drop the expired ones, keeping order
    pub fn update(&mut self, dt: f32) {
        for msg in &mut self.messages {
            msg.remaining.tick(dt);
        }
        self.messages.retain(|m| !m.remaining.is_expired());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Remaining lifetime as a fraction of the full duration (for fading)
    pub fn ratio(&self, msg: &Message) -> f32 {
        msg.remaining.ratio(self.duration)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
