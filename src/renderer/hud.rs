//! HUD and message feed layout
//!
//! Text is handed to the backend as positioned runs in screen space; the
//! backend picks the font.

use super::frame::RenderFrame;
use crate::settings::Settings;

const MARGIN: f32 = 16.0;
const LINE_HEIGHT: f32 = 24.0;
/// Top of the message feed, below the counter readouts
const FEED_TOP: f32 = MARGIN + 3.0 * LINE_HEIGHT;

/// One line of text. `x` is the left edge unless `centered` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub alpha: f32,
    pub centered: bool,
}

impl TextRun {
    fn left(text: String, x: f32, y: f32) -> Self {
        Self {
            text,
            x,
            y,
            alpha: 1.0,
            centered: false,
        }
    }

    fn centered(text: String, x: f32, y: f32, alpha: f32) -> Self {
        Self {
            text,
            x,
            y,
            alpha,
            centered: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hud {
    /// Credit and burnout readouts, empty when the HUD is hidden
    pub counters: Vec<TextRun>,
    /// Burnout bar fill in [0, 1], `None` when the HUD is hidden
    pub burnout_fill: Option<f32>,
    /// Feed messages in display order
    pub messages: Vec<TextRun>,
    pub banner: Option<TextRun>,
}

impl Hud {
    pub fn build(frame: &RenderFrame, settings: &Settings) -> Self {
        let mut hud = Self::default();

        if settings.show_hud {
            let mut lines = vec![
                frame.credits_label(),
                format!("Burnout {} / {}", frame.burnout, frame.burnout_max),
            ];
            if frame.rent_covered {
                lines.push("Rent covered!".to_string());
            }
            hud.counters = lines
                .into_iter()
                .enumerate()
                .map(|(i, text)| TextRun::left(text, MARGIN, MARGIN + i as f32 * LINE_HEIGHT))
                .collect();
            hud.burnout_fill = Some(frame.burnout_fraction());
        }

        // The feed is gameplay feedback and stays visible without the HUD
        let center = frame.viewport_width / 2.0;
        hud.messages = frame
            .messages
            .iter()
            .enumerate()
            .map(|(i, msg)| {
                TextRun::centered(
                    msg.text.clone(),
                    center,
                    FEED_TOP + i as f32 * LINE_HEIGHT,
                    settings.message_alpha(msg.ratio),
                )
            })
            .collect();

        hud.banner = frame.game_over.as_ref().map(|reason| {
            TextRun::centered(reason.clone(), center, frame.viewport_height / 2.0, 1.0)
        });

        hud
    }

    /// Every run, counters first
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.counters
            .iter()
            .chain(&self.messages)
            .chain(self.banner.as_ref())
    }
}
