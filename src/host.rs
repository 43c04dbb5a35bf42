//! Frame driver
//!
//! Owns everything for one session and turns the host's per-frame callback
//! timestamps into simulation ticks. Assets must load before a `Host`
//! exists, so no tick can ever run without them.

use thiserror::Error;

use crate::assets::{AssetLoadError, AssetLoader, AssetSet, load_all};
use crate::autopilot::Autopilot;
use crate::input::InputState;
use crate::renderer::{DrawList, Hud, RenderFrame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, LevelVariant, new_game, tick};
use crate::tuning::{Tuning, TuningError};

#[derive(Error, Debug)]
pub enum HostError {
    #[error(transparent)]
    Assets(#[from] AssetLoadError),
    #[error(transparent)]
    Tuning(#[from] TuningError),
}

pub struct Host {
    state: GameState,
    variant: LevelVariant,
    input: InputState,
    assets: AssetSet,
    settings: Settings,
    /// Drives input instead of the player when set (attract mode)
    autopilot: Option<Autopilot>,
    /// Timestamp of the previous frame (seconds)
    last_frame: Option<f64>,
    frame: RenderFrame,
}

impl Host {
    /// Validate tuning, load every sprite, then build the level
    pub fn start(
        tuning: Tuning,
        variant: LevelVariant,
        loader: &dyn AssetLoader,
    ) -> Result<Self, HostError> {
        tuning.validate()?;
        let assets = load_all(loader)?;
        let state = new_game(tuning, variant);
        let frame = RenderFrame::capture(&state);
        log::info!("Session started ({:?})", variant);
        Ok(Self {
            state,
            variant,
            input: InputState::new(),
            assets,
            settings: Settings::default(),
            autopilot: None,
            last_frame: None,
            frame,
        })
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn set_autopilot(&mut self, autopilot: Option<Autopilot>) {
        self.autopilot = autopilot;
    }

    /// Keyboard/touch handlers write here
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn assets(&self) -> &AssetSet {
        &self.assets
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    /// Per-frame callback. `now` is the host clock in seconds.
    ///
    /// The step is the raw delta since the previous call (zero on the first
    /// frame). A clock that runs backwards yields a zero step.
    pub fn frame(&mut self, now: f64) -> &RenderFrame {
        let dt = match self.last_frame {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_frame = Some(now);

        let intent = match self.autopilot.as_mut() {
            Some(pilot) => pilot.next_intent(&self.state, dt),
            None => self.input.intent(),
        };
        tick(&mut self.state, &intent, dt);

        for event in &self.state.events {
            log::debug!("tick {}: {:?}", self.state.ticks, event);
        }

        self.frame = RenderFrame::capture(&self.state);
        &self.frame
    }

    /// Snapshot from the latest frame
    pub fn render_frame(&self) -> &RenderFrame {
        &self.frame
    }

    /// Quads for the latest frame
    pub fn draw_list(&self) -> DrawList {
        DrawList::build(&self.frame, &self.assets, &self.settings)
    }

    /// Text overlay for the latest frame
    pub fn hud(&self) -> Hud {
        Hud::build(&self.frame, &self.settings)
    }

    /// Throw the run away and start the level over (page refresh)
    pub fn restart(&mut self) {
        let tuning = self.state.tuning.clone();
        self.state = new_game(tuning, self.variant);
        self.input.release_all();
        self.last_frame = None;
        self.frame = RenderFrame::capture(&self.state);
        log::info!("Session restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{ImageAsset, SpriteKey};
    use crate::sim::GamePhase;

    struct AllAssets;

    impl AssetLoader for AllAssets {
        fn load(&self, _key: SpriteKey) -> Result<ImageAsset, String> {
            Ok(ImageAsset {
                width: 32,
                height: 32,
                rgba: vec![0; 32 * 32 * 4],
            })
        }
    }

    struct NoBackground;

    impl AssetLoader for NoBackground {
        fn load(&self, key: SpriteKey) -> Result<ImageAsset, String> {
            if key == SpriteKey::Background {
                return Err("decode failed".into());
            }
            AllAssets.load(key)
        }
    }

    fn host() -> Host {
        Host::start(Tuning::default(), LevelVariant::Standard, &AllAssets).unwrap()
    }

    #[test]
    fn test_asset_failure_aborts_startup() {
        let result = Host::start(Tuning::default(), LevelVariant::Standard, &NoBackground);
        match result {
            Err(HostError::Assets(err)) => {
                assert_eq!(err.failures.len(), 1);
                assert_eq!(err.failures[0].key, SpriteKey::Background);
            }
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("startup must fail without every asset"),
        }
    }

    #[test]
    fn test_invalid_tuning_aborts_startup() {
        let tuning = Tuning {
            world_width: 10.0,
            ..Default::default()
        };
        let result = Host::start(tuning, LevelVariant::Standard, &AllAssets);
        assert!(matches!(result, Err(HostError::Tuning(_))));
    }

    #[test]
    fn test_dt_is_raw_wall_clock_delta() {
        let mut host = host();
        host.input_mut().key_event("ArrowRight", true);

        // First frame has no previous timestamp
        let x0 = host.frame(10.0).player.rect.pos.x;
        assert_eq!(x0, host.state().tuning.player_start_x);

        // A 0.5s stall is one big step, not clamped or sub-stepped
        let x1 = host.frame(10.5).player.rect.pos.x;
        let speed = host.state().player.speed;
        assert!((x1 - (x0 + speed * 0.5)).abs() < 1e-3);
        assert!((host.state().elapsed - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_clock_going_backwards_is_zero_step() {
        let mut host = host();
        host.input_mut().key_event("KeyD", true);
        host.frame(5.0);
        let x = host.frame(4.0).player.rect.pos.x;
        assert_eq!(x, host.state().tuning.player_start_x);
    }

    #[test]
    fn test_draw_list_available_after_frame() {
        let mut host = host();
        host.frame(0.0);
        host.frame(1.0 / 60.0);
        let list = host.draw_list();
        assert_eq!(list.quad_count(SpriteKey::Player), 1);
    }

    #[test]
    fn test_hud_follows_settings() {
        let mut host = host();
        host.frame(0.0);
        assert_eq!(host.hud().counters.len(), 2);

        let mut host = host.with_settings(Settings {
            show_hud: false,
            ..Default::default()
        });
        host.frame(0.1);
        assert!(host.hud().counters.is_empty());
    }

    #[test]
    fn test_restart_gives_fresh_run() {
        let mut host = host();
        let mut state = host.state().clone();
        state.end_run(crate::sim::BURNOUT_REASON);
        host.state = state;
        assert!(matches!(host.state().phase, GamePhase::GameOver { .. }));

        host.restart();
        assert!(host.state().is_running());
        assert_eq!(host.state().ticks, 0);
        assert_eq!(host.render_frame().game_over, None);
    }

    #[test]
    fn test_autopilot_drives_input() {
        let mut host = host();
        host.set_autopilot(Some(Autopilot::new(5).with_hop_rate(0.0)));
        let start = host.frame(0.0).player.rect.pos.x;
        let mut t = 0.0;
        for _ in 0..30 {
            t += 1.0 / 60.0;
            host.frame(t);
        }
        assert!(host.render_frame().player.rect.pos.x > start);
    }
}
