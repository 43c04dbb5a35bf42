//! Game state and core simulation types
//!
//! Everything one run of the level needs lives in [`GameState`], which the
//! frame orchestrator owns and hands to each system by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::messages::MessageFeed;
use super::timers::Countdown;
use crate::tuning::Tuning;

/// Reason shown when burnout maxes out
pub const BURNOUT_REASON: &str = "Burnout maxed out. Rent will have to wait.";
/// Feed message posted when the run ends
pub const GAME_OVER_MESSAGE: &str = "GAME OVER - refresh to try again";

/// Current phase of gameplay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; there is no way back to `Running`
    GameOver { reason: String },
}

/// Static level dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Thickness of the ground band at the bottom of the viewport
    pub ground_height: f32,
}

impl World {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            width: tuning.world_width,
            viewport_width: tuning.viewport_width,
            viewport_height: tuning.viewport_height,
            ground_height: tuning.ground_height,
        }
    }

    /// Y of the ground surface
    pub fn ground_top(&self) -> f32 {
        self.viewport_height - self.ground_height
    }

    /// Largest top-left y for a body of the given height standing on the ground
    pub fn floor_for(&self, height: f32) -> f32 {
        self.ground_top() - height
    }
}

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Horizontal speed while a direction is held
    pub speed: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_force: f32,
    pub on_ground: bool,
}

impl Player {
    pub fn new(tuning: &Tuning, world: &World) -> Self {
        Self {
            pos: Vec2::new(
                tuning.player_start_x,
                world.floor_for(tuning.player_height),
            ),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vel: Vec2::ZERO,
            speed: tuning.player_speed,
            jump_force: tuning.jump_force,
            on_ground: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Patrolling enemy that causes burnout on contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
    pub size: Vec2,
    pub vx: f32,
    pub left_bound: f32,
    pub right_bound: f32,
}

impl Hazard {
    pub fn new(tuning: &Tuning, world: &World) -> Self {
        Self {
            pos: Vec2::new(tuning.patrol_left, world.floor_for(tuning.hazard_height)),
            size: Vec2::new(tuning.hazard_width, tuning.hazard_height),
            vx: tuning.hazard_speed,
            left_bound: tuning.patrol_left,
            right_bound: tuning.patrol_right,
        }
    }

    /// Rightmost x the hazard's left edge may reach
    pub fn max_x(&self) -> f32 {
        self.right_bound - self.size.x
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A one-shot collectible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
}

impl Pickup {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(size),
            collected: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Mark collected. Returns false if it already was.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}

/// Score-like counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counters {
    /// In [0, burnout_max]; only ever increases
    pub burnout: u32,
    pub burnout_max: u32,
    /// Only ever increases
    pub credits: u32,
    /// Credits needed to make rent (display target)
    pub rent: u32,
    /// Grace window after a hazard hit
    pub invincible: Countdown,
}

impl Counters {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            burnout: 0,
            burnout_max: tuning.burnout_max,
            credits: 0,
            rent: tuning.rent,
            invincible: Countdown::expired(),
        }
    }

    pub fn rent_covered(&self) -> bool {
        self.credits >= self.rent
    }
}

/// Something that happened during the last tick (audio / HUD feedback)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    HazardTurned,
    Damaged { burnout: u32 },
    CoffeeCollected,
    CreditCollected { index: usize, total: u32 },
    GameOver,
}

/// Complete simulation state for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub world: World,
    pub player: Player,
    /// The basic level has no hazard
    pub hazard: Option<Hazard>,
    pub coffee: Option<Pickup>,
    pub credits: Vec<Pickup>,
    pub counters: Counters,
    pub messages: MessageFeed,
    pub phase: GamePhase,
    /// Horizontal scroll, recomputed every tick
    pub camera_x: f32,
    /// Simulation tick counter
    pub ticks: u64,
    /// Accumulated simulation time (seconds)
    pub elapsed: f64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an empty level: player on the ground, nothing else placed
    pub fn new(tuning: Tuning) -> Self {
        let world = World::from_tuning(&tuning);
        let player = Player::new(&tuning, &world);
        let counters = Counters::new(&tuning);
        let messages = MessageFeed::new(tuning.message_duration);
        Self {
            tuning,
            world,
            player,
            hazard: None,
            coffee: None,
            credits: Vec::new(),
            counters,
            messages,
            phase: GamePhase::Running,
            camera_x: 0.0,
            ticks: 0,
            elapsed: 0.0,
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn game_over_reason(&self) -> Option<&str> {
        match &self.phase {
            GamePhase::GameOver { reason } => Some(reason),
            GamePhase::Running => None,
        }
    }

    /// Enter the terminal state. Calling it again is a no-op.
    pub fn end_run(&mut self, reason: &str) {
        if !self.is_running() {
            return;
        }
        log::info!(
            "Run over after {:.1}s: {} (credits {}/{})",
            self.elapsed,
            reason,
            self.counters.credits,
            self.counters.rent
        );
        self.phase = GamePhase::GameOver {
            reason: reason.to_string(),
        };
        self.messages.post(GAME_OVER_MESSAGE);
        self.events.push(GameEvent::GameOver);
    }
}
