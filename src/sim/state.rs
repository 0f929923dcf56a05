//! Simulation state and core types
//!
//! All state the core owns lives here; everything downstream (renderer, HUD)
//! works from [`StateSnapshot`]s and [`GameEvent`]s.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::ring_pos_from_angle;

/// Current phase of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AttemptMode {
    /// Between attempts, waiting for the next player to arm
    #[default]
    Idle,
    /// Ring held at the hold angle, player aiming
    Ready,
    /// Ring released and swinging
    Flying,
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    pub fn other(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::One => "P1",
            Player::Two => "P2",
        }
    }
}

/// The pendulum bob. The angle is the single source of truth; the screen
/// position is always derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Ring {
    /// Angle from straight down, radians
    pub angle: f32,
    /// Angular velocity, rad/tick
    pub ang_vel: f32,
    /// Angular acceleration, rad/tick²
    pub ang_acc: f32,
}

impl Ring {
    /// Place the ring at an angle with no motion (kinematic override)
    pub fn hold_at(&mut self, angle: f32) {
        self.angle = angle;
        self.ang_vel = 0.0;
        self.ang_acc = 0.0;
    }
}

/// Match score: points reset per game, sets persist for the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatchScore {
    pub p1: u32,
    pub p2: u32,
    pub sets1: u32,
    pub sets2: u32,
    pub serving: Player,
}

impl MatchScore {
    pub fn points(&self, player: Player) -> u32 {
        match player {
            Player::One => self.p1,
            Player::Two => self.p2,
        }
    }

    pub fn sets(&self, player: Player) -> u32 {
        match player {
            Player::One => self.sets1,
            Player::Two => self.sets2,
        }
    }

    pub fn add_point(&mut self, player: Player) {
        match player {
            Player::One => self.p1 += 1,
            Player::Two => self.p2 += 1,
        }
    }

    pub fn add_set(&mut self, player: Player) {
        match player {
            Player::One => self.sets1 += 1,
            Player::Two => self.sets2 += 1,
        }
    }
}

/// Why an attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    Captured,
    Timeout,
    Settled,
}

/// Discrete events for the presentation layer, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ring landed on the hook; freeze-frame before the score applies
    Captured,
    /// Point applied to the scoring player
    Scored { player: Player, points: (u32, u32) },
    /// Game (set) won; points have been reset
    GameWon { player: Player, sets: (u32, u32) },
    /// Match over; a full reset follows after the announce delay
    MatchWon { player: Player, sets: (u32, u32) },
    /// Attempt resolved and the turn passed to the other player
    AttemptEnded { reason: EndReason },
}

/// Deferred one-shot action, keyed to the simulated tick counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduledAction {
    /// Apply the latched capture as a point (freeze-frame settle delay)
    ApplyScore,
    /// Full reset after the match-winner announcement
    ResetMatch,
}

/// A scheduled one-shot action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled {
    pub fire_at_tick: u64,
    pub action: ScheduledAction,
}

/// Per-tick view of the simulation for rendering and HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub mode: AttemptMode,
    pub ring_angle: f32,
    pub ring_pos: Vec2,
    pub hook_tip: Vec2,
    pub score: MatchScore,
    pub time_ticks: u64,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Pendulum pivot, fixed after layout
    pub anchor: Vec2,
    /// Tunable constants
    pub config: Config,
    /// Hook tip, derived from anchor + config
    pub hook_tip: Vec2,
    /// Pendulum bob
    pub ring: Ring,
    /// Attempt phase
    pub mode: AttemptMode,
    /// Match score
    pub score: MatchScore,
    /// Guards against double-scoring one capture; cleared per attempt
    pub score_latch: bool,
    /// Pointer grab active (drag only applies while true)
    pub dragging: bool,
    /// Tick the current attempt was released at
    pub attempt_start_tick: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending one-shot actions
    pub pending: Vec<Scheduled>,
    /// Events since the last drain (not part of persisted state)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl SimState {
    /// Create a fresh match with the pivot at `anchor`
    pub fn new(anchor: Vec2, mut config: Config) -> Self {
        config.sanitize();
        let mut state = Self {
            anchor,
            config,
            hook_tip: Vec2::ZERO,
            ring: Ring::default(),
            mode: AttemptMode::Idle,
            score: MatchScore::default(),
            score_latch: false,
            dragging: false,
            attempt_start_tick: 0,
            time_ticks: 0,
            pending: Vec::new(),
            events: Vec::new(),
        };
        state.position_hook_tip();
        state.ring.hold_at(state.config.hold_start_angle);
        state
    }

    /// Recompute the hook tip from the current config
    pub fn position_hook_tip(&mut self) {
        let r = self.config.rope_len - self.config.hook_inset;
        self.hook_tip = ring_pos_from_angle(self.anchor, r, self.config.hook_angle);
    }

    /// Current ring position, derived from the angle
    pub fn ring_pos(&self) -> Vec2 {
        ring_pos_from_angle(self.anchor, self.config.rope_len, self.ring.angle)
    }

    /// Full match reset: scores, sets, mode, ring, pending timers
    pub fn reset_match(&mut self) {
        self.score = MatchScore::default();
        self.ring.hold_at(self.config.hold_start_angle);
        self.mode = AttemptMode::Idle;
        self.score_latch = false;
        self.dragging = false;
        self.pending.clear();
        log::info!("match reset");
    }

    /// Queue an action `delay` ticks from now
    pub fn schedule(&mut self, action: ScheduledAction, delay: u64) {
        self.pending.push(Scheduled {
            fire_at_tick: self.time_ticks + delay,
            action,
        });
    }

    /// Snapshot for the presentation layer
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            mode: self.mode,
            ring_angle: self.ring.angle,
            ring_pos: self.ring_pos(),
            hook_tip: self.hook_tip,
            score: self.score,
            time_ticks: self.time_ticks,
        }
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_tip_placement() {
        let state = SimState::new(Vec2::new(400.0, 90.0), Config::default());
        let r = state.config.rope_len - state.config.hook_inset;
        let expected = Vec2::new(
            400.0 + r * state.config.hook_angle.sin(),
            90.0 + r * state.config.hook_angle.cos(),
        );
        assert!((state.hook_tip - expected).length() < 1e-4);
        // Hook angle is negative, so the tip sits left of the anchor
        assert!(state.hook_tip.x < 400.0);
    }

    #[test]
    fn test_ring_pos_derived_from_angle() {
        let mut state = SimState::new(Vec2::new(400.0, 90.0), Config::default());
        state.ring.hold_at(0.0);
        let pos = state.ring_pos();
        assert!((pos.x - 400.0).abs() < 1e-4);
        assert!((pos.y - (90.0 + state.config.rope_len)).abs() < 1e-4);
    }

    #[test]
    fn test_reset_match_clears_everything() {
        let mut state = SimState::new(Vec2::new(400.0, 90.0), Config::default());
        state.score.add_point(Player::One);
        state.score.add_set(Player::Two);
        state.score.serving = Player::Two;
        state.score_latch = true;
        state.mode = AttemptMode::Flying;
        state.schedule(ScheduledAction::ApplyScore, 7);

        state.reset_match();
        assert_eq!(state.score, MatchScore::default());
        assert_eq!(state.mode, AttemptMode::Idle);
        assert!(!state.score_latch);
        assert!(state.pending.is_empty());
        assert_eq!(state.ring.angle, state.config.hold_start_angle);
    }
}
