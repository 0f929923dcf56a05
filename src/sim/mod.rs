//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per rendered frame, per-tick units
//! - No randomness (the funnel assist is a fixed deterministic nudge)
//! - No rendering or platform dependencies
//! - Deferred work runs as scheduled actions against the tick counter

pub mod capture;
pub mod pendulum;
pub mod scoring;
pub mod state;
pub mod tick;

pub use capture::{CaptureOutcome, check_capture};
pub use pendulum::integrate;
pub use scoring::{PointOutcome, game_winner, match_winner, record_point, sets_to_win, win_by_two};
pub use state::{
    AttemptMode, EndReason, GameEvent, MatchScore, Player, Ring, Scheduled, ScheduledAction,
    SimState, StateSnapshot,
};
pub use tick::{Intent, apply_intent, tick};
