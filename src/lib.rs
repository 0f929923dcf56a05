//! Hook Toss - a two-player hook-and-ring toss game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pendulum physics, capture, scoring)
//! - `config`: Tunable gameplay constants with snapshot persistence
//!
//! The crate is the simulation core only. Rendering, HUD, and input plumbing
//! live in an outer layer that feeds [`sim::Intent`]s in and reads
//! [`sim::StateSnapshot`]s and [`sim::GameEvent`]s back out.

pub mod config;
pub mod sim;

pub use config::{Config, ConfigPatch, Preset};
pub use sim::{AttemptMode, GameEvent, Intent, Player, SimState};

use glam::Vec2;

/// Game rule constants
pub mod consts {
    /// Simulated ticks per second (one tick per rendered frame by design)
    pub const TICK_HZ: u32 = 60;

    /// Hard swing rail, radians from straight down (~±89°)
    pub const MAX_SWING: f32 = 1.55;
    /// Velocity factor applied when the ring bounces off the rail
    pub const RAIL_BOUNCE: f32 = -0.2;

    /// Angular speed below which the ring counts as stopped
    pub const STOP_VEL: f32 = 0.0025;
    /// Angle from down below which the ring counts as hanging
    pub const STOP_NEAR: f32 = 0.05;
    /// Attempt timeout in ticks (~5.5 s of simulated time)
    pub const MAX_ATTEMPT_TICKS: u64 = 330;

    /// Ring radius, for grab detection
    pub const RING_RADIUS: f32 = 14.0;
    /// Extra grab slop around the ring
    pub const GRAB_PAD: f32 = 16.0;

    /// Release velocity never exceeds this magnitude
    pub const RELEASE_CLAMP: f32 = 0.6;

    /// Funnel assist window as a multiple of the capture radius
    pub const FUNNEL_WINDOW: f32 = 1.35;
    /// Funnel assist nudge, radians per tick
    pub const FUNNEL_NUDGE: f32 = 0.0009;
    /// Any motion faster than this counts as "toward the tip"
    pub const FUNNEL_MIN_SPEED: f32 = 0.01;

    /// Freeze-frame delay between capture and the score applying (~110 ms)
    pub const CAPTURE_SETTLE_TICKS: u64 = 7;
    /// Delay between the match-winner announcement and the reset (~90 ms)
    pub const ANNOUNCE_TICKS: u64 = 5;

    /// Points needed to win a game (win-by-two, no ceiling)
    pub const TARGET_POINTS: u32 = 21;
    /// Games in the match (best-of)
    pub const BEST_OF: u32 = 3;
}

/// Ring position for a given rope angle (0 = straight down, +x toward +angle)
#[inline]
pub fn ring_pos_from_angle(anchor: Vec2, rope_len: f32, angle: f32) -> Vec2 {
    Vec2::new(
        anchor.x + rope_len * angle.sin(),
        anchor.y + rope_len * angle.cos(),
    )
}

/// Rope angle for a screen point, measured from straight down at the anchor
#[inline]
pub fn angle_from_point(anchor: Vec2, point: Vec2) -> f32 {
    (point.x - anchor.x).atan2(point.y - anchor.y)
}
