//! Per-frame simulation tick and intent handling
//!
//! Intents from the presentation layer apply synchronously between ticks;
//! `tick` advances one frame of physics while an attempt is in flight. The
//! freeze-then-score and announce-then-reset sequences run as scheduled
//! one-shot actions against the simulated tick counter, so tests advance
//! them by ticking rather than by waiting on a wall clock.

use glam::Vec2;

use super::capture::{CaptureOutcome, check_capture};
use super::pendulum::integrate;
use super::scoring::{PointOutcome, record_point};
use super::state::{
    AttemptMode, EndReason, GameEvent, Scheduled, ScheduledAction, SimState,
};
use crate::config::ConfigPatch;
use crate::angle_from_point;
use crate::consts::*;

/// User intents forwarded by the presentation layer.
///
/// Intents that do not apply to the current mode are silently ignored;
/// sending `Release` while idle is not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Arm the next attempt (idle only)
    Ready,
    /// Let go of the held ring (ready only)
    Release,
    /// Full match reset
    Reset,
    /// Pointer down at a screen point; grabs the ring if close enough
    BeginDrag(Vec2),
    /// Pointer moved while grabbing; aims the held ring
    MoveDrag(Vec2),
    /// Pointer released
    EndDrag,
    /// Merge a partial configuration update
    Configure(ConfigPatch),
}

/// Apply one intent. Runs synchronously to completion before the next tick.
pub fn apply_intent(state: &mut SimState, intent: Intent) {
    match intent {
        Intent::Ready => ready(state),
        Intent::Release => release(state),
        Intent::Reset => state.reset_match(),
        Intent::BeginDrag(point) => begin_drag(state, point),
        Intent::MoveDrag(point) => move_drag(state, point),
        Intent::EndDrag => state.dragging = false,
        Intent::Configure(patch) => configure(state, &patch),
    }
}

fn ready(state: &mut SimState) {
    // A pending match reset must fire before the next attempt can arm
    if state.mode != AttemptMode::Idle || !state.pending.is_empty() {
        return;
    }
    state.mode = AttemptMode::Ready;
    state.ring.hold_at(state.config.hold_start_angle);
    log::debug!("{} armed", state.score.serving.as_str());
}

fn release(state: &mut SimState) {
    if state.mode != AttemptMode::Ready {
        return;
    }
    // Displacement from the down axis sets the throw strength
    let power = (-state.ring.angle * state.config.release_scale)
        .clamp(-RELEASE_CLAMP, RELEASE_CLAMP);
    state.ring.ang_vel = power;
    state.mode = AttemptMode::Flying;
    state.attempt_start_tick = state.time_ticks;
    state.dragging = false;
    log::debug!(
        "{} released at {:.3} rad, power {:.3}",
        state.score.serving.as_str(),
        state.ring.angle,
        power
    );
}

fn begin_drag(state: &mut SimState, point: Vec2) {
    if state.mode != AttemptMode::Ready {
        return;
    }
    if point.distance(state.ring_pos()) <= RING_RADIUS + GRAB_PAD {
        state.dragging = true;
        state.ring.ang_vel = 0.0;
    }
}

fn move_drag(state: &mut SimState, point: Vec2) {
    if !state.dragging || state.mode != AttemptMode::Ready {
        return;
    }
    let angle = angle_from_point(state.anchor, point).clamp(-MAX_SWING, MAX_SWING);
    state.ring.hold_at(angle);
}

fn configure(state: &mut SimState, patch: &ConfigPatch) {
    state.config.merge(patch);
    state.position_hook_tip();
    if state.mode != AttemptMode::Flying {
        state.ring.hold_at(state.config.hold_start_angle);
    }
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState) {
    state.time_ticks += 1;
    fire_due_actions(state);

    if state.mode != AttemptMode::Flying {
        return;
    }

    // Ring is frozen on the hook while the settle delay runs
    if state.score_latch {
        return;
    }

    integrate(&mut state.ring, state.config.gravity, state.config.damping);

    let ring_pos = state.ring_pos();
    match check_capture(
        &mut state.ring,
        ring_pos,
        state.hook_tip,
        state.config.capture_r,
    ) {
        CaptureOutcome::Captured => {
            state.score_latch = true;
            state.ring.ang_vel = 0.0;
            state.events.push(GameEvent::Captured);
            state.schedule(ScheduledAction::ApplyScore, CAPTURE_SETTLE_TICKS);
            log::info!("captured by {}", state.score.serving.as_str());
            return;
        }
        CaptureOutcome::Nudged | CaptureOutcome::Clear => {}
    }

    let elapsed = state.time_ticks - state.attempt_start_tick;
    let settled =
        state.ring.ang_vel.abs() < STOP_VEL && state.ring.angle.abs() < STOP_NEAR;
    if elapsed > MAX_ATTEMPT_TICKS {
        finish_attempt(state, EndReason::Timeout, true);
    } else if settled {
        finish_attempt(state, EndReason::Settled, true);
    }
}

/// Run every scheduled action that has come due, in insertion order.
/// Actions revalidate mode/latch so a stale firing is a no-op.
fn fire_due_actions(state: &mut SimState) {
    let now = state.time_ticks;
    let due: Vec<Scheduled> = state
        .pending
        .iter()
        .copied()
        .filter(|s| s.fire_at_tick <= now)
        .collect();
    state.pending.retain(|s| s.fire_at_tick > now);

    for scheduled in due {
        match scheduled.action {
            ScheduledAction::ApplyScore => apply_score(state),
            ScheduledAction::ResetMatch => state.reset_match(),
        }
    }
}

/// The settle delay after a capture has elapsed: count the point and
/// resolve the attempt.
fn apply_score(state: &mut SimState) {
    if state.mode != AttemptMode::Flying || !state.score_latch {
        return;
    }

    let scorer = state.score.serving;
    // Points as they stand the moment the point lands, before any game reset
    let mut landed = state.score;
    landed.add_point(scorer);
    let points = (landed.p1, landed.p2);

    let outcome = record_point(&mut state.score, scorer, TARGET_POINTS, BEST_OF);
    state.events.push(GameEvent::Scored { player: scorer, points });
    log::info!("{} scores ({}-{})", scorer.as_str(), points.0, points.1);

    let sets = (state.score.sets1, state.score.sets2);
    match outcome {
        PointOutcome::GameContinues => {
            finish_attempt(state, EndReason::Captured, true);
        }
        PointOutcome::GameWon(winner) => {
            state.events.push(GameEvent::GameWon { player: winner, sets });
            // Serve already passed to the game's loser; no per-attempt flip
            finish_attempt(state, EndReason::Captured, false);
        }
        PointOutcome::MatchWon(winner) => {
            state.events.push(GameEvent::GameWon { player: winner, sets });
            state.events.push(GameEvent::MatchWon { player: winner, sets });
            state.schedule(ScheduledAction::ResetMatch, ANNOUNCE_TICKS);
            finish_attempt(state, EndReason::Captured, false);
            log::info!(
                "match won by {} ({}-{})",
                winner.as_str(),
                sets.0,
                sets.1
            );
        }
    }
}

/// Resolve the attempt: back to idle, ring re-held, latch cleared, and the
/// turn handed over unless the scoring engine already reassigned serve.
fn finish_attempt(state: &mut SimState, reason: EndReason, alternate_serve: bool) {
    state.mode = AttemptMode::Idle;
    state.score_latch = false;
    state.dragging = false;
    if alternate_serve {
        state.score.serving = state.score.serving.other();
    }
    state.ring.hold_at(state.config.hold_start_angle);
    state.events.push(GameEvent::AttemptEnded { reason });
    log::debug!(
        "attempt ended ({:?}), {} to serve",
        reason,
        state.score.serving.as_str()
    );
}
