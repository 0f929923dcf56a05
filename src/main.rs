//! Headless demo driver
//!
//! Runs a few scripted attempts against the simulation core and logs the
//! event stream. Useful for eyeballing tuning changes without a frontend:
//!
//! ```sh
//! RUST_LOG=debug cargo run
//! ```

use glam::Vec2;

use hook_toss::consts::MAX_ATTEMPT_TICKS;
use hook_toss::sim::{AttemptMode, GameEvent, Intent, SimState, apply_intent, tick};
use hook_toss::{Config, ring_pos_from_angle};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let anchor = Vec2::new(400.0, 90.0);
    let mut state = SimState::new(anchor, Config::load());
    log::info!(
        "anchor {:?}, hook tip {:?}, capture radius {}",
        state.anchor,
        state.hook_tip,
        state.config.capture_r
    );

    // Each entry is the angle the player drags to before letting go. The
    // third throw aims straight at the hook side.
    let aims = [0.95_f32, 0.40, -0.60, 0.80, 0.95, 0.30];

    for (attempt, aim) in aims.iter().enumerate() {
        apply_intent(&mut state, Intent::Ready);
        let grab = state.ring_pos();
        apply_intent(&mut state, Intent::BeginDrag(grab));
        let target = ring_pos_from_angle(state.anchor, state.config.rope_len, *aim);
        apply_intent(&mut state, Intent::MoveDrag(target));
        apply_intent(&mut state, Intent::EndDrag);
        apply_intent(&mut state, Intent::Release);

        let mut ticks = 0u64;
        while state.mode != AttemptMode::Idle && ticks < MAX_ATTEMPT_TICKS * 2 {
            tick(&mut state);
            ticks += 1;
            for event in state.drain_events() {
                report(attempt, ticks, event);
            }
        }

        // Drain any announce/reset timer before the next attempt arms
        while !state.pending.is_empty() {
            tick(&mut state);
            for event in state.drain_events() {
                report(attempt, ticks, event);
            }
        }
    }

    let snap = state.snapshot();
    log::info!(
        "final score {}-{} (sets {}-{}), {} to serve",
        snap.score.p1,
        snap.score.p2,
        snap.score.sets1,
        snap.score.sets2,
        snap.score.serving.as_str()
    );
}

fn report(attempt: usize, ticks: u64, event: GameEvent) {
    match event {
        GameEvent::Captured => {
            log::info!("attempt {attempt}: captured after {ticks} ticks");
        }
        GameEvent::Scored { player, points } => {
            log::info!(
                "attempt {attempt}: point to {} ({}-{})",
                player.as_str(),
                points.0,
                points.1
            );
        }
        GameEvent::GameWon { player, sets } => {
            log::info!(
                "attempt {attempt}: game to {} (sets {}-{})",
                player.as_str(),
                sets.0,
                sets.1
            );
        }
        GameEvent::MatchWon { player, sets } => {
            log::info!(
                "attempt {attempt}: match to {} ({}-{})",
                player.as_str(),
                sets.0,
                sets.1
            );
        }
        GameEvent::AttemptEnded { reason } => {
            log::info!("attempt {attempt}: ended after {ticks} ticks ({reason:?})");
        }
    }
}
