//! Capture detection
//!
//! Compares the ring position against the hook tip. Inside the capture radius
//! the ring snaps on; in a band just outside it a small deterministic
//! velocity nudge (the "funnel") biases near-misses onto the hook. No
//! randomness anywhere: identical trajectories give identical outcomes.

use glam::Vec2;

use crate::consts::{FUNNEL_MIN_SPEED, FUNNEL_NUDGE, FUNNEL_WINDOW};
use crate::sim::state::Ring;

/// Result of one capture check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Ring within the capture radius; caller freezes it and latches
    Captured,
    /// Near-miss nudge applied to the ring velocity
    Nudged,
    /// Nothing near the hook
    Clear,
}

/// Check the ring against the hook tip, applying the funnel nudge in the
/// near-miss band. Call only while flying with the score latch clear.
pub fn check_capture(ring: &mut Ring, ring_pos: Vec2, tip: Vec2, capture_r: f32) -> CaptureOutcome {
    let d = ring_pos.distance(tip);

    if d < capture_r {
        return CaptureOutcome::Captured;
    }

    if d < capture_r * FUNNEL_WINDOW && moving_toward_tip(ring, ring_pos, tip) {
        let dx = tip.x - ring_pos.x;
        let dy = tip.y - ring_pos.y;
        // Nudge along the current swing direction; at rest fall back to the
        // local tangential direction toward the tip
        let tangent = if ring.ang_vel != 0.0 {
            ring.ang_vel.signum()
        } else if dx * ring.angle.cos() - dy * ring.angle.sin() >= 0.0 {
            1.0
        } else {
            -1.0
        };
        ring.ang_vel += tangent * FUNNEL_NUDGE;
        return CaptureOutcome::Nudged;
    }

    CaptureOutcome::Clear
}

/// Horizontal closing test, or any sufficiently fast motion
fn moving_toward_tip(ring: &Ring, ring_pos: Vec2, tip: Vec2) -> bool {
    (ring_pos.x - tip.x) * ring.ang_vel < 0.0 || ring.ang_vel.abs() > FUNNEL_MIN_SPEED
}
