//! Pendulum motion integrator
//!
//! Semi-implicit Euler in per-tick units: one step per rendered frame, no dt
//! factor. Gravity and damping come straight from the live config.

use crate::consts::{MAX_SWING, RAIL_BOUNCE};
use crate::sim::state::Ring;

/// Advance the ring by one tick under gravity and damping
pub fn integrate(ring: &mut Ring, gravity: f32, damping: f32) {
    ring.ang_acc = -gravity * ring.angle.sin();
    ring.ang_vel = (ring.ang_vel + ring.ang_acc) * damping;
    ring.angle += ring.ang_vel;
    apply_rail(ring);
}

/// Soft bounce off the swing limit. A hard rail: the angle never leaves
/// `[-MAX_SWING, MAX_SWING]` after a step.
fn apply_rail(ring: &mut Ring) {
    if ring.angle > MAX_SWING {
        ring.angle = MAX_SWING;
        ring.ang_vel *= RAIL_BOUNCE;
    } else if ring.angle < -MAX_SWING {
        ring.angle = -MAX_SWING;
        ring.ang_vel *= RAIL_BOUNCE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gravity_pulls_toward_down() {
        let mut ring = Ring {
            angle: 0.5,
            ang_vel: 0.0,
            ang_acc: 0.0,
        };
        integrate(&mut ring, 0.004, 0.999);
        // Positive displacement gets negative acceleration
        assert!(ring.ang_acc < 0.0);
        assert!(ring.ang_vel < 0.0);
        assert!(ring.angle < 0.5);
    }

    #[test]
    fn test_equilibrium_is_stable() {
        let mut ring = Ring::default();
        for _ in 0..100 {
            integrate(&mut ring, 0.004, 0.999);
        }
        assert_eq!(ring.angle, 0.0);
        assert_eq!(ring.ang_vel, 0.0);
    }

    #[test]
    fn test_rail_clamps_and_bounces() {
        let mut ring = Ring {
            angle: MAX_SWING - 0.001,
            ang_vel: 0.5,
            ang_acc: 0.0,
        };
        integrate(&mut ring, 0.004, 0.999);
        assert_eq!(ring.angle, MAX_SWING);
        // Velocity inverted and damped by the bounce
        assert!(ring.ang_vel < 0.0);
        assert!(ring.ang_vel.abs() < 0.5);
    }

    #[test]
    fn test_damping_bleeds_energy() {
        let mut ring = Ring {
            angle: 0.9,
            ang_vel: 0.0,
            ang_acc: 0.0,
        };
        let mut peak = 0.0_f32;
        for _ in 0..2000 {
            integrate(&mut ring, 0.004, 0.995);
            peak = peak.max(ring.angle.abs());
        }
        // With heavy damping the swing decays well below its start
        assert!(ring.angle.abs() < 0.9);
        assert!(peak <= 0.9 + 1e-3);
    }

    #[test]
    fn test_trajectory_is_deterministic() {
        let start = Ring {
            angle: 0.95,
            ang_vel: -0.285,
            ang_acc: 0.0,
        };
        let mut a = start;
        let mut b = start;
        for _ in 0..1000 {
            integrate(&mut a, 0.004, 0.999);
            integrate(&mut b, 0.004, 0.999);
        }
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_rail_never_exceeded(
            angle in -1.55f32..1.55,
            ang_vel in -0.6f32..0.6,
            gravity in 0.001f32..0.01,
            damping in 0.985f32..1.0,
            ticks in 1usize..500,
        ) {
            let mut ring = Ring { angle, ang_vel, ang_acc: 0.0 };
            for _ in 0..ticks {
                integrate(&mut ring, gravity, damping);
                prop_assert!(ring.angle.abs() <= MAX_SWING);
            }
        }
    }
}
