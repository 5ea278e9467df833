//! Tween scheduler.
//!
//! [`tween_reel_position_system`] advances every [`TweenReelPosition`] once per
//! frame. Phase is `(now - start) / duration` clamped to 1, where `now` is
//! [`WorldTime::elapsed`], so a spin lasts the same wall-clock time at any
//! frame rate. The eased value is written to [`Reel::position`]; at phase 1
//! the position snaps exactly to the target, the tween is removed and the
//! reel's spin is completed.

use bevy_ecs::prelude::*;

use crate::components::reel::Reel;
use crate::components::tween::{Easing, TweenReelPosition};
use crate::events::reel::ReelTickEvent;
use crate::resources::worldtime::WorldTime;
use crate::systems::reelspin::finish_spin;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve. Only [`Easing::BackOut`] leaves [0.0, 1.0] on the way.
pub fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
        Easing::BackOut(k) => {
            let p = t - 1.0;
            p * p * ((k + 1.0) * p + k) + 1.0
        }
    }
}

/// Linearly interpolate between two positions.
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Position and phase of a tween at world time `now`.
pub fn sample(tw: &TweenReelPosition, now: f32) -> (f64, f32) {
    let phase = tw.phase(now);
    if phase >= 1.0 {
        return (tw.to, 1.0);
    }
    let eased = ease(tw.easing, phase) as f64;
    (lerp_f64(tw.from, tw.to, eased), phase)
}

/// Advance reel position tweens and complete the ones that reached phase 1.
pub fn tween_reel_position_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Reel, &TweenReelPosition)>,
    mut commands: Commands,
) {
    let now = world_time.elapsed;
    for (entity, mut reel, tw) in query.iter_mut() {
        let (position, phase) = sample(tw, now);
        reel.position = position;

        if tw.notify_ticks {
            commands.trigger(ReelTickEvent {
                entity,
                position,
                phase,
            });
        }

        if phase >= 1.0 {
            commands.entity(entity).remove::<TweenReelPosition>();
            finish_spin(entity, &mut reel, &mut commands);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::BackOut(0.0),
        Easing::BackOut(0.5),
    ];

    // ==================== EASING FUNCTION TESTS ====================

    #[test]
    fn test_ease_all_types_at_zero() {
        for easing in ALL {
            assert!(
                approx_eq(ease(easing, 0.0), 0.0),
                "{:?} at t=0.0 should be 0.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_all_types_at_one() {
        for easing in ALL {
            assert!(
                approx_eq(ease(easing, 1.0), 1.0),
                "{:?} at t=1.0 should be 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_clamps_input() {
        for easing in ALL {
            assert!(approx_eq(ease(easing, -0.5), 0.0), "{:?} below 0", easing);
            assert!(approx_eq(ease(easing, 1.5), 1.0), "{:?} above 1", easing);
        }
    }

    #[test]
    fn test_ease_linear_midpoint() {
        assert!(approx_eq(ease(Easing::Linear, 0.5), 0.5));
        assert!(approx_eq(ease(Easing::Linear, 0.25), 0.25));
    }

    #[test]
    fn test_ease_quad_and_cubic() {
        assert!(approx_eq(ease(Easing::QuadIn, 0.5), 0.25));
        assert!(approx_eq(ease(Easing::QuadOut, 0.5), 0.75));
        assert!(approx_eq(ease(Easing::QuadInOut, 0.75), 0.875));
        assert!(approx_eq(ease(Easing::CubicIn, 0.5), 0.125));
        assert!(approx_eq(ease(Easing::CubicOut, 0.5), 0.875)); // (-0.5)^3 + 1
        assert!(approx_eq(ease(Easing::CubicInOut, 0.25), 0.0625));
    }

    #[test]
    fn test_back_out_zero_is_cubic_out() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert!(approx_eq(
                ease(Easing::BackOut(0.0), t),
                ease(Easing::CubicOut, t)
            ));
        }
    }

    #[test]
    fn test_back_out_overshoots_then_settles() {
        let k = 0.5;
        let peak = (0..=100)
            .map(|i| ease(Easing::BackOut(k), i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "BackOut({}) should overshoot, peak = {}", k, peak);
        assert!(approx_eq(ease(Easing::BackOut(k), 1.0), 1.0));
    }

    #[test]
    fn test_back_out_formula() {
        // t = 0.5, k = 1: (-0.5)^2 * (2 * -0.5 + 1) + 1 = 1
        assert!(approx_eq(ease(Easing::BackOut(1.0), 0.5), 1.0));
        // t = 0.5, k = 0.5: 0.25 * (1.5 * -0.5 + 0.5) + 1 = 0.9375
        assert!(approx_eq(ease(Easing::BackOut(0.5), 0.5), 0.9375));
    }

    #[test]
    fn test_ease_monotonicity_without_overshoot() {
        for easing in ALL.iter().copied().filter(|e| *e != Easing::BackOut(0.5)) {
            let mut prev = ease(easing, 0.0);
            for i in 1..=100 {
                let t = i as f32 / 100.0;
                let curr = ease(easing, t);
                assert!(curr >= prev - EPSILON, "{:?} not monotonic at {}", easing, t);
                prev = curr;
            }
        }
    }

    // ==================== INTERPOLATION TESTS ====================

    #[test]
    fn test_lerp_f64() {
        assert_eq!(lerp_f64(0.0, 100.0, 0.5), 50.0);
        assert_eq!(lerp_f64(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp_f64(-10.0, 10.0, 0.25), -5.0);
        assert_eq!(lerp_f64(3.0, 17.0, 1.0), 17.0);
    }

    #[test]
    fn test_sample_linear_midpoint() {
        let tw = TweenReelPosition::new(0.0, 100.0, 0.0, 2.0);
        let (value, phase) = sample(&tw, 1.0);
        assert!((value - 50.0).abs() < 1e-9);
        assert!(approx_eq(phase, 0.5));
    }

    #[test]
    fn test_sample_snaps_to_target_at_completion() {
        let tw = TweenReelPosition::new(0.1, 13.0, 0.0, 0.3).with_easing(Easing::BackOut(0.2));
        let (value, phase) = sample(&tw, 0.3 + 1e-3);
        assert_eq!(value, 13.0);
        assert_eq!(phase, 1.0);
    }
}
