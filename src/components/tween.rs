//! Tween component for the reel scroll position.
//!
//! [`TweenReelPosition`] is a time-bounded interpolation of
//! [`Reel::position`](super::reel::Reel::position) towards a target. It is
//! inserted on the reel entity when a spin starts and removed when its phase
//! reaches 1. See [`crate::systems::tween`] for the update system.

use bevy_ecs::prelude::Component;

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
    /// Cubic deceleration that overshoots the end by an amount set by `k`
    /// before settling. `BackOut(0.0)` is the same curve as `CubicOut`.
    BackOut(f32),
}

/// Animates a reel's scroll position from `from` to `to`.
///
/// Phase is measured against [`WorldTime::elapsed`](crate::resources::worldtime::WorldTime)
/// from `start`, not accumulated per frame.
#[derive(Component, Clone, Debug)]
pub struct TweenReelPosition {
    /// Position when the tween was created.
    pub from: f64,
    /// Position at completion.
    pub to: f64,
    /// World time at creation, in seconds.
    pub start: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Emit a [`ReelTickEvent`](crate::events::reel::ReelTickEvent) every tick.
    pub notify_ticks: bool,
}

impl TweenReelPosition {
    pub fn new(from: f64, to: f64, start: f32, duration: f32) -> Self {
        TweenReelPosition {
            from,
            to,
            start,
            duration,
            easing: Easing::Linear,
            notify_ticks: false,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_tick_events(mut self) -> Self {
        self.notify_ticks = true;
        self
    }

    /// Normalized progress at world time `now`, clamped to `[0, 1]`.
    pub fn phase(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_tween_new() {
        let tw = TweenReelPosition::new(3.0, 25.0, 1.5, 2.0);
        assert_eq!(tw.from, 3.0);
        assert_eq!(tw.to, 25.0);
        assert!(approx_eq(tw.start, 1.5));
        assert!(approx_eq(tw.duration, 2.0));
        assert_eq!(tw.easing, Easing::Linear);
        assert!(!tw.notify_ticks);
    }

    #[test]
    fn test_tween_builder_chaining() {
        let tw = TweenReelPosition::new(0.0, 1.0, 0.0, 1.0)
            .with_easing(Easing::BackOut(0.5))
            .with_tick_events();
        assert_eq!(tw.easing, Easing::BackOut(0.5));
        assert!(tw.notify_ticks);
    }

    #[test]
    fn test_phase_is_time_based() {
        let tw = TweenReelPosition::new(0.0, 100.0, 10.0, 4.0);
        assert!(approx_eq(tw.phase(10.0), 0.0));
        assert!(approx_eq(tw.phase(12.0), 0.5));
        assert!(approx_eq(tw.phase(14.0), 1.0));
        assert!(approx_eq(tw.phase(99.0), 1.0));
        assert!(approx_eq(tw.phase(9.0), 0.0));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let tw = TweenReelPosition::new(0.0, 10.0, 5.0, 0.0);
        assert!(approx_eq(tw.phase(5.0), 1.0));
    }
}
