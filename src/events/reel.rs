//! Reel events.
//!
//! - [`SpinReelEvent`] asks a reel to spin. The [`spin_reel_observer`] applies
//!   the same guard as [`spin_reel`]: a reel that is already spinning ignores it.
//! - [`ReelStoppedEvent`] is triggered once per spin, after the reel has come
//!   to rest and its completion callback has run.
//! - [`ReelTickEvent`] is triggered on every scheduler tick of a tween created
//!   with tick notifications.
//!
//! [`spin_reel_observer`]: crate::systems::reelspin::spin_reel_observer
//! [`spin_reel`]: crate::game::spin_reel

use bevy_ecs::prelude::*;

/// Request a spin of the reel on `entity`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinReelEvent {
    pub entity: Entity,
}

/// A reel came to rest.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReelStoppedEvent {
    pub entity: Entity,
    /// Catalog index under the arrow marker.
    pub symbol: usize,
}

/// A reel tween advanced.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ReelTickEvent {
    pub entity: Entity,
    pub position: f64,
    pub phase: f32,
}
