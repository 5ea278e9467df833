//! Slot reel library.
//!
//! A single slot-machine reel built on bevy_ecs: a looping strip of symbols
//! that spins with a back-out tween, lands a chosen symbol under the arrow
//! marker and is drawn as a pseudo-3D cylinder. Exposes the ECS components,
//! resources, systems and events for the host binary and integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
