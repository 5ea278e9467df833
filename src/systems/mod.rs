//! Engine systems.
//!
//! This module groups all ECS systems that advance time, reels, input, and
//! rendering.
//!
//! Submodules overview
//! - [`input`] – keyboard and pointer spin triggers
//! - [`reelprojection`] – per-frame cylinder projection of reel symbols
//! - [`reelspin`] – spin targeting and the idle/spinning state machine
//! - [`render`] – draw reels and their marker using Raylib
//! - [`time`] – update simulation time and delta
//! - [`tween`] – easing curves and the reel position tween scheduler

pub mod input;
pub mod reelprojection;
pub mod reelspin;
pub mod render;
pub mod time;
pub mod tween;
