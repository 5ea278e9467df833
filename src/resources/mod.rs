//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, configuration, the symbol
//! catalog and the textures behind it.
//!
//! Overview
//! - `gameconfig` – window settings, manifest path and reel parameters from INI
//! - `reelconfig` – geometry, timing and curvature parameters of a reel
//! - `screensize` – current framebuffer dimensions in pixels
//! - `symbolcatalog` – ordered symbol list, JSON manifest and loader seam
//! - `texturestore` – raylib textures keyed by symbol key
//! - `worldtime` – simulation time and delta
pub mod gameconfig;
pub mod reelconfig;
pub mod screensize;
pub mod symbolcatalog;
pub mod texturestore;
pub mod worldtime;
