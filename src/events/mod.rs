//! Event types exchanged between the host and the reel systems.
//!
//! Submodules:
//! - [`reel`] – spin requests, per-tick progress and rest notifications
pub mod reel;
