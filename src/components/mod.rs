//! ECS components for reel entities.
//!
//! Submodules overview:
//! - [`mapposition`] – 2D placement of reel roots and their symbols
//! - [`reel`] – reel configuration, wheel sequence and spin state
//! - [`reelsymbol`] – one visible slot of a reel and its projected transform
//! - [`sprite`] – texture key and natural size of a displayed symbol
//! - [`tween`] – time-based interpolation of the reel scroll position

pub mod mapposition;
pub mod reel;
pub mod reelsymbol;
pub mod sprite;
pub mod tween;
