//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. The host reads it to
//! keep the reel centered when the window is resized.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
