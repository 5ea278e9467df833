//! Visible symbol of a reel.
//!
//! Each reel spawns `element_count + 1` entities with a [`ReelSymbol`], a
//! [`Sprite`](super::sprite::Sprite) and a [`MapPosition`](super::mapposition::MapPosition)
//! local to the reel root. The projection system rewrites all of them every
//! frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct ReelSymbol {
    /// Visible slot `j`, counted from the left edge of the strip.
    pub slot: usize,
    /// Catalog index currently bound to the sprite.
    pub symbol: Option<usize>,
    /// Scale applied to the sprite's natural size.
    pub scale: Vector2,
    /// False once the symbol has rotated off the visible face.
    pub visible: bool,
    /// Horizontal shear in radians.
    pub skew: f32,
}

impl ReelSymbol {
    pub fn new(slot: usize) -> Self {
        Self {
            slot,
            symbol: None,
            scale: Vector2 { x: 1.0, y: 1.0 },
            visible: true,
            skew: 0.0,
        }
    }
}
