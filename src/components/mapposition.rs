use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// 2D placement. On a reel root this is the screen position of the reel;
/// on a reel symbol it is relative to the root.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
