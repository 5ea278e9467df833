//! Host input wiring.
//!
//! Space spins every reel; a left click spins the reel under the pointer.
//! Requests go through [`SpinReelEvent`], so a reel that is already spinning
//! ignores them.

use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton, RaylibHandle};

use crate::components::mapposition::MapPosition;
use crate::components::reel::Reel;
use crate::events::reel::SpinReelEvent;

pub fn reel_input_system(
    rl: NonSend<RaylibHandle>,
    reels: Query<(Entity, &Reel, &MapPosition)>,
    mut commands: Commands,
) {
    let space = rl.is_key_pressed(KeyboardKey::KEY_SPACE);
    let click = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
    if !space && !click {
        return;
    }
    let mouse = rl.get_mouse_position();

    for (entity, reel, root) in reels.iter() {
        let (mx, my, mw, mh) = reel.config.mask_rect();
        let x = root.pos.x + mx;
        let y = root.pos.y + my;
        let hit = mouse.x >= x && mouse.x <= x + mw && mouse.y >= y && mouse.y <= y + mh;
        if space || (click && hit) {
            commands.trigger(SpinReelEvent { entity });
        }
    }
}
