use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::reel::Reel;
use crate::components::reelsymbol::ReelSymbol;
use crate::components::sprite::Sprite;
use crate::resources::texturestore::TextureStore;
use crate::systems::reelprojection::project_slot;

/// Draw every reel's visible symbols clipped to the reel mask.
///
/// Symbol positions are local to the reel root, so the root's MapPosition is
/// added here. Skewed symbols are drawn under an rlgl shear matrix since
/// draw_texture_pro only knows about rotation.
pub fn render_reels(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut reels = world.query::<(&Reel, &MapPosition)>();
    let textures = world.resource::<TextureStore>();

    for (reel, root) in reels.iter(world) {
        let (mx, my, mw, mh) = reel.config.mask_rect();
        unsafe {
            ffi::BeginScissorMode(
                (root.pos.x + mx) as i32,
                (root.pos.y + my) as i32,
                mw as i32,
                mh as i32,
            );
        }

        for &entity in reel.symbols.iter() {
            let (Some(reel_symbol), Some(sprite), Some(local)) = (
                world.get::<ReelSymbol>(entity),
                world.get::<Sprite>(entity),
                world.get::<MapPosition>(entity),
            ) else {
                continue;
            };
            if !reel_symbol.visible {
                continue;
            }
            let Some(tex) = textures.get(&sprite.tex_key) else {
                continue;
            };

            let width = sprite.width * reel_symbol.scale.x;
            let height = sprite.height * reel_symbol.scale.y;
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: sprite.width,
                height: sprite.height,
            };
            // scaled pivot, sprites are anchored on their center
            let origin = Vector2 {
                x: sprite.origin.x * reel_symbol.scale.x,
                y: sprite.origin.y * reel_symbol.scale.y,
            };
            let x = root.pos.x + local.pos.x;
            let y = root.pos.y + local.pos.y;

            if reel_symbol.skew == 0.0 {
                let dest = Rectangle {
                    x,
                    y,
                    width,
                    height,
                };
                d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
            } else {
                // column-major: x' = x + tan(skew) * y
                let shear: [f32; 16] = [
                    1.0,
                    0.0,
                    0.0,
                    0.0,
                    reel_symbol.skew.tan(),
                    1.0,
                    0.0,
                    0.0,
                    0.0,
                    0.0,
                    1.0,
                    0.0,
                    0.0,
                    0.0,
                    0.0,
                    1.0,
                ];
                unsafe {
                    ffi::rlPushMatrix();
                    ffi::rlTranslatef(x, y, 0.0);
                    ffi::rlMultMatrixf(shear.as_ptr());
                }
                let dest = Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width,
                    height,
                };
                d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
                unsafe {
                    ffi::rlPopMatrix();
                }
            }
        }

        unsafe {
            ffi::EndScissorMode();
        }
    }
}

/// Draw the mask border and the arrow marker above the arrow slot.
pub fn render_reel_frame(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut reels = world.query::<(&Reel, &MapPosition)>();
    for (reel, root) in reels.iter(world) {
        let config = &reel.config;
        let (mx, my, mw, mh) = config.mask_rect();
        d.draw_rectangle_lines_ex(
            Rectangle {
                x: root.pos.x + mx,
                y: root.pos.y + my,
                width: mw,
                height: mh,
            },
            4.0,
            Color::RED,
        );

        // resting x of the arrow slot
        let arrow = project_slot(config, 0.0, config.arrow_slot_index, 1.0);
        let tip = Vector2 {
            x: root.pos.x + arrow.x,
            y: root.pos.y + my - 5.0,
        };
        d.draw_triangle(
            Vector2 {
                x: tip.x - 15.0,
                y: tip.y - 20.0,
            },
            tip,
            Vector2 {
                x: tip.x + 15.0,
                y: tip.y - 20.0,
            },
            Color::RED,
        );
    }
}
