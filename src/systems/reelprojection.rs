//! Visual projection of reel symbols.
//!
//! Every frame, each of a reel's `element_count + 1` symbols is placed as if
//! the strip were wrapped around a cylinder seen from the front. Slot `j`
//! shows ring entry `floor(position) + j`; the fractional part of the
//! position slides all slots left by that fraction of an element.
//!
//! For a slot the linear center on the flat strip is mapped to a normalized
//! offset `t` in `[-1, 1]` across the strip and then to an angle
//! `t * max_angle`. From the angle:
//!
//! - `x = center_x + radius * sin(angle) * (1 - edge_narrowing * (1 - cos(angle)))`
//! - `scale_x = base * |cos(angle)|^cylinder_curvature`
//! - `scale_y = base * (1 - vertical_reduction * (1 - cos(angle)))`
//! - `skew = angle * skew_factor`
//!
//! with `radius = center_x / sin(max_angle)`, so slots at the strip edges land
//! exactly on the edges. Slots past `max_angle` are hidden.
//!
//! The projection reads nothing but the reel position, so it is stable while
//! the reel rests. It must run after [`tween_reel_position_system`](super::tween::tween_reel_position_system).

use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::reel::Reel;
use crate::components::reelsymbol::ReelSymbol;
use crate::components::sprite::Sprite;
use crate::resources::reelconfig::ReelConfig;
use crate::resources::symbolcatalog::SymbolCatalog;

/// Screen transform of one slot, relative to the reel root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotPlacement {
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub skew: f32,
    pub angle: f32,
    pub visible: bool,
}

/// Projection angle of visible slot `slot` for a scroll fraction in `[0, 1)`.
pub fn slot_angle(config: &ReelConfig, fraction: f32, slot: usize) -> f32 {
    let distance = config.element_distance();
    let center_x = config.center_x();
    let linear_center = slot as f32 * distance - fraction * distance + distance / 2.0;
    let t = (linear_center - center_x) / center_x;
    t * config.max_angle()
}

/// Placement of a symbol rotated by `angle` on the cylinder.
pub fn project_angle(config: &ReelConfig, angle: f32, base_scale: f32) -> SlotPlacement {
    let cos = angle.cos();
    let narrowing = 1.0 - config.edge_narrowing * (1.0 - cos);
    let skew = if config.skew_factor != 0.0 {
        angle * config.skew_factor
    } else {
        0.0
    };
    SlotPlacement {
        x: config.center_x() + config.radius() * angle.sin() * narrowing,
        y: config.element_height / 2.0,
        scale_x: base_scale * cos.abs().powf(config.cylinder_curvature),
        scale_y: base_scale * (1.0 - config.vertical_reduction * (1.0 - cos)),
        skew,
        angle,
        visible: angle.abs() <= config.max_angle(),
    }
}

/// Placement of visible slot `slot` at scroll `position`.
pub fn project_slot(
    config: &ReelConfig,
    position: f64,
    slot: usize,
    base_scale: f32,
) -> SlotPlacement {
    let fraction = (position - position.floor()) as f32;
    project_angle(config, slot_angle(config, fraction, slot), base_scale)
}

/// Rebind and place every reel symbol from its reel's current position.
pub fn reel_projection_system(
    catalog: Res<SymbolCatalog>,
    reels: Query<&Reel>,
    mut symbols: Query<(&mut ReelSymbol, &mut Sprite, &mut MapPosition)>,
) {
    for reel in reels.iter() {
        let config = &reel.config;
        let base = reel.position.floor() as i64;
        for &entity in reel.symbols.iter() {
            let Ok((mut reel_symbol, mut sprite, mut map_pos)) = symbols.get_mut(entity) else {
                continue;
            };

            let symbol = reel.sequence.symbol_at(base + reel_symbol.slot as i64);
            if reel_symbol.symbol != Some(symbol) {
                if let Some(info) = catalog.get(symbol) {
                    *sprite = Sprite::centered(info.key.clone(), info.width, info.height);
                }
                debug!("Slot {} now shows symbol {}", reel_symbol.slot, symbol);
                reel_symbol.symbol = Some(symbol);
            }

            let base_scale =
                catalog.fit_scale(symbol, config.element_width, config.element_height);
            let placement = project_slot(config, reel.position, reel_symbol.slot, base_scale);

            map_pos.pos = Vector2 {
                x: placement.x,
                y: placement.y,
            };
            reel_symbol.scale = Vector2 {
                x: placement.scale_x,
                y: placement.scale_y,
            };
            reel_symbol.skew = placement.skew;
            reel_symbol.visible = placement.visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn three_wide() -> ReelConfig {
        ReelConfig {
            element_width: 100.0,
            element_height: 80.0,
            element_count: 3,
            arrow_slot_index: 1,
            vertical_reduction: 0.5,
            ..ReelConfig::new()
        }
    }

    #[test]
    fn test_center_slot_faces_front() {
        let config = three_wide();
        let p = project_slot(&config, 0.0, 1, 2.0);
        assert!(approx_eq(p.angle, 0.0));
        assert!(approx_eq(p.x, 150.0));
        assert!(approx_eq(p.y, 40.0));
        assert!(approx_eq(p.scale_x, 2.0));
        assert!(approx_eq(p.scale_y, 2.0));
        assert!(p.visible);
    }

    #[test]
    fn test_slots_are_symmetric_at_rest() {
        let config = three_wide();
        let left = project_slot(&config, 5.0, 0, 1.0);
        let right = project_slot(&config, 5.0, 2, 1.0);
        assert!(approx_eq(left.angle, -right.angle));
        assert!(approx_eq(150.0 - left.x, right.x - 150.0));
        assert!(approx_eq(left.scale_x, right.scale_x));
        assert!(left.scale_x < 1.0);
        assert!(left.scale_y < 1.0);
    }

    #[test]
    fn test_fraction_slides_slots_left() {
        let config = three_wide();
        let at_rest = project_slot(&config, 0.0, 1, 1.0);
        let moving = project_slot(&config, 0.25, 1, 1.0);
        assert!(moving.x < at_rest.x);
        // fraction 0.25 of a 100px element from a 150px half-width
        assert!(approx_eq(moving.angle, -25.0 / 150.0 * FRAC_PI_4));
    }

    #[test]
    fn test_negative_position_uses_positive_fraction() {
        let config = three_wide();
        let a = project_slot(&config, -0.75, 1, 1.0);
        let b = project_slot(&config, 0.25, 1, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_strip_edge_maps_to_mask_edge() {
        let config = three_wide();
        let p = project_angle(&config, config.max_angle(), 1.0);
        assert!(approx_eq(p.x, 300.0));
        assert!(p.visible);
    }

    #[test]
    fn test_visibility_cutoff() {
        let config = ReelConfig {
            curvature: true,
            ..three_wide()
        };
        let max = config.max_angle();

        let outside = project_angle(&config, max + 1e-3, 1.0);
        assert!(!outside.visible);

        let inside = project_angle(&config, max - 1e-3, 1.0);
        assert!(inside.visible);
        assert!(inside.scale_x > 0.0);
        assert!(inside.scale_y > 0.0);
    }

    #[test]
    fn test_extra_slot_hidden_at_rest() {
        let config = three_wide();
        let p = project_slot(&config, 0.0, 3, 1.0);
        assert!(!p.visible);
    }

    #[test]
    fn test_edge_narrowing_pulls_towards_center() {
        let plain = three_wide();
        let narrowed = ReelConfig {
            edge_narrowing: 0.5,
            ..three_wide()
        };
        let a = project_slot(&plain, 0.0, 2, 1.0);
        let b = project_slot(&narrowed, 0.0, 2, 1.0);
        assert!(b.x < a.x);
        assert!(b.x > 150.0);
    }

    #[test]
    fn test_cylinder_curvature_exponent() {
        let config = ReelConfig {
            cylinder_curvature: 2.0,
            ..three_wide()
        };
        let p = project_slot(&config, 0.0, 2, 1.0);
        assert!(approx_eq(p.scale_x, p.angle.cos().powf(2.0)));
    }

    #[test]
    fn test_skew_only_when_enabled() {
        let config = three_wide();
        assert_eq!(project_slot(&config, 0.0, 0, 1.0).skew, 0.0);

        let config = ReelConfig {
            skew_factor: 0.5,
            ..three_wide()
        };
        let p = project_slot(&config, 0.0, 0, 1.0);
        assert!(approx_eq(p.skew, p.angle * 0.5));
        assert!(p.skew < 0.0);
    }

    #[test]
    fn test_spacing_widens_the_strip() {
        let config = ReelConfig {
            element_spacing: 20.0,
            ..three_wide()
        };
        assert!(approx_eq(config.center_x(), 180.0));
        let p = project_slot(&config, 0.0, 1, 1.0);
        assert!(approx_eq(p.x, 180.0));
    }
}
