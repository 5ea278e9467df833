//! Host-facing reel API.
//!
//! These functions operate on a [`World`] and are what the host application
//! calls: load the symbols, spawn (initialize) a reel, pick the winning
//! symbol, spin, and place the reel on screen. The per-frame work lives in
//! the schedule returned by [`build_update_schedule`], which the host runs
//! once per frame after [`update_world_time`](crate::systems::time::update_world_time).

use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::reel::{Reel, SpinCallback, WheelSequence};
use crate::components::reelsymbol::ReelSymbol;
use crate::components::sprite::Sprite;
use crate::error::ReelError;
use crate::resources::reelconfig::ReelConfig;
use crate::resources::screensize::ScreenSize;
use crate::resources::symbolcatalog::{SymbolCatalog, SymbolLoader, SymbolManifest};
use crate::resources::worldtime::WorldTime;
use crate::systems::reelprojection::reel_projection_system;
use crate::systems::reelspin::{begin_spin, spin_reel_observer};
use crate::systems::tween::tween_reel_position_system;

/// Load every symbol of `manifest` and insert the resulting [`SymbolCatalog`].
///
/// Asset failures are returned unchanged; nothing is inserted in that case.
pub fn load_symbols(
    world: &mut World,
    manifest: &SymbolManifest,
    loader: &mut impl SymbolLoader,
) -> Result<(), ReelError> {
    let catalog = SymbolCatalog::load(manifest, loader)?;
    world.insert_resource(catalog);
    Ok(())
}

/// Register the reel observers. Call once before triggering reel events.
pub fn register_reel_observers(world: &mut World) {
    world.add_observer(spin_reel_observer);
    world.flush();
}

/// Per-frame reel schedule: tweens advance before symbols are projected.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(tween_reel_position_system);
    update.add_systems(reel_projection_system.after(tween_reel_position_system));
    update
}

/// Initialize a reel: validate, build its wheel sequence and spawn the root
/// and its `element_count + 1` symbol entities, placed for position 0 by one
/// run of [`reel_projection_system`].
///
/// Requires a non-empty [`SymbolCatalog`] resource.
pub fn spawn_reel(
    world: &mut World,
    config: ReelConfig,
    rng: &mut fastrand::Rng,
) -> Result<Entity, ReelError> {
    config.validate()?;

    let catalog_len = world
        .get_resource::<SymbolCatalog>()
        .map(|c| c.len())
        .filter(|&len| len > 0)
        .ok_or(ReelError::EmptyCatalog)?;
    if config.winning_index >= catalog_len {
        return Err(ReelError::WinningIndexOutOfRange {
            index: config.winning_index,
            catalog_len,
        });
    }

    let sequence = WheelSequence::generate(config.ring_len(), catalog_len, rng);
    let mut reel = Reel::new(config, sequence);
    for slot in 0..=reel.config.element_count {
        // sprite is bound by the projection below
        let symbol = world
            .spawn((
                ReelSymbol::new(slot),
                Sprite::centered(String::new(), 0.0, 0.0),
                MapPosition::new(0.0, 0.0),
            ))
            .id();
        reel.symbols.push(symbol);
    }

    info!(
        "Spawned reel: {} elements, ring of {}, arrow slot {}",
        reel.config.element_count,
        reel.sequence.len(),
        reel.config.arrow_slot_index
    );
    let entity = world.spawn((reel, MapPosition::new(0.0, 0.0))).id();
    world
        .run_system_once(reel_projection_system)
        .map_err(|e| ReelError::System(e.to_string()))?;
    Ok(entity)
}

/// Override the winning symbol by catalog key for subsequent spins.
pub fn set_winning_symbol(world: &mut World, entity: Entity, key: &str) -> Result<(), ReelError> {
    let index = world
        .get_resource::<SymbolCatalog>()
        .and_then(|c| c.index_of(key))
        .ok_or_else(|| ReelError::UnknownSymbol(key.to_string()))?;
    let mut reel = world
        .get_mut::<Reel>(entity)
        .ok_or(ReelError::NotInitialized)?;
    reel.set_winning_override(Some(index));
    info!("Winning symbol set to '{}' ({})", key, index);
    Ok(())
}

/// Load a symbol that may not be in the catalog yet and make it the winner.
pub fn set_winning_asset(
    world: &mut World,
    entity: Entity,
    loader: &mut impl SymbolLoader,
    key: &str,
    path: &str,
) -> Result<(), ReelError> {
    if world.get::<Reel>(entity).is_none() {
        return Err(ReelError::NotInitialized);
    }
    {
        let mut catalog = world.get_resource_or_insert_with(SymbolCatalog::new);
        catalog.register(loader, key, path)?;
    }
    set_winning_symbol(world, entity, key)
}

/// Spin the reel on `entity`.
///
/// Returns `false` without side effects when the reel is already spinning or
/// does not exist yet; `on_complete` is then dropped uncalled. Otherwise
/// `on_complete` runs exactly once, when the reel comes to rest.
pub fn spin_reel(world: &mut World, entity: Entity, on_complete: Option<SpinCallback>) -> bool {
    let now = world
        .get_resource::<WorldTime>()
        .map(|t| t.elapsed)
        .unwrap_or(0.0);
    let tween = {
        let Some(mut reel) = world.get_mut::<Reel>(entity) else {
            debug!("Spin ignored: {:?} has no reel yet", entity);
            return false;
        };
        begin_spin(&mut reel, now, on_complete)
    };
    match tween {
        Some(tween) => {
            world.entity_mut(entity).insert(tween);
            true
        }
        None => false,
    }
}

/// Move the reel root to `(x, y)`.
pub fn set_reel_position(world: &mut World, entity: Entity, x: f32, y: f32) {
    if let Some(mut root) = world.get_mut::<MapPosition>(entity) {
        root.pos = Vector2 { x, y };
    }
}

/// Center the reel strip on a screen of the given size.
pub fn center_reel(world: &mut World, entity: Entity, screen: ScreenSize) {
    let Some((width, height)) = world.get::<Reel>(entity).map(|r| {
        (
            r.config.element_count as f32 * r.config.element_distance(),
            r.config.element_height,
        )
    }) else {
        return;
    };
    set_reel_position(
        world,
        entity,
        (screen.w as f32 - width) / 2.0,
        (screen.h as f32 - height) / 2.0,
    );
}

/// Catalog index currently under the arrow marker.
pub fn arrow_symbol(world: &World, entity: Entity) -> Option<usize> {
    world.get::<Reel>(entity).map(|r| r.arrow_symbol())
}

/// Enable or disable [`ReelTickEvent`](crate::events::reel::ReelTickEvent)s
/// for the spins started after this call.
pub fn set_tick_events(world: &mut World, entity: Entity, enabled: bool) {
    if let Some(mut reel) = world.get_mut::<Reel>(entity) {
        reel.notify_ticks = enabled;
    }
}
