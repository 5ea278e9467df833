//! Spin targeting and the reel state machine.
//!
//! A spin always travels [`EXTRA_ROTATIONS`] full strips plus the arrow slot
//! offset from the floor of the current position, in the configured
//! direction. Before the tween starts, the ring slot that will sit under the
//! arrow marker at rest is overwritten with the winning symbol, so the
//! outcome is fixed the moment the spin begins.
//!
//! State transitions:
//! - `Idle -> Spinning` in [`begin_spin`]. A reel that is already spinning
//!   ignores the request; there is no queueing and no cancellation.
//! - `Spinning -> Idle` in [`finish_spin`], called by the tween system when
//!   the position tween completes.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::reel::{Reel, ReelState, SpinCallback, ring_index};
use crate::components::tween::{Easing, TweenReelPosition};
use crate::events::reel::{ReelStoppedEvent, SpinReelEvent};
use crate::resources::reelconfig::ReelConfig;
use crate::resources::worldtime::WorldTime;

/// Whole strips travelled by every spin.
pub const EXTRA_ROTATIONS: usize = 4;

/// Resting position of a spin started at `position`.
pub fn spin_target(position: f64, config: &ReelConfig) -> f64 {
    let base = position.floor();
    let direction = config.spin_direction.sign();
    let travel = (EXTRA_ROTATIONS * config.element_count + config.arrow_slot_index) as f64;
    base + direction * travel
}

/// Ring slot shown under the arrow marker when the reel rests at `target`.
pub fn landing_slot(target: f64, arrow_slot_index: usize, ring_len: usize) -> usize {
    ring_index(target.floor() as i64 + arrow_slot_index as i64, ring_len)
}

/// Start a spin if the reel is idle.
///
/// Writes the winning symbol into the landing slot, marks the reel as
/// spinning and returns the position tween to attach to the reel entity.
/// Returns `None` without touching the reel when it is already spinning.
pub fn begin_spin(
    reel: &mut Reel,
    now: f32,
    on_complete: Option<SpinCallback>,
) -> Option<TweenReelPosition> {
    if reel.is_spinning() {
        debug!("Spin ignored: reel is already spinning");
        return None;
    }

    let target = spin_target(reel.position, &reel.config);
    let slot = landing_slot(target, reel.config.arrow_slot_index, reel.sequence.len());
    let winning = reel.winning_symbol();
    reel.sequence.set(slot, winning);

    reel.state = ReelState::Spinning;
    reel.store_callback(on_complete);

    let duration = reel.config.tween_duration();
    info!(
        "Reel spin: {:.2} -> {} over {:.2}s, symbol {} at ring slot {}",
        reel.position, target, duration, winning, slot
    );

    let tween = TweenReelPosition::new(reel.position, target, now, duration)
        .with_easing(Easing::BackOut(reel.config.back_out_effect));
    Some(if reel.notify_ticks {
        tween.with_tick_events()
    } else {
        tween
    })
}

/// Return a reel to idle, run its completion callback and announce the stop.
pub fn finish_spin(entity: Entity, reel: &mut Reel, commands: &mut Commands) {
    reel.state = ReelState::Idle;
    let symbol = reel.arrow_symbol();
    info!("Reel stopped at {} showing symbol {}", reel.position, symbol);
    if let Some(on_complete) = reel.take_callback() {
        on_complete(entity, symbol);
    }
    commands.trigger(ReelStoppedEvent { entity, symbol });
}

/// Observer that spins a reel in response to a [`SpinReelEvent`].
///
/// Entities without a [`Reel`] (not initialized yet) are ignored.
pub fn spin_reel_observer(
    trigger: On<SpinReelEvent>,
    world_time: Res<WorldTime>,
    mut reels: Query<&mut Reel>,
    mut commands: Commands,
) {
    let entity = trigger.event().entity;
    let Ok(mut reel) = reels.get_mut(entity) else {
        debug!("Spin ignored: {:?} has no reel yet", entity);
        return;
    };
    if let Some(tween) = begin_spin(&mut reel, world_time.elapsed, None) {
        commands.entity(entity).insert(tween);
    }
}
