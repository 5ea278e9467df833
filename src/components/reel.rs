//! Reel component and its wheel sequence.
//!
//! A [`Reel`] lives on the root entity of one slot-machine wheel. It owns the
//! immutable [`ReelConfig`], the [`WheelSequence`] ring of catalog indices, and
//! the runtime state: the continuous scroll position and the idle/spinning
//! state machine. The visible symbols are separate entities carrying
//! [`ReelSymbol`](super::reelsymbol::ReelSymbol); the reel keeps their handles
//! in slot order.
//!
//! The scroll position is never reset. Each spin continues from where the
//! previous one came to rest, which keeps the ring arithmetic consistent.

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

use crate::resources::reelconfig::ReelConfig;

/// Called once when a spin comes to rest, with the reel entity and the
/// catalog index under the arrow marker.
pub type SpinCallback = Box<dyn FnOnce(Entity, usize) + Send + Sync + 'static>;

/// Idle/spinning state of a reel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ReelState {
    #[default]
    Idle,
    Spinning,
}

/// Circular buffer of catalog indices backing the reel strip.
///
/// The length is fixed at creation. Slots are only ever overwritten in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelSequence {
    slots: Vec<usize>,
}

impl WheelSequence {
    /// Fill `len` slots independently and uniformly from `0..catalog_len`.
    ///
    /// Panics if `catalog_len` is zero; callers validate the catalog first.
    pub fn generate(len: usize, catalog_len: usize, rng: &mut fastrand::Rng) -> Self {
        assert!(catalog_len > 0, "cannot sample from an empty catalog");
        Self {
            slots: (0..len).map(|_| rng.usize(..catalog_len)).collect(),
        }
    }

    pub fn from_slots(slots: Vec<usize>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ring slot for an unbounded virtual index. Always non-negative.
    pub fn resolve(&self, virtual_index: i64) -> usize {
        ring_index(virtual_index, self.slots.len())
    }

    /// Catalog index at a virtual position on the ring.
    pub fn symbol_at(&self, virtual_index: i64) -> usize {
        self.slots[self.resolve(virtual_index)]
    }

    pub fn get(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied()
    }

    pub fn set(&mut self, slot: usize, symbol: usize) {
        self.slots[slot] = symbol;
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }
}

/// Non-negative modulo of `virtual_index` by `len`.
pub fn ring_index(virtual_index: i64, len: usize) -> usize {
    virtual_index.rem_euclid(len as i64) as usize
}

/// One slot-machine wheel.
#[derive(Component)]
pub struct Reel {
    pub config: ReelConfig,
    pub sequence: WheelSequence,
    /// Continuous scroll position in element units.
    pub position: f64,
    pub state: ReelState,
    /// Symbol entities in slot order, `element_count + 1` of them.
    pub symbols: SmallVec<[Entity; 8]>,
    /// Spins trigger a `ReelTickEvent` every frame while moving.
    pub notify_ticks: bool,
    winning_override: Option<usize>,
    on_complete: Option<SpinCallback>,
}

impl Reel {
    pub fn new(config: ReelConfig, sequence: WheelSequence) -> Self {
        Self {
            config,
            sequence,
            position: 0.0,
            state: ReelState::Idle,
            symbols: SmallVec::new(),
            notify_ticks: false,
            winning_override: None,
            on_complete: None,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.state == ReelState::Spinning
    }

    /// Symbol the next spin lands on: the override if set, else the configured index.
    pub fn winning_symbol(&self) -> usize {
        self.winning_override.unwrap_or(self.config.winning_index)
    }

    /// Override the winning symbol. Persists until changed again.
    pub fn set_winning_override(&mut self, symbol: Option<usize>) {
        self.winning_override = symbol;
    }

    /// Catalog index shown in the arrow slot at the current position.
    pub fn arrow_symbol(&self) -> usize {
        let base = self.position.floor() as i64;
        self.sequence
            .symbol_at(base + self.config.arrow_slot_index as i64)
    }

    pub(crate) fn store_callback(&mut self, on_complete: Option<SpinCallback>) {
        self.on_complete = on_complete;
    }

    pub(crate) fn take_callback(&mut self) -> Option<SpinCallback> {
        self.on_complete.take()
    }
}
