//! Per-block genus slot store.

use std::collections::HashMap;

use crate::types::GenusMarker;

/// Remembers the genus marker assigned to each inflection group.
///
/// The store is written once per group by the genus handler and read by
/// number handlers that stamp inherited gender onto word forms of the same
/// group. Keys are the block-aligned global indices handlers compute, so a
/// new block (whose offset differs) can never observe or overwrite slots
/// left by an earlier block.
///
/// A store belongs to exactly one handler chain and therefore to one entry's
/// parse. Call [`reset`](GenusSlots::reset) before reusing the chain on a
/// different entry.
#[derive(Debug, Default)]
pub struct GenusSlots {
    slots: HashMap<u32, GenusMarker>,
}

impl GenusSlots {
    /// Create an empty store.
    pub fn new() -> GenusSlots {
        GenusSlots::default()
    }

    /// Record the genus marker for an inflection group.
    pub fn set(&mut self, index: u32, marker: GenusMarker) {
        self.slots.insert(index, marker);
    }

    /// The genus marker recorded for an inflection group, if any.
    pub fn get(&self, index: u32) -> Option<GenusMarker> {
        self.slots.get(&index).copied()
    }

    /// Whether no slot has been written yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Clear every slot. Required before parsing a different entry.
    pub fn reset(&mut self) {
        self.slots.clear();
    }
}
