//! # Draw order
//!
//! The world's list of drawable components, kept sorted so that drawing is a single walk from back to front.

use crate::{actor::ActorId, component::ComponentKey};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DrawEntry {
    pub order: i32,
    pub actor: ActorId,
    pub key: ComponentKey,
}

/// Entries sorted by ascending draw order; lower orders are drawn first, i.e. further back.
#[derive(Default, Debug)]
pub struct DrawList {
    entries: Vec<DrawEntry>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts before the first entry with a strictly greater order, so entries with equal orders draw in the order they were registered.
    pub fn insert(&mut self, order: i32, actor: ActorId, key: ComponentKey) {
        let idx = self
            .entries
            .iter()
            .position(|entry| entry.order > order)
            .unwrap_or(self.entries.len());
        self.entries.insert(idx, DrawEntry { order, actor, key });
    }

    pub fn remove_actor(&mut self, actor: ActorId) {
        self.entries.retain(|entry| entry.actor != actor);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
