//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Arc;

use panel_dock::{Catalogue, PanelId, PanelState, Slot};

/// The built-in catalogue, shared
pub fn builtin() -> Arc<Catalogue> {
    Arc::new(Catalogue::builtin())
}

/// Catalogue with only the file tree (100, left) and search (60, left)
pub fn tree_and_search() -> Arc<Catalogue> {
    Arc::new(Catalogue::builtin().restricted_to(&[PanelId::FileTree, PanelId::Search]))
}

/// Built-in catalogue where every panel has the same priority
pub fn equal_priority() -> Arc<Catalogue> {
    let mut entries = Catalogue::builtin().entries().to_vec();
    for entry in &mut entries {
        entry.priority = 10;
    }
    Arc::new(Catalogue::from_entries(entries).expect("valid catalogue"))
}

/// Built-in state with the given panels placed and shown, in order
pub fn layout_with(visible: &[(PanelId, Slot)]) -> PanelState {
    let mut state = PanelState::default();
    for &(id, slot) in visible {
        state.set_slot(id, slot);
        assert!(state.show(id), "{} could not be shown at {}", id, slot);
    }
    state
}

/// Ids of visible panels sitting in `slot`
pub fn visible_at(state: &PanelState, slot: Slot) -> Vec<PanelId> {
    state
        .panels()
        .filter(|p| p.is_visible && p.slot == slot)
        .map(|p| p.id)
        .collect()
}

/// Small deterministic generator for operation sequences
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[(self.next_u64() as usize) % items.len()]
    }
}
