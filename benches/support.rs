//! Shared helpers for benchmarks

use panel_dock::{PanelId, PanelState, Slot};

/// A layout with every dock occupied and the command palette open
#[allow(dead_code)]
pub fn busy_layout() -> PanelState {
    let mut state = PanelState::default();
    state.show(PanelId::Search);
    state.show(PanelId::Terminal);
    state.show(PanelId::Settings);
    state.set_slot(PanelId::CommandPalette, Slot::Center);
    state.show(PanelId::CommandPalette);
    state
}
