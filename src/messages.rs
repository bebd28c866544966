//! Message types for the Elm-style architecture
//!
//! All layout changes flow through these message types.

use crate::panel::{MoveOptions, PanelId, Slot};

/// Messages that target a single panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// Flip visibility (panel keybindings, command palette)
    Toggle(PanelId),
    /// Make visible if hidden
    Show(PanelId),
    /// Hide if visible
    Hide(PanelId),
    /// Set size in logical pixels (clamped)
    SetSize { id: PanelId, size: f32 },
    /// Grow or shrink relative to current size (key-hold resizing)
    ResizeBy { id: PanelId, delta: f32 },
    /// Raw slot assignment without conflict resolution
    SetSlot { id: PanelId, slot: Slot },
    /// Move with conflict resolution; may displace one other panel
    Move {
        id: PanelId,
        slot: Slot,
        options: MoveOptions,
    },
}

/// Messages that affect the whole layout
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Hide every panel, keeping slots and sizes
    HideAll,
    /// Rebuild the layout from the catalogue
    ResetToDefaults,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Per-panel messages
    Panel(PanelMsg),
    /// Whole-layout messages
    Layout(LayoutMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn toggle(id: PanelId) -> Self {
        Msg::Panel(PanelMsg::Toggle(id))
    }

    pub fn show(id: PanelId) -> Self {
        Msg::Panel(PanelMsg::Show(id))
    }

    pub fn hide(id: PanelId) -> Self {
        Msg::Panel(PanelMsg::Hide(id))
    }

    /// Create a move message without force
    pub fn move_panel(id: PanelId, slot: Slot) -> Self {
        Msg::Panel(PanelMsg::Move {
            id,
            slot,
            options: MoveOptions::default(),
        })
    }

    /// Create a move message that overrides priority
    pub fn force_move(id: PanelId, slot: Slot) -> Self {
        Msg::Panel(PanelMsg::Move {
            id,
            slot,
            options: MoveOptions::forced(),
        })
    }
}
