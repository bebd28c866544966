//! Runtime - owns the live layout and its storage
//!
//! `PanelManager` is what a rendering layer holds on to. It restores the
//! layout on construction, routes every change through `update`, executes
//! the returned commands, and writes the layout back after each change.
//!
//! The manager is single-threaded; a multi-threaded host wraps it in a
//! mutex so a two-panel move is never interleaved with another mutation.

use std::sync::Arc;

use anyhow::Result;

use crate::commands::Cmd;
use crate::messages::{LayoutMsg, Msg, PanelMsg};
use crate::panel::codec::{self, STORAGE_KEY};
use crate::panel::{
    Catalogue, MoveError, MoveFailure, MoveOptions, MoveResult, PanelConfig, PanelId,
    PanelState, Slot,
};
use crate::storage::{LayoutStorage, MemoryStorage};
use crate::update::{update, update_move};

/// Live panel layout bound to a storage backend
#[derive(Debug)]
pub struct PanelManager<S: LayoutStorage = MemoryStorage> {
    state: PanelState,
    storage: S,
}

impl PanelManager<MemoryStorage> {
    /// Manager over the built-in catalogue with per-session storage
    pub fn in_memory() -> Self {
        Self::new(Arc::new(Catalogue::builtin()), MemoryStorage::new())
    }
}

impl<S: LayoutStorage> PanelManager<S> {
    /// Restore the stored layout, falling back to catalogue defaults
    pub fn new(catalogue: Arc<Catalogue>, storage: S) -> Self {
        let state = match storage.read(STORAGE_KEY) {
            Some(stored) => {
                tracing::info!("Restoring stored panel layout");
                codec::deserialize(catalogue, &stored)
            }
            None => PanelState::new(catalogue),
        };
        Self { state, storage }
    }

    /// Current layout (read-only; mutate through the manager)
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn panel(&self, id: PanelId) -> Option<&PanelConfig> {
        self.state.get(id)
    }

    /// Apply a message and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        let cmd = update(&mut self.state, msg);
        if let Some(ref cmd) = cmd {
            self.process_cmd(cmd);
        }
        cmd
    }

    fn process_cmd(&mut self, cmd: &Cmd) {
        match cmd {
            Cmd::PersistLayout => {
                if let Err(e) = self.persist() {
                    tracing::warn!("Failed to persist panel layout: {:#}", e);
                }
            }
            Cmd::MoveRejected(err) => {
                tracing::debug!(reason = %err, "move rejected");
            }
        }
    }

    /// Write the current layout to storage
    pub fn persist(&mut self) -> Result<()> {
        let serialized = codec::serialize(&self.state)?;
        self.storage.write(STORAGE_KEY, &serialized)
    }

    fn dispatch_changed(&mut self, msg: Msg) -> bool {
        self.dispatch(msg).is_some_and(|cmd| cmd.needs_persist())
    }

    // === Caller-facing operations ===

    pub fn toggle(&mut self, id: PanelId) -> bool {
        self.dispatch_changed(Msg::Panel(PanelMsg::Toggle(id)))
    }

    pub fn show(&mut self, id: PanelId) -> bool {
        self.dispatch_changed(Msg::Panel(PanelMsg::Show(id)))
    }

    pub fn hide(&mut self, id: PanelId) -> bool {
        self.dispatch_changed(Msg::Panel(PanelMsg::Hide(id)))
    }

    pub fn hide_all(&mut self) -> bool {
        self.dispatch_changed(Msg::Layout(LayoutMsg::HideAll))
    }

    pub fn reset_to_defaults(&mut self) -> bool {
        self.dispatch_changed(Msg::Layout(LayoutMsg::ResetToDefaults))
    }

    pub fn set_size(&mut self, id: PanelId, size: f32) -> bool {
        self.dispatch_changed(Msg::Panel(PanelMsg::SetSize { id, size }))
    }

    pub fn resize_by(&mut self, id: PanelId, delta: f32) -> bool {
        self.dispatch_changed(Msg::Panel(PanelMsg::ResizeBy { id, delta }))
    }

    /// Move a panel with conflict resolution, persisting if anything moved
    pub fn move_panel(&mut self, id: PanelId, slot: Slot, options: MoveOptions) -> MoveResult {
        let (result, cmd) = update_move(&mut self.state, id, slot, options);
        if let Some(ref cmd) = cmd {
            self.process_cmd(cmd);
        }
        result
    }

    /// Move a panel identified by its persisted name
    pub fn move_panel_named(&mut self, name: &str, slot: Slot, options: MoveOptions) -> MoveResult {
        match name.parse::<PanelId>() {
            Ok(id) => self.move_panel(id, slot, options),
            Err(()) => Err(MoveError {
                reason: MoveFailure::PanelNotFound(name.to_string()),
                suggestion: None,
            }),
        }
    }

    pub fn panel_at(&self, slot: Slot) -> Option<&PanelConfig> {
        self.state.panel_at(slot)
    }

    pub fn available_slots(&self, id: PanelId) -> Vec<Slot> {
        self.state.available_slots(id)
    }
}
