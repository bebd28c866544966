//! Update functions for the Elm-style architecture
//!
//! All layout transformations flow through these functions. Every handler
//! returns `Some(Cmd::PersistLayout)` when the layout changed and `None`
//! when the message was a no-op.

use crate::commands::Cmd;
use crate::messages::{LayoutMsg, Msg, PanelMsg};
use crate::panel::{MoveOptions, MoveResult, PanelId, PanelState, Slot};

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(state: &mut PanelState, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        let msg_name = msg_type_name(&msg);
        traced(state, &msg_name, |state| update_inner(state, msg))
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(state, msg)
    }
}

/// Move a panel, returning the move result alongside the command
///
/// Same handling as `PanelMsg::Move`, for callers that need the outcome
/// or the rejection.
pub fn update_move(
    state: &mut PanelState,
    id: PanelId,
    slot: Slot,
    options: MoveOptions,
) -> (MoveResult, Option<Cmd>) {
    #[cfg(debug_assertions)]
    {
        let msg_name = msg_type_name(&Msg::Panel(PanelMsg::Move { id, slot, options }));
        traced(state, &msg_name, |state| move_inner(state, id, slot, options))
    }
    #[cfg(not(debug_assertions))]
    {
        move_inner(state, id, slot, options)
    }
}

/// Inner update logic (no tracing)
fn update_inner(state: &mut PanelState, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => update_panel(state, m),
        Msg::Layout(m) => update_layout(state, m),
    }
}

fn changed(did_change: bool) -> Option<Cmd> {
    did_change.then_some(Cmd::PersistLayout)
}

/// Handle per-panel messages
pub fn update_panel(state: &mut PanelState, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Toggle(id) => changed(state.toggle(id)),
        PanelMsg::Show(id) => changed(state.show(id)),
        PanelMsg::Hide(id) => changed(state.hide(id)),
        PanelMsg::SetSize { id, size } => changed(state.set_size(id, size)),
        PanelMsg::ResizeBy { id, delta } => changed(state.resize_by(id, delta)),
        PanelMsg::SetSlot { id, slot } => changed(state.set_slot(id, slot)),
        PanelMsg::Move { id, slot, options } => move_inner(state, id, slot, options).1,
    }
}

fn move_inner(
    state: &mut PanelState,
    id: PanelId,
    slot: Slot,
    options: MoveOptions,
) -> (MoveResult, Option<Cmd>) {
    let before = state.get(id).map(|p| (p.slot, p.is_visible));
    let result = state.move_panel(id, slot, options);
    let cmd = match &result {
        Ok(outcome) => {
            // Moving a visible panel onto its own slot changes nothing
            let unchanged = outcome.displaced.is_none()
                && before == state.get(id).map(|p| (p.slot, p.is_visible));
            changed(!unchanged)
        }
        Err(err) => Some(Cmd::MoveRejected(err.clone())),
    };
    (result, cmd)
}

/// Handle whole-layout messages
pub fn update_layout(state: &mut PanelState, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::HideAll => changed(state.hide_all()),
        LayoutMsg::ResetToDefaults => changed(state.reset_to_defaults()),
    }
}

/// Run a state transition with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn traced<R>(
    state: &mut PanelState,
    msg_name: &str,
    apply: impl FnOnce(&mut PanelState) -> R,
) -> R {
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = LayoutSnapshot::from_state(state);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = apply(state);

    let after = LayoutSnapshot::from_state(state);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    for violation in state.invariant_violations() {
        tracing::error!(target: "layout", msg = %msg_name, %violation, "layout invariant broken");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Panel::Toggle(FileTree)`
/// - `Layout::HideAll`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
    }
}
