//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::panel::MoveError;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// The layout changed: redraw and write it to storage
    PersistLayout,
    /// A move request was rejected; the caller may retry with force or at
    /// the suggested slot, or surface the reason to the user
    MoveRejected(MoveError),
}

impl Cmd {
    /// Check if this command writes the layout to storage
    pub fn needs_persist(&self) -> bool {
        matches!(self, Cmd::PersistLayout)
    }
}
