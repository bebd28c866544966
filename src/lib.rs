//! panel-dock - dockable panel layout engine
//!
//! This crate decides where each UI panel is anchored, resolves conflicts
//! when two panels want the same dock, and persists the arrangement across
//! sessions. Rendering is left to the host; it drives the layout through
//! messages (Elm Architecture) or through `PanelManager`.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod panel;
pub mod runtime;
pub mod storage;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use messages::{LayoutMsg, Msg, PanelMsg};
pub use panel::{
    Catalogue, MoveError, MoveOptions, MoveOutcome, MoveResult, PanelConfig, PanelId, PanelState,
    Slot,
};
pub use runtime::PanelManager;
pub use storage::{FileStorage, LayoutStorage, MemoryStorage};
