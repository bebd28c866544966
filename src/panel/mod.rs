//! Panel system - docking panel placement and conflict resolution
//!
//! Panels are anchored to left, right or bottom docks, opened as center
//! modals, or hidden. Each dock holds one visible panel at a time; when two
//! panels want the same dock, priority decides who keeps it.
//!
//! ## Architecture
//!
//! - `Slot`: Left, Right, Bottom, Center or Hidden placement
//! - `PanelId`: Closed set of panel types (file tree, terminal, etc.)
//! - `Catalogue`: Immutable defaults, size bounds and constraints per panel
//! - `PanelState`: Live configuration of every catalogue panel
//! - `resolver`: Move requests, displacement and suggestions
//! - `codec`: Persisted JSON shape with fallback to catalogue defaults
//!
//! ## Integration
//!
//! The rendering layer drives the state through `Msg` values dispatched by
//! `update::update`, or directly through `runtime::PanelManager`, which also
//! persists the layout after every change.

pub mod catalogue;
pub mod codec;
pub mod resolver;
mod slot;
mod state;

pub use catalogue::{Catalogue, CatalogueEntry, CatalogueError, PanelId, PositionConstraints};
pub use resolver::{
    resolve, DisplacedTo, Displacement, MoveError, MoveFailure, MoveOptions, MoveOutcome,
    MovePlan, MoveResult,
};
pub use slot::Slot;
pub use state::{PanelConfig, PanelState};
