//! Placement resolver
//!
//! Decides what happens when a panel is asked to move to a slot: it either
//! lands there, lands there by displacing a lower-priority occupant, or the
//! move is rejected with a suggested alternative.
//!
//! `resolve` only inspects the state. `PanelState::move_panel` resolves,
//! builds the complete next state on a copy and swaps it in, so observers
//! never see the target moved without its displaced occupant.

use std::fmt;

use super::catalogue::PanelId;
use super::slot::Slot;
use super::state::PanelState;

/// Options for a move request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOptions {
    /// Win the slot regardless of priority
    pub force: bool,
}

impl MoveOptions {
    pub fn forced() -> Self {
        Self { force: true }
    }
}

/// Where a displaced occupant ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplacedTo {
    /// Moved to its preferred slot and kept visible
    Relocated(Slot),
    /// No free alternative; hidden with its slot untouched
    Hidden,
}

/// A panel pushed out of the requested slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displacement {
    pub panel: PanelId,
    pub to: DisplacedTo,
}

/// An accepted move, before it is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub target: PanelId,
    pub slot: Slot,
    pub displaced: Option<Displacement>,
}

impl MovePlan {
    /// Panels whose placement changes, target first
    ///
    /// A displaced occupant is listed even when it ends up hidden.
    pub fn moved_panels(&self) -> Vec<PanelId> {
        let mut moved = vec![self.target];
        if let Some(displaced) = self.displaced {
            moved.push(displaced.panel);
        }
        moved
    }
}

/// Successful move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved_panels: Vec<PanelId>,
    pub displaced: Option<Displacement>,
}

impl From<MovePlan> for MoveOutcome {
    fn from(plan: MovePlan) -> Self {
        Self {
            moved_panels: plan.moved_panels(),
            displaced: plan.displaced,
        }
    }
}

/// Why a move was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveFailure {
    /// The panel is not in the catalogue
    PanelNotFound(String),
    /// The slot is outside the panel's allowed set
    SlotNotAllowed { panel: PanelId, slot: Slot },
    /// A panel with equal or higher priority holds the slot
    PositionOccupied { slot: Slot, occupant: PanelId },
}

impl fmt::Display for MoveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveFailure::PanelNotFound(id) => write!(f, "Panel {} not found", id),
            MoveFailure::SlotNotAllowed { panel, slot } => {
                write!(f, "Panel {} cannot be positioned at {}", panel, slot)
            }
            MoveFailure::PositionOccupied { slot, occupant } => write!(
                f,
                "Position {} is occupied by higher priority panel {}",
                slot, occupant
            ),
        }
    }
}

/// Rejected move with an optional alternative slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveError {
    pub reason: MoveFailure,
    pub suggestion: Option<Slot>,
}

impl MoveError {
    fn new(reason: MoveFailure, suggestion: Option<Slot>) -> Self {
        Self { reason, suggestion }
    }

    /// The occupant that blocked the move, if any
    pub fn occupant(&self) -> Option<PanelId> {
        match self.reason {
            MoveFailure::PositionOccupied { occupant, .. } => Some(occupant),
            _ => None,
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suggestion {
            Some(slot) => write!(f, "{} (try {})", self.reason, slot),
            None => write!(f, "{}", self.reason),
        }
    }
}

impl std::error::Error for MoveError {}

pub type MoveResult = Result<MoveOutcome, MoveError>;

/// Decide the outcome of moving `target` to `desired`
pub fn resolve(
    state: &PanelState,
    target: PanelId,
    desired: Slot,
    options: MoveOptions,
) -> Result<MovePlan, MoveError> {
    let Some(panel) = state.get(target) else {
        return Err(MoveError::new(
            MoveFailure::PanelNotFound(target.to_string()),
            None,
        ));
    };

    if !panel.constraints.allows(desired) {
        return Err(MoveError::new(
            MoveFailure::SlotNotAllowed {
                panel: target,
                slot: desired,
            },
            Some(panel.constraints.preferred_slot),
        ));
    }

    let plan = MovePlan {
        target,
        slot: desired,
        displaced: None,
    };

    // center/hidden never conflict; occupant() is None for them
    let Some(occupant) = state.occupant(desired, target) else {
        return Ok(plan);
    };

    if options.force || panel.priority > occupant.priority {
        let preferred = occupant.constraints.preferred_slot;
        // Judged against the post-move layout: the target's old slot is free
        let relocation_free = preferred != desired
            && preferred != Slot::Hidden
            && state
                .occupant(preferred, occupant.id)
                .map_or(true, |p| p.id == target);

        let to = if relocation_free {
            DisplacedTo::Relocated(preferred)
        } else {
            DisplacedTo::Hidden
        };

        return Ok(MovePlan {
            displaced: Some(Displacement {
                panel: occupant.id,
                to,
            }),
            ..plan
        });
    }

    let suggestion = panel
        .constraints
        .allowed_slots
        .iter()
        .copied()
        .find(|&slot| state.occupant(slot, target).is_none());

    Err(MoveError::new(
        MoveFailure::PositionOccupied {
            slot: desired,
            occupant: occupant.id,
        },
        suggestion,
    ))
}

impl PanelState {
    /// Move a panel, resolving conflicts with the current occupant
    ///
    /// This is the only operation that may change two panels at once. The
    /// next state is computed in full before it replaces the current one.
    pub fn move_panel(&mut self, target: PanelId, desired: Slot, options: MoveOptions) -> MoveResult {
        let plan = match resolve(self, target, desired, options) {
            Ok(plan) => plan,
            Err(err) => {
                tracing::debug!(panel = %target, slot = %desired, reason = %err, "move rejected");
                return Err(err);
            }
        };

        let next = self.applied(&plan);
        *self = next;

        tracing::debug!(
            panel = %target,
            slot = %desired,
            displaced = ?plan.displaced,
            "move applied"
        );
        Ok(plan.into())
    }

    /// Move a panel identified by its persisted name
    pub fn move_panel_named(&mut self, name: &str, desired: Slot, options: MoveOptions) -> MoveResult {
        match name.parse::<PanelId>() {
            Ok(id) => self.move_panel(id, desired, options),
            Err(()) => Err(MoveError::new(
                MoveFailure::PanelNotFound(name.to_string()),
                None,
            )),
        }
    }

    fn applied(&self, plan: &MovePlan) -> PanelState {
        let mut next = self.clone();

        if let Some(panel) = next.get_mut(plan.target) {
            panel.slot = plan.slot;
            panel.is_visible = plan.slot != Slot::Hidden;
        }

        if let Some(displaced) = plan.displaced {
            if let Some(panel) = next.get_mut(displaced.panel) {
                match displaced.to {
                    DisplacedTo::Relocated(slot) => {
                        panel.slot = slot;
                        panel.is_visible = true;
                    }
                    DisplacedTo::Hidden => panel.is_visible = false,
                }
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::panel::Catalogue;

    fn with_visible(ids: &[(PanelId, Slot)]) -> PanelState {
        let mut state = PanelState::default();
        for &(id, slot) in ids {
            state.set_slot(id, slot);
            state.show(id);
        }
        state
    }

    #[test]
    fn test_free_slot_moves_and_shows() {
        let mut state = PanelState::default();
        let outcome = state
            .move_panel(PanelId::Docs, Slot::Left, MoveOptions::default())
            .unwrap();
        assert_eq!(outcome.moved_panels, vec![PanelId::Docs]);
        let docs = state.get(PanelId::Docs).unwrap();
        assert_eq!(docs.slot, Slot::Left);
        assert!(docs.is_visible);
    }

    #[test]
    fn test_own_slot_is_not_a_conflict() {
        let mut state = with_visible(&[(PanelId::FileTree, Slot::Left)]);
        let outcome = state
            .move_panel(PanelId::FileTree, Slot::Left, MoveOptions::default())
            .unwrap();
        assert_eq!(outcome.moved_panels, vec![PanelId::FileTree]);
    }

    #[test]
    fn test_disallowed_slot_suggests_preferred() {
        let mut state = PanelState::default();
        let err = state
            .move_panel(PanelId::FileTree, Slot::Bottom, MoveOptions::forced())
            .unwrap_err();
        assert_eq!(
            err.reason,
            MoveFailure::SlotNotAllowed {
                panel: PanelId::FileTree,
                slot: Slot::Bottom
            }
        );
        assert_eq!(err.suggestion, Some(Slot::Left));
        assert_eq!(err.to_string(), "Panel file-tree cannot be positioned at bottom (try left)");
    }

    #[test]
    fn test_hidden_always_allowed() {
        let mut state = with_visible(&[(PanelId::Terminal, Slot::Bottom)]);
        let outcome = state
            .move_panel(PanelId::Terminal, Slot::Hidden, MoveOptions::default())
            .unwrap();
        assert_eq!(outcome.moved_panels, vec![PanelId::Terminal]);
        let terminal = state.get(PanelId::Terminal).unwrap();
        assert_eq!(terminal.slot, Slot::Hidden);
        assert!(!terminal.is_visible);
    }

    #[test]
    fn test_higher_priority_relocates_occupant() {
        // settings (50) on the left, docs (70) asks for the left
        let mut state = with_visible(&[(PanelId::Settings, Slot::Left)]);
        let outcome = state
            .move_panel(PanelId::Docs, Slot::Left, MoveOptions::default())
            .unwrap();
        assert_eq!(outcome.moved_panels, vec![PanelId::Docs, PanelId::Settings]);
        assert_eq!(
            outcome.displaced,
            Some(Displacement {
                panel: PanelId::Settings,
                to: DisplacedTo::Relocated(Slot::Right)
            })
        );
        let settings = state.get(PanelId::Settings).unwrap();
        assert_eq!(settings.slot, Slot::Right);
        assert!(settings.is_visible);
    }

    #[test]
    fn test_relocation_uses_slot_vacated_by_target() {
        // docs leaves the right slot, settings can take it
        let mut state = with_visible(&[
            (PanelId::Settings, Slot::Left),
            (PanelId::Docs, Slot::Right),
        ]);
        let outcome = state
            .move_panel(PanelId::Docs, Slot::Left, MoveOptions::default())
            .unwrap();
        assert_eq!(
            outcome.displaced.map(|d| d.to),
            Some(DisplacedTo::Relocated(Slot::Right))
        );
        assert!(state.invariant_violations().is_empty());
    }

    #[test]
    fn test_occupant_hidden_when_preferred_is_contested_slot() {
        let mut state = with_visible(&[(PanelId::Search, Slot::Left)]);
        let outcome = state
            .move_panel(PanelId::FileTree, Slot::Left, MoveOptions::default())
            .unwrap();
        assert_eq!(outcome.moved_panels, vec![PanelId::FileTree, PanelId::Search]);
        let search = state.get(PanelId::Search).unwrap();
        assert!(!search.is_visible);
        assert_eq!(search.slot, Slot::Left);
    }

    #[test]
    fn test_occupant_hidden_when_preferred_taken() {
        // settings (50) on the left, its preferred right held by docs;
        // terminal (90) takes the left
        let mut state = with_visible(&[
            (PanelId::Settings, Slot::Left),
            (PanelId::Docs, Slot::Right),
        ]);
        let outcome = state
            .move_panel(PanelId::Terminal, Slot::Left, MoveOptions::default())
            .unwrap();
        assert_eq!(
            outcome.displaced,
            Some(Displacement {
                panel: PanelId::Settings,
                to: DisplacedTo::Hidden
            })
        );
        assert!(state.is_visible(PanelId::Docs));
        assert!(!state.is_visible(PanelId::Settings));
    }

    #[test]
    fn test_occupant_relocated_to_shared_center() {
        let mut entries = Catalogue::builtin().entries().to_vec();
        for entry in &mut entries {
            if entry.id == PanelId::Docs {
                entry.constraints.preferred_slot = Slot::Center;
            }
        }
        let catalogue = Arc::new(Catalogue::from_entries(entries).unwrap());
        let mut state = PanelState::new(catalogue);
        state.set_slot(PanelId::Docs, Slot::Left);
        state.show(PanelId::Docs);
        state.set_slot(PanelId::Settings, Slot::Center);
        state.show(PanelId::Settings);

        let outcome = state
            .move_panel(PanelId::Terminal, Slot::Left, MoveOptions::default())
            .unwrap();
        assert_eq!(
            outcome.displaced,
            Some(Displacement {
                panel: PanelId::Docs,
                to: DisplacedTo::Relocated(Slot::Center)
            })
        );
        assert!(state.get(PanelId::Docs).unwrap().is_visible_at(Slot::Center));
        assert!(state.is_visible(PanelId::Settings));
    }

    #[test]
    fn test_tie_favours_incumbent() {
        let mut entries = Catalogue::builtin().entries().to_vec();
        for entry in &mut entries {
            entry.priority = 10;
        }
        let catalogue = Arc::new(Catalogue::from_entries(entries).unwrap());
        let mut state = PanelState::new(catalogue);
        state.set_slot(PanelId::Docs, Slot::Left);
        state.show(PanelId::Docs);
        let before = state.clone();

        let err = state
            .move_panel(PanelId::Settings, Slot::Left, MoveOptions::default())
            .unwrap_err();
        assert_eq!(err.occupant(), Some(PanelId::Docs));
        assert_eq!(state, before);
    }

    #[test]
    fn test_force_overrides_priority() {
        let mut state = with_visible(&[(PanelId::FileTree, Slot::Left)]);
        let outcome = state
            .move_panel(PanelId::Settings, Slot::Left, MoveOptions::forced())
            .unwrap();
        assert_eq!(outcome.moved_panels, vec![PanelId::Settings, PanelId::FileTree]);
        // file-tree prefers the contested left slot, so it is hidden
        assert!(!state.is_visible(PanelId::FileTree));
        assert_eq!(state.panel_at(Slot::Left).map(|p| p.id), Some(PanelId::Settings));
    }

    #[test]
    fn test_center_suggested_when_docks_taken() {
        let mut state = with_visible(&[
            (PanelId::Search, Slot::Left),
            (PanelId::Docs, Slot::Right),
        ]);
        let err = state
            .move_panel(PanelId::Settings, Slot::Left, MoveOptions::default())
            .unwrap_err();
        assert_eq!(err.occupant(), Some(PanelId::Search));
        assert_eq!(err.suggestion, Some(Slot::Center));
    }

    #[test]
    fn test_no_suggestion_when_everything_taken() {
        let mut entries = Catalogue::builtin().entries().to_vec();
        for entry in &mut entries {
            entry.priority = 10;
        }
        let mut state = PanelState::new(Arc::new(Catalogue::from_entries(entries).unwrap()));
        state.set_slot(PanelId::Docs, Slot::Left);
        state.show(PanelId::Docs);
        state.show(PanelId::Settings);

        // file-tree may only use left and right, both held by equal priority panels
        let err = state
            .move_panel(PanelId::FileTree, Slot::Left, MoveOptions::default())
            .unwrap_err();
        assert_eq!(err.occupant(), Some(PanelId::Docs));
        assert_eq!(err.suggestion, None);
    }

    #[test]
    fn test_resolve_does_not_mutate() {
        let state = with_visible(&[(PanelId::Search, Slot::Left)]);
        let before = state.clone();
        let plan = resolve(&state, PanelId::FileTree, Slot::Left, MoveOptions::default()).unwrap();
        assert_eq!(plan.moved_panels(), vec![PanelId::FileTree, PanelId::Search]);
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_panel_named_unknown() {
        let mut state = PanelState::default();
        let err = state
            .move_panel_named("unknown-id", Slot::Left, MoveOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Panel unknown-id not found");
        assert_eq!(err.suggestion, None);
    }
}
