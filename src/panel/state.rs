//! Live panel state
//!
//! `PanelState` maps every catalogue panel to its current configuration.
//! The mutation operations here touch exactly one panel each; moving a
//! panel into a contested slot goes through the resolver instead.

use std::collections::HashMap;
use std::sync::Arc;

use super::catalogue::{Catalogue, CatalogueEntry, PanelId, PositionConstraints};
use super::slot::Slot;

/// Current configuration of a single panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub id: PanelId,
    pub slot: Slot,
    pub is_visible: bool,
    /// Size in logical pixels (width for left/right, height for bottom).
    /// `None` for panels that cannot be resized.
    pub size: Option<f32>,
    pub min_size: Option<f32>,
    pub max_size: Option<f32>,
    /// Higher wins position conflicts
    pub priority: i32,
    pub constraints: PositionConstraints,
}

impl PanelConfig {
    /// Fresh configuration from a catalogue entry
    pub fn from_entry(entry: &CatalogueEntry) -> Self {
        Self {
            id: entry.id,
            slot: entry.default_slot,
            is_visible: entry.default_visible,
            size: entry.size,
            min_size: entry.min_size,
            max_size: entry.max_size,
            priority: entry.priority,
            constraints: entry.constraints.clone(),
        }
    }

    /// Whether the panel has an adjustable size
    pub fn is_resizable(&self) -> bool {
        self.size.is_some()
    }

    /// Clamp `size` to `[min_size ?? 0, max_size ?? +inf]`
    pub fn clamp_size(&self, size: f32) -> f32 {
        let min = self.min_size.unwrap_or(0.0);
        let max = self.max_size.unwrap_or(f32::INFINITY);
        size.max(min).min(max)
    }

    /// Whether this panel is visible in `slot`
    pub fn is_visible_at(&self, slot: Slot) -> bool {
        self.is_visible && self.slot == slot
    }
}

/// Complete panel layout state
///
/// Always holds exactly one `PanelConfig` per catalogue panel. Ids that are
/// not part of the catalogue are ignored by every operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    catalogue: Arc<Catalogue>,
    panels: HashMap<PanelId, PanelConfig>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(Arc::new(Catalogue::builtin()))
    }
}

impl PanelState {
    /// Build the initial state from a catalogue
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        let panels = catalogue
            .entries()
            .iter()
            .map(|entry| (entry.id, PanelConfig::from_entry(entry)))
            .collect();
        Self { catalogue, panels }
    }

    pub fn catalogue(&self) -> &Arc<Catalogue> {
        &self.catalogue
    }

    /// Get a panel's configuration
    pub fn get(&self, id: PanelId) -> Option<&PanelConfig> {
        self.panels.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: PanelId) -> Option<&mut PanelConfig> {
        self.panels.get_mut(&id)
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.panels.contains_key(&id)
    }

    /// Panels in catalogue order
    pub fn panels(&self) -> impl Iterator<Item = &PanelConfig> + '_ {
        self.catalogue.ids().filter_map(|id| self.panels.get(&id))
    }

    pub fn is_visible(&self, id: PanelId) -> bool {
        self.get(id).is_some_and(|p| p.is_visible)
    }

    // === Store operations ===

    /// Flip a panel's visibility
    ///
    /// Revealing a panel into a single-occupancy slot held by another
    /// visible panel is refused; use `move_panel` to contest the slot.
    pub fn toggle(&mut self, id: PanelId) -> bool {
        let Some(visible) = self.get(id).map(|p| p.is_visible) else {
            return false;
        };
        if visible {
            self.hide(id)
        } else {
            self.show(id)
        }
    }

    /// Make a panel visible if it is hidden
    pub fn show(&mut self, id: PanelId) -> bool {
        let Some(panel) = self.get(id) else {
            return false;
        };
        if panel.is_visible {
            return false;
        }
        if let Some(occupant) = self.occupant(panel.slot, id) {
            tracing::debug!(
                panel = %id,
                slot = %panel.slot,
                occupant = %occupant.id,
                "show refused, slot occupied"
            );
            return false;
        }
        if let Some(panel) = self.get_mut(id) {
            panel.is_visible = true;
        }
        true
    }

    /// Hide a panel if it is visible
    pub fn hide(&mut self, id: PanelId) -> bool {
        match self.get_mut(id) {
            Some(panel) if panel.is_visible => {
                panel.is_visible = false;
                true
            }
            _ => false,
        }
    }

    /// Set a panel's size, clamped to its bounds
    ///
    /// No-op for panels without a size and for non-finite input.
    pub fn set_size(&mut self, id: PanelId, requested: f32) -> bool {
        if !requested.is_finite() {
            return false;
        }
        let Some(panel) = self.get_mut(id) else {
            return false;
        };
        if !panel.is_resizable() {
            return false;
        }
        let clamped = panel.clamp_size(requested);
        if panel.size == Some(clamped) {
            return false;
        }
        panel.size = Some(clamped);
        true
    }

    /// Grow or shrink a panel relative to its current size
    pub fn resize_by(&mut self, id: PanelId, delta: f32) -> bool {
        match self.get(id).and_then(|p| p.size) {
            Some(current) => self.set_size(id, current + delta),
            None => false,
        }
    }

    /// Assign a slot without checking occupancy
    ///
    /// Slots outside the panel's allowed set are ignored. Callers that need
    /// conflict resolution use `move_panel`.
    pub fn set_slot(&mut self, id: PanelId, slot: Slot) -> bool {
        match self.get_mut(id) {
            Some(panel) if panel.constraints.allows(slot) && panel.slot != slot => {
                panel.slot = slot;
                true
            }
            _ => false,
        }
    }

    /// Hide every panel, keeping slots and sizes for a later restore
    pub fn hide_all(&mut self) -> bool {
        let mut changed = false;
        for panel in self.panels.values_mut() {
            changed |= panel.is_visible;
            panel.is_visible = false;
        }
        changed
    }

    /// Discard live state and rebuild from the catalogue
    pub fn reset_to_defaults(&mut self) -> bool {
        let fresh = Self::new(Arc::clone(&self.catalogue));
        let changed = fresh.panels != self.panels;
        *self = fresh;
        changed
    }

    // === Queries ===

    /// Visible panel in `slot` other than `excluding`
    ///
    /// Always `None` for multi-occupancy slots.
    pub fn occupant(&self, slot: Slot, excluding: PanelId) -> Option<&PanelConfig> {
        if !slot.is_single_occupancy() {
            return None;
        }
        self.panels()
            .find(|p| p.id != excluding && p.is_visible_at(slot))
    }

    /// The visible panel occupying a single-occupancy slot
    ///
    /// Always `None` for `center` and `hidden`; callers track multiplicity
    /// for those themselves.
    pub fn panel_at(&self, slot: Slot) -> Option<&PanelConfig> {
        if !slot.is_single_occupancy() {
            return None;
        }
        self.panels().find(|p| p.is_visible_at(slot))
    }

    /// Allowed slots that `id` could take without a conflict
    pub fn available_slots(&self, id: PanelId) -> Vec<Slot> {
        let Some(panel) = self.get(id) else {
            return Vec::new();
        };
        panel
            .constraints
            .allowed_slots
            .iter()
            .copied()
            .filter(|&slot| self.occupant(slot, id).is_none())
            .collect()
    }

    /// Describe every broken layout invariant
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        for id in self.catalogue.ids() {
            if !self.panels.contains_key(&id) {
                violations.push(format!("{} has no configuration", id));
            }
        }

        for panel in self.panels() {
            if !panel.constraints.allows(panel.slot) {
                violations.push(format!("{} sits in disallowed slot {}", panel.id, panel.slot));
            }
            if let Some(size) = panel.size {
                if panel.clamp_size(size) != size {
                    violations.push(format!("{} size {} outside bounds", panel.id, size));
                }
            }
        }

        for slot in Slot::SINGLE_OCCUPANCY {
            let visible: Vec<_> = self
                .panels()
                .filter(|p| p.is_visible_at(slot))
                .map(|p| p.id.as_str())
                .collect();
            if visible.len() > 1 {
                violations.push(format!("{} held by {}", slot, visible.join(", ")));
            }
        }

        violations
    }

    /// Hide lower-priority panels sharing a single-occupancy slot
    ///
    /// The highest priority panel keeps the slot; ties go to the earlier
    /// catalogue entry. Returns the panels that were hidden.
    pub(crate) fn normalize_occupancy(&mut self) -> Vec<PanelId> {
        let mut hidden = Vec::new();
        for slot in Slot::SINGLE_OCCUPANCY {
            let mut holders: Vec<(i32, usize, PanelId)> = self
                .panels()
                .filter(|p| p.is_visible_at(slot))
                .filter_map(|p| Some((p.priority, self.catalogue.index_of(p.id)?, p.id)))
                .collect();
            if holders.len() < 2 {
                continue;
            }
            holders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
            for &(_, _, id) in &holders[1..] {
                self.hide(id);
                hidden.push(id);
            }
        }
        hidden
    }
}
