//! Layout persistence format
//!
//! Only `{id, slot, isVisible, size}` is written per panel. Constraints and
//! priority always come from the catalogue so a stored layout survives
//! catalogue upgrades.
//!
//! ```json
//! {"panels":[{"id":"file-tree","slot":"left","isVisible":true,"size":250.0}]}
//! ```

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::catalogue::{Catalogue, PanelId};
use super::slot::Slot;
use super::state::PanelState;

/// Key the serialized layout is stored under
pub const STORAGE_KEY: &str = "panel-dock.panelState";

#[derive(Debug, Serialize)]
struct PersistedLayout {
    panels: Vec<PersistedPanel>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedPanel {
    id: PanelId,
    slot: Slot,
    is_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<f32>,
}

/// Serialize the persisted subset of a layout, in catalogue order
pub fn serialize(state: &PanelState) -> serde_json::Result<String> {
    let layout = PersistedLayout {
        panels: state
            .panels()
            .map(|p| PersistedPanel {
                id: p.id,
                slot: p.slot,
                is_visible: p.is_visible,
                size: p.size,
            })
            .collect(),
    };
    serde_json::to_string(&layout)
}

/// Restore a layout on top of the catalogue defaults
///
/// Never fails: unknown ids, unknown or disallowed slots and mistyped
/// fields are skipped, and input that is not JSON yields the defaults.
/// Visible panels left sharing a single-occupancy slot are reduced to the
/// highest priority one.
pub fn deserialize(catalogue: Arc<Catalogue>, input: &str) -> PanelState {
    let mut state = PanelState::new(catalogue);

    let data: Value = match serde_json::from_str(input) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Failed to parse stored layout, using defaults: {}", e);
            return state;
        }
    };

    let Some(stored_panels) = data.get("panels").and_then(Value::as_array) else {
        tracing::debug!("Stored layout has no panel list, using defaults");
        return state;
    };

    for stored in stored_panels {
        let Some(name) = stored.get("id").and_then(Value::as_str) else {
            continue;
        };
        let Ok(id) = name.parse::<PanelId>() else {
            tracing::debug!("Ignoring stored layout for unknown panel {}", name);
            continue;
        };
        overlay(&mut state, id, stored);
    }

    let hidden = state.normalize_occupancy();
    if !hidden.is_empty() {
        tracing::debug!(?hidden, "Stored layout had conflicting panels");
    }

    state
}

fn overlay(state: &mut PanelState, id: PanelId, stored: &Value) {
    let Some(panel) = state.get_mut(id) else {
        return;
    };

    if let Some(slot) = stored
        .get("slot")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Slot>().ok())
    {
        if panel.constraints.allows(slot) {
            panel.slot = slot;
        } else {
            tracing::debug!(panel = %id, %slot, "Ignoring stored slot not allowed by catalogue");
        }
    }

    if let Some(visible) = stored.get("isVisible").and_then(Value::as_bool) {
        panel.is_visible = visible;
    }

    if let Some(size) = stored.get("size").and_then(Value::as_f64) {
        if panel.is_resizable() && size.is_finite() {
            // Clamp in f64: values beyond f32 range land on a bound
            let min = panel.min_size.map_or(0.0, f64::from);
            let max = panel.max_size.map_or(f64::from(f32::MAX), f64::from);
            panel.size = Some(size.max(min).min(max) as f32);
        }
    }
}
