//! Catalogue configuration
//!
//! Users can tune the built-in panels in `~/.config/panel-dock/panels.yaml`.
//! Only known panel ids can be configured; the set of panels is fixed.
//!
//! ```yaml
//! panels:
//!   - id: terminal
//!     default_slot: right
//!     size: 420
//!     priority: 120
//!   - id: search
//!     allowed_slots: [left, bottom]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::panel::{Catalogue, CatalogueError, PanelId, Slot};

/// Root structure of a catalogue YAML file
#[derive(Debug, Default, Deserialize)]
pub struct CatalogueConfig {
    #[serde(default)]
    pub panels: Vec<PanelOverride>,
}

/// Overrides for a single built-in panel; absent fields keep the default
#[derive(Debug, Default, Deserialize)]
pub struct PanelOverride {
    pub id: String,
    #[serde(default)]
    pub default_slot: Option<String>,
    #[serde(default)]
    pub default_visible: Option<bool>,
    #[serde(default)]
    pub size: Option<f32>,
    #[serde(default)]
    pub min_size: Option<f32>,
    #[serde(default)]
    pub max_size: Option<f32>,
    #[serde(default)]
    pub allowed_slots: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_slot: Option<String>,
    #[serde(default)]
    pub can_be_modal: Option<bool>,
    #[serde(default)]
    pub priority: Option<i32>,
}

fn parse_panel_id(s: &str) -> Result<PanelId, CatalogueError> {
    s.parse()
        .map_err(|()| CatalogueError::UnknownPanel(s.to_string()))
}

fn parse_slot(s: &str) -> Result<Slot, CatalogueError> {
    s.to_lowercase()
        .parse()
        .map_err(|()| CatalogueError::UnknownSlot(s.to_string()))
}

impl CatalogueConfig {
    /// Apply these overrides on top of `base`
    pub fn apply(&self, base: &Catalogue) -> Result<Catalogue, CatalogueError> {
        let mut entries = base.entries().to_vec();

        for patch in &self.panels {
            let id = parse_panel_id(&patch.id)?;
            let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
                return Err(CatalogueError::UnknownPanel(patch.id.clone()));
            };

            if let Some(ref slots) = patch.allowed_slots {
                entry.constraints.allowed_slots = slots
                    .iter()
                    .map(|s| parse_slot(s))
                    .collect::<Result<_, _>>()?;
            }
            if let Some(ref slot) = patch.default_slot {
                entry.default_slot = parse_slot(slot)?;
            }
            if let Some(ref slot) = patch.preferred_slot {
                entry.constraints.preferred_slot = parse_slot(slot)?;
            }
            if let Some(visible) = patch.default_visible {
                entry.default_visible = visible;
            }
            if let Some(modal) = patch.can_be_modal {
                entry.constraints.can_be_modal = modal;
            }
            if let Some(priority) = patch.priority {
                entry.priority = priority;
            }
            if patch.size.is_some() {
                entry.size = patch.size;
            }
            if patch.min_size.is_some() {
                entry.min_size = patch.min_size;
            }
            if patch.max_size.is_some() {
                entry.max_size = patch.max_size;
            }
        }

        Catalogue::from_entries(entries)
    }
}

/// Parse overrides from a YAML string and apply them to the built-in catalogue
pub fn parse_catalogue_yaml(yaml: &str) -> Result<Catalogue, CatalogueError> {
    let config: CatalogueConfig =
        serde_yaml::from_str(yaml).map_err(|e| CatalogueError::ParseError(e.to_string()))?;
    config.apply(&Catalogue::builtin())
}

/// Load a catalogue from a YAML override file
pub fn load_catalogue_file(path: &Path) -> Result<Catalogue, CatalogueError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| CatalogueError::IoError(e.to_string()))?;
    parse_catalogue_yaml(&content)
}

impl Catalogue {
    /// Load the catalogue from the user's config dir, or the built-in one
    ///
    /// Any error in the override file is logged and the built-in catalogue
    /// is used instead.
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::catalogue_file() else {
            tracing::debug!("No config directory available, using built-in panels");
            return Self::builtin();
        };

        if !path.exists() {
            tracing::debug!(
                "Panel config not found at {}, using built-in panels",
                path.display()
            );
            return Self::builtin();
        }

        match load_catalogue_file(&path) {
            Ok(catalogue) => {
                tracing::info!("Loaded panel config from {}", path.display());
                catalogue
            }
            Err(e) => {
                tracing::warn!("Failed to load panel config at {}: {}", path.display(), e);
                Self::builtin()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_builtin() {
        assert_eq!(parse_catalogue_yaml("panels: []").unwrap(), Catalogue::builtin());
        assert_eq!(parse_catalogue_yaml("{}").unwrap(), Catalogue::builtin());
    }

    #[test]
    fn test_override_fields() {
        let yaml = r#"
panels:
  - id: terminal
    default_slot: right
    default_visible: true
    size: 420
    priority: 120
"#;
        let catalogue = parse_catalogue_yaml(yaml).unwrap();
        let terminal = catalogue.entry(PanelId::Terminal).unwrap();
        assert_eq!(terminal.default_slot, Slot::Right);
        assert!(terminal.default_visible);
        assert_eq!(terminal.size, Some(420.0));
        assert_eq!(terminal.priority, 120);
        // Untouched fields keep their defaults
        assert_eq!(terminal.constraints.preferred_slot, Slot::Bottom);
    }

    #[test]
    fn test_slot_names_case_insensitive() {
        let yaml = "panels:\n  - id: search\n    allowed_slots: [Left, BOTTOM]\n";
        let catalogue = parse_catalogue_yaml(yaml).unwrap();
        assert_eq!(
            catalogue.entry(PanelId::Search).unwrap().constraints.allowed_slots,
            vec![Slot::Left, Slot::Bottom]
        );
    }

    #[test]
    fn test_unknown_panel_rejected() {
        let result = parse_catalogue_yaml("panels:\n  - id: minimap\n");
        assert_eq!(result, Err(CatalogueError::UnknownPanel("minimap".to_string())));
    }

    #[test]
    fn test_unknown_slot_rejected() {
        let result = parse_catalogue_yaml("panels:\n  - id: docs\n    default_slot: top\n");
        assert_eq!(result, Err(CatalogueError::UnknownSlot("top".to_string())));
    }

    #[test]
    fn test_inconsistent_override_rejected() {
        // Default slot no longer allowed
        let yaml = "panels:\n  - id: docs\n    allowed_slots: [left]\n";
        assert!(matches!(
            parse_catalogue_yaml(yaml),
            Err(CatalogueError::DisallowedSlot { id: PanelId::Docs, .. })
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            parse_catalogue_yaml("panels: [unclosed"),
            Err(CatalogueError::ParseError(_))
        ));
    }
}
