//! Panel catalogue
//!
//! The immutable list of panels the layout knows about, with their default
//! placement, size bounds and positioning constraints. The catalogue is
//! built once at startup and shared (`Arc<Catalogue>`) by every state
//! derived from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::slot::Slot;

/// Default sizes in logical pixels (width for left/right, height for bottom)
pub const DEFAULT_LEFT_SIZE: f32 = 250.0;
pub const DEFAULT_RIGHT_SIZE: f32 = 400.0;
pub const DEFAULT_BOTTOM_SIZE: f32 = 300.0;

pub const MIN_LEFT_SIZE: f32 = 200.0;
pub const MIN_RIGHT_SIZE: f32 = 300.0;
pub const MIN_BOTTOM_SIZE: f32 = 150.0;

pub const MAX_LEFT_SIZE: f32 = 600.0;
pub const MAX_RIGHT_SIZE: f32 = 800.0;
pub const MAX_BOTTOM_SIZE: f32 = 600.0;

/// Unique identifier for a panel type
///
/// The set is closed: new panels are added by extending this enum and the
/// built-in catalogue, never at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelId {
    FileTree,
    Terminal,
    Docs,
    Search,
    Settings,
    CommandPalette,
}

impl PanelId {
    pub const ALL: [PanelId; 6] = [
        PanelId::FileTree,
        PanelId::Terminal,
        PanelId::Docs,
        PanelId::Search,
        PanelId::Settings,
        PanelId::CommandPalette,
    ];

    /// Identifier used in persisted layouts and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::FileTree => "file-tree",
            PanelId::Terminal => "terminal",
            PanelId::Docs => "docs",
            PanelId::Search => "search",
            PanelId::Settings => "settings",
            PanelId::CommandPalette => "command-palette",
        }
    }

    /// Get the display name for this panel
    pub fn display_name(&self) -> &'static str {
        match self {
            PanelId::FileTree => "Explorer",
            PanelId::Terminal => "Terminal",
            PanelId::Docs => "Docs",
            PanelId::Search => "Search",
            PanelId::Settings => "Settings",
            PanelId::CommandPalette => "Command Palette",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

/// Where a panel may be positioned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionConstraints {
    /// Slots this panel may occupy (`hidden` is always allowed implicitly)
    pub allowed_slots: Vec<Slot>,
    /// Fallback target when the panel is displaced
    pub preferred_slot: Slot,
    /// Whether the panel can open as a center modal
    pub can_be_modal: bool,
}

impl PositionConstraints {
    /// Whether `slot` is a legal placement for this panel
    pub fn allows(&self, slot: Slot) -> bool {
        slot == Slot::Hidden || self.allowed_slots.contains(&slot)
    }
}

/// A single catalogue entry
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueEntry {
    pub id: PanelId,
    pub default_slot: Slot,
    pub default_visible: bool,
    /// Default size; `None` for fixed panels such as the command palette
    pub size: Option<f32>,
    pub min_size: Option<f32>,
    pub max_size: Option<f32>,
    pub constraints: PositionConstraints,
    /// Higher wins position conflicts
    pub priority: i32,
}

impl CatalogueEntry {
    fn docked(
        id: PanelId,
        slot: Slot,
        (size, min, max): (f32, f32, f32),
        allowed_slots: Vec<Slot>,
        can_be_modal: bool,
        priority: i32,
    ) -> Self {
        Self {
            id,
            default_slot: slot,
            default_visible: false,
            size: Some(size),
            min_size: Some(min),
            max_size: Some(max),
            constraints: PositionConstraints {
                allowed_slots,
                preferred_slot: slot,
                can_be_modal,
            },
            priority,
        }
    }

    fn validate(&self) -> Result<(), CatalogueError> {
        for slot in [self.default_slot, self.constraints.preferred_slot] {
            if !self.constraints.allows(slot) {
                return Err(CatalogueError::DisallowedSlot { id: self.id, slot });
            }
        }
        if let (Some(min), Some(max)) = (self.min_size, self.max_size) {
            if min > max {
                return Err(CatalogueError::InvalidBounds { id: self.id, min, max });
            }
        }
        Ok(())
    }

    /// Clamp a size to this entry's bounds
    pub fn clamp_size(&self, size: f32) -> f32 {
        let min = self.min_size.unwrap_or(0.0);
        let max = self.max_size.unwrap_or(f32::INFINITY);
        size.max(min).min(max)
    }
}

/// Errors raised while building a catalogue
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogueError {
    /// The same id appears twice
    DuplicatePanel(PanelId),
    /// An id string in a config file is not a known panel
    UnknownPanel(String),
    /// A slot string in a config file is not a known slot
    UnknownSlot(String),
    /// Default or preferred slot is not in the allowed set
    DisallowedSlot { id: PanelId, slot: Slot },
    /// `min_size` is larger than `max_size`
    InvalidBounds { id: PanelId, min: f32, max: f32 },
    IoError(String),
    ParseError(String),
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::DuplicatePanel(id) => write!(f, "Duplicate panel: {}", id),
            CatalogueError::UnknownPanel(id) => write!(f, "Unknown panel: {}", id),
            CatalogueError::UnknownSlot(slot) => write!(f, "Unknown slot: {}", slot),
            CatalogueError::DisallowedSlot { id, slot } => {
                write!(f, "Panel {} cannot be positioned at {}", id, slot)
            }
            CatalogueError::InvalidBounds { id, min, max } => {
                write!(f, "Panel {} has min size {} above max size {}", id, min, max)
            }
            CatalogueError::IoError(e) => write!(f, "IO error: {}", e),
            CatalogueError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for CatalogueError {}

/// Ordered, validated list of known panels
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalogue {
    /// The panels shipped with the application
    ///
    /// Everything starts hidden; the command palette is a fixed-size center
    /// modal that outranks every docked panel.
    pub fn builtin() -> Self {
        use Slot::*;

        let left = (DEFAULT_LEFT_SIZE, MIN_LEFT_SIZE, MAX_LEFT_SIZE);
        let right = (DEFAULT_RIGHT_SIZE, MIN_RIGHT_SIZE, MAX_RIGHT_SIZE);
        let bottom = (DEFAULT_BOTTOM_SIZE, MIN_BOTTOM_SIZE, MAX_BOTTOM_SIZE);

        let entries = vec![
            CatalogueEntry::docked(PanelId::FileTree, Left, left, vec![Left, Right], false, 100),
            CatalogueEntry::docked(
                PanelId::Terminal,
                Bottom,
                bottom,
                vec![Bottom, Left, Right],
                false,
                90,
            ),
            CatalogueEntry::docked(PanelId::Docs, Right, right, vec![Right, Left, Center], true, 70),
            CatalogueEntry::docked(
                PanelId::Search,
                Left,
                left,
                vec![Left, Right, Bottom, Center],
                true,
                60,
            ),
            CatalogueEntry::docked(
                PanelId::Settings,
                Right,
                right,
                vec![Right, Left, Center],
                true,
                50,
            ),
            CatalogueEntry {
                id: PanelId::CommandPalette,
                default_slot: Center,
                default_visible: false,
                size: None,
                min_size: None,
                max_size: None,
                constraints: PositionConstraints {
                    allowed_slots: vec![Center],
                    preferred_slot: Center,
                    can_be_modal: true,
                },
                priority: 999,
            },
        ];

        Self { entries }
    }

    /// Build a catalogue from explicit entries, validating each one
    ///
    /// Default sizes are clamped into their bounds.
    pub fn from_entries(entries: Vec<CatalogueEntry>) -> Result<Self, CatalogueError> {
        let mut checked: Vec<CatalogueEntry> = Vec::with_capacity(entries.len());
        for mut entry in entries {
            if checked.iter().any(|e| e.id == entry.id) {
                return Err(CatalogueError::DuplicatePanel(entry.id));
            }
            entry.validate()?;
            entry.size = entry.size.map(|s| entry.clamp_size(s));
            checked.push(entry);
        }
        Ok(Self { entries: checked })
    }

    /// Look up the entry for a panel
    pub fn entry(&self, id: PanelId) -> Option<&CatalogueEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.entry(id).is_some()
    }

    /// Entries in catalogue order
    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    /// Panel ids in catalogue order
    pub fn ids(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Position of a panel in catalogue order (used for deterministic tie-breaks)
    pub fn index_of(&self, id: PanelId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only the given panels (in catalogue order)
    pub fn restricted_to(&self, ids: &[PanelId]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| ids.contains(&e.id))
                .cloned()
                .collect(),
        }
    }
}
