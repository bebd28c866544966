//! Placement slots
//!
//! A slot is a named region of the window a panel can be anchored to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Region a panel can be placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Left,
    Right,
    Bottom,
    Center,
    Hidden,
}

impl Slot {
    /// All slots for iteration
    pub const ALL: [Slot; 5] = [
        Slot::Left,
        Slot::Right,
        Slot::Bottom,
        Slot::Center,
        Slot::Hidden,
    ];

    /// Slots that hold at most one visible panel
    pub const SINGLE_OCCUPANCY: [Slot; 3] = [Slot::Left, Slot::Right, Slot::Bottom];

    /// Whether at most one visible panel may sit here
    pub fn is_single_occupancy(&self) -> bool {
        matches!(self, Slot::Left | Slot::Right | Slot::Bottom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Left => "left",
            Slot::Right => "right",
            Slot::Bottom => "bottom",
            Slot::Center => "center",
            Slot::Hidden => "hidden",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Slot::Left),
            "right" => Ok(Slot::Right),
            "bottom" => Ok(Slot::Bottom),
            "center" => Ok(Slot::Center),
            "hidden" => Ok(Slot::Hidden),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_occupancy() {
        assert!(Slot::Left.is_single_occupancy());
        assert!(Slot::Right.is_single_occupancy());
        assert!(Slot::Bottom.is_single_occupancy());
        assert!(!Slot::Center.is_single_occupancy());
        assert!(!Slot::Hidden.is_single_occupancy());
    }

    #[test]
    fn test_parse_and_display() {
        for slot in Slot::ALL {
            assert_eq!(slot.to_string().parse::<Slot>(), Ok(slot));
        }
        assert!("top".parse::<Slot>().is_err());
        assert!("Left".parse::<Slot>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Slot::Bottom).unwrap(), "\"bottom\"");
        let slot: Slot = serde_json::from_str("\"center\"").unwrap();
        assert_eq!(slot, Slot::Center);
    }
}
