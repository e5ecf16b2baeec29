//! Equipment slot names and their strict parse.
//!
//! Slot names appear in effect records (`"slot": "head"`). Parsing is
//! closed-world: a name outside the six known slots is a data error and must
//! surface while the record is being loaded, not when it is applied.
//!
//! ```
//! use dialogue_effects::core::EquipmentSlot;
//!
//! let slot: EquipmentSlot = "mainhand".parse().unwrap();
//! assert_eq!(slot, EquipmentSlot::MainHand);
//! assert!("not_a_slot".parse::<EquipmentSlot>().is_err());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A slot name that matches none of the known slots.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("not a valid name for an equipment slot: {0:?}")]
pub struct SlotParseError(pub String);

/// Where an item sits on the acting entity.
///
/// Serializes as its lowercase name; deserializing an unknown name fails with
/// [`SlotParseError`]. Defaults to [`MainHand`](EquipmentSlot::MainHand), the
/// slot effect records may omit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EquipmentSlot {
    #[default]
    MainHand,
    OffHand,
    Feet,
    Legs,
    Chest,
    Head,
}

impl EquipmentSlot {
    /// All slots, in wire-name order.
    pub const ALL: [EquipmentSlot; 6] = [
        EquipmentSlot::MainHand,
        EquipmentSlot::OffHand,
        EquipmentSlot::Feet,
        EquipmentSlot::Legs,
        EquipmentSlot::Chest,
        EquipmentSlot::Head,
    ];

    /// The slot's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EquipmentSlot::MainHand => "mainhand",
            EquipmentSlot::OffHand => "offhand",
            EquipmentSlot::Feet => "feet",
            EquipmentSlot::Legs => "legs",
            EquipmentSlot::Chest => "chest",
            EquipmentSlot::Head => "head",
        }
    }
}

impl FromStr for EquipmentSlot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainhand" => Ok(EquipmentSlot::MainHand),
            "offhand" => Ok(EquipmentSlot::OffHand),
            "feet" => Ok(EquipmentSlot::Feet),
            "legs" => Ok(EquipmentSlot::Legs),
            "chest" => Ok(EquipmentSlot::Chest),
            "head" => Ok(EquipmentSlot::Head),
            _ => Err(SlotParseError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for EquipmentSlot {
    type Error = SlotParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EquipmentSlot> for String {
    fn from(slot: EquipmentSlot) -> Self {
        slot.as_str().to_owned()
    }
}

impl std::fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
