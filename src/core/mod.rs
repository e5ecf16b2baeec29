//! Core value types: identifiers, item stacks, equipment slots, RNG.
//!
//! This module contains the small shared vocabulary that effect descriptors
//! and capability handles exchange. Nothing here knows what an effect does.

pub mod id;
pub mod item;
pub mod rng;
pub mod slot;

pub use id::{DialogueId, FactionId, ItemKind, LootTableId, NodePath, PlayerId};
pub use item::ItemStack;
pub use rng::DialogueRng;
pub use slot::{EquipmentSlot, SlotParseError};
