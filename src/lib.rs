//! # dialogue-effects
//!
//! Effects that dialogue choices trigger when a player picks them.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven**: Effects arrive as JSON records inside dialogue
//!    definitions. Every record names its kind with a `"type"` tag that
//!    resolves through an explicit registry, never by guessing.
//!
//! 2. **Capability-Typed Collaborators**: Applying an effect reaches the
//!    world through narrow traits on the speaking actor and the player.
//!    A collaborator that lacks a capability answers `None` and the
//!    effect skips cleanly, so application never fails.
//!
//! 3. **No Partial Dialogue Data**: List decoding is atomic. One broken
//!    record rejects the whole choice rather than shipping half of its
//!    effects to runtime.
//!
//! ## Modules
//!
//! - `core`: Identifier newtypes, item stacks, equipment slots, RNG
//! - `capability`: Collaborator traits the effects act through
//! - `effects`: Effect descriptors and their application semantics
//! - `codec`: JSON record codec and the tag registry

pub mod core;
pub mod capability;
pub mod effects;
pub mod codec;

// Re-export commonly used types
pub use crate::core::{
    DialogueId, DialogueRng, EquipmentSlot, FactionId, ItemKind, ItemStack, LootTableId, NodePath,
    PlayerId, SlotParseError,
};

pub use crate::capability::{Actor, DialogueState, Player, PlayerRecord, ShopKeeper};

pub use crate::effects::{apply_all, Effect};

pub use crate::codec::{registry, DecodeError, EffectRegistry, EncodeError};
