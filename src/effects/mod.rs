//! Effect system for dialogue choices.
//!
//! Effects are the building blocks of choice consequences:
//! - `Effect`: closed enumeration of everything a choice can cause
//! - `tags`: the stable wire names the codec dispatches on
//! - `apply`/`apply_all`: execution against capability handles
//!
//! ## Design Philosophy
//!
//! Descriptors are pure data, decoded once and never mutated. All behavior
//! lives in `apply`, a single exhaustive match, so adding a variant without
//! deciding its behavior is a compile error. Effects act only through the
//! capability traits; they hold no game state of their own.

mod apply;
mod descriptor;
pub mod tags;

pub use apply::apply_all;
pub use descriptor::{
    AddCurrency, AddProgressionPoints, AddReputationToFaction, Effect, GiveFromLootTable,
    GiveItem, OpenShopMenu, RunCommand, SetActorItem, SetActorMatchedItem, SetDialogue,
    SetDialogueFromList, SetFlag, SetPlayerDialogue, SetRandomFlag, TakeItem,
};
