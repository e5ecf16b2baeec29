//! The acting entity's side of an interaction.

use crate::capability::{DialogueState, ShopKeeper};
use crate::core::{DialogueRng, EquipmentSlot, FactionId, ItemStack, LootTableId};

/// The entity a dialogue choice acts through.
///
/// Every effect application receives an actor. Equipment and randomness are
/// universal; dialogue state, a shop, and a faction are optional capabilities
/// exposed as `Option` accessors.
///
/// ## Implementation Notes
///
/// - `dialogue`/`shop` answer consistently within one application
/// - `roll_loot` rolls in the actor's own context (position, identity)
/// - `rng` is the actor's deterministic stream; effects draw from it only
///   once all of their preconditions hold
pub trait Actor {
    /// Dialogue state, if this actor holds any.
    fn dialogue(&mut self) -> Option<&mut dyn DialogueState>;

    /// Shop capability, if this actor runs one.
    fn shop(&mut self) -> Option<&mut dyn ShopKeeper>;

    /// Equip `stack` in `slot`, replacing whatever was there.
    fn set_equipment(&mut self, slot: EquipmentSlot, stack: ItemStack);

    /// The faction this actor accrues reputation for, if any.
    fn faction(&self) -> Option<FactionId>;

    /// Roll a loot table against this actor's context.
    ///
    /// An unknown table yields an empty list; the caller decides whether
    /// that is worth reporting.
    fn roll_loot(&mut self, table: &LootTableId) -> Vec<ItemStack>;

    /// The actor's random stream.
    fn rng(&mut self) -> &mut DialogueRng;
}
