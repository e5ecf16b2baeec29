//! The player's side of an interaction.

use crate::core::{FactionId, ItemKind, ItemStack, PlayerId};

/// The live player an effect may target.
///
/// Passed to [`Effect::apply`](crate::effects::Effect::apply) as an `Option`:
/// world-triggered interactions have no player, and player-targeting effects
/// then do nothing.
pub trait Player {
    /// This player's runtime id.
    fn id(&self) -> PlayerId;

    /// Whether a single inventory stack holds at least `min_count` of `kind`.
    fn find_item(&self, kind: &ItemKind, min_count: u32) -> bool;

    /// Remove `amount` units of `kind` from one stack that holds at least
    /// that many. Callers check [`find_item`](Player::find_item) first.
    fn shrink_item(&mut self, kind: &ItemKind, amount: u32);

    /// Add `stack` to the player's inventory. What happens on a full
    /// inventory is the implementation's policy.
    fn give_item(&mut self, stack: ItemStack);

    /// Drop `stack` on the ground at the player's position.
    fn drop_near(&mut self, stack: ItemStack);

    /// Run `command` as this player. With `elevated`, the command runs with
    /// gamemaster permissions and suppressed feedback.
    fn run_command(&mut self, command: &str, elevated: bool);

    /// Advance the player's progression track by `xp` points.
    fn add_progression(&mut self, xp: i32);

    /// The player's persistent record, if one is loaded.
    fn record(&mut self) -> Option<&mut dyn PlayerRecord>;
}

/// Persistent per-player data: currency balance and faction reputation.
pub trait PlayerRecord {
    /// Add `amount` (possibly negative) to the reputation this player holds
    /// with `faction`.
    fn add_reputation(&mut self, amount: i32, faction: &FactionId);

    /// Add `amount` to the currency balance.
    fn credit_currency(&mut self, amount: u32);

    /// Remove `amount` from the currency balance. Handling of an
    /// insufficient balance is the implementation's policy.
    fn debit_currency(&mut self, amount: u32);
}
