//! Shop capability of an acting entity.

use crate::capability::Player;
use crate::core::LootTableId;

/// A shopkeeper's stock and menu, plus its self-destruct countdown.
///
/// Stock is generated lazily: the first shop-opening effect rolls it from a
/// loot table, and later openings reuse the same stock.
pub trait ShopKeeper {
    /// Whether stock has been generated already.
    fn stock_generated(&self) -> bool;

    /// Generate stock from `table`, using the shopkeeper's own random
    /// source. Called at most once per shopkeeper.
    fn generate_stock(&mut self, table: &LootTableId);

    /// Open the shop menu for `player`.
    fn open_menu_for(&mut self, player: &mut dyn Player);

    /// Arm the shopkeeper's explosion countdown.
    fn arm_explosion_timer(&mut self);
}
