//! Applying effects to collaborators.
//!
//! `apply` has no return value and never propagates a failure. Every
//! documented precondition failure (missing capability, missing player, item
//! not found, flag already set, empty candidate list) degrades to a no-op, so
//! one inapplicable effect never aborts the rest of a choice's effect list or
//! the interaction itself. Apply-time logging is confined to loot rolls: a
//! warning when a roll yields nothing, a debug line per stack a shopkeeper
//! hands out.

use rustc_hash::FxHashSet;

use crate::capability::{Actor, DialogueState, Player};
use crate::core::{ItemStack, PlayerId};
use crate::effects::descriptor::{
    AddReputationToFaction, Effect, GiveFromLootTable, OpenShopMenu, SetActorMatchedItem,
    SetDialogueFromList, SetFlag, SetPlayerDialogue, SetRandomFlag,
};

impl Effect {
    /// Apply this effect to `actor` and, when present, `player`.
    ///
    /// The outcome is observed entirely through collaborator side effects.
    /// Effects whose preconditions do not hold do nothing; see each variant's
    /// documentation for its no-op conditions.
    pub fn apply(&self, actor: &mut dyn Actor, player: Option<&mut (dyn Player + '_)>) {
        match self {
            Effect::SetDialogue(e) => {
                if let Some(dialogue) = actor.dialogue() {
                    dialogue.set_node(&e.new_path, false);
                }
            }

            Effect::SetDialogueFromList(e) => apply_set_dialogue_from_list(e, actor),

            Effect::SetPlayerDialogue(e) => apply_set_player_dialogue(e, actor, player),

            Effect::OpenShopMenu(e) => apply_open_shop_menu(e, actor, player),

            Effect::RunCommand(e) => {
                if let Some(player) = player {
                    player.run_command(&e.command, true);
                }
            }

            Effect::TakeItem(e) => {
                if let Some(player) = player {
                    if e.amount > 0 && player.find_item(&e.item, e.amount) {
                        player.shrink_item(&e.item, e.amount);
                    }
                }
            }

            Effect::TakeMatchedItem => apply_take_matched_item(actor, player),

            Effect::SetActorItem(e) => {
                actor.set_equipment(e.slot, ItemStack::one(e.item.clone()));
            }

            Effect::SetActorMatchedItem(e) => apply_set_actor_matched_item(e, actor, player),

            Effect::GiveItem(e) => {
                if let Some(player) = player {
                    if e.amount > 0 {
                        player.give_item(ItemStack::new(e.item.clone(), e.amount));
                    }
                }
            }

            Effect::GiveFromLootTable(e) => apply_give_from_loot_table(e, actor, player),

            Effect::AddReputationToFaction(e) => apply_add_reputation(e, actor, player),

            Effect::AddCurrency(e) => {
                if let Some(player) = player {
                    if let Some(record) = player.record() {
                        match e.amount {
                            0 => {}
                            amount if amount > 0 => record.credit_currency(amount as u32),
                            amount => record.debit_currency(amount.unsigned_abs()),
                        }
                    }
                }
            }

            Effect::AddProgressionPoints(e) => {
                if let Some(player) = player {
                    player.add_progression(e.xp);
                }
            }

            Effect::TriggerExplosionTimer => {
                if let Some(shop) = actor.shop() {
                    shop.arm_explosion_timer();
                }
            }

            Effect::SetFlag(e) => apply_set_flag(e, actor, player),

            Effect::SetRandomFlag(e) => apply_set_random_flag(e, actor, player),
        }
    }
}

/// Apply an ordered effect list in declaration order.
///
/// Each effect applies independently; there is no rollback when a later one
/// no-ops.
pub fn apply_all(
    effects: &[Effect],
    actor: &mut dyn Actor,
    mut player: Option<&mut (dyn Player + '_)>,
) {
    for effect in effects {
        effect.apply(actor, player.as_deref_mut());
    }
}

fn apply_set_dialogue_from_list(e: &SetDialogueFromList, actor: &mut dyn Actor) {
    // Capability first: a no-op must not advance the actor's random stream.
    if actor.dialogue().is_none() {
        return;
    }
    let Some(path) = actor.rng().pick(&e.new_paths).cloned() else {
        return;
    };
    if let Some(dialogue) = actor.dialogue() {
        dialogue.set_node(&path, false);
    }
}

fn apply_set_player_dialogue(
    e: &SetPlayerDialogue,
    actor: &mut dyn Actor,
    player: Option<&mut (dyn Player + '_)>,
) {
    let Some(player) = player else { return };
    let player_id = player.id();
    if let Some(dialogue) = actor.dialogue() {
        dialogue.set_dialogue_for_player(player_id, &e.dialogue);
    }
}

fn apply_open_shop_menu(
    e: &OpenShopMenu,
    actor: &mut dyn Actor,
    player: Option<&mut (dyn Player + '_)>,
) {
    let Some(player) = player else { return };
    let Some(shop) = actor.shop() else { return };
    if !shop.stock_generated() {
        shop.generate_stock(&e.loot_table);
    }
    shop.open_menu_for(player);
}

fn apply_take_matched_item(actor: &mut dyn Actor, player: Option<&mut (dyn Player + '_)>) {
    let Some(player) = player else { return };
    let Some(dialogue) = actor.dialogue() else { return };
    let Some(item) = dialogue.matched_item_for(player.id()) else {
        return;
    };
    if player.find_item(&item, 1) {
        player.shrink_item(&item, 1);
    }
}

fn apply_set_actor_matched_item(
    e: &SetActorMatchedItem,
    actor: &mut dyn Actor,
    player: Option<&mut (dyn Player + '_)>,
) {
    let Some(player) = player else { return };
    let Some(dialogue) = actor.dialogue() else { return };
    let Some(item) = dialogue.matched_item_for(player.id()) else {
        return;
    };
    if player.find_item(&item, 1) {
        actor.set_equipment(e.slot, ItemStack::one(item.clone()));
        player.shrink_item(&item, 1);
    }
}

fn apply_give_from_loot_table(
    e: &GiveFromLootTable,
    actor: &mut dyn Actor,
    player: Option<&mut (dyn Player + '_)>,
) {
    let Some(player) = player else { return };
    let loot = actor.roll_loot(&e.loot_table);
    if loot.is_empty() {
        tracing::warn!(loot_table = %e.loot_table, "loot roll produced no items");
    }
    let from_shopkeeper = actor.shop().is_some();
    for stack in loot {
        if from_shopkeeper {
            tracing::debug!(
                loot_table = %e.loot_table,
                item = %stack.kind,
                count = stack.count,
                "shop loot granted"
            );
        }
        player.drop_near(stack);
    }
}

fn apply_add_reputation(
    e: &AddReputationToFaction,
    actor: &mut dyn Actor,
    player: Option<&mut (dyn Player + '_)>,
) {
    let Some(faction) = actor.faction() else { return };
    let Some(player) = player else { return };
    let Some(record) = player.record() else { return };
    record.add_reputation(e.reputation, &faction);
}

fn apply_set_flag(e: &SetFlag, actor: &mut dyn Actor, player: Option<&mut (dyn Player + '_)>) {
    let Some(target) = flag_target(e.player_specific, player) else {
        return;
    };
    if let Some(dialogue) = actor.dialogue() {
        flag_set(dialogue, target).insert(e.flag.clone());
    }
}

fn apply_set_random_flag(
    e: &SetRandomFlag,
    actor: &mut dyn Actor,
    player: Option<&mut (dyn Player + '_)>,
) {
    if e.flags.is_empty() {
        return;
    }
    let Some(target) = flag_target(e.player_specific, player) else {
        return;
    };
    let already_set = match actor.dialogue() {
        Some(dialogue) => {
            let flags = flag_set(dialogue, target);
            e.flags.iter().any(|flag| flags.contains(flag))
        }
        None => return,
    };
    if already_set {
        return;
    }
    let Some(flag) = actor.rng().pick(&e.flags).cloned() else {
        return;
    };
    if let Some(dialogue) = actor.dialogue() {
        flag_set(dialogue, target).insert(flag);
    }
}

/// Resolve which flag set a flag effect targets.
///
/// `None` means the effect cannot apply (player-specific target with no
/// player present). `Some(None)` is the shared set, `Some(Some(id))` the
/// per-player set.
fn flag_target(
    player_specific: bool,
    player: Option<&mut (dyn Player + '_)>,
) -> Option<Option<PlayerId>> {
    match (player_specific, player) {
        (true, Some(player)) => Some(Some(player.id())),
        (true, None) => None,
        (false, _) => Some(None),
    }
}

fn flag_set(
    dialogue: &mut dyn DialogueState,
    target: Option<PlayerId>,
) -> &mut FxHashSet<String> {
    match target {
        Some(player) => dialogue.player_flags(player),
        None => dialogue.flags(),
    }
}
