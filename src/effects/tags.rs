//! Stable wire tags for every effect kind.
//!
//! The tag is the value of the `"type"` field in a serialized effect record.
//! It exists only for serialization lookup; code never branches on it.

/// Tag for [`Effect::SetDialogue`](crate::effects::Effect::SetDialogue).
pub const SET_DIALOGUE: &str = "set_dialogue";
/// Tag for [`Effect::SetDialogueFromList`](crate::effects::Effect::SetDialogueFromList).
pub const SET_DIALOGUE_FROM_LIST: &str = "set_dialogue_from_list";
/// Tag for [`Effect::SetPlayerDialogue`](crate::effects::Effect::SetPlayerDialogue).
pub const SET_PLAYER_DIALOGUE: &str = "set_player_dialogue";
/// Tag for [`Effect::OpenShopMenu`](crate::effects::Effect::OpenShopMenu).
pub const OPEN_SHOP_MENU: &str = "open_shop_menu";
/// Tag for [`Effect::RunCommand`](crate::effects::Effect::RunCommand).
pub const RUN_COMMAND: &str = "run_command";
/// Tag for [`Effect::TakeItem`](crate::effects::Effect::TakeItem).
pub const TAKE_ITEM: &str = "take_item";
/// Tag for [`Effect::TakeMatchedItem`](crate::effects::Effect::TakeMatchedItem).
pub const TAKE_MATCHED_ITEM: &str = "take_matched_item";
/// Tag for [`Effect::SetActorItem`](crate::effects::Effect::SetActorItem).
pub const SET_ACTOR_ITEM: &str = "set_actor_item";
/// Tag for [`Effect::SetActorMatchedItem`](crate::effects::Effect::SetActorMatchedItem).
pub const SET_ACTOR_MATCHED_ITEM: &str = "set_actor_matched_item";
/// Tag for [`Effect::GiveItem`](crate::effects::Effect::GiveItem).
pub const GIVE_ITEM: &str = "give_item";
/// Tag for [`Effect::GiveFromLootTable`](crate::effects::Effect::GiveFromLootTable).
pub const GIVE_FROM_LOOT_TABLE: &str = "give_from_loot_table";
/// Tag for [`Effect::AddReputationToFaction`](crate::effects::Effect::AddReputationToFaction).
pub const ADD_REPUTATION_TO_FACTION: &str = "add_reputation_to_faction";
/// Tag for [`Effect::AddCurrency`](crate::effects::Effect::AddCurrency).
pub const ADD_CURRENCY: &str = "add_currency";
/// Tag for [`Effect::AddProgressionPoints`](crate::effects::Effect::AddProgressionPoints).
pub const ADD_PROGRESSION_POINTS: &str = "add_progression_points";
/// Tag for [`Effect::TriggerExplosionTimer`](crate::effects::Effect::TriggerExplosionTimer).
pub const TRIGGER_EXPLOSION_TIMER: &str = "trigger_explosion_timer";
/// Tag for [`Effect::SetFlag`](crate::effects::Effect::SetFlag).
pub const SET_FLAG: &str = "set_flag";
/// Tag for [`Effect::SetRandomFlag`](crate::effects::Effect::SetRandomFlag).
pub const SET_RANDOM_FLAG: &str = "set_random_flag";

/// Every built-in tag, in registration order.
pub const ALL: [&str; 17] = [
    SET_DIALOGUE,
    SET_DIALOGUE_FROM_LIST,
    SET_PLAYER_DIALOGUE,
    OPEN_SHOP_MENU,
    RUN_COMMAND,
    TAKE_ITEM,
    TAKE_MATCHED_ITEM,
    SET_ACTOR_ITEM,
    SET_ACTOR_MATCHED_ITEM,
    GIVE_ITEM,
    GIVE_FROM_LOOT_TABLE,
    ADD_REPUTATION_TO_FACTION,
    ADD_CURRENCY,
    ADD_PROGRESSION_POINTS,
    TRIGGER_EXPLOSION_TIMER,
    SET_FLAG,
    SET_RANDOM_FLAG,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tags_are_distinct() {
        let mut sorted: Vec<_> = ALL.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ALL.len());
    }

    #[test]
    fn test_tags_are_snake_case() {
        for tag in ALL {
            assert!(
                tag.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "tag {tag:?} is not snake_case"
            );
        }
    }
}
