//! Effect descriptors.
//!
//! An effect is an immutable, data-declared rule for mutating game state when
//! a dialogue choice fires. Descriptors are decoded once at data-load time and
//! never change afterwards; all state lives with the collaborators they are
//! applied to.

use serde::{Deserialize, Serialize};

use crate::core::{DialogueId, EquipmentSlot, ItemKind, LootTableId, NodePath};
use crate::effects::tags;

/// One effect attached to a dialogue choice.
///
/// A closed set: every kind of state change a choice can cause is a variant
/// here, and applying one is a single exhaustive match, so a new variant
/// without an apply arm will not compile.
///
/// Field-carrying variants wrap one payload struct each; the payload's serde
/// derive is the variant's decode and encode rule. The two field-less
/// variants are unit variants with a single canonical value.
///
/// ## Dialogue
///
/// Move the conversation or start one: `SetDialogue`, `SetDialogueFromList`,
/// `SetPlayerDialogue`.
///
/// ## Shop
///
/// `OpenShopMenu` lazily stocks and opens the actor's shop.
///
/// ## Commands
///
/// `RunCommand` runs a command as the choosing player.
///
/// ## Items
///
/// Move items between the player, the actor's equipment, and loot tables:
/// `TakeItem`, `TakeMatchedItem`, `SetActorItem`, `SetActorMatchedItem`,
/// `GiveItem`, `GiveFromLootTable`.
///
/// ## Player progression
///
/// `AddReputationToFaction`, `AddCurrency`, `AddProgressionPoints`.
///
/// ## World
///
/// `TriggerExplosionTimer` arms the actor's self-destruct countdown.
///
/// ## Flags
///
/// Mark conversation state for later conditions: `SetFlag`, `SetRandomFlag`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    // === Dialogue ===

    /// Move the conversation to a fixed node.
    SetDialogue(SetDialogue),

    /// Move the conversation to a randomly picked node.
    SetDialogueFromList(SetDialogueFromList),

    /// Start a dialogue for one specific player on this actor.
    SetPlayerDialogue(SetPlayerDialogue),

    // === Shop ===

    /// Open the actor's shop menu, generating stock on first use.
    OpenShopMenu(OpenShopMenu),

    // === Commands ===

    /// Run a command with elevated permissions on the player's behalf.
    RunCommand(RunCommand),

    // === Items ===

    /// Remove items from the player's inventory.
    TakeItem(TakeItem),

    /// Remove one unit of the conversation's matched item from the player.
    TakeMatchedItem,

    /// Equip an item on the actor.
    SetActorItem(SetActorItem),

    /// Move one unit of the matched item from the player onto the actor.
    SetActorMatchedItem(SetActorMatchedItem),

    /// Add items to the player's inventory.
    GiveItem(GiveItem),

    /// Roll a loot table and drop the results near the player.
    GiveFromLootTable(GiveFromLootTable),

    // === Player progression ===

    /// Change the player's reputation with the actor's faction.
    AddReputationToFaction(AddReputationToFaction),

    /// Credit or debit the player's currency balance.
    AddCurrency(AddCurrency),

    /// Advance the player's progression track.
    AddProgressionPoints(AddProgressionPoints),

    // === World ===

    /// Arm the actor's delayed self-destruct.
    TriggerExplosionTimer,

    // === Flags ===

    /// Add one flag to the conversation's flag set.
    SetFlag(SetFlag),

    /// Add one randomly picked flag, unless any candidate is already set.
    SetRandomFlag(SetRandomFlag),
}

impl Effect {
    /// The stable wire tag identifying this variant.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Effect::SetDialogue(_) => tags::SET_DIALOGUE,
            Effect::SetDialogueFromList(_) => tags::SET_DIALOGUE_FROM_LIST,
            Effect::SetPlayerDialogue(_) => tags::SET_PLAYER_DIALOGUE,
            Effect::OpenShopMenu(_) => tags::OPEN_SHOP_MENU,
            Effect::RunCommand(_) => tags::RUN_COMMAND,
            Effect::TakeItem(_) => tags::TAKE_ITEM,
            Effect::TakeMatchedItem => tags::TAKE_MATCHED_ITEM,
            Effect::SetActorItem(_) => tags::SET_ACTOR_ITEM,
            Effect::SetActorMatchedItem(_) => tags::SET_ACTOR_MATCHED_ITEM,
            Effect::GiveItem(_) => tags::GIVE_ITEM,
            Effect::GiveFromLootTable(_) => tags::GIVE_FROM_LOOT_TABLE,
            Effect::AddReputationToFaction(_) => tags::ADD_REPUTATION_TO_FACTION,
            Effect::AddCurrency(_) => tags::ADD_CURRENCY,
            Effect::AddProgressionPoints(_) => tags::ADD_PROGRESSION_POINTS,
            Effect::TriggerExplosionTimer => tags::TRIGGER_EXPLOSION_TIMER,
            Effect::SetFlag(_) => tags::SET_FLAG,
            Effect::SetRandomFlag(_) => tags::SET_RANDOM_FLAG,
        }
    }

    /// Whether this effect can only do something when a player is present.
    ///
    /// Useful for validation layers that want to warn when a player-targeting
    /// effect is attached to a choice reachable without a player. Applying
    /// such an effect without a player is still a safe no-op.
    #[must_use]
    pub fn requires_player(&self) -> bool {
        match self {
            Effect::SetDialogue(_)
            | Effect::SetDialogueFromList(_)
            | Effect::SetActorItem(_)
            | Effect::TriggerExplosionTimer => false,
            Effect::SetFlag(e) => e.player_specific,
            Effect::SetRandomFlag(e) => e.player_specific,
            Effect::SetPlayerDialogue(_)
            | Effect::OpenShopMenu(_)
            | Effect::RunCommand(_)
            | Effect::TakeItem(_)
            | Effect::TakeMatchedItem
            | Effect::SetActorMatchedItem(_)
            | Effect::GiveItem(_)
            | Effect::GiveFromLootTable(_)
            | Effect::AddReputationToFaction(_)
            | Effect::AddCurrency(_)
            | Effect::AddProgressionPoints(_) => true,
        }
    }

    /// Create a set-dialogue effect.
    pub fn set_dialogue(path: impl Into<NodePath>) -> Self {
        Self::SetDialogue(SetDialogue {
            new_path: path.into(),
        })
    }

    /// Create a set-dialogue-from-list effect.
    pub fn set_dialogue_from_list<P: Into<NodePath>>(paths: impl IntoIterator<Item = P>) -> Self {
        Self::SetDialogueFromList(SetDialogueFromList {
            new_paths: paths.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a set-player-dialogue effect.
    pub fn set_player_dialogue(dialogue: impl Into<DialogueId>) -> Self {
        Self::SetPlayerDialogue(SetPlayerDialogue {
            dialogue: dialogue.into(),
        })
    }

    /// Create an open-shop-menu effect.
    pub fn open_shop_menu(loot_table: impl Into<LootTableId>) -> Self {
        Self::OpenShopMenu(OpenShopMenu {
            loot_table: loot_table.into(),
        })
    }

    /// Create a run-command effect.
    pub fn run_command(command: impl Into<String>) -> Self {
        Self::RunCommand(RunCommand {
            command: command.into(),
        })
    }

    /// Create a take-item effect.
    pub fn take_item(item: impl Into<ItemKind>, amount: u32) -> Self {
        Self::TakeItem(TakeItem {
            item: item.into(),
            amount,
        })
    }

    /// Create a set-actor-item effect.
    pub fn set_actor_item(item: impl Into<ItemKind>, slot: EquipmentSlot) -> Self {
        Self::SetActorItem(SetActorItem {
            item: item.into(),
            slot,
        })
    }

    /// Create a set-actor-matched-item effect.
    pub fn set_actor_matched_item(slot: EquipmentSlot) -> Self {
        Self::SetActorMatchedItem(SetActorMatchedItem { slot })
    }

    /// Create a give-item effect.
    pub fn give_item(item: impl Into<ItemKind>, amount: u32) -> Self {
        Self::GiveItem(GiveItem {
            item: item.into(),
            amount,
        })
    }

    /// Create a give-from-loot-table effect.
    pub fn give_from_loot_table(loot_table: impl Into<LootTableId>) -> Self {
        Self::GiveFromLootTable(GiveFromLootTable {
            loot_table: loot_table.into(),
        })
    }

    /// Create an add-reputation effect.
    pub fn add_reputation(reputation: i32) -> Self {
        Self::AddReputationToFaction(AddReputationToFaction { reputation })
    }

    /// Create an add-currency effect. Positive credits, negative debits.
    pub fn add_currency(amount: i32) -> Self {
        Self::AddCurrency(AddCurrency { amount })
    }

    /// Create an add-progression-points effect.
    pub fn add_progression_points(xp: i32) -> Self {
        Self::AddProgressionPoints(AddProgressionPoints { xp })
    }

    /// Create a set-flag effect.
    pub fn set_flag(flag: impl Into<String>, player_specific: bool) -> Self {
        Self::SetFlag(SetFlag {
            flag: flag.into(),
            player_specific,
        })
    }

    /// Create a set-random-flag effect.
    pub fn set_random_flag<F: Into<String>>(
        flags: impl IntoIterator<Item = F>,
        player_specific: bool,
    ) -> Self {
        Self::SetRandomFlag(SetRandomFlag {
            flags: flags.into_iter().map(Into::into).collect(),
            player_specific,
        })
    }
}

/// Payload of [`Effect::SetDialogue`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetDialogue {
    /// Node to move the conversation to.
    pub new_path: NodePath,
}

/// Payload of [`Effect::SetDialogueFromList`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetDialogueFromList {
    /// Candidate nodes. May be empty, in which case applying does nothing.
    pub new_paths: Vec<NodePath>,
}

/// Payload of [`Effect::SetPlayerDialogue`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetPlayerDialogue {
    /// Dialogue to start for the player.
    pub dialogue: DialogueId,
}

/// Payload of [`Effect::OpenShopMenu`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenShopMenu {
    /// Table the shop's stock is generated from on first opening.
    pub loot_table: LootTableId,
}

/// Payload of [`Effect::RunCommand`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunCommand {
    /// Command text, without a leading slash.
    pub command: String,
}

/// Payload of [`Effect::TakeItem`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TakeItem {
    /// Item kind to remove.
    pub item: ItemKind,
    /// Units to remove. Defaults to 1 when omitted; zero does nothing.
    #[serde(default = "default_amount")]
    pub amount: u32,
}

/// Payload of [`Effect::SetActorItem`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetActorItem {
    /// Item kind to equip, one unit.
    pub item: ItemKind,
    /// Slot to equip into. Defaults to main-hand when omitted.
    #[serde(default)]
    pub slot: EquipmentSlot,
}

/// Payload of [`Effect::SetActorMatchedItem`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetActorMatchedItem {
    /// Slot to equip into. Defaults to main-hand when omitted.
    #[serde(default)]
    pub slot: EquipmentSlot,
}

/// Payload of [`Effect::GiveItem`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GiveItem {
    /// Item kind to add.
    pub item: ItemKind,
    /// Units to add. Defaults to 1 when omitted; zero does nothing.
    #[serde(default = "default_amount")]
    pub amount: u32,
}

/// Payload of [`Effect::GiveFromLootTable`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GiveFromLootTable {
    /// Table to roll.
    pub loot_table: LootTableId,
}

/// Payload of [`Effect::AddReputationToFaction`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddReputationToFaction {
    /// Signed reputation change with the actor's faction.
    pub reputation: i32,
}

/// Payload of [`Effect::AddCurrency`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddCurrency {
    /// Signed balance change. Positive credits, negative debits.
    #[serde(rename = "boondollars")]
    pub amount: i32,
}

/// Payload of [`Effect::AddProgressionPoints`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddProgressionPoints {
    /// Points added to the player's progression track.
    pub xp: i32,
}

/// Payload of [`Effect::SetFlag`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetFlag {
    /// Flag to add.
    pub flag: String,
    /// Target the per-player set instead of the shared one.
    pub player_specific: bool,
}

/// Payload of [`Effect::SetRandomFlag`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetRandomFlag {
    /// Candidate flags. May be empty, in which case applying does nothing.
    pub flags: Vec<String>,
    /// Target the per-player set instead of the shared one.
    pub player_specific: bool,
}

fn default_amount() -> u32 {
    1
}

impl From<SetDialogue> for Effect {
    fn from(payload: SetDialogue) -> Self {
        Effect::SetDialogue(payload)
    }
}

impl From<SetDialogueFromList> for Effect {
    fn from(payload: SetDialogueFromList) -> Self {
        Effect::SetDialogueFromList(payload)
    }
}

impl From<SetPlayerDialogue> for Effect {
    fn from(payload: SetPlayerDialogue) -> Self {
        Effect::SetPlayerDialogue(payload)
    }
}

impl From<OpenShopMenu> for Effect {
    fn from(payload: OpenShopMenu) -> Self {
        Effect::OpenShopMenu(payload)
    }
}

impl From<RunCommand> for Effect {
    fn from(payload: RunCommand) -> Self {
        Effect::RunCommand(payload)
    }
}

impl From<TakeItem> for Effect {
    fn from(payload: TakeItem) -> Self {
        Effect::TakeItem(payload)
    }
}

impl From<SetActorItem> for Effect {
    fn from(payload: SetActorItem) -> Self {
        Effect::SetActorItem(payload)
    }
}

impl From<SetActorMatchedItem> for Effect {
    fn from(payload: SetActorMatchedItem) -> Self {
        Effect::SetActorMatchedItem(payload)
    }
}

impl From<GiveItem> for Effect {
    fn from(payload: GiveItem) -> Self {
        Effect::GiveItem(payload)
    }
}

impl From<GiveFromLootTable> for Effect {
    fn from(payload: GiveFromLootTable) -> Self {
        Effect::GiveFromLootTable(payload)
    }
}

impl From<AddReputationToFaction> for Effect {
    fn from(payload: AddReputationToFaction) -> Self {
        Effect::AddReputationToFaction(payload)
    }
}

impl From<AddCurrency> for Effect {
    fn from(payload: AddCurrency) -> Self {
        Effect::AddCurrency(payload)
    }
}

impl From<AddProgressionPoints> for Effect {
    fn from(payload: AddProgressionPoints) -> Self {
        Effect::AddProgressionPoints(payload)
    }
}

impl From<SetFlag> for Effect {
    fn from(payload: SetFlag) -> Self {
        Effect::SetFlag(payload)
    }
}

impl From<SetRandomFlag> for Effect {
    fn from(payload: SetRandomFlag) -> Self {
        Effect::SetRandomFlag(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// One value of every variant, in tag registration order.
    fn all_variants() -> Vec<Effect> {
        vec![
            Effect::set_dialogue("next"),
            Effect::set_dialogue_from_list(["a", "b"]),
            Effect::set_player_dialogue("story_intro"),
            Effect::open_shop_menu("shop_stock"),
            Effect::run_command("say hi"),
            Effect::take_item("stick", 2),
            Effect::TakeMatchedItem,
            Effect::set_actor_item("hat", EquipmentSlot::Head),
            Effect::set_actor_matched_item(EquipmentSlot::MainHand),
            Effect::give_item("stick", 1),
            Effect::give_from_loot_table("gift_table"),
            Effect::add_reputation(-10),
            Effect::add_currency(50),
            Effect::add_progression_points(25),
            Effect::TriggerExplosionTimer,
            Effect::set_flag("visited", false),
            Effect::set_random_flag(["x", "y"], true),
        ]
    }

    #[test]
    fn test_every_variant_reports_its_tag() {
        let effects = all_variants();
        assert_eq!(effects.len(), tags::ALL.len());
        for (effect, tag) in effects.iter().zip(tags::ALL) {
            assert_eq!(effect.tag(), tag);
        }
    }

    #[test]
    fn test_constructors() {
        match Effect::take_item("stick", 3) {
            Effect::TakeItem(payload) => {
                assert_eq!(payload.item, ItemKind::new("stick"));
                assert_eq!(payload.amount, 3);
            }
            other => panic!("Expected TakeItem, got {other:?}"),
        }

        match Effect::set_flag("met_before", true) {
            Effect::SetFlag(payload) => {
                assert_eq!(payload.flag, "met_before");
                assert!(payload.player_specific);
            }
            other => panic!("Expected SetFlag, got {other:?}"),
        }
    }

    #[test]
    fn test_requires_player() {
        assert!(!Effect::set_dialogue("next").requires_player());
        assert!(!Effect::TriggerExplosionTimer.requires_player());
        assert!(Effect::give_item("stick", 1).requires_player());
        assert!(Effect::TakeMatchedItem.requires_player());

        // Flag effects only need a player when targeting the per-player set.
        assert!(!Effect::set_flag("f", false).requires_player());
        assert!(Effect::set_flag("f", true).requires_player());
        assert!(Effect::set_random_flag(["a"], true).requires_player());
    }

    #[test]
    fn test_amount_defaults_to_one() {
        let payload: GiveItem = serde_json::from_value(json!({"item": "stick"})).unwrap();
        assert_eq!(payload.amount, 1);

        let payload: TakeItem = serde_json::from_value(json!({"item": "stick"})).unwrap();
        assert_eq!(payload.amount, 1);
    }

    #[test]
    fn test_slot_defaults_to_mainhand() {
        let payload: SetActorItem = serde_json::from_value(json!({"item": "hat"})).unwrap();
        assert_eq!(payload.slot, EquipmentSlot::MainHand);

        let payload: SetActorMatchedItem = serde_json::from_value(json!({})).unwrap();
        assert_eq!(payload.slot, EquipmentSlot::MainHand);
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let result = serde_json::from_value::<TakeItem>(json!({"item": "stick", "amount": -1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = serde_json::from_value::<GiveItem>(json!({"item": "stick", "amont": 2}));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_path_list_decodes() {
        let payload: SetDialogueFromList =
            serde_json::from_value(json!({"new_paths": []})).unwrap();
        assert!(payload.new_paths.is_empty());
    }

    #[test]
    fn test_currency_wire_name() {
        let payload: AddCurrency = serde_json::from_value(json!({"boondollars": -50})).unwrap();
        assert_eq!(payload.amount, -50);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"boondollars": -50}));
    }

    #[test]
    fn test_payload_round_trip() {
        let payload = SetActorItem {
            item: ItemKind::new("hat"),
            slot: EquipmentSlot::Head,
        };
        let json = serde_json::to_value(&payload).unwrap();
        let back: SetActorItem = serde_json::from_value(json).unwrap();
        assert_eq!(payload, back);
    }
}
