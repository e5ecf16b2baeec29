//! Tag registry for effect kinds.
//!
//! The `EffectRegistry` maps wire tags to the decode and encode rules
//! for each effect kind. The table is populated explicitly, one
//! `register` call per kind, and duplicate tags panic at registration
//! time rather than surfacing as silent overwrites later.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::effects::{
    tags, AddCurrency, AddProgressionPoints, AddReputationToFaction, Effect, GiveFromLootTable,
    GiveItem, OpenShopMenu, RunCommand, SetActorItem, SetActorMatchedItem, SetDialogue,
    SetDialogueFromList, SetFlag, SetPlayerDialogue, SetRandomFlag, TakeItem,
};

/// Decode rule: turns a record's payload fields (tag already removed)
/// into an effect value.
pub type DecodeFn = fn(Value) -> Result<Effect, serde_json::Error>;

/// Encode rule: turns an effect value into its payload fields (tag not
/// yet inserted).
pub type EncodeFn = fn(&Effect) -> Result<Map<String, Value>, serde_json::Error>;

#[derive(Clone, Copy, Debug)]
struct Rules {
    decode: DecodeFn,
    encode: EncodeFn,
}

/// Registry of effect kinds, keyed by wire tag.
///
/// Stores the decode and encode rules for every effect kind and
/// resolves tags during [dispatch](EffectRegistry::decode_effect).
///
/// ## Example
///
/// ```
/// use dialogue_effects::codec::EffectRegistry;
/// use dialogue_effects::effects::tags;
///
/// let registry = EffectRegistry::builtin();
///
/// assert!(registry.contains(tags::GIVE_ITEM));
/// assert!(registry.decoder("no_such_effect").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    rules: FxHashMap<&'static str, Rules>,
}

impl EffectRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in effect kind registered.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(tags::SET_DIALOGUE, decode_fields::<SetDialogue>, encode_set_dialogue);
        registry.register(
            tags::SET_DIALOGUE_FROM_LIST,
            decode_fields::<SetDialogueFromList>,
            encode_set_dialogue_from_list,
        );
        registry.register(
            tags::SET_PLAYER_DIALOGUE,
            decode_fields::<SetPlayerDialogue>,
            encode_set_player_dialogue,
        );
        registry.register(
            tags::OPEN_SHOP_MENU,
            decode_fields::<OpenShopMenu>,
            encode_open_shop_menu,
        );
        registry.register(tags::RUN_COMMAND, decode_fields::<RunCommand>, encode_run_command);
        registry.register(tags::TAKE_ITEM, decode_fields::<TakeItem>, encode_take_item);
        registry.register(
            tags::TAKE_MATCHED_ITEM,
            decode_take_matched_item,
            encode_take_matched_item,
        );
        registry.register(
            tags::SET_ACTOR_ITEM,
            decode_fields::<SetActorItem>,
            encode_set_actor_item,
        );
        registry.register(
            tags::SET_ACTOR_MATCHED_ITEM,
            decode_fields::<SetActorMatchedItem>,
            encode_set_actor_matched_item,
        );
        registry.register(tags::GIVE_ITEM, decode_fields::<GiveItem>, encode_give_item);
        registry.register(
            tags::GIVE_FROM_LOOT_TABLE,
            decode_fields::<GiveFromLootTable>,
            encode_give_from_loot_table,
        );
        registry.register(
            tags::ADD_REPUTATION_TO_FACTION,
            decode_fields::<AddReputationToFaction>,
            encode_add_reputation_to_faction,
        );
        registry.register(tags::ADD_CURRENCY, decode_fields::<AddCurrency>, encode_add_currency);
        registry.register(
            tags::ADD_PROGRESSION_POINTS,
            decode_fields::<AddProgressionPoints>,
            encode_add_progression_points,
        );
        registry.register(
            tags::TRIGGER_EXPLOSION_TIMER,
            decode_trigger_explosion_timer,
            encode_trigger_explosion_timer,
        );
        registry.register(tags::SET_FLAG, decode_fields::<SetFlag>, encode_set_flag);
        registry.register(
            tags::SET_RANDOM_FLAG,
            decode_fields::<SetRandomFlag>,
            encode_set_random_flag,
        );

        registry
    }

    /// Register an effect kind under its wire tag.
    ///
    /// The decode and encode rules must belong to the same kind; a
    /// mismatched pair panics the first time the encode rule runs.
    ///
    /// Panics if `tag` is already registered.
    pub fn register(&mut self, tag: &'static str, decode: DecodeFn, encode: EncodeFn) {
        if self.rules.contains_key(tag) {
            panic!("Effect tag {tag:?} already registered");
        }
        self.rules.insert(tag, Rules { decode, encode });
    }

    /// Look up the decode rule for a tag.
    #[must_use]
    pub fn decoder(&self, tag: &str) -> Option<DecodeFn> {
        self.rules.get(tag).map(|rules| rules.decode)
    }

    /// Look up the encode rule for a tag.
    #[must_use]
    pub fn encoder(&self, tag: &str) -> Option<EncodeFn> {
        self.rules.get(tag).map(|rules| rules.encode)
    }

    /// Check if a tag is registered.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.rules.contains_key(tag)
    }

    /// Get the number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every registered tag, sorted for stable error messages.
    #[must_use]
    pub fn known_tags(&self) -> Vec<&'static str> {
        let mut known: Vec<&'static str> = self.rules.keys().copied().collect();
        known.sort_unstable();
        known
    }
}

static REGISTRY: LazyLock<EffectRegistry> = LazyLock::new(EffectRegistry::builtin);

/// The process-wide registry holding every built-in effect kind.
///
/// Built once on first use. Callers that need a different table can
/// build their own [`EffectRegistry`] and dispatch through it instead.
#[must_use]
pub fn registry() -> &'static EffectRegistry {
    &REGISTRY
}

// === Decode rules ===

fn decode_fields<P>(fields: Value) -> Result<Effect, serde_json::Error>
where
    P: DeserializeOwned + Into<Effect>,
{
    serde_json::from_value::<P>(fields).map(P::into)
}

/// Strict empty payload for effect kinds that carry no fields.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NoFields {}

fn decode_take_matched_item(fields: Value) -> Result<Effect, serde_json::Error> {
    let NoFields {} = serde_json::from_value(fields)?;
    Ok(Effect::TakeMatchedItem)
}

fn decode_trigger_explosion_timer(fields: Value) -> Result<Effect, serde_json::Error> {
    let NoFields {} = serde_json::from_value(fields)?;
    Ok(Effect::TriggerExplosionTimer)
}

// === Encode rules ===

fn fields_of<P: Serialize>(payload: &P) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(payload)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(<serde_json::Error as serde::ser::Error>::custom(
            "effect payload did not serialize to an object",
        )),
    }
}

fn wrong_variant(expected: &'static str, actual: &Effect) -> ! {
    panic!("Encode rule for tag {expected:?} applied to a {:?} effect", actual.tag());
}

fn encode_set_dialogue(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::SetDialogue(payload) => fields_of(payload),
        other => wrong_variant(tags::SET_DIALOGUE, other),
    }
}

fn encode_set_dialogue_from_list(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::SetDialogueFromList(payload) => fields_of(payload),
        other => wrong_variant(tags::SET_DIALOGUE_FROM_LIST, other),
    }
}

fn encode_set_player_dialogue(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::SetPlayerDialogue(payload) => fields_of(payload),
        other => wrong_variant(tags::SET_PLAYER_DIALOGUE, other),
    }
}

fn encode_open_shop_menu(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::OpenShopMenu(payload) => fields_of(payload),
        other => wrong_variant(tags::OPEN_SHOP_MENU, other),
    }
}

fn encode_run_command(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::RunCommand(payload) => fields_of(payload),
        other => wrong_variant(tags::RUN_COMMAND, other),
    }
}

fn encode_take_item(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::TakeItem(payload) => fields_of(payload),
        other => wrong_variant(tags::TAKE_ITEM, other),
    }
}

fn encode_take_matched_item(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::TakeMatchedItem => Ok(Map::new()),
        other => wrong_variant(tags::TAKE_MATCHED_ITEM, other),
    }
}

fn encode_set_actor_item(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::SetActorItem(payload) => fields_of(payload),
        other => wrong_variant(tags::SET_ACTOR_ITEM, other),
    }
}

fn encode_set_actor_matched_item(
    effect: &Effect,
) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::SetActorMatchedItem(payload) => fields_of(payload),
        other => wrong_variant(tags::SET_ACTOR_MATCHED_ITEM, other),
    }
}

fn encode_give_item(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::GiveItem(payload) => fields_of(payload),
        other => wrong_variant(tags::GIVE_ITEM, other),
    }
}

fn encode_give_from_loot_table(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::GiveFromLootTable(payload) => fields_of(payload),
        other => wrong_variant(tags::GIVE_FROM_LOOT_TABLE, other),
    }
}

fn encode_add_reputation_to_faction(
    effect: &Effect,
) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::AddReputationToFaction(payload) => fields_of(payload),
        other => wrong_variant(tags::ADD_REPUTATION_TO_FACTION, other),
    }
}

fn encode_add_currency(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::AddCurrency(payload) => fields_of(payload),
        other => wrong_variant(tags::ADD_CURRENCY, other),
    }
}

fn encode_add_progression_points(
    effect: &Effect,
) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::AddProgressionPoints(payload) => fields_of(payload),
        other => wrong_variant(tags::ADD_PROGRESSION_POINTS, other),
    }
}

fn encode_trigger_explosion_timer(
    effect: &Effect,
) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::TriggerExplosionTimer => Ok(Map::new()),
        other => wrong_variant(tags::TRIGGER_EXPLOSION_TIMER, other),
    }
}

fn encode_set_flag(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::SetFlag(payload) => fields_of(payload),
        other => wrong_variant(tags::SET_FLAG, other),
    }
}

fn encode_set_random_flag(effect: &Effect) -> Result<Map<String, Value>, serde_json::Error> {
    match effect {
        Effect::SetRandomFlag(payload) => fields_of(payload),
        other => wrong_variant(tags::SET_RANDOM_FLAG, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_tag() {
        let registry = EffectRegistry::builtin();

        assert_eq!(registry.len(), tags::ALL.len());
        for tag in tags::ALL {
            assert!(registry.contains(tag), "no rules for {tag:?}");
        }
    }

    #[test]
    fn test_unknown_tag_has_no_rules() {
        let registry = EffectRegistry::builtin();

        assert!(!registry.contains("no_such_effect"));
        assert!(registry.decoder("no_such_effect").is_none());
        assert!(registry.encoder("no_such_effect").is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_tag_panics() {
        let mut registry = EffectRegistry::builtin();
        registry.register(tags::SET_FLAG, decode_fields::<SetFlag>, encode_set_flag);
    }

    #[test]
    fn test_known_tags_are_sorted() {
        let registry = EffectRegistry::builtin();

        let known = registry.known_tags();
        let mut sorted = known.clone();
        sorted.sort_unstable();

        assert_eq!(known, sorted);
        assert_eq!(known.len(), tags::ALL.len());
    }

    #[test]
    fn test_global_registry_holds_builtins() {
        let registry = registry();

        assert_eq!(registry.len(), tags::ALL.len());
        assert!(registry.contains(tags::SET_DIALOGUE));
    }

    #[test]
    #[should_panic(expected = "applied to")]
    fn test_mismatched_encode_rule_panics() {
        let registry = EffectRegistry::builtin();

        let encode = registry.encoder(tags::SET_FLAG).unwrap();
        let _ = encode(&Effect::TakeMatchedItem);
    }
}
