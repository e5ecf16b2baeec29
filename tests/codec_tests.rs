//! Codec integration tests.
//!
//! These tests run whole dialogue-choice effect lists through the
//! registry: JSON text in, effect values out, and back again.

use dialogue_effects::codec::{registry, DecodeError, EffectRegistry};
use dialogue_effects::core::EquipmentSlot;
use dialogue_effects::effects::{tags, Effect};
use proptest::collection::vec;
use proptest::prelude::*;
use serde_json::json;

/// One effect of every built-in kind.
fn one_of_each() -> Vec<Effect> {
    vec![
        Effect::set_dialogue("store/hello"),
        Effect::set_dialogue_from_list(["store/rumor_a", "store/rumor_b"]),
        Effect::set_player_dialogue("merchant_intro"),
        Effect::open_shop_menu("shops/general"),
        Effect::run_command("say hello"),
        Effect::take_item("stick", 2),
        Effect::TakeMatchedItem,
        Effect::set_actor_item("sword", EquipmentSlot::OffHand),
        Effect::set_actor_matched_item(EquipmentSlot::Head),
        Effect::give_item("gem", 3),
        Effect::give_from_loot_table("loot/shop_stash"),
        Effect::add_reputation(-5),
        Effect::add_currency(120),
        Effect::add_progression_points(40),
        Effect::TriggerExplosionTimer,
        Effect::set_flag("greeted", false),
        Effect::set_random_flag(["likes_tea", "likes_coffee"], true),
    ]
}

/// Decode the effect list of a realistic dialogue choice from JSON text.
#[test]
fn test_decode_choice_effects_from_text() {
    let text = r#"[
        {"type": "take_item", "item": "perfectly_generic_object", "amount": 2},
        {"type": "add_currency", "boondollars": -50},
        {"type": "give_item", "item": "besticle"},
        {"type": "set_dialogue", "new_path": "store/thanks"}
    ]"#;

    let records: serde_json::Value = serde_json::from_str(text).unwrap();
    let effects = registry().decode_effect_list(records).unwrap();

    assert_eq!(
        effects,
        vec![
            Effect::take_item("perfectly_generic_object", 2),
            Effect::add_currency(-50),
            Effect::give_item("besticle", 1),
            Effect::set_dialogue("store/thanks"),
        ]
    );
}

/// Every built-in kind decodes from the record its encoder produces,
/// and the record's tag matches the effect's own.
#[test]
fn test_every_builtin_kind_dispatches() {
    let registry = registry();
    let effects = one_of_each();
    assert_eq!(effects.len(), tags::ALL.len());

    for effect in &effects {
        let record = registry.encode_effect(effect).unwrap();
        assert_eq!(record["type"].as_str(), Some(effect.tag()));

        let decoded = registry.decode_effect(record).unwrap();
        assert_eq!(&decoded, effect);
    }
}

/// Omitted fields with defaults come back filled in.
#[test]
fn test_decode_fills_defaults() {
    let registry = registry();

    let effect = registry
        .decode_effect(json!({"type": "give_item", "item": "stick"}))
        .unwrap();
    match effect {
        Effect::GiveItem(e) => assert_eq!(e.amount, 1),
        _ => panic!("Expected GiveItem"),
    }

    let effect = registry
        .decode_effect(json!({"type": "set_actor_matched_item"}))
        .unwrap();
    match effect {
        Effect::SetActorMatchedItem(e) => assert_eq!(e.slot, EquipmentSlot::MainHand),
        _ => panic!("Expected SetActorMatchedItem"),
    }
}

/// The currency record keeps its historical field name on the wire.
#[test]
fn test_currency_field_is_boondollars() {
    let record = registry().encode_effect(&Effect::add_currency(25)).unwrap();
    assert_eq!(record, json!({"type": "add_currency", "boondollars": 25}));

    let err = registry()
        .decode_effect(json!({"type": "add_currency", "amount": 25}))
        .unwrap_err();
    assert!(matches!(err, DecodeError::InvalidFields { .. }));
}

/// A bad equipment slot name surfaces both the tag and the string.
#[test]
fn test_bad_slot_name_is_reported() {
    let err = registry()
        .decode_effect(json!({"type": "set_actor_item", "item": "sword", "slot": "tail"}))
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("\"set_actor_item\""));
    assert!(message.contains("tail"));
}

/// Item counts cannot be negative.
#[test]
fn test_negative_take_amount_is_rejected() {
    let err = registry()
        .decode_effect(json!({"type": "take_item", "item": "stick", "amount": -1}))
        .unwrap_err();
    assert!(matches!(err, DecodeError::InvalidFields { .. }));
}

/// An empty dialogue path list is a legal record; the registry reads back
/// everything it writes.
#[test]
fn test_empty_dialogue_path_list_round_trips() {
    let effect = Effect::set_dialogue_from_list(Vec::<String>::new());

    let record = registry().encode_effect(&effect).unwrap();
    assert_eq!(
        record,
        json!({"type": "set_dialogue_from_list", "new_paths": []})
    );

    let decoded = registry().decode_effect(record).unwrap();
    assert_eq!(decoded, effect);
}

/// A zero item count is accepted by the codec; applying it does nothing.
#[test]
fn test_zero_amount_decodes() {
    let effect = registry()
        .decode_effect(json!({"type": "take_item", "item": "stick", "amount": 0}))
        .unwrap();
    assert_eq!(effect, Effect::take_item("stick", 0));

    let effect = registry()
        .decode_effect(json!({"type": "give_item", "item": "stick", "amount": 0}))
        .unwrap();
    assert_eq!(effect, Effect::give_item("stick", 0));
}

/// One malformed record rejects the whole list and names its position.
#[test]
fn test_broken_element_rejects_whole_list() {
    let records = json!([
        {"type": "set_flag", "flag": "greeted", "player_specific": false},
        {"type": "set_flag", "player_specific": false},
    ]);

    let err = registry().decode_effect_list(records).unwrap_err();
    match err {
        DecodeError::InList { index, .. } => assert_eq!(index, 1),
        _ => panic!("Expected InList"),
    }
}

/// An unknown tag's error names the full tag vocabulary.
#[test]
fn test_unknown_tag_lists_the_vocabulary() {
    let err = registry()
        .decode_effect(json!({"type": "summon"}))
        .unwrap_err();

    let message = err.to_string();
    for tag in tags::ALL {
        assert!(message.contains(tag), "message should name {tag:?}");
    }
}

/// Rules copied into a custom registry resolve only what was registered.
#[test]
fn test_custom_registry_resolves_its_own_tags() {
    let full = EffectRegistry::builtin();
    let mut custom = EffectRegistry::new();
    custom.register(
        tags::SET_FLAG,
        full.decoder(tags::SET_FLAG).unwrap(),
        full.encoder(tags::SET_FLAG).unwrap(),
    );

    let effect = custom
        .decode_effect(json!({"type": "set_flag", "flag": "met", "player_specific": true}))
        .unwrap();
    assert_eq!(effect, Effect::set_flag("met", true));

    let err = custom
        .decode_effect(json!({"type": "give_item", "item": "stick"}))
        .unwrap_err();
    match err {
        DecodeError::UnknownTag { known, .. } => assert_eq!(known, vec![tags::SET_FLAG]),
        _ => panic!("Expected UnknownTag"),
    }
}

// === Strategies ===

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_/]{0,24}"
}

fn slot_strategy() -> impl Strategy<Value = EquipmentSlot> {
    prop_oneof![
        Just(EquipmentSlot::MainHand),
        Just(EquipmentSlot::OffHand),
        Just(EquipmentSlot::Feet),
        Just(EquipmentSlot::Legs),
        Just(EquipmentSlot::Chest),
        Just(EquipmentSlot::Head),
    ]
}

fn dialogue_effect_strategy() -> impl Strategy<Value = Effect> {
    prop_oneof![
        name_strategy().prop_map(|path| Effect::set_dialogue(path)),
        vec(name_strategy(), 0..4).prop_map(|paths| Effect::set_dialogue_from_list(paths)),
        name_strategy().prop_map(|dialogue| Effect::set_player_dialogue(dialogue)),
    ]
}

fn item_effect_strategy() -> impl Strategy<Value = Effect> {
    prop_oneof![
        (name_strategy(), 0..64u32).prop_map(|(item, amount)| Effect::take_item(item, amount)),
        Just(Effect::TakeMatchedItem),
        (name_strategy(), slot_strategy())
            .prop_map(|(item, slot)| Effect::set_actor_item(item, slot)),
        slot_strategy().prop_map(|slot| Effect::set_actor_matched_item(slot)),
        (name_strategy(), 0..64u32).prop_map(|(item, amount)| Effect::give_item(item, amount)),
        name_strategy().prop_map(|table| Effect::give_from_loot_table(table)),
    ]
}

fn progression_effect_strategy() -> impl Strategy<Value = Effect> {
    prop_oneof![
        any::<i32>().prop_map(Effect::add_reputation),
        any::<i32>().prop_map(Effect::add_currency),
        any::<i32>().prop_map(Effect::add_progression_points),
    ]
}

fn world_effect_strategy() -> impl Strategy<Value = Effect> {
    prop_oneof![
        name_strategy().prop_map(|table| Effect::open_shop_menu(table)),
        name_strategy().prop_map(|command| Effect::run_command(command)),
        Just(Effect::TriggerExplosionTimer),
    ]
}

fn flag_effect_strategy() -> impl Strategy<Value = Effect> {
    prop_oneof![
        (name_strategy(), any::<bool>())
            .prop_map(|(flag, player_specific)| Effect::set_flag(flag, player_specific)),
        (vec(name_strategy(), 0..4), any::<bool>())
            .prop_map(|(flags, player_specific)| Effect::set_random_flag(flags, player_specific)),
    ]
}

fn effect_strategy() -> impl Strategy<Value = Effect> {
    prop_oneof![
        dialogue_effect_strategy(),
        item_effect_strategy(),
        progression_effect_strategy(),
        world_effect_strategy(),
        flag_effect_strategy(),
    ]
}

proptest! {
    /// Every effect survives the trip through its wire record.
    #[test]
    fn prop_effect_round_trips(effect in effect_strategy()) {
        let record = registry().encode_effect(&effect).unwrap();
        let decoded = registry().decode_effect(record).unwrap();
        prop_assert_eq!(decoded, effect);
    }

    /// Effect lists survive the trip through a wire array.
    #[test]
    fn prop_effect_list_round_trips(effects in vec(effect_strategy(), 0..8)) {
        let records = registry().encode_effect_list(&effects).unwrap();
        let decoded = registry().decode_effect_list(records).unwrap();
        prop_assert_eq!(decoded, effects);
    }

    /// Encoded records always carry their tag in the `"type"` field.
    #[test]
    fn prop_encoded_records_carry_tags(effect in effect_strategy()) {
        let record = registry().encode_effect(&effect).unwrap();
        prop_assert_eq!(record["type"].as_str(), Some(effect.tag()));
    }
}
