//! Record dispatch: tag extraction, rule lookup, and list handling.

use serde_json::Value;

use super::error::{DecodeError, EncodeError};
use super::registry::EffectRegistry;
use crate::effects::Effect;

/// Name of the record field that carries the effect tag.
pub const TAG_FIELD: &str = "type";

impl EffectRegistry {
    /// Decode a single effect record.
    ///
    /// The record must be a JSON object with a string `"type"` field
    /// naming a registered tag; the remaining fields are handed to that
    /// kind's decode rule and matched strictly, so stray fields fail.
    ///
    /// ## Example
    ///
    /// ```
    /// use dialogue_effects::codec::registry;
    /// use dialogue_effects::effects::Effect;
    /// use serde_json::json;
    ///
    /// let effect = registry()
    ///     .decode_effect(json!({"type": "give_item", "item": "besticle", "amount": 3}))
    ///     .unwrap();
    ///
    /// assert_eq!(effect, Effect::give_item("besticle", 3));
    /// ```
    pub fn decode_effect(&self, record: Value) -> Result<Effect, DecodeError> {
        let mut fields = match record {
            Value::Object(fields) => fields,
            other => return Err(DecodeError::NotAnObject { found: json_kind(&other) }),
        };

        let tag = match fields.remove(TAG_FIELD) {
            Some(Value::String(tag)) => tag,
            Some(other) => return Err(DecodeError::TagNotAString { found: json_kind(&other) }),
            None => return Err(DecodeError::MissingTag),
        };

        let decode = match self.decoder(&tag) {
            Some(decode) => decode,
            None => {
                return Err(DecodeError::UnknownTag { tag, known: self.known_tags() });
            }
        };

        decode(Value::Object(fields)).map_err(|source| DecodeError::InvalidFields { tag, source })
    }

    /// Decode a JSON array of effect records.
    ///
    /// Decoding is atomic: the first malformed element fails the whole
    /// list, and the error carries that element's index.
    pub fn decode_effect_list(&self, records: Value) -> Result<Vec<Effect>, DecodeError> {
        let records = match records {
            Value::Array(records) => records,
            other => return Err(DecodeError::NotAList { found: json_kind(&other) }),
        };

        let mut effects = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let effect = self
                .decode_effect(record)
                .map_err(|source| DecodeError::InList { index, source: Box::new(source) })?;
            effects.push(effect);
        }
        Ok(effects)
    }

    /// Encode a single effect to its wire record.
    ///
    /// Every payload field is emitted, including fields that hold their
    /// default, so the output decodes identically on versions with
    /// different defaults.
    pub fn encode_effect(&self, effect: &Effect) -> Result<Value, EncodeError> {
        let tag = effect.tag();
        let encode = match self.encoder(tag) {
            Some(encode) => encode,
            None => return Err(EncodeError::UnregisteredTag { tag }),
        };

        let mut fields = encode(effect).map_err(|source| EncodeError::Fields { tag, source })?;
        fields.insert(TAG_FIELD.to_owned(), Value::String(tag.to_owned()));
        Ok(Value::Object(fields))
    }

    /// Encode a slice of effects to a JSON array of records.
    pub fn encode_effect_list(&self, effects: &[Effect]) -> Result<Value, EncodeError> {
        let mut records = Vec::with_capacity(effects.len());
        for effect in effects {
            records.push(self.encode_effect(effect)?);
        }
        Ok(Value::Array(records))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
