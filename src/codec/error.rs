//! Error types for the effect codec.
//!
//! Decode errors are deliberately specific: a malformed record names the
//! tag it was decoding, an unknown tag lists every tag that would have
//! been accepted, and a failure inside a list carries the index of the
//! offending element.

use thiserror::Error;

/// Errors produced while decoding effect records.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The record was not a JSON object.
    #[error("effect record must be a JSON object, found {found}")]
    NotAnObject {
        /// What the record actually was.
        found: &'static str,
    },

    /// The record had no `"type"` field.
    #[error("effect record is missing its \"type\" tag")]
    MissingTag,

    /// The record's `"type"` field held something other than a string.
    #[error("effect tag must be a string, found {found}")]
    TagNotAString {
        /// What the tag field actually held.
        found: &'static str,
    },

    /// The record's tag matched no registered effect kind.
    #[error("unknown effect tag {tag:?}, known tags: {}", .known.join(", "))]
    UnknownTag {
        /// The tag that was not recognized.
        tag: String,
        /// Every tag the registry would have accepted, sorted.
        known: Vec<&'static str>,
    },

    /// The record's remaining fields did not match the payload for its kind.
    #[error("invalid fields for effect {tag:?}: {source}")]
    InvalidFields {
        /// The tag whose payload failed to decode.
        tag: String,
        source: serde_json::Error,
    },

    /// The value handed to the list decoder was not a JSON array.
    #[error("effect list must be a JSON array, found {found}")]
    NotAList {
        /// What the value actually was.
        found: &'static str,
    },

    /// An element of an effect list failed to decode.
    ///
    /// List decoding is atomic, so this is always the first failure.
    #[error("effect at index {index} failed to decode: {source}")]
    InList {
        /// Position of the element in the list.
        index: usize,
        source: Box<DecodeError>,
    },
}

/// Errors produced while encoding effects back to records.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The effect's tag has no encode rule in the registry in use.
    #[error("no encode rule registered for effect tag {tag:?}")]
    UnregisteredTag {
        /// The tag that was missing.
        tag: &'static str,
    },

    /// Serializing the effect's payload fields failed.
    #[error("could not encode fields for effect {tag:?}: {source}")]
    Fields {
        /// The tag whose payload failed to serialize.
        tag: &'static str,
        source: serde_json::Error,
    },
}
