//! JSON codec for effect records.
//!
//! An effect travels as a JSON object whose `"type"` field names the
//! effect kind; the remaining fields are that kind's payload:
//!
//! ```json
//! { "type": "give_item", "item": "besticle", "amount": 3 }
//! ```
//!
//! Choice definitions carry lists of these records, so the codec also
//! handles JSON arrays of them.
//!
//! ## Design Philosophy
//!
//! Dispatch never guesses. Tags resolve through an explicit
//! [`EffectRegistry`] populated one kind at a time, payload fields are
//! matched strictly against the kind's struct, and every failure names
//! what went wrong: the unknown tag (plus every tag that would have
//! been accepted), the tag whose fields were malformed, or the index of
//! the broken element in a list.

mod dispatch;
mod error;
mod registry;

pub use dispatch::TAG_FIELD;
pub use error::{DecodeError, EncodeError};
pub use registry::{registry, DecodeFn, EffectRegistry, EncodeFn};
