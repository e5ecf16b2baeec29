//! Capability handles implemented by the host game.
//!
//! Effects never see concrete game types. They act through these narrow
//! object-safe traits, borrowed for the duration of one application. Every
//! optional capability is an `Option` accessor: absence is an answer, not an
//! error, and an effect that needed the missing capability does nothing.

pub mod actor;
pub mod dialogue;
pub mod player;
pub mod shop;

pub use actor::Actor;
pub use dialogue::DialogueState;
pub use player::{Player, PlayerRecord};
pub use shop::ShopKeeper;
