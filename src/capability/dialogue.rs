//! Dialogue state owned by an acting entity.

use rustc_hash::FxHashSet;

use crate::core::{DialogueId, ItemKind, NodePath, PlayerId};

/// Per-actor dialogue state: current position, flags, per-player bookkeeping.
///
/// Flag sets are handed out raw. Effects insert into them directly, so the
/// implementation decides nothing about which flags exist; a flag is just a
/// string some condition elsewhere will look for.
pub trait DialogueState {
    /// Move the conversation to `path` within the current tree.
    ///
    /// With `clear_history` the visited-node history is forgotten as well.
    /// Effects always pass `false`; history clearing is for hosts resetting
    /// a conversation wholesale.
    fn set_node(&mut self, path: &NodePath, clear_history: bool);

    /// Start `dialogue` for one specific player on this actor.
    fn set_dialogue_for_player(&mut self, player: PlayerId, dialogue: &DialogueId);

    /// Flags shared by everyone who talks to this actor.
    fn flags(&mut self) -> &mut FxHashSet<String>;

    /// Flags private to one player's conversations with this actor.
    fn player_flags(&mut self, player: PlayerId) -> &mut FxHashSet<String>;

    /// The item a condition matched earlier in `player`'s conversation.
    ///
    /// `None` when nothing was matched or the match has expired.
    fn matched_item_for(&self, player: PlayerId) -> Option<ItemKind>;
}
