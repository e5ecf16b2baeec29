//! Identifier newtypes shared across the crate.
//!
//! Effects reference external resources (dialogue nodes, whole dialogues,
//! loot tables, item kinds, factions) purely by name. The newtypes keep those
//! names from being mixed up at call sites; none of them are interpreted here.
//!
//! ## Wire form
//!
//! Every string id serializes as a bare JSON string, so effect records stay
//! flat and hand-editable:
//!
//! ```
//! use dialogue_effects::core::NodePath;
//!
//! let path = NodePath::new("market.haggle.success");
//! let json = serde_json::to_string(&path).unwrap();
//! assert_eq!(json, "\"market.haggle.success\"");
//! ```
//!
//! `PlayerId` is the exception: it identifies a live player at runtime and is
//! never part of an effect record.

use serde::{Deserialize, Serialize};

/// Path of a node inside the actor's current dialogue tree.
///
/// Resolution against the tree is the dialogue engine's job; to this crate a
/// path is an opaque name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodePath(pub String);

impl NodePath {
    /// Create a node path from any string-like value.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NodePath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a whole dialogue resource.
///
/// Distinct from [`NodePath`]: a `DialogueId` selects which tree a player is
/// in, a `NodePath` selects a position inside the current tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialogueId(pub String);

impl DialogueId {
    /// Create a dialogue id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DialogueId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DialogueId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for DialogueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a loot table owned by the host game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LootTableId(pub String);

impl LootTableId {
    /// Create a loot table id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LootTableId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LootTableId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for LootTableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a reputation faction.
///
/// Effect records never carry one; the acting entity reports its own faction
/// through [`Actor::faction`](crate::capability::Actor::faction).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionId(pub String);

impl FactionId {
    /// Create a faction id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FactionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for FactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry name of an item kind, e.g. `"stick"` or `"amber_gristwidget"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKind(pub String);

impl ItemKind {
    /// Create an item kind from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemKind {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemKind {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Runtime identifier of a connected player.
///
/// Assigned by the host game and only used to key per-player dialogue state.
/// Never serialized into effect records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a player id from the host game's raw handle.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for PlayerId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}
