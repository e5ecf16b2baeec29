//! Item stacks exchanged between effects and collaborators.

use serde::{Deserialize, Serialize};

use crate::core::ItemKind;

/// A quantity of one item kind.
///
/// Effects only move stacks around; stacking limits and item metadata stay
/// with the host game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// What the stack holds.
    pub kind: ItemKind,
    /// How many units.
    pub count: u32,
}

impl ItemStack {
    /// Create a stack of `count` units of `kind`.
    pub fn new(kind: impl Into<ItemKind>, count: u32) -> Self {
        Self {
            kind: kind.into(),
            count,
        }
    }

    /// Create a single-unit stack.
    pub fn one(kind: impl Into<ItemKind>) -> Self {
        Self::new(kind, 1)
    }

    /// Whether the stack holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl std::fmt::Display for ItemStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x {}", self.count, self.kind)
    }
}
