//! Items that sit on the ground or in an inventory

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Collectible worth a fixed number of souls
    SoulToken { souls: u32 },
}

/// An item lives in exactly one container at a time, so it is never `Clone`
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: ItemId, kind: ItemKind) -> Self {
        Self { id, kind }
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            ItemKind::SoulToken { .. } => "Soul Token",
        }
    }

    /// Souls credited when the item is consumed
    pub fn souls(&self) -> u32 {
        match self.kind {
            ItemKind::SoulToken { souls } => souls,
        }
    }

    pub fn is_consumable(&self) -> bool {
        matches!(self.kind, ItemKind::SoulToken { .. })
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ItemKind::SoulToken { souls } => write!(f, "Soul Token ({} souls)", souls),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soul_token_value() {
        let token = Item::new(ItemId(1), ItemKind::SoulToken { souls: 100 });
        assert_eq!(token.souls(), 100);
        assert!(token.is_consumable());
        assert_eq!(token.to_string(), "Soul Token (100 souls)");
    }
}
