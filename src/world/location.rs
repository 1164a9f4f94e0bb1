//! A single grid cell

use crate::core::types::{ActorId, ItemId, Position};
use crate::entity::item::Item;
use crate::world::ground::Ground;

/// One tile: its terrain, the items lying on it and its occupant
///
/// The occupant is only a back-reference; the actor itself is owned by the
/// map, which keeps `occupant` and `Actor::position` in agreement.
#[derive(Debug)]
pub struct Location {
    position: Position,
    ground: Ground,
    items: Vec<Item>,
    occupant: Option<ActorId>,
}

impl Location {
    pub fn new(position: Position, ground: Ground) -> Self {
        Self {
            position,
            ground,
            items: Vec::new(),
            occupant: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn ground(&self) -> Ground {
        self.ground
    }

    /// Replace terrain unconditionally
    pub fn set_ground(&mut self, ground: Ground) {
        self.ground = ground;
    }

    /// Items in the order they were dropped
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, item_id: ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == item_id)?;
        Some(self.items.remove(idx))
    }

    pub fn occupant(&self) -> Option<ActorId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<ActorId>) {
        self.occupant = occupant;
    }

    /// Whether an actor could step onto this tile right now
    pub fn can_enter(&self) -> bool {
        !self.ground.blocks_movement() && !self.is_occupied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::item::ItemKind;

    #[test]
    fn test_items_keep_insertion_order() {
        let mut loc = Location::new(Position::new(0, 0), Ground::Dirt);
        for id in [5, 2, 9] {
            loc.add_item(Item::new(ItemId(id), ItemKind::SoulToken { souls: 100 }));
        }
        let ids: Vec<_> = loc.items().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![5, 2, 9]);

        assert!(loc.remove_item(ItemId(2)).is_some());
        assert!(loc.remove_item(ItemId(2)).is_none());
        assert_eq!(loc.items().len(), 2);
    }

    #[test]
    fn test_can_enter() {
        let mut loc = Location::new(Position::new(0, 0), Ground::Dirt);
        assert!(loc.can_enter());
        loc.set_occupant(Some(ActorId(1)));
        assert!(!loc.can_enter());
        loc.set_occupant(None);
        loc.set_ground(Ground::Wall);
        assert!(!loc.can_enter());
    }
}
