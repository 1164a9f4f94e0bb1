//! Actors: anything that occupies a tile and takes turns

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::config::{MimicConfig, PlayerConfig};
use crate::core::types::{ActorId, ItemId, Position};
use crate::entity::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    /// Hostile spawned from a chest; drops `min_drop..=max_drop` tokens on defeat
    Mimic { max_drop: i32, min_drop: i32 },
}

impl ActorKind {
    /// Mimics are rooted to their tile
    pub fn can_move(&self) -> bool {
        matches!(self, ActorKind::Player)
    }

    /// Opening chests, picking up and consuming items
    pub fn can_handle_items(&self) -> bool {
        matches!(self, ActorKind::Player)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub kind: ActorKind,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub attack_damage: u32,
    /// Chance in percent that an attack lands
    pub hit_chance: u32,
    pub souls: u32,
    pub inventory: Vec<Item>,
    /// Maintained by `GameMap`; only meaningful while the actor is on the map
    pub position: Position,
}

/// Stats for a new actor; the map assigns id and position on placement
#[derive(Debug, Clone)]
pub struct ActorTemplate {
    pub name: String,
    pub kind: ActorKind,
    pub hit_points: u32,
    pub attack_damage: u32,
    pub hit_chance: u32,
}

impl ActorTemplate {
    pub fn player(config: &PlayerConfig) -> Self {
        Self {
            name: config.name.clone(),
            kind: ActorKind::Player,
            hit_points: config.hit_points,
            attack_damage: config.attack_damage,
            hit_chance: config.hit_chance,
        }
    }

    pub fn mimic(config: &MimicConfig, max_drop: i32, min_drop: i32) -> Self {
        Self {
            name: "Mimic".to_string(),
            kind: ActorKind::Mimic { max_drop, min_drop },
            hit_points: config.hit_points,
            attack_damage: config.attack_damage,
            hit_chance: config.hit_chance,
        }
    }

    pub(crate) fn build(self, id: ActorId, position: Position) -> Actor {
        Actor {
            id,
            name: self.name,
            kind: self.kind,
            hit_points: self.hit_points,
            max_hit_points: self.hit_points,
            attack_damage: self.attack_damage,
            hit_chance: self.hit_chance,
            souls: 0,
            inventory: Vec::new(),
            position,
        }
    }
}

impl Actor {
    pub fn is_hostile(&self) -> bool {
        matches!(self.kind, ActorKind::Mimic { .. })
    }

    pub fn is_conscious(&self) -> bool {
        self.hit_points > 0
    }

    /// Two actors fight each other only if exactly one of them is hostile
    pub fn is_enemy_of(&self, other: &Actor) -> bool {
        self.is_hostile() != other.is_hostile()
    }

    /// Apply damage, saturating at zero; returns true if this knocked the actor out
    pub fn hurt(&mut self, damage: u32) -> bool {
        let was_conscious = self.is_conscious();
        self.hit_points = self.hit_points.saturating_sub(damage);
        was_conscious && !self.is_conscious()
    }

    pub fn add_souls(&mut self, souls: u32) {
        self.souls = self.souls.saturating_add(souls);
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Take an item out of the inventory, preserving the order of the rest
    pub fn remove_item(&mut self, item_id: ItemId) -> Option<Item> {
        let idx = self.inventory.iter().position(|i| i.id == item_id)?;
        Some(self.inventory.remove(idx))
    }

    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        self.inventory.iter().find(|i| i.id == item_id)
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.hit_points, self.max_hit_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::entity::item::ItemKind;

    fn player() -> Actor {
        ActorTemplate::player(&GameConfig::default().player).build(ActorId(1), Position::new(1, 1))
    }

    #[test]
    fn test_hurt_saturates_and_reports_knockout() {
        let mut actor = player();
        assert!(!actor.hurt(30));
        assert_eq!(actor.hit_points, 70);
        assert!(actor.hurt(500));
        assert_eq!(actor.hit_points, 0);
        // Already down: no second knockout
        assert!(!actor.hurt(1));
    }

    #[test]
    fn test_mimic_is_hostile_to_player() {
        let mimic = ActorTemplate::mimic(&GameConfig::default().mimic, 3, 1)
            .build(ActorId(2), Position::new(2, 2));
        let player = player();
        assert!(mimic.is_hostile());
        assert!(mimic.is_enemy_of(&player));
        assert!(player.is_enemy_of(&mimic));
        assert!(!player.is_enemy_of(&player));
        assert_eq!(mimic.kind, ActorKind::Mimic { max_drop: 3, min_drop: 1 });
    }

    #[test]
    fn test_inventory_remove_keeps_order() {
        let mut actor = player();
        for id in 1..=3 {
            actor.add_item(Item::new(ItemId(id), ItemKind::SoulToken { souls: 100 }));
        }
        let removed = actor.remove_item(ItemId(2)).unwrap();
        assert_eq!(removed.id, ItemId(2));
        let ids: Vec<_> = actor.inventory.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(3)]);
        assert!(actor.remove_item(ItemId(2)).is_none());
    }

    #[test]
    fn test_display_shows_health() {
        assert_eq!(player().to_string(), "Unkindled (100/100)");
    }
}
