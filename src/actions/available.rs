//! Gathering the actions an actor may choose from this turn

use crate::actions::catalog::Action;
use crate::core::error::Result;
use crate::core::types::ActorId;
use crate::world::map::GameMap;

/// Every legal action for `actor`, in menu order
///
/// Contributions come from the neighbouring terrain (chests), the actor's own
/// capabilities (attacking, picking up, moving) and the items it carries.
/// Anything listed here passes `Action::check` against the same map.
pub fn available_actions(map: &GameMap, actor: ActorId) -> Result<Vec<Action>> {
    let me = map.actor(actor)?;
    let here = me.position;
    let neighbours = map.neighbours(here);
    let mut actions = Vec::new();

    // Terrain
    for &pos in &neighbours {
        if map.location(pos)?.ground().can_be_opened() {
            actions.push(Action::OpenChest { chest: pos });
        }
    }

    // Combat
    for &pos in &neighbours {
        if let Some(other) = map.actor_at(pos) {
            if me.is_enemy_of(other) {
                actions.push(Action::Attack { target: other.id });
            }
        }
    }

    // Items on the ground
    for item in map.location(here)?.items() {
        actions.push(Action::PickUp { item: item.id });
    }

    // Items carried
    for item in me.inventory.iter().filter(|i| i.is_consumable()) {
        actions.push(Action::Consume { item: item.id });
    }

    // Movement
    for &pos in &neighbours {
        if map.location(pos)?.can_enter() {
            actions.push(Action::Move { to: pos });
        }
    }

    actions.retain(|a| a.check(actor, map).is_ok());
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::catalog::ActionCategory;
    use crate::core::config::GameConfig;
    use crate::core::types::Position;
    use crate::entity::actor::ActorTemplate;
    use crate::entity::item::ItemKind;

    #[test]
    fn test_player_next_to_chest() {
        let config = GameConfig::default();
        let mut map = GameMap::from_rows(&["###", "#.?", "###"]).unwrap();
        let player = map
            .add_actor(ActorTemplate::player(&config.player), Position::new(1, 1))
            .unwrap();

        let actions = available_actions(&map, player).unwrap();
        assert_eq!(actions, vec![Action::OpenChest { chest: Position::new(2, 1) }]);
    }

    #[test]
    fn test_menu_order_and_contents() {
        let config = GameConfig::default();
        let mut map = GameMap::from_rows(&["?..", "...", "..."]).unwrap();
        let here = Position::new(1, 1);
        let player = map
            .add_actor(ActorTemplate::player(&config.player), here)
            .unwrap();
        let mimic = map
            .add_actor(ActorTemplate::mimic(&config.mimic, 3, 1), Position::new(2, 2))
            .unwrap();
        let ground_token = map.create_item(ItemKind::SoulToken { souls: 100 });
        let ground_id = ground_token.id;
        map.add_item(here, ground_token).unwrap();
        let held = map.create_item(ItemKind::SoulToken { souls: 100 });
        let held_id = held.id;
        map.actor_mut(player).unwrap().add_item(held);

        let actions = available_actions(&map, player).unwrap();

        assert_eq!(actions[0], Action::OpenChest { chest: Position::new(0, 0) });
        assert_eq!(actions[1], Action::Attack { target: mimic });
        assert_eq!(actions[2], Action::PickUp { item: ground_id });
        assert_eq!(actions[3], Action::Consume { item: held_id });
        // Eight neighbours minus the chest and the mimic
        let moves = actions.iter().filter(|a| matches!(a, Action::Move { .. })).count();
        assert_eq!(moves, 6);
    }

    #[test]
    fn test_menu_lists_each_category_once() {
        let config = GameConfig::default();
        let mut map = GameMap::from_rows(&["?..", "...", "..."]).unwrap();
        let here = Position::new(1, 1);
        let player = map
            .add_actor(ActorTemplate::player(&config.player), here)
            .unwrap();
        map.add_actor(ActorTemplate::mimic(&config.mimic, 3, 1), Position::new(2, 2))
            .unwrap();
        let token = map.create_item(ItemKind::SoulToken { souls: 100 });
        map.add_item(here, token).unwrap();

        let actions = available_actions(&map, player).unwrap();
        let mut sections = actions.iter().map(|a| a.category()).collect::<Vec<_>>();
        sections.dedup();

        // The console prints one heading per run of equal categories
        assert_eq!(
            sections,
            vec![
                ActionCategory::Terrain,
                ActionCategory::Combat,
                ActionCategory::Item,
                ActionCategory::Movement,
            ]
        );
    }

    #[test]
    fn test_mimic_only_attacks() {
        let config = GameConfig::default();
        let mut map = GameMap::from_rows(&["...", "..?"]).unwrap();
        let player = map
            .add_actor(ActorTemplate::player(&config.player), Position::new(0, 0))
            .unwrap();
        let mimic = map
            .add_actor(ActorTemplate::mimic(&config.mimic, 3, 1), Position::new(1, 1))
            .unwrap();

        let actions = available_actions(&map, mimic).unwrap();
        assert_eq!(actions, vec![Action::Attack { target: player }]);
    }
}
