//! Picking up and consuming items

use crate::actions::catalog::ActionContext;
use crate::core::error::{KeepError, Result};
use crate::core::types::{ActorId, ItemId};
use crate::entity::actor::Actor;
use crate::world::map::GameMap;

pub fn pick_up_menu_description(actor: &Actor, item: ItemId, map: &GameMap) -> String {
    let name = map
        .location(actor.position)
        .ok()
        .and_then(|loc| loc.items().iter().find(|i| i.id == item))
        .map_or("item", |i| i.name());
    format!("{} picks up the {}", actor.name, name)
}

pub fn consume_menu_description(actor: &Actor, item: ItemId) -> String {
    match actor.item(item) {
        Some(i) => format!("{} uses {}", actor.name, i),
        None => format!("{} uses an item", actor.name),
    }
}

pub fn check_pick_up(actor: ActorId, item: ItemId, map: &GameMap) -> Result<()> {
    let a = map.actor(actor)?;
    if !a.kind.can_handle_items() {
        return Err(KeepError::InvalidTarget(format!("{} cannot carry items", a.name)));
    }
    let here = map.location(a.position)?;
    if !here.items().iter().any(|i| i.id == item) {
        return Err(KeepError::ItemNotFound(item));
    }
    Ok(())
}

pub fn execute_pick_up(actor: ActorId, item: ItemId, ctx: &mut ActionContext) -> Result<String> {
    ctx.map.pick_up(actor, item)?;
    let a = ctx.map.actor(actor)?;
    let name = a.item(item).map_or("item", |i| i.name());
    Ok(format!("{} picks up the {}", a.name, name))
}

pub fn check_consume(actor: ActorId, item: ItemId, map: &GameMap) -> Result<()> {
    let a = map.actor(actor)?;
    let held = a.item(item).ok_or(KeepError::ItemNotFound(item))?;
    if !held.is_consumable() {
        return Err(KeepError::InvalidTarget(format!("{} cannot be used", held.name())));
    }
    Ok(())
}

/// Destroys the item and credits its souls to the actor
pub fn execute_consume(actor: ActorId, item: ItemId, ctx: &mut ActionContext) -> Result<String> {
    let a = ctx.map.actor_mut(actor)?;
    let used = a.remove_item(item).ok_or(KeepError::ItemNotFound(item))?;
    a.add_souls(used.souls());
    tracing::debug!(actor = %a.name, souls = a.souls, "souls absorbed");
    Ok(format!(
        "{} absorbs {} souls (now {})",
        a.name,
        used.souls(),
        a.souls
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::catalog::Action;
    use crate::core::config::GameConfig;
    use crate::core::random::ScriptedRandom;
    use crate::core::types::Position;
    use crate::entity::actor::ActorTemplate;
    use crate::entity::item::ItemKind;

    fn setup() -> (GameMap, ActorId, ItemId, GameConfig) {
        let config = GameConfig::default();
        let mut map = GameMap::from_rows(&["...", "..."]).unwrap();
        let pos = Position::new(1, 1);
        let player = map
            .add_actor(ActorTemplate::player(&config.player), pos)
            .unwrap();
        let token = map.create_item(ItemKind::SoulToken { souls: 100 });
        let token_id = token.id;
        map.add_item(pos, token).unwrap();
        (map, player, token_id, config)
    }

    #[test]
    fn test_pick_up_then_consume() {
        let (mut map, player, token, config) = setup();
        let mut rng = ScriptedRandom::new();

        let mut ctx = ActionContext { map: &mut map, rng: &mut rng, config: &config };
        let text = Action::PickUp { item: token }.execute(player, &mut ctx).unwrap();
        assert_eq!(text, "Unkindled picks up the Soul Token");

        let text = Action::Consume { item: token }.execute(player, &mut ctx).unwrap();
        assert_eq!(text, "Unkindled absorbs 100 souls (now 100)");

        let actor = map.actor(player).unwrap();
        assert_eq!(actor.souls, 100);
        assert!(actor.inventory.is_empty());
    }

    #[test]
    fn test_consume_requires_holding() {
        let (map, player, token, _config) = setup();
        // Still on the ground
        assert!(matches!(
            Action::Consume { item: token }.check(player, &map),
            Err(KeepError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_pick_up_requires_same_tile() {
        let (mut map, player, token, _config) = setup();
        map.move_actor(player, Position::new(0, 0)).unwrap();
        assert!(Action::PickUp { item: token }.check(player, &map).is_err());
    }

    #[test]
    fn test_mimic_cannot_pick_up() {
        let (mut map, player, token, config) = setup();
        map.remove_actor(player).unwrap();
        let mimic = map
            .add_actor(ActorTemplate::mimic(&config.mimic, 3, 1), Position::new(1, 1))
            .unwrap();
        assert!(matches!(
            Action::PickUp { item: token }.check(mimic, &map),
            Err(KeepError::InvalidTarget(_))
        ));
    }
}
