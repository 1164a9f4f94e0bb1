//! Melee attacks and defeat

use crate::actions::catalog::ActionContext;
use crate::core::error::{KeepError, Result};
use crate::core::random::check_range;
use crate::core::types::{ActorId, Position};
use crate::entity::actor::{Actor, ActorKind};
use crate::entity::item::ItemKind;
use crate::world::map::GameMap;

pub fn menu_description(actor: &Actor, target: ActorId, map: &GameMap) -> String {
    match map.actor(target) {
        Ok(t) => format!("{} attacks {}", actor.name, t),
        Err(_) => format!("{} attacks", actor.name),
    }
}

pub fn check(actor: ActorId, target: ActorId, map: &GameMap) -> Result<()> {
    if actor == target {
        return Err(KeepError::InvalidTarget("an actor cannot attack itself".into()));
    }
    let attacker = map.actor(actor)?;
    let defender = map.actor(target)?;

    if !attacker.is_enemy_of(defender) {
        return Err(KeepError::InvalidTarget(format!(
            "{} is not an enemy of {}",
            defender.name, attacker.name
        )));
    }
    if !attacker.position.is_adjacent(&defender.position) {
        return Err(KeepError::InvalidTarget(format!(
            "{} is out of reach of {}",
            defender.name, attacker.name
        )));
    }
    Ok(())
}

pub fn execute(actor: ActorId, target: ActorId, ctx: &mut ActionContext) -> Result<String> {
    let (attacker_name, damage, hit_chance) = {
        let a = ctx.map.actor(actor)?;
        (a.name.clone(), a.attack_damage, a.hit_chance)
    };
    if let ActorKind::Mimic { max_drop, min_drop } = ctx.map.actor(target)?.kind {
        // A knockout must be able to pay out before anything is rolled or removed
        check_range(min_drop, max_drop)?;
    }

    if !ctx.rng.chance(hit_chance) {
        let defender = ctx.map.actor(target)?;
        return Ok(format!("{} misses {}", attacker_name, defender.name));
    }

    let defender = ctx.map.actor_mut(target)?;
    let knocked_out = defender.hurt(damage);
    let mut result = format!("{} hits {} for {} damage", attacker_name, defender.name, damage);

    if knocked_out {
        let defeated = defeat(target, ctx)?;
        tracing::info!(actor = %defeated.name, ?target, "actor defeated");
        result.push_str(&format!("\n{} is killed", defeated.name));
        if let Some(drop) = drop_loot(&defeated, ctx)? {
            result.push('\n');
            result.push_str(&drop);
        }
    }

    Ok(result)
}

/// Mimics drop `min_drop..=max_drop` fresh soul tokens where they died
fn drop_loot(defeated: &Actor, ctx: &mut ActionContext) -> Result<Option<String>> {
    let pos: Position = defeated.position;
    let mut dropped = 0;

    if let ActorKind::Mimic { max_drop, min_drop } = defeated.kind {
        let count = ctx.rng.int_in_range(min_drop, max_drop)?;
        for _ in 0..count {
            let token = ctx.map.create_item(ItemKind::SoulToken {
                souls: ctx.config.chest.token_value,
            });
            ctx.map.add_item(pos, token)?;
            dropped += 1;
        }
    }

    Ok((dropped > 0).then(|| {
        format!(
            "{} drops {} Soul Token{}",
            defeated.name,
            dropped,
            if dropped == 1 { "" } else { "s" }
        )
    }))
}

/// Remove an actor that was defeated and drop everything it carried
///
/// Inventory items go down on the tile it stood on.
pub fn defeat(target: ActorId, ctx: &mut ActionContext) -> Result<Actor> {
    let mut defeated = ctx.map.remove_actor(target)?;
    for item in defeated.inventory.drain(..) {
        ctx.map.add_item(defeated.position, item)?;
    }
    Ok(defeated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::catalog::Action;
    use crate::core::config::GameConfig;
    use crate::core::random::ScriptedRandom;
    use crate::entity::actor::ActorTemplate;

    fn setup() -> (GameMap, ActorId, ActorId, GameConfig) {
        let config = GameConfig::default();
        let mut map = GameMap::from_rows(&["....", "...."]).unwrap();
        let player = map
            .add_actor(ActorTemplate::player(&config.player), Position::new(0, 0))
            .unwrap();
        let mimic = map
            .add_actor(ActorTemplate::mimic(&config.mimic, 3, 1), Position::new(1, 0))
            .unwrap();
        (map, player, mimic, config)
    }

    #[test]
    fn test_miss_changes_nothing() {
        let (mut map, player, mimic, config) = setup();
        let mut rng = ScriptedRandom::new().with_flips([false]);
        let mut ctx = ActionContext { map: &mut map, rng: &mut rng, config: &config };

        let text = Action::Attack { target: mimic }.execute(player, &mut ctx).unwrap();

        assert_eq!(text, "Unkindled misses Mimic");
        assert_eq!(map.actor(mimic).unwrap().hit_points, 100);
    }

    #[test]
    fn test_hit_deals_damage() {
        let (mut map, player, mimic, config) = setup();
        let mut rng = ScriptedRandom::new().with_flips([true]);
        let mut ctx = ActionContext { map: &mut map, rng: &mut rng, config: &config };

        let text = Action::Attack { target: mimic }.execute(player, &mut ctx).unwrap();

        assert_eq!(text, "Unkindled hits Mimic for 40 damage");
        assert_eq!(map.actor(mimic).unwrap().hit_points, 60);
    }

    #[test]
    fn test_defeated_mimic_drops_tokens() {
        let (mut map, player, mimic, config) = setup();
        map.actor_mut(mimic).unwrap().hit_points = 10;
        let mut rng = ScriptedRandom::new().with_flips([true]).with_ints([2]);
        let mut ctx = ActionContext { map: &mut map, rng: &mut rng, config: &config };

        let text = Action::Attack { target: mimic }.execute(player, &mut ctx).unwrap();

        assert!(text.contains("Mimic is killed"));
        assert!(text.ends_with("Mimic drops 2 Soul Tokens"));
        assert!(!map.contains_actor(mimic));
        let tile = map.location(Position::new(1, 0)).unwrap();
        assert!(!tile.is_occupied());
        assert_eq!(tile.items().len(), 2);
        assert_eq!(map.actors_in_turn_order(), &[player]);
    }

    #[test]
    fn test_bad_drop_range_leaves_mimic_standing() {
        let (mut map, player, _mimic, config) = setup();
        let broken = map
            .add_actor(ActorTemplate::mimic(&config.mimic, 1, 3), Position::new(1, 1))
            .unwrap();
        map.actor_mut(broken).unwrap().hit_points = 10;
        let mut rng = ScriptedRandom::new().with_flips([true]).with_ints([2]);
        let mut ctx = ActionContext { map: &mut map, rng: &mut rng, config: &config };

        let err = Action::Attack { target: broken }.execute(player, &mut ctx).unwrap_err();

        assert!(matches!(err, KeepError::Config(_)));
        assert_eq!(map.actor(broken).unwrap().hit_points, 10);
        assert!(map.location(Position::new(1, 1)).unwrap().items().is_empty());
        assert_eq!(rng.remaining(), (1, 1));
    }

    #[test]
    fn test_allies_and_distant_targets_rejected() {
        let (mut map, player, mimic, config) = setup();
        let ally = map
            .add_actor(ActorTemplate::player(&config.player), Position::new(0, 1))
            .unwrap();
        assert!(matches!(
            Action::Attack { target: ally }.check(player, &map),
            Err(KeepError::InvalidTarget(_))
        ));
        assert!(Action::Attack { target: player }.check(player, &map).is_err());

        map.move_actor(player, Position::new(3, 1)).unwrap();
        assert!(Action::Attack { target: mimic }.check(player, &map).is_err());
    }

    #[test]
    fn test_defeat_drops_inventory() {
        let (mut map, player, _mimic, config) = setup();
        let token = map.create_item(ItemKind::SoulToken { souls: 100 });
        map.actor_mut(player).unwrap().add_item(token);
        let mut rng = ScriptedRandom::new();
        let mut ctx = ActionContext { map: &mut map, rng: &mut rng, config: &config };

        let defeated = defeat(player, &mut ctx).unwrap();

        assert!(defeated.inventory.is_empty());
        assert_eq!(map.location(Position::new(0, 0)).unwrap().items().len(), 1);
    }
}
