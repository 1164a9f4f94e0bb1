//! Opening a chest
//!
//! Single-shot: the chest becomes dirt the moment it is opened, before the
//! coin flip, so whichever way the flip goes it can never be opened again.
//! Heads drops `min_tokens..=max_tokens` soul tokens on the tile, tails
//! spawns a Mimic there carrying the same bounds as its own drop table.
//!
//! Chests block movement, so the opener always stands on a neighbouring tile
//! and the chest tile is free for the Mimic. If something did end up on the
//! chest tile, the open is refused before anything changes.

use crate::actions::catalog::ActionContext;
use crate::core::error::{KeepError, Result};
use crate::core::random::check_range;
use crate::core::types::{ActorId, Position};
use crate::entity::actor::{Actor, ActorTemplate};
use crate::entity::item::ItemKind;
use crate::world::ground::Ground;
use crate::world::map::GameMap;

pub const OPEN_CHEST_LABEL: &str = "Open The Chest";

pub fn menu_description(_actor: &Actor) -> String {
    OPEN_CHEST_LABEL.to_string()
}

pub fn check(actor: ActorId, chest: Position, map: &GameMap) -> Result<()> {
    let opener = map.actor(actor)?;
    let location = map.location(chest)?;

    if !location.ground().can_be_opened() {
        return Err(KeepError::InvalidTarget(format!(
            "{} is not a chest ({:?})",
            chest,
            location.ground()
        )));
    }
    if !opener.kind.can_handle_items() {
        return Err(KeepError::InvalidTarget(format!(
            "{} cannot open chests",
            opener.name
        )));
    }
    if !opener.position.is_adjacent(&chest) {
        return Err(KeepError::InvalidTarget(format!(
            "chest at {} is out of reach of {}",
            chest, opener.name
        )));
    }
    if let Some(occupant) = location.occupant() {
        return Err(KeepError::Occupied(chest, occupant));
    }
    Ok(())
}

pub fn execute(actor: ActorId, chest: Position, ctx: &mut ActionContext) -> Result<String> {
    let rules = &ctx.config.chest;
    let name = ctx.map.actor(actor)?.name.clone();
    // Both branches sample or carry these bounds; refuse before the chest is spent
    check_range(rules.min_tokens, rules.max_tokens)?;

    ctx.map.set_ground(chest, Ground::Dirt)?;

    let outcome = if ctx.rng.chance(rules.success_percent) {
        let count = ctx.rng.int_in_range(rules.min_tokens, rules.max_tokens)?;
        for _ in 0..count {
            let token = ctx.map.create_item(ItemKind::SoulToken {
                souls: rules.token_value,
            });
            ctx.map.add_item(chest, token)?;
        }
        tracing::info!(%chest, count, "chest dropped soul tokens");
        format!(
            "and it drops {} Soul Token{}",
            count,
            if count == 1 { "" } else { "s" }
        )
    } else {
        let mimic = ActorTemplate::mimic(&ctx.config.mimic, rules.max_tokens, rules.min_tokens);
        let id = ctx.map.add_actor(mimic, chest)?;
        tracing::info!(%chest, ?id, "chest turned into a mimic");
        "and it turns into a Mimic!".to_string()
    };

    Ok(format!("{} opened the chest\n{}", name, outcome))
}
