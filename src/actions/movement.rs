use crate::actions::catalog::ActionContext;
use crate::core::error::{KeepError, Result};
use crate::core::types::{ActorId, Position};
use crate::entity::actor::Actor;
use crate::world::map::GameMap;

pub fn menu_description(actor: &Actor, to: Position) -> String {
    let dir = compass(actor.position, to);
    format!("{} moves {}", actor.name, dir)
}

/// Direction name for a single step
fn compass(from: Position, to: Position) -> &'static str {
    use std::cmp::Ordering::*;
    match (to.x.cmp(&from.x), to.y.cmp(&from.y)) {
        (Equal, Less) => "North",
        (Greater, Less) => "North-East",
        (Greater, Equal) => "East",
        (Greater, Greater) => "South-East",
        (Equal, Greater) => "South",
        (Less, Greater) => "South-West",
        (Less, Equal) => "West",
        (Less, Less) => "North-West",
        (Equal, Equal) => "nowhere",
    }
}

pub fn check(actor: ActorId, to: Position, map: &GameMap) -> Result<()> {
    let a = map.actor(actor)?;
    if !a.kind.can_move() {
        return Err(KeepError::InvalidTarget(format!("{} cannot move", a.name)));
    }
    if !a.position.is_adjacent(&to) {
        return Err(KeepError::InvalidTarget(format!(
            "{} is not next to {}",
            to, a.name
        )));
    }
    let dest = map.location(to)?;
    if let Some(occupant) = dest.occupant() {
        return Err(KeepError::Occupied(to, occupant));
    }
    if dest.ground().blocks_movement() {
        return Err(KeepError::Blocked(to));
    }
    Ok(())
}

pub fn execute(actor: ActorId, to: Position, ctx: &mut ActionContext) -> Result<String> {
    let from = ctx.map.actor(actor)?.position;
    ctx.map.move_actor(actor, to)?;
    let a = ctx.map.actor(actor)?;
    Ok(format!("{} moves {}", a.name, compass(from, to)))
}
