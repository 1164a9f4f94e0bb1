//! Action definitions and dispatch

use serde::{Deserialize, Serialize};

use crate::actions::{chest, combat, items, movement};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::random::RandomPolicy;
use crate::core::types::{ActorId, ItemId, Position};
use crate::entity::actor::Actor;
use crate::world::map::GameMap;

/// One thing an actor can do with its turn, bound to concrete targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move { to: Position },
    Attack { target: ActorId },
    OpenChest { chest: Position },
    PickUp { item: ItemId },
    Consume { item: ItemId },
}

/// Menu section an action is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Movement,
    Combat,
    Terrain,
    Item,
}

impl ActionCategory {
    pub fn heading(&self) -> &'static str {
        match self {
            ActionCategory::Movement => "Move",
            ActionCategory::Combat => "Fight",
            ActionCategory::Terrain => "Surroundings",
            ActionCategory::Item => "Items",
        }
    }
}

/// Everything an action may touch while it runs
pub struct ActionContext<'a> {
    pub map: &'a mut GameMap,
    pub rng: &'a mut dyn RandomPolicy,
    pub config: &'a GameConfig,
}

impl Action {
    pub fn category(&self) -> ActionCategory {
        match self {
            Action::Move { .. } => ActionCategory::Movement,
            Action::Attack { .. } => ActionCategory::Combat,
            Action::OpenChest { .. } => ActionCategory::Terrain,
            Action::PickUp { .. } | Action::Consume { .. } => ActionCategory::Item,
        }
    }

    /// Menu label; never depends on the outcome
    pub fn menu_description(&self, actor: &Actor, map: &GameMap) -> String {
        match *self {
            Action::Move { to } => movement::menu_description(actor, to),
            Action::Attack { target } => combat::menu_description(actor, target, map),
            Action::OpenChest { .. } => chest::menu_description(actor),
            Action::PickUp { item } => items::pick_up_menu_description(actor, item, map),
            Action::Consume { item } => items::consume_menu_description(actor, item),
        }
    }

    /// Verify the action is legal right now without touching the world
    pub fn check(&self, actor: ActorId, map: &GameMap) -> Result<()> {
        match *self {
            Action::Move { to } => movement::check(actor, to, map),
            Action::Attack { target } => combat::check(actor, target, map),
            Action::OpenChest { chest } => chest::check(actor, chest, map),
            Action::PickUp { item } => items::check_pick_up(actor, item, map),
            Action::Consume { item } => items::check_consume(actor, item, map),
        }
    }

    /// Check, then mutate the world; returns the log line describing what happened
    ///
    /// A failed check leaves the world untouched.
    pub fn execute(&self, actor: ActorId, ctx: &mut ActionContext) -> Result<String> {
        self.check(actor, ctx.map)?;
        let description = match *self {
            Action::Move { to } => movement::execute(actor, to, ctx)?,
            Action::Attack { target } => combat::execute(actor, target, ctx)?,
            Action::OpenChest { chest } => chest::execute(actor, chest, ctx)?,
            Action::PickUp { item } => items::execute_pick_up(actor, item, ctx)?,
            Action::Consume { item } => items::execute_consume(actor, item, ctx)?,
        };
        tracing::debug!(?actor, action = ?self, "action executed");
        Ok(description)
    }
}
