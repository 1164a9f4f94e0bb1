//! The turn loop
//!
//! One actor acts per turn, synchronously, in round-robin spawn order:
//! 1. Gather the legal actions for the current actor
//! 2. Ask the decision source for one (or a skip)
//! 3. Re-check the chosen action; a rejected action wastes nothing and the
//!    same actor is asked again on the next call
//! 4. Execute, log the description, advance to the next living actor

use crate::actions::available::available_actions;
use crate::actions::catalog::{Action, ActionContext};
use crate::core::config::GameConfig;
use crate::core::error::{KeepError, Result};
use crate::core::random::{RandomPolicy, SeededRandom};
use crate::core::types::{ActorId, Position, Turn};
use crate::engine::decision::{Decision, DecisionSource};
use crate::engine::log::TurnLog;
use crate::entity::actor::ActorTemplate;
use crate::world::map::GameMap;

/// What a completed turn did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub turn: Turn,
    pub actor: ActorId,
    /// None when the actor skipped
    pub action: Option<Action>,
    pub description: String,
}

pub struct TurnEngine {
    map: GameMap,
    rng: Box<dyn RandomPolicy>,
    config: GameConfig,
    log: TurnLog,
    turn: Turn,
    /// Actor whose turn was completed last
    last_actor: Option<ActorId>,
}

impl TurnEngine {
    pub fn new(map: GameMap, rng: Box<dyn RandomPolicy>, config: GameConfig) -> Self {
        Self {
            map,
            rng,
            config,
            log: TurnLog::new(),
            turn: 0,
            last_actor: None,
        }
    }

    /// Build the map from config, place the player and seed the random policy
    pub fn from_config(config: GameConfig) -> Result<(Self, ActorId)> {
        config.validate()?;
        let mut map = GameMap::from_rows(config.map.rows.as_slice())?;
        let start = Position::from(config.player.start);
        let player = map.add_actor(ActorTemplate::player(&config.player), start)?;

        let rng: Box<dyn RandomPolicy> = match config.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(SeededRandom::from_entropy()),
        };
        tracing::info!(seed = ?config.seed, width = map.width(), height = map.height(), "new game");

        Ok((Self::new(map, rng, config), player))
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    /// Direct world access for setup and tests; bypasses turn order
    pub fn map_mut(&mut self) -> &mut GameMap {
        &mut self.map
    }

    pub fn log(&self) -> &TurnLog {
        &self.log
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of completed turns
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The actor due to act next
    ///
    /// Ids grow in spawn order, so the next actor is the first living one
    /// spawned after the last to act, wrapping around. Actors removed this
    /// round are skipped; actors spawned this round act at the end of it.
    pub fn current_actor(&self) -> Result<ActorId> {
        let order = self.map.actors_in_turn_order();
        let next = match self.last_actor {
            Some(last) => order.iter().find(|id| **id > last).or(order.first()),
            None => order.first(),
        };
        next.copied().ok_or(KeepError::NoActors)
    }

    /// Menu for the current actor
    pub fn available_actions(&self) -> Result<Vec<Action>> {
        available_actions(&self.map, self.current_actor()?)
    }

    /// True while at least one non-hostile actor is on the map
    pub fn has_players(&self) -> bool {
        self.map
            .actors_in_turn_order()
            .iter()
            .filter_map(|id| self.map.actor(*id).ok())
            .any(|a| !a.is_hostile())
    }

    /// Run one turn for the current actor
    ///
    /// On a rejected decision the error is returned, nothing is mutated and
    /// the turn does not advance.
    pub fn play_turn(&mut self, decisions: &mut dyn DecisionSource) -> Result<TurnOutcome> {
        let actor_id = self.current_actor()?;
        let actions = available_actions(&self.map, actor_id)?;
        let actor = self.map.actor(actor_id)?;
        let name = actor.name.clone();

        let decision = decisions.decide(actor, &self.map, &actions);

        let (action, description) = match decision {
            Decision::Skip => (None, format!("{} waits", name)),
            Decision::Act(action) => {
                if let Err(e) = action.check(actor_id, &self.map) {
                    tracing::warn!(actor = %name, ?action, error = %e, "action rejected");
                    return Err(e);
                }
                let mut ctx = ActionContext {
                    map: &mut self.map,
                    rng: self.rng.as_mut(),
                    config: &self.config,
                };
                (Some(action), action.execute(actor_id, &mut ctx)?)
            }
        };

        self.turn += 1;
        self.last_actor = Some(actor_id);
        self.log.push(self.turn, name, description.clone());

        Ok(TurnOutcome {
            turn: self.turn,
            actor: actor_id,
            action,
            description,
        })
    }

    /// Play until the decision source has been asked `max_turns` times, no
    /// players remain, or an error occurs; rejected actions count as a turn
    /// spent re-prompting
    pub fn run(&mut self, decisions: &mut dyn DecisionSource, max_turns: usize) -> Result<usize> {
        let mut played = 0;
        for _ in 0..max_turns {
            if !self.has_players() {
                break;
            }
            match self.play_turn(decisions) {
                Ok(_) => played += 1,
                Err(KeepError::NoActors) => break,
                Err(
                    e @ (KeepError::InvalidTarget(_)
                    | KeepError::Occupied(..)
                    | KeepError::Blocked(_)
                    | KeepError::ItemNotFound(_)
                    | KeepError::ActorNotFound(_)),
                ) => {
                    tracing::debug!(error = %e, "re-prompting after rejected action");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(played)
    }
}
