//! Decision sources: who picks the action each turn

use std::collections::VecDeque;

use crate::actions::catalog::Action;
use crate::entity::actor::Actor;
use crate::world::map::GameMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Act(Action),
    /// Pass the turn without acting
    Skip,
}

/// Picks one action from the menu offered for an actor
///
/// The engine re-checks whatever comes back, so a source may return an
/// action that was not on the menu; it is rejected rather than run.
pub trait DecisionSource {
    fn decide(&mut self, actor: &Actor, map: &GameMap, actions: &[Action]) -> Decision;
}

/// Replays menu indices; `None` or an index past the end of the menu skips
#[derive(Debug, Default)]
pub struct ScriptedDecisions {
    picks: VecDeque<Option<usize>>,
}

impl ScriptedDecisions {
    pub fn new(picks: impl IntoIterator<Item = Option<usize>>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.picks.is_empty()
    }
}

impl DecisionSource for ScriptedDecisions {
    fn decide(&mut self, actor: &Actor, _map: &GameMap, actions: &[Action]) -> Decision {
        match self.picks.pop_front().flatten() {
            Some(i) => match actions.get(i) {
                Some(action) => Decision::Act(*action),
                None => {
                    tracing::warn!(actor = %actor.name, index = i, "scripted pick out of range");
                    Decision::Skip
                }
            },
            None => Decision::Skip,
        }
    }
}

/// Hostile behaviour: attack the first enemy in reach, otherwise wait
#[derive(Debug, Default)]
pub struct HostileAi;

impl DecisionSource for HostileAi {
    fn decide(&mut self, _actor: &Actor, _map: &GameMap, actions: &[Action]) -> Decision {
        actions
            .iter()
            .find(|a| matches!(a, Action::Attack { .. }))
            .map_or(Decision::Skip, |a| Decision::Act(*a))
    }
}

/// Routes hostile actors to one source and everyone else to another
pub struct SplitDecisions<P, H> {
    pub player: P,
    pub hostile: H,
}

impl<P: DecisionSource, H: DecisionSource> DecisionSource for SplitDecisions<P, H> {
    fn decide(&mut self, actor: &Actor, map: &GameMap, actions: &[Action]) -> Decision {
        if actor.is_hostile() {
            self.hostile.decide(actor, map, actions)
        } else {
            self.player.decide(actor, map, actions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::types::{ActorId, Position};
    use crate::entity::actor::ActorTemplate;

    fn map_with_player() -> (GameMap, ActorId) {
        let config = GameConfig::default();
        let mut map = GameMap::from_rows(&["..."]).unwrap();
        let id = map
            .add_actor(ActorTemplate::player(&config.player), Position::new(0, 0))
            .unwrap();
        (map, id)
    }

    #[test]
    fn test_scripted_picks() {
        let (map, id) = map_with_player();
        let actor = map.actor(id).unwrap();
        let menu = [Action::Move { to: Position::new(1, 0) }];
        let mut source = ScriptedDecisions::new([Some(0), Some(5), None]);

        assert_eq!(source.decide(actor, &map, &menu), Decision::Act(menu[0]));
        assert_eq!(source.decide(actor, &map, &menu), Decision::Skip);
        assert_eq!(source.decide(actor, &map, &menu), Decision::Skip);
        assert!(source.is_exhausted());
        assert_eq!(source.decide(actor, &map, &menu), Decision::Skip);
    }

    #[test]
    fn test_hostile_prefers_attack() {
        let (map, id) = map_with_player();
        let actor = map.actor(id).unwrap();
        let attack = Action::Attack { target: ActorId(9) };
        let menu = [Action::Move { to: Position::new(1, 0) }, attack];

        assert_eq!(HostileAi.decide(actor, &map, &menu), Decision::Act(attack));
        assert_eq!(HostileAi.decide(actor, &map, &menu[..1]), Decision::Skip);
    }
}
