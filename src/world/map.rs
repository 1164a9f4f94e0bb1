//! GameMap - owns every location and every actor

use ahash::AHashMap;

use crate::core::error::{KeepError, Result};
use crate::core::types::{ActorId, ItemId, Position};
use crate::entity::actor::{Actor, ActorTemplate};
use crate::entity::item::{Item, ItemKind};
use crate::world::ground::Ground;
use crate::world::location::Location;

/// The grid world
///
/// All placement goes through the map so that a location's occupant and the
/// actor's position can never disagree.
pub struct GameMap {
    width: u32,
    height: u32,
    /// Row-major
    locations: Vec<Location>,
    actors: AHashMap<ActorId, Actor>,
    /// Living actors in spawn order
    turn_order: Vec<ActorId>,
    next_actor_id: u32,
    next_item_id: u32,
}

impl GameMap {
    /// A rectangular map filled with one kind of ground
    pub fn new(width: u32, height: u32, ground: Ground) -> Self {
        let locations = (0..height)
            .flat_map(|y| (0..width).map(move |x| Location::new(Position::new(x, y), ground)))
            .collect();

        Self {
            width,
            height,
            locations,
            actors: AHashMap::new(),
            turn_order: Vec::new(),
            next_actor_id: 1,
            next_item_id: 1,
        }
    }

    /// Build from ASCII rows, one glyph per tile (see `Ground::from_glyph`)
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(KeepError::Config("map has no rows".into()));
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(KeepError::Config("map rows are empty".into()));
        }

        let mut map = Self::new(width as u32, rows.len() as u32, Ground::Dirt);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(KeepError::Config(format!(
                    "map row {} has {} tiles, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, glyph) in row.chars().enumerate() {
                let ground = Ground::from_glyph(glyph)?;
                map.set_ground(Position::new(x as u32, y as u32), ground)?;
            }
        }
        Ok(map)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Result<usize> {
        if !self.in_bounds(pos) {
            return Err(KeepError::OutOfBounds(pos));
        }
        Ok((pos.y * self.width + pos.x) as usize)
    }

    pub fn location(&self, pos: Position) -> Result<&Location> {
        let idx = self.index(pos)?;
        Ok(&self.locations[idx])
    }

    fn location_mut(&mut self, pos: Position) -> Result<&mut Location> {
        let idx = self.index(pos)?;
        Ok(&mut self.locations[idx])
    }

    /// Replace terrain unconditionally; callers are responsible for legality
    pub fn set_ground(&mut self, pos: Position, ground: Ground) -> Result<()> {
        self.location_mut(pos)?.set_ground(ground);
        Ok(())
    }

    /// In-bounds tiles around `pos`, row by row
    pub fn neighbours(&self, pos: Position) -> Vec<Position> {
        let mut out = Vec::with_capacity(8);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if let Some(p) = pos.offset(dx, dy) {
                    if self.in_bounds(p) {
                        out.push(p);
                    }
                }
            }
        }
        out
    }

    // === ITEMS ===

    /// Mint a new item with a fresh id; it belongs nowhere until placed
    pub fn create_item(&mut self, kind: ItemKind) -> Item {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        Item::new(id, kind)
    }

    /// Append an item to a tile's item list
    pub fn add_item(&mut self, pos: Position, item: Item) -> Result<()> {
        self.location_mut(pos)?.add_item(item);
        Ok(())
    }

    pub fn remove_item(&mut self, pos: Position, item_id: ItemId) -> Result<Item> {
        self.location_mut(pos)?
            .remove_item(item_id)
            .ok_or(KeepError::ItemNotFound(item_id))
    }

    /// Move an item from the actor's tile into its inventory
    pub fn pick_up(&mut self, actor_id: ActorId, item_id: ItemId) -> Result<()> {
        let pos = self.actor(actor_id)?.position;
        let item = self.remove_item(pos, item_id)?;
        self.actor_mut(actor_id)?.add_item(item);
        Ok(())
    }

    // === ACTORS ===

    /// Place a new actor; the tile must be in bounds, passable and empty
    pub fn add_actor(&mut self, template: ActorTemplate, pos: Position) -> Result<ActorId> {
        self.check_enterable(pos)?;

        let id = ActorId(self.next_actor_id);
        self.next_actor_id += 1;

        self.location_mut(pos)?.set_occupant(Some(id));
        let actor = template.build(id, pos);
        tracing::debug!(actor = %actor.name, ?id, %pos, "actor placed");
        self.actors.insert(id, actor);
        self.turn_order.push(id);
        Ok(id)
    }

    /// Take an actor off the map, handing ownership back to the caller
    pub fn remove_actor(&mut self, id: ActorId) -> Result<Actor> {
        let actor = self.actors.remove(&id).ok_or(KeepError::ActorNotFound(id))?;
        self.location_mut(actor.position)?.set_occupant(None);
        self.turn_order.retain(|a| *a != id);
        tracing::debug!(actor = %actor.name, ?id, "actor removed");
        Ok(actor)
    }

    /// Relocate an actor; the destination obeys the same rules as `add_actor`
    pub fn move_actor(&mut self, id: ActorId, to: Position) -> Result<()> {
        let from = self.actor(id)?.position;
        self.check_enterable(to)?;

        self.location_mut(from)?.set_occupant(None);
        self.location_mut(to)?.set_occupant(Some(id));
        self.actor_mut(id)?.position = to;
        Ok(())
    }

    fn check_enterable(&self, pos: Position) -> Result<()> {
        let loc = self.location(pos)?;
        if let Some(occupant) = loc.occupant() {
            return Err(KeepError::Occupied(pos, occupant));
        }
        if loc.ground().blocks_movement() {
            return Err(KeepError::Blocked(pos));
        }
        Ok(())
    }

    pub fn actor(&self, id: ActorId) -> Result<&Actor> {
        self.actors.get(&id).ok_or(KeepError::ActorNotFound(id))
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Result<&mut Actor> {
        self.actors.get_mut(&id).ok_or(KeepError::ActorNotFound(id))
    }

    pub fn actor_at(&self, pos: Position) -> Option<&Actor> {
        let id = self.location(pos).ok()?.occupant()?;
        self.actors.get(&id)
    }

    pub fn contains_actor(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    /// Living actors in spawn order
    pub fn actors_in_turn_order(&self) -> &[ActorId] {
        &self.turn_order
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn hostile_count(&self) -> usize {
        self.actors.values().filter(|a| a.is_hostile()).count()
    }
}
