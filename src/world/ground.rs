//! Terrain

use serde::{Deserialize, Serialize};

use crate::core::error::{KeepError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ground {
    Dirt,
    Floor,
    Wall,
    /// Unopened chest; opening it turns the tile into `Dirt`
    Chest,
}

impl Ground {
    pub fn blocks_movement(&self) -> bool {
        matches!(self, Ground::Wall | Ground::Chest)
    }

    /// Whether adjacent actors are offered an "open" action for this tile
    pub fn can_be_opened(&self) -> bool {
        matches!(self, Ground::Chest)
    }

    pub fn glyph(&self) -> char {
        match self {
            Ground::Dirt => '.',
            Ground::Floor => '_',
            Ground::Wall => '#',
            Ground::Chest => '?',
        }
    }

    pub fn from_glyph(glyph: char) -> Result<Self> {
        match glyph {
            '.' => Ok(Ground::Dirt),
            '_' => Ok(Ground::Floor),
            '#' => Ok(Ground::Wall),
            '?' => Ok(Ground::Chest),
            other => Err(KeepError::Config(format!("unknown map glyph {:?}", other))),
        }
    }
}
