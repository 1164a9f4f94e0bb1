//! The grid world: terrain, tiles and the map that owns them

pub mod ground;
pub mod location;
pub mod map;

pub use ground::Ground;
pub use location::Location;
pub use map::GameMap;
