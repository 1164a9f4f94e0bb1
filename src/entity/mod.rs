pub mod actor;
pub mod item;

pub use actor::{Actor, ActorKind, ActorTemplate};
pub use item::{Item, ItemKind};
