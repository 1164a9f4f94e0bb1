pub mod config;
pub mod error;
pub mod random;
pub mod types;

pub use config::{load_config, GameConfig};
pub use error::{KeepError, Result};
pub use random::{RandomPolicy, ScriptedRandom, SeededRandom};
pub use types::{ActorId, ItemId, Position, Turn};
