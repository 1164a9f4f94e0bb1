//! Actions: the verbs of the simulation
//!
//! Each turn the engine asks `available_actions` what the current actor may
//! do, lets a decision source pick one, and runs it through
//! `Action::execute`, which re-checks legality before mutating the map.

pub mod available;
pub mod catalog;
pub mod chest;
pub mod combat;
pub mod items;
pub mod movement;

pub use available::available_actions;
pub use catalog::{Action, ActionCategory, ActionContext};
pub use chest::OPEN_CHEST_LABEL;
