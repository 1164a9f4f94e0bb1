//! Turn processing: decision sources, the turn loop and its log

pub mod decision;
pub mod log;
pub mod turn;

pub use decision::{Decision, DecisionSource, HostileAi, ScriptedDecisions, SplitDecisions};
pub use log::{LogEntry, TurnLog};
pub use turn::{TurnEngine, TurnOutcome};
