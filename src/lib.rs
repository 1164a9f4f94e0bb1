//! Ashen Keep - turn-based dungeon crawl simulation core
//!
//! A grid of locations holding terrain, items and at most one actor each,
//! driven by a round-robin turn engine that offers every actor a menu of
//! actions and runs the chosen one against the map. All randomness goes
//! through an injected `RandomPolicy`.

pub mod actions;
pub mod core;
pub mod engine;
pub mod entity;
pub mod world;
