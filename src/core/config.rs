//! Game configuration with documented defaults
//!
//! Every tunable the rules read lives here. Values are loaded from TOML; any
//! section or field left out falls back to the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{KeepError, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the random policy; None draws from OS entropy
    pub seed: Option<u64>,
    pub chest: ChestConfig,
    pub player: PlayerConfig,
    pub mimic: MimicConfig,
    pub map: MapConfig,
}

/// Chest opening odds and loot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChestConfig {
    /// Chance in percent that the chest holds tokens instead of a mimic
    pub success_percent: u32,
    /// Fewest tokens a chest (or a defeated mimic) drops
    pub min_tokens: i32,
    /// Most tokens a chest (or a defeated mimic) drops
    pub max_tokens: i32,
    /// Souls carried by each token
    pub token_value: u32,
}

impl Default for ChestConfig {
    fn default() -> Self {
        Self {
            success_percent: 50,
            min_tokens: 1,
            max_tokens: 3,
            token_value: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub hit_points: u32,
    pub attack_damage: u32,
    pub hit_chance: u32,
    /// Starting tile as `[x, y]`
    pub start: [u32; 2],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: "Unkindled".to_string(),
            hit_points: 100,
            attack_damage: 40,
            hit_chance: 80,
            start: [1, 1],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MimicConfig {
    pub hit_points: u32,
    pub attack_damage: u32,
    pub hit_chance: u32,
}

impl Default for MimicConfig {
    fn default() -> Self {
        Self {
            hit_points: 100,
            attack_damage: 55,
            hit_chance: 60,
        }
    }
}

/// Map layout as ASCII rows
///
/// `.` dirt, `_` floor, `#` wall, `?` chest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub rows: Vec<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            rows: vec![
                "#######".to_string(),
                "#.....#".to_string(),
                "#..?..#".to_string(),
                "#.....#".to_string(),
                "#######".to_string(),
            ],
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text and validate
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let chest = &self.chest;
        if chest.min_tokens < 0 || chest.max_tokens < 0 {
            return Err(KeepError::Config(format!(
                "token bounds must be non-negative, got {}..={}",
                chest.min_tokens, chest.max_tokens
            )));
        }
        if chest.min_tokens > chest.max_tokens {
            return Err(KeepError::Config(format!(
                "min_tokens ({}) should be <= max_tokens ({})",
                chest.min_tokens, chest.max_tokens
            )));
        }

        for (what, percent) in [
            ("chest.success_percent", chest.success_percent),
            ("player.hit_chance", self.player.hit_chance),
            ("mimic.hit_chance", self.mimic.hit_chance),
        ] {
            if percent > 100 {
                return Err(KeepError::Config(format!(
                    "{} must be a percentage, got {}",
                    what, percent
                )));
            }
        }

        if self.player.hit_points == 0 || self.mimic.hit_points == 0 {
            return Err(KeepError::Config("hit points must be positive".into()));
        }

        if self.map.rows.is_empty() {
            return Err(KeepError::Config("map has no rows".into()));
        }

        Ok(())
    }
}

/// Read, parse and validate a config file
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let content = fs::read_to_string(path)?;
    let config = GameConfig::from_toml_str(&content)?;
    tracing::debug!(?path, "loaded game config");
    Ok(config)
}
