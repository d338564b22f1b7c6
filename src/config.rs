//! Tunable game rules, loaded from JSON.
//!
//! Every field is optional in the file; missing values fall back to the defaults
//! below, so `{}` is a valid configuration.
//!
//! ```json
//! {
//!   "potions": { "fancy": { "strength": 2, "moves": 2 } },
//!   "coin_value": 5,
//!   "starting_money": 0,
//!   "shop": { "strength": 5, "move": 5, "fancy": 10 }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Effect, Legend, PotionKind};
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PotionEffects {
    pub strength: Effect,
    #[serde(rename = "move")]
    pub moves: Effect,
    pub fancy: Effect,
}

impl Default for PotionEffects {
    fn default() -> Self {
        PotionEffects {
            strength: PotionKind::Strength.effect(),
            moves: PotionKind::Move.effect(),
            fancy: PotionKind::Fancy.effect(),
        }
    }
}

impl PotionEffects {
    pub fn get(&self, kind: PotionKind) -> &Effect {
        match kind {
            PotionKind::Strength => &self.strength,
            PotionKind::Move => &self.moves,
            PotionKind::Fancy => &self.fancy,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub potions: PotionEffects,
    pub coin_value: u32,
    pub starting_money: u32,
    pub shop: BTreeMap<PotionKind, u32>,
    pub legend: Legend,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            potions: PotionEffects::default(),
            coin_value: 5,
            starting_money: 0,
            shop: BTreeMap::from([
                (PotionKind::Strength, 5),
                (PotionKind::Move, 5),
                (PotionKind::Fancy, 10),
            ]),
            legend: Legend::default(),
        }
    }
}

impl RulesConfig {
    /// Parses a config and rejects legends where one character would stand for two symbols.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_json::from_str(json)?;
        if let Some(symbol) = config.legend.find_clash() {
            return Err(ConfigError::InvalidLegend { symbol });
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn effect_of(&self, kind: PotionKind) -> &Effect {
        self.potions.get(kind)
    }
}
