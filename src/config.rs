//! Simulation configuration.
//!
//! Every field has a default, so an empty TOML file (or no file at all)
//! yields the reference setup:
//!
//! ```toml
//! [economy]
//! base_cost = 10.0
//! cost_growth = 13.0
//! base_gain = 0.1
//! gain_growth = 8.0
//! cost_factors = [1.1, 1.1, 1.1, 1.1, 1.1, 1.1, 1.1, 1.095]
//! upgrades = [[[25, 3.0], [50, 5.0]], ...]
//!
//! [campaign]
//! start_experience = 20.0
//! target_experience = 1e9
//! completion_level = 85
//! research = [0, 1, 2, -1, 1]
//! # max_total_ticks = 10_000_000
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::systems::reset_prestige::{COMPLETION_LEVEL, PrestigeParams};
use crate::systems::research::Research;

/// Generator roster parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Price of the first generator.
    pub base_cost: f64,
    /// Price ratio between consecutive generators.
    pub cost_growth: f64,
    /// Base gain of the first generator.
    pub base_gain: f64,
    /// Gain ratio between consecutive generators.
    pub gain_growth: f64,
    /// Per-level price growth of every generator; its length is the roster size.
    pub cost_factors: Vec<f64>,
    /// `(level, factor)` upgrades per generator.
    pub upgrades: Vec<Vec<(u32, f64)>>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            base_cost: 10.0,
            cost_growth: 13.0,
            base_gain: 0.1,
            gain_growth: 8.0,
            cost_factors: vec![1.1, 1.1, 1.1, 1.1, 1.1, 1.1, 1.1, 1.095],
            upgrades: vec![
                vec![(25, 3.0), (50, 5.0), (100, 15.0), (130, 10.0), (170, 12.0), (200, 18.0)],
                vec![(30, 3.0), (60, 3.0), (90, 12.0), (120, 15.0), (150, 12.0)],
                vec![(15, 4.0), (40, 4.0), (80, 5.0), (140, 11.0)],
                vec![(35, 5.0), (70, 8.0), (105, 4.0), (140, 9.0), (180, 13.0)],
                vec![(40, 4.0), (80, 7.0), (120, 5.0), (160, 9.0)],
                vec![(10, 3.0), (40, 4.0), (80, 8.0)],
                vec![(50, 3.0), (90, 8.0)],
                vec![(75, 2.0), (150, 4.0)],
            ],
        }
    }
}

impl EconomyConfig {
    pub fn validate(&self) -> Result<()> {
        let bad = |msg: String| Err(SimError::InvalidConfig(msg));
        if self.cost_factors.is_empty() {
            return bad("roster is empty (no cost_factors)".into());
        }
        if self.upgrades.len() != self.cost_factors.len() {
            return bad(format!(
                "{} upgrade lists for {} generators",
                self.upgrades.len(),
                self.cost_factors.len()
            ));
        }
        if !(self.base_cost.is_finite() && self.base_cost > 0.0) {
            return bad(format!("base_cost must be > 0, got {}", self.base_cost));
        }
        if !(self.base_gain.is_finite() && self.base_gain > 0.0) {
            return bad(format!("base_gain must be > 0, got {}", self.base_gain));
        }
        if !(self.cost_growth.is_finite() && self.cost_growth > 0.0) {
            return bad(format!("cost_growth must be > 0, got {}", self.cost_growth));
        }
        if !(self.gain_growth.is_finite() && self.gain_growth > 0.0) {
            return bad(format!("gain_growth must be > 0, got {}", self.gain_growth));
        }
        for (i, f) in self.cost_factors.iter().enumerate() {
            if !(f.is_finite() && *f > 1.0) {
                return bad(format!("cost_factors[{i}] must be > 1, got {f}"));
            }
        }
        for (i, list) in self.upgrades.iter().enumerate() {
            for (level, factor) in list {
                if *level == 0 || !(factor.is_finite() && *factor > 0.0) {
                    return bad(format!("upgrades[{i}] has invalid entry ({level}, {factor})"));
                }
            }
        }
        Ok(())
    }
}

/// Prestige campaign parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    pub start_experience: f64,
    pub target_experience: f64,
    pub completion_level: u32,
    /// Variant per research slot; 0, 1, 2 or anything else for "not set".
    pub research: Vec<i64>,
    /// Stop after this many ticks in total.
    pub max_total_ticks: Option<u64>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            start_experience: 20.0,
            target_experience: 1e9,
            completion_level: COMPLETION_LEVEL,
            research: vec![0, 1, 2, -1, 1],
            max_total_ticks: None,
        }
    }
}

impl CampaignConfig {
    pub fn validate(&self) -> Result<()> {
        if self.completion_level == 0 {
            return Err(SimError::InvalidConfig("completion_level must be > 0".into()));
        }
        if !self.start_experience.is_finite() || self.start_experience < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "start_experience must be >= 0, got {}",
                self.start_experience
            )));
        }
        if self.target_experience.is_nan() {
            return Err(SimError::InvalidConfig("target_experience is NaN".into()));
        }
        Ok(())
    }

    pub fn prestige_params(&self) -> PrestigeParams {
        PrestigeParams {
            start_experience: self.start_experience,
            target_experience: self.target_experience,
            completion_level: self.completion_level,
        }
    }

    pub fn research(&self) -> Research {
        Research::from_choices(&self.research)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub economy: EconomyConfig,
    pub campaign: CampaignConfig,
}

impl SimConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: SimConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.economy.validate()?;
        self.campaign.validate()
    }
}
