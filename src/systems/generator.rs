//! Generator: a level-based producer with an exponential price and
//! discrete per-level upgrades.

use std::collections::BTreeMap;

use crate::mechanics::curve::{exp_cost, linear_gain};

#[derive(Clone, Debug, PartialEq)]
pub struct Generator {
    cost_factor: f64,
    base_cost: f64,
    base_gain: f64,
    level: u32,
    /// External multiplier, reapplied by the economy builder.
    pub mult: f64,
    /// External bonus factor, reapplied by the economy builder.
    pub boni: f64,
    upgrades: BTreeMap<u32, f64>,
}

impl Generator {
    pub fn new(cost_factor: f64, base_cost: f64, base_gain: f64) -> Self {
        Self {
            cost_factor,
            base_cost,
            base_gain,
            level: 0,
            mult: 1.0,
            boni: 1.0,
            upgrades: BTreeMap::new(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current base gain, including every upgrade reached so far.
    pub fn base_gain(&self) -> f64 {
        self.base_gain
    }

    pub fn cost_factor(&self) -> f64 {
        self.cost_factor
    }

    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    /// `level * base_gain * mult * boni`.
    pub fn gain(&self) -> f64 {
        linear_gain(self.level, self.base_gain) * self.mult * self.boni
    }

    /// `base_cost * cost_factor^level`.
    pub fn cost(&self) -> f64 {
        exp_cost(self.base_cost, self.cost_factor, self.level)
    }

    /// Gain after one more purchase (upgrade included) per unit of price.
    /// Pure look-ahead: neither `level` nor `base_gain` moves.
    pub fn efficiency(&self) -> f64 {
        let next = self.level + 1;
        let gain = self.upgrades.get(&next).copied().unwrap_or(1.0) * self.base_gain;
        linear_gain(next, gain) * self.mult * self.boni / self.cost()
    }

    /// One more level; an upgrade keyed to the new level applies exactly once.
    pub fn buy(&mut self) {
        self.level += 1;
        if let Some(factor) = self.upgrades.get(&self.level) {
            self.base_gain *= factor;
        }
    }

    /// Adds or overwrites the upgrade at `level`. Levels already passed are
    /// never applied retroactively.
    pub fn register_upgrade(&mut self, level: u32, factor: f64) {
        self.upgrades.insert(level, factor);
    }

    pub fn upgrades(&self) -> &BTreeMap<u32, f64> {
        &self.upgrades
    }
}
