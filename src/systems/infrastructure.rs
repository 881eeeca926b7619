//! Infrastructure: a compounding multiplier over a fixed subset of
//! generators, referenced by index.

use std::collections::BTreeSet;

use crate::mechanics::curve::{compound, exp_cost};

#[derive(Clone, Debug, PartialEq)]
pub struct Infrastructure {
    cost_factor: f64,
    base_cost: f64,
    base_mult: f64,
    level: u32,
    affecting: BTreeSet<usize>,
}

impl Infrastructure {
    pub fn new(
        cost_factor: f64,
        base_cost: f64,
        base_mult: f64,
        affecting: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            cost_factor,
            base_cost,
            base_mult,
            level: 0,
            affecting: affecting.into_iter().collect(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn cost_factor(&self) -> f64 {
        self.cost_factor
    }

    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    pub fn base_mult(&self) -> f64 {
        self.base_mult
    }

    pub fn affecting(&self) -> &BTreeSet<usize> {
        &self.affecting
    }

    pub fn cost(&self) -> f64 {
        exp_cost(self.base_cost, self.cost_factor, self.level)
    }

    pub fn multiplier(&self) -> f64 {
        compound(self.base_mult, self.level)
    }

    /// [`Self::multiplier`] for generators in the affecting set, 1 otherwise.
    pub fn affect_multiplier(&self, generator: usize) -> f64 {
        if self.affecting.contains(&generator) {
            self.multiplier()
        } else {
            1.0
        }
    }

    pub fn buy(&mut self) {
        self.level += 1;
    }
}
