//! Economy builder and per-run state.
//!
//! A run owns an index-stable generator roster and the infrastructure of
//! the current city level. Infrastructure refers to generators by index
//! only, so the whole roster can be dropped and rebuilt on every reset.

use std::fmt;

use crate::config::EconomyConfig;
use crate::systems::generator::Generator;
use crate::systems::infrastructure::Infrastructure;
use crate::systems::purchase::{Purchase, purchase};
use crate::systems::research::{RESEARCH_SLOTS, Research, Variant};
use crate::systems::tick::tick_income;

/// City development stage. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CityLevel {
    /// No infrastructure.
    #[default]
    Village = 0,
    /// Three fixed infrastructures.
    Town = 1,
    /// Five research-dependent infrastructures.
    Metropolis = 2,
}

impl CityLevel {
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Experience needed to leave this level, if there is a next one.
    pub fn promotion_threshold(self) -> Option<f64> {
        match self {
            CityLevel::Village => Some(1_000.0),
            CityLevel::Town => Some(100_000.0),
            CityLevel::Metropolis => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            CityLevel::Village => Some(CityLevel::Town),
            CityLevel::Town => Some(CityLevel::Metropolis),
            CityLevel::Metropolis => None,
        }
    }
}

impl fmt::Display for CityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Price/multiplier triple of one infrastructure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InfraParams {
    pub cost_factor: f64,
    pub base_cost: f64,
    pub base_mult: f64,
}

const fn p(cost_factor: f64, base_cost: f64, base_mult: f64) -> InfraParams {
    InfraParams { cost_factor, base_cost, base_mult }
}

/// Town infrastructure, fixed.
pub const TOWN_INFRA: [(InfraParams, &[usize]); 3] = [
    (p(1.6, 5e3, 1.15), &[0, 2, 5]),
    (p(1.6, 5e4, 1.15), &[3, 4, 6]),
    (p(1.7, 5e5, 1.20), &[1, 7]),
];

/// Generators amplified by each metropolis infrastructure slot.
pub const METROPOLIS_AFFECTING: [&[usize]; RESEARCH_SLOTS] =
    [&[0, 2, 5], &[3, 4, 6], &[1, 7], &[0, 1, 2, 3], &[4, 5, 6, 7]];

// Per slot: [not set, cheaper growth, stronger, cheaper entry].
const METROPOLIS_PARAMS: [[InfraParams; 4]; RESEARCH_SLOTS] = [
    [p(1.6, 5e3, 1.18), p(1.55, 5e3, 1.18), p(1.6, 5e3, 1.20), p(1.6, 1e3, 1.18)],
    [p(1.6, 5e4, 1.18), p(1.55, 5e4, 1.18), p(1.6, 5e4, 1.20), p(1.6, 1e4, 1.18)],
    [p(1.6, 5e5, 1.18), p(1.55, 5e5, 1.18), p(1.6, 5e5, 1.20), p(1.6, 1e5, 1.18)],
    [p(1.8, 1e8, 1.23), p(1.75, 1e8, 1.23), p(1.8, 1e8, 1.25), p(1.8, 2e7, 1.23)],
    [p(1.8, 1e10, 1.23), p(1.75, 1e10, 1.23), p(1.8, 1e10, 1.25), p(1.8, 2e9, 1.23)],
];

/// Parameters of metropolis slot `slot` under `variant` (`None` = default).
pub fn metropolis_params(slot: usize, variant: Option<Variant>) -> InfraParams {
    let row = &METROPOLIS_PARAMS[slot];
    match variant {
        Some(Variant::CheaperGrowth) => row[1],
        Some(Variant::Stronger) => row[2],
        Some(Variant::CheaperEntry) => row[3],
        None => row[0],
    }
}

/// Generator `i` costs `base_cost * growth_cost^i`, gains
/// `base_gain * growth_gain^i`, grows its price by `cost_factors[i]` and
/// carries `upgrades[i]`. Slots without an upgrade list get none.
pub fn build_generators(
    growth_gain: f64,
    growth_cost: f64,
    base_gain: f64,
    base_cost: f64,
    cost_factors: &[f64],
    upgrades: &[Vec<(u32, f64)>],
) -> Vec<Generator> {
    let mut gain = base_gain;
    let mut cost = base_cost;
    let mut out = Vec::with_capacity(cost_factors.len());
    for (i, &factor) in cost_factors.iter().enumerate() {
        let mut g = Generator::new(factor, cost, gain);
        for &(level, mult) in upgrades.get(i).map(Vec::as_slice).unwrap_or_default() {
            g.register_upgrade(level, mult);
        }
        out.push(g);
        gain *= growth_gain;
        cost *= growth_cost;
    }
    out
}

/// Infrastructure available at `city`. Metropolis slots use the variant of
/// their research once it is done, the default parameters before.
pub fn build_infrastructure(city: CityLevel, research: &Research) -> Vec<Infrastructure> {
    match city {
        CityLevel::Village => Vec::new(),
        CityLevel::Town => TOWN_INFRA
            .iter()
            .map(|(q, aff)| Infrastructure::new(q.cost_factor, q.base_cost, q.base_mult, aff.iter().copied()))
            .collect(),
        CityLevel::Metropolis => (0..RESEARCH_SLOTS)
            .map(|slot| {
                let q = metropolis_params(slot, research.active(slot));
                Infrastructure::new(
                    q.cost_factor,
                    q.base_cost,
                    q.base_mult,
                    METROPOLIS_AFFECTING[slot].iter().copied(),
                )
            })
            .collect(),
    }
}

/// Reapplies the external `mult`/`boni` of every generator from research:
/// `mult = 1 + 0.25 * researched`, `boni = 1 + 0.5 * researched slots
/// covering the generator`.
pub fn apply_research_bonuses(generators: &mut [Generator], research: &Research) {
    let done = research.researched_count() as f64;
    for (i, g) in generators.iter_mut().enumerate() {
        let covering = research
            .researched_slots()
            .filter(|&s| METROPOLIS_AFFECTING[s].contains(&i))
            .count() as f64;
        g.mult = 1.0 + 0.25 * done;
        g.boni = 1.0 + 0.5 * covering;
    }
}

/// What one tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickReport {
    /// Income was credited and at most one purchase was made.
    Advanced { tick: u64, income: f64, purchase: Purchase },
    /// The balance went negative or non-finite after income. Fatal.
    Bankrupt { tick: u64, resource: f64 },
}

/// State of one run between two resets.
#[derive(Clone, Debug, PartialEq)]
pub struct Economy {
    pub generators: Vec<Generator>,
    pub infrastructure: Vec<Infrastructure>,
    pub resource: f64,
    /// Income since the start of the run.
    pub all_gain: f64,
    /// Ticks elapsed in the run.
    pub tick: u64,
}

impl Economy {
    pub fn new(generators: Vec<Generator>, infrastructure: Vec<Infrastructure>) -> Self {
        Self { generators, infrastructure, resource: 0.0, all_gain: 0.0, tick: 0 }
    }

    /// Fresh roster for `city`, research bonuses applied.
    pub fn build(cfg: &EconomyConfig, city: CityLevel, research: &Research) -> Self {
        let mut generators = build_generators(
            cfg.gain_growth,
            cfg.cost_growth,
            cfg.base_gain,
            cfg.base_cost,
            &cfg.cost_factors,
            &cfg.upgrades,
        );
        apply_research_bonuses(&mut generators, research);
        Self::new(generators, build_infrastructure(city, research))
    }

    /// Level of the highest-index generator (0 for an empty roster).
    pub fn top_level(&self) -> u32 {
        self.generators.last().map_or(0, Generator::level)
    }

    /// Credits one tick of income, then lets the purchase policy spend.
    pub fn step(&mut self, experience_multiplier: f64) -> TickReport {
        let tick = self.tick;
        let income = tick_income(&self.generators, &self.infrastructure, experience_multiplier);
        self.resource += income;
        self.all_gain += income;
        if self.resource < 0.0 || !self.resource.is_finite() {
            return TickReport::Bankrupt { tick, resource: self.resource };
        }

        let bought = purchase(&mut self.generators, &mut self.infrastructure, &mut self.resource);
        debug_assert!(self.resource >= 0.0, "purchase overspent: {}", self.resource);
        self.tick += 1;
        TickReport::Advanced { tick, income, purchase: bought }
    }
}
