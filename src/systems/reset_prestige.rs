//! Prestige controller.
//!
//! States: `Running` (ticks are simulated), the reset transition (banks
//! experience, promotes the city, settles research, rebuilds the roster)
//! and the terminal `Done` / `Bankrupt`. A reset needs all three of:
//! - the highest-index generator at the completion level,
//! - a run yield at least equal to the banked experience,
//! - a purchase made this very tick.
//!
//! The last condition defers a due reset until the policy next buys
//! something.
//!
//! Research settles on every reset, after promotion, at any city level.
//! Researched slots reserve experience and raise generator bonuses right
//! away; their variants only shape metropolis infrastructure.

use crate::config::EconomyConfig;
use crate::error::Result;
use crate::mechanics::experience::{experience_gain, experience_multiplier};
use crate::systems::economy::{CityLevel, Economy, TickReport};
use crate::systems::research::Research;
use crate::systems::sdk::{Hook, PurchaseEvent, ResetEvent, notify_purchase, notify_reset};

/// Top-generator level that completes a run.
pub const COMPLETION_LEVEL: u32 = 85;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrestigeParams {
    pub start_experience: f64,
    pub target_experience: f64,
    pub completion_level: u32,
}

impl Default for PrestigeParams {
    fn default() -> Self {
        Self { start_experience: 20.0, target_experience: 1e9, completion_level: COMPLETION_LEVEL }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Running,
    /// Banked experience reached the target.
    Done,
    /// The balance went negative (or non-finite) at `tick` of the current run.
    Bankrupt { tick: u64, resource: f64 },
}

#[derive(Clone, Debug)]
pub struct Prestige {
    cfg: EconomyConfig,
    params: PrestigeParams,
    economy: Economy,
    experience: f64,
    locked_experience: f64,
    city: CityLevel,
    research: Research,
    history: Vec<u64>,
    total_ticks: u64,
    phase: Phase,
}

impl Prestige {
    pub fn new(cfg: EconomyConfig, params: PrestigeParams, research: Research) -> Self {
        let city = CityLevel::Village;
        let economy = Economy::build(&cfg, city, &research);
        let phase = if params.start_experience >= params.target_experience {
            Phase::Done
        } else {
            Phase::Running
        };
        Self {
            cfg,
            params,
            economy,
            experience: params.start_experience,
            locked_experience: 0.0,
            city,
            research,
            history: Vec::new(),
            total_ticks: 0,
            phase,
        }
    }

    /// Starts at `city` instead of the village; the roster is rebuilt.
    pub fn with_city_level(mut self, city: CityLevel) -> Self {
        self.city = city;
        self.economy = Economy::build(&self.cfg, city, &self.research);
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn locked_experience(&self) -> f64 {
        self.locked_experience
    }

    pub fn city_level(&self) -> CityLevel {
        self.city
    }

    pub fn research(&self) -> &Research {
        &self.research
    }

    /// Length of every finished run, oldest first.
    pub fn history(&self) -> &[u64] {
        &self.history
    }

    /// Ticks of all finished runs.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Ticks of all finished runs plus the current one.
    pub fn elapsed_ticks(&self) -> u64 {
        self.total_ticks + self.economy.tick
    }

    pub fn experience_multiplier(&self) -> f64 {
        experience_multiplier(self.experience, self.locked_experience)
    }

    pub fn should_reset(&self, purchased: bool) -> bool {
        purchased
            && self.economy.top_level() >= self.params.completion_level
            && experience_gain(self.economy.all_gain) >= self.experience
    }

    /// One tick, plus the reset transition when it triggers.
    pub fn advance(&mut self, hooks: &mut [Box<dyn Hook>]) -> Result<Phase> {
        if self.phase != Phase::Running {
            return Ok(self.phase);
        }

        match self.economy.step(self.experience_multiplier()) {
            TickReport::Bankrupt { tick, resource } => {
                log::error!(
                    "negative resource {resource} at tick {tick} of run {}; aborting",
                    self.history.len() + 1
                );
                self.phase = Phase::Bankrupt { tick, resource };
            }
            TickReport::Advanced { tick, income, purchase } => {
                if purchase.happened() {
                    let ev = PurchaseEvent {
                        tick,
                        purchase,
                        income,
                        resource: self.economy.resource,
                        generators: &self.economy.generators,
                        infrastructure: &self.economy.infrastructure,
                    };
                    notify_purchase(hooks, &ev)?;
                }
                if self.should_reset(purchase.happened()) {
                    self.reset(hooks);
                }
            }
        }
        Ok(self.phase)
    }

    /// The reset transition. Callers normally go through [`Self::advance`].
    /// `None` once the campaign left `Running`; nothing changes then.
    pub fn reset(&mut self, hooks: &mut [Box<dyn Hook>]) -> Option<ResetEvent> {
        if self.phase != Phase::Running {
            return None;
        }
        let ticks = self.economy.tick;
        let all_gain = self.economy.all_gain;
        let gained = experience_gain(all_gain);

        self.history.push(ticks);
        self.total_ticks += ticks;
        self.experience += gained;

        if let (Some(threshold), Some(next)) = (self.city.promotion_threshold(), self.city.next()) {
            if self.experience >= threshold {
                log::info!("city level {} -> {next} at {:.4e} experience", self.city, self.experience);
                self.city = next;
                self.experience = 0.0;
            }
        }
        self.locked_experience += self.research.settle(self.experience);

        let ev = ResetEvent {
            reset: self.history.len(),
            ticks,
            all_gain,
            gained,
            experience: self.experience,
            locked_experience: self.locked_experience,
            city_level: self.city,
        };
        log::info!(
            "reset {}: {ticks} ticks, gained {gained:.4e} -> experience {:.4e} (locked {:.4e}, city {}, research {:?})",
            ev.reset,
            self.experience,
            self.locked_experience,
            self.city,
            self.research.markers()
        );
        notify_reset(hooks, &ev);

        self.economy = Economy::build(&self.cfg, self.city, &self.research);
        if self.experience >= self.params.target_experience {
            self.phase = Phase::Done;
        }
        Some(ev)
    }
}
