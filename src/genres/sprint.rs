// src/genres/sprint.rs

//! Sprint: a single run of the roster, no infrastructure and no resets,
//! at a fixed experience level. Income is boosted linearly by
//! `experience * 0.04`. Stops once the top generator reaches the completion
//! level and reports the tick of every purchase.

use crate::config::EconomyConfig;
use crate::error::Result;
use crate::genres::report::Termination;
use crate::mechanics::experience::EXPERIENCE_WEIGHT;
use crate::systems::economy::{CityLevel, Economy, TickReport};
use crate::systems::generator::Generator;
use crate::systems::research::Research;
use crate::systems::reset_prestige::COMPLETION_LEVEL;
use crate::systems::sdk::{Hook, PurchaseEvent, notify_finish, notify_purchase};
use crate::{Flow, Stop, drive};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SprintParams {
    pub experience: f64,
    pub completion_level: u32,
    pub max_ticks: Option<u64>,
}

impl Default for SprintParams {
    fn default() -> Self {
        Self { experience: 0.0, completion_level: COMPLETION_LEVEL, max_ticks: None }
    }
}

#[derive(Clone, Debug)]
pub struct SprintOutcome {
    /// Tick index of every purchase, ascending.
    pub purchases: Vec<u64>,
    /// Ticks simulated.
    pub ticks: u64,
    pub termination: Termination,
    /// Roster as the run left it.
    pub generators: Vec<Generator>,
}

pub fn run_sprint(
    cfg: &EconomyConfig,
    params: SprintParams,
    mut hooks: Vec<Box<dyn Hook>>,
) -> Result<SprintOutcome> {
    cfg.validate()?;
    let mut economy = Economy::build(cfg, CityLevel::Village, &Research::default());
    let multiplier = params.experience * EXPERIENCE_WEIGHT;
    let mut purchases = Vec::new();
    let mut bankrupt = None;

    let stop = drive(
        &mut economy,
        |eco| -> Result<Flow> {
            match eco.step(multiplier) {
                TickReport::Bankrupt { tick, resource } => {
                    log::error!("negative resource {resource} at tick {tick}; aborting sprint");
                    bankrupt = Some(Termination::NegativeResource { tick, resource });
                    Ok(Flow::Halted)
                }
                TickReport::Advanced { tick, income, purchase } => {
                    if purchase.happened() {
                        purchases.push(tick);
                        let ev = PurchaseEvent {
                            tick,
                            purchase,
                            income,
                            resource: eco.resource,
                            generators: &eco.generators,
                            infrastructure: &eco.infrastructure,
                        };
                        notify_purchase(&mut hooks, &ev)?;
                    }
                    if eco.top_level() >= params.completion_level {
                        Ok(Flow::Finished)
                    } else {
                        Ok(Flow::Continue)
                    }
                }
            }
        },
        params.max_ticks,
    )?;
    notify_finish(&mut hooks)?;

    let termination = match stop {
        Stop::Finished { .. } => Termination::Completed,
        Stop::Halted { steps } => bankrupt.unwrap_or(Termination::TickBudget { ticks: steps }),
        Stop::Exhausted { .. } => {
            log::warn!("sprint stopped by tick budget after {} ticks", economy.tick);
            Termination::TickBudget { ticks: economy.tick }
        }
    };
    log::info!("sprint finished after {} ticks, {} purchases", economy.tick, purchases.len());

    Ok(SprintOutcome { purchases, ticks: economy.tick, termination, generators: economy.generators })
}
