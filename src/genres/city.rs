// src/genres/city.rs

//! City campaign: the prestige controller driven from the starting
//! experience to the target, through Village, Town and Metropolis.
//!
//! Ends on the first of: target reached, negative balance (history so far
//! is kept), or `max_total_ticks` ticks simulated over all runs.

use crate::config::SimConfig;
use crate::error::Result;
use crate::genres::report::{Summary, Termination};
use crate::systems::economy::CityLevel;
use crate::systems::research::RESEARCH_SLOTS;
use crate::systems::reset_prestige::{Phase, Prestige};
use crate::systems::sdk::{Hook, notify_finish};
use crate::{Flow, Stop, drive};

#[derive(Clone, Debug)]
pub struct CampaignOutcome {
    /// Ticks of every finished run, oldest first.
    pub history: Vec<u64>,
    pub termination: Termination,
    pub experience: f64,
    pub locked_experience: f64,
    pub city_level: CityLevel,
    /// Research markers at the end (`Some(-1)` = researched).
    pub research: [Option<i64>; RESEARCH_SLOTS],
    /// Ticks simulated, unfinished run included.
    pub total_ticks: u64,
}

impl CampaignOutcome {
    pub fn summary(&self) -> Option<Summary> {
        Summary::from_runs(&self.history)
    }
}

pub fn run_campaign(cfg: &SimConfig, mut hooks: Vec<Box<dyn Hook>>) -> Result<CampaignOutcome> {
    cfg.validate()?;
    let mut prestige = Prestige::new(
        cfg.economy.clone(),
        cfg.campaign.prestige_params(),
        cfg.campaign.research(),
    );
    let termination = run_prestige(&mut prestige, &mut hooks, cfg.campaign.max_total_ticks)?;
    notify_finish(&mut hooks)?;

    Ok(CampaignOutcome {
        history: prestige.history().to_vec(),
        termination,
        experience: prestige.experience(),
        locked_experience: prestige.locked_experience(),
        city_level: prestige.city_level(),
        research: prestige.research().markers(),
        total_ticks: prestige.elapsed_ticks(),
    })
}

/// Drives an already built controller. `max_ticks` counts ticks simulated
/// by this call.
pub fn run_prestige(
    prestige: &mut Prestige,
    hooks: &mut [Box<dyn Hook>],
    max_ticks: Option<u64>,
) -> Result<Termination> {
    let stop = drive(
        &mut *prestige,
        |p| -> Result<Flow> {
            Ok(match p.advance(hooks)? {
                Phase::Running => Flow::Continue,
                Phase::Done => Flow::Finished,
                Phase::Bankrupt { .. } => Flow::Halted,
            })
        },
        max_ticks,
    )?;

    let termination = match (stop, prestige.phase()) {
        (_, Phase::Bankrupt { tick, resource }) => Termination::NegativeResource { tick, resource },
        (Stop::Exhausted { steps }, _) => {
            log::warn!(
                "campaign stopped by tick budget after {steps} ticks ({} resets, experience {:.4e})",
                prestige.history().len(),
                prestige.experience()
            );
            Termination::TickBudget { ticks: steps }
        }
        _ => Termination::Completed,
    };
    log::info!(
        "campaign finished: {} resets, {} ticks, experience {:.4e}, city {}",
        prestige.history().len(),
        prestige.elapsed_ticks(),
        prestige.experience(),
        prestige.city_level()
    );
    Ok(termination)
}
