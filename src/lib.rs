/*!
`idle_sim`: a greedy tick simulator for an idle-game economy.

What it does
- Models generators with exponential prices, level-linear gains and
  per-level upgrades, and infrastructure that compounds the output of a
  fixed subset of generators.
- Runs the economy tick by tick: credit income, then buy the single best
  option (cheapest infrastructure first, most efficient generator second).
- Wraps runs in a prestige loop: finished runs are converted into
  experience, the roster is rebuilt, and the campaign continues until a
  target experience is banked.
- Separately, scores 5x5 zonings under neighbour rules by random search.

How to use (call surface only)
- Build a [`config::SimConfig`] (defaults = reference setup, or TOML).
- `genres::sprint::run_sprint` for a single run at fixed experience.
- `genres::city::run_campaign` for the full prestige campaign.
- `systems::grid_search::random_search` for the grid scorer.
- Attach [`systems::sdk::Hook`]s (e.g. [`systems::csv_log::CsvLog`]) to
  observe purchases and resets.

What it does NOT do
- No persistence beyond the CSV log, no UI, no parallelism inside a run.
  Independent runs share nothing and can be run on separate threads.
*/

pub mod config;
pub mod error;
pub mod mechanics;
pub mod systems;
pub mod genres;

pub use error::{Result, SimError};

/// Step verdict handed back to [`drive`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The goal was reached.
    Finished,
    /// The state cannot continue.
    Halted,
}

/// Why [`drive`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stop {
    Finished { steps: u64 },
    Halted { steps: u64 },
    /// `max_steps` ran out first.
    Exhausted { steps: u64 },
}

impl Stop {
    pub fn steps(self) -> u64 {
        match self {
            Stop::Finished { steps } | Stop::Halted { steps } | Stop::Exhausted { steps } => steps,
        }
    }
}

/// Deterministic driver: calls `step(state)` until it reports
/// [`Flow::Finished`] or [`Flow::Halted`], or `max_steps` steps were taken.
pub fn drive<S, E, F>(state: &mut S, mut step: F, max_steps: Option<u64>) -> std::result::Result<Stop, E>
where
    F: FnMut(&mut S) -> std::result::Result<Flow, E>,
{
    let mut steps = 0u64;
    loop {
        if max_steps.is_some_and(|max| steps >= max) {
            return Ok(Stop::Exhausted { steps });
        }
        let flow = step(state)?;
        steps += 1;
        match flow {
            Flow::Continue => {}
            Flow::Finished => return Ok(Stop::Finished { steps }),
            Flow::Halted => return Ok(Stop::Halted { steps }),
        }
    }
}
