// src/systems/sdk.rs

//! # Systems SDK
//!
//! Hook protocol shared by the economy **systems** (tick engine, purchase
//! policy, prestige controller). A *system* owns its state and advances it
//! one tick at a time; hooks watch those ticks without being able to change
//! the decisions.
//!
//! ## When to write a hook
//! Write a hook when you want to *observe* a run, e.g.:
//! - **csv_log**: one semicolon-separated row per generator purchase
//! - counting purchases per generator for a balancing report
//! - tracing reset timings while tuning research costs
//!
//! Hooks are attached by the orchestrators in `genres/*` (sprint, city) as
//! `Vec<Box<dyn Hook>>`; the same hook works in every genre.
//!
//! ## Callbacks
//! - `on_purchase(&PurchaseEvent)` fires after every successful purchase,
//!   with the roster already updated. It is fallible so I/O problems reach
//!   the caller instead of being dropped.
//! - `on_reset(&ResetEvent)` fires once per prestige reset, after
//!   experience was banked and before the roster is rebuilt.
//! - `on_finish()` fires once when the orchestrator stops, whatever the
//!   reason. Flush buffers here.
//!
//! ## Determinism
//! - Hooks get shared references only. A simulation with hooks attached
//!   makes exactly the same decisions as one without.
//!
//! ## Anti-patterns to avoid
//! - Don't recompute income in a hook; the event already carries it.
//! - Don't keep references into the roster past the callback; it is
//!   discarded wholesale on every reset.

use crate::error::Result;
use crate::systems::economy::CityLevel;
use crate::systems::generator::Generator;
use crate::systems::infrastructure::Infrastructure;
use crate::systems::purchase::Purchase;

/// A successful purchase, seen after the roster was updated.
#[derive(Clone, Copy, Debug)]
pub struct PurchaseEvent<'a> {
    /// Tick index within the current run (0-based).
    pub tick: u64,
    pub purchase: Purchase,
    /// Income credited at the start of this tick.
    pub income: f64,
    pub resource: f64,
    pub generators: &'a [Generator],
    pub infrastructure: &'a [Infrastructure],
}

/// A prestige reset, seen after experience was banked.
#[derive(Clone, Copy, Debug)]
pub struct ResetEvent {
    /// 1-based reset counter.
    pub reset: usize,
    /// Length of the run that just ended.
    pub ticks: u64,
    /// Resource produced during that run.
    pub all_gain: f64,
    /// Experience earned by the reset.
    pub gained: f64,
    /// Experience carried into the next run.
    pub experience: f64,
    pub locked_experience: f64,
    pub city_level: CityLevel,
}

/// Observer attached to a simulation.
pub trait Hook {
    /// (Optional) see every successful purchase.
    fn on_purchase(&mut self, _ev: &PurchaseEvent<'_>) -> Result<()> {
        Ok(())
    }
    /// (Optional) see every prestige reset.
    fn on_reset(&mut self, _ev: &ResetEvent) {}
    /// (Optional) the simulation stopped.
    fn on_finish(&mut self) -> Result<()> {
        Ok(())
    }
}

pub(crate) fn notify_purchase(hooks: &mut [Box<dyn Hook>], ev: &PurchaseEvent<'_>) -> Result<()> {
    for h in hooks.iter_mut() {
        h.on_purchase(ev)?;
    }
    Ok(())
}

pub(crate) fn notify_reset(hooks: &mut [Box<dyn Hook>], ev: &ResetEvent) {
    for h in hooks.iter_mut() {
        h.on_reset(ev);
    }
}

pub(crate) fn notify_finish(hooks: &mut [Box<dyn Hook>]) -> Result<()> {
    for h in hooks.iter_mut() {
        h.on_finish()?;
    }
    Ok(())
}
