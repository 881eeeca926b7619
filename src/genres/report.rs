// src/genres/report.rs

//! Outcome bookkeeping shared by the orchestrators: how a simulation ended
//! and the console summary printed after it.

use std::fmt;

/// Ticks per real-time second assumed by the hour conversions.
pub const TICKS_PER_SECOND: u64 = 10;

/// Whole hours of play for `ticks`.
pub fn hours(ticks: u64) -> u64 {
    ticks / TICKS_PER_SECOND / 60 / 60
}

/// How a simulation ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Termination {
    /// The goal was reached (completion level for a sprint, target
    /// experience for a campaign).
    Completed,
    /// The balance went negative (or non-finite) at `tick` of the run in
    /// progress. Whatever history was collected is kept.
    NegativeResource { tick: u64, resource: f64 },
    /// The tick budget ran out after `ticks` ticks.
    TickBudget { ticks: u64 },
}

impl Termination {
    pub fn is_completed(self) -> bool {
        matches!(self, Termination::Completed)
    }
}

/// Timing summary of a tick list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub ticks: u64,
    /// Longest gap between entries.
    pub longest_stretch: u64,
    /// Index of the entry ending the longest gap (first one on ties).
    pub longest_at: usize,
    pub entries: usize,
}

impl Summary {
    /// From purchase ticks (ascending). Total is last tick + 1; the first
    /// gap is measured from tick 0.
    pub fn from_purchases(purchases: &[u64]) -> Option<Self> {
        let last = *purchases.last()?;
        let mut prev = 0;
        let gaps: Vec<u64> = purchases
            .iter()
            .map(|&t| {
                let gap = t.saturating_sub(prev);
                prev = t;
                gap
            })
            .collect();
        let (longest_at, longest_stretch) = first_max(&gaps)?;
        Some(Self { ticks: last + 1, longest_stretch, longest_at, entries: purchases.len() })
    }

    /// From run lengths between resets. Total is their sum.
    pub fn from_runs(runs: &[u64]) -> Option<Self> {
        let (longest_at, longest_stretch) = first_max(runs)?;
        Some(Self { ticks: runs.iter().sum(), longest_stretch, longest_at, entries: runs.len() })
    }
}

fn first_max(values: &[u64]) -> Option<(usize, u64)> {
    let mut best: Option<(usize, u64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if best.is_none_or(|(_, b)| v > b) {
            best = Some((i, v));
        }
    }
    best
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Used {} ticks.", self.ticks)?;
        writeln!(f, "Thats {} hours.", hours(self.ticks))?;
        writeln!(f)?;
        writeln!(f, "Longest stretch {} ticks.", self.longest_stretch)?;
        writeln!(f, "Thats {} hours.", hours(self.longest_stretch))?;
        write!(f, "At pos {} of {}.", self.longest_at, self.entries)
    }
}
