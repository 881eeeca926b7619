//! Semicolon-separated purchase log.
//!
//! Header `ticks;farm;inn;store;bank;data;factory;energy;casino;income`,
//! then one row per generator purchase: the tick, `log10(gain)` of every
//! generator (empty when the generator produces nothing) and the income of
//! that tick. Infrastructure purchases are not logged.
//!
//! The log was designed for the sprint. A campaign runs without it unless
//! one is attached; attached, it also gets the rows of every prestige run,
//! all in one file with run-local tick numbers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::systems::purchase::Purchase;
use crate::systems::sdk::{Hook, PurchaseEvent};

/// Column names of the reference roster, lowest tier first.
pub const GENERATOR_NAMES: [&str; 8] =
    ["farm", "inn", "store", "bank", "data", "factory", "energy", "casino"];

pub struct CsvLog<W: Write> {
    out: W,
    rows: u64,
}

impl CsvLog<BufWriter<File>> {
    /// Creates (truncates) `path` and writes the header.
    pub fn create(path: impl AsRef<Path>, generators: usize) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Self::new(BufWriter::new(file), generators)
    }
}

impl<W: Write> CsvLog<W> {
    /// Writes the header for a roster of `generators` columns. Columns past
    /// the reference names are called `gen8`, `gen9`, ...
    pub fn new(mut out: W, generators: usize) -> Result<Self> {
        let mut header = String::from("ticks");
        for i in 0..generators {
            header.push(';');
            match GENERATOR_NAMES.get(i) {
                Some(name) => header.push_str(name),
                None => header.push_str(&format!("gen{i}")),
            }
        }
        header.push_str(";income");
        writeln!(out, "{header}")?;
        Ok(Self { out, rows: 0 })
    }

    /// Data rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn into_inner(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Hook for CsvLog<W> {
    fn on_purchase(&mut self, ev: &PurchaseEvent<'_>) -> Result<()> {
        if !matches!(ev.purchase, Purchase::Generator(_)) {
            return Ok(());
        }
        let mut row = ev.tick.to_string();
        for g in ev.generators {
            row.push(';');
            let gain = g.gain();
            if gain > 0.0 {
                row.push_str(&gain.log10().to_string());
            }
        }
        row.push(';');
        row.push_str(&ev.income.to_string());
        writeln!(self.out, "{row}")?;
        self.rows += 1;
        Ok(())
    }

    fn on_finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
