//! Grid scorer: random search over 5x5 zonings.
//!
//! Every cell is commercial, residential or industrial. A cell's effect
//! starts at 1.1 and is multiplied per neighbour according to the zone
//! rules below; plus-neighbours (orthogonal) and x-neighbours (diagonal)
//! share the per-zone counters. A grid scores `1 + sum of effects` per zone.

use std::fmt;

use bevy_prng::WyRand;

use crate::mechanics::stoch::{seeded, uniform_below};

pub const SIDE: usize = 5;

/// Number of distinct grids: 3^25.
pub const LAYOUTS: u64 = 847_288_609_443;

const BASE_EFFECT: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    Commercial = 1,
    Residential = 2,
    Industrial = 3,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Commercial, Zone::Residential, Zone::Industrial];

    /// Position in score arrays.
    pub fn slot(self) -> usize {
        self as usize - 1
    }

    fn from_digit(d: u64) -> Self {
        match d {
            0 => Zone::Commercial,
            1 => Zone::Residential,
            _ => Zone::Industrial,
        }
    }
}

/// `cells[x][y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Zone; SIDE]; SIDE],
}

impl Grid {
    pub fn new(cells: [[Zone; SIDE]; SIDE]) -> Self {
        Self { cells }
    }

    pub fn filled(zone: Zone) -> Self {
        Self { cells: [[zone; SIDE]; SIDE] }
    }

    /// Decodes `index` (taken modulo 3^25) as base-3 digits, x outer and
    /// y inner, least significant digit first.
    pub fn decode(index: u64) -> Self {
        let mut rest = index % LAYOUTS;
        let mut cells = [[Zone::Commercial; SIDE]; SIDE];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Zone::from_digit(rest % 3);
                rest /= 3;
            }
        }
        Self { cells }
    }

    pub fn get(&self, x: usize, y: usize) -> Zone {
        self.cells[x][y]
    }

    pub fn set(&mut self, x: usize, y: usize, zone: Zone) {
        self.cells[x][y] = zone;
    }

    /// Orthogonal neighbours in order x-1, x+1, y-1, y+1.
    pub fn plus_neighbors(&self, x: usize, y: usize) -> Vec<Zone> {
        let mut out = Vec::with_capacity(4);
        if x != 0 {
            out.push(self.cells[x - 1][y]);
        }
        if x != SIDE - 1 {
            out.push(self.cells[x + 1][y]);
        }
        if y != 0 {
            out.push(self.cells[x][y - 1]);
        }
        if y != SIDE - 1 {
            out.push(self.cells[x][y + 1]);
        }
        out
    }

    /// Diagonal neighbours.
    pub fn x_neighbors(&self, x: usize, y: usize) -> Vec<Zone> {
        let last = SIDE - 1;
        let mut out = Vec::with_capacity(4);
        if x != 0 && y != 0 {
            out.push(self.cells[x - 1][y - 1]);
        }
        if x != last && y != last {
            out.push(self.cells[x + 1][y + 1]);
        }
        if x != last && y != 0 {
            out.push(self.cells[x + 1][y - 1]);
        }
        if x != 0 && y != last {
            out.push(self.cells[x - 1][y + 1]);
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "\t{}", *cell as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn commercial_effect(grid: &Grid, x: usize, y: usize) -> f64 {
    let mut effect = BASE_EFFECT;
    let (mut res, mut ind, mut com) = (0, 0, 0);
    for n in grid.plus_neighbors(x, y) {
        match n {
            Zone::Industrial => {
                ind += 1;
                effect *= if ind < 4 { 2.35 } else { 0.9 };
            }
            Zone::Residential => {
                res += 1;
                effect *= if res < 4 { 2.3 } else { 3.75 };
            }
            Zone::Commercial => {
                com += 1;
                effect *= if com < 3 { 2.52 } else { 0.83 };
            }
        }
    }
    for n in grid.x_neighbors(x, y) {
        match n {
            Zone::Residential => {
                res += 1;
                effect *= if res < 3 { 1.8 } else { 1.2 };
            }
            Zone::Commercial => {
                com += 1;
                if com < 3 {
                    effect *= 2.6;
                }
            }
            Zone::Industrial => {}
        }
    }
    effect
}

pub fn residential_effect(grid: &Grid, x: usize, y: usize) -> f64 {
    let mut effect = BASE_EFFECT;
    let (mut res, mut com) = (0, 0);
    for n in grid.plus_neighbors(x, y) {
        match n {
            Zone::Industrial => effect /= 2.0,
            Zone::Residential => {
                res += 1;
                effect *= if res < 4 { 2.4 } else { 1.6 };
            }
            Zone::Commercial => {
                com += 1;
                effect *= if com < 3 { 3.2 } else { 0.8 };
            }
        }
    }
    for n in grid.x_neighbors(x, y) {
        match n {
            Zone::Residential => {
                res += 1;
                effect *= if res < 3 { 2.2 } else { 1.4 };
            }
            Zone::Commercial => {
                com += 1;
                effect *= if com < 3 { 2.3 } else { 0.9 };
            }
            Zone::Industrial => {}
        }
    }
    effect
}

/// Industrial cells treat all eight neighbours alike.
pub fn industrial_effect(grid: &Grid, x: usize, y: usize) -> f64 {
    let mut effect = BASE_EFFECT;
    let (mut res, mut com) = (0, 0);
    let mut around = grid.plus_neighbors(x, y);
    around.extend(grid.x_neighbors(x, y));
    for n in around {
        match n {
            Zone::Industrial => effect *= 1.3,
            Zone::Residential => {
                res += 1;
                effect *= if res < 3 { 3.3 } else { 1.5 };
            }
            Zone::Commercial => {
                com += 1;
                effect *= if com < 3 { 2.6 } else { 0.7 };
            }
        }
    }
    effect
}

/// Scores indexed by [`Zone::slot`], each starting at 1.
pub fn evaluate(grid: &Grid) -> [f64; 3] {
    let mut values = [1.0; 3];
    for x in 0..SIDE {
        for y in 0..SIDE {
            let zone = grid.get(x, y);
            values[zone.slot()] += match zone {
                Zone::Commercial => commercial_effect(grid, x, y),
                Zone::Residential => residential_effect(grid, x, y),
                Zone::Industrial => industrial_effect(grid, x, y),
            };
        }
    }
    values
}

/// Best grid found per zone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOutcome {
    /// Indexed by [`Zone::slot`]; `None` until a sample was scored.
    pub best: [Option<(f64, Grid)>; 3],
    pub samples: u64,
}

impl SearchOutcome {
    pub fn best_for(&self, zone: Zone) -> Option<&(f64, Grid)> {
        self.best[zone.slot()].as_ref()
    }

    /// Keeps `grid` for every zone whose score strictly improves.
    pub fn offer(&mut self, grid: &Grid) {
        let values = evaluate(grid);
        for (slot, value) in values.into_iter().enumerate() {
            if self.best[slot].as_ref().is_none_or(|(b, _)| value > *b) {
                self.best[slot] = Some((value, *grid));
            }
        }
        self.samples += 1;
    }
}

/// Scores `samples` uniformly drawn grids.
pub fn random_search(samples: u64, seed: u64) -> SearchOutcome {
    let mut rng = seeded(seed);
    random_search_with(&mut rng, samples)
}

pub fn random_search_with(rng: &mut WyRand, samples: u64) -> SearchOutcome {
    let mut out = SearchOutcome::default();
    for i in 0..samples {
        out.offer(&Grid::decode(uniform_below(rng, LAYOUTS)));
        if (i + 1) % 1_000_000 == 0 {
            log::debug!("grid search: {} samples", i + 1);
        }
    }
    out
}
