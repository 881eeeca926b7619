//! Purchase policy: at most one purchase per tick. The cheapest
//! infrastructure wins if affordable, otherwise the most efficient
//! generator if affordable. Ties go to the lower index.

use crate::systems::generator::Generator;
use crate::systems::infrastructure::Infrastructure;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Purchase {
    Infrastructure(usize),
    Generator(usize),
    Nothing,
}

impl Purchase {
    pub fn happened(self) -> bool {
        !matches!(self, Purchase::Nothing)
    }
}

/// Index of the cheapest infrastructure, first one on ties.
pub fn cheapest_infrastructure(infrastructure: &[Infrastructure]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, inf) in infrastructure.iter().enumerate() {
        let c = inf.cost();
        if best.is_none_or(|(_, b)| c < b) {
            best = Some((i, c));
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the most efficient generator, first one on ties.
pub fn most_efficient_generator(generators: &[Generator]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, g) in generators.iter().enumerate() {
        let e = g.efficiency();
        if best.is_none_or(|(_, b)| e > b) {
            best = Some((i, e));
        }
    }
    best.map(|(i, _)| i)
}

/// Runs the policy once against `resource`. Never spends more than the
/// balance.
pub fn purchase(
    generators: &mut [Generator],
    infrastructure: &mut [Infrastructure],
    resource: &mut f64,
) -> Purchase {
    if let Some(i) = cheapest_infrastructure(infrastructure) {
        let cost = infrastructure[i].cost();
        if cost <= *resource {
            *resource -= cost;
            infrastructure[i].buy();
            return Purchase::Infrastructure(i);
        }
    }

    if let Some(i) = most_efficient_generator(generators) {
        let cost = generators[i].cost();
        if cost <= *resource {
            *resource -= cost;
            generators[i].buy();
            return Purchase::Generator(i);
        }
    }

    Purchase::Nothing
}
