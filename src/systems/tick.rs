//! Tick engine: aggregate income of one tick.

use crate::systems::generator::Generator;
use crate::systems::infrastructure::Infrastructure;

/// Flat income every tick, so a run never stalls completely.
pub const SELF_INCOME: f64 = 0.1;

/// `(0.1 + sum_i gain_i * prod_k affect_k(i)) * (1 + experience_multiplier)`.
///
/// Recomputed from scratch every tick; levels change between ticks.
pub fn tick_income(
    generators: &[Generator],
    infrastructure: &[Infrastructure],
    experience_multiplier: f64,
) -> f64 {
    let mut income = SELF_INCOME;
    for (i, g) in generators.iter().enumerate() {
        let boost: f64 = infrastructure.iter().map(|inf| inf.affect_multiplier(i)).product();
        income += g.gain() * boost;
    }
    income * (1.0 + experience_multiplier)
}
