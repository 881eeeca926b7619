//! Experience formulas: the diminishing-returns curve, the income
//! multiplier granted by banked experience, and the experience yield of a
//! finished run.

use crate::mechanics::control::{blend, ramp};

/// Weight of the linear regime of [`experience_multiplier`].
pub const EXPERIENCE_WEIGHT: f64 = 0.04;

/// Effective experience at which the multiplier has fully switched to the
/// diminishing regime.
pub const EXPERIENCE_KNEE: f64 = 1_000.0;

/// Lower edge of the experience-gain ramp into the diminishing regime.
pub const GAIN_RAMP_LO: f64 = 2e12;

/// Upper edge of both experience-gain ramps.
pub const GAIN_RAMP_HI: f64 = 2e20;

/// Divisor of the square-root regime of [`experience_gain`] (2^33).
pub const GAIN_SQRT_SCALE: f64 = 8_589_934_592.0;

/// Smallest valid input of [`diminishing`]: `e^e`, where `ln(ln z) = 1`.
/// Below it the curve is no longer monotone and blows up near `e`.
pub const DIMINISHING_FLOOR: f64 = 15.154_262_241_479_262;

/// `exp(ln z / ln ln z)`: grows slower than any power of `z`.
///
/// Only defined for `z > DIMINISHING_FLOOR`; callers guard. Debug builds
/// assert, release builds clamp to the floor.
#[inline]
pub fn diminishing(z: f64) -> f64 {
    debug_assert!(
        z >= DIMINISHING_FLOOR,
        "diminishing() called outside its domain: {z}"
    );
    let z = if z.is_nan() { DIMINISHING_FLOOR } else { z.max(DIMINISHING_FLOOR) };
    let ln = z.ln();
    (ln / ln.ln()).exp()
}

/// Income multiplier (added to 1 by the tick engine) granted by
/// `experience` minus the experience reserved by research.
///
/// Linear (`0.04 * eff`) for small values, blending into [`diminishing`]
/// until `eff = 1000`, purely diminishing afterwards. Zero when the
/// reserve eats all the experience.
pub fn experience_multiplier(experience: f64, locked_experience: f64) -> f64 {
    let eff = experience - locked_experience;
    if eff <= 0.0 || eff.is_nan() {
        return 0.0;
    }
    let sig = (eff / EXPERIENCE_KNEE).min(1.0);
    let linear = EXPERIENCE_WEIGHT * eff;
    if eff > DIMINISHING_FLOOR {
        blend(linear, diminishing(eff), sig)
    } else {
        // No diminishing term below its domain: the curve steps up by about
        // `sig * e^e` (~0.23) when `eff` crosses the floor.
        (1.0 - sig) * linear
    }
}

/// Experience earned by resetting after `total_gained` resource.
///
/// Square-root regime fading out towards `2e20`, diminishing regime fading
/// in from `2e12` to `2e20`.
pub fn experience_gain(total_gained: f64) -> f64 {
    if total_gained <= 0.0 || total_gained.is_nan() {
        return 0.0;
    }
    let sig1 = ramp(total_gained, 0.0, GAIN_RAMP_HI);
    let sig2 = ramp(total_gained, GAIN_RAMP_LO, GAIN_RAMP_HI);
    let mut gain = (1.0 - sig1) * (total_gained / GAIN_SQRT_SCALE).sqrt();
    if sig2 > 0.0 {
        gain += sig2 * diminishing(total_gained);
    }
    gain
}
