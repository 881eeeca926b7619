/// Cost and multiplier curves shared by generators and infrastructure.

/// Exponential price: `base * factor^level`.
#[inline]
pub fn exp_cost(base: f64, factor: f64, level: u32) -> f64 {
    base * factor.powi(level as i32)
}

/// Compounding multiplier: `base_mult^level`.
#[inline]
pub fn compound(base_mult: f64, level: u32) -> f64 {
    base_mult.powi(level as i32)
}

/// Level-linear production: `level * base_gain`.
#[inline]
pub fn linear_gain(level: u32, base_gain: f64) -> f64 {
    f64::from(level) * base_gain
}
