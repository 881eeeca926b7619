/// Control mechanics: ramps and blends between two regimes.

/// Linear ramp of `x` over `[lo, hi]`, clamped to `[0, 1]`.
#[inline]
pub fn ramp(x: f64, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return if x >= hi { 1.0 } else { 0.0 };
    }
    ((x - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Convex blend: `(1 - sig) * a + sig * b`.
#[inline]
pub fn blend(a: f64, b: f64, sig: f64) -> f64 {
    let sig = sig.clamp(0.0, 1.0);
    (1.0 - sig) * a + sig * b
}
