//! Random helpers used when spawning sparks

use rand::Rng;

/// Uniform integer in `[min, max]`, both ends inclusive
pub fn random_int_between<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Uniform float in `[min, max)`, rounded to `decimals` places
///
/// Rounding can land exactly on `max`.
pub fn random_float_between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, decimals: u32) -> f64 {
    let value = min + rng.gen::<f64>() * (max - min);
    round_to(value, decimals)
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
