//! Compiled-in effect constants

use sparkler_core::Color;

/// Sparks created per scheduler trigger
pub const PARTICLE_COUNT: usize = 30;
/// Tilt applied to every draw, in degrees
pub const TILT_DEGREES: f32 = 25.0;
/// Target frame rate of the render loop
pub const FRAME_RATE: f64 = 30.0;
/// Time between spawn batches, in seconds
pub const SPAWN_PERIOD: f64 = 0.030;

/// Per-frame velocity multiplier
pub const FRICTION: f32 = 0.98;
/// Per-frame opacity loss. Opacity is kept in f64 so a spark expires on the
/// same frame as `initial - n * 0.06 <= 0` computed in double precision.
pub const OPACITY_DECAY: f64 = 0.06;
/// Per-frame stick progress
pub const PROGRESS_DELTA: f32 = 0.004;

pub const STICK_THICKNESS: f32 = 5.0;
/// Handle length as a fraction of surface height
pub const HANDLE_FRACTION: f32 = 0.3;
/// Burnable stick length as a fraction of surface height
pub const STICK_FRACTION: f32 = 0.6;

/// Launch distance range (per-frame speed), inclusive
pub const SPARK_DISTANCE: (i32, i32) = (10, 20);
/// Direction angle range, inclusive
pub const SPARK_ANGLE: (i32, i32) = (0, 360);
/// Square side range, inclusive
pub const SPARK_SIZE: (i32, i32) = (1, 3);
/// Hue range in degrees, inclusive
pub const SPARK_HUE: (i32, i32) = (1, 29);
pub const SPARK_SATURATION: f32 = 1.0;
pub const SPARK_LIGHTNESS: f32 = 0.9;
/// Initial opacity range and rounding
pub const SPARK_OPACITY: (f64, f64) = (0.1, 1.0);
pub const SPARK_OPACITY_DECIMALS: u32 = 2;

/// Alpha of the black trail fade painted each frame
pub const FADE_ALPHA: f32 = 0.5;
/// Glow overlay alpha contributed by each live spark
pub const GLOW_ALPHA_PER_PARTICLE: f32 = 0.0002;

pub fn handle_color() -> Color {
    Color::from_hex(0xdddddd)
}

pub fn stick_color() -> Color {
    Color::from_hex(0x555555)
}

pub fn burnt_color() -> Color {
    Color::from_hex(0x222222)
}

pub fn glow_color() -> Color {
    Color::from_rgba8(255, 223, 100, 0.0)
}

/// Scene-level settings for a `Sparkler`
#[derive(Debug, Clone, Copy)]
pub struct SparklerConfig {
    /// Tilt in radians
    pub tilt: f32,
    pub particles_per_batch: usize,
    pub spawn_period: f64,
    pub frame_rate: f64,
}

impl Default for SparklerConfig {
    fn default() -> Self {
        Self {
            tilt: TILT_DEGREES.to_radians(),
            particles_per_batch: PARTICLE_COUNT,
            spawn_period: SPAWN_PERIOD,
            frame_rate: FRAME_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_constants() {
        let config = SparklerConfig::default();
        assert_eq!(config.particles_per_batch, 30);
        assert!((config.tilt - std::f32::consts::PI / 180.0 * 25.0).abs() < 1e-6);
        assert!((config.spawn_period - 0.03).abs() < 1e-12);
        assert_eq!(config.frame_rate, 30.0);
    }

    #[test]
    fn test_stick_palette_darkens() {
        assert!(handle_color().r > stick_color().r);
        assert!(stick_color().r > burnt_color().r);
    }
}
