//! Periodic spark emission at the stick tip

use crate::config::{
    SPARK_ANGLE, SPARK_DISTANCE, SPARK_HUE, SPARK_LIGHTNESS, SPARK_OPACITY,
    SPARK_OPACITY_DECIMALS, SPARK_SATURATION, SPARK_SIZE,
};
use crate::particle::Particle;
use crate::random::{random_float_between, random_int_between};
use crate::stick::Stick;
use glam::Vec2;
use rand::Rng;
use sparkler_core::Color;
use sparkler_runtime::IntervalTimer;
use tracing::{debug, info};

/// Emits a batch of sparks every period until the stick has burnt down
pub struct SpawnScheduler {
    timer: IntervalTimer,
    batch_size: usize,
    batches: u64,
}

impl SpawnScheduler {
    /// Create a disarmed scheduler
    pub fn new(period: f64, batch_size: usize) -> Self {
        Self {
            timer: IntervalTimer::new(period),
            batch_size,
            batches: 0,
        }
    }

    /// Start emitting from a fresh period
    pub fn arm(&mut self) {
        self.timer.arm();
        self.batches = 0;
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Batches emitted since the last `arm`
    pub fn batches(&self) -> u64 {
        self.batches
    }

    /// Feed `dt` seconds; emits one batch per elapsed period.
    ///
    /// The trigger that finds the stick fully burnt still emits its batch,
    /// then disarms. Returns the number of batches emitted.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        stick: &Stick,
        rng: &mut R,
        particles: &mut Vec<Particle>,
    ) -> u32 {
        let fires = self.timer.advance(dt);
        let mut emitted = 0;

        for _ in 0..fires {
            let finished = stick.is_fully_extended();
            if finished {
                self.timer.cancel();
            }

            self.spawn_batch(stick.tip(), stick.tilt, rng, particles);
            emitted += 1;

            if finished {
                info!(
                    batches = self.batches,
                    "[sparkler] stick burnt down, spawning stopped"
                );
                break;
            }
        }

        emitted
    }

    /// Append one batch of sparks at `origin`
    pub fn spawn_batch<R: Rng + ?Sized>(
        &mut self,
        origin: Vec2,
        tilt: f32,
        rng: &mut R,
        particles: &mut Vec<Particle>,
    ) {
        particles.reserve(self.batch_size);
        for _ in 0..self.batch_size {
            particles.push(spawn_particle(rng, origin, tilt));
        }
        self.batches += 1;
        debug!(
            batch = self.batches,
            live = particles.len(),
            "[sparkler] spawned batch"
        );
    }
}

/// Roll one spark at `origin`.
///
/// The direction angle is an integer in [0, 360] handed to sin/cos as-is
/// (never converted to radians), which gives the spray its familiar spread.
pub fn spawn_particle<R: Rng + ?Sized>(rng: &mut R, origin: Vec2, tilt: f32) -> Particle {
    let distance = random_int_between(rng, SPARK_DISTANCE.0, SPARK_DISTANCE.1) as f32;
    let theta = random_int_between(rng, SPARK_ANGLE.0, SPARK_ANGLE.1) as f32;
    let opacity = random_float_between(
        rng,
        SPARK_OPACITY.0,
        SPARK_OPACITY.1,
        SPARK_OPACITY_DECIMALS,
    );
    let velocity = Vec2::new(theta.sin() * distance, theta.cos() * distance);
    let size = random_int_between(rng, SPARK_SIZE.0, SPARK_SIZE.1) as f32;
    let hue = random_int_between(rng, SPARK_HUE.0, SPARK_HUE.1) as f32;
    let color = Color::from_hsl(hue, SPARK_SATURATION, SPARK_LIGHTNESS);

    Particle::new(origin, velocity, size, color, distance, opacity, tilt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sparkler_core::{DrawList, SurfaceSize};

    const SURFACE: SurfaceSize = SurfaceSize::new(800.0, 600.0);

    fn fresh_stick() -> Stick {
        Stick::new(25f32.to_radians(), SURFACE, Vec2::new(240.0, 600.0))
    }

    fn burnt_stick() -> Stick {
        let mut stick = fresh_stick();
        let mut canvas = DrawList::new(SURFACE);
        while !stick.is_fully_extended() {
            stick.advance(Vec2::new(240.0, 600.0), &mut canvas);
        }
        stick
    }

    #[test]
    fn spawned_particle_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let origin = Vec2::new(50.0, 60.0);
        for _ in 0..500 {
            let p = spawn_particle(&mut rng, origin, 0.4);
            assert_eq!(p.position, origin);
            assert_eq!(p.rotation, 0.4);
            assert!((0.1..=1.0).contains(&p.opacity));
            assert!([1.0, 2.0, 3.0].contains(&p.size));
            assert!((10.0..=20.0).contains(&p.distance));
            assert_eq!(p.distance.fract(), 0.0);
            // sin^2 + cos^2 = 1, so speed is the launch distance
            assert!((p.speed() - p.distance).abs() < 1e-3);
            // Warm hue at 90% lightness: red channel saturates
            assert!((p.color.r - 1.0).abs() < 1e-4);
            assert!(p.color.g >= p.color.b);
        }
    }

    #[test]
    fn direction_angle_is_used_unconverted() {
        let mut rng = StdRng::seed_from_u64(11);
        let origin = Vec2::new(300.0, 120.0);

        let mut differs_from_degrees = 0;
        for _ in 0..200 {
            // Replay the first two rolls: distance, then angle
            let mut replay = rng.clone();
            let distance = random_int_between(&mut replay, 10, 20) as f32;
            let theta = random_int_between(&mut replay, 0, 360) as f32;

            let p = spawn_particle(&mut rng, origin, 0.0);
            assert_eq!(p.distance, distance);
            assert_eq!(
                p.velocity,
                Vec2::new(theta.sin() * distance, theta.cos() * distance)
            );

            let as_degrees = Vec2::new(
                theta.to_radians().sin() * distance,
                theta.to_radians().cos() * distance,
            );
            if (p.velocity - as_degrees).length() > 1.0 {
                differs_from_degrees += 1;
            }
        }
        assert!(differs_from_degrees > 100);
    }

    #[test]
    fn disarmed_scheduler_emits_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut scheduler = SpawnScheduler::new(0.03, 30);
        let mut particles = Vec::new();
        assert_eq!(scheduler.advance(1.0, &fresh_stick(), &mut rng, &mut particles), 0);
        assert!(particles.is_empty());
    }

    #[test]
    fn one_batch_per_period() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut scheduler = SpawnScheduler::new(0.03, 30);
        scheduler.arm();
        let mut particles = Vec::new();
        let stick = fresh_stick();

        assert_eq!(scheduler.advance(0.02, &stick, &mut rng, &mut particles), 0);
        assert_eq!(scheduler.advance(0.02, &stick, &mut rng, &mut particles), 1);
        assert_eq!(particles.len(), 30);
        assert!(particles.iter().all(|p| p.position == stick.tip()));

        assert_eq!(scheduler.advance(0.065, &stick, &mut rng, &mut particles), 2);
        assert_eq!(particles.len(), 90);
        assert_eq!(scheduler.batches(), 3);
        assert!(scheduler.is_armed());
    }

    #[test]
    fn burnt_stick_gets_final_batch_then_disarms() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut scheduler = SpawnScheduler::new(0.03, 30);
        scheduler.arm();
        let mut particles = Vec::new();
        let stick = burnt_stick();

        // Several periods elapse but only the first trigger runs
        assert_eq!(scheduler.advance(0.1, &stick, &mut rng, &mut particles), 1);
        assert_eq!(particles.len(), 30);
        assert!(!scheduler.is_armed());

        assert_eq!(scheduler.advance(1.0, &stick, &mut rng, &mut particles), 0);
        assert_eq!(particles.len(), 30);
    }

    #[test]
    fn rearm_resumes_emission() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut scheduler = SpawnScheduler::new(0.03, 30);
        scheduler.arm();
        let mut particles = Vec::new();
        scheduler.advance(0.05, &burnt_stick(), &mut rng, &mut particles);
        assert!(!scheduler.is_armed());

        scheduler.arm();
        assert_eq!(scheduler.batches(), 0);
        assert_eq!(scheduler.advance(0.03, &fresh_stick(), &mut rng, &mut particles), 1);
        assert!(scheduler.is_armed());
    }
}
