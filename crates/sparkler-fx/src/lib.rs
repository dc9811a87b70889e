//! Sparkler FX - handheld sparkler effect
//!
//! A burning stick held at the pointer, spraying warm sparks from its tip:
//! - `Stick` burns down over ~250 frames, tracking the pointer
//! - `SpawnScheduler` emits batches of sparks at the tip on a fixed period
//! - `Particle` sparks slow down by friction and fade out
//! - `Sparkler` owns all of it and draws a frame to any `Canvas`

pub mod config;
pub mod particle;
pub mod random;
pub mod spawn;
pub mod sparkler;
pub mod stick;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sparkler_core::{Canvas, Result, SparklerError, SurfaceSize};
use sparkler_runtime::{RuntimeSystem, SurfaceEvent};
use tracing::info;

pub use config::SparklerConfig;
pub use particle::Particle;
pub use spawn::SpawnScheduler;
pub use sparkler::{Sparkler, SparklerPhase};
pub use stick::Stick;

/// The sparkler effect as a system the host loop can drive
pub struct SparklerSystem {
    config: SparklerConfig,
    sparkler: Option<Sparkler>,
    rng: StdRng,
}

impl SparklerSystem {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic sparks for captures and tests
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            config: SparklerConfig::default(),
            sparkler: None,
            rng,
        }
    }

    /// The effect state, once initialized
    pub fn sparkler(&self) -> Option<&Sparkler> {
        self.sparkler.as_ref()
    }

    fn sparkler_mut(&mut self) -> Result<&mut Sparkler> {
        self.sparkler.as_mut().ok_or_else(not_initialized)
    }
}

fn not_initialized() -> SparklerError {
    SparklerError::RuntimeError("sparkler system used before initialize".into())
}

impl Default for SparklerSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeSystem for SparklerSystem {
    fn initialize(&mut self, surface: SurfaceSize) -> Result<()> {
        let sparkler = self
            .sparkler
            .get_or_insert_with(|| Sparkler::new(self.config, surface));
        sparkler.reset(surface);
        info!(
            batch = self.config.particles_per_batch,
            fps = self.config.frame_rate,
            "[sparkler] initialized"
        );
        Ok(())
    }

    fn handle_event(&mut self, event: &SurfaceEvent) -> Result<()> {
        self.sparkler_mut()?.handle_event(event);
        Ok(())
    }

    fn update(&mut self, dt: f64, canvas: &mut dyn Canvas) -> Result<bool> {
        let Self { sparkler, rng, .. } = self;
        let sparkler = sparkler.as_mut().ok_or_else(not_initialized)?;
        Ok(sparkler.advance(dt, rng, canvas))
    }

    fn shutdown(&mut self) -> Result<()> {
        if let Some(sparkler) = &self.sparkler {
            info!(frames = sparkler.frames(), "[sparkler] shutdown");
        }
        self.sparkler = None;
        Ok(())
    }

    fn name(&self) -> &str {
        "sparkler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkler_core::DrawList;

    const SURFACE: SurfaceSize = SurfaceSize::new(800.0, 600.0);

    #[test]
    fn update_before_initialize_is_an_error() {
        let mut system = SparklerSystem::with_seed(1);
        let mut canvas = DrawList::new(SURFACE);
        let update_err = system.update(0.1, &mut canvas).unwrap_err();
        let event_err = system
            .handle_event(&SurfaceEvent::PointerLeft)
            .unwrap_err();
        assert!(matches!(update_err, SparklerError::RuntimeError(_)));
        assert_eq!(update_err.to_string(), event_err.to_string());
    }

    #[test]
    fn update_after_shutdown_is_an_error() {
        let mut system = SparklerSystem::with_seed(1);
        let mut canvas = DrawList::new(SURFACE);
        system.initialize(SURFACE).unwrap();
        assert!(system.update(0.1, &mut canvas).is_ok());
        system.shutdown().unwrap();
        assert!(matches!(
            system.update(0.1, &mut canvas),
            Err(SparklerError::RuntimeError(_))
        ));
    }

    #[test]
    fn initialize_starts_spawning() {
        let mut system = SparklerSystem::with_seed(1);
        system.initialize(SURFACE).unwrap();
        assert_eq!(system.name(), "sparkler");
        assert_eq!(
            system.sparkler().map(|s| s.phase()),
            Some(SparklerPhase::Spawning)
        );
    }

    #[test]
    fn update_draws_at_thirty_fps() {
        let mut system = SparklerSystem::with_seed(9);
        system.initialize(SURFACE).unwrap();
        let mut canvas = DrawList::new(SURFACE);

        let mut drawn = 0;
        // One second in 10ms host callbacks
        for _ in 0..100 {
            if system.update(0.01, &mut canvas).unwrap() {
                drawn += 1;
            }
        }
        assert!((29..=30).contains(&drawn));
        assert!(!system.sparkler().unwrap().particles().is_empty());
    }

    #[test]
    fn same_seed_same_sparks() {
        let run = |seed| {
            let mut system = SparklerSystem::with_seed(seed);
            system.initialize(SURFACE).unwrap();
            let mut canvas = DrawList::new(SURFACE);
            for _ in 0..10 {
                system.update(1.0 / 30.0, &mut canvas).unwrap();
            }
            system
                .sparkler()
                .unwrap()
                .particles()
                .iter()
                .map(|p| (p.position, p.opacity))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn shutdown_drops_state() {
        let mut system = SparklerSystem::with_seed(1);
        system.initialize(SURFACE).unwrap();
        system.shutdown().unwrap();
        assert!(system.sparkler().is_none());
    }
}
