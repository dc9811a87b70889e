//! The effect's whole mutable state and its per-frame update

use crate::config::{glow_color, SparklerConfig, FADE_ALPHA, GLOW_ALPHA_PER_PARTICLE};
use crate::particle::Particle;
use crate::spawn::SpawnScheduler;
use crate::stick::Stick;
use rand::Rng;
use sparkler_core::{Canvas, Color, SurfaceSize, Transform};
use sparkler_runtime::{FrameThrottle, PointerTracker, SurfaceEvent};
use tracing::info;

/// Where the effect is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparklerPhase {
    /// Nothing live and nothing scheduled
    Idle,
    /// Scheduler armed; sparks being created and culled
    Spawning,
    /// Stick burnt down; remaining sparks fading out
    Settling,
}

/// Pointer, stick, live sparks, and the two clocks that drive them.
///
/// All mutation goes through `&mut self`, so a reset is never observed
/// half-done by a frame.
pub struct Sparkler {
    config: SparklerConfig,
    pointer: PointerTracker,
    stick: Stick,
    particles: Vec<Particle>,
    scheduler: SpawnScheduler,
    throttle: FrameThrottle,
    backdrop_pending: bool,
}

impl Sparkler {
    /// Create an idle effect; call `reset` to start it
    pub fn new(config: SparklerConfig, surface: SurfaceSize) -> Self {
        let pointer = PointerTracker::new(surface);
        let stick = Stick::new(config.tilt, surface, pointer.position());
        Self {
            config,
            pointer,
            stick,
            particles: Vec::new(),
            scheduler: SpawnScheduler::new(config.spawn_period, config.particles_per_batch),
            throttle: FrameThrottle::with_fps(config.frame_rate),
            backdrop_pending: true,
        }
    }

    /// Full reinitialize: new surface, pointer at its anchor, fresh stick,
    /// no sparks, scheduler re-armed
    pub fn reset(&mut self, surface: SurfaceSize) {
        self.scheduler.cancel();
        self.pointer.resize(surface);
        self.stick = Stick::new(self.config.tilt, surface, self.pointer.position());
        self.particles.clear();
        self.scheduler.arm();
        self.backdrop_pending = true;

        info!(
            width = surface.width,
            height = surface.height,
            "[sparkler] reset"
        );
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: &SurfaceEvent) {
        match *event {
            SurfaceEvent::PointerMoved { x, y } => self.pointer.process_pointer_move(x, y),
            SurfaceEvent::PointerLeft => self.pointer.process_pointer_leave(),
            SurfaceEvent::Resized(surface) => self.reset(surface),
        }
    }

    /// Advance simulated time by `dt` seconds.
    ///
    /// Spawning runs on its own period; a frame is drawn to `canvas` only
    /// when the frame throttle says one is due. Returns true if it was.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        rng: &mut R,
        canvas: &mut dyn Canvas,
    ) -> bool {
        self.scheduler
            .advance(dt, &self.stick, rng, &mut self.particles);

        if !self.throttle.advance(dt) {
            return false;
        }
        self.render_frame(canvas);
        true
    }

    /// Emit one batch at the current tip, outside the scheduler's period
    pub fn spawn_batch<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.scheduler
            .spawn_batch(self.stick.tip(), self.config.tilt, rng, &mut self.particles);
    }

    /// Run one frame: fade, glow, stick, then every spark (dropping expired ones)
    pub fn render_frame(&mut self, canvas: &mut dyn Canvas) {
        let bounds = canvas.size().bounds();

        if self.backdrop_pending {
            canvas.fill_rect(bounds, Color::BLACK, Transform::IDENTITY);
            self.backdrop_pending = false;
        }

        canvas.fill_rect(bounds, Color::BLACK.with_alpha(FADE_ALPHA), Transform::IDENTITY);
        canvas.fill_rect(
            bounds,
            glow_color().with_alpha(self.particles.len() as f32 * GLOW_ALPHA_PER_PARTICLE),
            Transform::IDENTITY,
        );

        let pointer = self.pointer.position();
        self.stick.advance(pointer, canvas);

        self.particles.retain_mut(|particle| {
            particle.step(pointer, canvas);
            !particle.is_expired()
        });
    }

    pub fn phase(&self) -> SparklerPhase {
        if self.scheduler.is_armed() {
            SparklerPhase::Spawning
        } else if !self.particles.is_empty() {
            SparklerPhase::Settling
        } else {
            SparklerPhase::Idle
        }
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn stick(&self) -> &Stick {
        &self.stick
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Frames drawn since creation
    pub fn frames(&self) -> u64 {
        self.throttle.frames()
    }
}
