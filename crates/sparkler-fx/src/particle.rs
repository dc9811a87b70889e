//! A single spark

use crate::config::{FRICTION, OPACITY_DECAY};
use glam::Vec2;
use sparkler_core::{Canvas, Color, Rect, Transform};

/// One spark: a small rotated square that slows down and fades out
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    /// Displacement per frame
    pub velocity: Vec2,
    /// Fixed rotation about the pointer, in radians
    pub rotation: f32,
    pub size: f32,
    pub color: Color,
    /// Never increases after creation
    pub opacity: f64,
    /// Velocity multiplier applied each frame
    pub friction: f32,
    /// Launch distance the velocity was scaled by
    pub distance: f32,
}

impl Particle {
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        size: f32,
        color: Color,
        distance: f32,
        opacity: f64,
        rotation: f32,
    ) -> Self {
        Self {
            position,
            velocity,
            rotation,
            size,
            color,
            opacity,
            friction: FRICTION,
            distance,
        }
    }

    /// Paint the square, rotated about the current pointer
    pub fn draw(&self, pointer: Vec2, canvas: &mut dyn Canvas) {
        canvas.fill_rect(
            Rect::centered_square(self.position, self.size),
            self.color,
            Transform::rotation_about(pointer, self.rotation),
        );
    }

    /// Draw at the current position, then damp, move, and fade by one frame
    pub fn step(&mut self, pointer: Vec2, canvas: &mut dyn Canvas) {
        self.draw(pointer, canvas);

        self.velocity *= self.friction;
        self.position += self.velocity;
        self.opacity -= OPACITY_DECAY;
    }

    /// Expired sparks must leave the live collection before the next frame
    pub fn is_expired(&self) -> bool {
        self.opacity <= 0.0
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkler_core::{DrawList, SurfaceSize};

    fn spark(opacity: f64) -> Particle {
        Particle::new(
            Vec2::new(100.0, 200.0),
            Vec2::new(6.0, -8.0),
            2.0,
            Color::from_hsl(10.0, 1.0, 0.9),
            10.0,
            opacity,
            25f32.to_radians(),
        )
    }

    fn canvas() -> DrawList {
        DrawList::new(SurfaceSize::new(800.0, 600.0))
    }

    #[test]
    fn step_decays_opacity_by_fixed_amount() {
        let mut p = spark(0.8);
        let mut c = canvas();
        for _ in 0..5 {
            let before = p.opacity;
            p.step(Vec2::ZERO, &mut c);
            assert!((p.opacity - (before - 0.06)).abs() < 1e-6);
            assert!(p.opacity < before);
        }
    }

    #[test]
    fn step_damps_speed_by_friction() {
        let mut p = spark(1.0);
        let mut c = canvas();
        for _ in 0..10 {
            let before = p.speed();
            p.step(Vec2::ZERO, &mut c);
            assert!((p.speed() - before * 0.98).abs() < 1e-4);
        }
    }

    #[test]
    fn step_moves_by_damped_velocity() {
        let mut p = spark(1.0);
        p.step(Vec2::ZERO, &mut canvas());
        // (6, -8) * 0.98 = (5.88, -7.84)
        assert!((p.position.x - 105.88).abs() < 1e-4);
        assert!((p.position.y - 192.16).abs() < 1e-4);
    }

    #[test]
    fn step_draws_before_moving() {
        let mut p = spark(1.0);
        let pointer = Vec2::new(240.0, 600.0);
        let mut c = canvas();
        p.step(pointer, &mut c);

        assert_eq!(c.len(), 1);
        let cmd = c.commands()[0];
        assert_eq!(cmd.rect, Rect::new(99.0, 199.0, 2.0, 2.0));
        assert_eq!(cmd.transform, Transform::rotation_about(pointer, 25f32.to_radians()));
        assert_eq!(cmd.color, p.color);
    }

    #[test]
    fn expires_at_zero_or_below() {
        let mut p = spark(0.1);
        assert!(!p.is_expired());
        p.step(Vec2::ZERO, &mut canvas());
        assert!(!p.is_expired()); // ~0.04
        p.step(Vec2::ZERO, &mut canvas());
        assert!(p.is_expired());
    }

    #[test]
    fn full_opacity_lasts_seventeen_frames() {
        let mut p = spark(1.0);
        let mut frames = 0;
        while !p.is_expired() {
            p.step(Vec2::ZERO, &mut canvas());
            frames += 1;
        }
        assert_eq!(frames, 17);
    }

    #[test]
    fn opacity_on_exact_multiples_of_decay_expires_on_time() {
        // Starting values the spawner can roll that are whole multiples of the decay
        for (opacity, lifetime) in [(0.18, 3), (0.30, 5), (0.36, 6), (0.72, 12)] {
            let mut p = spark(opacity);
            let mut c = canvas();
            let mut frames = 0;
            while !p.is_expired() {
                p.step(Vec2::ZERO, &mut c);
                frames += 1;
            }
            assert_eq!(frames, lifetime, "opacity {opacity}");
            assert_eq!(c.len(), lifetime);
        }
    }
}
