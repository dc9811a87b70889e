//! The sparkler rod and its handle

use crate::config::{
    burnt_color, handle_color, stick_color, HANDLE_FRACTION, PROGRESS_DELTA, STICK_FRACTION,
    STICK_THICKNESS,
};
use glam::Vec2;
use sparkler_core::{Canvas, Rect, SurfaceSize, Transform};

/// A handle with a burnable rod above it, held at the pointer.
///
/// The rod burns down from its far end as progress advances; the tip is
/// where sparks are emitted.
#[derive(Clone, Debug)]
pub struct Stick {
    pub thickness: f32,
    /// Rotation about the pointer, in radians
    pub tilt: f32,
    pub handle_length: f32,
    pub stick_length: f32,
    progress: f32,
    fraction: f32,
    tip: Vec2,
}

impl Stick {
    /// Lengths derive from the surface height; the tip starts at the far end of the rod
    pub fn new(tilt: f32, surface: SurfaceSize, pointer: Vec2) -> Self {
        let handle_length = surface.height * HANDLE_FRACTION;
        let stick_length = surface.height * STICK_FRACTION;
        Self {
            thickness: STICK_THICKNESS,
            tilt,
            handle_length,
            stick_length,
            progress: 0.0,
            fraction: 0.0,
            tip: Vec2::new(pointer.x, pointer.y - handle_length - stick_length),
        }
    }

    /// Raw progress counter; may exceed 1
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress clamped to [0, 1]; drives tip position and burnt height
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Unrotated emission point
    pub fn tip(&self) -> Vec2 {
        self.tip
    }

    /// The rod has burnt all the way down to the handle
    pub fn is_fully_extended(&self) -> bool {
        self.fraction >= 1.0
    }

    /// Advance one frame against the current pointer, then draw
    pub fn advance(&mut self, pointer: Vec2, canvas: &mut dyn Canvas) {
        self.progress += PROGRESS_DELTA;
        self.fraction = self.progress.min(1.0);

        self.tip = Vec2::new(
            pointer.x,
            pointer.y - self.handle_length - self.stick_length * (1.0 - self.fraction),
        );

        self.draw(pointer, canvas);
    }

    /// Paint handle, full rod, and burnt portion, all rotated about the pointer
    pub fn draw(&self, pointer: Vec2, canvas: &mut dyn Canvas) {
        let transform = Transform::rotation_about(pointer, self.tilt);
        let t = self.thickness;
        let rod_top = pointer.y - self.handle_length - self.stick_length;

        canvas.fill_rect(
            Rect::new(
                pointer.x - t / 8.0,
                pointer.y - self.handle_length,
                t / 4.0,
                self.handle_length,
            ),
            handle_color(),
            transform,
        );

        canvas.fill_rect(
            Rect::new(pointer.x - t / 2.0, rod_top, t, self.stick_length),
            stick_color(),
            transform,
        );

        canvas.fill_rect(
            Rect::new(
                pointer.x - t / 2.0,
                rod_top,
                t,
                self.stick_length * self.fraction,
            ),
            burnt_color(),
            transform,
        );
    }
}
