//! Pointer position tracking

use glam::Vec2;
use sparkler_core::SurfaceSize;

/// Fraction of the surface width used for the resting pointer anchor
pub const ANCHOR_X_FRACTION: f32 = 0.3;
/// Fraction of the surface height used for the resting pointer anchor
pub const ANCHOR_Y_FRACTION: f32 = 1.0;

/// Tracks the pointer position every draw is anchored to.
///
/// Falls back to a resting anchor near the bottom-left of the surface
/// whenever the pointer leaves or the surface is resized.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    position: Vec2,
    surface: SurfaceSize,
}

impl PointerTracker {
    /// Start at the resting anchor of `surface`
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            position: Self::anchor_for(surface),
            surface,
        }
    }

    fn anchor_for(surface: SurfaceSize) -> Vec2 {
        Vec2::new(
            surface.width * ANCHOR_X_FRACTION,
            surface.height * ANCHOR_Y_FRACTION,
        )
    }

    /// Current pointer position in surface pixels
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Resting position used when there is no live pointer
    pub fn default_anchor(&self) -> Vec2 {
        Self::anchor_for(self.surface)
    }

    /// Process pointer movement (absolute surface coordinates)
    pub fn process_pointer_move(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Process the pointer leaving the surface
    pub fn process_pointer_leave(&mut self) {
        self.position = self.default_anchor();
    }

    /// Adopt a new surface size and return to its anchor
    pub fn resize(&mut self, surface: SurfaceSize) {
        self.surface = surface;
        self.position = self.default_anchor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < 1e-3,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_starts_at_anchor() {
        let tracker = PointerTracker::new(SurfaceSize::new(800.0, 600.0));
        assert_close(tracker.position(), Vec2::new(240.0, 600.0));
        assert_eq!(tracker.default_anchor(), tracker.position());
    }

    #[test]
    fn test_move_is_unconstrained() {
        let mut tracker = PointerTracker::new(SurfaceSize::new(800.0, 600.0));
        tracker.process_pointer_move(120.5, 33.0);
        assert_eq!(tracker.position(), Vec2::new(120.5, 33.0));

        // Off-surface coordinates are taken as-is
        tracker.process_pointer_move(-40.0, 9000.0);
        assert_eq!(tracker.position(), Vec2::new(-40.0, 9000.0));
    }

    #[test]
    fn test_leave_resets_to_anchor() {
        let mut tracker = PointerTracker::new(SurfaceSize::new(800.0, 600.0));
        tracker.process_pointer_move(10.0, 10.0);
        tracker.process_pointer_leave();
        assert_close(tracker.position(), Vec2::new(240.0, 600.0));
    }

    #[test]
    fn test_resize_moves_anchor() {
        let mut tracker = PointerTracker::new(SurfaceSize::new(800.0, 600.0));
        tracker.process_pointer_move(10.0, 10.0);
        tracker.resize(SurfaceSize::new(1000.0, 500.0));
        assert_eq!(tracker.surface(), SurfaceSize::new(1000.0, 500.0));
        assert_close(tracker.position(), Vec2::new(300.0, 500.0));
    }
}
