//! Runtime system trait

use crate::event::SurfaceEvent;
use sparkler_core::{Canvas, Result, SurfaceSize};

/// A system driven by the host loop
///
/// The host forwards input events first, then calls `update` once per
/// callback with the wall time that has passed. Systems decide internally
/// whether that time is enough to draw a frame.
pub trait RuntimeSystem {
    /// Called once the drawing surface exists
    fn initialize(&mut self, surface: SurfaceSize) -> Result<()>;

    /// Called for each queued input event, in arrival order, before `update`
    fn handle_event(&mut self, event: &SurfaceEvent) -> Result<()>;

    /// Called once per host callback; returns true if a frame was drawn to `canvas`
    fn update(&mut self, dt: f64, canvas: &mut dyn Canvas) -> Result<bool>;

    /// Called when the system is being shut down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
