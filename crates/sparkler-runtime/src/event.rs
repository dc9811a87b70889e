//! Surface input events consumed by the effect

use sparkler_core::SurfaceSize;
use winit::event::WindowEvent;

/// Input that changes what the effect draws against
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceEvent {
    /// Pointer moved to absolute surface coordinates
    PointerMoved { x: f32, y: f32 },
    /// Pointer left the surface
    PointerLeft,
    /// Surface was resized; triggers a full reset
    Resized(SurfaceSize),
}

impl SurfaceEvent {
    /// Translate a winit window event, if it is one the effect cares about
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::PointerMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::CursorLeft { .. } => Some(Self::PointerLeft),
            WindowEvent::Resized(size) => Some(Self::Resized(SurfaceSize::from_physical(
                size.width,
                size.height,
            ))),
            _ => None,
        }
    }
}
