//! Queue of surface events between the host and the effect

use crate::event::SurfaceEvent;

/// A simple event queue the host pushes to and the effect drains before each update
pub struct EventBus {
    events: Vec<SurfaceEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event onto the bus
    pub fn push(&mut self, event: SurfaceEvent) {
        self.events.push(event);
    }

    /// Drain all events from the bus in arrival order
    pub fn drain(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkler_core::SurfaceSize;

    #[test]
    fn test_push_and_drain() {
        let mut bus = EventBus::new();
        assert!(bus.is_empty());

        bus.push(SurfaceEvent::PointerMoved { x: 1.0, y: 2.0 });
        bus.push(SurfaceEvent::Resized(SurfaceSize::new(640.0, 480.0)));

        assert_eq!(bus.len(), 2);
        assert!(!bus.is_empty());

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SurfaceEvent::PointerMoved { x: 1.0, y: 2.0 });
        assert!(bus.is_empty());
    }

    #[test]
    fn test_drain_clears() {
        let mut bus = EventBus::new();
        bus.push(SurfaceEvent::PointerLeft);

        let _ = bus.drain();
        let events = bus.drain();
        assert!(events.is_empty());
    }
}
