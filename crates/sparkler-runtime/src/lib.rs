//! Sparkler Runtime - Host loop infrastructure
//!
//! Provides the building blocks a host needs to drive the effect:
//! - `GameClock` - wall-time delta between host callbacks
//! - `FrameThrottle` - fixed-rate frame gate with remainder carry-over
//! - `IntervalTimer` - cancelable periodic trigger on simulated time
//! - `PointerTracker` - pointer position with a resting anchor
//! - `SurfaceEvent` / `EventBus` - input queue drained before each update
//! - `RuntimeSystem` - trait for systems ticked by the host loop

mod clock;
mod event;
mod event_bus;
mod input;
mod system;

pub use clock::{FrameThrottle, GameClock, IntervalTimer};
pub use event::SurfaceEvent;
pub use event_bus::EventBus;
pub use input::{PointerTracker, ANCHOR_X_FRACTION, ANCHOR_Y_FRACTION};
pub use system::RuntimeSystem;
