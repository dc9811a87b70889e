//! Sparkler Player - windowed and headless hosts for the sparkler effect
//!
//! - `PlayerApp` drives the effect in a winit window and presents it with wgpu
//! - `capture_frames` renders a fixed number of frames to PNG files without a window

mod capture;
mod player_app;

pub use capture::{capture_frames, frame_path, CaptureOptions};
pub use player_app::PlayerApp;
