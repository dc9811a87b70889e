//! Sparkler Core - Foundational types for the Sparkler effect
//!
//! This crate provides the types every other Sparkler crate depends on:
//! - `Color`, `Rect`, `Transform`, `SurfaceSize` - 2D drawing types
//! - `Canvas` - the single drawing primitive the effect needs
//! - `DrawList` - a `Canvas` that records commands for later playback
//! - Error types and Result alias

mod canvas;
mod error;
mod types;

pub use canvas::{Canvas, DrawCommand, DrawList};
pub use error::{Result, SparklerError};
pub use types::{Color, Rect, SurfaceSize, Transform};
