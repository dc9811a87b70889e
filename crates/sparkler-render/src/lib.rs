//! Sparkler Render - canvas backends for the Sparkler effect
//!
//! Two implementations of the `Canvas` seam:
//! - `Framebuffer` rasterizes on the CPU into an RGBA image (headless capture)
//! - `CanvasRenderer` replays a recorded `DrawList` with wgpu, drawing every
//!   rectangle of a frame in one instanced call onto a persistent canvas

mod canvas_renderer;
mod context;
mod present;
mod raster;
pub mod rect_pipeline;

pub use canvas_renderer::{CanvasRenderer, CANVAS_FORMAT};
pub use context::{RenderContext, RenderError};
pub use raster::Framebuffer;
pub use rect_pipeline::{RectInstanceGpu, RectPipeline, RectUniforms};

#[cfg(test)]
mod tests {
    #[test]
    fn rect_shader_wgsl_parses() {
        let source = include_str!("rect_shader.wgsl");
        naga::front::wgsl::parse_str(source).expect("rect_shader.wgsl failed to parse");
    }

    #[test]
    fn present_shader_wgsl_parses() {
        let source = include_str!("present_shader.wgsl");
        naga::front::wgsl::parse_str(source).expect("present_shader.wgsl failed to parse");
    }
}
