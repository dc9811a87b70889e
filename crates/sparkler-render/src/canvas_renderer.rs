//! Window presentation of a recorded frame
//!
//! The effect never clears: it fades the previous frame with a translucent
//! fill. The renderer therefore keeps an offscreen canvas texture that
//! persists across frames, draws each `DrawList` into it, then blits it
//! to the swapchain.

use crate::context::{RenderContext, RenderError};
use crate::present::PresentPipeline;
use crate::rect_pipeline::{RectPipeline, RectUniforms};
use sparkler_core::DrawList;
use tracing::debug;

/// Format of the persistent canvas; colors are stored as authored
pub const CANVAS_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

pub struct CanvasRenderer {
    rect_pipeline: RectPipeline,
    present_pipeline: PresentPipeline,
    // Owns the storage behind `canvas_view`
    _canvas_texture: wgpu::Texture,
    canvas_view: wgpu::TextureView,
    width: u32,
    height: u32,
    needs_clear: bool,
}

impl CanvasRenderer {
    pub fn new(ctx: &RenderContext) -> Self {
        let width = ctx.config.width;
        let height = ctx.config.height;
        let (canvas_texture, canvas_view) = create_canvas_texture(&ctx.device, width, height);

        Self {
            rect_pipeline: RectPipeline::new(&ctx.device, CANVAS_FORMAT),
            present_pipeline: PresentPipeline::new(&ctx.device, ctx.config.format),
            _canvas_texture: canvas_texture,
            canvas_view,
            width,
            height,
            needs_clear: true,
        }
    }

    /// Recreate the canvas at the new size; its previous contents are discarded
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 || (width == self.width && height == self.height) {
            return;
        }
        let (texture, view) = create_canvas_texture(device, width, height);
        self._canvas_texture = texture;
        self.canvas_view = view;
        self.width = width;
        self.height = height;
        self.needs_clear = true;
        debug!(width, height, "[render] canvas resized");
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Draw `frame` onto the persistent canvas and present it.
    ///
    /// A skipped swapchain frame still updates the canvas, so no draw is lost.
    pub fn render(&mut self, ctx: &mut RenderContext, frame: &DrawList) -> Result<(), RenderError> {
        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Canvas Encoder"),
            });

        if self.needs_clear {
            clear_canvas(&mut encoder, &self.canvas_view);
            self.needs_clear = false;
        }

        self.rect_pipeline.draw(
            &ctx.device,
            &ctx.queue,
            &mut encoder,
            &self.canvas_view,
            RectUniforms::new(self.width as f32, self.height as f32),
            frame.commands(),
        );

        let output = ctx.acquire_frame()?;
        let view = output
            .as_ref()
            .map(|o| o.texture.create_view(&wgpu::TextureViewDescriptor::default()));
        if let Some(view) = &view {
            self.present_pipeline
                .present(&ctx.device, &mut encoder, &self.canvas_view, view);
        }

        ctx.queue.submit(std::iter::once(encoder.finish()));

        if let Some(output) = output {
            output.present();
        }
        Ok(())
    }
}

fn clear_canvas(encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
    let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Canvas Clear Pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
}

fn create_canvas_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Canvas Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: CANVAS_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}
