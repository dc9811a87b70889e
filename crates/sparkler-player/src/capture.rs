//! Headless capture: run the effect on a CPU framebuffer and write PNG frames

use sparkler_core::{Result, SparklerError, SurfaceSize};
use sparkler_fx::config::FRAME_RATE;
use sparkler_fx::SparklerSystem;
use sparkler_render::Framebuffer;
use sparkler_runtime::RuntimeSystem;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What to capture and where
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub seed: Option<u64>,
    pub out_dir: PathBuf,
}

/// `frame_0000.png`, `frame_0001.png`, ...
pub fn frame_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("frame_{index:04}.png"))
}

/// Render `options.frames` frames at the effect's own frame rate.
///
/// Returns the written file paths in frame order.
pub fn capture_frames(options: &CaptureOptions) -> Result<Vec<PathBuf>> {
    if options.width == 0 || options.height == 0 {
        return Err(SparklerError::CaptureError(format!(
            "invalid capture size {}x{}",
            options.width, options.height
        )));
    }
    std::fs::create_dir_all(&options.out_dir)?;

    let mut system = match options.seed {
        Some(seed) => SparklerSystem::with_seed(seed),
        None => SparklerSystem::new(),
    };
    let mut framebuffer = Framebuffer::new(options.width, options.height);
    system.initialize(SurfaceSize::from_physical(options.width, options.height))?;

    let dt = 1.0 / FRAME_RATE;
    let mut written = Vec::with_capacity(options.frames as usize);
    // Each step is exactly one frame interval; the bound only guards against a stalled throttle
    let max_steps = options.frames.saturating_mul(2).saturating_add(2);

    for _ in 0..max_steps {
        if written.len() as u32 >= options.frames {
            break;
        }
        if !system.update(dt, &mut framebuffer)? {
            continue;
        }
        let path = frame_path(&options.out_dir, written.len() as u32);
        framebuffer.save_png(&path)?;
        debug!(path = %path.display(), "[capture] frame written");
        written.push(path);
    }

    system.shutdown()?;

    if (written.len() as u32) < options.frames {
        return Err(SparklerError::CaptureError(format!(
            "only {} of {} frames were drawn",
            written.len(),
            options.frames
        )));
    }

    info!(
        frames = written.len(),
        dir = %options.out_dir.display(),
        "[capture] done"
    );
    Ok(written)
}
