//! Animated GIF export.
//!
//! Consumes the ordered frame sequence and paints each point bag as filled
//! circles on a fixed-size canvas, then encodes an infinitely looping GIF.
//! The editor core never calls into this module; presentation code pulls a
//! snapshot and hands its frames over.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame as GifFrame, Rgba, RgbaImage};
use thiserror::Error;

use crate::frame::Frame;
use crate::point::{Color, Point};
use crate::state::{BASE_FRAME_INTERVAL, DEFAULT_BRUSH_RADIUS};

/// Errors that can occur while exporting an animation.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode gif: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write gif: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot export an empty frame sequence")]
    NoFrames,
}

/// Canvas and timing parameters for a GIF export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub width: u32,
    pub height: u32,
    pub brush_radius: f32,
    /// How long each frame stays on screen.
    pub frame_delay_ms: u32,
    pub background: Color,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            frame_delay_ms: BASE_FRAME_INTERVAL.as_millis() as u32,
            background: Color::WHITE,
        }
    }
}

/// Encodes `frames` as a looping animated GIF into `writer`.
pub fn export_gif<W: Write>(
    frames: &[Frame],
    config: &ExportConfig,
    writer: W,
) -> Result<(), ExportError> {
    if frames.is_empty() {
        return Err(ExportError::NoFrames);
    }

    log::info!(
        "exporting {} frames as {}x{} gif",
        frames.len(),
        config.width,
        config.height
    );

    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(config.frame_delay_ms, 1);
    for frame in frames {
        let canvas = render_frame(&frame.points, config);
        encoder.encode_frame(GifFrame::from_parts(canvas, 0, 0, delay))?;
    }

    Ok(())
}

/// Encodes `frames` as a looping animated GIF at `path`.
pub fn export_gif_to_path<P: AsRef<Path>>(
    frames: &[Frame],
    config: &ExportConfig,
    path: P,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    export_gif(frames, config, BufWriter::new(file))
}

fn render_frame(points: &[Point], config: &ExportConfig) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        config.width,
        config.height,
        Rgba(config.background.to_rgba8()),
    );
    for point in points {
        draw_disc(
            &mut canvas,
            point.pos,
            config.brush_radius,
            Rgba(point.color.to_rgba8()),
        );
    }
    canvas
}

/// Paints a filled circle, clipping anything outside the canvas.
fn draw_disc(canvas: &mut RgbaImage, center: (i32, i32), radius: f32, pixel: Rgba<u8>) {
    let reach = radius.ceil() as i32;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if (dx * dx + dy * dy) as f32 > radius * radius {
                continue;
            }
            let x = center.0 + dx;
            let y = center.1 + dy;
            if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
                continue;
            }
            canvas.put_pixel(x as u32, y as u32, pixel);
        }
    }
}
