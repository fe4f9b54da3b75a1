use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbImage, RgbaImage};

use crate::error::{Error, Result};

use super::canvas::Canvas;

/// Save a canvas as a PNG file.
pub fn save_png<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
    let img = RgbImage::from_raw(canvas.width_px(), canvas.height_px(), canvas.pixels().to_vec())
        .ok_or_else(|| {
            Error::InvalidArgument("canvas buffer does not match its dimensions".to_string())
        })?;
    img.save(path)?;
    Ok(())
}

/// Save a sequence of equally sized canvases as an infinitely looping
/// animated GIF with the given per-frame delay.
pub fn save_gif<P: AsRef<Path>>(frames: &[Canvas], path: P, frame_delay_ms: u32) -> Result<()> {
    if frames.is_empty() {
        return Err(Error::InvalidArgument(
            "animated export needs at least one frame".to_string(),
        ));
    }

    let writer = BufWriter::new(File::create(path)?);
    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
    for canvas in frames {
        let rgba = rgb_to_rgba(canvas)?;
        encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))?;
    }
    Ok(())
}

fn rgb_to_rgba(canvas: &Canvas) -> Result<RgbaImage> {
    let rgb = canvas.pixels();
    let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
    for px in rgb.chunks_exact(3) {
        rgba.extend_from_slice(px);
        rgba.push(255);
    }
    RgbaImage::from_raw(canvas.width_px(), canvas.height_px(), rgba).ok_or_else(|| {
        Error::InvalidArgument("canvas buffer does not match its dimensions".to_string())
    })
}
