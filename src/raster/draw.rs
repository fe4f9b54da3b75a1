use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sampling::{lattice_reduction, make_basis, IVec2};

use super::canvas::{Canvas, Rgb, GREEN, RED, WHITE};

/// Everything needed to rasterize one sampling pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternParams {
    pub width: i64,
    pub height: i64,
    pub delta: i64,
    pub samples: i64,
    pub pixel_size: u32,
    /// Overlay the raw basis vectors in red, anchored at the origin.
    pub show_basis: bool,
    /// Overlay the reduced cell vectors in green, anchored at the sample
    /// point nearest the grid center.
    pub show_cell: bool,
}

/// Draw a digital line between two grid points (DDA stepping).
pub fn draw_line(canvas: &mut Canvas, from: IVec2, to: IVec2, color: Rgb) {
    let steps = (to.x - from.x).abs().max((to.y - from.y).abs());
    if steps == 0 {
        canvas.set(from.x, from.y, color);
        return;
    }
    let dx = (to.x - from.x) as f64 / steps as f64;
    let dy = (to.y - from.y) as f64 / steps as f64;
    for i in 0..=steps {
        let x = (from.x as f64 + dx * i as f64).round() as i64;
        let y = (from.y as f64 + dy * i as f64).round() as i64;
        canvas.set(x, y, color);
    }
}

/// Plot the stride sequence `index_k = (k * delta) mod area` in white.
pub fn draw_samples(canvas: &mut Canvas, width: i64, height: i64, delta: i64, samples: i64) {
    let area = width * height;
    for k in 0..samples {
        let index = (delta * k) % area;
        canvas.set(index % width, index / width, WHITE);
    }
}

/// Walk the stride sequence and return the sample point closest to the grid
/// center. First-found wins among equidistant points.
pub fn nearest_to_center(width: i64, height: i64, delta: i64) -> IVec2 {
    let center = IVec2::new(width / 2, height / 2);
    let mut best = IVec2::new(0, 0);
    let (mut x, mut y) = (0, 0);
    while y < height {
        let test = IVec2::new(x, y);
        if (best - center).length_squared() > (test - center).length_squared() {
            best = test;
        }
        x += delta;
        while x >= width {
            x -= width;
            y += 1;
        }
    }
    best
}

/// Rasterize a full sampling pattern: optional overlays first, sample points
/// on top.
///
/// # Errors
/// [`Error::InvalidArgument`] for non-positive dimensions, delta, sample
/// count, or a zero pixel size; basis/reduction errors propagate when an
/// overlay is requested for a grid with no 2D lattice.
pub fn render_pattern(params: &PatternParams) -> Result<Canvas> {
    if params.width <= 0
        || params.height <= 0
        || params.delta <= 0
        || params.samples <= 0
        || params.pixel_size == 0
    {
        return Err(Error::InvalidArgument(format!(
            "render_pattern requires positive dimensions, got {params:?}"
        )));
    }

    let mut canvas = Canvas::new(
        params.width as u32,
        params.height as u32,
        params.pixel_size,
    );

    if params.show_basis || params.show_cell {
        let (b1, b2) = make_basis(params.delta, params.width)?;
        let (mut m1, mut m2) = lattice_reduction(b1, b2)?;

        if params.show_basis {
            let origin = IVec2::new(0, 0);
            draw_line(&mut canvas, origin, b1, RED);
            draw_line(&mut canvas, origin, b2, RED);
        }

        // point the cell vectors to the right
        if m1.x < 0 {
            m1 = -m1;
        }
        if m2.x < 0 {
            m2 = -m2;
        }
        if params.show_cell {
            let anchor = nearest_to_center(params.width, params.height, params.delta);
            draw_line(&mut canvas, anchor, m1 + anchor, GREEN);
            draw_line(&mut canvas, anchor, m2 + anchor, GREEN);
        }

        info!("cell ratio {:.3} for delta {}", m1.length() / m2.length(), params.delta);
    }

    draw_samples(
        &mut canvas,
        params.width,
        params.height,
        params.delta,
        params.samples,
    );

    Ok(canvas)
}
