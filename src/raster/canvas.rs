/// RGB color triple used by the raster layer.
pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];
pub const WHITE: Rgb = [255, 255, 255];
pub const RED: Rgb = [255, 0, 0];
pub const GREEN: Rgb = [0, 255, 0];

/// RGB8 raster over a logical grid, each logical pixel blown up to a
/// `pixel_size` x `pixel_size` block of physical pixels.
///
/// Coordinates are logical grid coordinates; out-of-range writes are
/// silently clipped and out-of-range reads come back black, so drawing code
/// never has to bounds-check overlay geometry that leaves the grid.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixel_size: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, pixel_size: u32) -> Self {
        let len = width as usize * height as usize * (pixel_size as usize).pow(2) * 3;
        Self {
            width,
            height,
            pixel_size,
            pixels: vec![0; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Physical pixel width of the backing buffer.
    pub fn width_px(&self) -> u32 {
        self.width * self.pixel_size
    }

    /// Physical pixel height of the backing buffer.
    pub fn height_px(&self) -> u32 {
        self.height * self.pixel_size
    }

    /// Raw RGB8 buffer, row-major at physical resolution.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Paint the logical pixel `(x, y)`; clipped when outside the grid.
    pub fn set(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let s = self.pixel_size as i64;
        let row = self.width as i64 * s;
        for dy in 0..s {
            for dx in 0..s {
                let index = (((x * s + dx) + (y * s + dy) * row) * 3) as usize;
                self.pixels[index..index + 3].copy_from_slice(&color);
            }
        }
    }

    /// Read the logical pixel `(x, y)`; black when outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Rgb {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return BLACK;
        }
        let s = self.pixel_size as i64;
        let row = self.width as i64 * s;
        let index = ((x * s + y * s * row) * 3) as usize;
        [
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
        ]
    }
}
