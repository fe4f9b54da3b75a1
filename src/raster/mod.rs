// Raster module: plotting sampling patterns and exporting them as images
// Consumes the pure sampling core; nothing here feeds back into the search.

// ======================== MODULE DECLARATIONS ========================
pub mod canvas;
pub mod draw;
pub mod export;


// ======================== RE-EXPORTED PUBLIC API (curated) ========================
pub use canvas::{Canvas, Rgb, BLACK, GREEN, RED, WHITE};

pub use draw::{
    draw_line,         // fn(&mut Canvas, from, to, color) - DDA digital line
    draw_samples,      // fn(&mut Canvas, width, height, delta, samples) - plot stride sequence
    nearest_to_center, // fn(width, height, delta) -> IVec2 - cell overlay anchor
    render_pattern,    // fn(&PatternParams) -> Result<Canvas> - full pattern with overlays
    PatternParams,     // struct - rasterization parameters
};

pub use export::{save_gif, save_png};
