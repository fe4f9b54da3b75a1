/// Example walking through the stride-selection pipeline
///
/// Computes a good stride for two grids, shows the induced basis and its
/// reduced cell, and renders the resulting sampling pattern to a PNG.
use stride_lattice::raster::{render_pattern, save_png, PatternParams};
use stride_lattice::sampling::{lattice_reduction, make_basis, make_delta, score_stride};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Quasi-Uniform 2D Sampling via Lattice-Reduced Strides ===\n");

    // Example 1: search for a stride on a 200x200 grid
    println!("1. Stride search on a 200x200 grid, 500 samples:");
    let delta = make_delta(200, 200, 500, 10)?;
    println!("   Best delta: {delta}");

    let (b1, b2) = make_basis(delta, 200)?;
    println!("   Raw basis:     ({}, {}) and ({}, {})", b1.x, b1.y, b2.x, b2.y);

    let (m1, m2) = lattice_reduction(b1, b2)?;
    println!("   Reduced cell:  ({}, {}) and ({}, {})", m1.x, m1.y, m2.x, m2.y);
    println!("   Length ratio:  {:.3}\n", m1.length() / m2.length());

    // Example 2: score an arbitrary candidate for comparison
    println!("2. Scoring the naive stride 80 on the same grid:");
    match score_stride(80, 200) {
        Some(score) => println!(
            "   error {:.3}, |cos angle| {:.3}\n",
            score.error, score.cos_angle
        ),
        None => println!("   no 2D lattice for this grid\n"),
    }

    // Example 3: render the chosen pattern
    println!("3. Rendering the pattern to uniform_sampling.png:");
    let canvas = render_pattern(&PatternParams {
        width: 200,
        height: 200,
        delta,
        samples: 500,
        pixel_size: 3,
        show_basis: true,
        show_cell: true,
    })?;
    save_png(&canvas, "uniform_sampling.png")?;
    println!("   Saved {}x{} pixels", canvas.width_px(), canvas.height_px());

    Ok(())
}
