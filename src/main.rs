use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use stride_lattice::config::GIF_FRAME_DELAY_MS;
use stride_lattice::raster::{render_pattern, save_gif, save_png, PatternParams};
use stride_lattice::sampling::{make_delta, score_stride};
use stride_lattice::{Error, Result};

#[derive(Parser)]
#[command(name = "stride-lattice")]
#[command(about = "Quasi-uniform 2D point sampling via lattice-reduced strides")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the best stride for a grid
    Delta {
        /// Grid width
        #[arg(long, default_value = "200")]
        width: i64,

        /// Grid height
        #[arg(long, default_value = "200")]
        height: i64,

        /// Number of sample points the stride must spread over the grid
        #[arg(short, long, default_value = "500")]
        samples: i64,

        /// Number of coprime candidates to score
        #[arg(short, long, default_value = "10")]
        tests: i64,

        /// Emit the chosen stride and its score as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render a sampling pattern to a PNG image
    Render {
        /// Grid width
        #[arg(long, default_value = "200")]
        width: i64,

        /// Grid height
        #[arg(long, default_value = "200")]
        height: i64,

        /// Stride; searched automatically when omitted
        #[arg(short, long)]
        delta: Option<i64>,

        /// Sample count; derived as area / delta when omitted and a stride is given
        #[arg(short, long)]
        samples: Option<i64>,

        /// Number of coprime candidates to score in the automatic search
        #[arg(short, long, default_value = "10")]
        tests: i64,

        /// Edge length of one grid cell in image pixels
        #[arg(short, long, default_value = "3")]
        pixel_size: u32,

        /// Overlay the raw basis vectors at the origin
        #[arg(long)]
        show_basis: bool,

        /// Overlay the reduced cell vectors near the grid center
        #[arg(long)]
        show_cell: bool,

        /// Output file path
        #[arg(short, long, default_value = "pattern.png")]
        output: String,
    },
    /// Render an animated GIF sweeping the stride over a range
    Animate {
        /// Grid width
        #[arg(long, default_value = "200")]
        width: i64,

        /// Grid height
        #[arg(long, default_value = "200")]
        height: i64,

        /// Sample count per frame
        #[arg(short, long, default_value = "500")]
        samples: i64,

        /// First stride of the sweep
        #[arg(long)]
        min_delta: i64,

        /// Last stride of the sweep (inclusive)
        #[arg(long)]
        max_delta: i64,

        /// Edge length of one grid cell in image pixels
        #[arg(short, long, default_value = "1")]
        pixel_size: u32,

        /// Output file path
        #[arg(short, long, default_value = "sweep.gif")]
        output: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Delta {
            width,
            height,
            samples,
            tests,
            json,
        } => run_delta(width, height, samples, tests, json),
        Commands::Render {
            width,
            height,
            delta,
            samples,
            tests,
            pixel_size,
            show_basis,
            show_cell,
            output,
        } => run_render(
            width, height, delta, samples, tests, pixel_size, show_basis, show_cell, output,
        ),
        Commands::Animate {
            width,
            height,
            samples,
            min_delta,
            max_delta,
            pixel_size,
            output,
        } => run_animate(width, height, samples, min_delta, max_delta, pixel_size, output),
    }
}

fn run_delta(width: i64, height: i64, samples: i64, tests: i64, json: bool) -> Result<()> {
    let delta = make_delta(width, height, samples, tests)?;
    info!("best delta {delta} for {width}x{height} grid, {samples} samples");

    if json {
        match score_stride(delta, width) {
            Some(score) => println!(
                "{}",
                serde_json::to_string_pretty(&score)
                    .map_err(|e| Error::InvalidArgument(e.to_string()))?
            ),
            None => println!("{{\"delta\": {delta}}}"),
        }
    } else {
        println!("{delta}");
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_render(
    width: i64,
    height: i64,
    delta: Option<i64>,
    samples: Option<i64>,
    tests: i64,
    pixel_size: u32,
    show_basis: bool,
    show_cell: bool,
    output: String,
) -> Result<()> {
    let area = width.max(1) * height.max(1);
    let samples = samples.unwrap_or_else(|| match delta {
        Some(d) if d > 0 => area / d,
        _ => 500,
    });
    let delta = match delta {
        Some(d) => d,
        None => {
            let d = make_delta(width, height, samples, tests)?;
            info!("best delta {d}");
            d
        }
    };

    let params = PatternParams {
        width,
        height,
        delta,
        samples,
        pixel_size,
        show_basis,
        show_cell,
    };
    let canvas = render_pattern(&params)?;
    save_png(&canvas, &output)?;
    info!("{output} saved");
    Ok(())
}

fn run_animate(
    width: i64,
    height: i64,
    samples: i64,
    min_delta: i64,
    max_delta: i64,
    pixel_size: u32,
    output: String,
) -> Result<()> {
    if min_delta <= 0 || max_delta < min_delta {
        return Err(Error::InvalidArgument(format!(
            "animate requires 0 < min_delta <= max_delta, got {min_delta}..={max_delta}"
        )));
    }

    let mut frames = Vec::with_capacity((max_delta - min_delta + 1) as usize);
    for delta in min_delta..=max_delta {
        let params = PatternParams {
            width,
            height,
            delta,
            samples,
            pixel_size,
            show_basis: false,
            show_cell: false,
        };
        frames.push(render_pattern(&params)?);
    }

    save_gif(&frames, &output, GIF_FRAME_DELAY_MS)?;
    info!("{output} saved ({} frames)", frames.len());
    Ok(())
}
