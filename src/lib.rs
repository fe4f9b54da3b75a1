//! Fast quasi-uniform 2D point sampling library
//!
//! This library computes integer strides (deltas) that, stepped modulo the
//! area of a rectangular grid, visit the grid in a visually uniform pattern.
//! Candidate strides are scored by building the 2D displacement lattice each
//! stride induces, Lagrange-reducing its basis, and measuring how close the
//! reduced cell is to a square/hexagonal packing.

pub mod config;
pub mod error;
pub mod raster;
pub mod sampling;

pub use error::{Error, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
