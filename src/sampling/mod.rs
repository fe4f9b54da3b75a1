// Sampling module: stride scoring pipeline for quasi-uniform 2D point placement
// Data flows strictly upward: gcd and vector ops feed basis construction,
// basis construction feeds lattice reduction, reduction feeds the delta search.

// ======================== MODULE DECLARATIONS ========================
pub mod basis;
pub mod delta;
pub mod reduction;
pub mod vec2i;

mod _tests_delta;
mod _tests_reduction;

// ======================== RE-EXPORTED PUBLIC API (curated) ========================
pub use vec2i::{
    gcd,   // fn(a: i64, b: i64) -> i64 - Euclidean gcd, coprimality predicate
    IVec2, // struct - immutable integer 2-vector with exact arithmetic
};

pub use basis::make_basis; // fn(delta, width) -> Result<(IVec2, IVec2)> - displacement lattice generators

pub use reduction::lattice_reduction; // fn(u, v) -> Result<(IVec2, IVec2)> - Lagrange-reduced basis, shortest first

pub use delta::{
    make_delta,   // fn(width, height, samples, test_count_max) -> Result<i64> - best stride search
    score_stride, // fn(delta, width) -> Option<DeltaScore> - ratio/angle quality of one candidate
    DeltaScore,   // struct - reduced basis plus error and |cos| of the cell angle
};

#[cfg(feature = "parallel")]
pub use delta::make_delta_parallel;
