/// Result type for stride-lattice operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in stride-lattice
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-side precondition was violated (non-positive dimension,
    /// sample count, or iteration bound).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested lattice has no pair of linearly independent generators
    /// (e.g. a grid of width 1, or a parallel basis handed to reduction).
    #[error("degenerate lattice: {0}")]
    DegenerateLattice(String),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
