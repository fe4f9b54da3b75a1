// Constants

// Scoring thresholds
pub const MAX_COS_ANGLE: f64 = 0.25; // reject reduced cells more skewed than ~75 degrees

// Animation defaults
pub const GIF_FRAME_DELAY_MS: u32 = 100; // per-frame delay for delta sweeps
