//! Numeric constants for filter design and response evaluation
//!
//! These constants define the fixed window shape, numerical stability
//! thresholds and output conventions used throughout the crate.

/// Hamming window constant term.
pub const HAMMING_ALPHA: f64 = 0.54;

/// Hamming window cosine term.
pub const HAMMING_BETA: f64 = 0.46;

/// Relative tolerance below which a reference amplitude counts as zero.
/// Scaled by the sum of absolute tap values, so filters with tiny but
/// nonzero passband gain still normalize.
pub const REFERENCE_GAIN_TOLERANCE: f64 = f64::EPSILON;

/// Fractional digits used when rendering coefficients as a literal array.
pub const COEFFICIENT_PRECISION: usize = 20;

/// Default number of frequency points in a response table.
pub const DEFAULT_RESPONSE_POINTS: usize = 512;

/// Floor applied to magnitudes in dB so exact zeros stay finite.
pub const MIN_MAGNITUDE_DB: f64 = -300.0;
