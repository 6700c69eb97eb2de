use std::fmt;
use std::ops::Deref;

use crate::constants::COEFFICIENT_PRECISION;

/// Immutable FIR tap coefficients `h[0..N-1]` in time order
///
/// Displays as a brace-delimited literal array suitable for pasting into
/// firmware source, e.g. `{0.25000000000000000000,0.50000000000000000000}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients(Vec<f64>);

impl Coefficients {
    pub fn new(taps: Vec<f64>) -> Self {
        Self(taps)
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.0.len()
    }

    /// Get the group delay in samples (half the filter length for linear phase)
    pub fn group_delay_samples(&self) -> f64 {
        self.0.len().saturating_sub(1) as f64 / 2.0
    }

    /// Get access to the tap coefficients
    pub fn taps(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Coefficients {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Coefficients {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Coefficients {
    fn from(taps: Vec<f64>) -> Self {
        Self(taps)
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, tap) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{:.*}", COEFFICIENT_PRECISION, tap)?;
        }
        write!(f, "}}")
    }
}
