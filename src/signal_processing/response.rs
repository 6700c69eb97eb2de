//! Frequency response evaluation for FIR taps.
//!
//! Frequencies are normalized to Nyquist: `w = 0` is DC, `w = 1` is half
//! the sample rate.

use std::f64::consts::PI;

use num_complex::Complex64;
use serde::Serialize;

use crate::constants::MIN_MAGNITUDE_DB;

/// One row of a frequency response table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponsePoint {
    /// Frequency in Hz
    pub frequency_hz: f64,
    /// Linear magnitude `|H|`
    pub magnitude: f64,
    /// Magnitude in dB, floored for exact zeros
    pub magnitude_db: f64,
    /// Phase in radians
    pub phase: f64,
}

/// Zero-phase amplitude of a linear-phase filter at normalized frequency `w`
///
/// Evaluates `Σ h[n]·cos(π·w·(n - (N-1)/2))`. For symmetric taps this is the
/// signed magnitude of the response with the group delay removed.
pub fn amplitude_response(taps: &[f64], w: f64) -> f64 {
    let center = taps.len().saturating_sub(1) as f64 / 2.0;
    taps.iter()
        .enumerate()
        .map(|(n, &h)| h * (PI * w * (n as f64 - center)).cos())
        .sum()
}

/// Complex response `H(w) = Σ h[n]·e^{-iπwn}` at normalized frequency `w`
pub fn response_at(taps: &[f64], w: f64) -> Complex64 {
    taps.iter()
        .enumerate()
        .map(|(n, &h)| h * Complex64::from_polar(1.0, -PI * w * n as f64))
        .sum()
}

/// Evaluate the response on `points` evenly spaced frequencies in `[0, Nyquist)`
pub fn frequency_response(taps: &[f64], sample_rate: f64, points: usize) -> Vec<ResponsePoint> {
    (0..points)
        .map(|k| {
            let w = k as f64 / points as f64;
            let h = response_at(taps, w);
            let magnitude = h.norm();
            ResponsePoint {
                frequency_hz: w * sample_rate / 2.0,
                magnitude,
                magnitude_db: to_db(magnitude),
                phase: h.arg(),
            }
        })
        .collect()
}

fn to_db(magnitude: f64) -> f64 {
    if magnitude > 0.0 {
        (20.0 * magnitude.log10()).max(MIN_MAGNITUDE_DB)
    } else {
        MIN_MAGNITUDE_DB
    }
}
