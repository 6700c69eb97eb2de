use std::f64::consts::PI;

use crate::constants::{HAMMING_ALPHA, HAMMING_BETA};

/// Symmetric Hamming window of the given length
///
/// `w[n] = 0.54 - 0.46·cos(2πn/(N-1))`. A length-1 window is the constant 1
/// and a length-0 window is empty.
pub fn hamming(length: usize) -> Vec<f64> {
    match length {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let span = (length - 1) as f64;
            (0..length)
                .map(|n| HAMMING_ALPHA - HAMMING_BETA * (2.0 * PI * n as f64 / span).cos())
                .collect()
        }
    }
}
