//! Window-method FIR design.
//!
//! Design runs as three pure stages:
//! 1. [`ideal_response`] samples the truncated ideal impulse response,
//! 2. [`apply_window`] tapers it with a Hamming window,
//! 3. [`normalize_gain`] scales it to unity gain at the reference frequency.

use std::f64::consts::PI;

use crate::constants::REFERENCE_GAIN_TOLERANCE;
use crate::error::{FirError, Result};
use crate::signal_processing::response::amplitude_response;
use crate::signal_processing::spec::{FilterSpec, NormalizedKind};
use crate::signal_processing::window::hamming;
use crate::signal_processing::Coefficients;

/// Design a linear-phase FIR filter
///
/// # Example
/// ```
/// use easyfir::{FilterKind, FilterSpec, design};
///
/// let spec = FilterSpec::new(FilterKind::Lowpass { cutoff_hz: 40.0 }, 5, 800.0).unwrap();
/// let coeffs = design(&spec).unwrap();
/// assert_eq!(coeffs.num_taps(), 5);
/// assert!((coeffs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
///
/// # Errors
/// Returns `FirError::InvalidSpecification` if the spec is malformed
pub fn design(spec: &FilterSpec) -> Result<Coefficients> {
    spec.validate()?;

    let kind = spec.normalized();
    let ideal = ideal_response(kind, spec.order);
    let windowed = apply_window(&ideal);
    let taps = normalize_gain(&windowed, reference_frequency(kind))?;

    log::debug!("Designed {} ({:?})", spec, kind);

    Ok(Coefficients::new(taps))
}

/// Ideal impulse response of the given class, truncated to `order` taps
/// centred on `(order - 1) / 2`
///
/// Highpass and bandstop are spectral inversions: the all-pass term
/// `lowpass_tap(1.0, m)` minus the lowpass or bandpass response.
pub fn ideal_response(kind: NormalizedKind, order: usize) -> Vec<f64> {
    let center = order.saturating_sub(1) as f64 / 2.0;

    (0..order)
        .map(|n| {
            let m = n as f64 - center;
            match kind {
                NormalizedKind::Lowpass(w) => lowpass_tap(w, m),
                NormalizedKind::Highpass(w) => lowpass_tap(1.0, m) - lowpass_tap(w, m),
                NormalizedKind::Bandpass(w1, w2) => lowpass_tap(w2, m) - lowpass_tap(w1, m),
                NormalizedKind::Bandstop(w1, w2) => {
                    lowpass_tap(1.0, m) - (lowpass_tap(w2, m) - lowpass_tap(w1, m))
                }
            }
        })
        .collect()
}

/// Multiply taps pointwise by a Hamming window of the same length
pub fn apply_window(taps: &[f64]) -> Vec<f64> {
    taps.iter()
        .zip(hamming(taps.len()))
        .map(|(&h, w)| h * w)
        .collect()
}

/// Scale taps so the zero-phase amplitude at normalized frequency
/// `reference` is exactly 1
///
/// # Errors
/// Returns `FirError::InvalidSpecification` if the amplitude at `reference`
/// is zero to within rounding of the tap magnitudes
pub fn normalize_gain(taps: &[f64], reference: f64) -> Result<Vec<f64>> {
    let gain = amplitude_response(taps, reference);
    let scale: f64 = taps.iter().map(|h| h.abs()).sum();
    if !gain.is_finite() || gain.abs() <= REFERENCE_GAIN_TOLERANCE * scale {
        return Err(FirError::InvalidSpecification(format!(
            "filter gain {} at normalized frequency {} cannot be normalized",
            gain, reference
        )));
    }
    Ok(taps.iter().map(|&h| h / gain).collect())
}

/// Normalized frequency at which the passband gain is pinned to 1
///
/// DC for lowpass, band centre for bandpass, Nyquist for highpass and bandstop.
pub fn reference_frequency(kind: NormalizedKind) -> f64 {
    match kind {
        NormalizedKind::Lowpass(_) => 0.0,
        NormalizedKind::Highpass(_) | NormalizedKind::Bandstop(..) => 1.0,
        NormalizedKind::Bandpass(w1, w2) => 0.5 * (w1 + w2),
    }
}

/// Sampled ideal lowpass response `w·sinc(w·m)` with cutoff `w` (fraction of Nyquist)
fn lowpass_tap(w: f64, m: f64) -> f64 {
    w * sinc(w * m)
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal_processing::FilterKind;
    use approx::assert_abs_diff_eq;

    fn spec(kind: FilterKind, order: usize) -> FilterSpec {
        FilterSpec::new(kind, order, 800.0).unwrap()
    }

    fn assert_taps(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want) {
            assert_abs_diff_eq!(*g, *w, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_lowpass_reference_taps() {
        let coeffs = design(&spec(FilterKind::Lowpass { cutoff_hz: 40.0 }, 5)).unwrap();
        assert_taps(
            &coeffs,
            &[
                0.0338332401184245,
                0.24012702387971543,
                0.45207947200372,
                0.24012702387971546,
                0.0338332401184245,
            ],
        );
    }

    #[test]
    fn test_highpass_reference_taps() {
        let coeffs = design(&spec(FilterKind::Highpass { cutoff_hz: 100.0 }, 7)).unwrap();
        assert_taps(
            &coeffs,
            &[
                -0.005942976546695399,
                -0.04885195856798579,
                -0.17160344778582964,
                0.7426110684709215,
                -0.17160344778582973,
                -0.04885195856798579,
                -0.005942976546695399,
            ],
        );
    }

    #[test]
    fn test_bandpass_reference_taps() {
        let kind = FilterKind::Bandpass {
            low_hz: 40.0,
            high_hz: 60.0,
        };
        let coeffs = design(&spec(kind, 7)).unwrap();
        assert_taps(
            &coeffs,
            &[
                0.011467472388076804,
                0.08253215754271229,
                0.26867262983223744,
                0.37806279278716987,
                0.26867262983223755,
                0.08253215754271229,
                0.011467472388076804,
            ],
        );
    }

    #[test]
    fn test_bandstop_reference_taps() {
        let kind = FilterKind::Bandstop {
            low_hz: 40.0,
            high_hz: 60.0,
        };
        let coeffs = design(&spec(kind, 7)).unwrap();
        assert_taps(
            &coeffs,
            &[
                -0.0015131767710396752,
                -0.010890433343207198,
                -0.03545237945364397,
                0.9478497542370472,
                -0.03545237945364398,
                -0.010890433343207198,
                -0.0015131767710396752,
            ],
        );
    }

    #[test]
    fn test_order_one_lowpass_is_unity() {
        let coeffs = design(&spec(FilterKind::Lowpass { cutoff_hz: 40.0 }, 1)).unwrap();
        assert_eq!(coeffs.num_taps(), 1);
        assert_abs_diff_eq!(coeffs[0], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_order_one_highpass_is_unity() {
        let coeffs = design(&spec(FilterKind::Highpass { cutoff_hz: 40.0 }, 1)).unwrap();
        assert_abs_diff_eq!(coeffs[0], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_ideal_response_is_centered() {
        let ideal = ideal_response(NormalizedKind::Lowpass(0.1), 5);
        assert_abs_diff_eq!(ideal[2], 0.1, epsilon = 1e-15);
        assert_abs_diff_eq!(ideal[0], ideal[4], epsilon = 1e-15);
        assert_abs_diff_eq!(ideal[1], ideal[3], epsilon = 1e-15);
    }

    #[test]
    fn test_highpass_ideal_is_spectral_inversion() {
        let lp = ideal_response(NormalizedKind::Lowpass(0.3), 9);
        let hp = ideal_response(NormalizedKind::Highpass(0.3), 9);
        for n in 0..9 {
            let delta = if n == 4 { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(hp[n], delta - lp[n], epsilon = 1e-15);
        }
    }

    #[test]
    fn test_apply_window_tapers_edges() {
        let windowed = apply_window(&[1.0; 5]);
        assert_taps(&windowed, &[0.08, 0.54, 1.0, 0.54, 0.08]);
        assert!(apply_window(&[]).is_empty());
    }

    #[test]
    fn test_normalize_gain_at_dc() {
        let taps = normalize_gain(&[1.0, 2.0, 1.0], 0.0).unwrap();
        assert_taps(&taps, &[0.25, 0.5, 0.25]);
    }

    #[test]
    fn test_normalize_gain_rejects_null() {
        let result = normalize_gain(&[0.5, 0.5], 1.0);
        assert!(matches!(result, Err(FirError::InvalidSpecification(_))));
        assert!(normalize_gain(&[], 0.0).is_err());
    }

    #[test]
    fn test_normalize_gain_accepts_tiny_gain() {
        let taps = normalize_gain(&[1e-20, 2e-20, 1e-20], 0.0).unwrap();
        assert_taps(&taps, &[0.25, 0.5, 0.25]);
    }

    #[test]
    fn test_tiny_cutoff_lowpass_designs() {
        let coeffs = design(&spec(FilterKind::Lowpass { cutoff_hz: 1e-12 }, 5)).unwrap();
        assert_abs_diff_eq!(coeffs.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        // Cutoff this low leaves the normalized Hamming window.
        let window = hamming(5);
        let total: f64 = window.iter().sum();
        for (h, w) in coeffs.iter().zip(&window) {
            assert_abs_diff_eq!(*h, w / total, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_narrow_bandpass_designs() {
        let kind = FilterKind::Bandpass {
            low_hz: 40.0,
            high_hz: 40.0 + 1e-10,
        };
        let spec = spec(kind, 5);
        let coeffs = design(&spec).unwrap();
        let reference = reference_frequency(spec.normalized());
        assert_abs_diff_eq!(amplitude_response(&coeffs, reference), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_design_is_symmetric() {
        let kinds = [
            FilterKind::Lowpass { cutoff_hz: 120.0 },
            FilterKind::Highpass { cutoff_hz: 120.0 },
            FilterKind::Bandpass {
                low_hz: 40.0,
                high_hz: 60.0,
            },
            FilterKind::Bandstop {
                low_hz: 40.0,
                high_hz: 60.0,
            },
        ];
        for kind in kinds {
            let coeffs = design(&spec(kind, 31)).unwrap();
            for n in 0..31 {
                assert_abs_diff_eq!(coeffs[n], coeffs[30 - n], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_design_revalidates() {
        let bad = FilterSpec {
            kind: FilterKind::Bandpass {
                low_hz: 60.0,
                high_hz: 40.0,
            },
            order: 10,
            sample_rate: 800.0,
        };
        assert!(matches!(
            design(&bad),
            Err(FirError::InvalidSpecification(_))
        ));
    }

    #[test]
    fn test_reference_gain_is_unity() {
        let kind = FilterKind::Bandpass {
            low_hz: 40.0,
            high_hz: 60.0,
        };
        let spec = spec(kind, 101);
        let coeffs = design(&spec).unwrap();
        let reference = reference_frequency(spec.normalized());
        assert_abs_diff_eq!(reference, 0.125, epsilon = 1e-15);
        assert_abs_diff_eq!(amplitude_response(&coeffs, reference), 1.0, epsilon = 1e-12);
    }
}
