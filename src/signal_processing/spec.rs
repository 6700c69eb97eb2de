use std::fmt;

use crate::error::{FirError, Result};

/// Filter class together with the cutoff frequencies it needs
///
/// One-cutoff classes carry a single frequency, two-cutoff classes carry
/// both band edges. All frequencies are in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    /// Passes frequencies below `cutoff_hz`
    Lowpass { cutoff_hz: f64 },
    /// Passes frequencies above `cutoff_hz`
    Highpass { cutoff_hz: f64 },
    /// Passes frequencies between `low_hz` and `high_hz`
    Bandpass { low_hz: f64, high_hz: f64 },
    /// Rejects frequencies between `low_hz` and `high_hz`
    Bandstop { low_hz: f64, high_hz: f64 },
}

impl FilterKind {
    /// Whether the filter has a passband touching Nyquist, which forces an
    /// odd tap count and Nyquist gain normalization.
    pub fn passes_nyquist(&self) -> bool {
        matches!(self, Self::Highpass { .. } | Self::Bandstop { .. })
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Lowpass { .. } => "lowpass",
            Self::Highpass { .. } => "highpass",
            Self::Bandpass { .. } => "bandpass",
            Self::Bandstop { .. } => "bandstop",
        }
    }
}

/// Filter class with cutoffs normalized to the Nyquist frequency (`2·f/fs`)
///
/// Every cutoff of a validated spec lies strictly in (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizedKind {
    Lowpass(f64),
    Highpass(f64),
    Bandpass(f64, f64),
    Bandstop(f64, f64),
}

/// Parameters for a window-method FIR design
///
/// # Example
/// ```
/// use easyfir::{FilterKind, FilterSpec};
///
/// let spec = FilterSpec::new(FilterKind::Lowpass { cutoff_hz: 40.0 }, 5, 800.0).unwrap();
/// assert_eq!(spec.order, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    /// Filter class and cutoff frequencies
    pub kind: FilterKind,
    /// Number of taps
    pub order: usize,
    /// Sample rate in Hz
    pub sample_rate: f64,
}

impl FilterSpec {
    /// Create and validate a filter specification
    ///
    /// # Errors
    /// Returns `FirError::InvalidSpecification` if any parameter is out of range
    pub fn new(kind: FilterKind, order: usize, sample_rate: f64) -> Result<Self> {
        let spec = Self {
            kind,
            order,
            sample_rate,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check every invariant of the specification
    pub fn validate(&self) -> Result<()> {
        if self.order < 1 {
            return Err(invalid(format!("order must be at least 1, got {}", self.order)));
        }
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(invalid(format!(
                "sample rate must be positive, got {}",
                self.sample_rate
            )));
        }

        let nyquist = self.sample_rate / 2.0;
        let check_cutoff = |label: &str, hz: f64| -> Result<()> {
            if !(hz > 0.0 && hz < nyquist) {
                return Err(invalid(format!(
                    "{} cutoff {} Hz must lie in (0, {}) Hz",
                    label, hz, nyquist
                )));
            }
            Ok(())
        };

        match self.kind {
            FilterKind::Lowpass { cutoff_hz } | FilterKind::Highpass { cutoff_hz } => {
                check_cutoff(self.kind.name(), cutoff_hz)?;
            }
            FilterKind::Bandpass { low_hz, high_hz } | FilterKind::Bandstop { low_hz, high_hz } => {
                check_cutoff("lower", low_hz)?;
                check_cutoff("upper", high_hz)?;
                if high_hz <= low_hz {
                    return Err(invalid(format!(
                        "{} upper cutoff {} Hz must exceed lower cutoff {} Hz",
                        self.kind.name(),
                        high_hz,
                        low_hz
                    )));
                }
            }
        }

        if self.kind.passes_nyquist() && self.order.is_multiple_of(2) {
            return Err(invalid(format!(
                "{} filter needs an odd order, got {}",
                self.kind.name(),
                self.order
            )));
        }

        Ok(())
    }

    /// Filter class with cutoffs as a fraction of the Nyquist frequency
    pub fn normalized(&self) -> NormalizedKind {
        let normalize = |hz: f64| 2.0 * hz / self.sample_rate;
        match self.kind {
            FilterKind::Lowpass { cutoff_hz } => NormalizedKind::Lowpass(normalize(cutoff_hz)),
            FilterKind::Highpass { cutoff_hz } => NormalizedKind::Highpass(normalize(cutoff_hz)),
            FilterKind::Bandpass { low_hz, high_hz } => {
                NormalizedKind::Bandpass(normalize(low_hz), normalize(high_hz))
            }
            FilterKind::Bandstop { low_hz, high_hz } => {
                NormalizedKind::Bandstop(normalize(low_hz), normalize(high_hz))
            }
        }
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FilterKind::Lowpass { cutoff_hz } | FilterKind::Highpass { cutoff_hz } => write!(
                f,
                "{} {} taps @ {} Hz, cutoff {} Hz",
                self.kind.name(),
                self.order,
                self.sample_rate,
                cutoff_hz
            ),
            FilterKind::Bandpass { low_hz, high_hz } | FilterKind::Bandstop { low_hz, high_hz } => {
                write!(
                    f,
                    "{} {} taps @ {} Hz, band {}-{} Hz",
                    self.kind.name(),
                    self.order,
                    self.sample_rate,
                    low_hz,
                    high_hz
                )
            }
        }
    }
}

fn invalid(msg: String) -> FirError {
    FirError::InvalidSpecification(msg)
}
