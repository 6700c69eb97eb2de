//! Filter design parameters.
//!
//! ## File format
//!
//! Parameters can be loaded from a TOML file using the same five settings
//! as the command line:
//!
//! ```toml
//! filter_type = "bandpass"     # lowpass, highpass, bandpass, bandstop
//! filter_order = 300           # number of coefficients
//! sampling_frequency = 800.0   # Hz
//! cutoff_frequency_1 = 40.0    # Hz
//! cutoff_frequency_2 = 60.0    # Hz, bandpass/bandstop only
//! ```
//!
//! Missing keys fall back to [`FilterConfig::default()`].

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FirError, Result};
use crate::signal_processing::{FilterKind, FilterSpec};

/// Filter class as named in configuration files and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Lowpass,
    Highpass,
    Bandpass,
    Bandstop,
}

impl FilterType {
    /// Whether this class needs a second cutoff frequency
    pub fn is_band(&self) -> bool {
        matches!(self, Self::Bandpass | Self::Bandstop)
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lowpass => "lowpass",
            Self::Highpass => "highpass",
            Self::Bandpass => "bandpass",
            Self::Bandstop => "bandstop",
        };
        f.write_str(name)
    }
}

/// Flat filter design parameters
///
/// # Example
/// ```
/// use easyfir::config::{FilterConfig, FilterType};
///
/// let mut config = FilterConfig::default();
/// config.filter_type = FilterType::Lowpass;
/// config.filter_order = 5;
/// let spec = config.to_spec().unwrap();
/// assert_eq!(spec.order, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Filter class
    pub filter_type: FilterType,
    /// Number of coefficients
    pub filter_order: usize,
    /// Sample rate in Hz
    pub sampling_frequency: f64,
    /// Cutoff frequency in Hz (lower band edge for bandpass/bandstop)
    pub cutoff_frequency_1: f64,
    /// Upper band edge in Hz, only used by bandpass/bandstop
    pub cutoff_frequency_2: Option<f64>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            filter_type: FilterType::Bandpass,
            filter_order: 300,
            sampling_frequency: 800.0,
            cutoff_frequency_1: 40.0,
            cutoff_frequency_2: Some(60.0),
        }
    }
}

impl FilterConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FirError::Config(e.to_string()))
    }

    /// Load a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Build and validate the filter specification
    ///
    /// # Errors
    /// Returns `FirError::Config` if a two-cutoff class has no second cutoff,
    /// and `FirError::InvalidSpecification` if the parameters are out of range
    pub fn to_spec(&self) -> Result<FilterSpec> {
        let kind = match self.filter_type {
            FilterType::Lowpass => FilterKind::Lowpass {
                cutoff_hz: self.cutoff_frequency_1,
            },
            FilterType::Highpass => FilterKind::Highpass {
                cutoff_hz: self.cutoff_frequency_1,
            },
            FilterType::Bandpass => FilterKind::Bandpass {
                low_hz: self.cutoff_frequency_1,
                high_hz: self.second_cutoff()?,
            },
            FilterType::Bandstop => FilterKind::Bandstop {
                low_hz: self.cutoff_frequency_1,
                high_hz: self.second_cutoff()?,
            },
        };
        FilterSpec::new(kind, self.filter_order, self.sampling_frequency)
    }

    fn second_cutoff(&self) -> Result<f64> {
        self.cutoff_frequency_2.ok_or_else(|| {
            FirError::Config(format!(
                "{} filter requires cutoff_frequency_2",
                self.filter_type
            ))
        })
    }
}
