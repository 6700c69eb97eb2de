pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod output;
pub mod signal_processing;

pub use config::{FilterConfig, FilterType};
pub use error::{FirError, Result};
pub use signal_processing::{
    Coefficients, FilterKind, FilterSpec, FirFilter, apply, design, frequency_response,
};
