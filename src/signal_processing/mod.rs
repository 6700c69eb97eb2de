pub mod coefficients;
pub mod fir_core;
pub mod fir_design;
pub mod response;
pub mod spec;
pub mod window;

pub use coefficients::Coefficients;
pub use fir_core::{FirFilter, apply};
pub use fir_design::design;
pub use response::{ResponsePoint, amplitude_response, frequency_response, response_at};
pub use spec::{FilterKind, FilterSpec, NormalizedKind};
