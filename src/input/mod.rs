//! Sample sources feeding the convolution engine.

mod csv;
mod wav;

use std::path::Path;

use crate::error::Result;

pub use self::csv::{load_csv_samples, parse_csv_samples};
pub use self::wav::load_wav_samples;

/// Load a sample sequence, choosing the reader from the file extension
///
/// `.wav` files are decoded with hound; anything else is read as
/// line-delimited numeric text.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let is_wav = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));

    let samples = if is_wav {
        load_wav_samples(path)?
    } else {
        load_csv_samples(path)?
    };
    log::info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
