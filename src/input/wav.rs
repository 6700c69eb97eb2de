use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::WavReader;

use crate::error::Result;

/// Read the first channel of a WAV file as samples in [-1, 1)
///
/// Integer formats are scaled by their full-scale value.
pub fn load_wav_samples<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();
    if spec.channels > 1 {
        log::info!(
            "WAV file has {} channels, using the first",
            spec.channels
        );
    }

    let interleaved = read_samples(reader, &spec)?;
    let channels = spec.channels.max(1) as usize;
    Ok(interleaved.into_iter().step_by(channels).collect())
}

fn read_samples(mut reader: WavReader<BufReader<File>>, spec: &hound::WavSpec) -> Result<Vec<f64>> {
    let samples = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            let max_val = 2_i64.pow(spec.bits_per_sample as u32 - 1) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };
    Ok(samples)
}
