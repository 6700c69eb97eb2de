/// RMS of `signal` after skipping the first `skip` samples
pub fn rms(signal: &[f64], skip: usize) -> f64 {
    let tail = &signal[skip.min(signal.len())..];
    if tail.is_empty() {
        return 0.0;
    }
    (tail.iter().map(|x| x * x).sum::<f64>() / tail.len() as f64).sqrt()
}

/// Output/input RMS ratio in dB, ignoring the filter warm-up region
pub fn attenuation_db(input: &[f64], output: &[f64], skip: usize) -> f64 {
    20.0 * (rms(output, skip) / rms(input, skip)).log10()
}
