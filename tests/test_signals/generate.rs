use std::f64::consts::PI;

/// Sine wave of `freq_hz` sampled at `sample_rate` for `num_samples` samples
pub fn sine(freq_hz: f64, sample_rate: f64, num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|i| (2.0 * PI * freq_hz * i as f64 / sample_rate).sin())
        .collect()
}

/// Sum of two equal-amplitude sines
pub fn two_tone(freq_a: f64, freq_b: f64, sample_rate: f64, num_samples: usize) -> Vec<f64> {
    sine(freq_a, sample_rate, num_samples)
        .into_iter()
        .zip(sine(freq_b, sample_rate, num_samples))
        .map(|(a, b)| a + b)
        .collect()
}

/// Unit impulse at index 0
pub fn impulse(num_samples: usize) -> Vec<f64> {
    let mut samples = vec![0.0; num_samples];
    if let Some(first) = samples.first_mut() {
        *first = 1.0;
    }
    samples
}
