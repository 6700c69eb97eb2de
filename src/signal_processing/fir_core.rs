use crate::signal_processing::Coefficients;

/// Causal direct-form FIR convolution with zero initial state
///
/// `y[n] = Σ h[i]·x[n-i]` for `i` in `0..=min(n, N-1)`. The output always has
/// the same length as `input`; the first `N-1` samples are the warm-up region
/// where fewer taps contribute.
///
/// # Example
/// ```
/// use easyfir::apply;
///
/// let y = apply(&[0.5, 0.5], &[1.0, 1.0, 1.0]);
/// assert_eq!(y, vec![0.5, 1.0, 1.0]);
/// ```
pub fn apply(coefficients: &[f64], input: &[f64]) -> Vec<f64> {
    if coefficients.is_empty() && !input.is_empty() {
        log::warn!("Applying an empty coefficient vector; output is all zeros");
    }
    log::trace!(
        "Convolving {} samples with {} taps",
        input.len(),
        coefficients.len()
    );

    (0..input.len())
        .map(|n| {
            // Reversed input window ending at n, truncated to the tap count.
            let history = input[..=n].iter().rev();
            coefficients
                .iter()
                .zip(history)
                .map(|(&h, &x)| h * x)
                .sum::<f64>()
        })
        .collect()
}

/// Streaming FIR filter
///
/// Holds the delay line between calls so a signal can be filtered in
/// arbitrary chunks. A fresh filter fed a whole signal produces the same
/// output as [`apply`].
pub struct FirFilter {
    coefficients: Coefficients,
    delay_line: Vec<f64>,
    pos: usize,
}

impl FirFilter {
    /// Create a new filter with zeroed state
    pub fn new(coefficients: Coefficients) -> Self {
        Self {
            delay_line: vec![0.0; coefficients.num_taps()],
            coefficients,
            pos: 0,
        }
    }

    /// Process a single sample through the filter
    pub fn process(&mut self, sample: f64) -> f64 {
        let taps = self.coefficients.taps();
        let n = taps.len();
        if n == 0 {
            return 0.0;
        }

        self.delay_line[self.pos] = sample;

        let mut output = 0.0f64;

        // Iterate the ring buffer in two contiguous reverse ranges to avoid
        // modulo arithmetic in the inner convolution loop.
        let mut tap_i = 0usize;
        for delay_idx in (0..=self.pos).rev() {
            output += taps[tap_i] * self.delay_line[delay_idx];
            tap_i += 1;
        }
        for delay_idx in ((self.pos + 1)..n).rev() {
            output += taps[tap_i] * self.delay_line[delay_idx];
            tap_i += 1;
        }
        debug_assert_eq!(tap_i, n);

        self.pos += 1;
        if self.pos == n {
            self.pos = 0;
        }
        output
    }

    /// Process an entire buffer of samples in-place
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clear the delay line
    pub fn reset(&mut self) {
        self.delay_line.fill(0.0);
        self.pos = 0;
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }
}
