use super::Formatter;
use crate::error::Result;
use crate::signal_processing::ResponsePoint;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, point: &ResponsePoint) -> Result<String> {
        Ok(format!(
            "{:>10.2} Hz  {:>8.2} dB  (|H| {:.6}, phase {:>7.3} rad)",
            point.frequency_hz, point.magnitude_db, point.magnitude, point.phase
        ))
    }
}
