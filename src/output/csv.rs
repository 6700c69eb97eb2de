use super::Formatter;
use crate::error::Result;
use crate::signal_processing::ResponsePoint;

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, point: &ResponsePoint) -> Result<String> {
        Ok(format!(
            "{:.6},{:.12},{:.6},{:.6}",
            point.frequency_hz, point.magnitude, point.magnitude_db, point.phase
        ))
    }

    fn header(&self) -> Option<&'static str> {
        Some("frequency_hz,magnitude,magnitude_db,phase")
    }
}
