use super::Formatter;
use crate::error::Result;
use crate::signal_processing::ResponsePoint;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, point: &ResponsePoint) -> Result<String> {
        // Non-finite fields serialize as null; the rest of the row is kept.
        Ok(serde_json::to_string(point)?)
    }
}
