mod csv;
mod json;
mod text;
mod wav;

use std::io::Write;

use crate::error::Result;
use crate::signal_processing::{Coefficients, ResponsePoint};

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;
pub use self::wav::save_wav;

/// Rendering of frequency response tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

pub trait Formatter {
    fn format(&self, point: &ResponsePoint) -> Result<String>;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Write a response table, one row per line, preceded by the format's header
pub fn write_response<W: Write>(
    writer: &mut W,
    points: &[ResponsePoint],
    format: OutputFormat,
) -> Result<()> {
    let formatter = create_formatter(format);
    if let Some(header) = formatter.header() {
        writeln!(writer, "{}", header)?;
    }
    for point in points {
        writeln!(writer, "{}", formatter.format(point)?)?;
    }
    Ok(())
}

/// Write coefficients as a single brace-delimited literal array line
pub fn write_coefficients<W: Write>(writer: &mut W, coefficients: &Coefficients) -> Result<()> {
    writeln!(writer, "{}", coefficients)?;
    Ok(())
}

/// Write samples one per line
pub fn write_samples<W: Write>(writer: &mut W, samples: &[f64]) -> Result<()> {
    for sample in samples {
        writeln!(writer, "{}", sample)?;
    }
    Ok(())
}
