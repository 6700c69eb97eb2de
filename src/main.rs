use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use easyfir::config::{FilterConfig, FilterType};
use easyfir::constants::DEFAULT_RESPONSE_POINTS;
use easyfir::input::load_samples;
use easyfir::output::{OutputFormat, save_wav, write_coefficients, write_response, write_samples};
use easyfir::{apply, design, frequency_response};

#[derive(Parser, Debug)]
#[command(name = "easyfir")]
#[command(about = "Design a Hamming-window FIR filter and apply it to a signal", long_about = None)]
struct Args {
    /// Input samples (CSV/text with one value per line, or WAV)
    input: Option<PathBuf>,

    /// TOML filter configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filter type
    #[arg(short = 't', long = "type", value_enum)]
    filter_type: Option<FilterType>,

    /// Number of coefficients
    #[arg(short = 'n', long)]
    order: Option<usize>,

    /// Sample rate in Hz
    #[arg(short = 'r', long)]
    sample_rate: Option<f64>,

    /// Cutoff frequency in Hz (lower band edge for bandpass/bandstop)
    #[arg(long)]
    cutoff1: Option<f64>,

    /// Upper band edge in Hz (bandpass/bandstop)
    #[arg(long)]
    cutoff2: Option<f64>,

    /// Write filtered samples here (.wav or text); defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the frequency response table to this file
    #[arg(long)]
    response: Option<PathBuf>,

    /// Frequency response format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Number of frequency response points
    #[arg(long, default_value_t = DEFAULT_RESPONSE_POINTS)]
    points: usize,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = build_config(&args)?;
    log::info!("Filter configuration: {:?}", config);

    let spec = config.to_spec().context("Invalid filter parameters")?;
    let coefficients = design(&spec).context("Filter design failed")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_coefficients(&mut out, &coefficients)?;

    if let Some(ref path) = args.response {
        let points = frequency_response(&coefficients, spec.sample_rate, args.points);
        let mut file = create_file(path)?;
        write_response(&mut file, &points, args.format)?;
        file.flush()?;
        log::info!("Wrote {} response points to {}", points.len(), path.display());
    }

    if let Some(ref input) = args.input {
        let samples = load_samples(input)
            .with_context(|| format!("Failed to read samples from {}", input.display()))?;
        let filtered = apply(&coefficients, &samples);

        match args.output {
            Some(ref path) if is_wav(path) => {
                let sample_rate = wav_sample_rate(spec.sample_rate)?;
                save_wav(path, &filtered, sample_rate)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            Some(ref path) => {
                let mut file = create_file(path)?;
                write_samples(&mut file, &filtered)?;
                file.flush()?;
            }
            None => write_samples(&mut out, &filtered)?,
        }
        log::info!("Filtered {} samples", filtered.len());
    }

    out.flush()?;
    Ok(())
}

fn build_config(args: &Args) -> anyhow::Result<FilterConfig> {
    let mut config = match args.config {
        Some(ref path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    };

    if let Some(filter_type) = args.filter_type {
        config.filter_type = filter_type;
    }
    if let Some(order) = args.order {
        config.filter_order = order;
    }
    if let Some(sample_rate) = args.sample_rate {
        config.sampling_frequency = sample_rate;
    }
    if let Some(cutoff) = args.cutoff1 {
        config.cutoff_frequency_1 = cutoff;
    }
    if let Some(cutoff) = args.cutoff2 {
        config.cutoff_frequency_2 = Some(cutoff);
    }

    Ok(config)
}

fn create_file(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// WAV headers carry an integer rate, so only whole rates that fit are written
fn wav_sample_rate(sample_rate: f64) -> anyhow::Result<u32> {
    if sample_rate.fract() != 0.0 || sample_rate < 1.0 || sample_rate > u32::MAX as f64 {
        anyhow::bail!(
            "Sample rate {} Hz cannot be stored in a WAV header; write a text file instead",
            sample_rate
        );
    }
    Ok(sample_rate as u32)
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_sample_rate_accepts_whole_rates() {
        assert_eq!(wav_sample_rate(800.0).unwrap(), 800);
        assert_eq!(wav_sample_rate(48_000.0).unwrap(), 48_000);
    }

    #[test]
    fn test_wav_sample_rate_rejects_fractional_and_oversized() {
        assert!(wav_sample_rate(44_100.5).is_err());
        assert!(wav_sample_rate(1e12).is_err());
        assert!(wav_sample_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_is_wav_extension() {
        assert!(is_wav(Path::new("out.WAV")));
        assert!(!is_wav(Path::new("out.txt")));
    }
}
