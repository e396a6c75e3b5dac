//! Command-line interface for pruning text lines and printing masks

use crate::algorithm::mask::{
    CurveParameters, expected_keep_count, generate_mask, validate_size,
};
use crate::algorithm::prune::prune;
use crate::io::configuration::{DEFAULT_FACTOR, DEFAULT_SCALE, STDIO_PATH};
use crate::io::error::{Result, file_system_error};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ditherprune")]
#[command(
    author,
    version,
    about = "Subsample sequences along a density curve using error diffusion"
)]
/// Command-line arguments for the pruning tool
pub struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Net verbosity: `--verbose` count minus `--quiet` count
    pub fn verbosity(&self) -> i16 {
        i16::from(self.verbose) - i16::from(self.quiet)
    }
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Keep a dithered subset of input lines, preserving their order
    Prune {
        /// Input file, one item per line (stdin when omitted or "-")
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output file for the kept lines (stdout when omitted or "-")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Density curve settings
        #[command(flatten)]
        curve: CurveArgs,
    },

    /// Print the keep/drop mask for a number of positions as 0/1 digits
    Mask {
        /// Number of positions to classify
        #[arg(value_name = "SIZE", allow_negative_numbers = true)]
        size: i64,

        /// Density curve settings
        #[command(flatten)]
        curve: CurveArgs,
    },
}

/// Density curve settings shared by all operations
#[derive(Args, Debug, Clone, Copy)]
pub struct CurveArgs {
    /// Curve steepness; 0 is linear, positive favours the end, negative the start
    #[arg(
        short = 'c',
        long = "curve",
        default_value_t = DEFAULT_FACTOR,
        allow_negative_numbers = true
    )]
    pub factor: f64,

    /// Overall retention density multiplier
    #[arg(short, long, default_value_t = DEFAULT_SCALE, allow_negative_numbers = true)]
    pub scale: f64,
}

impl CurveArgs {
    /// Curve parameters described by these arguments
    pub const fn parameters(&self) -> CurveParameters {
        CurveParameters::new(self.factor, self.scale)
    }
}

/// Outcome of pruning one input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PruneSummary {
    /// Number of input lines
    pub total: usize,
    /// Number of lines written out
    pub kept: usize,
    /// Keep count the accumulated density called for
    pub expected: f64,
}

/// Executes the parsed command against the filesystem and standard streams
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the curve parameters or size are invalid, or if
    /// reading input or writing output fails
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Prune {
                input,
                output,
                curve,
            } => {
                let params = curve.parameters();
                params.validate()?;

                let input_label = stream_label(input.as_deref(), "<stdin>");
                let output_label = stream_label(output.as_deref(), "<stdout>");
                let reader = open_input(input.as_deref())?;
                let writer = open_output(output.as_deref())?;

                let summary = prune_lines(reader, writer, &params, &input_label, &output_label)?;
                info!(
                    total = summary.total,
                    kept = summary.kept,
                    expected = summary.expected,
                    "Pruned {}",
                    input_label.display()
                );
                Ok(())
            }
            Command::Mask { size, curve } => {
                let writer = std::io::stdout().lock();
                let kept = write_mask(*size, &curve.parameters(), writer, Path::new("<stdout>"))?;
                info!(size, kept, "Generated mask");
                Ok(())
            }
        }
    }
}

/// Read every line from `reader` and write the kept ones to `writer`
///
/// The labels name the streams in error messages.
///
/// # Errors
///
/// Returns an error if the curve parameters are invalid or either stream fails
pub fn prune_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    params: &CurveParameters,
    input_label: &Path,
    output_label: &Path,
) -> Result<PruneSummary> {
    params.validate()?;

    let lines = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|source| file_system_error(input_label, "read", source))?;
    let total = lines.len();

    let mut kept = 0;
    for line in prune(lines, params)? {
        writeln!(writer, "{line}")
            .map_err(|source| file_system_error(output_label, "write", source))?;
        kept += 1;
    }
    writer
        .flush()
        .map_err(|source| file_system_error(output_label, "flush", source))?;

    Ok(PruneSummary {
        total,
        kept,
        expected: expected_keep_count(total, params),
    })
}

/// Write the mask for `size` positions as a line of `0`/`1` digits
///
/// Returns the number of kept positions.
///
/// # Errors
///
/// Returns an error if the size is negative, the curve parameters are
/// invalid, or writing fails
pub fn write_mask<W: Write>(
    size: i64,
    params: &CurveParameters,
    mut writer: W,
    output_label: &Path,
) -> Result<usize> {
    let size = validate_size(size)?;
    let digits: String = generate_mask(size, params)?
        .map(|keep| if keep { '1' } else { '0' })
        .collect();
    let kept = digits.bytes().filter(|&digit| digit == b'1').count();

    writeln!(writer, "{digits}")
        .and_then(|()| writer.flush())
        .map_err(|source| file_system_error(output_label, "write", source))?;

    Ok(kept)
}

fn file_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| *p != Path::new(STDIO_PATH))
}

fn stream_label(path: Option<&Path>, stdio_name: &str) -> PathBuf {
    file_path(path).map_or_else(|| PathBuf::from(stdio_name), Path::to_path_buf)
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match file_path(path) {
        Some(p) => {
            let file = File::open(p).map_err(|source| file_system_error(p, "open", source))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(std::io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match file_path(path) {
        Some(p) => {
            let file = File::create(p).map_err(|source| file_system_error(p, "create", source))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}
