//! Command-line interface for extracting one tile from a patterned image

use crate::algorithm::executor::{AxisReport, Extraction, ExtractionConfig, TileExtractor};
use crate::algorithm::period::Metric;
use crate::algorithm::selection::SelectionPolicy;
use crate::io::configuration::{
    DEFAULT_INPUT, DEFAULT_OFFSET, DEFAULT_OUTPUT, DEFAULT_TOLERANCE_PERCENT, default_workers,
};
use crate::io::error::{Result, configuration_conflict};
use crate::io::image::{is_lossless_path, load_image, save_tile};
use crate::io::progress::ProgressManager;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Cost function used to compare shifted lines of a lossy image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LossyMetric {
    /// Squared distance between RGB colors
    #[default]
    ColorDistance,
    /// Absolute difference of luma values
    Luma,
}

impl From<LossyMetric> for Metric {
    fn from(metric: LossyMetric) -> Self {
        match metric {
            LossyMetric::ColorDistance => Self::ColorDistance,
            LossyMetric::Luma => Self::Luma,
        }
    }
}

#[derive(Parser)]
#[command(name = "tileex")]
#[command(
    author,
    version,
    about = "Infer the repeating tile of a patterned image and extract it"
)]
/// Command-line arguments for the tile extractor
// Each axis and each image-format hint needs its own switch
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image to analyze
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the extracted tile (always PNG)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Minimum share of rows, in percent, the row period must account for
    #[arg(long, default_value_t = DEFAULT_TOLERANCE_PERCENT)]
    pub row_tolerance: f64,

    /// Minimum share of columns, in percent, the column period must account for
    #[arg(long, default_value_t = DEFAULT_TOLERANCE_PERCENT)]
    pub col_tolerance: f64,

    /// Horizontal offset of the crop in pixels
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    pub x_offset: u32,

    /// Vertical offset of the crop in pixels
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    pub y_offset: u32,

    /// Maximum number of worker threads
    #[arg(short = 'j', long, visible_alias = "workers", default_value_t = default_workers())]
    pub number_of_processes: usize,

    /// Take the most frequent row period regardless of tolerance
    #[arg(long)]
    pub row_prefer_frequency: bool,

    /// Take the most frequent column period regardless of tolerance
    #[arg(long)]
    pub col_prefer_frequency: bool,

    /// Treat the input as lossy (compression noise expected)
    #[arg(long)]
    pub lossy: bool,

    /// Treat the input as lossless (exact color matching)
    #[arg(long)]
    pub lossless: bool,

    /// Line comparison used for lossy inputs
    #[arg(long, value_enum, default_value_t = LossyMetric::default())]
    pub lossy_metric: LossyMetric,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve the line-matching metric
    ///
    /// Explicit `--lossy` or `--lossless` wins; otherwise a `.png` input is
    /// treated as lossless and anything else as lossy.
    ///
    /// # Errors
    ///
    /// Returns an error if both `--lossy` and `--lossless` are set
    pub fn metric(&self) -> Result<Metric> {
        let lossless = match (self.lossy, self.lossless) {
            (true, true) => {
                return Err(configuration_conflict(
                    &"--lossy and --lossless cannot both be set",
                ));
            }
            (true, false) => false,
            (false, true) => true,
            (false, false) => is_lossless_path(&self.input),
        };

        Ok(if lossless {
            Metric::Exact
        } else {
            self.lossy_metric.into()
        })
    }

    /// Build the extraction configuration from the parsed arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the format flags conflict or a tolerance lies
    /// outside `0..=100` percent
    pub fn extraction_config(&self) -> Result<ExtractionConfig> {
        Ok(ExtractionConfig {
            metric: self.metric()?,
            rows: SelectionPolicy::from_percent(self.row_prefer_frequency, self.row_tolerance)?,
            columns: SelectionPolicy::from_percent(self.col_prefer_frequency, self.col_tolerance)?,
            offset_x: self.x_offset,
            offset_y: self.y_offset,
            workers: self.number_of_processes,
        })
    }
}

/// Loads the input, runs the extractor and writes the tile
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run one extraction according to the CLI arguments
    ///
    /// Configuration is validated before the input is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, the input cannot be
    /// decoded, the tile does not fit, or the output cannot be written
    pub fn process(&self) -> Result<Extraction> {
        let config = self.cli.extraction_config()?;
        let mut extractor = TileExtractor::new(config)?;
        if self.cli.should_show_progress() {
            extractor = extractor.with_progress(ProgressManager::new());
        }

        let image = load_image(&self.cli.input)?;
        let extraction = extractor.run(&image)?;
        save_tile(&extraction.tile, &self.cli.output)?;

        Ok(extraction)
    }
}

fn axis_lines(report: &AxisReport) -> [String; 2] {
    let label = report.axis.label();
    [
        format!(
            "{label} periodicity is {:.6} percent of total frequency.",
            report.selection.share_percent()
        ),
        format!("{label} Periodicity: {}", report.selection.period),
    ]
}

/// Lines printed after a successful run
pub fn report_lines(extraction: &Extraction) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);
    lines.extend(axis_lines(&extraction.rows));
    lines.extend(axis_lines(&extraction.columns));
    lines.push("Image cropped and saved successfully.".to_string());
    lines
}
