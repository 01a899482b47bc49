//! End-to-end tile inference: scan both axes, select periods, crop

use crate::algorithm::frequency::FrequencyTable;
use crate::algorithm::period::Metric;
use crate::algorithm::scanner::LineScanner;
use crate::algorithm::selection::{Selection, SelectionPolicy, select_period};
use crate::io::configuration::{DEFAULT_OFFSET, default_workers};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::spatial::crop::extract_tile;
use crate::spatial::{Axis, SampleImage, TileSpec};
use image::DynamicImage;
use indicatif::ProgressBar;
use tracing::{debug, info, warn};

/// Parameters for one extraction run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionConfig {
    /// Line-matching metric used for every row and column
    pub metric: Metric,
    /// Selection rule for the row axis
    pub rows: SelectionPolicy,
    /// Selection rule for the column axis
    pub columns: SelectionPolicy,
    /// Left edge of the crop
    pub offset_x: u32,
    /// Top edge of the crop
    pub offset_y: u32,
    /// Upper bound on concurrent line scans
    pub workers: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            rows: SelectionPolicy::default(),
            columns: SelectionPolicy::default(),
            offset_x: DEFAULT_OFFSET,
            offset_y: DEFAULT_OFFSET,
            workers: default_workers(),
        }
    }
}

/// Outcome of scanning one axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisReport {
    /// Axis the lines ran along
    pub axis: Axis,
    /// Tally of per-line periods
    pub table: FrequencyTable,
    /// Period chosen from the tally
    pub selection: Selection,
}

/// Everything produced by a successful run
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Row scan results; the selected period is the tile width
    pub rows: AxisReport,
    /// Column scan results; the selected period is the tile height
    pub columns: AxisReport,
    /// Crop rectangle derived from both selections
    pub spec: TileSpec,
    /// The extracted tile
    pub tile: DynamicImage,
}

/// Drives the scan, selection and crop stages
pub struct TileExtractor {
    config: ExtractionConfig,
    scanner: LineScanner,
    progress: Option<ProgressManager>,
}

impl TileExtractor {
    /// Create an extractor and its worker pool
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be built
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        let scanner = LineScanner::new(config.workers)?;
        Ok(Self {
            config,
            scanner,
            progress: None,
        })
    }

    /// Show a progress bar for each scan phase
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressManager) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Configuration this extractor runs with
    pub const fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Infer the row and column periods of `image`
    ///
    /// Rows are scanned to completion before columns start.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis has no lines to scan
    pub fn detect_periods(&self, image: &SampleImage) -> Result<(AxisReport, AxisReport)> {
        let rows = self.scan_axis(image, Axis::Row, &self.config.rows)?;
        let columns = self.scan_axis(image, Axis::Column, &self.config.columns)?;
        Ok((rows, columns))
    }

    /// Infer the tile of `image` and cut it out
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image has no rows or columns
    /// - The tile rectangle at the configured offsets exceeds the image
    pub fn run(&self, image: &DynamicImage) -> Result<Extraction> {
        let outcome = self.extract(image);
        if let Some(progress) = &self.progress {
            progress.finish();
        }
        outcome
    }

    fn extract(&self, image: &DynamicImage) -> Result<Extraction> {
        let samples = image.to_rgba16();
        let (rows, columns) = self.detect_periods(&samples)?;

        let spec = TileSpec {
            row_period: rows.selection.period,
            col_period: columns.selection.period,
            offset_x: self.config.offset_x,
            offset_y: self.config.offset_y,
        };
        debug!(?spec, "cropping tile");
        let tile = extract_tile(image, &spec)?;

        Ok(Extraction {
            rows,
            columns,
            spec,
            tile,
        })
    }

    fn scan_axis(
        &self,
        image: &SampleImage,
        axis: Axis,
        policy: &SelectionPolicy,
    ) -> Result<AxisReport> {
        let lines = axis.line_count(image);
        debug!(
            axis = axis.label(),
            lines,
            workers = self.scanner.workers(),
            lossy = self.config.metric.is_lossy(),
            "scanning lines"
        );

        let bar = self
            .progress
            .as_ref()
            .map_or_else(ProgressBar::hidden, |progress| {
                progress.start_phase(axis, lines)
            });
        let periods = self.scanner.scan(image, axis, &self.config.metric, &bar)?;

        let table = FrequencyTable::from_periods(periods);
        let selection = select_period(&table, policy)?;
        ProgressManager::complete_phase(&bar, selection.period);

        if selection.met_tolerance {
            info!(
                axis = axis.label(),
                period = selection.period,
                share = selection.share_percent(),
                "selected period"
            );
        } else {
            warn!(
                axis = axis.label(),
                period = selection.period,
                share = selection.share_percent(),
                tolerance = policy.effective_tolerance() * 100.0,
                "no period met the tolerance; using the top-ranked period"
            );
        }

        Ok(AxisReport {
            axis,
            table,
            selection,
        })
    }
}
