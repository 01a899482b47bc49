//! Parallel per-line period detection over one image axis

use crate::algorithm::period::PeriodDetector;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::spatial::line::{Axis, SampleImage, sample_line};
use indicatif::ProgressBar;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Runs a detector over every line of an axis on a bounded worker pool
///
/// Each line is an independent task that reads the shared image and writes
/// only its own result slot. A scan returns once every line has finished.
pub struct LineScanner {
    pool: ThreadPool,
}

impl LineScanner {
    /// Create a scanner limited to `workers` threads
    ///
    /// # Errors
    ///
    /// Returns an error if `workers` is zero or the thread pool cannot be
    /// started
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(invalid_parameter(
                "workers",
                &workers,
                &"at least one worker is required",
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("tileex-scan-{index}"))
            .build()
            .map_err(|e| computation_error("thread pool construction", &e))?;

        Ok(Self { pool })
    }

    /// Number of worker threads in the pool
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Detect the period of every line on `axis`
    ///
    /// The result holds one period per line, indexed by line position.
    /// `progress` is advanced once per finished line.
    ///
    /// # Errors
    ///
    /// Returns an error if a line cannot be sampled
    pub fn scan<D>(
        &self,
        image: &SampleImage,
        axis: Axis,
        detector: &D,
        progress: &ProgressBar,
    ) -> Result<Vec<usize>>
    where
        D: PeriodDetector + ?Sized,
    {
        let count = axis.line_count(image);
        self.pool.install(|| {
            (0..count)
                .into_par_iter()
                .map(|index| {
                    let line = sample_line(image, axis, index)?;
                    let period = detector.detect(&line);
                    progress.inc(1);
                    Ok(period)
                })
                .collect()
        })
    }
}
