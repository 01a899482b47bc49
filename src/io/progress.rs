//! Progress display for the row and column scan phases

use crate::spatial::Axis;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>4} [{bar:40.cyan/blue}] {pos}/{len} lines {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per scan phase
///
/// Clones share the same display and phase list.
#[derive(Clone)]
pub struct ProgressManager {
    multi_progress: MultiProgress,
    phases: Arc<Mutex<Vec<ProgressBar>>>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            phases: Arc::default(),
        }
    }

    /// Add a bar tracking `lines` lines scanned along `axis`
    pub fn start_phase(&self, axis: Axis, lines: usize) -> ProgressBar {
        let bar = ProgressBar::new(lines as u64);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_prefix(axis.label());
        let bar = self.multi_progress.add(bar);
        self.lock_phases().push(bar.clone());
        bar
    }

    /// Phases started since the last [`finish`](Self::finish)
    pub fn active_phases(&self) -> usize {
        self.lock_phases().len()
    }

    /// Mark a phase as done, showing the period it settled on
    pub fn complete_phase(bar: &ProgressBar, period: usize) {
        bar.finish_with_message(format!("period {period}"));
    }

    /// Clear every bar, including phases that stopped part-way
    pub fn finish(&self) {
        for bar in self.lock_phases().drain(..) {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }

    fn lock_phases(&self) -> MutexGuard<'_, Vec<ProgressBar>> {
        self.phases.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
