//! Progress display for batch chart rendering

use std::path::Path;
use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Charts: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks rendering progress across a set of pattern files
///
/// Small batches are reported file by file through the log; larger ones get a
/// progress bar.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    file_count: usize,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle progress manager
    pub const fn new() -> Self {
        Self {
            bar: None,
            file_count: 0,
            completed: 0,
        }
    }

    /// Prepare for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;
        self.completed = 0;
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let bar = ProgressBar::with_draw_target(
                Some(file_count as u64),
                ProgressDrawTarget::stderr(),
            );
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Whether a progress bar is shown for this batch
    pub const fn is_batched(&self) -> bool {
        self.bar.is_some()
    }

    /// Number of files completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Announce the file being rendered
    pub fn start_file(&self, path: &Path) {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
        } else {
            log::info!(
                "[{}/{}] rendering {name}",
                self.completed + 1,
                self.file_count
            );
        }
    }

    /// Mark the current file as done
    pub fn complete_file(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("all charts rendered");
        }
    }
}
