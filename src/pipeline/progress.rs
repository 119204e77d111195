// file: src/pipeline/progress.rs
// description: batch counters, throughput figures and the optional terminal progress display
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

const COLOR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}";
const PLAIN_TEMPLATE: &str = "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} files {msg}";

/// Totals for one extraction batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub documents_extracted: usize,
    pub occurrences_extracted: usize,
    pub new_entries: usize,
    pub total_bytes_processed: u64,
    pub elapsed: Duration,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    fn per_second(&self, amount: f64) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 { amount / secs } else { 0.0 }
    }

    pub fn files_per_second(&self) -> f64 {
        self.per_second(self.files_processed as f64)
    }

    pub fn bytes_per_second(&self) -> f64 {
        self.per_second(self.total_bytes_processed as f64)
    }

    /// Percentage of attempted files that decoded.
    pub fn success_rate(&self) -> f64 {
        match self.files_processed + self.files_failed {
            0 => 0.0,
            attempted => self.files_processed as f64 * 100.0 / attempted as f64,
        }
    }

    /// Share of sightings that added something the store did not hold yet.
    pub fn novelty_rate(&self) -> f64 {
        match self.occurrences_extracted {
            0 => 0.0,
            found => self.new_entries as f64 * 100.0 / found as f64,
        }
    }
}

#[derive(Default)]
struct BatchCounters {
    processed: AtomicUsize,
    failed: AtomicUsize,
    documents: AtomicUsize,
    occurrences: AtomicUsize,
    new_entries: AtomicUsize,
    bytes: AtomicU64,
}

impl BatchCounters {
    fn snapshot(&self, elapsed: Duration) -> PipelineStats {
        PipelineStats {
            files_processed: self.processed.load(Ordering::Relaxed),
            files_failed: self.failed.load(Ordering::Relaxed),
            documents_extracted: self.documents.load(Ordering::Relaxed),
            occurrences_extracted: self.occurrences.load(Ordering::Relaxed),
            new_entries: self.new_entries.load(Ordering::Relaxed),
            total_bytes_processed: self.bytes.load(Ordering::Relaxed),
            elapsed,
        }
    }
}

/// Shared between decoding tasks. Counting always happens; drawing only
/// when the tracker was built with a visible target.
pub struct ProgressTracker {
    files_bar: ProgressBar,
    status_line: ProgressBar,
    counters: BatchCounters,
    started: Instant,
}

impl ProgressTracker {
    pub fn new(total_files: usize) -> Self {
        Self::with_color(total_files, true)
    }

    pub fn with_color(total_files: usize, colored: bool) -> Self {
        Self::build(MultiProgress::new(), total_files, colored)
    }

    /// Tracker that counts but never draws; used by tests and quiet runs.
    pub fn hidden(total_files: usize) -> Self {
        Self::build(
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            total_files,
            false,
        )
    }

    fn build(multi: MultiProgress, total_files: usize, colored: bool) -> Self {
        let template = if colored { COLOR_TEMPLATE } else { PLAIN_TEMPLATE };
        let files_bar = styled_bar(&multi, total_files as u64, template);
        if colored {
            files_bar.set_style(files_bar.style().progress_chars("█▓▒░"));
        }

        Self {
            files_bar,
            status_line: styled_bar(&multi, 0, "{msg}"),
            counters: BatchCounters::default(),
            started: Instant::now(),
        }
    }

    /// A file decoded; `bytes` is the size of its extracted text.
    pub fn file_done(&self, bytes: u64) {
        self.counters.processed.fetch_add(1, Ordering::Relaxed);
        self.counters.bytes.fetch_add(bytes, Ordering::Relaxed);
        self.advance();
    }

    pub fn file_failed(&self) {
        self.counters.failed.fetch_add(1, Ordering::Relaxed);
        self.advance();
    }

    /// One document merged into the store.
    pub fn document_applied(&self, occurrences: usize, new_entries: usize) {
        self.counters.documents.fetch_add(1, Ordering::Relaxed);
        self.counters
            .occurrences
            .fetch_add(occurrences, Ordering::Relaxed);
        self.counters
            .new_entries
            .fetch_add(new_entries, Ordering::Relaxed);
    }

    pub fn status(&self, message: impl Into<String>) {
        self.status_line.set_message(message.into());
    }

    pub fn finish(&self) {
        let stats = self.stats();
        self.files_bar.finish_with_message(format!(
            "done, {} new entries ({:.1} files/s)",
            stats.new_entries,
            stats.files_per_second()
        ));
        self.status_line.finish_and_clear();
    }

    pub fn stats(&self) -> PipelineStats {
        self.counters.snapshot(self.started.elapsed())
    }

    fn advance(&self) {
        self.files_bar.inc(1);
        let failed = self.counters.failed.load(Ordering::Relaxed);
        if failed > 0 {
            self.files_bar.set_message(format!("({failed} failed)"));
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        if !self.files_bar.is_finished() {
            self.files_bar.abandon();
        }
        self.status_line.finish_and_clear();
    }
}

fn styled_bar(multi: &MultiProgress, len: u64, template: &str) -> ProgressBar {
    let bar = multi.add(ProgressBar::new(len));
    bar.set_style(
        ProgressStyle::default_bar()
            .template(template)
            .expect("progress template is valid"),
    );
    bar
}
