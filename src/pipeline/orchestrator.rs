// file: src/pipeline/orchestrator.rs
// description: coordinates scanning, decoding, extraction, and aggregation for a batch of files
// reference: parallel extraction with a single writer into the aggregate store

use crate::config::Config;
use crate::error::{ExtractError, Result};
use crate::ingest::{
    DecoderRegistry, FileScanner, LoadedFile, LoadedFileRegistry, ScannedFile, file_identity,
};
use crate::models::{Category, Document};
use crate::pipeline::processor::{Extraction, ReportProcessor};
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::store::AggregateStore;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

/// A file that could not be turned into text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub loaded: Vec<LoadedFile>,
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
    pub new_entries: usize,
    pub stats: PipelineStats,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

struct FileOutcome {
    path: PathBuf,
    identity: String,
    bytes: u64,
    extractions: Vec<Extraction>,
}

pub struct PipelineOrchestrator {
    config: Config,
    decoders: Arc<DecoderRegistry>,
    processor: Arc<ReportProcessor>,
    store: AggregateStore,
    registry: LoadedFileRegistry,
    max_concurrent_tasks: usize,
    show_progress: bool,
}

impl PipelineOrchestrator {
    pub fn new(config: Config) -> Self {
        Self::with_decoders(config, DecoderRegistry::default())
    }

    pub fn with_decoders(config: Config, decoders: DecoderRegistry) -> Self {
        let processor = Arc::new(ReportProcessor::new(&config.extraction));
        let max_concurrent_tasks = config.ingest.parallel_workers.max(1);

        Self {
            config,
            decoders: Arc::new(decoders),
            processor,
            store: AggregateStore::new(),
            registry: LoadedFileRegistry::new(),
            max_concurrent_tasks,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &AggregateStore {
        &self.store
    }

    pub fn registry(&self) -> &LoadedFileRegistry {
        &self.registry
    }

    /// Empties the aggregate store and forgets every loaded file.
    pub fn clear(&mut self) {
        info!("Clearing aggregate store and loaded-file registry");
        self.store.clear();
        self.registry.clear();
    }

    /// Extracts one already-decoded document straight into the store.
    /// Returns the number of entries that were new.
    pub fn ingest_document(&mut self, document: &Document) -> usize {
        let extraction = self.processor.process(document);
        self.store.apply(extraction.iter())
    }

    /// Decodes and extracts every input in parallel, then applies the
    /// results to the store one file at a time. Per-file errors are
    /// collected in the report; any other error aborts the batch before
    /// the store is touched.
    pub async fn run(&mut self, inputs: &[PathBuf]) -> Result<BatchReport> {
        info!("Starting extraction batch over {} input path(s)", inputs.len());

        let scanner = FileScanner::new(self.config.ingest.clone());
        let scan_inputs = inputs.to_vec();
        let scanned = tokio::task::spawn_blocking(move || scanner.scan_paths(&scan_inputs))
            .await
            .map_err(|e| ExtractError::Validation(format!("File scanning task failed: {}", e)))?;

        let (files, skipped) = self.partition_new(scanned);
        let mut report = BatchReport {
            skipped,
            ..BatchReport::default()
        };

        if files.is_empty() {
            warn!("No new files to process");
            return Ok(report);
        }

        let progress = Arc::new(if self.show_progress {
            ProgressTracker::new(files.len())
        } else {
            ProgressTracker::hidden(files.len())
        });

        info!(
            "Processing {} file(s) with {} concurrent tasks...",
            files.len(),
            self.max_concurrent_tasks
        );
        let outcomes = self.process_files(files, progress.clone()).await?;

        for outcome in outcomes {
            match outcome {
                Ok(outcome) => {
                    progress.status(format!("Aggregating {}", outcome.path.display()));
                    report.new_entries += self.apply_outcome(&outcome, &progress);
                    if self.registry.register(&outcome.path, outcome.identity.clone()) {
                        report.loaded.push(LoadedFile {
                            path: outcome.path,
                            identity: outcome.identity,
                        });
                    }
                }
                Err(failure) => report.failures.push(failure),
            }
        }

        report.loaded.sort_by(|a, b| a.path.cmp(&b.path));
        report.failures.sort_by(|a, b| a.path.cmp(&b.path));
        progress.finish();
        report.stats = progress.stats();

        self.log_final_stats(&report);
        Ok(report)
    }

    fn partition_new(&self, scanned: Vec<ScannedFile>) -> (Vec<ScannedFile>, Vec<PathBuf>) {
        let mut seen = HashSet::new();
        let mut files = Vec::new();
        let mut skipped = Vec::new();

        for file in scanned {
            let key = LoadedFileRegistry::key_for(&file.path);
            if self.registry.contains(&file.path) || !seen.insert(key) {
                info!("Already loaded, skipping: {}", file.path.display());
                skipped.push(file.path);
            } else {
                files.push(file);
            }
        }

        (files, skipped)
    }

    async fn process_files(
        &self,
        files: Vec<ScannedFile>,
        progress: Arc<ProgressTracker>,
    ) -> Result<Vec<std::result::Result<FileOutcome, FileFailure>>> {
        let tasks = files.into_iter().map(|file| {
            let decoders = self.decoders.clone();
            let processor = self.processor.clone();
            let progress = progress.clone();

            async move {
                let path = file.path.clone();
                let processed = tokio::task::spawn_blocking(move || {
                    process_file(&decoders, &processor, &file.path)
                })
                .await;

                match processed {
                    Ok(Ok(outcome)) => {
                        progress.file_done(outcome.bytes);
                        Ok(Ok(outcome))
                    }
                    Ok(Err(e)) if e.is_per_file() => {
                        progress.file_failed();
                        warn!("Failed to process file {}: {}", path.display(), e);
                        Ok(Err(FileFailure {
                            path,
                            message: e.to_string(),
                        }))
                    }
                    Ok(Err(e)) => {
                        progress.file_failed();
                        error!("Aborting batch at {}: {}", path.display(), e);
                        Err(e)
                    }
                    Err(e) => {
                        progress.file_failed();
                        error!("Processing task panicked: {}", e);
                        Ok(Err(FileFailure {
                            path,
                            message: format!("processing task failed: {}", e),
                        }))
                    }
                }
            }
        });

        stream::iter(tasks)
            .buffer_unordered(self.max_concurrent_tasks)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect()
    }

    fn apply_outcome(&mut self, outcome: &FileOutcome, progress: &ProgressTracker) -> usize {
        let mut new_entries = 0;
        for extraction in &outcome.extractions {
            let added = self.store.apply(extraction.iter());
            progress.document_applied(extraction.len(), added);
            new_entries += added;
        }

        let counts = self
            .store
            .counts()
            .iter()
            .map(|(category, count)| format!("{}={}", category, count))
            .collect::<Vec<_>>()
            .join(" ");
        info!(
            "Loaded {} ({} new entries): {}",
            outcome.path.display(),
            new_entries,
            counts
        );
        new_entries
    }

    fn log_final_stats(&self, report: &BatchReport) {
        let stats = &report.stats;
        info!("=== Extraction Summary ===");
        info!("Duration: {:.2} seconds", stats.elapsed.as_secs_f64());
        info!("Files processed: {}", stats.files_processed);
        info!("Files failed: {}", stats.files_failed);
        info!("Files skipped: {}", report.skipped.len());
        info!("Success rate: {:.2}%", stats.success_rate());
        info!(
            "Throughput: {:.2} files/s, {:.0} bytes/s",
            stats.files_per_second(),
            stats.bytes_per_second()
        );
        info!("Documents extracted: {}", stats.documents_extracted);
        info!("Occurrences found: {}", stats.occurrences_extracted);
        info!(
            "New entries: {} ({:.1}% of occurrences)",
            report.new_entries,
            stats.novelty_rate()
        );

        let counts: BTreeMap<Category, usize> = self.store.counts();
        for (category, count) in counts {
            info!("  {}: {}", category, count);
        }

        for failure in &report.failures {
            warn!("  failed: {} ({})", failure.path.display(), failure.message);
        }
        info!("==========================");
    }
}

fn process_file(
    decoders: &DecoderRegistry,
    processor: &ReportProcessor,
    path: &Path,
) -> Result<FileOutcome> {
    info!("Processing {}", path.display());
    let identity = file_identity(path)?;
    let documents = decoders.decode(path)?;

    let bytes = documents.iter().map(Document::byte_len).sum();
    let extractions = documents.iter().map(|doc| processor.process(doc)).collect();

    Ok(FileOutcome {
        path: path.to_path_buf(),
        identity,
        bytes,
        extractions,
    })
}
