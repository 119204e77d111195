// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
mod processor;
mod progress;

pub use orchestrator::{BatchReport, FileFailure, PipelineOrchestrator};
pub use processor::{Extraction, ReportProcessor};
pub use progress::{PipelineStats, ProgressTracker};
