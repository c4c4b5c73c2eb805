//! Pipeline orchestration
//!
//! This module provides the public API for running sensor packages end to end:
//! dispatch → compute → report. Packages are processed sequentially and reported
//! in input order.

use serde::Serialize;
use tracing::{debug, warn};

use crate::dispatcher::read_package;
use crate::encoder::ReportEncoder;
use crate::error::TrackerError;
use crate::package::Package;
use crate::types::InfoMessage;

/// Compute the report snapshot for a single package
pub fn training_info(workout_type: &str, data: &[f64]) -> Result<InfoMessage, TrackerError> {
    read_package(workout_type, data)?.show_training_info()
}

/// Compute and format the report line for a single package.
///
/// # Example
/// ```
/// let line = fitness_tracker::report_message("RUN", &[15000.0, 1.5, 75.0]).unwrap();
/// assert!(line.starts_with("Тип тренировки: Running;"));
/// ```
pub fn report_message(workout_type: &str, data: &[f64]) -> Result<String, TrackerError> {
    Ok(training_info(workout_type, data)?.get_message())
}

/// What to do when a package fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Stop at the first failing package
    #[default]
    Abort,
    /// Record the failure and carry on with the next package
    Continue,
}

/// Outcome of one package
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchEntry {
    Report { index: usize, info: InfoMessage },
    Failed { index: usize, descriptor: String },
}

impl BatchEntry {
    /// Text line for this entry: the report message or the error descriptor
    pub fn line(&self) -> String {
        match self {
            BatchEntry::Report { info, .. } => info.get_message(),
            BatchEntry::Failed { descriptor, .. } => descriptor.clone(),
        }
    }
}

/// Result of a processed batch, in input order
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub processed: usize,
    pub failed: usize,
}

impl BatchReport {
    /// One text line per package
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(BatchEntry::line).collect()
    }
}

/// Batch processor for package streams
#[derive(Debug, Default)]
pub struct BatchProcessor {
    policy: BatchPolicy,
    encoder: ReportEncoder,
}

impl BatchProcessor {
    /// Create a processor with the default (abort) policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with a specific failure policy
    pub fn with_policy(policy: BatchPolicy) -> Self {
        Self {
            policy,
            encoder: ReportEncoder::new(),
        }
    }

    pub fn encoder(&self) -> &ReportEncoder {
        &self.encoder
    }

    /// Process packages in order.
    ///
    /// Under [`BatchPolicy::Abort`] the first failure is returned as
    /// [`TrackerError::BatchAborted`], carrying the reports completed before it;
    /// under [`BatchPolicy::Continue`] it is recorded in the report.
    pub fn process(&self, packages: &[Package]) -> Result<BatchReport, TrackerError> {
        let mut report = BatchReport::default();

        for (index, package) in packages.iter().enumerate() {
            match training_info(&package.workout_type, &package.data) {
                Ok(info) => {
                    report.processed += 1;
                    report.entries.push(BatchEntry::Report { index, info });
                }
                Err(e) => match self.policy {
                    BatchPolicy::Abort => {
                        return Err(TrackerError::BatchAborted {
                            index,
                            source: Box::new(e),
                            completed: report,
                        });
                    }
                    BatchPolicy::Continue => {
                        let descriptor = e.descriptor();
                        warn!(index, %descriptor, "package skipped");
                        report.failed += 1;
                        report.entries.push(BatchEntry::Failed { index, descriptor });
                    }
                },
            }
        }

        debug!(
            processed = report.processed,
            failed = report.failed,
            "batch complete"
        );
        Ok(report)
    }
}
