//! Error types for the fitness tracker

use thiserror::Error;

use crate::pipeline::BatchReport;

/// Errors that can occur while dispatching or computing a workout
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Unknown workout type '{code}', expected one of: {valid}")]
    UnknownWorkoutType { code: String, valid: String },

    #[error("{kind} expects {expected} values, got {actual}")]
    ArgumentCountMismatch {
        kind: String,
        expected: usize,
        actual: usize,
    },

    #[error("Calorie formula is not implemented for {0}")]
    UnimplementedCalorieFormula(String),

    #[error("{kind} cannot be computed with a zero {divisor}")]
    DivisionFault { kind: String, divisor: &'static str },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: f64 },

    #[error("Failed to parse package: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Batch aborted at package {index}: {}", .source.descriptor())]
    BatchAborted {
        index: usize,
        source: Box<TrackerError>,
        /// Reports finished before the failing package
        completed: BatchReport,
    },
}

impl TrackerError {
    /// Short name of the error kind, used in descriptor lines
    pub fn kind(&self) -> &'static str {
        match self {
            TrackerError::UnknownWorkoutType { .. } => "UnknownWorkoutType",
            TrackerError::ArgumentCountMismatch { .. } => "ArgumentCountMismatch",
            TrackerError::UnimplementedCalorieFormula(_) => "UnimplementedCalorieFormula",
            TrackerError::DivisionFault { .. } => "DivisionFault",
            TrackerError::InvalidValue { .. } => "InvalidValue",
            TrackerError::ParseError(_) => "ParseError",
            TrackerError::JsonError(_) => "JsonError",
            TrackerError::BatchAborted { .. } => "BatchAborted",
        }
    }

    /// Render as `"{kind} was raised: {message}"`
    pub fn descriptor(&self) -> String {
        format!("{} was raised: {}", self.kind(), self)
    }
}
