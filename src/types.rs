//! Core types for the fitness tracker
//!
//! This module defines the workout tag used for dispatch and labelling, the
//! per-workout report snapshot, and the JSON report envelope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Workout variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// All workout kinds, in the order their codes are listed
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Sensor package code
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label shown in reports
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of raw values a package of this kind must carry
    pub fn field_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Field names in positional order
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutKind::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }

    /// Comma-separated list of every recognised code
    pub fn valid_codes() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkoutKind {
    type Err = TrackerError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            "SWM" => Ok(WorkoutKind::Swimming),
            _ => Err(TrackerError::UnknownWorkoutType {
                code: code.to_string(),
                valid: Self::valid_codes(),
            }),
        }
    }
}

/// Report snapshot for a single workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Workout label (e.g. "Running")
    pub training_type: String,
    /// Duration (hours)
    pub duration: f64,
    /// Distance (km)
    pub distance: f64,
    /// Mean speed (km/h)
    pub speed: f64,
    /// Calories spent (kcal)
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Human-readable report line
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// JSON report envelope for a single workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPayload {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub training: InfoMessage,
    /// Same text as `InfoMessage::get_message`
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_code_round_trip() {
        for kind in WorkoutKind::ALL {
            assert_eq!(kind.code().parse::<WorkoutKind>().unwrap(), kind);
            assert_eq!(kind.field_names().len(), kind.field_count());
        }
    }

    #[test]
    fn test_unknown_code_lists_valid_codes() {
        let err = "XYZ".parse::<WorkoutKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown workout type 'XYZ', expected one of: SWM, RUN, WLK"
        );
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!("run".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn test_message_template() {
        let info = InfoMessage::new("Running", 1.5, 9.75, 6.5, 801.8325);
        assert_eq!(
            info.get_message(),
            "Тип тренировки: Running; Длительность: 1.500 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 6.500 км/ч; Потрачено ккал: 801.832."
        );
    }

    #[test]
    fn test_message_is_stable() {
        let info = InfoMessage::new("Swimming", 1.5, 0.9936, 0.6667, 424.0);
        assert_eq!(info.get_message(), info.get_message());
    }
}
