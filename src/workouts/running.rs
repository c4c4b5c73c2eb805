//! Running

use super::whole_number;
use crate::error::TrackerError;
use crate::training::{Training, Workout, M_IN_KM};
use crate::types::WorkoutKind;

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// Running workout: `[action, duration, weight]`
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub training: Training,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            training: Training::new(action, duration, weight),
        }
    }

    /// Bind `[action, duration, weight]`
    pub fn from_values(values: &[f64]) -> Result<Self, TrackerError> {
        match *values {
            [action, duration, weight] => {
                Ok(Self::new(whole_number("action", action)?, duration, weight))
            }
            _ => Err(TrackerError::ArgumentCountMismatch {
                kind: WorkoutKind::Running.name().to_string(),
                expected: WorkoutKind::Running.field_count(),
                actual: values.len(),
            }),
        }
    }
}

impl Workout for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn get_spent_calories(&self) -> Result<f64, TrackerError> {
        let mean_speed = self.get_mean_speed()?;
        Ok(
            (CALORIES_MEAN_SPEED_MULTIPLIER * mean_speed + CALORIES_MEAN_SPEED_SHIFT)
                * self.training.weight
                / M_IN_KM
                * self.training.minutes(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_running_metrics() {
        let run = Running::new(15000, 1.5, 75.0);

        // 15000 * 0.65 / 1000
        assert!((run.get_distance() - 9.75).abs() < 1e-12);
        assert!((run.get_mean_speed().unwrap() - 6.5).abs() < 1e-12);
        // (18 * 6.5 + 1.79) * 75 / 1000 * 90
        assert!((run.get_spent_calories().unwrap() - 801.8325).abs() < 1e-9);
    }

    #[test]
    fn test_running_message() {
        let info = Running::new(15000, 1.5, 75.0).show_training_info().unwrap();
        assert_eq!(
            info.get_message(),
            "Тип тренировки: Running; Длительность: 1.500 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 6.500 км/ч; Потрачено ккал: 801.832."
        );
    }

    #[test]
    fn test_from_values() {
        let run = Running::from_values(&[15000.0, 1.5, 75.0]).unwrap();
        assert_eq!(run, Running::new(15000, 1.5, 75.0));

        let err = Running::from_values(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::ArgumentCountMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_duration() {
        let run = Running::new(15000, 0.0, 75.0);
        assert_eq!(run.get_spent_calories().unwrap_err().kind(), "DivisionFault");
    }
}
