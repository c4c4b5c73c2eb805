//! Swimming

use super::whole_number;
use crate::error::TrackerError;
use crate::training::{Training, Workout, M_IN_KM};
use crate::types::WorkoutKind;

/// Distance covered per stroke, in metres
const LEN_STROKE: f64 = 1.38;
const SWIMMING_MEAN_SPEED_MULTIPLIER: f64 = 2.0;
const SWIMMING_MEAN_SPEED_SHIFT: f64 = 1.1;

/// Swimming workout: `[action, duration, weight, length_pool, count_pool]`
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub training: Training,
    /// Pool length (m)
    pub length_pool: u32,
    /// Number of pool lengths swum
    pub count_pool: u32,
}

impl Swimming {
    pub fn new(action: u32, duration: f64, weight: f64, length_pool: u32, count_pool: u32) -> Self {
        Self {
            training: Training::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }

    /// Bind `[action, duration, weight, length_pool, count_pool]`
    pub fn from_values(values: &[f64]) -> Result<Self, TrackerError> {
        match *values {
            [action, duration, weight, length_pool, count_pool] => Ok(Self::new(
                whole_number("action", action)?,
                duration,
                weight,
                whole_number("length_pool", length_pool)?,
                whole_number("count_pool", count_pool)?,
            )),
            _ => Err(TrackerError::ArgumentCountMismatch {
                kind: WorkoutKind::Swimming.name().to_string(),
                expected: WorkoutKind::Swimming.field_count(),
                actual: values.len(),
            }),
        }
    }

    /// Pool distance (km)
    fn pool_distance(&self) -> f64 {
        (f64::from(self.length_pool) * f64::from(self.count_pool)) / M_IN_KM
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    // Pool lengths, not strokes
    fn get_mean_speed(&self) -> Result<f64, TrackerError> {
        self.training.per_hour(self.kind(), self.pool_distance())
    }

    fn get_spent_calories(&self) -> Result<f64, TrackerError> {
        Ok(
            (self.get_mean_speed()? + SWIMMING_MEAN_SPEED_SHIFT)
                * SWIMMING_MEAN_SPEED_MULTIPLIER
                * self.training.weight
                * self.training.duration,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_swimming_metrics() {
        let swim = Swimming::new(720, 1.5, 80.0, 25, 40);

        // 720 * 1.38 / 1000
        assert!((swim.get_distance() - 0.9936).abs() < 1e-12);
        // 25 * 40 / 1000 / 1.5
        assert!((swim.get_mean_speed().unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((swim.get_spent_calories().unwrap() - 424.0).abs() < 1e-9);
    }

    #[test]
    fn test_swimming_message() {
        let info = Swimming::new(720, 1.5, 80.0, 25, 40)
            .show_training_info()
            .unwrap();
        assert_eq!(
            info.get_message(),
            "Тип тренировки: Swimming; Длительность: 1.500 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 0.667 км/ч; Потрачено ккал: 424.000."
        );
    }

    #[test]
    fn test_speed_ignores_strokes() {
        let few = Swimming::new(10, 1.0, 70.0, 50, 20);
        let many = Swimming::new(10_000, 1.0, 70.0, 50, 20);
        assert_eq!(few.get_mean_speed().unwrap(), many.get_mean_speed().unwrap());
    }

    #[test]
    fn test_from_values_rejects_fractional_pool() {
        let err = Swimming::from_values(&[720.0, 1.5, 80.0, 25.5, 40.0]).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidValue { ref field, .. } if field == "length_pool"));
    }
}
