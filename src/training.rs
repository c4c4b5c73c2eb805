//! Shared training base
//!
//! Every workout embeds a [`Training`] holding the fields common to all variants
//! and implements [`Workout`], which derives distance, mean speed and the report
//! from it. Variants override the step length, mean speed and calorie formula
//! where their physics differ.

use crate::error::TrackerError;
use crate::types::{InfoMessage, WorkoutKind};

/// Distance covered per unit of `action` (steps), in metres
pub const LEN_STEP: f64 = 0.65;
/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Fields shared by every workout
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    /// Steps or strokes recorded by the sensor
    pub action: u32,
    /// Duration (hours)
    pub duration: f64,
    /// Body weight (kg)
    pub weight: f64,
}

impl Training {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    /// Distance in km for a given step length
    pub fn distance(&self, step_length: f64) -> f64 {
        f64::from(self.action) * step_length / M_IN_KM
    }

    /// Duration in minutes
    pub fn minutes(&self) -> f64 {
        self.duration * MIN_IN_H
    }

    /// Divide a distance by the duration, failing on a zero duration
    pub fn per_hour(&self, kind: WorkoutKind, distance: f64) -> Result<f64, TrackerError> {
        if self.duration == 0.0 {
            return Err(TrackerError::DivisionFault {
                kind: kind.name().to_string(),
                divisor: "duration",
            });
        }
        Ok(distance / self.duration)
    }
}

/// Behaviour shared by every workout variant
pub trait Workout: std::fmt::Debug {
    /// Variant tag, used as the report label
    fn kind(&self) -> WorkoutKind;

    /// Embedded shared fields
    fn training(&self) -> &Training;

    /// Distance per unit of `action`, in metres
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance covered (km)
    fn get_distance(&self) -> f64 {
        self.training().distance(self.step_length())
    }

    /// Mean speed over the whole session (km/h)
    fn get_mean_speed(&self) -> Result<f64, TrackerError> {
        self.training().per_hour(self.kind(), self.get_distance())
    }

    /// Calories spent (kcal)
    ///
    /// Variants must override this; the base has no formula.
    fn get_spent_calories(&self) -> Result<f64, TrackerError> {
        Err(TrackerError::UnimplementedCalorieFormula(
            self.kind().name().to_string(),
        ))
    }

    /// Assemble the report snapshot
    fn show_training_info(&self) -> Result<InfoMessage, TrackerError> {
        Ok(InfoMessage::new(
            self.kind().name(),
            self.training().duration,
            self.get_distance(),
            self.get_mean_speed()?,
            self.get_spent_calories()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Variant that never registered a calorie formula
    #[derive(Debug)]
    struct Unfinished {
        training: Training,
    }

    impl Workout for Unfinished {
        fn kind(&self) -> WorkoutKind {
            WorkoutKind::Running
        }

        fn training(&self) -> &Training {
            &self.training
        }
    }

    #[test]
    fn test_base_distance_and_speed() {
        let workout = Unfinished {
            training: Training::new(15000, 1.5, 75.0),
        };

        assert!((workout.get_distance() - 9.75).abs() < 1e-12);
        assert!((workout.get_mean_speed().unwrap() - 6.5).abs() < 1e-12);
    }

    #[test]
    fn test_base_calories_unimplemented() {
        let workout = Unfinished {
            training: Training::new(100, 1.0, 70.0),
        };

        let err = workout.get_spent_calories().unwrap_err();
        assert!(matches!(err, TrackerError::UnimplementedCalorieFormula(ref name) if name == "Running"));
        assert!(workout.show_training_info().is_err());
    }

    #[test]
    fn test_zero_duration_is_division_fault() {
        let training = Training::new(1000, 0.0, 70.0);
        let err = training
            .per_hour(WorkoutKind::Running, training.distance(LEN_STEP))
            .unwrap_err();
        assert_eq!(err.kind(), "DivisionFault");
    }
}
