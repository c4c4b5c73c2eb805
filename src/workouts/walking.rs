//! Sports walking

use super::whole_number;
use crate::error::TrackerError;
use crate::training::{Training, Workout};
use crate::types::WorkoutKind;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
/// km/h to m/s, rounded to three digits
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

/// Sports walking workout: `[action, duration, weight, height]`
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub training: Training,
    /// Height (cm)
    pub height: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            training: Training::new(action, duration, weight),
            height,
        }
    }

    /// Bind `[action, duration, weight, height]`
    pub fn from_values(values: &[f64]) -> Result<Self, TrackerError> {
        match *values {
            [action, duration, weight, height] => Ok(Self::new(
                whole_number("action", action)?,
                duration,
                weight,
                height,
            )),
            _ => Err(TrackerError::ArgumentCountMismatch {
                kind: WorkoutKind::SportsWalking.name().to_string(),
                expected: WorkoutKind::SportsWalking.field_count(),
                actual: values.len(),
            }),
        }
    }
}

impl Workout for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn get_spent_calories(&self) -> Result<f64, TrackerError> {
        let speed_ms = self.get_mean_speed()? * KMH_IN_MSEC;
        if self.height == 0.0 {
            return Err(TrackerError::DivisionFault {
                kind: self.kind().name().to_string(),
                divisor: "height",
            });
        }
        let height_m = self.height / CM_IN_M;
        let weight = self.training.weight;

        Ok((CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_ms.powi(2) / height_m) * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.training.minutes())
    }
}
