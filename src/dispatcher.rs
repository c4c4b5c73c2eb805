//! Sensor package dispatch
//!
//! Maps a workout-type code to the matching variant and binds the raw values to
//! its fields. Either a complete workout is returned or an error; nothing is
//! half-built.

use tracing::debug;

use crate::error::TrackerError;
use crate::training::Workout;
use crate::types::WorkoutKind;
use crate::workouts::{Running, SportsWalking, Swimming};

/// Build the workout described by a sensor package.
///
/// # Arguments
/// * `workout_type` - Package code (`SWM`, `RUN` or `WLK`)
/// * `data` - Raw values in the variant's declared field order
///
/// # Example
/// ```
/// use fitness_tracker::{read_package, Workout};
///
/// let training = read_package("RUN", &[15000.0, 1.5, 75.0]).unwrap();
/// assert_eq!(training.get_distance(), 9.75);
/// ```
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Workout>, TrackerError> {
    let kind: WorkoutKind = workout_type.parse()?;
    let workout = build(kind, data)?;
    debug!(code = workout_type, kind = %kind, "package dispatched");
    Ok(workout)
}

/// Construct a workout of a known kind from positional values
///
/// Each variant's `from_values` checks the value count.
pub fn build(kind: WorkoutKind, data: &[f64]) -> Result<Box<dyn Workout>, TrackerError> {
    let workout: Box<dyn Workout> = match kind {
        WorkoutKind::Running => Box::new(Running::from_values(data)?),
        WorkoutKind::SportsWalking => Box::new(SportsWalking::from_values(data)?),
        WorkoutKind::Swimming => Box::new(Swimming::from_values(data)?),
    };
    Ok(workout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_running_package() {
        let training = read_package("RUN", &[15000.0, 1.5, 75.0]).unwrap();

        assert_eq!(training.kind(), WorkoutKind::Running);
        assert_eq!(training.training().action, 15000);
        assert_eq!(training.training().duration, 1.5);
        assert_eq!(training.training().weight, 75.0);
    }

    #[test]
    fn test_read_each_kind() {
        let swim = read_package("SWM", &[720.0, 1.5, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(swim.kind(), WorkoutKind::Swimming);

        let walk = read_package("WLK", &[9000.0, 1.5, 75.0, 180.0]).unwrap();
        assert_eq!(walk.kind(), WorkoutKind::SportsWalking);
    }

    #[test]
    fn test_unknown_workout_type() {
        let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        match err {
            TrackerError::UnknownWorkoutType { code, valid } => {
                assert_eq!(code, "XYZ");
                assert_eq!(valid, "SWM, RUN, WLK");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_argument_count_mismatch() {
        let err = read_package("RUN", &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err.descriptor(),
            "ArgumentCountMismatch was raised: Running expects 3 values, got 2"
        );

        let err = read_package("SWM", &[720.0, 1.5, 80.0, 25.0, 40.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::ArgumentCountMismatch {
                expected: 5,
                actual: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_build_reports_count_per_kind() {
        for kind in WorkoutKind::ALL {
            let err = build(kind, &[]).unwrap_err();
            match err {
                TrackerError::ArgumentCountMismatch {
                    kind: name,
                    expected,
                    actual,
                } => {
                    assert_eq!(name, kind.name());
                    assert_eq!(expected, kind.field_count());
                    assert_eq!(actual, 0);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_action_rejected() {
        let err = read_package("RUN", &[-5.0, 1.5, 75.0]).unwrap_err();
        assert_eq!(err.kind(), "InvalidValue");
    }

    #[test]
    fn test_show_info_does_not_mutate() {
        let training = read_package("WLK", &[9000.0, 1.5, 75.0, 180.0]).unwrap();
        let first = training.show_training_info().unwrap().get_message();
        let second = training.show_training_info().unwrap().get_message();
        assert_eq!(first, second);
    }
}
