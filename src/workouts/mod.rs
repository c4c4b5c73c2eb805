//! Workout variants
//!
//! Each variant embeds a [`Training`](crate::training::Training) and supplies its
//! own calorie formula. `from_values` binds raw sensor values positionally, in
//! the order given by [`WorkoutKind::field_names`](crate::types::WorkoutKind::field_names).

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::error::TrackerError;

/// Convert a raw value into a count, rejecting negatives, fractions and non-finite values
pub(crate) fn whole_number(field: &str, value: f64) -> Result<u32, TrackerError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(TrackerError::InvalidValue {
            field: field.to_string(),
            value,
        });
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number() {
        assert_eq!(whole_number("action", 15000.0).unwrap(), 15000);
        assert_eq!(whole_number("action", 0.0).unwrap(), 0);
        assert!(whole_number("action", -1.0).is_err());
        assert!(whole_number("action", 1.5).is_err());
        assert!(whole_number("action", f64::NAN).is_err());
        assert!(whole_number("action", f64::INFINITY).is_err());
    }
}
