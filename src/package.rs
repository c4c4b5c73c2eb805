//! Sensor packages
//!
//! A package is one `(workout-type code, raw values)` pair as delivered by the
//! tracker. Packages arrive either as a JSON array or as NDJSON, one per line.

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Raw sensor package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Workout code (`SWM`, `RUN`, `WLK`)
    pub workout_type: String,
    /// Raw values in the variant's field order
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Reader for package streams
pub struct PackageReader;

impl PackageReader {
    /// Parse a JSON string containing an array of packages
    pub fn parse_array(json: &str) -> Result<Vec<Package>, TrackerError> {
        let packages: Vec<Package> = serde_json::from_str(json)?;
        Ok(packages)
    }

    /// Parse NDJSON (newline-delimited JSON) containing packages
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<Package>, TrackerError> {
        let mut packages = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<Package>(trimmed) {
                Ok(package) => packages.push(package),
                Err(e) => {
                    return Err(TrackerError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(packages)
    }
}

/// Demo batch: one package of each workout kind
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.5, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.5, 75.0]),
        Package::new("WLK", vec![9000.0, 1.5, 75.0, 180.0]),
    ]
}
