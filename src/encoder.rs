//! Report encoding
//!
//! This module wraps a workout report in a JSON envelope carrying producer
//! metadata and the time it was computed.

use crate::error::TrackerError;
use crate::types::{InfoMessage, ReportPayload, ReportProducer};
use crate::{PRODUCER_NAME, TRACKER_VERSION};
use chrono::Utc;
use uuid::Uuid;

/// Current report envelope version
pub const REPORT_VERSION: &str = "1.0.0";

/// Encoder for JSON workout reports
#[derive(Debug, Clone)]
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Encode a report snapshot into a payload
    pub fn encode(&self, info: &InfoMessage) -> ReportPayload {
        ReportPayload {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: TRACKER_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            training: info.clone(),
            message: info.get_message(),
        }
    }

    /// Encode to a compact JSON string
    pub fn encode_to_json(&self, info: &InfoMessage) -> Result<String, TrackerError> {
        serde_json::to_string(&self.encode(info)).map_err(TrackerError::JsonError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_info() -> InfoMessage {
        InfoMessage::new("Running", 1.5, 9.75, 6.5, 801.8325)
    }

    #[test]
    fn test_encode_payload() {
        let encoder = ReportEncoder::with_instance_id("test-instance".to_string());
        let payload = encoder.encode(&sample_info());

        assert_eq!(payload.report_version, REPORT_VERSION);
        assert_eq!(payload.producer.name, PRODUCER_NAME);
        assert_eq!(payload.producer.instance_id, "test-instance");
        assert_eq!(payload.training, sample_info());
        assert_eq!(payload.message, sample_info().get_message());
        assert!(chrono::DateTime::parse_from_rfc3339(&payload.computed_at_utc).is_ok());
    }

    #[test]
    fn test_encode_to_json() {
        let encoder = ReportEncoder::new();
        let json = encoder.encode_to_json(&sample_info()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["training"]["training_type"], "Running");
        assert_eq!(value["training"]["distance"], 9.75);
        assert_eq!(value["producer"]["instance_id"], encoder.instance_id());
    }

    #[test]
    fn test_instance_ids_are_unique() {
        assert_ne!(
            ReportEncoder::new().instance_id(),
            ReportEncoder::new().instance_id()
        );
    }
}
