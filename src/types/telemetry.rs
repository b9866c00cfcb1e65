//! Telemetry DTO submitted to `/ingest`.
//!
//! The shape mirrors the inference service's ingest schema but is defined
//! independently here; integration tests against a mock server catch drift.
//! Events are point-in-time snapshots, constructed transiently for submission
//! and discarded once the round trip completes.

use serde::{Deserialize, Serialize};

/// One timestamped snapshot of physiological and environmental signals for a
/// single user.
///
/// `timestamp` is an RFC 3339 string; the service re-parses it server-side,
/// so no datetime type is imposed on callers. All signal fields are plain
/// `f64` readings with no cross-field invariants beyond `user_id` consistency
/// within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub user_id: String,
    pub timestamp: String,
    pub heart_rate: f64,
    pub hrv: f64,
    pub sleep_debt_hours: f64,
    pub screen_time_minutes: f64,
    pub calendar_load: f64,
    pub temperature_c: f64,
    pub barometric_pressure_hpa: f64,
    pub solar_pressure_index: f64,
    pub uv_index: f64,
    pub ambient_noise_db: f64,
    pub trigger_score: f64,
    pub migraine_probability: f64,
    #[serde(default = "default_weather_condition")]
    pub weather_condition: String,
}

fn default_weather_condition() -> String {
    "clear".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> TelemetryEvent {
        TelemetryEvent {
            user_id: "user_000".to_string(),
            timestamp: "2025-01-01T08:00:00Z".to_string(),
            heart_rate: 72.5,
            hrv: 61.0,
            sleep_debt_hours: 1.2,
            screen_time_minutes: 34.0,
            calendar_load: 0.8,
            temperature_c: 22.4,
            barometric_pressure_hpa: 1009.3,
            solar_pressure_index: 0.41,
            uv_index: 3.2,
            ambient_noise_db: 52.0,
            trigger_score: 0.37,
            migraine_probability: 0.12,
            weather_condition: "clear".to_string(),
        }
    }

    #[test]
    fn serializes_all_signal_fields() {
        let value = serde_json::to_value(event()).unwrap();
        assert_eq!(value["user_id"], "user_000");
        assert_eq!(value["heart_rate"], 72.5);
        assert_eq!(value["barometric_pressure_hpa"], 1009.3);
        assert_eq!(value["weather_condition"], "clear");
        assert_eq!(value.as_object().unwrap().len(), 15);
    }

    #[test]
    fn weather_condition_defaults_to_clear_when_absent() {
        let mut value = serde_json::to_value(event()).unwrap();
        value.as_object_mut().unwrap().remove("weather_condition");
        let parsed: TelemetryEvent = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.weather_condition, "clear");
    }

    #[test]
    fn round_trips_through_json() {
        let original = event();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: TelemetryEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
