//! Tank reading — the point-in-time payload one fetch cycle yields.
//!
//! The wire payload is loosely typed: every field is optional and nothing
//! is range-checked. Extraction is total, with missing or unusable fields
//! falling back to documented defaults so the render path can never fail.
//! A reading is created fresh on every successful fetch and discarded after
//! rendering; there is no caching and no diffing against the previous one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::status::TankStatus;
use crate::time::{self, Timestamp};

/// Device id substituted when the payload carries none.
pub const DEFAULT_DEVICE_ID: &str = "ESP32_Tank";

/// Status label substituted when the payload carries none.
pub const DEFAULT_STATUS_LABEL: &str = "Unknown";

/// One `{timestamp, level}` pair of the history series, newest-first on
/// the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Epoch milliseconds.
    pub timestamp: i64,
    /// Fill level percentage at that time.
    pub level: f64,
}

impl HistoryPoint {
    /// Extract a history point from a JSON value, defaulting missing or
    /// unusable fields to zero.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        Self {
            timestamp: value.get("timestamp").and_then(Value::as_i64).unwrap_or(0),
            level: value.get("level").and_then(Value::as_f64).unwrap_or(0.0),
        }
    }
}

/// A parsed tank status payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TankReading {
    /// Fill level percentage. Expected 0–100 but passed through verbatim;
    /// out-of-range values are not clamped.
    pub level: f64,
    /// Reported fill status label.
    pub status: TankStatus,
    /// Raw sensor distance in centimeters.
    pub distance: f64,
    /// Reporting device identifier.
    pub device: String,
    /// Time the reading was taken.
    pub timestamp: Timestamp,
    /// Recent level history, newest-first. Empty means no chart.
    pub history: Vec<HistoryPoint>,
}

impl TankReading {
    /// Create a builder for constructing a [`TankReading`].
    #[must_use]
    pub fn builder() -> TankReadingBuilder {
        TankReadingBuilder::default()
    }

    /// Extract a reading from a parsed JSON payload.
    ///
    /// Total function: any missing or unusable field takes its documented
    /// default (`level` 0, `status` "Unknown", `distance` 0, `device`
    /// [`DEFAULT_DEVICE_ID`], `timestamp` the current time, `history`
    /// empty). A payload that is not an object yields a fully defaulted
    /// reading.
    #[must_use]
    pub fn from_json(payload: &Value) -> Self {
        let status = payload
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_STATUS_LABEL);
        let timestamp = payload
            .get("timestamp")
            .and_then(Value::as_i64)
            .and_then(time::from_epoch_millis)
            .unwrap_or_else(time::now);
        let history = payload
            .get("history")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(HistoryPoint::from_json).collect())
            .unwrap_or_default();

        Self {
            level: payload.get("level").and_then(Value::as_f64).unwrap_or(0.0),
            status: TankStatus::parse(status),
            distance: payload.get("distance").and_then(Value::as_f64).unwrap_or(0.0),
            device: payload
                .get("device")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_DEVICE_ID)
                .to_string(),
            timestamp,
            history,
        }
    }

    /// History in chronological order, ready for charting.
    ///
    /// The wire order is newest-first; this reverses it (it does not sort).
    #[must_use]
    pub fn history_chronological(&self) -> Vec<HistoryPoint> {
        self.history.iter().rev().copied().collect()
    }

    /// Display text for the fill level, e.g. `"72%"`.
    #[must_use]
    pub fn level_text(&self) -> String {
        format!("{}%", format_number(self.level))
    }

    /// Display text for the sensor distance, e.g. `"34 cm"`.
    #[must_use]
    pub fn distance_text(&self) -> String {
        format!("{} cm", format_number(self.distance))
    }

    /// Display text for the reading time.
    #[must_use]
    pub fn timestamp_text(&self) -> String {
        time::format_reading_time(self.timestamp)
    }
}

/// Render a numeric value the way the wire sent it: integral values
/// without a trailing `.0`, everything else as-is.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Step-by-step builder for [`TankReading`].
#[derive(Debug, Default)]
pub struct TankReadingBuilder {
    level: Option<f64>,
    status: Option<TankStatus>,
    distance: Option<f64>,
    device: Option<String>,
    timestamp: Option<Timestamp>,
    history: Vec<HistoryPoint>,
}

impl TankReadingBuilder {
    #[must_use]
    pub fn level(mut self, level: f64) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn status(mut self, status: TankStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    #[must_use]
    pub fn device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn history_point(mut self, point: HistoryPoint) -> Self {
        self.history.push(point);
        self
    }

    #[must_use]
    pub fn history(mut self, history: Vec<HistoryPoint>) -> Self {
        self.history = history;
        self
    }

    /// Consume the builder and return a [`TankReading`], applying the same
    /// defaults as [`TankReading::from_json`].
    #[must_use]
    pub fn build(self) -> TankReading {
        TankReading {
            level: self.level.unwrap_or(0.0),
            status: self
                .status
                .unwrap_or_else(|| TankStatus::parse(DEFAULT_STATUS_LABEL)),
            distance: self.distance.unwrap_or(0.0),
            device: self.device.unwrap_or_else(|| DEFAULT_DEVICE_ID.to_string()),
            timestamp: self.timestamp.unwrap_or_else(time::now),
            history: self.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn should_default_every_field_for_empty_payload() {
        let before = time::now();
        let reading = TankReading::from_json(&json!({}));
        let after = time::now();

        assert_eq!(reading.level, 0.0);
        assert_eq!(reading.status, TankStatus::Other("Unknown".to_string()));
        assert_eq!(reading.distance, 0.0);
        assert_eq!(reading.device, DEFAULT_DEVICE_ID);
        assert!(reading.timestamp >= before && reading.timestamp <= after);
        assert!(reading.history.is_empty());
    }

    #[test]
    fn should_default_for_non_object_payload() {
        let reading = TankReading::from_json(&json!(null));
        assert_eq!(reading.level, 0.0);
        assert_eq!(reading.device, DEFAULT_DEVICE_ID);
    }

    #[test]
    fn should_extract_all_fields_when_present() {
        let payload = json!({
            "level": 72.5,
            "status": "full",
            "distance": 18.0,
            "device": "tank-01",
            "timestamp": 1_700_000_000_000_i64,
            "history": [{"timestamp": 1_700_000_000_000_i64, "level": 72.5}],
        });
        let reading = TankReading::from_json(&payload);

        assert_eq!(reading.level, 72.5);
        assert_eq!(reading.status, TankStatus::Full);
        assert_eq!(reading.distance, 18.0);
        assert_eq!(reading.device, "tank-01");
        assert_eq!(reading.timestamp.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(reading.history.len(), 1);
    }

    #[test]
    fn should_default_only_the_missing_fields() {
        let reading = TankReading::from_json(&json!({"level": 40, "device": "tank-02"}));
        assert_eq!(reading.level, 40.0);
        assert_eq!(reading.device, "tank-02");
        assert_eq!(reading.status, TankStatus::Other("Unknown".to_string()));
        assert_eq!(reading.distance, 0.0);
    }

    #[test]
    fn should_treat_wrong_typed_fields_as_missing() {
        let payload = json!({"level": "almost full", "distance": true, "device": 42});
        let reading = TankReading::from_json(&payload);
        assert_eq!(reading.level, 0.0);
        assert_eq!(reading.distance, 0.0);
        assert_eq!(reading.device, DEFAULT_DEVICE_ID);
    }

    #[test]
    fn should_pass_out_of_range_levels_through_unclamped() {
        assert_eq!(TankReading::from_json(&json!({"level": 120})).level, 120.0);
        assert_eq!(TankReading::from_json(&json!({"level": -5})).level, -5.0);
    }

    #[test]
    fn should_reverse_newest_first_history_to_chronological() {
        let t1 = 1_700_000_000_000_i64;
        let t2 = 1_700_000_060_000_i64;
        let payload = json!({
            "history": [
                {"timestamp": t2, "level": 80.0},
                {"timestamp": t1, "level": 20.0},
            ],
        });
        let reading = TankReading::from_json(&payload);

        let chronological = reading.history_chronological();
        assert_eq!(chronological[0].timestamp, t1);
        assert_eq!(chronological[0].level, 20.0);
        assert_eq!(chronological[1].timestamp, t2);
        assert_eq!(chronological[1].level, 80.0);
    }

    #[test]
    fn should_reverse_rather_than_sort_history() {
        // An out-of-order wire series stays out of order after reversal.
        let payload = json!({
            "history": [
                {"timestamp": 100, "level": 1.0},
                {"timestamp": 300, "level": 3.0},
                {"timestamp": 200, "level": 2.0},
            ],
        });
        let chronological = TankReading::from_json(&payload).history_chronological();
        let order: Vec<i64> = chronological.iter().map(|p| p.timestamp).collect();
        assert_eq!(order, vec![200, 300, 100]);
    }

    #[test]
    fn should_default_missing_history_point_fields_to_zero() {
        let payload = json!({"history": [{}, {"level": 55.0}]});
        let reading = TankReading::from_json(&payload);
        assert_eq!(reading.history[0], HistoryPoint { timestamp: 0, level: 0.0 });
        assert_eq!(reading.history[1], HistoryPoint { timestamp: 0, level: 55.0 });
    }

    #[test]
    fn should_format_integral_level_without_decimals() {
        let reading = TankReading::builder().level(50.0).build();
        assert_eq!(reading.level_text(), "50%");
    }

    #[test]
    fn should_format_fractional_level_as_is() {
        let reading = TankReading::builder().level(50.5).build();
        assert_eq!(reading.level_text(), "50.5%");
    }

    #[test]
    fn should_format_negative_level_unclamped() {
        let reading = TankReading::builder().level(-5.0).build();
        assert_eq!(reading.level_text(), "-5%");
    }

    #[test]
    fn should_format_distance_with_unit() {
        let reading = TankReading::builder().distance(34.0).build();
        assert_eq!(reading.distance_text(), "34 cm");
    }

    #[test]
    fn should_build_with_documented_defaults() {
        let reading = TankReading::builder().build();
        assert_eq!(reading.level, 0.0);
        assert_eq!(reading.status, TankStatus::Other("Unknown".to_string()));
        assert_eq!(reading.device, DEFAULT_DEVICE_ID);
        assert!(reading.history.is_empty());
    }

    #[test]
    fn should_build_with_all_fields() {
        let ts = time::from_epoch_millis(1_700_000_000_000).unwrap();
        let reading = TankReading::builder()
            .level(65.0)
            .status(TankStatus::Medium)
            .distance(40.0)
            .device("tank-03")
            .timestamp(ts)
            .history_point(HistoryPoint { timestamp: 1_700_000_000_000, level: 65.0 })
            .build();

        assert_eq!(reading.level, 65.0);
        assert_eq!(reading.status, TankStatus::Medium);
        assert_eq!(reading.distance, 40.0);
        assert_eq!(reading.device, "tank-03");
        assert_eq!(reading.timestamp, ts);
        assert_eq!(reading.history.len(), 1);
    }

    #[test]
    fn should_roundtrip_history_point_through_serde_json() {
        let point = HistoryPoint { timestamp: 1_700_000_000_000, level: 42.5 };
        let json = serde_json::to_string(&point).unwrap();
        let parsed: HistoryPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, point);
    }
}
