//! Typed payloads for the spider's read and control endpoints.
//!
//! Every field of the status report is independently optional: the server
//! only includes what it currently knows, and an absent field means "leave
//! that panel region alone".

use serde::Deserialize;
use std::collections::BTreeMap;

/// Response shape of `GET /data/server`.
///
/// Host-count maps keep raw JSON values because the server has been observed
/// to emit non-numeric placeholders; filtering happens at render time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerStatusReport {
    /// Seconds since the server process started.
    pub running_time: Option<f64>,
    /// Estimated USD per month at the current usage rate.
    pub cost: Option<f64>,
    /// Server-formatted timestamp, displayed verbatim.
    pub current_timestamp: Option<String>,
    pub paused: Option<bool>,
    pub pending_requests_by_host: Option<BTreeMap<String, serde_json::Value>>,
    pub active_requests_by_host: Option<BTreeMap<String, serde_json::Value>>,
    pub active_requests: Option<u64>,
    pub pending_requests: Option<u64>,
    /// OS load averages as pre-formatted strings.
    pub load_avg: Option<Vec<String>>,
}

/// One entry of `GET /data/exposed_function_details`.
///
/// The wire shape is a 2-element array `[name, descriptor]`; entry order and
/// argument order are preserved.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "(String, FunctionDescriptor)")]
pub struct ExposedFunction {
    pub name: String,
    pub descriptor: FunctionDescriptor,
}

impl From<(String, FunctionDescriptor)> for ExposedFunction {
    fn from((name, descriptor): (String, FunctionDescriptor)) -> Self {
        Self { name, descriptor }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionDescriptor {
    /// Polling interval in seconds.
    pub interval: f64,
    #[serde(default)]
    pub required_arguments: Vec<String>,
    #[serde(default)]
    pub optional_arguments: Vec<String>,
}

/// Control endpoints answer either a bare JSON `true` or an error object
/// with a reason and a server-side traceback.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ControlResponse {
    Ack(bool),
    Failure {
        error: String,
        traceback: Option<String>,
    },
}

/// A stored reservation as returned by `show_reservation`: attribute name
/// to value, shape decided entirely by the exposed function that created it.
pub type ReservationRecord = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_report_all_fields_optional() {
        let report: ServerStatusReport = serde_json::from_str("{}").unwrap();
        assert!(report.running_time.is_none());
        assert!(report.paused.is_none());
        assert!(report.pending_requests_by_host.is_none());
    }

    #[test]
    fn status_report_partial_payload() {
        let report: ServerStatusReport =
            serde_json::from_str(r#"{"paused": true, "running_time": 120.5}"#).unwrap();
        assert_eq!(report.paused, Some(true));
        assert_eq!(report.running_time, Some(120.5));
        assert!(report.cost.is_none());
    }

    #[test]
    fn status_report_host_maps_keep_raw_values() {
        let report: ServerStatusReport = serde_json::from_str(
            r#"{"pending_requests_by_host": {"a.com": 3, "b.com": "soon"}}"#,
        )
        .unwrap();
        let hosts = report.pending_requests_by_host.unwrap();
        assert_eq!(hosts.get("a.com").and_then(|v| v.as_i64()), Some(3));
        assert!(hosts.get("b.com").unwrap().is_string());
    }

    #[test]
    fn exposed_function_from_pair_array() {
        let payload = r#"[
            ["fetch_feed", {"interval": 3600, "required_arguments": ["url"], "optional_arguments": []}],
            ["ping", {"interval": 60.5, "required_arguments": [], "optional_arguments": ["timeout"]}]
        ]"#;
        let functions: Vec<ExposedFunction> = serde_json::from_str(payload).unwrap();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].name, "fetch_feed");
        assert_eq!(functions[0].descriptor.required_arguments, vec!["url"]);
        assert_eq!(functions[1].descriptor.interval, 60.5);
        assert_eq!(functions[1].descriptor.optional_arguments, vec!["timeout"]);
    }

    #[test]
    fn control_response_ack() {
        let resp: ControlResponse = serde_json::from_str("true").unwrap();
        assert!(matches!(resp, ControlResponse::Ack(true)));
    }

    #[test]
    fn control_response_failure() {
        let resp: ControlResponse = serde_json::from_str(
            r#"{"error": "Parameter UUID is required.", "traceback": "Traceback..."}"#,
        )
        .unwrap();
        match resp {
            ControlResponse::Failure { error, traceback } => {
                assert_eq!(error, "Parameter UUID is required.");
                assert!(traceback.unwrap().starts_with("Traceback"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
