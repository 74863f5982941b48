//! Blocking HTTP client for a remote engine deployment.
//!
//! Every transport failure (connect, timeout, non-2xx) is wrapped into a
//! uniform `{status: "error", error: "Failed to <operation>: <detail>"}`
//! value instead of propagating — callers check the `status` field. The
//! fixed 30-second timeout is the only resilience mechanism; there are no
//! retries and no backoff.

use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::warn;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct EngineClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl EngineClient {
    pub fn new(base_url: impl Into<String>) -> Option<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .ok()?;
        Some(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn post<T: Serialize + ?Sized>(&self, path: &str, operation: &str, body: &T) -> Value {
        let url = format!("{}{}", self.base_url, path);
        let wrap = |detail: String| {
            warn!(operation, error = %detail, "engine request failed");
            json!({
                "status": "error",
                "error": format!("Failed to {operation}: {detail}"),
            })
        };

        let response = match self.client.post(&url).json(body).send() {
            Ok(r) => r,
            Err(e) => return wrap(e.to_string()),
        };
        if !response.status().is_success() {
            return wrap(format!("{}", response.status()));
        }
        match response.json::<Value>() {
            Ok(v) => v,
            Err(e) => wrap(e.to_string()),
        }
    }

    pub fn detect_anomaly(&self, payload: &Value) -> Value {
        self.post("/detect/anomaly", "detect patterns", payload)
    }

    pub fn analyze_behavioral(&self, payload: &Value) -> Value {
        self.post("/behavioral/analyze", "analyze behavioral patterns", payload)
    }

    pub fn score_realtime(&self, payload: &Value) -> Value {
        self.post("/score/realtime", "calculate risk score", payload)
    }

    pub fn recommend_algorithm(&self, payload: &Value) -> Value {
        self.post("/recommend/algorithm", "get recommendations", payload)
    }

    pub fn recommend_incident_response(&self, payload: &Value) -> Value {
        self.post("/incident/recommend", "recommend incident response", payload)
    }

    pub fn generate_adaptive_policy(&self, payload: &Value) -> Value {
        self.post("/policy/adaptive", "generate adaptive policy", payload)
    }

    pub fn integrate_threat_intelligence(&self, payload: &Value) -> Value {
        self.post("/threat/integrate", "integrate threat intelligence", payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_endpoint_yields_error_status() {
        // Nothing listens here; the wrapper must absorb the failure
        let client = EngineClient::new("http://127.0.0.1:9").unwrap();
        let response = client.score_realtime(&json!({ "risk_factors": {} }));
        assert_eq!(response["status"], "error");
        let message = response["error"].as_str().unwrap();
        assert!(message.starts_with("Failed to calculate risk score:"));
    }
}
