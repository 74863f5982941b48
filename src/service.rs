//! Request/response surface of the engine. Transport-agnostic: callers hand
//! in parsed JSON payloads and get serializable responses back.
//!
//! Error contract: validation errors surface their message verbatim;
//! anything else is logged with a correlation id and reported as the opaque
//! internal-error shape.

use crate::anomaly::{AnomalyDetector, BatchReport};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::intel::{normalize_feeds, IntelReport, ThreatFeed};
use crate::policy::{
    self, adaptive_bundle, AlgorithmRecommendation, IncidentContext, KeyParameters,
    KeyStrengthReport, PolicyBundle, PostureReport, ResponseStep, SystemInfo,
};
use crate::risk::{analyze_patterns, BehavioralReport, RiskAssessment, RiskEngine, RiskLevel, UserPattern};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::{error, info};
use uuid::Uuid;

/// `features` may arrive as a batch or as a single rank-1 vector, which is
/// promoted to a one-row batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FeaturesInput {
    Batch(Vec<Vec<f64>>),
    Single(Vec<f64>),
}

impl FeaturesInput {
    fn into_batch(self) -> Vec<Vec<f64>> {
        match self {
            FeaturesInput::Batch(rows) => rows,
            FeaturesInput::Single(row) => vec![row],
        }
    }
}

fn default_sensitivity() -> String {
    "medium".to_string()
}

fn default_data_type() -> String {
    "general".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlgorithmRequest {
    #[serde(default = "default_sensitivity")]
    pub sensitivity: String,
    #[serde(default = "default_data_type")]
    pub data_type: String,
    #[serde(default)]
    pub compliance: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmResponse {
    pub recommendations: Vec<AlgorithmRecommendation>,
    pub data_sensitivity: String,
    pub data_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IncidentResponse {
    pub incident_response_plan: Vec<ResponseStep>,
    pub incident_type: String,
    pub severity: String,
    pub estimated_resolution_time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdaptivePolicyResponse {
    pub adaptive_policies: PolicyBundle,
    pub current_risk_level: RiskLevel,
    pub policy_update_time: String,
}

pub struct EngineService {
    risk: RiskEngine,
    anomaly: AnomalyDetector,
}

impl EngineService {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            risk: RiskEngine::new(config.risk),
            anomaly: AnomalyDetector::new(config.anomaly),
        }
    }

    pub fn detect_anomaly(&self, features: FeaturesInput) -> Result<BatchReport> {
        self.anomaly.detect(&features.into_batch())
    }

    pub fn analyze_behavioral(&self, patterns: &[UserPattern]) -> Result<BehavioralReport> {
        analyze_patterns(patterns)
    }

    pub fn score_realtime(&self, factors: &HashMap<String, f64>) -> RiskAssessment {
        self.risk.assess(factors)
    }

    pub fn recommend_algorithm(&self, request: AlgorithmRequest) -> AlgorithmResponse {
        let recommendations =
            policy::recommend_algorithms(&request.sensitivity, &request.compliance);
        AlgorithmResponse {
            recommendations,
            data_sensitivity: request.sensitivity,
            data_type: request.data_type,
        }
    }

    pub fn recommend_incident_response(&self, incident: &IncidentContext) -> IncidentResponse {
        IncidentResponse {
            incident_response_plan: policy::response_plan(incident),
            incident_type: incident.incident_type.clone(),
            severity: incident.severity.clone(),
            estimated_resolution_time: policy::estimate_resolution_time(
                &incident.severity,
                &incident.incident_type,
            ),
        }
    }

    pub fn generate_adaptive_policy(&self, risk_level: RiskLevel) -> AdaptivePolicyResponse {
        AdaptivePolicyResponse {
            adaptive_policies: adaptive_bundle(risk_level),
            current_risk_level: risk_level,
            policy_update_time: Utc::now().to_rfc3339(),
        }
    }

    pub fn integrate_threat_intelligence(&self, feeds: &[ThreatFeed]) -> IntelReport {
        normalize_feeds(feeds)
    }

    pub fn predict_key_strength(&self, params: &KeyParameters) -> KeyStrengthReport {
        policy::rate_key_strength(params)
    }

    pub fn assess_vulnerabilities(&self, info: &SystemInfo) -> PostureReport {
        policy::assess_posture(info)
    }

    /// Dispatch a named operation over a JSON payload. Always returns a JSON
    /// response; failures are mapped per the error contract.
    pub fn dispatch(&self, op: &str, payload: Value) -> Value {
        let correlation_id = Uuid::new_v4();
        info!(%correlation_id, op, "dispatching");

        match self.dispatch_inner(op, payload) {
            Ok(response) => response,
            Err(err) if err.is_validation() => json!({ "error": err.public_message() }),
            Err(err) => {
                error!(%correlation_id, op, error = %err, "operation failed");
                json!({ "error": err.public_message() })
            }
        }
    }

    fn dispatch_inner(&self, op: &str, payload: Value) -> Result<Value> {
        match op {
            "detect_anomaly" => {
                let features: FeaturesInput = field(&payload, "features", json!([]))?;
                respond(self.detect_anomaly(features)?)
            }
            "analyze_behavioral" => {
                let patterns: Vec<UserPattern> = field(&payload, "user_patterns", json!([]))?;
                respond(self.analyze_behavioral(&patterns)?)
            }
            "score_realtime" => {
                let factors: HashMap<String, f64> = field(&payload, "risk_factors", json!({}))?;
                respond(self.score_realtime(&factors))
            }
            "recommend_algorithm" => {
                let request: AlgorithmRequest =
                    serde_json::from_value(payload).map_err(to_internal)?;
                respond(self.recommend_algorithm(request))
            }
            "recommend_incident_response" => {
                let incident: IncidentContext = field(&payload, "incident", json!({}))?;
                respond(self.recommend_incident_response(&incident))
            }
            "generate_adaptive_policy" => {
                let level = payload
                    .get("risk_assessment")
                    .and_then(|a| a.get("risk_level"))
                    .and_then(Value::as_str)
                    .map(RiskLevel::parse_lenient)
                    .unwrap_or(RiskLevel::Low);
                respond(self.generate_adaptive_policy(level))
            }
            "integrate_threat_intelligence" => {
                let feeds: Vec<ThreatFeed> = field(&payload, "threat_feeds", json!([]))?;
                respond(self.integrate_threat_intelligence(&feeds))
            }
            "predict_key_strength" => {
                let params: KeyParameters = field(&payload, "key_parameters", json!({}))?;
                respond(self.predict_key_strength(&params))
            }
            "assess_vulnerabilities" => {
                let info: SystemInfo = field(&payload, "system_info", json!({}))?;
                respond(self.assess_vulnerabilities(&info))
            }
            _ => Err(EngineError::validation(format!("Unknown operation: {op}"))),
        }
    }
}

impl Default for EngineService {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Pull a payload field with a default for absence; a type mismatch is an
/// internal error (the caller sent something structurally wrong).
fn field<T: serde::de::DeserializeOwned>(payload: &Value, key: &str, default: Value) -> Result<T> {
    let value = payload.get(key).cloned().unwrap_or(default);
    serde_json::from_value(value).map_err(to_internal)
}

fn to_internal(err: serde_json::Error) -> EngineError {
    EngineError::internal(err.to_string())
}

fn respond<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(to_internal)
}
