//! Verdict Engine — deterministic risk and policy decision engine for
//! security automation.
//!
//! Modular structure:
//! - [`features`] — Named risk signals → fixed-order feature vectors
//! - [`anomaly`] — Batch-relative ensemble outlier scoring
//! - [`risk`] — Weighted risk aggregation and behavioral analysis
//! - [`policy`] — Recommendation tables, adaptive policies, incident response
//! - [`intel`] — Threat intelligence feed normalization
//! - [`service`] — Request/response operations and dispatch
//! - [`client`] — Blocking HTTP client for a remote engine
//! - [`logging`] — Structured JSON logging

pub mod anomaly;
pub mod client;
pub mod config;
pub mod error;
pub mod features;
pub mod intel;
pub mod logging;
pub mod policy;
pub mod risk;
pub mod service;

pub use anomaly::{AnomalyDetector, AnomalyResult};
pub use client::EngineClient;
pub use config::EngineConfig;
pub use error::EngineError;
pub use features::{FactorSchema, FeatureVector};
pub use logging::StructuredLogger;
pub use policy::Recommendation;
pub use risk::{RiskAssessment, RiskEngine, RiskLevel};
pub use service::EngineService;
