//! Weighted risk aggregation and behavioral pattern analysis.

mod behavioral;
mod engine;

pub use behavioral::{analyze_patterns, BehavioralReport, UserPattern, UserRiskAnalysis};
pub use engine::{ReportedFactors, RiskAssessment, RiskEngine, RiskLevel};
