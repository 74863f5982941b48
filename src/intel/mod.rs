//! Threat intelligence normalization: flatten named feeds into canonical
//! records with derived rollup counts. No cross-feed deduplication — the same
//! threat in two feeds yields two records.

use serde::{Deserialize, Serialize};

fn default_feed_name() -> String {
    "Unknown".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatFeed {
    #[serde(default = "default_feed_name")]
    pub name: String,
    #[serde(default)]
    pub threats: Vec<FeedThreat>,
}

/// A threat entry as it arrives from a feed; most fields optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedThreat {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub threat_type: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub indicators: Vec<String>,
    #[serde(default)]
    pub first_seen: Option<String>,
    #[serde(default)]
    pub last_seen: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Canonical normalized record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatRecord {
    pub feed_source: String,
    pub threat_id: Option<String>,
    pub threat_type: Option<String>,
    pub severity: String,
    pub description: Option<String>,
    pub indicators: Vec<String>,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelReport {
    pub integrated_threats: Vec<ThreatRecord>,
    pub total_threats: usize,
    pub high_confidence_threats: usize,
    pub critical_threats: usize,
}

const DEFAULT_SEVERITY: &str = "medium";
const DEFAULT_CONFIDENCE: f64 = 0.5;
const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;
const CRITICAL_SEVERITY: &str = "critical";

pub fn normalize_feeds(feeds: &[ThreatFeed]) -> IntelReport {
    let integrated_threats: Vec<ThreatRecord> = feeds
        .iter()
        .flat_map(|feed| {
            feed.threats.iter().map(move |threat| ThreatRecord {
                feed_source: feed.name.clone(),
                threat_id: threat.id.clone(),
                threat_type: threat.threat_type.clone(),
                severity: threat
                    .severity
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SEVERITY.to_string()),
                description: threat.description.clone(),
                indicators: threat.indicators.clone(),
                first_seen: threat.first_seen.clone(),
                last_seen: threat.last_seen.clone(),
                confidence: threat.confidence.unwrap_or(DEFAULT_CONFIDENCE),
            })
        })
        .collect();

    let high_confidence_threats = integrated_threats
        .iter()
        .filter(|t| t.confidence > HIGH_CONFIDENCE_THRESHOLD)
        .count();
    let critical_threats = integrated_threats
        .iter()
        .filter(|t| t.severity == CRITICAL_SEVERITY)
        .count();

    IntelReport {
        total_threats: integrated_threats.len(),
        high_confidence_threats,
        critical_threats,
        integrated_threats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(name: &str, threats: Vec<FeedThreat>) -> ThreatFeed {
        ThreatFeed {
            name: name.to_string(),
            threats,
        }
    }

    fn threat(severity: Option<&str>, confidence: Option<f64>) -> FeedThreat {
        FeedThreat {
            id: Some("T-1".to_string()),
            threat_type: Some("c2".to_string()),
            severity: severity.map(|s| s.to_string()),
            description: None,
            indicators: vec!["10.0.0.1".to_string()],
            first_seen: None,
            last_seen: None,
            confidence,
        }
    }

    #[test]
    fn two_feeds_two_records_no_dedup() {
        let feeds = [
            feed("osint", vec![threat(Some("critical"), Some(0.9))]),
            feed("vendor", vec![threat(Some("low"), Some(0.4))]),
        ];
        let report = normalize_feeds(&feeds);
        assert_eq!(report.total_threats, 2);
        assert_eq!(report.high_confidence_threats, 1);
        assert_eq!(report.critical_threats, 1);
        assert_eq!(report.integrated_threats[0].feed_source, "osint");
        assert_eq!(report.integrated_threats[1].feed_source, "vendor");
    }

    #[test]
    fn missing_fields_get_defaults() {
        let feeds = [feed("osint", vec![threat(None, None)])];
        let report = normalize_feeds(&feeds);
        let record = &report.integrated_threats[0];
        assert_eq!(record.severity, "medium");
        assert_eq!(record.confidence, 0.5);
        assert_eq!(report.high_confidence_threats, 0);
        assert_eq!(report.critical_threats, 0);
    }

    #[test]
    fn confidence_threshold_is_strict() {
        let feeds = [feed("osint", vec![threat(None, Some(0.8))])];
        let report = normalize_feeds(&feeds);
        assert_eq!(report.high_confidence_threats, 0);
    }

    #[test]
    fn empty_feed_list_yields_empty_report() {
        let report = normalize_feeds(&[]);
        assert_eq!(report.total_threats, 0);
        assert!(report.integrated_threats.is_empty());
    }
}
