//! Incident response planning: a fixed base plan with incident-type inserts
//! and severity escalations, plus a resolution-time estimate.

use super::Priority;
use serde::{Deserialize, Serialize};

fn default_incident_type() -> String {
    "unknown".to_string()
}

fn default_severity() -> String {
    "low".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentContext {
    #[serde(rename = "type", default = "default_incident_type")]
    pub incident_type: String,
    #[serde(default = "default_severity")]
    pub severity: String,
    #[serde(default)]
    pub affected_systems: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseStep {
    pub step: f64,
    pub action: String,
    pub priority: Priority,
    pub description: String,
}

struct StepSpec {
    step: f64,
    action: &'static str,
    priority: Priority,
    description: &'static str,
}

impl From<&StepSpec> for ResponseStep {
    fn from(spec: &StepSpec) -> Self {
        ResponseStep {
            step: spec.step,
            action: spec.action.to_string(),
            priority: spec.priority,
            description: spec.description.to_string(),
        }
    }
}

const BASE_PLAN: &[StepSpec] = &[
    StepSpec {
        step: 1.0,
        action: "Contain the incident",
        priority: Priority::Immediate,
        description: "Prevent further damage and limit the scope of the incident",
    },
    StepSpec {
        step: 2.0,
        action: "Eradicate the threat",
        priority: Priority::High,
        description: "Remove the cause of the incident and restore systems to a secure state",
    },
    StepSpec {
        step: 3.0,
        action: "Recover and restore",
        priority: Priority::Medium,
        description: "Restore systems and services while ensuring security",
    },
    StepSpec {
        step: 4.0,
        action: "Post-incident review",
        priority: Priority::Low,
        description: "Analyze the incident and improve security measures",
    },
];

// Front-inserted at position 1 in this order, so "Preserve evidence" ends up
// before "Notify affected parties" in the final plan. The resulting order
// (and the inverted step numbering) is the canonical behavior; do not "fix"
// it by appending or re-sorting.
const DATA_BREACH_INSERTS: &[StepSpec] = &[
    StepSpec {
        step: 1.1,
        action: "Notify affected parties",
        priority: Priority::Immediate,
        description: "Begin notification process as required by law",
    },
    StepSpec {
        step: 1.2,
        action: "Preserve evidence",
        priority: Priority::Immediate,
        description: "Ensure forensic evidence is not lost",
    },
];

const MALWARE_INSERT: StepSpec = StepSpec {
    step: 1.1,
    action: "Isolate infected systems",
    priority: Priority::Immediate,
    description: "Disconnect affected systems from the network",
};

const CRITICAL_ESCALATION: StepSpec = StepSpec {
    step: 5.0,
    action: "Executive notification",
    priority: Priority::Immediate,
    description: "Notify senior management and board of directors",
};

const HIGH_ESCALATION: StepSpec = StepSpec {
    step: 5.0,
    action: "Management notification",
    priority: Priority::High,
    description: "Notify relevant management personnel",
};

/// Ordered response plan for the incident. Order encodes execution sequence.
pub fn response_plan(incident: &IncidentContext) -> Vec<ResponseStep> {
    let mut plan: Vec<ResponseStep> = BASE_PLAN.iter().map(ResponseStep::from).collect();

    match incident.incident_type.as_str() {
        "data_breach" => {
            for spec in DATA_BREACH_INSERTS {
                plan.insert(1, ResponseStep::from(spec));
            }
        }
        "malware" => plan.insert(1, ResponseStep::from(&MALWARE_INSERT)),
        _ => {}
    }

    // Exclusive branches: only the matched severity fires
    match incident.severity.as_str() {
        "critical" => plan.push(ResponseStep::from(&CRITICAL_ESCALATION)),
        "high" => plan.push(ResponseStep::from(&HIGH_ESCALATION)),
        _ => {}
    }

    plan
}

const BASE_HOURS: &[(&str, u64)] = &[
    ("low", 4),
    ("medium", 24),
    ("high", 72),
    ("critical", 168),
];

const TYPE_MULTIPLIER: &[(&str, f64)] = &[
    ("data_breach", 1.5),
    ("malware", 1.2),
    ("intrusion", 2.0),
    ("denial_of_service", 1.1),
    ("unknown", 1.0),
];

/// `base_hours[severity] × multiplier[type]`, truncated to whole hours.
/// Unmatched severities default to 24 hours; unmatched types to ×1.0.
pub fn estimate_resolution_time(severity: &str, incident_type: &str) -> String {
    let base = BASE_HOURS
        .iter()
        .find(|(s, _)| *s == severity)
        .map(|(_, h)| *h)
        .unwrap_or(24);
    let multiplier = TYPE_MULTIPLIER
        .iter()
        .find(|(t, _)| *t == incident_type)
        .map(|(_, m)| *m)
        .unwrap_or(1.0);
    format!("{} hours", (base as f64 * multiplier) as u64)
}
