//! Risk tier → adaptive policy bundles for the access-control and monitoring
//! domains. Rule text is the canonical policy wording.

use crate::risk::RiskLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainPolicy {
    pub policy: String,
    pub description: String,
    pub rules: Vec<String>,
}

/// Policy domain name → domain policy.
pub type PolicyBundle = BTreeMap<String, DomainPolicy>;

struct DomainPolicySpec {
    domain: &'static str,
    policy: &'static str,
    description: &'static str,
    rules: &'static [&'static str],
}

const HIGH_BUNDLE: &[DomainPolicySpec] = &[
    DomainPolicySpec {
        domain: "access_control",
        policy: "restrictive",
        description: "Enhanced access controls due to high risk",
        rules: &[
            "Mandatory multi-factor authentication",
            "Just-in-time access approval",
            "Session timeout reduced to 15 minutes",
            "Geographical access restrictions",
        ],
    },
    DomainPolicySpec {
        domain: "monitoring",
        policy: "intensive",
        description: "Increased monitoring due to high risk",
        rules: &[
            "Real-time alerting for all activities",
            "Full packet capture for network traffic",
            "Enhanced logging for all systems",
            "24/7 security operations center",
        ],
    },
];

const MEDIUM_BUNDLE: &[DomainPolicySpec] = &[
    DomainPolicySpec {
        domain: "access_control",
        policy: "standard_plus",
        description: "Enhanced standard controls due to moderate risk",
        rules: &[
            "Multi-factor authentication required",
            "Regular access reviews",
            "Session timeout of 1 hour",
            "Basic geographical restrictions",
        ],
    },
    DomainPolicySpec {
        domain: "monitoring",
        policy: "enhanced",
        description: "Enhanced monitoring due to moderate risk",
        rules: &[
            "Alerting for suspicious activities",
            "Sampling of network traffic",
            "Standard logging for all systems",
            "Business hours security monitoring",
        ],
    },
];

const LOW_BUNDLE: &[DomainPolicySpec] = &[
    DomainPolicySpec {
        domain: "access_control",
        policy: "standard",
        description: "Standard access controls for normal risk",
        rules: &[
            "Single-factor authentication for internal users",
            "Quarterly access reviews",
            "Session timeout of 8 hours",
            "No geographical restrictions",
        ],
    },
    DomainPolicySpec {
        domain: "monitoring",
        policy: "standard",
        description: "Standard monitoring for normal risk",
        rules: &[
            "Alerting for high-risk activities",
            "Periodic log reviews",
            "Standard logging for all systems",
            "Business hours security monitoring",
        ],
    },
];

/// Fixed bundle for the tier.
pub fn adaptive_bundle(level: RiskLevel) -> PolicyBundle {
    let specs = match level {
        RiskLevel::High => HIGH_BUNDLE,
        RiskLevel::Medium => MEDIUM_BUNDLE,
        RiskLevel::Low => LOW_BUNDLE,
    };
    specs
        .iter()
        .map(|spec| {
            (
                spec.domain.to_string(),
                DomainPolicy {
                    policy: spec.policy.to_string(),
                    description: spec.description.to_string(),
                    rules: spec.rules.iter().map(|r| r.to_string()).collect(),
                },
            )
        })
        .collect()
}
