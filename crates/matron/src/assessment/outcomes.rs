use serde::{Deserialize, Serialize};

use super::vocabulary::PriorityLevel;

/// Care hours recorded on the assessment by the assessor or a prior run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_care_provision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_estimate: Option<CostEstimate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual: Option<f64>,
}

/// Assessor-authored recommendation tied to one sub-domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanRecommendation {
    pub domain: String,
    pub sub_domain: String,
    pub score: f64,
    pub recommendation: String,
    pub priority: PriorityLevel,
    #[serde(default)]
    pub interventions: Vec<String>,
}

/// Per-domain scores as recorded on the assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biological: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psychological: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_resource: Option<f64>,
}
