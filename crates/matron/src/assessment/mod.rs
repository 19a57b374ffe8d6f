//! MATRON assessment record: five weighted domains with typed sub-domains,
//! clinical trigger flags, and the EnhCT severity/complexity items.
//!
//! Rules address a domain through a [`FieldPath`]; every domain declares the
//! closed set of paths it understands so misconfigured rules can be rejected
//! before they ever see an assessment.

use std::io::Read;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

mod biological;
mod clinical;
mod domain;
mod field;
mod outcomes;
mod psychological;
mod safety;
mod score;
mod social;
mod vocabulary;

pub use biological::{
    AcuteMedicalEvents, BiologicalSubDomains, ChronicIllnessManagement, CurrentHealthStatus,
    MedicalHistory, MobilityAndPhysicalFunction, MobilityLevel, MonitoringFrequency,
    NutritionalNeeds, PhysicalDependencies,
};
pub use clinical::{
    ClinicalSubDomains, InterventionFrequency, MedicationManagement,
    NursingAndClinicalInterventions, RegimenComplexity, WoundCare, WoundCareFrequency,
};
pub use domain::{Domain, DomainKind, SubDomainRecord, SubDomainSet};
pub use field::{FieldKind, FieldPath, FieldPathError, FieldValue};
pub use outcomes::{CareHours, CarePlanRecommendation, CostEstimate, DomainScores};
pub use psychological::{
    BehaviouralNeeds, CognitiveFunction, EmotionalNeeds, EmotionalSupportLevel, ImpairmentLevel,
    ManagementStatus, MentalHealth, MoodDisorders, MoodStability, PsychologicalSubDomains,
};
pub use safety::{
    Environment, FallsRisk, FallsRiskLevel, PressureRisk, ResourceAvailability,
    SafetyResourceSubDomains,
};
pub use score::{describe_score, Score, ScoreError};
pub use social::{
    AccessToSocialServices, CommunityEngagement, EngagementInCare, EngagementLevel,
    FamilySupport, FamilySupportLevel, IsolationRisk, LivingConditions, ParticipationLevel,
    SocialNetworks, SocialSubDomains,
};
pub use vocabulary::{
    ActorRole, ComplexityLevel, EventType, Gender, PriorityLevel, SettingType, UrgencyLevel,
};

pub type BiologicalDomain = Domain<BiologicalSubDomains>;
pub type PsychologicalDomain = Domain<PsychologicalSubDomains>;
pub type SocialDomain = Domain<SocialSubDomains>;
pub type ClinicalDomain = Domain<ClinicalSubDomains>;
pub type SafetyResourceDomain = Domain<SafetyResourceSubDomains>;

const SAMPLE_ASSESSMENT: &str = include_str!("../../resources/sample_assessment.json");

/// A complete MATRON assessment for one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub assessment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_date: Option<NaiveDate>,
    #[serde(default)]
    pub assessor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessor_role: Option<ActorRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting: Option<SettingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<UrgencyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<ComplexityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub biological: BiologicalDomain,
    pub psychological: PsychologicalDomain,
    pub social: SocialDomain,
    pub clinical: ClinicalDomain,
    pub safety_resource: SafetyResourceDomain,
    #[serde(rename = "enhCT", default, skip_serializing_if = "Option::is_none")]
    pub enh_ct: Option<EnhCtScoring>,
    #[serde(rename = "totalUCBATScore", default, skip_serializing_if = "Option::is_none")]
    pub total_ucbat_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_scores: Option<DomainScores>,
    #[serde(default)]
    pub triggers: ClinicalTriggers,
    #[serde(default)]
    pub active_alerts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub care_hours: Option<CareHours>,
    #[serde(default)]
    pub care_plan_recommendations: Vec<CarePlanRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessor_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_concerns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_feedback: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<NaiveDate>,
}

fn default_version() -> String {
    "0.1".to_string()
}

impl Assessment {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn domain_weight(&self, kind: DomainKind) -> f64 {
        match kind {
            DomainKind::Biological => self.biological.weight(),
            DomainKind::Psychological => self.psychological.weight(),
            DomainKind::Social => self.social.weight(),
            DomainKind::Clinical => self.clinical.weight(),
            DomainKind::SafetyResource => self.safety_resource.weight(),
        }
    }

    /// Recorded weighted score for a domain, if the assessor supplied one.
    pub fn domain_weighted_score(&self, kind: DomainKind) -> Option<f64> {
        match kind {
            DomainKind::Biological => self.biological.weighted_score,
            DomainKind::Psychological => self.psychological.weighted_score,
            DomainKind::Social => self.social.weighted_score,
            DomainKind::Clinical => self.clinical.weighted_score,
            DomainKind::SafetyResource => self.safety_resource.weighted_score,
        }
    }

    /// Sub-domain aggregate recomputed from the recorded scores.
    pub fn aggregate_domain(&self, kind: DomainKind) -> f64 {
        match kind {
            DomainKind::Biological => self.biological.aggregate_sub_domains(),
            DomainKind::Psychological => self.psychological.aggregate_sub_domains(),
            DomainKind::Social => self.social.aggregate_sub_domains(),
            DomainKind::Clinical => self.clinical.aggregate_sub_domains(),
            DomainKind::SafetyResource => self.safety_resource.aggregate_sub_domains(),
        }
    }

    pub fn resolve(&self, kind: DomainKind, path: &FieldPath) -> FieldValue {
        match kind {
            DomainKind::Biological => self.biological.resolve(path),
            DomainKind::Psychological => self.psychological.resolve(path),
            DomainKind::Social => self.social.resolve(path),
            DomainKind::Clinical => self.clinical.resolve(path),
            DomainKind::SafetyResource => self.safety_resource.resolve(path),
        }
    }
}

impl DomainKind {
    /// Declared type of `path` within this domain, `None` when the path is
    /// not part of the domain's schema.
    pub fn field_kind(self, path: &FieldPath) -> Option<FieldKind> {
        match self {
            DomainKind::Biological => BiologicalDomain::field_kind(path),
            DomainKind::Psychological => PsychologicalDomain::field_kind(path),
            DomainKind::Social => SocialDomain::field_kind(path),
            DomainKind::Clinical => ClinicalDomain::field_kind(path),
            DomainKind::SafetyResource => SafetyResourceDomain::field_kind(path),
        }
    }
}

/// Boolean clinical flags recorded by the assessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClinicalTriggers {
    pub clinically_complex: bool,
    pub wandering_risk: bool,
    #[serde(rename = "highADLDependency")]
    pub high_adl_dependency: bool,
    pub end_of_life_planning: bool,
    pub falls_risk: bool,
    pub pressure_ulcer_risk: bool,
    pub nutritional_risk: bool,
    pub medication_complexity: bool,
    pub social_isolation: bool,
    pub cognitive_decline: bool,
}

impl ClinicalTriggers {
    /// Labels of the flags that are set, in declaration order.
    pub fn active(&self) -> Vec<&'static str> {
        [
            (self.clinically_complex, "clinically complex"),
            (self.wandering_risk, "wandering risk"),
            (self.high_adl_dependency, "high ADL dependency"),
            (self.end_of_life_planning, "end of life planning"),
            (self.falls_risk, "falls risk"),
            (self.pressure_ulcer_risk, "pressure ulcer risk"),
            (self.nutritional_risk, "nutritional risk"),
            (self.medication_complexity, "medication complexity"),
            (self.social_isolation, "social isolation"),
            (self.cognitive_decline, "cognitive decline"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }
}

/// Enhanced Care Tool scoring: severity and complexity ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhCtScoring {
    pub severity: EnhCtItem,
    pub complexity: EnhCtItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhCtItem {
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnhCtScoring {
    pub const SEVERITY_WEIGHT: f64 = 0.6;
    pub const COMPLEXITY_WEIGHT: f64 = 0.4;

    /// Recorded composite, or the weighted mean of severity and complexity.
    pub fn composite(&self) -> f64 {
        self.composite_score.unwrap_or_else(|| {
            crate::scoring::aggregate([
                crate::scoring::WeightedEntry::new(
                    self.severity.score.as_f64(),
                    self.severity.weight.unwrap_or(Self::SEVERITY_WEIGHT),
                ),
                crate::scoring::WeightedEntry::new(
                    self.complexity.score.as_f64(),
                    self.complexity.weight.unwrap_or(Self::COMPLEXITY_WEIGHT),
                ),
            ])
        })
    }
}

/// The reference client shipped with the crate.
pub fn sample_assessment() -> Result<Assessment, serde_json::Error> {
    serde_json::from_str(SAMPLE_ASSESSMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> FieldPath {
        raw.parse().expect("field path")
    }

    #[test]
    fn sample_assessment_deserializes() {
        let assessment = sample_assessment().expect("sample parses");
        assert_eq!(assessment.client_id, "CLIENT_001");
        assert_eq!(assessment.setting, Some(SettingType::Home));
        assert_eq!(assessment.age, Some(84.0));
        assert_eq!(assessment.version, "0.1");
        assert_eq!(assessment.triggers.active(), vec!["falls risk"]);
        assert!(assessment.clinical.sub_domains.wound_care.is_none());
    }

    #[test]
    fn resolves_enumerated_attributes_as_wire_text() {
        let assessment = sample_assessment().expect("sample parses");
        assert_eq!(
            assessment.resolve(
                DomainKind::SafetyResource,
                &path("subDomains.fallsRisk.risk_level")
            ),
            FieldValue::Text("moderate".into())
        );
        assert_eq!(
            assessment.resolve(
                DomainKind::Clinical,
                &path("subDomains.medicationManagement.score")
            ),
            FieldValue::Number(2.0)
        );
    }

    #[test]
    fn optional_sub_domains_resolve_to_absent() {
        let assessment = sample_assessment().expect("sample parses");
        assert_eq!(
            assessment.resolve(DomainKind::Clinical, &path("subDomains.woundCare.score")),
            FieldValue::Absent
        );
        assert_eq!(
            assessment.resolve(DomainKind::Biological, &path("totalScore")),
            FieldValue::Absent
        );
    }

    #[test]
    fn field_kinds_follow_the_domain_schema() {
        assert_eq!(
            DomainKind::Social.field_kind(&path("subDomains.socialNetworks.isolation_risk")),
            Some(FieldKind::Text)
        );
        assert_eq!(
            DomainKind::Clinical
                .field_kind(&path("subDomains.medicationManagement.adherence_issues")),
            Some(FieldKind::Bool)
        );
        assert_eq!(
            DomainKind::Biological.field_kind(&path("subDomains.fallsRisk.risk_level")),
            None
        );
        assert_eq!(
            DomainKind::Psychological.field_kind(&path("weightedScore")),
            Some(FieldKind::Number)
        );
    }

    #[test]
    fn missing_domain_weight_falls_back_to_framework_default() {
        let mut assessment = sample_assessment().expect("sample parses");
        assessment.social.weight = None;
        assert_eq!(assessment.domain_weight(DomainKind::Social), 0.2);
    }

    #[test]
    fn rejects_sub_domain_scores_off_the_scale() {
        let raw = SAMPLE_ASSESSMENT.replace("\"score\": 3", "\"score\": 6");
        assert!(serde_json::from_str::<Assessment>(&raw).is_err());
    }

    #[test]
    fn accepts_whole_scores_written_as_floats() {
        let raw = SAMPLE_ASSESSMENT.replace("\"score\": 3,", "\"score\": 3.0,");
        assert_ne!(raw, SAMPLE_ASSESSMENT);

        let assessment: Assessment = serde_json::from_str(&raw).expect("float scores parse");
        assert_eq!(assessment, sample_assessment().expect("sample parses"));
    }

    #[test]
    fn keeps_recorded_scores_and_care_planning_outcomes() {
        let raw = SAMPLE_ASSESSMENT.replacen(
            "\"clientId\"",
            r#""totalUCBATScore": 28,
  "domainScores": {"biological": 1.8, "safetyResource": 0.15},
  "careHours": {
    "weeklyHours": 14,
    "recommendedCareProvision": "Twice-daily domiciliary visits",
    "costEstimate": {"weekly": 392.5, "annual": 20410}
  },
  "carePlanRecommendations": [
    {
      "domain": "safetyResource",
      "subDomain": "fallsRisk",
      "score": 3,
      "recommendation": "Home hazard review",
      "priority": "urgent"
    }
  ],
  "clientId""#,
            1,
        );

        let assessment: Assessment = serde_json::from_str(&raw).expect("assessment parses");
        assert_eq!(assessment.total_ucbat_score, Some(28.0));
        let scores = assessment.domain_scores.as_ref().expect("domain scores kept");
        assert_eq!(scores.safety_resource, Some(0.15));
        assert_eq!(scores.social, None);
        let hours = assessment.care_hours.as_ref().expect("care hours kept");
        assert_eq!(hours.weekly_hours, Some(14.0));
        assert_eq!(
            hours.cost_estimate.as_ref().and_then(|cost| cost.annual),
            Some(20410.0)
        );
        let recommendation = &assessment.care_plan_recommendations[0];
        assert_eq!(recommendation.sub_domain, "fallsRisk");
        assert_eq!(recommendation.priority, PriorityLevel::Urgent);
        assert!(recommendation.interventions.is_empty());

        let json = serde_json::to_value(&assessment).expect("serialize");
        assert_eq!(json["totalUCBATScore"], 28.0);
        assert_eq!(json["domainScores"]["biological"], 1.8);
        assert_eq!(
            json["careHours"]["recommendedCareProvision"],
            "Twice-daily domiciliary visits"
        );
        assert_eq!(json["carePlanRecommendations"][0]["subDomain"], "fallsRisk");

        let reparsed: Assessment = serde_json::from_value(json).expect("round trip");
        assert_eq!(reparsed, assessment);
    }

    #[test]
    fn care_planning_outcomes_default_when_absent() {
        let assessment = sample_assessment().expect("sample parses");
        assert!(assessment.care_hours.is_none());
        assert!(assessment.domain_scores.is_none());
        assert!(assessment.total_ucbat_score.is_none());
        assert!(assessment.care_plan_recommendations.is_empty());
    }

    #[test]
    fn enh_ct_composite_uses_default_weights() {
        let scoring: EnhCtScoring = serde_json::from_str(
            r#"{"severity": {"score": 4}, "complexity": {"score": 2}}"#,
        )
        .expect("enhCT parses");
        assert!((scoring.composite() - 3.2).abs() < 1e-9);
    }
}
