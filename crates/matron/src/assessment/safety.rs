use serde::{Deserialize, Serialize};

use super::domain::{scored_attribute_kind, weights, DomainKind, SubDomainRecord, SubDomainSet};
use super::field::{FieldKind, FieldValue};
use super::score::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallsRiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    #[serde(default)]
    pub safety_hazards: Vec<String>,
    #[serde(default)]
    pub modifications_needed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallsRisk {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    pub risk_level: FallsRiskLevel,
    #[serde(default)]
    pub prevention_measures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureRisk {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub braden_score: Option<f64>,
    #[serde(default)]
    pub prevention_measures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceAvailability {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    #[serde(default)]
    pub available_resources: Vec<String>,
    #[serde(default)]
    pub unmet_needs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyResourceSubDomains {
    pub environment: Environment,
    pub falls_risk: FallsRisk,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_risk: Option<PressureRisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_availability: Option<ResourceAvailability>,
}

impl SubDomainSet for SafetyResourceSubDomains {
    const KIND: DomainKind = DomainKind::SafetyResource;

    fn present(&self) -> Vec<(&'static str, &dyn SubDomainRecord)> {
        let mut present: Vec<(&'static str, &dyn SubDomainRecord)> = vec![
            ("environment", &self.environment),
            ("fallsRisk", &self.falls_risk),
        ];
        if let Some(record) = &self.pressure_risk {
            present.push(("pressureRisk", record));
        }
        if let Some(record) = &self.resource_availability {
            present.push(("resourceAvailability", record));
        }
        present
    }

    fn attribute_kind(sub_domain: &str, attribute: &str) -> Option<FieldKind> {
        use FieldKind::{Number, Text, TextList};

        let declared: &[(&str, FieldKind)] = match sub_domain {
            "environment" => &[
                ("safety_hazards", TextList),
                ("modifications_needed", TextList),
            ],
            "fallsRisk" => &[("risk_level", Text), ("prevention_measures", TextList)],
            "pressureRisk" => &[("braden_score", Number), ("prevention_measures", TextList)],
            "resourceAvailability" => &[
                ("available_resources", TextList),
                ("unmet_needs", TextList),
            ],
            _ => return None,
        };
        scored_attribute_kind(declared, attribute)
    }
}

impl SubDomainRecord for Environment {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "safety_hazards" => self.safety_hazards.as_slice().into(),
            "modifications_needed" => self.modifications_needed.as_slice().into(),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for FallsRisk {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "risk_level" => FieldValue::from_wire(&self.risk_level),
            "prevention_measures" => self.prevention_measures.as_slice().into(),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for PressureRisk {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "braden_score" => self.braden_score.into(),
            "prevention_measures" => self.prevention_measures.as_slice().into(),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for ResourceAvailability {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "available_resources" => self.available_resources.as_slice().into(),
            "unmet_needs" => self.unmet_needs.as_slice().into(),
            _ => FieldValue::Absent,
        }
    }
}
