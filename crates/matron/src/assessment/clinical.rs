use serde::{Deserialize, Serialize};

use super::domain::{scored_attribute_kind, weights, DomainKind, SubDomainRecord, SubDomainSet};
use super::field::{FieldKind, FieldValue};
use super::score::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionFrequency {
    Minimal,
    Occasional,
    Regular,
    Frequent,
    Intensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoundCareFrequency {
    Occasional,
    Regular,
    Ongoing,
    Frequent,
    Constant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegimenComplexity {
    Simple,
    FewMedications,
    Moderate,
    Complex,
    HighlyComplex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NursingAndClinicalInterventions {
    #[serde(default = "weights::highest")]
    pub weight: f64,
    pub score: Score,
    pub intervention_frequency: InterventionFrequency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WoundCare {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    #[serde(default)]
    pub wound_types: Vec<String>,
    pub care_frequency: WoundCareFrequency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationManagement {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    pub regimen_complexity: RegimenComplexity,
    #[serde(default)]
    pub adherence_issues: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalSubDomains {
    pub nursing_and_clinical_interventions: NursingAndClinicalInterventions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wound_care: Option<WoundCare>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication_management: Option<MedicationManagement>,
}

impl SubDomainSet for ClinicalSubDomains {
    const KIND: DomainKind = DomainKind::Clinical;

    fn present(&self) -> Vec<(&'static str, &dyn SubDomainRecord)> {
        let mut present: Vec<(&'static str, &dyn SubDomainRecord)> = vec![(
            "nursingAndClinicalInterventions",
            &self.nursing_and_clinical_interventions,
        )];
        if let Some(record) = &self.wound_care {
            present.push(("woundCare", record));
        }
        if let Some(record) = &self.medication_management {
            present.push(("medicationManagement", record));
        }
        present
    }

    fn attribute_kind(sub_domain: &str, attribute: &str) -> Option<FieldKind> {
        use FieldKind::{Bool, Text, TextList};

        let declared: &[(&str, FieldKind)] = match sub_domain {
            "nursingAndClinicalInterventions" => &[("intervention_frequency", Text)],
            "woundCare" => &[("wound_types", TextList), ("care_frequency", Text)],
            "medicationManagement" => &[("regimen_complexity", Text), ("adherence_issues", Bool)],
            _ => return None,
        };
        scored_attribute_kind(declared, attribute)
    }
}

impl SubDomainRecord for NursingAndClinicalInterventions {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "intervention_frequency" => FieldValue::from_wire(&self.intervention_frequency),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for WoundCare {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "wound_types" => self.wound_types.as_slice().into(),
            "care_frequency" => FieldValue::from_wire(&self.care_frequency),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for MedicationManagement {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "regimen_complexity" => FieldValue::from_wire(&self.regimen_complexity),
            "adherence_issues" => FieldValue::Bool(self.adherence_issues),
            _ => FieldValue::Absent,
        }
    }
}
