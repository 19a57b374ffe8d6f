use serde::{Deserialize, Serialize};

use super::domain::{scored_attribute_kind, weights, DomainKind, SubDomainRecord, SubDomainSet};
use super::field::{FieldKind, FieldValue};
use super::score::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringFrequency {
    Stable,
    Occasional,
    Regular,
    Frequent,
    Intensive,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobilityLevel {
    FullyIndependent,
    MinimalAssistance,
    SomeAssistance,
    RegularAssistance,
    HighlyDependent,
    CompletelyDependent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistory {
    #[serde(default = "weights::elevated")]
    pub weight: f64,
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentHealthStatus {
    #[serde(default = "weights::high")]
    pub weight: f64,
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub monitoring_frequency: MonitoringFrequency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalDependencies {
    #[serde(default = "weights::highest")]
    pub weight: f64,
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub mobility_level: MobilityLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChronicIllnessManagement {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcuteMedicalEvents {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    #[serde(default)]
    pub recent_events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionalNeeds {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    #[serde(default)]
    pub dietary_requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobilityAndPhysicalFunction {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    #[serde(default)]
    pub assistive_devices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiologicalSubDomains {
    pub medical_history: MedicalHistory,
    pub current_health_status: CurrentHealthStatus,
    pub physical_dependencies: PhysicalDependencies,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chronic_illness_management: Option<ChronicIllnessManagement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acute_medical_events: Option<AcuteMedicalEvents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_needs: Option<NutritionalNeeds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility_and_physical_function: Option<MobilityAndPhysicalFunction>,
}

impl SubDomainSet for BiologicalSubDomains {
    const KIND: DomainKind = DomainKind::Biological;

    fn present(&self) -> Vec<(&'static str, &dyn SubDomainRecord)> {
        let mut present: Vec<(&'static str, &dyn SubDomainRecord)> = vec![
            ("medicalHistory", &self.medical_history),
            ("currentHealthStatus", &self.current_health_status),
            ("physicalDependencies", &self.physical_dependencies),
        ];
        if let Some(record) = &self.chronic_illness_management {
            present.push(("chronicIllnessManagement", record));
        }
        if let Some(record) = &self.acute_medical_events {
            present.push(("acuteMedicalEvents", record));
        }
        if let Some(record) = &self.nutritional_needs {
            present.push(("nutritionalNeeds", record));
        }
        if let Some(record) = &self.mobility_and_physical_function {
            present.push(("mobilityAndPhysicalFunction", record));
        }
        present
    }

    fn attribute_kind(sub_domain: &str, attribute: &str) -> Option<FieldKind> {
        use FieldKind::{Text, TextList};

        let declared: &[(&str, FieldKind)] = match sub_domain {
            "medicalHistory" => &[("description", Text), ("conditions", TextList)],
            "currentHealthStatus" => &[("description", Text), ("monitoring_frequency", Text)],
            "physicalDependencies" => &[("description", Text), ("mobility_level", Text)],
            "chronicIllnessManagement" => &[("conditions", TextList)],
            "acuteMedicalEvents" => &[("recent_events", TextList)],
            "nutritionalNeeds" => &[("dietary_requirements", TextList)],
            "mobilityAndPhysicalFunction" => &[("assistive_devices", TextList)],
            _ => return None,
        };
        scored_attribute_kind(declared, attribute)
    }
}

impl SubDomainRecord for MedicalHistory {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "description" => self.description.as_deref().into(),
            "conditions" => self.conditions.as_slice().into(),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for CurrentHealthStatus {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "description" => self.description.as_deref().into(),
            "monitoring_frequency" => FieldValue::from_wire(&self.monitoring_frequency),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for PhysicalDependencies {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "description" => self.description.as_deref().into(),
            "mobility_level" => FieldValue::from_wire(&self.mobility_level),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for ChronicIllnessManagement {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "conditions" => self.conditions.as_slice().into(),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for AcuteMedicalEvents {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "recent_events" => self.recent_events.as_slice().into(),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for NutritionalNeeds {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "dietary_requirements" => self.dietary_requirements.as_slice().into(),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for MobilityAndPhysicalFunction {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "assistive_devices" => self.assistive_devices.as_slice().into(),
            _ => FieldValue::Absent,
        }
    }
}
