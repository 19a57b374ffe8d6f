use serde::{Deserialize, Serialize};

use super::domain::{scored_attribute_kind, weights, DomainKind, SubDomainRecord, SubDomainSet};
use super::field::{FieldKind, FieldValue};
use super::score::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagementStatus {
    NoIssues,
    MildManaged,
    ModerateStable,
    ModerateFluctuating,
    SevereManaged,
    SevereUnstable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpairmentLevel {
    NoImpairment,
    MildForgetfulness,
    ModerateImpairment,
    SevereImpairment,
    CompleteDecline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalSupportLevel {
    Minimal,
    Occasional,
    Regular,
    Intensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodStability {
    Stable,
    MildChanges,
    Fluctuating,
    Unstable,
    HighlyUnstable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentalHealth {
    #[serde(default = "weights::high")]
    pub weight: f64,
    pub score: Score,
    #[serde(default)]
    pub conditions: Vec<String>,
    pub management_status: ManagementStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveFunction {
    #[serde(default = "weights::high")]
    pub weight: f64,
    pub score: Score,
    pub impairment_level: ImpairmentLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalNeeds {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    pub support_level: EmotionalSupportLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodDisorders {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    pub stability: MoodStability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviouralNeeds {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    #[serde(default)]
    pub interventions_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychologicalSubDomains {
    pub mental_health: MentalHealth,
    pub cognitive_function: CognitiveFunction,
    pub emotional_needs: EmotionalNeeds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_disorders: Option<MoodDisorders>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavioural_needs: Option<BehaviouralNeeds>,
}

impl SubDomainSet for PsychologicalSubDomains {
    const KIND: DomainKind = DomainKind::Psychological;

    fn present(&self) -> Vec<(&'static str, &dyn SubDomainRecord)> {
        let mut present: Vec<(&'static str, &dyn SubDomainRecord)> = vec![
            ("mentalHealth", &self.mental_health),
            ("cognitiveFunction", &self.cognitive_function),
            ("emotionalNeeds", &self.emotional_needs),
        ];
        if let Some(record) = &self.mood_disorders {
            present.push(("moodDisorders", record));
        }
        if let Some(record) = &self.behavioural_needs {
            present.push(("behaviouralNeeds", record));
        }
        present
    }

    fn attribute_kind(sub_domain: &str, attribute: &str) -> Option<FieldKind> {
        use FieldKind::{Bool, Text, TextList};

        let declared: &[(&str, FieldKind)] = match sub_domain {
            "mentalHealth" => &[("conditions", TextList), ("management_status", Text)],
            "cognitiveFunction" => &[("impairment_level", Text)],
            "emotionalNeeds" => &[("support_level", Text)],
            "moodDisorders" => &[("stability", Text)],
            "behaviouralNeeds" => &[("interventions_required", Bool)],
            _ => return None,
        };
        scored_attribute_kind(declared, attribute)
    }
}

impl SubDomainRecord for MentalHealth {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "conditions" => self.conditions.as_slice().into(),
            "management_status" => FieldValue::from_wire(&self.management_status),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for CognitiveFunction {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "impairment_level" => FieldValue::from_wire(&self.impairment_level),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for EmotionalNeeds {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "support_level" => FieldValue::from_wire(&self.support_level),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for MoodDisorders {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "stability" => FieldValue::from_wire(&self.stability),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for BehaviouralNeeds {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "interventions_required" => FieldValue::Bool(self.interventions_required),
            _ => FieldValue::Absent,
        }
    }
}
