use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingType {
    Home,
    Ward,
    Rehab,
    Hospice,
    Community,
    Residential,
    AcuteCare,
}

impl SettingType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Ward => "Ward",
            Self::Rehab => "Rehabilitation",
            Self::Hospice => "Hospice",
            Self::Community => "Community",
            Self::Residential => "Residential",
            Self::AcuteCare => "Acute care",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Nurse,
    Mdt,
    Carer,
    Family,
    Patient,
    Doctor,
    Therapist,
    SocialWorker,
    Administrator,
    NursingAssociate,
}

impl ActorRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nurse => "Nurse",
            Self::Mdt => "MDT",
            Self::Carer => "Carer",
            Self::Family => "Family",
            Self::Patient => "Patient",
            Self::Doctor => "Doctor",
            Self::Therapist => "Therapist",
            Self::SocialWorker => "Social worker",
            Self::Administrator => "Administrator",
            Self::NursingAssociate => "Nursing associate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ShiftNote,
    Incident,
    CarePlan,
    Observation,
    Assessment,
    Handover,
    MedicationAdmin,
    VitalSigns,
}

/// Escalation level attached to rules and assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Moderate,
    High,
    Critical,
    Immediate,
}

impl UrgencyLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Immediate => "immediate",
        }
    }

    /// Only `high` and `critical` escalations produce an alert line;
    /// `immediate` does not.
    pub const fn raises_alert(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Minimal,
    Mild,
    Moderate,
    High,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    Routine,
    Standard,
    Urgent,
    Critical,
}

impl PriorityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Routine => "routine",
            Self::Standard => "standard",
            Self::Urgent => "urgent",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_high_and_critical_raise_alerts() {
        let raising: Vec<UrgencyLevel> = [
            UrgencyLevel::Low,
            UrgencyLevel::Moderate,
            UrgencyLevel::High,
            UrgencyLevel::Critical,
            UrgencyLevel::Immediate,
        ]
        .into_iter()
        .filter(|level| level.raises_alert())
        .collect();

        assert_eq!(raising, vec![UrgencyLevel::High, UrgencyLevel::Critical]);
    }

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&SettingType::AcuteCare).expect("serialize"),
            "\"acute_care\""
        );
        let role: ActorRole =
            serde_json::from_str("\"nursing_associate\"").expect("deserialize role");
        assert_eq!(role, ActorRole::NursingAssociate);
    }
}
