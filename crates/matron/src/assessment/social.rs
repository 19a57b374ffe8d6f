use serde::{Deserialize, Serialize};

use super::domain::{scored_attribute_kind, weights, DomainKind, SubDomainRecord, SubDomainSet};
use super::field::{FieldKind, FieldValue};
use super::score::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilySupportLevel {
    Strong,
    Moderate,
    Limited,
    Dysfunctional,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IsolationRisk {
    HighEngagement,
    SomeConnections,
    LimitedEngagement,
    LittleContact,
    Isolated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementLevel {
    FullyEngaged,
    MostlyEngaged,
    SelectiveEngagement,
    Resistant,
    NonEngaged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationLevel {
    Active,
    Some,
    Infrequent,
    Rarely,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivingConditions {
    #[serde(default = "weights::elevated")]
    pub weight: f64,
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing_type: Option<String>,
    #[serde(default)]
    pub safety_concerns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilySupport {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    pub support_level: FamilySupportLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialNetworks {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    pub isolation_risk: IsolationRisk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementInCare {
    #[serde(default = "weights::elevated")]
    pub weight: f64,
    pub score: Score,
    pub engagement_level: EngagementLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityEngagement {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    pub participation_level: ParticipationLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToSocialServices {
    #[serde(default = "weights::standard")]
    pub weight: f64,
    pub score: Score,
    #[serde(default)]
    pub services_utilised: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSubDomains {
    pub living_conditions: LivingConditions,
    pub family_support: FamilySupport,
    pub social_networks: SocialNetworks,
    pub engagement_in_care: EngagementInCare,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_engagement: Option<CommunityEngagement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_to_social_services: Option<AccessToSocialServices>,
}

impl SubDomainSet for SocialSubDomains {
    const KIND: DomainKind = DomainKind::Social;

    fn present(&self) -> Vec<(&'static str, &dyn SubDomainRecord)> {
        let mut present: Vec<(&'static str, &dyn SubDomainRecord)> = vec![
            ("livingConditions", &self.living_conditions),
            ("familySupport", &self.family_support),
            ("socialNetworks", &self.social_networks),
            ("engagementInCare", &self.engagement_in_care),
        ];
        if let Some(record) = &self.community_engagement {
            present.push(("communityEngagement", record));
        }
        if let Some(record) = &self.access_to_social_services {
            present.push(("accessToSocialServices", record));
        }
        present
    }

    fn attribute_kind(sub_domain: &str, attribute: &str) -> Option<FieldKind> {
        use FieldKind::{Text, TextList};

        let declared: &[(&str, FieldKind)] = match sub_domain {
            "livingConditions" => &[("housing_type", Text), ("safety_concerns", TextList)],
            "familySupport" => &[("support_level", Text)],
            "socialNetworks" => &[("isolation_risk", Text)],
            "engagementInCare" => &[("engagement_level", Text)],
            "communityEngagement" => &[("participation_level", Text)],
            "accessToSocialServices" => &[("services_utilised", TextList)],
            _ => return None,
        };
        scored_attribute_kind(declared, attribute)
    }
}

impl SubDomainRecord for LivingConditions {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "housing_type" => self.housing_type.as_deref().into(),
            "safety_concerns" => self.safety_concerns.as_slice().into(),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for FamilySupport {
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

impl SubDomainRecord for SocialNetworks {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "isolation_risk" => FieldValue::from_wire(&self.isolation_risk),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for EngagementInCare {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "engagement_level" => FieldValue::from_wire(&self.engagement_level),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for CommunityEngagement {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "participation_level" => FieldValue::from_wire(&self.participation_level),
            _ => FieldValue::Absent,
        }
    }
}

impl SubDomainRecord for AccessToSocialServices {
    fn score(&self) -> Score {
        self.score
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn attribute(&self, name: &str) -> FieldValue {
        match name {
            "services_utilised" => self.services_utilised.as_slice().into(),
            _ => FieldValue::Absent,
        }
    }
}
