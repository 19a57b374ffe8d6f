use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::{FieldKind, FieldPath, FieldValue};
use super::score::Score;
use crate::scoring::{aggregate, WeightedEntry};

/// The five fixed top-level MATRON assessment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainKind {
    Biological,
    Psychological,
    Social,
    Clinical,
    SafetyResource,
}

impl DomainKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Biological,
            Self::Psychological,
            Self::Social,
            Self::Clinical,
            Self::SafetyResource,
        ]
    }

    /// Identifier used by trigger rule definitions.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Biological => "biological",
            Self::Psychological => "psychological",
            Self::Social => "social",
            Self::Clinical => "clinical",
            Self::SafetyResource => "safety_resource",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|kind| kind.key() == key)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Biological => "Biological",
            Self::Psychological => "Psychological",
            Self::Social => "Social",
            Self::Clinical => "Clinical Care Needs",
            Self::SafetyResource => "Safety & Resource",
        }
    }

    pub const fn default_weight(self) -> f64 {
        match self {
            Self::Biological => 0.35,
            Self::Psychological => 0.25,
            Self::Social => 0.2,
            Self::Clinical => 0.15,
            Self::SafetyResource => 0.05,
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A scored item inside a domain (e.g. `fallsRisk` within safety & resource).
pub trait SubDomainRecord {
    fn score(&self) -> Score;

    fn weight(&self) -> f64;

    /// Resolves a descriptive attribute; names outside the schema are `Absent`.
    fn attribute(&self, name: &str) -> FieldValue;
}

/// The closed set of sub-domains recorded for one domain.
pub trait SubDomainSet {
    const KIND: DomainKind;

    /// Sub-domains present on this record, in schema order.
    fn present(&self) -> Vec<(&'static str, &dyn SubDomainRecord)>;

    /// Declared type of `subDomains.<sub_domain>.<attribute>`, or `None` when
    /// the pair is not part of the schema.
    fn attribute_kind(sub_domain: &str, attribute: &str) -> Option<FieldKind>;

    fn get(&self, sub_domain: &str) -> Option<&dyn SubDomainRecord> {
        self.present()
            .into_iter()
            .find(|(name, _)| *name == sub_domain)
            .map(|(_, record)| record)
    }
}

/// Shared lookup for sub-domain attribute tables; `score` and `weight` are
/// common to every sub-domain.
pub(crate) fn scored_attribute_kind(
    declared: &[(&str, FieldKind)],
    attribute: &str,
) -> Option<FieldKind> {
    match attribute {
        "score" | "weight" => Some(FieldKind::Number),
        other => declared
            .iter()
            .find(|(name, _)| *name == other)
            .map(|(_, kind)| *kind),
    }
}

/// Default sub-domain weights from the MATRON framework.
pub(crate) mod weights {
    pub(crate) fn standard() -> f64 {
        1.0
    }

    pub(crate) fn elevated() -> f64 {
        1.05
    }

    pub(crate) fn high() -> f64 {
        1.1
    }

    pub(crate) fn highest() -> f64 {
        1.15
    }
}

/// Domain record: weight, typed sub-domains, and precomputed aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain<S> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub sub_domains: S,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted_score: Option<f64>,
}

impl<S: SubDomainSet> Domain<S> {
    pub fn new(sub_domains: S) -> Self {
        Self {
            weight: None,
            sub_domains,
            total_score: None,
            weighted_score: None,
        }
    }

    /// Contribution to the overall score, falling back to the framework default.
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(S::KIND.default_weight())
    }

    /// Weighted mean of the present sub-domain scores.
    pub fn aggregate_sub_domains(&self) -> f64 {
        aggregate(
            self.sub_domains
                .present()
                .into_iter()
                .map(|(_, record)| WeightedEntry::new(record.score().as_f64(), record.weight())),
        )
    }

    /// Type of a field path within this domain, `None` when unknown.
    pub fn field_kind(path: &FieldPath) -> Option<FieldKind> {
        match path {
            FieldPath::Weight | FieldPath::WeightedScore | FieldPath::TotalScore => {
                Some(FieldKind::Number)
            }
            FieldPath::SubDomain {
                sub_domain,
                attribute,
            } => S::attribute_kind(sub_domain, attribute),
        }
    }

    pub fn resolve(&self, path: &FieldPath) -> FieldValue {
        match path {
            FieldPath::Weight => FieldValue::Number(self.weight()),
            FieldPath::WeightedScore => self.weighted_score.into(),
            FieldPath::TotalScore => self.total_score.into(),
            FieldPath::SubDomain {
                sub_domain,
                attribute,
            } => match self.sub_domains.get(sub_domain) {
                None => FieldValue::Absent,
                Some(record) => match attribute.as_str() {
                    "score" => FieldValue::Number(record.score().as_f64()),
                    "weight" => FieldValue::Number(record.weight()),
                    other => record.attribute(other),
                },
            },
        }
    }
}
