use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Declared type of a field that trigger rules may address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Number,
    Text,
    Bool,
    TextList,
}

impl FieldKind {
    pub const fn label(self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Text => "text",
            FieldKind::Bool => "boolean",
            FieldKind::TextList => "text list",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Value resolved from an assessment for rule evaluation.
///
/// `Absent` stands for an optional sub-domain or attribute that was not
/// recorded; it is a legitimate value, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Bool(bool),
    TextList(Vec<String>),
    Absent,
}

impl FieldValue {
    /// Text value carrying the wire name of a serde enum variant.
    pub fn from_wire<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(serde_json::Value::String(name)) => FieldValue::Text(name),
            _ => FieldValue::Absent,
        }
    }

    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            FieldValue::Number(_) => Some(FieldKind::Number),
            FieldValue::Text(_) => Some(FieldKind::Text),
            FieldValue::Bool(_) => Some(FieldKind::Bool),
            FieldValue::TextList(_) => Some(FieldKind::TextList),
            FieldValue::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<&[String]> for FieldValue {
    fn from(values: &[String]) -> Self {
        FieldValue::TextList(values.to_vec())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Absent)
    }
}

/// Dotted path into a single domain record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Weight,
    WeightedScore,
    TotalScore,
    SubDomain {
        sub_domain: String,
        attribute: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported field path '{0}'")]
pub struct FieldPathError(pub String);

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = raw.split('.').collect();
        match segments.as_slice() {
            ["weight"] => Ok(FieldPath::Weight),
            ["weightedScore"] => Ok(FieldPath::WeightedScore),
            ["totalScore"] => Ok(FieldPath::TotalScore),
            ["subDomains", sub_domain, attribute]
                if !sub_domain.is_empty() && !attribute.is_empty() =>
            {
                Ok(FieldPath::SubDomain {
                    sub_domain: (*sub_domain).to_string(),
                    attribute: (*attribute).to_string(),
                })
            }
            _ => Err(FieldPathError(raw.to_string())),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Weight => f.write_str("weight"),
            FieldPath::WeightedScore => f.write_str("weightedScore"),
            FieldPath::TotalScore => f.write_str("totalScore"),
            FieldPath::SubDomain {
                sub_domain,
                attribute,
            } => write!(f, "subDomains.{sub_domain}.{attribute}"),
        }
    }
}
