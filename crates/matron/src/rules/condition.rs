use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::definition::{RuleLiteral, TriggerDefinition};
use crate::assessment::{Assessment, DomainKind, FieldKind, FieldPath, FieldPathError, FieldValue};

/// Reasons a rule definition cannot be compiled.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    #[error("unknown domain '{0}'")]
    UnknownDomain(String),
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
    #[error(transparent)]
    FieldPath(#[from] FieldPathError),
    #[error("field '{field}' is not part of the {domain} domain")]
    UnknownField { domain: DomainKind, field: FieldPath },
    #[error("a null value is only valid with `equals`, not `{0}`")]
    NullLiteral(Operator),
    #[error("`{operator}` expects a {expected} value, found {found}")]
    LiteralType {
        operator: Operator,
        expected: &'static str,
        found: &'static str,
    },
    #[error("`{operator}` cannot be applied to {kind} field '{field}'")]
    Incompatible {
        operator: Operator,
        field: FieldPath,
        kind: FieldKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    GreaterThan,
    LessThan,
    Contains,
}

impl Operator {
    pub const fn key(self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::Contains => "contains",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Operator {
    type Err = RuleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "equals" => Ok(Operator::Equals),
            "greater_than" => Ok(Operator::GreaterThan),
            "less_than" => Ok(Operator::LessThan),
            "contains" => Ok(Operator::Contains),
            other => Err(RuleError::UnknownOperator(other.to_string())),
        }
    }
}

/// Comparison carried by a compiled trigger, with a payload typed per operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equals(FieldValue),
    GreaterThan(f64),
    LessThan(f64),
    Contains(String),
}

impl Condition {
    pub fn from_literal(
        operator: Operator,
        literal: Option<RuleLiteral>,
    ) -> Result<Self, RuleError> {
        match (operator, literal) {
            (Operator::Equals, literal) => Ok(Condition::Equals(literal.into())),
            (operator, None) => Err(RuleError::NullLiteral(operator)),
            (Operator::GreaterThan, Some(RuleLiteral::Number(threshold))) => {
                Ok(Condition::GreaterThan(threshold))
            }
            (Operator::LessThan, Some(RuleLiteral::Number(threshold))) => {
                Ok(Condition::LessThan(threshold))
            }
            (Operator::Contains, Some(RuleLiteral::Text(needle))) => {
                Ok(Condition::Contains(needle))
            }
            (operator, Some(found)) => Err(RuleError::LiteralType {
                operator,
                expected: if operator == Operator::Contains {
                    "text"
                } else {
                    "number"
                },
                found: found.label(),
            }),
        }
    }

    pub const fn operator(&self) -> Operator {
        match self {
            Condition::Equals(_) => Operator::Equals,
            Condition::GreaterThan(_) => Operator::GreaterThan,
            Condition::LessThan(_) => Operator::LessThan,
            Condition::Contains(_) => Operator::Contains,
        }
    }

    /// Catalog literal for this condition; `None` stands for `null`.
    pub fn literal(&self) -> Option<RuleLiteral> {
        match self {
            Condition::Equals(FieldValue::Number(value)) => Some(RuleLiteral::Number(*value)),
            Condition::Equals(FieldValue::Text(value)) => Some(RuleLiteral::Text(value.clone())),
            Condition::Equals(FieldValue::Bool(value)) => Some(RuleLiteral::Bool(*value)),
            // List equality never passes `TriggerCondition::new`.
            Condition::Equals(FieldValue::TextList(_) | FieldValue::Absent) => None,
            Condition::GreaterThan(threshold) | Condition::LessThan(threshold) => {
                Some(RuleLiteral::Number(*threshold))
            }
            Condition::Contains(needle) => Some(RuleLiteral::Text(needle.clone())),
        }
    }

    /// Whether the condition can ever be evaluated against a field of `kind`.
    pub fn accepts(&self, kind: FieldKind) -> bool {
        match self {
            Condition::Equals(FieldValue::Absent) => true,
            Condition::Equals(expected) => {
                kind != FieldKind::TextList && expected.kind() == Some(kind)
            }
            Condition::GreaterThan(_) | Condition::LessThan(_) => kind == FieldKind::Number,
            Condition::Contains(_) => kind == FieldKind::TextList,
        }
    }

    /// Evaluates against a resolved value. Absent values only satisfy
    /// `Equals(Absent)`.
    pub fn matches(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Condition::Equals(expected), actual) => expected == actual,
            (Condition::GreaterThan(threshold), FieldValue::Number(actual)) => actual > threshold,
            (Condition::LessThan(threshold), FieldValue::Number(actual)) => actual < threshold,
            (Condition::Contains(needle), FieldValue::TextList(items)) => {
                items.iter().any(|item| item == needle)
            }
            _ => false,
        }
    }
}

/// A single `(domain, field, condition)` check, validated against the
/// domain schema.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerCondition {
    domain: DomainKind,
    field: FieldPath,
    condition: Condition,
    description: Option<String>,
}

impl TriggerCondition {
    pub fn new(
        domain: DomainKind,
        field: FieldPath,
        condition: Condition,
    ) -> Result<Self, RuleError> {
        let kind = domain
            .field_kind(&field)
            .ok_or_else(|| RuleError::UnknownField {
                domain,
                field: field.clone(),
            })?;

        if !condition.accepts(kind) {
            return Err(RuleError::Incompatible {
                operator: condition.operator(),
                field,
                kind,
            });
        }

        Ok(Self {
            domain,
            field,
            condition,
            description: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn compile(definition: TriggerDefinition) -> Result<Self, RuleError> {
        let domain = DomainKind::from_key(&definition.domain)
            .ok_or_else(|| RuleError::UnknownDomain(definition.domain.clone()))?;
        let operator: Operator = definition.operator.parse()?;
        let field: FieldPath = definition.field.parse()?;
        let condition = Condition::from_literal(operator, definition.value)?;

        let mut compiled = Self::new(domain, field, condition)?;
        compiled.description = definition.description;
        Ok(compiled)
    }

    pub fn domain(&self) -> DomainKind {
        self.domain
    }

    pub fn field(&self) -> &FieldPath {
        &self.field
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn evaluate(&self, assessment: &Assessment) -> bool {
        self.condition
            .matches(&assessment.resolve(self.domain, &self.field))
    }
}

impl From<TriggerCondition> for TriggerDefinition {
    fn from(trigger: TriggerCondition) -> Self {
        TriggerDefinition {
            domain: trigger.domain.key().to_string(),
            field: trigger.field.to_string(),
            operator: trigger.condition.operator().key().to_string(),
            value: trigger.condition.literal(),
            description: trigger.description,
        }
    }
}
