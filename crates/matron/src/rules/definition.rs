use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assessment::{ActorRole, FieldValue, PriorityLevel, UrgencyLevel};

/// Rule as written in a catalog, before compilation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub trigger: TriggerDefinition,
    #[serde(default)]
    pub actions: Vec<ActionRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation: Option<UrgencyLevel>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Uncompiled trigger: domain, operator and field are free text until the
/// rule is compiled against the domain schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerDefinition {
    pub domain: String,
    pub field: String,
    pub operator: String,
    /// `null` (or a missing value) means "field is absent".
    #[serde(default)]
    pub value: Option<RuleLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleLiteral {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl RuleLiteral {
    pub const fn label(&self) -> &'static str {
        match self {
            RuleLiteral::Bool(_) => "boolean",
            RuleLiteral::Number(_) => "number",
            RuleLiteral::Text(_) => "text",
        }
    }
}

impl From<RuleLiteral> for FieldValue {
    fn from(literal: RuleLiteral) -> Self {
        match literal {
            RuleLiteral::Bool(value) => FieldValue::Bool(value),
            RuleLiteral::Number(value) => FieldValue::Number(value),
            RuleLiteral::Text(value) => FieldValue::Text(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Recommendation,
    Task,
    Referral,
    Medication,
    Observation,
    Escalation,
}

impl ActionType {
    pub const fn label(self) -> &'static str {
        match self {
            ActionType::Recommendation => "recommendation",
            ActionType::Task => "task",
            ActionType::Referral => "referral",
            ActionType::Medication => "medication",
            ActionType::Observation => "observation",
            ActionType::Escalation => "escalation",
        }
    }
}

/// Action emitted when a rule fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecommendation {
    #[serde(rename = "type")]
    pub kind: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ActorRole>,
    pub text: String,
    pub priority: PriorityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_deserialize_by_json_type() {
        let literals: Vec<Option<RuleLiteral>> =
            serde_json::from_str(r#"[true, 4.5, "high", null]"#).expect("literals parse");
        assert_eq!(
            literals,
            vec![
                Some(RuleLiteral::Bool(true)),
                Some(RuleLiteral::Number(4.5)),
                Some(RuleLiteral::Text("high".into())),
                None,
            ]
        );
    }

    #[test]
    fn definitions_default_to_enabled() {
        let definition: RuleDefinition = serde_json::from_str(
            r#"{
                "id": "r1",
                "name": "Rule",
                "trigger": {
                    "domain": "social",
                    "field": "weight",
                    "operator": "less_than",
                    "value": 1
                }
            }"#,
        )
        .expect("definition parses");
        assert!(definition.enabled);
        assert!(definition.actions.is_empty());
        assert_eq!(definition.trigger.value, Some(RuleLiteral::Number(1.0)));
    }
}
