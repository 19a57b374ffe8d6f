use serde::{Deserialize, Serialize};

use super::condition::{RuleError, TriggerCondition};
use super::definition::{ActionRecommendation, RuleDefinition};
use crate::assessment::{Assessment, UrgencyLevel};

/// Compiled trigger rule owned by a [`super::RulesEngine`].
///
/// Serializes to and from the catalog [`RuleDefinition`] shape; deserializing
/// compiles the trigger and fails on misconfiguration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RuleDefinition", into = "RuleDefinition")]
pub struct TriggerRule {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub trigger: TriggerCondition,
    pub actions: Vec<ActionRecommendation>,
    pub escalation: Option<UrgencyLevel>,
    pub enabled: bool,
}

impl TriggerRule {
    pub fn new(id: impl Into<String>, name: impl Into<String>, trigger: TriggerCondition) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            trigger,
            actions: Vec::new(),
            escalation: None,
            enabled: true,
        }
    }

    pub fn matches(&self, assessment: &Assessment) -> bool {
        self.trigger.evaluate(assessment)
    }

    /// Alert line for high and critical escalations.
    pub fn alert(&self) -> Option<String> {
        self.escalation
            .filter(|level| level.raises_alert())
            .map(|_| {
                let description = self
                    .description
                    .as_deref()
                    .filter(|text| !text.is_empty())
                    .unwrap_or("No description");
                format!("ALERT: {} - {}", self.name, description)
            })
    }
}

impl TryFrom<RuleDefinition> for TriggerRule {
    type Error = RuleError;

    fn try_from(definition: RuleDefinition) -> Result<Self, Self::Error> {
        Ok(Self {
            trigger: TriggerCondition::compile(definition.trigger)?,
            id: definition.id,
            name: definition.name,
            description: definition.description,
            actions: definition.actions,
            escalation: definition.escalation,
            enabled: definition.enabled,
        })
    }
}

impl From<TriggerRule> for RuleDefinition {
    fn from(rule: TriggerRule) -> Self {
        RuleDefinition {
            id: rule.id,
            name: rule.name,
            description: rule.description,
            trigger: rule.trigger.into(),
            actions: rule.actions,
            escalation: rule.escalation,
            enabled: rule.enabled,
        }
    }
}
