//! Condition -> action trigger rules evaluated against an assessment.

pub mod catalog;
mod condition;
mod definition;
mod rule;

#[cfg(test)]
mod tests;

pub use catalog::{
    compile_definitions, core_rules, load_rules, load_rules_from_path, to_catalog_json,
    CatalogMode, RuleCatalogError,
};
pub use condition::{Condition, Operator, RuleError, TriggerCondition};
pub use definition::{
    ActionRecommendation, ActionType, RuleDefinition, RuleLiteral, TriggerDefinition,
};
pub use rule::TriggerRule;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::Assessment;
use crate::scoring;

/// Ordered list of compiled rules.
///
/// Holds no locks; callers sharing an engine across threads wrap it in
/// their own `RwLock`.
#[derive(Debug, Clone, Default)]
pub struct RulesEngine {
    rules: Vec<TriggerRule>,
}

impl RulesEngine {
    pub fn new(rules: Vec<TriggerRule>) -> Self {
        Self { rules }
    }

    /// Engine preloaded with the built-in catalog.
    pub fn with_core_rules() -> Result<Self, RuleCatalogError> {
        core_rules().map(Self::new)
    }

    pub fn rules(&self) -> &[TriggerRule] {
        &self.rules
    }

    /// Appends a rule; it is evaluated after every existing rule.
    pub fn add_rule(&mut self, rule: TriggerRule) {
        self.rules.push(rule);
    }

    /// Removes every rule with `id`, returning how many were removed.
    pub fn remove_rule(&mut self, id: &str) -> usize {
        let before = self.rules.len();
        self.rules.retain(|rule| rule.id != id);
        before - self.rules.len()
    }

    /// Enables or disables every rule with `id`, returning how many matched.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> usize {
        let mut matched = 0;
        for rule in self.rules.iter_mut().filter(|rule| rule.id == id) {
            rule.enabled = enabled;
            matched += 1;
        }
        matched
    }

    pub fn evaluate(&self, assessment: &Assessment) -> Evaluation {
        let mut evaluation = Evaluation::default();

        for rule in self.rules.iter().filter(|rule| rule.enabled) {
            if !rule.matches(assessment) {
                continue;
            }

            debug!(rule_id = %rule.id, domain = %rule.trigger.domain(), "rule triggered");
            evaluation
                .recommended_actions
                .extend(rule.actions.iter().cloned());
            if let Some(alert) = rule.alert() {
                evaluation.alerts.push(alert);
            }
            evaluation.triggered_rules.push(rule.clone());
        }

        evaluation
    }

    pub fn overall_score(&self, assessment: &Assessment) -> f64 {
        scoring::overall_score(assessment)
    }

    pub fn care_hours(&self, assessment: &Assessment) -> f64 {
        scoring::care_hours(assessment)
    }
}

/// Result of running every enabled rule once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub triggered_rules: Vec<TriggerRule>,
    pub recommended_actions: Vec<ActionRecommendation>,
    pub alerts: Vec<String>,
}

impl Evaluation {
    pub fn triggered_ids(&self) -> Vec<&str> {
        self.triggered_rules
            .iter()
            .map(|rule| rule.id.as_str())
            .collect()
    }
}
