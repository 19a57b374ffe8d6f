use crate::assessment::{sample_assessment, Assessment, FallsRiskLevel};
use crate::rules::{RuleDefinition, RuleError, RulesEngine, TriggerRule};

pub(super) fn assessment() -> Assessment {
    sample_assessment().expect("sample assessment parses")
}

pub(super) fn high_falls_risk_assessment() -> Assessment {
    let mut assessment = assessment();
    assessment.safety_resource.sub_domains.falls_risk.risk_level = FallsRiskLevel::High;
    assessment
}

pub(super) fn core_engine() -> RulesEngine {
    RulesEngine::with_core_rules().expect("core rules compile")
}

pub(super) fn definition(
    id: &str,
    domain: &str,
    field: &str,
    operator: &str,
    value: serde_json::Value,
) -> RuleDefinition {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("Rule {id}"),
        "trigger": {
            "domain": domain,
            "field": field,
            "operator": operator,
            "value": value,
        },
        "actions": [
            {"type": "task", "text": format!("Follow up {id}"), "priority": "standard"}
        ],
        "escalation": "critical",
    }))
    .expect("definition parses")
}

pub(super) fn compile(
    domain: &str,
    field: &str,
    operator: &str,
    value: serde_json::Value,
) -> Result<TriggerRule, RuleError> {
    TriggerRule::try_from(definition("test", domain, field, operator, value))
}

pub(super) fn rule(
    id: &str,
    domain: &str,
    field: &str,
    operator: &str,
    value: serde_json::Value,
) -> TriggerRule {
    TriggerRule::try_from(definition(id, domain, field, operator, value)).expect("rule compiles")
}
