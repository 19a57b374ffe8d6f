//! Care plan composition: trigger evaluation combined with scoring.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::rules::{ActionRecommendation, RulesEngine};
use crate::scoring::{self, CareHoursEstimate, DomainBreakdown, RiskLevel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarePlan {
    pub care_hours: f64,
    pub recommendations: Vec<ActionRecommendation>,
    pub alerts: Vec<String>,
    pub risk_level: RiskLevel,
}

pub fn generate_care_plan(assessment: &Assessment, engine: &RulesEngine) -> CarePlan {
    let evaluation = engine.evaluate(assessment);
    let overall = scoring::overall_score(assessment);

    CarePlan {
        care_hours: scoring::care_hours(assessment),
        recommendations: evaluation.recommended_actions,
        alerts: evaluation.alerts,
        risk_level: RiskLevel::from_overall_score(overall),
    }
}

/// Care plan plus the figures behind it, as rendered by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarePlanReport {
    pub client_id: String,
    pub assessment_id: String,
    pub overall_score: f64,
    pub risk_level: RiskLevel,
    pub care_hours: CareHoursEstimate,
    pub triggered_rules: Vec<String>,
    pub actions: Vec<PlannedAction>,
    pub alerts: Vec<String>,
    pub active_triggers: Vec<String>,
    pub domains: Vec<DomainBreakdown>,
}

/// A recommended action tagged with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedAction {
    pub rule_id: String,
    #[serde(flatten)]
    pub action: ActionRecommendation,
}

impl CarePlanReport {
    pub fn build(assessment: &Assessment, engine: &RulesEngine) -> Self {
        let evaluation = engine.evaluate(assessment);
        let care_hours = CareHoursEstimate::for_assessment(assessment);

        let actions = evaluation
            .triggered_rules
            .iter()
            .flat_map(|rule| {
                rule.actions.iter().map(|action| PlannedAction {
                    rule_id: rule.id.clone(),
                    action: action.clone(),
                })
            })
            .collect();

        Self {
            client_id: assessment.client_id.clone(),
            assessment_id: assessment.assessment_id.clone(),
            overall_score: care_hours.overall_score,
            risk_level: RiskLevel::from_overall_score(care_hours.overall_score),
            triggered_rules: evaluation
                .triggered_ids()
                .into_iter()
                .map(str::to_string)
                .collect(),
            actions,
            alerts: evaluation.alerts,
            active_triggers: assessment
                .triggers
                .active()
                .into_iter()
                .map(str::to_string)
                .collect(),
            domains: scoring::domain_breakdown(assessment),
            care_hours,
        }
    }

    pub fn care_plan(&self) -> CarePlan {
        CarePlan {
            care_hours: self.care_hours.weekly_hours,
            recommendations: self
                .actions
                .iter()
                .map(|planned| planned.action.clone())
                .collect(),
            alerts: self.alerts.clone(),
            risk_level: self.risk_level,
        }
    }

    /// Writes one CSV row per recommended action.
    pub fn write_actions_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for planned in &self.actions {
            csv_writer.serialize(ActionRow::from(planned))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ActionRow<'a> {
    rule_id: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    priority: &'static str,
    role: Option<&'static str>,
    text: &'a str,
    frequency: Option<&'a str>,
    due_date: Option<String>,
}

impl<'a> From<&'a PlannedAction> for ActionRow<'a> {
    fn from(planned: &'a PlannedAction) -> Self {
        let action = &planned.action;
        Self {
            rule_id: &planned.rule_id,
            kind: action.kind.label(),
            priority: action.priority.label(),
            role: action.role.map(|role| role.label()),
            text: &action.text,
            frequency: action.frequency.as_deref(),
            due_date: action.due_date.map(|date| date.format("%Y-%m-%d").to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{sample_assessment, FallsRiskLevel};

    fn high_falls_risk() -> Assessment {
        let mut assessment = sample_assessment().expect("sample parses");
        assessment.safety_resource.sub_domains.falls_risk.risk_level = FallsRiskLevel::High;
        assessment
    }

    #[test]
    fn sample_care_plan_is_low_risk_without_actions() {
        let engine = RulesEngine::with_core_rules().expect("core rules");
        let assessment = sample_assessment().expect("sample parses");

        let plan = generate_care_plan(&assessment, &engine);

        assert_eq!(plan.care_hours, 13.15);
        assert_eq!(plan.risk_level, RiskLevel::Low);
        assert!(plan.recommendations.is_empty());
        assert!(plan.alerts.is_empty());
    }

    #[test]
    fn report_agrees_with_care_plan() {
        let engine = RulesEngine::with_core_rules().expect("core rules");
        let assessment = high_falls_risk();

        let report = CarePlanReport::build(&assessment, &engine);

        assert_eq!(report.care_plan(), generate_care_plan(&assessment, &engine));
        assert_eq!(report.triggered_rules, vec!["high-falls-risk".to_string()]);
        assert_eq!(report.active_triggers, vec!["falls risk".to_string()]);
        assert_eq!(report.domains.len(), 5);
    }

    #[test]
    fn actions_csv_has_one_row_per_action() {
        let engine = RulesEngine::with_core_rules().expect("core rules");
        let report = CarePlanReport::build(&high_falls_risk(), &engine);

        let mut buffer = Vec::new();
        report.write_actions_csv(&mut buffer).expect("csv written");
        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "rule_id,type,priority,role,text,frequency,due_date");
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("high-falls-risk,task,urgent,Nurse,"));
    }
}
