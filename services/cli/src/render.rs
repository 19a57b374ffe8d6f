use matron::care_plan::CarePlanReport;
use matron::error::AppError;
use matron::rules::{to_catalog_json, RuleLiteral, TriggerRule};
use std::io::Write;

pub(crate) fn write_text<W: Write>(report: &CarePlanReport, out: &mut W) -> Result<(), AppError> {
    writeln!(
        out,
        "MATRON care plan for {} (assessment {})",
        report.client_id, report.assessment_id
    )?;
    writeln!(
        out,
        "Overall score {:.2} | Risk level {}",
        report.overall_score,
        report.risk_level.label()
    )?;

    let hours = &report.care_hours;
    writeln!(
        out,
        "Weekly care hours {:.2} (base {:.2}, age factor {:.2})",
        hours.weekly_hours, hours.base_hours, hours.age_factor
    )?;
    for adjustment in &hours.adjustments {
        writeln!(
            out,
            "  x{} {}",
            adjustment.multiplier(),
            adjustment.label()
        )?;
    }

    writeln!(out, "\nDomain breakdown")?;
    for domain in &report.domains {
        let weighted = match domain.weighted_score {
            Some(score) => format!("{score:.2}"),
            None => "n/a".to_string(),
        };
        writeln!(
            out,
            "- {} (weight {:.2}): weighted {} | sub-domain aggregate {:.2}",
            domain.domain.label(),
            domain.weight,
            weighted,
            domain.sub_domain_aggregate
        )?;
    }

    if report.active_triggers.is_empty() {
        writeln!(out, "\nActive clinical triggers: none")?;
    } else {
        writeln!(
            out,
            "\nActive clinical triggers: {}",
            report.active_triggers.join(", ")
        )?;
    }

    if report.triggered_rules.is_empty() {
        writeln!(out, "Triggered rules: none")?;
    } else {
        writeln!(out, "Triggered rules: {}", report.triggered_rules.join(", "))?;
    }

    if report.actions.is_empty() {
        writeln!(out, "\nRecommended actions: none")?;
    } else {
        writeln!(out, "\nRecommended actions")?;
        for planned in &report.actions {
            let action = &planned.action;
            let owner = action.role.map(|role| role.label()).unwrap_or("Unassigned");
            let mut line = format!(
                "- [{}] {} {} -> {}: {}",
                planned.rule_id,
                action.priority.label(),
                action.kind.label(),
                owner,
                action.text
            );
            if let Some(frequency) = &action.frequency {
                line.push_str(&format!(" ({frequency})"));
            }
            if let Some(due) = action.due_date {
                line.push_str(&format!(" due {due}"));
            }
            writeln!(out, "{line}")?;
        }
    }

    if report.alerts.is_empty() {
        writeln!(out, "\nAlerts: none")?;
    } else {
        writeln!(out, "\nAlerts")?;
        for alert in &report.alerts {
            writeln!(out, "- {alert}")?;
        }
    }

    Ok(())
}

pub(crate) fn write_json<W: Write>(report: &CarePlanReport, out: &mut W) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn write_csv<W: Write>(report: &CarePlanReport, out: &mut W) -> Result<(), AppError> {
    report.write_actions_csv(out)?;
    Ok(())
}

/// One line per rule in load order.
pub(crate) fn write_rules<W: Write>(rules: &[TriggerRule], out: &mut W) -> Result<(), AppError> {
    if rules.is_empty() {
        writeln!(out, "No rules loaded")?;
        return Ok(());
    }

    for rule in rules {
        let trigger = &rule.trigger;
        let escalation = rule
            .escalation
            .map(|level| level.label())
            .unwrap_or("none");
        let state = if rule.enabled { "enabled" } else { "disabled" };
        writeln!(
            out,
            "{} | {} | {}.{} {} {} | escalation {} | {}",
            rule.id,
            rule.name,
            trigger.domain(),
            trigger.field(),
            trigger.condition().operator(),
            literal_text(trigger.condition().literal()),
            escalation,
            state
        )?;
    }
    Ok(())
}

pub(crate) fn write_rules_json<W: Write>(
    rules: &[TriggerRule],
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "{}", to_catalog_json(rules)?)?;
    Ok(())
}

fn literal_text(literal: Option<RuleLiteral>) -> String {
    match literal {
        Some(RuleLiteral::Text(text)) => format!("\"{text}\""),
        Some(RuleLiteral::Number(number)) => number.to_string(),
        Some(RuleLiteral::Bool(flag)) => flag.to_string(),
        None => "null".to_string(),
    }
}
