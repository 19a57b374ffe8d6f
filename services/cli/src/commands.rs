use crate::cli::OutputFormat;
use crate::infra::{build_engine, load_assessment, shift_for, warn_on_validation};
use crate::render;
use chrono::{Local, SecondsFormat, Utc};
use clap::Args;
use matron::assessment::Assessment;
use matron::care_plan::CarePlanReport;
use matron::config::AppConfig;
use matron::error::AppError;
use matron::prompts::{
    build_care_plan_prompt, build_handover_prompt, build_incident_prompt, CarePlanPromptContext,
    HandoverContext, IncidentContext,
};
use matron::rules::RulesEngine;
use serde_json::Value;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Assessment JSON file
    #[arg(long)]
    pub(crate) assessment: PathBuf,
    /// Extra rule catalog loaded after the core and configured rules
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct RulesArgs {
    /// Extra rule catalog loaded after the core and configured rules
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Print the loaded rules as catalog JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct HandoverArgs {
    #[arg(long)]
    pub(crate) assessment: PathBuf,
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Shift label; derived from the local clock when omitted
    #[arg(long)]
    pub(crate) shift: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct CarePlanPromptArgs {
    #[arg(long)]
    pub(crate) assessment: PathBuf,
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Defaults to the family feedback recorded on the assessment
    #[arg(long)]
    pub(crate) family_preferences: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct IncidentArgs {
    #[arg(long)]
    pub(crate) assessment: PathBuf,
    #[arg(long)]
    pub(crate) incident_type: String,
    #[arg(long)]
    pub(crate) description: String,
    /// RFC 3339 timestamp (defaults to now)
    #[arg(long)]
    pub(crate) time: Option<String>,
    #[arg(long, default_value = "unknown")]
    pub(crate) location: String,
    #[arg(long = "witness")]
    pub(crate) witnesses: Vec<String>,
}

pub(crate) fn run_evaluate(config: &AppConfig, args: EvaluateArgs) -> Result<(), AppError> {
    let engine = build_engine(&config.rules, args.rules.as_deref())?;
    let assessment = load_assessment(&args.assessment)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    evaluate_assessment(&assessment, &engine, args.format, &mut out)
}

pub(crate) fn evaluate_assessment<W: Write>(
    assessment: &Assessment,
    engine: &RulesEngine,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    warn_on_validation(assessment);
    let report = CarePlanReport::build(assessment, engine);
    info!(
        client_id = %report.client_id,
        triggered = report.triggered_rules.len(),
        risk_level = report.risk_level.label(),
        weekly_hours = report.care_hours.weekly_hours,
        "assessment evaluated"
    );

    match format {
        OutputFormat::Text => render::write_text(&report, out),
        OutputFormat::Json => render::write_json(&report, out),
        OutputFormat::Csv => render::write_csv(&report, out),
    }
}

pub(crate) fn run_rules(config: &AppConfig, args: RulesArgs) -> Result<(), AppError> {
    let engine = build_engine(&config.rules, args.rules.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        render::write_rules_json(engine.rules(), &mut out)
    } else {
        render::write_rules(engine.rules(), &mut out)
    }
}

pub(crate) fn run_handover_prompt(config: &AppConfig, args: HandoverArgs) -> Result<(), AppError> {
    let engine = build_engine(&config.rules, args.rules.as_deref())?;
    let assessment = load_assessment(&args.assessment)?;
    let shift = args
        .shift
        .unwrap_or_else(|| shift_for(Local::now().time()).to_string());

    println!("{}", handover_prompt(&assessment, &engine, &shift)?);
    Ok(())
}

pub(crate) fn handover_prompt(
    assessment: &Assessment,
    engine: &RulesEngine,
    shift: &str,
) -> Result<String, AppError> {
    warn_on_validation(assessment);
    let evaluation = engine.evaluate(assessment);
    let alerts: Vec<String> = assessment
        .active_alerts
        .iter()
        .cloned()
        .chain(evaluation.alerts)
        .collect();
    let setting = assessment
        .setting
        .map(|setting| setting.label())
        .unwrap_or("Unspecified");

    let prompt = build_handover_prompt(&HandoverContext {
        client_id: &assessment.client_id,
        setting,
        shift,
        assessment,
        events: &[],
        alerts: &alerts,
    })?;
    Ok(prompt)
}

pub(crate) fn run_care_plan_prompt(
    config: &AppConfig,
    args: CarePlanPromptArgs,
) -> Result<(), AppError> {
    let engine = build_engine(&config.rules, args.rules.as_deref())?;
    let assessment = load_assessment(&args.assessment)?;

    println!(
        "{}",
        care_plan_prompt(&assessment, &engine, args.family_preferences.as_deref())?
    );
    Ok(())
}

/// Resources are the care-hours estimate; goals are the recommended actions.
pub(crate) fn care_plan_prompt(
    assessment: &Assessment,
    engine: &RulesEngine,
    family_preferences: Option<&str>,
) -> Result<String, AppError> {
    warn_on_validation(assessment);
    let report = CarePlanReport::build(assessment, engine);
    let resources = serde_json::to_value(&report.care_hours)?;
    let goals = report
        .actions
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<Value>, _>>()?;
    let family_preferences = family_preferences
        .or(assessment.family_feedback.as_deref())
        .unwrap_or("");

    let prompt = build_care_plan_prompt(&CarePlanPromptContext {
        client_id: &assessment.client_id,
        assessment,
        family_preferences,
        resources: &resources,
        goals: &goals,
    })?;
    Ok(prompt)
}

pub(crate) fn run_incident_prompt(args: IncidentArgs) -> Result<(), AppError> {
    let assessment = load_assessment(&args.assessment)?;
    let time = args
        .time
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));

    let prompt = build_incident_prompt(&IncidentContext {
        incident_type: &args.incident_type,
        description: &args.description,
        time: &time,
        location: &args.location,
        assessment: &assessment,
        witnesses: &args.witnesses,
    })?;
    println!("{prompt}");
    Ok(())
}
