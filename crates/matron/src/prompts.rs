//! Prompt templates for language-model assistants working with MATRON data.
//!
//! Placeholders use `{{name}}`. The fixed builders substitute the first
//! occurrence of each placeholder; [`build_custom_prompt`] substitutes all.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::assessment::Assessment;

macro_rules! base_context {
    () => {
        "
You are a clinical assessment AI assistant using the MATRON (Multidimensional Analysis Tool for Resource-Oriented Needs) framework.

MATRON Framework:
- Biological Domain (35%): Medical history, current health, physical dependencies
- Psychological Domain (25%): Mental health, cognitive function, emotional needs
- Social Domain (20%): Living conditions, family support, social networks
- Clinical Domain (15%): Nursing interventions, wound care, medication management
- Safety/Resource Domain (5%): Environment safety, falls risk, resource availability

Scoring Scale: 0 (No issues) -> 5 (Critical/Complete dependence)

Your responses should be:
- Clinical and professional in tone
- Evidence-based and person-centered
- Focused on practical care planning
- Aligned with nursing best practices
"
    };
}

pub const BASE_CONTEXT: &str = base_context!();

pub const HANDOVER_TEMPLATE: &str = concat!(
    "\n",
    base_context!(),
    r#"
Generate a concise handover summary for:

<handover_context>
{
  "client_id": "{{clientId}}",
  "setting": "{{setting}}",
  "shift": "{{shift}}",
  "assessment_data": {{assessmentJson}},
  "recent_events": {{eventsJson}},
  "active_alerts": {{alertsJson}}
}
</handover_context>

Focus on:
1. Key changes since last assessment
2. Priority actions for incoming staff
3. Safety concerns and alerts
4. Patient/family preferences
5. Upcoming appointments or reviews

Format as structured handover with clear action items.
"#
);

pub const INCIDENT_ANALYSIS_TEMPLATE: &str = concat!(
    "\n",
    base_context!(),
    r#"
Analyze this incident using MATRON framework:

<incident_context>
{
  "incident_type": "{{incidentType}}",
  "description": "{{incidentDescription}}",
  "time": "{{incidentTime}}",
  "location": "{{location}}",
  "client_context": {{assessmentJson}},
  "witnesses": {{witnessesJson}}
}
</incident_context>

Provide:
1. Probable causes (mapped to MATRON domains)
2. Contributing factors analysis
3. Immediate actions required
4. Prevention strategies
5. Care plan modifications needed
6. Risk level reassessment

Output in structured format with clear recommendations.
"#
);

pub const CARE_PLANNING_TEMPLATE: &str = concat!(
    "\n",
    base_context!(),
    r#"
Generate comprehensive care plan based on MATRON assessment:

<care_planning_context>
{
  "client_id": "{{clientId}}",
  "assessment": {{assessmentJson}},
  "family_preferences": "{{familyPreferences}}",
  "resource_constraints": {{resourcesJson}},
  "goals": {{goalsJson}}
}
</care_planning_context>

Generate:
1. Domain-specific interventions
2. SMART goals for each priority area
3. Resource allocation recommendations
4. Monitoring and review schedule
5. Family/caregiver tasks
6. Risk mitigation strategies

Prioritize based on urgency and impact.
"#
);

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("failed to serialize prompt payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct HandoverContext<'a> {
    pub client_id: &'a str,
    pub setting: &'a str,
    pub shift: &'a str,
    pub assessment: &'a Assessment,
    pub events: &'a [Value],
    pub alerts: &'a [String],
}

#[derive(Debug, Clone)]
pub struct IncidentContext<'a> {
    pub incident_type: &'a str,
    pub description: &'a str,
    pub time: &'a str,
    pub location: &'a str,
    pub assessment: &'a Assessment,
    pub witnesses: &'a [String],
}

#[derive(Debug, Clone)]
pub struct CarePlanPromptContext<'a> {
    pub client_id: &'a str,
    pub assessment: &'a Assessment,
    pub family_preferences: &'a str,
    pub resources: &'a Value,
    pub goals: &'a [Value],
}

pub fn build_handover_prompt(context: &HandoverContext<'_>) -> Result<String, PromptError> {
    Ok(HANDOVER_TEMPLATE
        .replacen("{{clientId}}", context.client_id, 1)
        .replacen("{{setting}}", context.setting, 1)
        .replacen("{{shift}}", context.shift, 1)
        .replacen("{{assessmentJson}}", &pretty(context.assessment)?, 1)
        .replacen("{{eventsJson}}", &pretty(context.events)?, 1)
        .replacen("{{alertsJson}}", &pretty(context.alerts)?, 1))
}

pub fn build_incident_prompt(context: &IncidentContext<'_>) -> Result<String, PromptError> {
    Ok(INCIDENT_ANALYSIS_TEMPLATE
        .replacen("{{incidentType}}", context.incident_type, 1)
        .replacen("{{incidentDescription}}", context.description, 1)
        .replacen("{{incidentTime}}", context.time, 1)
        .replacen("{{location}}", context.location, 1)
        .replacen("{{assessmentJson}}", &pretty(context.assessment)?, 1)
        .replacen("{{witnessesJson}}", &pretty(context.witnesses)?, 1))
}

pub fn build_care_plan_prompt(context: &CarePlanPromptContext<'_>) -> Result<String, PromptError> {
    Ok(CARE_PLANNING_TEMPLATE
        .replacen("{{clientId}}", context.client_id, 1)
        .replacen("{{assessmentJson}}", &pretty(context.assessment)?, 1)
        .replacen("{{familyPreferences}}", context.family_preferences, 1)
        .replacen("{{resourcesJson}}", &pretty(context.resources)?, 1)
        .replacen("{{goalsJson}}", &pretty(context.goals)?, 1))
}

/// Substitutes every `{{key}}` occurrence. Strings are inserted verbatim,
/// arrays and objects as pretty JSON, other scalars in their JSON form.
pub fn build_custom_prompt(
    template: &str,
    variables: &Map<String, Value>,
) -> Result<String, PromptError> {
    let mut prompt = template.to_string();
    for (key, value) in variables {
        let replacement = match value {
            Value::String(text) => text.clone(),
            Value::Array(_) | Value::Object(_) => serde_json::to_string_pretty(value)?,
            scalar => scalar.to_string(),
        };
        prompt = prompt.replace(&format!("{{{{{key}}}}}"), &replacement);
    }
    Ok(prompt)
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
