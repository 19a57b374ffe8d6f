use chrono::{NaiveTime, Timelike};
use matron::assessment::Assessment;
use matron::config::{AppConfig, RulesConfig};
use matron::error::AppError;
use matron::rules::{load_rules_from_path, RulesEngine};
use matron::telemetry;
use matron::validation::validate_assessment;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

pub(crate) fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "matron cli starting");
    Ok(config)
}

/// Core rules (unless disabled), then the configured catalog, then `extra`.
pub(crate) fn build_engine(
    config: &RulesConfig,
    extra: Option<&Path>,
) -> Result<RulesEngine, AppError> {
    let mode = config.catalog_mode();
    let mut engine = if config.include_core {
        RulesEngine::with_core_rules()?
    } else {
        RulesEngine::default()
    };

    for path in config.catalog_path.as_deref().into_iter().chain(extra) {
        for rule in load_rules_from_path(path, mode)? {
            engine.add_rule(rule);
        }
    }

    info!(rules = engine.rules().len(), "rules engine ready");
    Ok(engine)
}

pub(crate) fn load_assessment(path: &Path) -> Result<Assessment, AppError> {
    let file = File::open(path)?;
    let assessment = Assessment::from_reader(BufReader::new(file))?;
    info!(path = %path.display(), client_id = %assessment.client_id, "loaded assessment");
    Ok(assessment)
}

/// Logs validation issues; evaluation carries on regardless.
pub(crate) fn warn_on_validation(assessment: &Assessment) -> usize {
    let issues = validate_assessment(assessment);
    for issue in &issues {
        warn!(assessment_id = %assessment.assessment_id, %issue, "assessment failed validation");
    }
    issues.len()
}

pub(crate) fn shift_for(time: NaiveTime) -> &'static str {
    match time.hour() {
        7..=14 => "day",
        15..=22 => "evening",
        _ => "night",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matron::assessment::sample_assessment;
    use std::io::Write;
    use std::path::PathBuf;

    fn rules_config(include_core: bool, catalog_path: Option<PathBuf>) -> RulesConfig {
        RulesConfig {
            include_core,
            catalog_path,
            strict: true,
        }
    }

    const EXTRA_RULE: &str = r#"[
      {
        "id": "night-wandering",
        "name": "Night Wandering",
        "trigger": {
          "domain": "psychological",
          "field": "subDomains.cognitiveFunction.score",
          "operator": "greater_than",
          "value": 3
        },
        "actions": [{"type": "observation", "text": "Hourly night checks", "priority": "standard"}]
      }
    ]"#;

    #[test]
    fn engine_starts_from_core_rules() {
        let engine = build_engine(&rules_config(true, None), None).expect("engine builds");
        assert_eq!(engine.rules().len(), 5);
    }

    #[test]
    fn configured_and_extra_catalogs_append_after_core() {
        let mut configured = tempfile::NamedTempFile::new().expect("temp file");
        configured.write_all(EXTRA_RULE.as_bytes()).expect("write catalog");
        let mut extra = tempfile::NamedTempFile::new().expect("temp file");
        extra.write_all(EXTRA_RULE.as_bytes()).expect("write catalog");

        let config = rules_config(true, Some(configured.path().to_path_buf()));
        let engine = build_engine(&config, Some(extra.path())).expect("engine builds");

        let ids: Vec<&str> = engine.rules().iter().map(|rule| rule.id.as_str()).collect();
        assert_eq!(ids.len(), 7);
        assert_eq!(ids[5], "night-wandering");
        assert_eq!(ids[6], "night-wandering");
    }

    #[test]
    fn core_rules_can_be_disabled() {
        let engine = build_engine(&rules_config(false, None), None).expect("engine builds");
        assert!(engine.rules().is_empty());
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let config = rules_config(true, Some(PathBuf::from("/nonexistent/matron-rules.json")));
        match build_engine(&config, None) {
            Err(AppError::Rules(_)) => {}
            other => panic!("expected rule catalog error, got {other:?}"),
        }
    }

    #[test]
    fn loads_assessment_from_disk() {
        let assessment = sample_assessment().expect("sample parses");
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        serde_json::to_writer(&mut file, &assessment).expect("write assessment");

        let loaded = load_assessment(file.path()).expect("assessment loads");
        assert_eq!(loaded, assessment);
    }

    #[test]
    fn malformed_assessment_is_a_json_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"{\"clientId\": ").expect("write");

        match load_assessment(file.path()) {
            Err(AppError::Json(_)) => {}
            other => panic!("expected json error, got {other:?}"),
        }
    }

    #[test]
    fn validation_issues_are_counted_not_fatal() {
        let mut assessment = sample_assessment().expect("sample parses");
        assert_eq!(warn_on_validation(&assessment), 0);

        assessment.client_id.clear();
        assessment.assessment_date = None;
        assert_eq!(warn_on_validation(&assessment), 2);
    }

    #[test]
    fn shifts_follow_the_clock() {
        let at = |hour| NaiveTime::from_hms_opt(hour, 30, 0).expect("valid time");
        assert_eq!(shift_for(at(8)), "day");
        assert_eq!(shift_for(at(16)), "evening");
        assert_eq!(shift_for(at(23)), "night");
        assert_eq!(shift_for(at(3)), "night");
    }
}
