//! Organisation-specific rule catalogs loaded from disk alongside the
//! built-in rules.

use std::io::Write;

use matron::assessment::sample_assessment;
use matron::rules::{
    core_rules, load_rules_from_path, to_catalog_json, CatalogMode, RuleCatalogError, RuleError,
    RulesEngine,
};

const ORGANISATION_CATALOG: &str = r#"[
    {
        "id": "diabetes-review",
        "name": "Diabetes Annual Review",
        "description": "Diabetic clients need an annual foot and eye review",
        "trigger": {
            "domain": "biological",
            "field": "subDomains.medicalHistory.conditions",
            "operator": "contains",
            "value": "diabetes"
        },
        "actions": [
            {
                "type": "referral",
                "text": "Book podiatry review",
                "priority": "routine",
                "role": "nurse"
            },
            {
                "type": "task",
                "text": "Arrange retinal screening",
                "priority": "routine",
                "due_date": "2025-09-30"
            }
        ],
        "escalation": "low"
    },
    {
        "id": "regimen-threshold",
        "name": "Misconfigured rule",
        "trigger": {
            "domain": "clinical",
            "field": "subDomains.medicationManagement.regimen_complexity",
            "operator": "greater_than",
            "value": 2
        },
        "actions": []
    }
]"#;

fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write catalog");
    file
}

#[test]
fn strict_catalog_refuses_misconfigured_rules() {
    let file = catalog_file(ORGANISATION_CATALOG);

    match load_rules_from_path(file.path(), CatalogMode::Strict) {
        Err(RuleCatalogError::Rule { id, source }) => {
            assert_eq!(id, "regimen-threshold");
            assert!(matches!(source, RuleError::Incompatible { .. }));
        }
        other => panic!("expected rule error, got {other:?}"),
    }
}

#[test]
fn lenient_catalog_extends_the_core_rules() {
    let file = catalog_file(ORGANISATION_CATALOG);
    let extra = load_rules_from_path(file.path(), CatalogMode::Lenient).expect("lenient load");

    let mut engine = RulesEngine::with_core_rules().expect("core rules compile");
    for rule in extra {
        engine.add_rule(rule);
    }

    let evaluation = engine.evaluate(&sample_assessment().expect("sample parses"));

    assert_eq!(evaluation.triggered_ids(), vec!["diabetes-review"]);
    assert_eq!(evaluation.recommended_actions.len(), 2);
    assert!(evaluation.alerts.is_empty());
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("rules.json");

    assert!(matches!(
        load_rules_from_path(&missing, CatalogMode::Strict),
        Err(RuleCatalogError::Io(_))
    ));
}

#[test]
fn core_catalog_round_trips_through_json() {
    let rules = core_rules().expect("core rules compile");
    let json = to_catalog_json(&rules).expect("serialize catalog");
    let file = catalog_file(&json);

    let reloaded = load_rules_from_path(file.path(), CatalogMode::Strict).expect("reload");

    assert_eq!(reloaded, rules);
}
