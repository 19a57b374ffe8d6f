//! Rule catalogs: the built-in core rules and organisation-specific JSON files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{info, warn};

use super::condition::RuleError;
use super::definition::RuleDefinition;
use super::rule::TriggerRule;

const CORE_RULES: &str = include_str!("../../resources/core_rules.json");

#[derive(Debug, thiserror::Error)]
pub enum RuleCatalogError {
    #[error("failed to read rule catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("rule catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rule '{id}' is misconfigured: {source}")]
    Rule {
        id: String,
        #[source]
        source: RuleError,
    },
}

/// How a catalog treats rules that fail to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogMode {
    /// The first misconfigured rule fails the whole catalog.
    #[default]
    Strict,
    /// Misconfigured rules are logged and skipped.
    Lenient,
}

/// The five built-in MATRON rules.
pub fn core_rules() -> Result<Vec<TriggerRule>, RuleCatalogError> {
    load_rules(CORE_RULES.as_bytes(), CatalogMode::Strict)
}

pub fn load_rules<R: Read>(
    reader: R,
    mode: CatalogMode,
) -> Result<Vec<TriggerRule>, RuleCatalogError> {
    let definitions: Vec<RuleDefinition> = serde_json::from_reader(reader)?;
    compile_definitions(definitions, mode)
}

pub fn load_rules_from_path(
    path: impl AsRef<Path>,
    mode: CatalogMode,
) -> Result<Vec<TriggerRule>, RuleCatalogError> {
    let file = File::open(path.as_ref())?;
    let rules = load_rules(BufReader::new(file), mode)?;
    info!(path = %path.as_ref().display(), rules = rules.len(), "loaded rule catalog file");
    Ok(rules)
}

pub fn compile_definitions(
    definitions: Vec<RuleDefinition>,
    mode: CatalogMode,
) -> Result<Vec<TriggerRule>, RuleCatalogError> {
    let total = definitions.len();
    let mut rules = Vec::with_capacity(total);

    for definition in definitions {
        let id = definition.id.clone();
        match TriggerRule::try_from(definition) {
            Ok(rule) => rules.push(rule),
            Err(source) => match mode {
                CatalogMode::Strict => return Err(RuleCatalogError::Rule { id, source }),
                CatalogMode::Lenient => {
                    warn!(rule_id = %id, error = %source, "skipping misconfigured rule");
                }
            },
        }
    }

    info!(compiled = rules.len(), skipped = total - rules.len(), ?mode, "compiled rule catalog");
    Ok(rules)
}

/// Serializes rules back to catalog JSON.
pub fn to_catalog_json(rules: &[TriggerRule]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rules)
}
