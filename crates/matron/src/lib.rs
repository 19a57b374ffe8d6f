//! MATRON (Multidimensional Analysis Tool for Resource-Oriented Needs)
//! care-assessment toolkit.
//!
//! - [`assessment`]: the weighted five-domain assessment record.
//! - [`scoring`]: overall score, risk level and weekly care hours.
//! - [`rules`]: trigger rules compiled against the domain schema and the
//!   engine that evaluates them.
//! - [`care_plan`]: both combined into a care plan.

pub mod assessment;
pub mod care_plan;
pub mod config;
pub mod error;
pub mod prompts;
pub mod rules;
pub mod scoring;
pub mod telemetry;
pub mod validation;

pub use assessment::{sample_assessment, Assessment, DomainKind};
pub use care_plan::{generate_care_plan, CarePlan, CarePlanReport};
pub use error::AppError;
pub use rules::{Evaluation, RulesEngine, TriggerRule};
pub use scoring::RiskLevel;

/// MATRON framework version implemented by this crate.
pub const MATRON_VERSION: &str = "1.0";
