use serde::{Deserialize, Serialize};

use super::{overall_score, round_to_places};
use crate::assessment::{Assessment, ClinicalTriggers};

/// Upper bound on the base estimate: every hour of the week.
pub const MAX_WEEKLY_HOURS: f64 = 168.0;
/// Weekly hours per point of overall score.
pub const HOURS_PER_SCORE_POINT: f64 = 8.0;
/// Age from which the base estimate starts to scale up.
pub const REFERENCE_AGE: f64 = 75.0;

/// Multiplier applied after the base estimate when a clinical flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareHoursAdjustment {
    ClinicallyComplex,
    WanderingRisk,
    HighAdlDependency,
    EndOfLifePlanning,
}

impl CareHoursAdjustment {
    /// Flags in the order their multipliers are applied.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::ClinicallyComplex,
            Self::WanderingRisk,
            Self::HighAdlDependency,
            Self::EndOfLifePlanning,
        ]
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::ClinicallyComplex => 1.3,
            Self::WanderingRisk => 1.2,
            Self::HighAdlDependency => 1.4,
            Self::EndOfLifePlanning => 1.5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ClinicallyComplex => "clinically complex",
            Self::WanderingRisk => "wandering risk",
            Self::HighAdlDependency => "high ADL dependency",
            Self::EndOfLifePlanning => "end of life planning",
        }
    }

    fn applies(self, triggers: &ClinicalTriggers) -> bool {
        match self {
            Self::ClinicallyComplex => triggers.clinically_complex,
            Self::WanderingRisk => triggers.wandering_risk,
            Self::HighAdlDependency => triggers.high_adl_dependency,
            Self::EndOfLifePlanning => triggers.end_of_life_planning,
        }
    }
}

/// Weekly care-hours figure together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareHoursEstimate {
    pub overall_score: f64,
    pub age_factor: f64,
    /// Base hours after the weekly cap, before adjustments.
    pub base_hours: f64,
    pub adjustments: Vec<CareHoursAdjustment>,
    pub weekly_hours: f64,
}

impl CareHoursEstimate {
    pub fn for_assessment(assessment: &Assessment) -> Self {
        let overall_score = overall_score(assessment);
        let age_factor = age_factor(assessment.age);
        let base_hours = (overall_score * HOURS_PER_SCORE_POINT * age_factor).min(MAX_WEEKLY_HOURS);

        let adjustments: Vec<CareHoursAdjustment> = CareHoursAdjustment::ordered()
            .into_iter()
            .filter(|adjustment| adjustment.applies(&assessment.triggers))
            .collect();

        // Adjustments may push the figure past the weekly cap.
        let adjusted = adjustments
            .iter()
            .fold(base_hours, |hours, adjustment| hours * adjustment.multiplier());

        Self {
            overall_score,
            age_factor,
            base_hours,
            adjustments,
            weekly_hours: round_to_places(adjusted, 2),
        }
    }
}

fn age_factor(age: Option<f64>) -> f64 {
    age.map_or(1.0, |age| (age / REFERENCE_AGE).max(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_factor_never_drops_below_one() {
        assert_eq!(age_factor(None), 1.0);
        assert_eq!(age_factor(Some(60.0)), 1.0);
        assert!((age_factor(Some(90.0)) - 1.2).abs() < 1e-9);
    }

    #[test]
    fn adjustments_follow_flag_order() {
        let triggers = ClinicalTriggers {
            end_of_life_planning: true,
            clinically_complex: true,
            ..ClinicalTriggers::default()
        };
        let applied: Vec<_> = CareHoursAdjustment::ordered()
            .into_iter()
            .filter(|adjustment| adjustment.applies(&triggers))
            .collect();
        assert_eq!(
            applied,
            vec![
                CareHoursAdjustment::ClinicallyComplex,
                CareHoursAdjustment::EndOfLifePlanning
            ]
        );
    }
}
